use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_scalar_constructors() {
    assert_eq!(
        SymType::scalar(),
        SymType::Scalar {
            is_const: false,
            value: 0
        }
    );
    assert_eq!(
        SymType::const_scalar(7),
        SymType::Scalar {
            is_const: true,
            value: 7
        }
    );
}

#[test]
fn test_const_value() {
    assert_eq!(SymType::const_scalar(7).const_value(), Some(7));
    assert_eq!(SymType::scalar().const_value(), None);
    assert_eq!(SymType::array(&[2], true).const_value(), None);
}

#[test]
fn test_array_chain_shape() {
    let ty = SymType::array(&[2, 3], false);
    let SymType::Array {
        is_const,
        size,
        next,
    } = ty
    else {
        panic!("expected outer dimension");
    };
    assert!(!is_const);
    assert_eq!(size, 2);

    let SymType::Array { size, next, .. } = *next else {
        panic!("expected inner dimension");
    };
    assert_eq!(size, 3);
    assert_eq!(
        *next,
        SymType::Scalar {
            is_const: false,
            value: 0
        }
    );
}

#[test]
fn test_const_array_leaf_matches_constness() {
    let ty = SymType::array(&[4], true);
    assert!(ty.is_const());
    let SymType::Array { next, .. } = ty else {
        panic!("expected array");
    };
    assert_eq!(
        *next,
        SymType::Scalar {
            is_const: true,
            value: 0
        }
    );
}

#[test]
fn test_dims_extraction() {
    assert_eq!(SymType::array(&[2, 3, 4], false).dims().to_vec(), vec![2, 3, 4]);
    assert_eq!(SymType::array(&[10], true).dims().to_vec(), vec![10]);
    assert_eq!(SymType::scalar().dims().to_vec(), Vec::<i32>::new());
    assert_eq!(
        SymType::Function(ReturnKind::Void).dims().to_vec(),
        Vec::<i32>::new()
    );
}

#[test]
fn test_decayed_first_dimension() {
    let ty = SymType::array(&[-1, 8], false);
    assert_eq!(ty.dims().to_vec(), vec![-1, 8]);
}

#[test]
fn test_function_kind() {
    assert!(SymType::Function(ReturnKind::Void).is_function());
    assert!(!SymType::Function(ReturnKind::Void).is_const());
    assert_eq!(
        SymType::Function(ReturnKind::Int).return_kind(),
        Some(ReturnKind::Int)
    );
    assert_eq!(SymType::scalar().return_kind(), None);
}
