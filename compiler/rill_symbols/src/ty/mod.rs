//! Type descriptors for declared symbols.
//!
//! Array types form an owned chain with one node per dimension,
//! terminated by a scalar leaf whose constness matches the array's.

use smallvec::SmallVec;

/// Dimension sizes, outermost first.
///
/// Inline storage covers the usual one-to-four dimensions without a heap
/// allocation.
pub type Dims = SmallVec<[i32; 4]>;

/// Return kind of a function symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnKind {
    /// `void` function.
    Void,
    /// `int` function.
    Int,
}

/// Type of a declared symbol, as tracked for IR emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymType {
    /// Scalar binding. `value` holds the folded constant for const
    /// bindings and is unused (zero) for mutable ones.
    Scalar {
        /// Whether the binding is a compile-time constant.
        is_const: bool,
        /// Folded constant value; meaningful only when `is_const`.
        value: i32,
    },
    /// One array dimension. `size` is this level's extent and `next`
    /// descends toward the scalar element. A first-dimension size of -1
    /// marks an array received as a parameter (decayed pointer) and
    /// carries no storage meaning.
    Array {
        /// Whether the whole array is a compile-time constant.
        is_const: bool,
        /// Extent of this dimension.
        size: i32,
        /// The next level of the chain.
        next: Box<SymType>,
    },
    /// Function symbol with its return kind.
    Function(ReturnKind),
}

impl SymType {
    /// Mutable scalar.
    pub fn scalar() -> Self {
        SymType::Scalar {
            is_const: false,
            value: 0,
        }
    }

    /// Constant scalar with its folded value.
    pub fn const_scalar(value: i32) -> Self {
        SymType::Scalar {
            is_const: true,
            value,
        }
    }

    /// Build an array chain from dimension sizes, outermost first.
    ///
    /// The chain terminates in a scalar leaf of matching constness.
    /// `dims` must be non-empty.
    pub fn array(dims: &[i32], is_const: bool) -> Self {
        debug_assert!(!dims.is_empty(), "array type needs at least one dimension");
        let leaf = SymType::Scalar { is_const, value: 0 };
        dims.iter().rev().fold(leaf, |next, &size| SymType::Array {
            is_const,
            size,
            next: Box::new(next),
        })
    }

    /// Ordered dimension sizes, stopping at the first scalar node.
    ///
    /// Empty for scalars and functions.
    pub fn dims(&self) -> Dims {
        let mut out = Dims::new();
        let mut node = self;
        while let SymType::Array { size, next, .. } = node {
            out.push(*size);
            node = next;
        }
        out
    }

    /// Whether this binding is a compile-time constant.
    pub fn is_const(&self) -> bool {
        match self {
            SymType::Scalar { is_const, .. } | SymType::Array { is_const, .. } => *is_const,
            SymType::Function(_) => false,
        }
    }

    /// Folded value of a const scalar, `None` otherwise.
    pub fn const_value(&self) -> Option<i32> {
        match self {
            SymType::Scalar {
                is_const: true,
                value,
            } => Some(*value),
            _ => None,
        }
    }

    /// Return kind, for function symbols.
    pub fn return_kind(&self) -> Option<ReturnKind> {
        match self {
            SymType::Function(returns) => Some(*returns),
            _ => None,
        }
    }

    /// Whether this is a function symbol.
    pub fn is_function(&self) -> bool {
        matches!(self, SymType::Function(_))
    }
}

#[cfg(test)]
mod tests;
