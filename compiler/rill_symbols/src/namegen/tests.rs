use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_temps_are_monotonic() {
    let mut names = NameAllocator::new();
    assert_eq!(names.temp(), "%0");
    assert_eq!(names.temp(), "%1");
    assert_eq!(names.temp(), "%2");
}

#[test]
fn test_reset_restarts_temps_only() {
    let mut names = NameAllocator::new();
    let _ = names.temp();
    let _ = names.temp();
    let _ = names.var("x");
    names.reset_temps();
    assert_eq!(names.temp(), "%0");
    // Variable counts survive the reset.
    assert_eq!(names.var("x"), "@x_1");
}

#[test]
fn test_first_var_is_undecorated() {
    let mut names = NameAllocator::new();
    assert_eq!(names.var("x"), "@x");
    assert_eq!(names.var("x"), "@x_1");
    assert_eq!(names.var("x"), "@x_2");
    assert_eq!(names.var("y"), "@y");
}

#[test]
fn test_first_label_is_decorated() {
    let mut names = NameAllocator::new();
    assert_eq!(names.label("then"), "%then_1");
    assert_eq!(names.label("then"), "%then_2");
    assert_eq!(names.label("else"), "%else_1");
}

#[test]
fn test_var_and_label_counts_are_independent() {
    let mut names = NameAllocator::new();
    assert_eq!(names.var("end"), "@end");
    assert_eq!(names.label("end"), "%end_1");
    assert_eq!(names.var("end"), "@end_1");
    assert_eq!(names.label("end"), "%end_2");
}

#[test]
fn test_sigils_match_emitter_contract() {
    assert_eq!(NAMED_SIGIL, '@');
    assert_eq!(TEMP_SIGIL, '%');
    assert_eq!(SEPARATOR, '_');
}

mod uniqueness {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::super::NameAllocator;

    proptest! {
        #[test]
        fn minted_names_never_collide(
            idents in proptest::collection::vec(
                prop_oneof![
                    Just("x"),
                    Just("y"),
                    Just("z"),
                    Just("then"),
                    Just("end"),
                ],
                1..64,
            )
        ) {
            let mut names = NameAllocator::new();
            let mut seen = HashSet::new();
            for ident in &idents {
                prop_assert!(seen.insert(names.var(ident)), "variable name repeated");
            }
            for ident in &idents {
                prop_assert!(seen.insert(names.label(ident)), "label name repeated");
            }
        }
    }
}
