//! Errors surfaced by declaration and resolution.

use thiserror::Error;

/// Error produced by scope and symbol bookkeeping.
///
/// Every operation is deterministic: it either succeeds or reports one of
/// these, and nothing is retried internally. `DuplicateDeclaration` and
/// `UndeclaredIdentifier` describe malformed source and are the caller's
/// to diagnose. `EmptyScopeStack` means the caller's own enter/exit
/// pairing is broken and should abort the front end.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The identifier is already bound in the innermost open scope.
    #[error("duplicate declaration of `{0}` in the same scope")]
    DuplicateDeclaration(String),

    /// No open scope binds the identifier.
    #[error("use of undeclared identifier `{0}`")]
    UndeclaredIdentifier(String),

    /// A scope was exited, or a declaration attempted, with no scope open.
    #[error("no open scope")]
    EmptyScopeStack,
}
