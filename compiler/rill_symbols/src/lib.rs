//! Rill Symbols - symbol resolution and IR naming for the Rill compiler.
//!
//! Source-level identifiers can shadow across nested scopes and repeat
//! across sibling scopes; the flat IR namespace allows neither. This
//! crate answers "what does this identifier mean right now" during the
//! front end's single forward pass, and derives a globally unique
//! emitted name for every binding from its declaration history.
//!
//! # Architecture
//!
//! - [`SymType`]: recursive type descriptor (scalars, array dimension
//!   chains, function return kinds)
//! - [`Symbol`] / [`ScopeTable`]: one scope's bindings, exclusively owned
//! - [`NameAllocator`]: deterministic temporary/variable/label naming
//! - [`ScopeStack`]: the single object the parser and emitter talk to
//!
//! # Example
//!
//! ```
//! use rill_symbols::ScopeStack;
//!
//! let mut scopes = ScopeStack::new();
//! scopes.enter_scope();
//! assert_eq!(scopes.declare_scalar("a", false, 0)?, "@a");
//! scopes.enter_scope();
//! assert_eq!(scopes.declare_scalar("a", false, 0)?, "@a_1");
//! assert_eq!(scopes.name_of("a")?, "@a_1");
//! scopes.exit_scope()?;
//! assert_eq!(scopes.name_of("a")?, "@a");
//! # Ok::<(), rill_symbols::SymbolError>(())
//! ```

mod error;
mod namegen;
mod stack;
mod table;
mod ty;

pub use error::SymbolError;
pub use namegen::{NameAllocator, NAMED_SIGIL, SEPARATOR, TEMP_SIGIL};
pub use stack::ScopeStack;
pub use table::{ScopeTable, Symbol};
pub use ty::{Dims, ReturnKind, SymType};
