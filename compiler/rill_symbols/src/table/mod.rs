//! Per-scope symbol bindings.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::error::SymbolError;
use crate::ty::SymType;

/// A declared binding: the name it was emitted under and its type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// Globally unique emitted name (`@x`, `@x_1`, ...).
    pub name: String,
    /// Type of the binding.
    pub ty: SymType,
}

impl Symbol {
    /// Create a symbol from its emitted name and type.
    pub fn new(name: impl Into<String>, ty: SymType) -> Self {
        Symbol {
            name: name.into(),
            ty,
        }
    }
}

/// Bindings of a single lexical scope.
///
/// Owns its symbols; dropping the table drops them. Lookup never searches
/// enclosing scopes, that is [`ScopeStack`](crate::ScopeStack)'s job.
#[derive(Clone, Debug, Default)]
pub struct ScopeTable {
    symbols: FxHashMap<String, Symbol>,
}

impl ScopeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        ScopeTable::default()
    }

    /// Bind `ident` to `symbol` in this scope.
    ///
    /// Fails if `ident` is already bound here; the existing binding is
    /// left untouched.
    pub fn declare(&mut self, ident: &str, symbol: Symbol) -> Result<(), SymbolError> {
        match self.symbols.entry(ident.to_string()) {
            Entry::Occupied(_) => Err(SymbolError::DuplicateDeclaration(ident.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(symbol);
                Ok(())
            }
        }
    }

    /// Look up `ident` in this scope only.
    #[inline]
    pub fn lookup(&self, ident: &str) -> Option<&Symbol> {
        self.symbols.get(ident)
    }

    /// Whether `ident` is bound in this scope.
    #[inline]
    pub fn contains(&self, ident: &str) -> bool {
        self.symbols.contains_key(ident)
    }

    /// Number of bindings in this scope.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether this scope has no bindings.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
