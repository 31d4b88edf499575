//! The scope stack: the single object the parser and emitter talk to.
//!
//! The parser pushes a scope per block, declares into the innermost
//! scope, and resolves references innermost-to-outermost. The emitter
//! uses the same stack to mint temporaries and labels for the function
//! it is lowering.

use crate::error::SymbolError;
use crate::namegen::{NameAllocator, NAMED_SIGIL};
use crate::table::{ScopeTable, Symbol};
use crate::ty::{ReturnKind, SymType};

/// Stack of lexical scopes plus the unit's name allocator.
///
/// Starts with no open scope; callers enter the global scope first.
/// Scope entry and exit must pair on every control path, including error
/// paths. [`ScopeStack::with_scope`] does the pairing automatically and
/// is preferred over manual `enter_scope`/`exit_scope`.
#[derive(Debug, Default)]
pub struct ScopeStack {
    tables: Vec<ScopeTable>,
    names: NameAllocator,
}

impl ScopeStack {
    /// Create a stack with no open scopes.
    pub fn new() -> Self {
        ScopeStack::default()
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.tables.len()
    }

    /// Open a new innermost scope.
    pub fn enter_scope(&mut self) {
        self.tables.push(ScopeTable::new());
        tracing::trace!(depth = self.tables.len(), "enter scope");
    }

    /// Close the innermost scope, dropping its bindings.
    ///
    /// `EmptyScopeStack` here means the caller's enter/exit pairing is
    /// broken; treat it as fatal.
    pub fn exit_scope(&mut self) -> Result<(), SymbolError> {
        match self.tables.pop() {
            Some(_) => {
                tracing::trace!(depth = self.tables.len(), "exit scope");
                Ok(())
            }
            None => Err(SymbolError::EmptyScopeStack),
        }
    }

    /// Run `f` inside a fresh scope, closing it on the way out.
    ///
    /// The scope is closed whatever `f` returns, so early `?` returns
    /// inside the closure cannot unbalance the stack.
    pub fn with_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.enter_scope();
        let result = f(self);
        // Balanced closures leave the scope opened above on top; pop it.
        let _ = self.exit_scope();
        result
    }

    /// Declare a scalar in the innermost scope and return its emitted name.
    ///
    /// `value` is the folded constant for `is_const` declarations and is
    /// ignored otherwise.
    pub fn declare_scalar(
        &mut self,
        ident: &str,
        is_const: bool,
        value: i32,
    ) -> Result<String, SymbolError> {
        let ty = if is_const {
            SymType::const_scalar(value)
        } else {
            SymType::scalar()
        };
        self.declare(ident, ty)
    }

    /// Declare an array in the innermost scope and return its emitted name.
    ///
    /// `dims` lists sizes outermost first; a leading -1 marks an array
    /// received as a parameter (decayed pointer).
    pub fn declare_array(
        &mut self,
        ident: &str,
        dims: &[i32],
        is_const: bool,
    ) -> Result<String, SymbolError> {
        self.declare(ident, SymType::array(dims, is_const))
    }

    /// Declare a function in the innermost scope and return its emitted name.
    ///
    /// Function names are never decorated: the source language forbids
    /// function shadowing, so the undecorated form is already unique.
    /// Callers conventionally declare functions in the global scope.
    pub fn declare_function(
        &mut self,
        ident: &str,
        returns: ReturnKind,
    ) -> Result<String, SymbolError> {
        let table = self
            .tables
            .last_mut()
            .ok_or(SymbolError::EmptyScopeStack)?;
        let name = format!("{NAMED_SIGIL}{ident}");
        table.declare(ident, Symbol::new(name.clone(), SymType::Function(returns)))?;
        Ok(name)
    }

    /// Shared declaration path: duplicate check, then mint, then insert.
    ///
    /// The checks run before any name is minted, so a rejected
    /// declaration consumes no suffix.
    fn declare(&mut self, ident: &str, ty: SymType) -> Result<String, SymbolError> {
        let table = self
            .tables
            .last_mut()
            .ok_or(SymbolError::EmptyScopeStack)?;
        if table.contains(ident) {
            return Err(SymbolError::DuplicateDeclaration(ident.to_string()));
        }
        let name = self.names.var(ident);
        table.declare(ident, Symbol::new(name.clone(), ty))?;
        Ok(name)
    }

    /// Resolve `ident` against the open scopes, innermost first.
    pub fn lookup(&self, ident: &str) -> Result<&Symbol, SymbolError> {
        self.tables
            .iter()
            .rev()
            .find_map(|table| table.lookup(ident))
            .ok_or_else(|| SymbolError::UndeclaredIdentifier(ident.to_string()))
    }

    /// Whether any open scope binds `ident`.
    pub fn exists(&self, ident: &str) -> bool {
        self.tables.iter().rev().any(|table| table.contains(ident))
    }

    /// Emitted name of `ident`'s current binding.
    pub fn name_of(&self, ident: &str) -> Result<&str, SymbolError> {
        Ok(self.lookup(ident)?.name.as_str())
    }

    /// Type of `ident`'s current binding.
    pub fn type_of(&self, ident: &str) -> Result<&SymType, SymbolError> {
        Ok(&self.lookup(ident)?.ty)
    }

    /// Folded constant value of `ident`'s current binding.
    ///
    /// `Some` only for const scalar bindings.
    pub fn value_of(&self, ident: &str) -> Result<Option<i32>, SymbolError> {
        Ok(self.lookup(ident)?.ty.const_value())
    }

    /// Next temporary name for the current function.
    pub fn fresh_temp(&mut self) -> String {
        self.names.temp()
    }

    /// Decorated name for `ident` without creating a binding.
    ///
    /// The parser uses this for function parameters: the incoming
    /// parameter value is named here, and a following `declare_scalar`
    /// on the same text names the local slot it is stored into.
    pub fn fresh_var(&mut self, ident: &str) -> String {
        self.names.var(ident)
    }

    /// Next label name for `base`.
    pub fn fresh_label(&mut self, base: &str) -> String {
        self.names.label(base)
    }

    /// Restart temporary numbering for a new function body.
    ///
    /// Variable and label counts are untouched; they must stay unique
    /// across the whole unit.
    pub fn reset_naming(&mut self) {
        self.names.reset_temps();
        tracing::trace!("reset temporary numbering");
    }
}
