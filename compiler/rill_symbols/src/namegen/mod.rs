//! Deterministic name generation for the flat IR namespace.
//!
//! Source scoping allows identifier reuse; the IR namespace does not.
//! Emitted names are therefore derived from the declaration history: the
//! first declaration of a given text keeps the undecorated form, later
//! ones get a numeric suffix. Counts persist for the whole compilation
//! unit so names stay unique across functions.

use rustc_hash::FxHashMap;

// The sigils and separator are shared with the IR emitter and change
// only in lockstep with it.

/// Prefix of source-derived variable, global, and function names.
pub const NAMED_SIGIL: char = '@';

/// Prefix of temporaries and labels.
pub const TEMP_SIGIL: char = '%';

/// Separator before a numeric suffix.
pub const SEPARATOR: char = '_';

/// Allocator for emitted names, scoped to one compilation unit.
///
/// The temporary counter restarts at every function boundary via
/// [`NameAllocator::reset_temps`]; the declaration counts never do.
#[derive(Debug, Default)]
pub struct NameAllocator {
    /// Next temporary index for the current function.
    temps: u32,
    /// Prior declaration count per variable text.
    vars: FxHashMap<String, u32>,
    /// Prior request count per label base.
    labels: FxHashMap<String, u32>,
}

impl NameAllocator {
    /// Create an allocator with all counters at zero.
    pub fn new() -> Self {
        NameAllocator::default()
    }

    /// Restart the temporary counter for a new function body.
    pub fn reset_temps(&mut self) {
        self.temps = 0;
    }

    /// Next temporary name: `%0`, `%1`, ...
    ///
    /// Temporaries never collide with source-derived names; the sigil
    /// keeps the namespaces disjoint.
    #[inline]
    pub fn temp(&mut self) -> String {
        let n = self.temps;
        self.temps += 1;
        format!("{TEMP_SIGIL}{n}")
    }

    /// Emitted name for the variable text `ident`.
    ///
    /// The first request for a given text returns the undecorated
    /// `@ident`; every later request for the same text appends an
    /// incremented suffix (`@ident_1`, `@ident_2`, ...), regardless of
    /// which scopes the declarations live in.
    pub fn var(&mut self, ident: &str) -> String {
        match self.vars.get_mut(ident) {
            None => {
                self.vars.insert(ident.to_string(), 0);
                format!("{NAMED_SIGIL}{ident}")
            }
            Some(count) => {
                *count += 1;
                format!("{NAMED_SIGIL}{ident}{SEPARATOR}{count}")
            }
        }
    }

    /// Emitted name for a label with base text `base`.
    ///
    /// Labels are always decorated, starting at `%base_1`. Bases come
    /// from control keywords ("then", "else", "end") and repeat across
    /// the unit, so an undecorated first label would collide with the
    /// decorated namespace.
    pub fn label(&mut self, base: &str) -> String {
        let count = self
            .labels
            .entry(base.to_string())
            .and_modify(|n| *n += 1)
            .or_insert(1);
        format!("{TEMP_SIGIL}{base}{SEPARATOR}{count}")
    }
}

#[cfg(test)]
mod tests;
