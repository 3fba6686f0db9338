//! Mutant candidate descriptors.

use super::value::NativeFn;

/// One simulated defect: a replacement implementation for a named symbol.
///
/// Constructed once per run and read-only afterwards. The replacement is
/// not required to match the original's signature; an incompatible one
/// shows up as an invocation error while tests run, which counts as a kill.
#[derive(Clone)]
pub struct MutantCandidate {
    label: String,
    target_symbol: String,
    replacement: NativeFn,
    equivalent: bool,
}

impl MutantCandidate {
    /// Describe a mutant: a display label, the symbol it replaces, and the
    /// replacement implementation.
    pub fn new(
        label: impl Into<String>,
        target_symbol: impl Into<String>,
        replacement: NativeFn,
    ) -> Self {
        Self {
            label: label.into(),
            target_symbol: target_symbol.into(),
            replacement,
            equivalent: false,
        }
    }

    /// Mark this mutant as known-equivalent: behaviorally indistinguishable
    /// from the original, so its survival is expected and it is excluded
    /// from the adjusted kill rate.
    pub fn marked_equivalent(mut self) -> Self {
        self.equivalent = true;
        self
    }

    /// Human-readable identifier of the simulated defect.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Symbol this mutant replaces.
    pub fn target_symbol(&self) -> &str {
        &self.target_symbol
    }

    /// Handle to the replacement implementation.
    pub fn replacement(&self) -> NativeFn {
        self.replacement.clone()
    }

    /// Whether this mutant was declared equivalent a priori.
    pub fn is_equivalent(&self) -> bool {
        self.equivalent
    }
}

impl std::fmt::Debug for MutantCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutantCandidate")
            .field("label", &self.label)
            .field("target_symbol", &self.target_symbol)
            .field("equivalent", &self.equivalent)
            .finish_non_exhaustive()
    }
}
