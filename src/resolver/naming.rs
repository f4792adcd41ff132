//! Test-unit naming policy.
//!
//! Test counterparts are discovered by a naming convention, not by any
//! descriptor metadata. The convention is injectable so trees with a
//! different layout can swap it out.

/// Derives the id of a unit's test counterpart.
pub trait TestNaming {
    /// The test-unit id for `id`. The resolver looks this id up in the
    /// catalog; a miss simply contributes nothing.
    fn test_id(&self, id: &str) -> String;
}

/// The conventional policy: append a fixed suffix to the unit id.
#[derive(Debug, Clone)]
pub struct SuffixNaming {
    suffix: String,
}

impl SuffixNaming {
    /// The suffix used by Eclipse-style source trees.
    pub const DEFAULT_SUFFIX: &'static str = ".test";

    /// Create a policy with a custom suffix.
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Default for SuffixNaming {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SUFFIX)
    }
}

impl TestNaming for SuffixNaming {
    fn test_id(&self, id: &str) -> String {
        format!("{}{}", id, self.suffix)
    }
}
