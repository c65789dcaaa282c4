//! Whitespace control for block tags.
//!
//! [`WhitespacePolicy`] holds the two lexer flags that decide how block tags
//! (`{% ... %}`) affect the whitespace around them. The same policy value must
//! be handed to validation and to rendering, otherwise the two steps would see
//! different token streams.
//!
//! | Flag | Effect |
//! |------|--------|
//! | `trim_blocks` | Drop the first newline after a block tag |
//! | `lstrip_blocks` | Strip spaces and tabs from line start up to a block tag |

use minijinja::Environment;

/// The `trim_blocks` / `lstrip_blocks` pair.
///
/// Both flags default to `true`.
///
/// # Example
///
/// ```rust
/// use tmplcheck_render::WhitespacePolicy;
///
/// let policy = WhitespacePolicy::default().with_lstrip_blocks(false);
/// assert!(policy.trim_blocks());
/// assert!(!policy.lstrip_blocks());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WhitespacePolicy {
    trim_blocks: bool,
    lstrip_blocks: bool,
}

impl WhitespacePolicy {
    /// Creates a policy with explicit flag values.
    pub const fn new(trim_blocks: bool, lstrip_blocks: bool) -> Self {
        Self {
            trim_blocks,
            lstrip_blocks,
        }
    }

    /// A policy with both flags off: whitespace around block tags is kept verbatim.
    pub const fn preserve() -> Self {
        Self::new(false, false)
    }

    /// Returns a copy with `trim_blocks` set.
    pub const fn with_trim_blocks(self, trim_blocks: bool) -> Self {
        Self::new(trim_blocks, self.lstrip_blocks)
    }

    /// Returns a copy with `lstrip_blocks` set.
    pub const fn with_lstrip_blocks(self, lstrip_blocks: bool) -> Self {
        Self::new(self.trim_blocks, lstrip_blocks)
    }

    pub const fn trim_blocks(&self) -> bool {
        self.trim_blocks
    }

    pub const fn lstrip_blocks(&self) -> bool {
        self.lstrip_blocks
    }

    /// Applies both flags to an engine environment.
    pub(crate) fn configure(&self, env: &mut Environment<'_>) {
        env.set_trim_blocks(self.trim_blocks);
        env.set_lstrip_blocks(self.lstrip_blocks);
    }
}

impl Default for WhitespacePolicy {
    fn default() -> Self {
        Self::new(true, true)
    }
}
