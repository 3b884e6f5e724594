//! Builder for the `NAME=value` diagnostic-fragment convention.
//!
//! Carrier context strings are free-form and never parsed, but by convention
//! they read as space-separated `NAME=value` fragments, e.g.
//! `"checksum=0xDEAD expected=0xBEEF"`. [`Context`] assembles such strings
//! without forcing callers to hand-format them.
//!
//! Storage is a `SmallVec` with four inline slots. Real construction sites
//! rarely attach more than a handful of fragments, so the common case never
//! touches the heap for the list itself.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Inline capacity for the fragment list.
const INLINE_FIELDS: usize = 4;

/// Accumulates `NAME=value` fragments for a carrier's context string.
///
/// # Example
///
/// ```
/// use e57_errors::{Context, E57Exception, ErrorCode};
///
/// let err = E57Exception::new(
///     ErrorCode::BadChecksum,
///     Context::new()
///         .field("checksum", "0xDEAD")
///         .field("expected", "0xBEEF"),
/// );
/// assert_eq!(err.context(), "checksum=0xDEAD expected=0xBEEF");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Context {
    fields: SmallVec<[(&'static str, Cow<'static, str>); INLINE_FIELDS]>,
}

impl Context {
    /// An empty context.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one `NAME=value` fragment.
    ///
    /// Names are compile-time constants by convention; values may be
    /// borrowed literals or owned strings.
    #[must_use]
    pub fn field(mut self, name: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Whether any fragments have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fragments.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

impl From<Context> for Cow<'static, str> {
    fn from(context: Context) -> Self {
        if context.is_empty() {
            Cow::Borrowed("")
        } else {
            Cow::Owned(context.to_string())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
