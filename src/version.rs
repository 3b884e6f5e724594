//! Version identification for the file format and this implementation.

use std::fmt;

/// The version triple reported by [`library_version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    /// Major number of the newest file format version this crate targets.
    pub format_major: u32,
    /// Minor number of the newest file format version this crate targets.
    pub format_minor: u32,
    /// Identifies this implementation and its release.
    pub library_id: &'static str,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "format {}.{} ({})",
            self.format_major, self.format_minor, self.library_id
        )
    }
}

/// The file format version this crate targets and the identity of this
/// implementation.
///
/// Read-only and constant for a given build. Useful for embedding in
/// diagnostics and bug reports alongside [`E57Exception::report`] output.
///
/// [`E57Exception::report`]: crate::E57Exception::report
pub const fn library_version() -> Version {
    Version {
        format_major: 1,
        format_minor: 0,
        library_id: concat!("e57-errors-", env!("CARGO_PKG_VERSION")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_format_one_point_zero() {
        let version = library_version();
        assert_eq!(version.format_major, 1);
        assert_eq!(version.format_minor, 0);
    }

    #[test]
    fn library_id_names_this_crate_and_release() {
        let version = library_version();
        assert!(version.library_id.starts_with("e57-errors-"));
        assert!(version.library_id.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn display_is_human_readable() {
        let rendered = library_version().to_string();
        assert!(rendered.starts_with("format 1.0 ("));
    }
}
