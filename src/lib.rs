//! # e57-errors
//!
//! Error signaling for ASTM E57 point cloud file I/O: a typed error code
//! set, an immutable exception carrier, and a total error catalog.
//!
//! ## Design
//!
//! 1. **One carrier type** — every failure in the surrounding library
//!    travels as an [`E57Exception`] holding an [`ErrorCode`] plus optional
//!    diagnostics (context string, construction-site file/function/line).
//! 2. **Closed code set with a stable numeric contract** — discriminants
//!    are pinned and never renumbered; see [`codes`].
//! 3. **Total catalog** — [`ErrorCode::describe`] covers every code by
//!    compiler-enforced exhaustive match, and [`catalog::describe_raw`]
//!    degrades gracefully for integers outside the set.
//! 4. **Diagnostics never fail** — [`E57Exception::report`] swallows sink
//!    errors; the act of describing a failure cannot itself fail.
//!
//! ## Post-failure guarantees
//!
//! Operations in the surrounding library document which state guarantee
//! they provide when they fail with an `E57Exception`:
//!
//! - **All objects unchanged**: every visible object is exactly as before
//!   the call (the strong guarantee, the common case).
//! - **Modified but consistent**: named objects may have changed, but all
//!   invariants still hold and the objects remain usable.
//! - **Object undocumented**: a named object's state is unspecified; it may
//!   only be safely destroyed.
//! - **All undocumented**: the states of all involved objects are
//!   unspecified (reserved for catastrophic conditions such as
//!   [`ErrorCode::Internal`]).
//!
//! These are prose contracts of the operations that raise the exception,
//! not runtime state of the carrier itself.
//!
//! ## Quick start
//!
//! ```rust
//! use e57_errors::{exception, Context, ErrorCode, Result};
//!
//! fn verify_checksum(stored: u32, computed: u32) -> Result<()> {
//!     if stored != computed {
//!         return Err(exception!(
//!             ErrorCode::BadChecksum,
//!             Context::new()
//!                 .field("stored", format!("{stored:#010x}"))
//!                 .field("computed", format!("{computed:#010x}")),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = verify_checksum(0xDEAD, 0xBEEF).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::BadChecksum);
//! let mut out = Vec::new();
//! err.report(Some(file!()), line!(), Some("main"), &mut out);
//! ```
//!
//! ## Features
//!
//! - `extended-diagnostics` (default): [`E57Exception::report`] emits the
//!   full multi-line diagnostic block (context, function names,
//!   editor-linkable `file(line)` locations) after the baseline line.
//!   Disable it for release-style one-line reports.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io;
use std::result;

pub mod catalog;
pub mod codes;
pub mod context;
pub mod convenience;
pub mod version;

pub use catalog::describe_raw;
pub use codes::ErrorCode;
pub use context::Context;
pub use version::{library_version, Version};

/// Type alias for Results using this crate's error type.
pub type Result<T> = result::Result<T, E57Exception>;

/// Immutable carrier for a failure detected during an E57 operation.
///
/// Holds the mandatory [`ErrorCode`] plus optional diagnostics: a free-form
/// context string (by convention space-separated `NAME=value` fragments, see
/// [`Context`]) and the construction site (file basename, function name,
/// line number). All fields are set at construction and never change, so the
/// carrier is freely shareable across threads.
///
/// Construct with [`new`](Self::new) (transparent file/line capture via
/// `#[track_caller]`), [`at`](Self::at) (fully explicit site), or the
/// [`exception!`](crate::exception) macro (site plus enclosing function
/// name).
#[must_use = "errors should be handled or reported"]
pub struct E57Exception {
    code: ErrorCode,
    context: Cow<'static, str>,
    source_file: Cow<'static, str>,
    source_function: &'static str,
    source_line: u32,
}

impl E57Exception {
    /// Create a carrier, capturing the caller's file and line.
    ///
    /// The file path is reduced to its basename. The function name is left
    /// empty; use [`exception!`](crate::exception) when it matters.
    ///
    /// `code` is not validated: constructing a carrier for
    /// [`ErrorCode::Success`] is permitted, though by convention no
    /// operation returns one.
    #[track_caller]
    pub fn new(code: ErrorCode, context: impl Into<Cow<'static, str>>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            code,
            context: context.into(),
            source_file: basename(Cow::Borrowed(location.file())),
            source_function: "",
            source_line: location.line(),
        }
    }

    /// Create a carrier with an explicit construction site.
    ///
    /// `source_file` is reduced to its basename. `source_function` is
    /// conventionally a compile-time constant such as the expansion of
    /// [`current_function!`](crate::current_function).
    pub fn at(
        code: ErrorCode,
        context: impl Into<Cow<'static, str>>,
        source_file: impl Into<Cow<'static, str>>,
        source_line: u32,
        source_function: &'static str,
    ) -> Self {
        Self {
            code,
            context: context.into(),
            source_file: basename(source_file.into()),
            source_function,
            source_line,
        }
    }

    /// The code identifying the kind of failure.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// The free-form diagnostic context, possibly empty. Never parsed.
    #[inline]
    pub fn context(&self) -> &str {
        self.context.as_ref()
    }

    /// A fixed category label, identical for every carrier.
    ///
    /// Distinguishes this failure family from any other error type in a
    /// larger program; it carries no per-instance information. Use
    /// [`ErrorCode::describe`] for the specific description.
    #[inline]
    pub const fn description(&self) -> &'static str {
        "E57 exception"
    }

    /// Basename of the file the carrier was constructed in, possibly empty.
    #[inline]
    pub fn source_file_name(&self) -> &str {
        self.source_file.as_ref()
    }

    /// Name of the function the carrier was constructed in, possibly empty.
    #[inline]
    pub const fn source_function_name(&self) -> &'static str {
        self.source_function
    }

    /// Line number of the construction site, informational only.
    #[inline]
    pub const fn source_line_number(&self) -> u32 {
        self.source_line
    }

    /// Write a human-readable diagnostic to `sink`, never failing.
    ///
    /// The reporting-site parameters identify where the exception was
    /// caught, as opposed to where it was constructed; pass `None` when
    /// unavailable.
    ///
    /// Always emits the baseline line
    /// `**** Got an e57 exception: <description>`. With the
    /// `extended-diagnostics` feature (default), also emits the context,
    /// both function names, and two `file(line) : error C<code>` lines that
    /// smart editors interpret as source links.
    ///
    /// Sink errors are swallowed; use [`try_report`](Self::try_report) to
    /// observe them.
    pub fn report(
        &self,
        reporting_file: Option<&str>,
        reporting_line: u32,
        reporting_function: Option<&str>,
        sink: &mut impl io::Write,
    ) {
        let _ = self.try_report(reporting_file, reporting_line, reporting_function, sink);
    }

    /// Fallible form of [`report`](Self::report) for callers that care
    /// about the sink.
    pub fn try_report(
        &self,
        reporting_file: Option<&str>,
        reporting_line: u32,
        reporting_function: Option<&str>,
        sink: &mut impl io::Write,
    ) -> io::Result<()> {
        writeln!(sink, "**** Got an e57 exception: {}", self.code.describe())?;

        #[cfg(feature = "extended-diagnostics")]
        {
            writeln!(sink, "  Debug info: ")?;
            writeln!(sink, "    context: {}", self.context)?;
            writeln!(sink, "    sourceFunctionName: {}", self.source_function)?;
            if let Some(function) = reporting_function {
                writeln!(sink, "    reportingFunctionName: {function}")?;
            }
            writeln!(
                sink,
                "{}({}) : error C{}:  <--- occurred on",
                self.source_file,
                self.source_line,
                self.code.raw()
            )?;
            if let Some(file) = reporting_file {
                writeln!(sink, "{file}({reporting_line}) : error C0:  <--- reported on")?;
            }
        }
        #[cfg(not(feature = "extended-diagnostics"))]
        {
            let _ = (reporting_file, reporting_line, reporting_function);
        }

        Ok(())
    }
}

impl fmt::Debug for E57Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("E57Exception")
            .field("code", &self.code)
            .field("context", &self.context)
            .field("source_file", &self.source_file)
            .field("source_function", &self.source_function)
            .field("source_line", &self.source_line)
            .finish()
    }
}

impl fmt::Display for E57Exception {
    /// One-line rendering: the category label plus the catalog description.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E57 exception: {}", self.code.describe())
    }
}

impl Error for E57Exception {}

/// Strip everything up to and including the last `/` or `\` separator.
///
/// Both separators are recognized regardless of host platform, since
/// construction-site paths come from compile-time macros and may carry the
/// build host's convention. A path with no separator is kept verbatim; a
/// trailing separator yields an empty basename.
fn basename(path: Cow<'static, str>) -> Cow<'static, str> {
    match path {
        Cow::Borrowed(p) => match p.rfind(['/', '\\']) {
            Some(index) => Cow::Borrowed(&p[index + 1..]),
            None => Cow::Borrowed(p),
        },
        Cow::Owned(mut p) => {
            if let Some(index) = p.rfind(['/', '\\']) {
                p.drain(..=index);
            }
            Cow::Owned(p)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// An io::Write whose writes always fail.
    struct FailingSink;

    impl io::Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }
    }

    fn rendered_report(err: &E57Exception) -> String {
        let mut out = Vec::new();
        err.report(Some("Catcher.cpp"), 99, Some("handleError"), &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn basename_strips_forward_slashes() {
        assert_eq!(basename(Cow::Borrowed("a/b/c.cpp")), "c.cpp");
    }

    #[test]
    fn basename_strips_backslashes() {
        assert_eq!(basename(Cow::Borrowed("a\\b\\c.cpp")), "c.cpp");
    }

    #[test]
    fn basename_keeps_bare_names() {
        assert_eq!(basename(Cow::Borrowed("c.cpp")), "c.cpp");
    }

    #[test]
    fn basename_of_trailing_separator_is_empty() {
        assert_eq!(basename(Cow::Borrowed("a/b/")), "");
        assert_eq!(basename(Cow::Borrowed("a\\b\\")), "");
    }

    #[test]
    fn basename_handles_owned_paths() {
        assert_eq!(
            basename(Cow::Owned(String::from("/src/Reader.cpp"))),
            "Reader.cpp"
        );
        assert_eq!(basename(Cow::Owned(String::from("Reader.cpp"))), "Reader.cpp");
    }

    #[test]
    fn basename_is_idempotent() {
        let once = basename(Cow::Borrowed("/deep/path/File.rs"));
        let twice = basename(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn new_captures_this_file_and_line() {
        let before = line!();
        let err = E57Exception::new(ErrorCode::Internal, "");
        assert_eq!(err.source_file_name(), "lib.rs");
        assert_eq!(err.source_line_number(), before + 1);
        assert_eq!(err.source_function_name(), "");
    }

    #[test]
    fn at_reduces_the_given_path() {
        let err = E57Exception::at(
            ErrorCode::OpenFailed,
            "fileName=scan.e57",
            "/src/ImageFile.cpp",
            42,
            "open",
        );
        assert_eq!(err.source_file_name(), "ImageFile.cpp");
        assert_eq!(err.source_line_number(), 42);
        assert_eq!(err.source_function_name(), "open");
    }

    #[test]
    fn accessors_are_stable_across_calls() {
        let err = E57Exception::new(ErrorCode::BadBuffer, "capacity=0");
        assert_eq!(err.code(), err.code());
        assert_eq!(err.context(), "capacity=0");
    }

    #[test]
    fn description_is_the_same_fixed_label_for_every_code() {
        let a = E57Exception::new(ErrorCode::BadChecksum, "");
        let b = E57Exception::new(ErrorCode::SeekFailed, "");
        assert_eq!(a.description(), "E57 exception");
        assert_eq!(a.description(), b.description());
    }

    #[test]
    fn success_carriers_are_permitted() {
        let err = E57Exception::new(ErrorCode::Success, "");
        assert_eq!(err.code(), ErrorCode::Success);
        let mut out = Vec::new();
        err.report(None, 0, None, &mut out);
        assert!(!out.is_empty());
    }

    #[test]
    fn display_combines_label_and_catalog_entry() {
        let err = E57Exception::new(ErrorCode::FileReadOnly, "");
        assert_eq!(
            err.to_string(),
            "E57 exception: can't modify read only file (FileReadOnly)"
        );
    }

    #[test]
    fn report_baseline_line_comes_first() {
        let err = E57Exception::new(ErrorCode::XmlParser, "");
        let rendered = rendered_report(&err);
        assert!(rendered.starts_with(
            "**** Got an e57 exception: XML not well formed (XmlParser)\n"
        ));
    }

    #[cfg(feature = "extended-diagnostics")]
    #[test]
    fn report_extended_block_matches_checksum_scenario() {
        let err = E57Exception::at(
            ErrorCode::BadChecksum,
            "checksum=0xDEAD expected=0xBEEF",
            "/src/Reader.cpp",
            204,
            "readPacket",
        );
        let rendered = rendered_report(&err);

        assert!(rendered.starts_with(
            "**** Got an e57 exception: checksum mismatch, file is corrupted (BadChecksum)\n"
        ));
        assert!(rendered.contains("    context: checksum=0xDEAD expected=0xBEEF\n"));
        assert!(rendered.contains("    sourceFunctionName: readPacket\n"));
        assert!(rendered.contains("    reportingFunctionName: handleError\n"));
        assert!(rendered.contains("Reader.cpp(204) : error C16:  <--- occurred on\n"));
        assert!(rendered.contains("Catcher.cpp(99) : error C0:  <--- reported on\n"));
    }

    #[cfg(feature = "extended-diagnostics")]
    #[test]
    fn report_omits_reporting_lines_when_site_is_unknown() {
        let err = E57Exception::new(ErrorCode::SeekFailed, "");
        let mut out = Vec::new();
        err.report(None, 0, None, &mut out);
        let rendered = String::from_utf8(out).unwrap();

        assert!(!rendered.contains("reportingFunctionName"));
        assert!(!rendered.contains("reported on"));
        assert!(rendered.contains("<--- occurred on"));
    }

    #[test]
    fn report_swallows_sink_errors() {
        let err = E57Exception::new(ErrorCode::WriteFailed, "fd=7");
        err.report(Some("x.rs"), 1, Some("f"), &mut FailingSink);
    }

    #[test]
    fn try_report_surfaces_sink_errors() {
        let err = E57Exception::new(ErrorCode::WriteFailed, "fd=7");
        let result = err.try_report(None, 0, None, &mut FailingSink);
        assert!(result.is_err());
    }

    #[test]
    fn carrier_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<E57Exception>();
    }

    #[test]
    fn error_trait_object_compatible() {
        let err: Box<dyn Error> = Box::new(E57Exception::new(ErrorCode::Internal, ""));
        assert!(err.source().is_none());
        assert!(err.to_string().contains("Internal"));
    }

    #[test]
    fn context_builder_feeds_the_carrier() {
        let err = E57Exception::new(
            ErrorCode::ValueOutOfBounds,
            Context::new().field("value", "512").field("max", "255"),
        );
        assert_eq!(err.context(), "value=512 max=255");
    }
}
