//! Construction-site capture macros.
//!
//! [`E57Exception::new`] captures file and line transparently through
//! `#[track_caller]`, but the enclosing function's name has no equivalent
//! intrinsic. [`exception!`] fills that gap: it expands to
//! [`E57Exception::at`] with `file!()`, `line!()`, and [`current_function!`]
//! supplied, so a construction site reads as a single expression:
//!
//! ```
//! use e57_errors::{exception, ErrorCode};
//!
//! fn read_packet() -> e57_errors::Result<()> {
//!     Err(exception!(ErrorCode::BadCvPacket, "packetIndex={}", 7))
//! }
//!
//! let err = read_packet().unwrap_err();
//! assert!(err.source_function_name().ends_with("read_packet"));
//! ```
//!
//! [`E57Exception::new`]: crate::E57Exception::new
//! [`E57Exception::at`]: crate::E57Exception::at

/// The fully qualified name of the enclosing function, as a `&'static str`.
///
/// Uses `std::any::type_name` on a local item fn, then strips the `::f`
/// suffix. Inside closures the name includes `{{closure}}` segments; that is
/// acceptable for diagnostics.
#[macro_export]
macro_rules! current_function {
    () => {{
        fn f() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let full = name_of(f);
        match full.strip_suffix("::f") {
            Some(stripped) => stripped,
            None => full,
        }
    }};
}

/// Construct an [`E57Exception`](crate::E57Exception) with the full
/// construction site captured.
///
/// Three forms:
/// - `exception!(code)` — empty context
/// - `exception!(code, context)` — any `Into<Cow<'static, str>>` context
/// - `exception!(code, fmt, args...)` — formatted context
#[macro_export]
macro_rules! exception {
    ($code:expr $(,)?) => {
        $crate::E57Exception::at(
            $code,
            "",
            ::std::file!(),
            ::std::line!(),
            $crate::current_function!(),
        )
    };
    ($code:expr, $context:expr $(,)?) => {
        $crate::E57Exception::at(
            $code,
            $context,
            ::std::file!(),
            ::std::line!(),
            $crate::current_function!(),
        )
    };
    ($code:expr, $fmt:expr, $($arg:tt)+) => {
        $crate::E57Exception::at(
            $code,
            ::std::format!($fmt, $($arg)+),
            ::std::file!(),
            ::std::line!(),
            $crate::current_function!(),
        )
    };
}

// ============================================================================
// Tests
// ============================================================================
