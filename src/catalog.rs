//! The error catalog: fixed one-line descriptions for every code.
//!
//! Two lookup surfaces with different totality guarantees:
//!
//! - [`ErrorCode::describe`] is defined over the closed set only. The match
//!   is exhaustive, so growing the enum without adding a description is a
//!   compile error. That pairing is the coverage law of the catalog.
//! - [`describe_raw`] is total over all of `i32`. Values outside the set
//!   render as `unknown error (<value>)` so that a corrupted or
//!   future-versioned code in a log stream degrades to a readable line
//!   instead of a panic.
//!
//! Every description embeds the variant's symbolic name in parentheses.
//! That keeps diagnostic output grep-able back to the enumerator without
//! consulting the numeric table.
//!
//! Descriptions are `&'static str`, lookups are `const` and allocation-free.
//! Only the unknown-value fallback allocates.

use std::borrow::Cow;

use crate::codes::ErrorCode;

impl ErrorCode {
    /// The fixed one-line description of this code.
    ///
    /// Stable wording: downstream tooling may match on these strings, so
    /// edits to them are breaking changes in practice even though the
    /// signature never changes.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Success => "operation was successful (Success)",
            Self::BadCvHeader => "a CompressedVector binary section header was bad (BadCvHeader)",
            Self::BadCvPacket => "a CompressedVector binary packet was bad (BadCvPacket)",
            Self::ChildIndexOutOfBounds => {
                "a numerical index identifying a child was out of bounds (ChildIndexOutOfBounds)"
            }
            Self::SetTwice => "attempted to set an existing child element to a new value (SetTwice)",
            Self::HomogeneousViolation => {
                "attempted to add an element that would have made the children of a homogeneous Vector have different types (HomogeneousViolation)"
            }
            Self::ValueNotRepresentable => {
                "a value could not be represented in the requested type (ValueNotRepresentable)"
            }
            Self::ScaledValueNotRepresentable => {
                "after scaling the result could not be represented in the requested type (ScaledValueNotRepresentable)"
            }
            Self::Real64TooLarge => {
                "a 64 bit IEEE float was too large to store in a 32 bit IEEE float (Real64TooLarge)"
            }
            Self::ExpectingNumeric => {
                "Expecting numeric representation in user's buffer, found ustring (ExpectingNumeric)"
            }
            Self::ExpectingUString => {
                "Expecting string representation in user's buffer, found numeric (ExpectingUString)"
            }
            Self::Internal => "An unrecoverable inconsistent internal state was detected (Internal)",
            Self::BadXmlFormat => {
                "E57 primitive not encoded in XML correctly (BadXmlFormat)"
            }
            Self::XmlParser => "XML not well formed (XmlParser)",
            Self::BadApiArgument => "bad API function argument provided by user (BadApiArgument)",
            Self::FileReadOnly => "can't modify read only file (FileReadOnly)",
            Self::BadChecksum => "checksum mismatch, file is corrupted (BadChecksum)",
            Self::OpenFailed => "open() failed (OpenFailed)",
            Self::CloseFailed => "close() failed (CloseFailed)",
            Self::ReadFailed => "read() failed (ReadFailed)",
            Self::WriteFailed => "write() failed (WriteFailed)",
            Self::SeekFailed => "lseek() failed (SeekFailed)",
            Self::PathUndefined => "element path well formed but not defined (PathUndefined)",
            Self::BadBuffer => "bad SourceDestBuffer (BadBuffer)",
            Self::NoBufferForElement => {
                "no buffer specified for an element in CompressedVectorNode during write (NoBufferForElement)"
            }
            Self::BufferSizeMismatch => {
                "SourceDestBuffers not all same size (BufferSizeMismatch)"
            }
            Self::BufferDuplicatePathName => {
                "duplicate pathname in CompressedVectorNode read/write (BufferDuplicatePathName)"
            }
            Self::BadFileSignature => "file signature not ASTM-E57 (BadFileSignature)",
            Self::UnknownFileVersion => {
                "incompatible file version (UnknownFileVersion)"
            }
            Self::BadFileLength => {
                "size in file header not same as actual (BadFileLength)"
            }
            Self::XmlParserInit => "XML parser failed to initialize (XmlParserInit)",
            Self::DuplicateNamespacePrefix => {
                "namespace prefix already defined (DuplicateNamespacePrefix)"
            }
            Self::DuplicateNamespaceUri => {
                "namespace URI already defined (DuplicateNamespaceUri)"
            }
            Self::BadPrototype => "bad prototype in CompressedVectorNode (BadPrototype)",
            Self::BadCodecs => "bad codecs in CompressedVectorNode (BadCodecs)",
            Self::ValueOutOfBounds => {
                "element value out of min/max bounds (ValueOutOfBounds)"
            }
            Self::ConversionRequired => {
                "conversion required to assign element value, but not requested (ConversionRequired)"
            }
            Self::BadPathName => "element path name bad (BadPathName)",
            Self::NotImplemented => "functionality not implemented (NotImplemented)",
            Self::BadNodeDowncast => {
                "bad downcast from Node to specific node type (BadNodeDowncast)"
            }
            Self::WriterNotOpen => {
                "CompressedVectorWriter is no longer open (WriterNotOpen)"
            }
            Self::ReaderNotOpen => {
                "CompressedVectorReader is no longer open (ReaderNotOpen)"
            }
            Self::NodeUnattached => {
                "node is not yet attached to tree of ImageFile (NodeUnattached)"
            }
            Self::AlreadyHasParent => {
                "node already has a parent (AlreadyHasParent)"
            }
            Self::DifferentDestImageFile => {
                "nodes were constructed with different destImageFiles (DifferentDestImageFile)"
            }
            Self::ImageFileNotOpen => {
                "destImageFile is no longer open (ImageFileNotOpen)"
            }
            Self::BuffersNotCompatible => {
                "SourceDestBuffers not compatible with previously given ones (BuffersNotCompatible)"
            }
            Self::TooManyWriters => {
                "too many open CompressedVectorWriters of an ImageFile (TooManyWriters)"
            }
            Self::TooManyReaders => {
                "too many open CompressedVectorReaders of an ImageFile (TooManyReaders)"
            }
            Self::BadConfiguration => "bad configuration string (BadConfiguration)",
            Self::InvarianceViolation => {
                "class invariance constraint violation in debug mode (InvarianceViolation)"
            }
        }
    }
}

/// Describe a raw numeric code, total over all of `i32`.
///
/// Values inside the closed set borrow their catalog entry; anything else
/// renders as `unknown error (<value>)`. This is the right entry point for
/// values deserialized from logs or foreign processes, where the integer may
/// predate or postdate this crate's enumerator set.
pub fn describe_raw(value: i32) -> Cow<'static, str> {
    match ErrorCode::from_raw(value) {
        Some(code) => Cow::Borrowed(code.describe()),
        None => Cow::Owned(format!("unknown error ({value})")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_nonempty_description() {
        for code in ErrorCode::ALL {
            assert!(!code.describe().is_empty(), "{} has no description", code);
        }
    }

    /// Grep-ability contract: the symbolic name appears in every entry.
    #[test]
    fn every_description_embeds_the_symbolic_name() {
        for code in ErrorCode::ALL {
            assert!(
                code.describe().contains(code.name()),
                "description of {} does not mention it: {:?}",
                code.name(),
                code.describe()
            );
        }
    }

    #[test]
    fn descriptions_are_distinct() {
        for a in ErrorCode::ALL {
            for b in ErrorCode::ALL {
                if a != b {
                    assert_ne!(a.describe(), b.describe());
                }
            }
        }
    }

    #[test]
    fn describe_raw_agrees_with_describe_inside_the_set() {
        for code in ErrorCode::ALL {
            let raw = describe_raw(code.raw());
            assert!(matches!(raw, Cow::Borrowed(_)));
            assert_eq!(raw, code.describe());
        }
    }

    #[test]
    fn describe_raw_falls_back_outside_the_set() {
        assert_eq!(describe_raw(-1), "unknown error (-1)");
        assert_eq!(describe_raw(51), "unknown error (51)");
        assert_eq!(describe_raw(9999), "unknown error (9999)");
        assert_eq!(
            describe_raw(i32::MIN),
            format!("unknown error ({})", i32::MIN)
        );
    }

    #[test]
    fn spot_check_known_entries() {
        assert_eq!(
            ErrorCode::BadChecksum.describe(),
            "checksum mismatch, file is corrupted (BadChecksum)"
        );
        assert_eq!(ErrorCode::Success.describe(), "operation was successful (Success)");
        assert_eq!(ErrorCode::XmlParser.describe(), "XML not well formed (XmlParser)");
    }
}
