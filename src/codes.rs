//! The closed set of E57 error codes and their numeric contract.
//!
//! Every enumerator carries an explicit integer discriminant that is part of
//! the crate's external contract: serialized logs, cross-process diagnostics,
//! and the `error C<code>` lines emitted by [`E57Exception::report`] all
//! identify failures by these numbers, so they must never be renumbered
//! across releases. The `numeric_contract_is_pinned` test at the bottom of
//! this file pins the full table.
//!
//! # Governance
//!
//! The enum is deliberately NOT `#[non_exhaustive]`: downstream matchers are
//! allowed (and encouraged) to match exhaustively, and adding an enumerator
//! here without a corresponding branch in [`ErrorCode::describe`] fails the
//! build. That compile-time pairing is the coverage law of the catalog.
//!
//! [`E57Exception::report`]: crate::E57Exception::report
//! [`ErrorCode::describe`]: crate::ErrorCode::describe

use std::fmt;

/// Identifies the kind of failure detected inside an E57 operation.
///
/// Grouped conceptually (the discriminants interleave for historical
/// reasons; the numbers, not the grouping, are the contract):
///
/// - **Structural/tree**: `ChildIndexOutOfBounds`, `SetTwice`,
///   `HomogeneousViolation`, `DuplicateNamespacePrefix`,
///   `DuplicateNamespaceUri`, `AlreadyHasParent`, `NodeUnattached`
/// - **Representation/conversion**: `ValueNotRepresentable`,
///   `ScaledValueNotRepresentable`, `Real64TooLarge`, `ExpectingNumeric`,
///   `ExpectingUString`, `ValueOutOfBounds`, `ConversionRequired`
/// - **I/O**: `OpenFailed`, `CloseFailed`, `ReadFailed`, `WriteFailed`,
///   `SeekFailed`
/// - **Format**: `BadFileSignature`, `UnknownFileVersion`, `BadFileLength`,
///   `BadChecksum`, `BadXmlFormat`, `XmlParser`, `XmlParserInit`,
///   `BadCvHeader`, `BadCvPacket`
/// - **API misuse**: `BadApiArgument`, `BadBuffer`, `BufferSizeMismatch`,
///   `BuffersNotCompatible`, `BufferDuplicatePathName`, `NoBufferForElement`,
///   `BadPathName`, `PathUndefined`, `BadPrototype`, `BadCodecs`,
///   `BadNodeDowncast`, `BadConfiguration`
/// - **Lifecycle**: `ImageFileNotOpen`, `WriterNotOpen`, `ReaderNotOpen`,
///   `TooManyWriters`, `TooManyReaders`, `DifferentDestImageFile`,
///   `FileReadOnly`
/// - **Internal/invariant**: `Internal`, `InvarianceViolation`,
///   `NotImplemented` — `Internal` is reserved as a possible outcome of any
///   operation in the surrounding library.
///
/// `Success` is a sentinel. By convention it is never used to construct an
/// [`E57Exception`](crate::E57Exception), but the constructors do not reject
/// it (see the crate docs on the permissive convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    /// Operation completed without failure. Conventionally never carried.
    Success = 0,
    /// A CompressedVector binary section header failed validation.
    BadCvHeader = 1,
    /// A CompressedVector binary packet failed validation.
    BadCvPacket = 2,
    /// A numeric child index was outside the parent's child count.
    ChildIndexOutOfBounds = 3,
    /// Attempted to set an already-set child element to a new value.
    SetTwice = 4,
    /// An element would have broken a homogeneous vector's uniformity.
    HomogeneousViolation = 5,
    /// A value could not be represented in the requested type.
    ValueNotRepresentable = 6,
    /// After scaling, the result could not be represented in the requested type.
    ScaledValueNotRepresentable = 7,
    /// A 64-bit IEEE float was too large for a 32-bit IEEE float.
    Real64TooLarge = 8,
    /// Expected a numeric representation in the user's buffer, found a string.
    ExpectingNumeric = 9,
    /// Expected a string representation in the user's buffer, found numeric.
    ExpectingUString = 10,
    /// Unrecoverable inconsistent internal state. Any operation may raise this.
    Internal = 11,
    /// An E57 primitive was not encoded in XML correctly.
    BadXmlFormat = 12,
    /// The XML section was not well formed.
    XmlParser = 13,
    /// A bad API function argument was provided by the caller.
    BadApiArgument = 14,
    /// Attempted to modify a read-only file.
    FileReadOnly = 15,
    /// Checksum mismatch; the file is corrupted.
    BadChecksum = 16,
    /// The underlying open() call failed.
    OpenFailed = 17,
    /// The underlying close() call failed.
    CloseFailed = 18,
    /// The underlying read() call failed.
    ReadFailed = 19,
    /// The underlying write() call failed.
    WriteFailed = 20,
    /// The underlying seek() call failed.
    SeekFailed = 21,
    /// An element path was well formed but not defined in the tree.
    PathUndefined = 22,
    /// A source/destination buffer descriptor was invalid.
    BadBuffer = 23,
    /// No buffer was specified for an element during a block write.
    NoBufferForElement = 24,
    /// Source/destination buffers were not all the same size.
    BufferSizeMismatch = 25,
    /// Duplicate pathname among the buffers of a block read/write.
    BufferDuplicatePathName = 26,
    /// The file signature was not `ASTM-E57`.
    BadFileSignature = 27,
    /// The file's format version is not supported by this implementation.
    UnknownFileVersion = 28,
    /// The length recorded in the file header differs from the actual size.
    BadFileLength = 29,
    /// The XML parser failed to initialize.
    XmlParserInit = 30,
    /// A namespace prefix was already defined.
    DuplicateNamespacePrefix = 31,
    /// A namespace URI was already defined.
    DuplicateNamespaceUri = 32,
    /// A CompressedVector node carried a bad prototype.
    BadPrototype = 33,
    /// A CompressedVector node carried a bad codecs description.
    BadCodecs = 34,
    /// An element value was outside its declared min/max bounds.
    ValueOutOfBounds = 35,
    /// Assigning the element value required a conversion that was not requested.
    ConversionRequired = 36,
    /// An element path name was not well formed.
    BadPathName = 37,
    /// The requested functionality is not implemented.
    NotImplemented = 38,
    /// A generic node was downcast to the wrong concrete node type.
    BadNodeDowncast = 39,
    /// The block writer is no longer open.
    WriterNotOpen = 40,
    /// The block reader is no longer open.
    ReaderNotOpen = 41,
    /// The node is not yet attached to an image file's tree.
    NodeUnattached = 42,
    /// The node already has a parent.
    AlreadyHasParent = 43,
    /// Nodes were constructed against different destination image files.
    DifferentDestImageFile = 44,
    /// The destination image file is no longer open.
    ImageFileNotOpen = 45,
    /// Buffers were not compatible with the ones given previously.
    BuffersNotCompatible = 46,
    /// Too many block writers are open on one image file.
    TooManyWriters = 47,
    /// Too many block readers are open on one image file.
    TooManyReaders = 48,
    /// A configuration string was invalid.
    BadConfiguration = 49,
    /// A class invariance constraint was violated (checked builds).
    InvarianceViolation = 50,
}

impl ErrorCode {
    /// Every enumerator, in discriminant order.
    ///
    /// This is the iteration surface for coverage checks: the catalog tests
    /// walk it to verify that every code has a description and that
    /// [`from_raw`](Self::from_raw) round-trips.
    pub const ALL: [ErrorCode; 51] = [
        Self::Success,
        Self::BadCvHeader,
        Self::BadCvPacket,
        Self::ChildIndexOutOfBounds,
        Self::SetTwice,
        Self::HomogeneousViolation,
        Self::ValueNotRepresentable,
        Self::ScaledValueNotRepresentable,
        Self::Real64TooLarge,
        Self::ExpectingNumeric,
        Self::ExpectingUString,
        Self::Internal,
        Self::BadXmlFormat,
        Self::XmlParser,
        Self::BadApiArgument,
        Self::FileReadOnly,
        Self::BadChecksum,
        Self::OpenFailed,
        Self::CloseFailed,
        Self::ReadFailed,
        Self::WriteFailed,
        Self::SeekFailed,
        Self::PathUndefined,
        Self::BadBuffer,
        Self::NoBufferForElement,
        Self::BufferSizeMismatch,
        Self::BufferDuplicatePathName,
        Self::BadFileSignature,
        Self::UnknownFileVersion,
        Self::BadFileLength,
        Self::XmlParserInit,
        Self::DuplicateNamespacePrefix,
        Self::DuplicateNamespaceUri,
        Self::BadPrototype,
        Self::BadCodecs,
        Self::ValueOutOfBounds,
        Self::ConversionRequired,
        Self::BadPathName,
        Self::NotImplemented,
        Self::BadNodeDowncast,
        Self::WriterNotOpen,
        Self::ReaderNotOpen,
        Self::NodeUnattached,
        Self::AlreadyHasParent,
        Self::DifferentDestImageFile,
        Self::ImageFileNotOpen,
        Self::BuffersNotCompatible,
        Self::TooManyWriters,
        Self::TooManyReaders,
        Self::BadConfiguration,
        Self::InvarianceViolation,
    ];

    /// The stable numeric identifier of this code.
    #[inline]
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Map a raw numeric value back into the closed set.
    ///
    /// Returns `None` for any integer that is not a defined enumerator.
    /// Callers rendering untrusted or historical values should prefer
    /// [`describe_raw`](crate::catalog::describe_raw), which is total.
    #[inline]
    pub fn from_raw(value: i32) -> Option<ErrorCode> {
        Self::ALL.iter().copied().find(|code| code.raw() == value)
    }

    /// The enumerator's symbolic name, e.g. `"BadChecksum"`.
    ///
    /// Embedded in every catalog description so that log lines stay
    /// grep-able back to the code that produced them.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::BadCvHeader => "BadCvHeader",
            Self::BadCvPacket => "BadCvPacket",
            Self::ChildIndexOutOfBounds => "ChildIndexOutOfBounds",
            Self::SetTwice => "SetTwice",
            Self::HomogeneousViolation => "HomogeneousViolation",
            Self::ValueNotRepresentable => "ValueNotRepresentable",
            Self::ScaledValueNotRepresentable => "ScaledValueNotRepresentable",
            Self::Real64TooLarge => "Real64TooLarge",
            Self::ExpectingNumeric => "ExpectingNumeric",
            Self::ExpectingUString => "ExpectingUString",
            Self::Internal => "Internal",
            Self::BadXmlFormat => "BadXmlFormat",
            Self::XmlParser => "XmlParser",
            Self::BadApiArgument => "BadApiArgument",
            Self::FileReadOnly => "FileReadOnly",
            Self::BadChecksum => "BadChecksum",
            Self::OpenFailed => "OpenFailed",
            Self::CloseFailed => "CloseFailed",
            Self::ReadFailed => "ReadFailed",
            Self::WriteFailed => "WriteFailed",
            Self::SeekFailed => "SeekFailed",
            Self::PathUndefined => "PathUndefined",
            Self::BadBuffer => "BadBuffer",
            Self::NoBufferForElement => "NoBufferForElement",
            Self::BufferSizeMismatch => "BufferSizeMismatch",
            Self::BufferDuplicatePathName => "BufferDuplicatePathName",
            Self::BadFileSignature => "BadFileSignature",
            Self::UnknownFileVersion => "UnknownFileVersion",
            Self::BadFileLength => "BadFileLength",
            Self::XmlParserInit => "XmlParserInit",
            Self::DuplicateNamespacePrefix => "DuplicateNamespacePrefix",
            Self::DuplicateNamespaceUri => "DuplicateNamespaceUri",
            Self::BadPrototype => "BadPrototype",
            Self::BadCodecs => "BadCodecs",
            Self::ValueOutOfBounds => "ValueOutOfBounds",
            Self::ConversionRequired => "ConversionRequired",
            Self::BadPathName => "BadPathName",
            Self::NotImplemented => "NotImplemented",
            Self::BadNodeDowncast => "BadNodeDowncast",
            Self::WriterNotOpen => "WriterNotOpen",
            Self::ReaderNotOpen => "ReaderNotOpen",
            Self::NodeUnattached => "NodeUnattached",
            Self::AlreadyHasParent => "AlreadyHasParent",
            Self::DifferentDestImageFile => "DifferentDestImageFile",
            Self::ImageFileNotOpen => "ImageFileNotOpen",
            Self::BuffersNotCompatible => "BuffersNotCompatible",
            Self::TooManyWriters => "TooManyWriters",
            Self::TooManyReaders => "TooManyReaders",
            Self::BadConfiguration => "BadConfiguration",
            Self::InvarianceViolation => "InvarianceViolation",
        }
    }
}

impl fmt::Display for ErrorCode {
    /// Zero-allocation formatting: writes the symbolic name directly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
