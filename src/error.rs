use core::fmt;

/// Everything that can go wrong while parsing a start-line or header
/// section.
///
/// Any variant here means the message is poisoned: the caller must
/// drop the connection and must not call [`crate::parse`] again on the
/// same [`crate::Message`]. [`Error`] is returned instead of the raw
/// negative sentinel the original parser used, since Rust has a typed
/// boundary to put it at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Method line started with a byte that isn't a token byte.
    InvalidMethodByte,
    /// Method accumulated more than 7 content bytes.
    MethodTooLong,
    /// URI was empty (`SP` or `CRLF` seen immediately after the method).
    EmptyUri,
    /// A byte outside the ISO-8859-1 printable range turned up in the
    /// URI, reason phrase, or a header value.
    InvalidIso8859_1,
    /// The `HTTP/d.d` token had the wrong length or shape.
    InvalidVersion,
    /// Status code accumulated to less than 100 or more than 999.
    StatusOutOfRange,
    /// A non-digit byte turned up while accumulating the status code.
    InvalidStatusDigit,
    /// A header line started with a byte that isn't a token byte
    /// (covers both an empty header name and line folding).
    InvalidHeaderToken,
    /// Saw a bare `\r` not followed by `\n`.
    BareCr,
    /// The message didn't terminate within the 32767-byte scan cap.
    MessageTooLarge,
    /// More x-headers arrived than this message can hold.
    TooManyXHeaders,
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Error::InvalidMethodByte => "invalid byte in method",
            Error::MethodTooLong => "method longer than 7 bytes",
            Error::EmptyUri => "empty URI",
            Error::InvalidIso8859_1 => "invalid ISO-8859-1 byte",
            Error::InvalidVersion => "invalid HTTP version",
            Error::StatusOutOfRange => "status code out of range",
            Error::InvalidStatusDigit => "invalid digit in status code",
            Error::InvalidHeaderToken => "invalid byte in header name (or line folding)",
            Error::BareCr => "bare CR without following LF",
            Error::MessageTooLarge => "message did not terminate within the size cap",
            Error::TooManyXHeaders => "too many x-headers",
        };
        write!(f, "{}", s)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
