//! Incremental, zero-copy parser for HTTP/1.x start-lines and header
//! sections.
//!
//! Given a byte buffer that grows over time, [`parse`] returns
//! offset-based slices into that buffer for the method, URI, status
//! line, and headers (both well-known, indexed by [`HeaderId`], and
//! unrecognized "x-headers"). There is no body parsing, no chunked
//! decoding, and no I/O: the caller owns the buffer and drives the
//! parser with repeated calls as more bytes arrive.
//!
//! ```
//! use perch::{Kind, Message, parse};
//!
//! let mut msg = Message::new(Kind::Request);
//! let buf = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
//! let n = parse(&mut msg, buf, buf.len(), buf.len()).unwrap();
//! assert_eq!(n, buf.len());
//! assert_eq!(msg.method(), b"GET");
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![deny(missing_docs)]

extern crate alloc;

#[macro_use]
extern crate log;

#[cfg(feature = "std")]
extern crate std;

mod error;
pub use error::{Error, Result};

mod token;
pub use token::is_token_byte;

mod header;
pub use header::{classify_header_name, is_repeatable, HeaderId, HEADER_COUNT};

mod message;
pub use message::{Kind, Message, Slice, Version, XHeader, MAX_XHEADERS};

mod parser;
pub use parser::parse;
