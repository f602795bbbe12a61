//! # Zscan
//!
//! Bounds-checked UTF-8 scanning primitives for nul-terminated byte sequences.
//!
//! This crate replaces unsafe C-style string scanning with a small, pure
//! function surface over *bounded sequences*: a possibly-nul-terminated byte
//! slice whose length is the maximum number of bytes that may be read. Every
//! operation is allocation-free, re-entrant, and never reads past the bound.
//!
//! ## Module Organization
//!
//! - [`lead`] - UTF-8 leading-byte classifier
//! - [`cursor`] - bounded forward/backward character advance
//! - [`query`] - byte size, validation, character counting, multi-step skip
//! - [`find`] - substring search and character-set scans
//! - [`encode`] - code point to UTF-8 encoding
//! - [`buffer`] - destination-filling copy helpers (take/copy/slice/extract)
//!
//! ## Quick Start
//!
//! ```
//! use zscan::{advance, length, size_of, Advance};
//!
//! // A terminated sequence. The slice length is the bound.
//! let greeting: &[u8] = b"Hi!\0";
//!
//! // Byte size including the terminator, and character count.
//! assert_eq!(size_of(Some(greeting)), Some(4));
//! assert_eq!(length(Some(greeting)), Some(3));
//!
//! // Step character by character.
//! assert_eq!(advance(Some(greeting), 0), Advance::Advanced(1));
//! assert_eq!(advance(Some(greeting), 2), Advance::End);
//!
//! // An absent sequence is empty, not an error.
//! assert_eq!(size_of(None), Some(0));
//! assert_eq!(length(None), Some(0));
//! ```
//!
//! ## Malformed input
//!
//! Bytes that cannot begin a character are skipped during iteration and count
//! to nothing. A sequence whose terminator cannot be found within the bound is
//! unusable as a whole, and every query reports that explicitly:
//!
//! ```
//! use zscan::{length, size_of, validate, ScanErrorKind};
//!
//! // Invalid byte in the middle: skipped by counting, reported by validate.
//! let noisy: &[u8] = b"Hi\xFF!\0";
//! assert_eq!(length(Some(noisy)), Some(3));
//! assert_eq!(validate(Some(noisy)).unwrap_err().offset, 2);
//!
//! // No terminator within the bound.
//! let unterminated: &[u8] = b"Hi!";
//! assert_eq!(size_of(Some(unterminated)), None);
//! assert_eq!(
//!     validate(Some(unterminated)).unwrap_err().kind,
//!     ScanErrorKind::UnterminatedSequence,
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default) - only required by the CLI and the test suite; the
//!   library itself is `no_std` and allocation-free
//! - `serde` - enable serialization/deserialization for public result types
//! - `cli` - build the `zscan` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// =============================================================================
// Core modules (classifier -> cursor -> queries)
// =============================================================================

/// UTF-8 leading-byte classification.
pub mod lead;

/// Bounded cursor: forward and backward character advance.
pub mod cursor;

/// Sequence queries: byte size, validation, counting, skipping.
pub mod query;

// =============================================================================
// Wrapper modules (thin layers over the cursor)
// =============================================================================

/// Substring search and character-set scans.
pub mod find;

/// Code point to UTF-8 encoding.
pub mod encode;

/// Destination-filling copy helpers.
pub mod buffer;

// =============================================================================
// Public re-exports (convenience)
// =============================================================================

// Core types and operations
pub use cursor::{advance, retreat, start, Advance};
pub use lead::{is_lead, lead_class};
pub use query::{length, length_max, length_to, size_of, skip, validate, ScanError, ScanErrorKind};

/// The byte marking the logical end of a sequence.
pub const TERMINATOR: u8 = 0x00;
