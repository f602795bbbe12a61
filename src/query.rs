//! Sequence queries: byte size, validation, character counting, skipping.
//!
//! All queries share the edge-case policy of the cursor they are built on:
//!
//! - An absent sequence yields the neutral/empty answer for every query,
//!   never an error. `None` as input is indistinguishable from a valid empty
//!   sequence on the querying side.
//! - A sequence without a terminator within its bound is unusable as a whole:
//!   [`size_of`] and the length queries report that as `None`, [`validate`]
//!   as [`ScanErrorKind::UnterminatedSequence`].
//! - Malformed bytes are skipped by the counting queries and count to
//!   nothing; only [`validate`] reports their position.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use core::fmt;

use crate::cursor::{advance, retreat, start, Advance};
use crate::lead::lead_class;
use crate::TERMINATOR;

/// Error information for sequence validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanError {
    /// The byte offset where scanning failed (0-indexed).
    pub offset: usize,
    /// The kind of failure.
    pub kind: ScanErrorKind,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

/// The specific way a sequence failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanErrorKind {
    /// A byte that cannot begin a character, where a leading byte was
    /// expected.
    InvalidLeadByte,

    /// A valid leading byte whose implied character length runs past the
    /// bound.
    TruncatedChar,

    /// The bound was exhausted before a terminator was found.
    UnterminatedSequence,
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLeadByte => write!(f, "invalid leading byte"),
            Self::TruncatedChar => write!(f, "truncated character"),
            Self::UnterminatedSequence => write!(f, "unterminated sequence"),
        }
    }
}

/// Byte size of a sequence, terminator included.
///
/// Returns `Some(0)` for an absent sequence and `None` if no terminator is
/// found within the bound. A nonzero result can be passed to an allocator
/// as-is; a caller that forgets to check the unterminated case cannot be
/// handed a length that reads past the bound.
///
/// # Examples
///
/// ```
/// use zscan::size_of;
///
/// let s: &[u8] = b"Hello World!\0";
/// assert_eq!(size_of(Some(s)), Some(13));
///
/// assert_eq!(size_of(None), Some(0));
///
/// let unterminated: &[u8] = b"Hello";
/// assert_eq!(size_of(Some(unterminated)), None);
/// ```
pub fn size_of(zstr: Option<&[u8]>) -> Option<usize> {
    let Some(bytes) = zstr else {
        return Some(0);
    };
    bytes
        .iter()
        .position(|&b| b == TERMINATOR)
        .map(|terminator| terminator + 1)
}

/// Validate a sequence.
///
/// A valid sequence has a terminator within its bound, and every leading
/// byte before it is well-classified with its full character fitting before
/// the bound. Continuation bytes are not inspected; see [`crate::lead`].
///
/// Unlike iteration, validation does not skip malformed bytes: the first one
/// is reported with its offset. An absent sequence is valid and empty.
///
/// # Examples
///
/// ```
/// use zscan::{validate, ScanErrorKind};
///
/// assert!(validate(Some("día\0".as_bytes())).is_ok());
/// assert!(validate(None).is_ok());
///
/// let noisy: &[u8] = b"Hi\xFF!\0";
/// let err = validate(Some(noisy)).unwrap_err();
/// assert_eq!((err.offset, err.kind), (2, ScanErrorKind::InvalidLeadByte));
///
/// let cut: &[u8] = b"a\xE2\x82"; // "a€" cut short
/// let err = validate(Some(cut)).unwrap_err();
/// assert_eq!((err.offset, err.kind), (1, ScanErrorKind::TruncatedChar));
/// ```
pub fn validate(zstr: Option<&[u8]>) -> Result<(), ScanError> {
    let Some(bytes) = zstr else {
        return Ok(());
    };
    let mut pos = 0;
    while pos < bytes.len() {
        let byte = bytes[pos];
        if byte == TERMINATOR {
            return Ok(());
        }
        let class = lead_class(byte);
        if class == 0 {
            return Err(ScanError {
                offset: pos,
                kind: ScanErrorKind::InvalidLeadByte,
            });
        }
        if pos + class > bytes.len() {
            return Err(ScanError {
                offset: pos,
                kind: ScanErrorKind::TruncatedChar,
            });
        }
        pos += class;
    }
    Err(ScanError {
        offset: bytes.len(),
        kind: ScanErrorKind::UnterminatedSequence,
    })
}

/// Count the valid characters of a sequence, up to but excluding the
/// terminator.
///
/// Returns `Some(0)` for an absent sequence and `None` if the sequence is
/// unusable (no terminator reachable within the bound). Malformed bytes are
/// skipped and count to nothing.
///
/// This is a character count, not a byte count - do not size allocations
/// with it; use [`size_of`].
///
/// # Examples
///
/// ```
/// use zscan::length;
///
/// assert_eq!(length(Some("Hi! åäö ᚠᚢᚦ 😄😂🤣\0".as_bytes())), Some(15));
/// assert_eq!(length(None), Some(0));
///
/// // Malformed bytes count to nothing.
/// let noisy: &[u8] = b"Hello\xFFWorld\0";
/// assert_eq!(length(Some(noisy)), Some(10));
///
/// // No terminator within the bound.
/// let unterminated: &[u8] = b"Hello World!";
/// assert_eq!(length(Some(unterminated)), None);
/// ```
pub fn length(zstr: Option<&[u8]>) -> Option<usize> {
    length_max(zstr, usize::MAX)
}

/// Count valid characters, stopping once `max_count` is reached.
///
/// Returns `Some(min(length, max_count))`; the other policies match
/// [`length`]. Pass [`usize::MAX`] for no cap.
///
/// # Examples
///
/// ```
/// use zscan::length_max;
///
/// let s = "😄Hello!\0".as_bytes();
/// assert_eq!(length_max(Some(s), 3), Some(3));
/// assert_eq!(length_max(Some(s), 100), Some(7));
/// ```
pub fn length_max(zstr: Option<&[u8]>, max_count: usize) -> Option<usize> {
    if zstr.is_none() {
        return Some(0);
    }
    let mut count = 0;
    let mut cur = start(zstr);
    loop {
        match cur {
            Advance::Advanced(pos) => {
                if count >= max_count {
                    return Some(count);
                }
                count += 1;
                cur = advance(zstr, pos);
            }
            Advance::End => return Some(count),
            Advance::Invalid => return None,
        }
    }
}

/// Count valid characters strictly before the position `end_pos`.
///
/// Counting stops at `end_pos` or at the terminator, whichever comes first.
/// Policies match [`length`].
///
/// # Examples
///
/// ```
/// use zscan::length_to;
///
/// let s: &[u8] = b"a\xC3\xA9z\0"; // "aéz"
/// assert_eq!(length_to(Some(s), 3), Some(2)); // 'a' and 'é'
/// assert_eq!(length_to(Some(s), 0), Some(0));
/// assert_eq!(length_to(Some(s), 100), Some(3));
/// ```
pub fn length_to(zstr: Option<&[u8]>, end_pos: usize) -> Option<usize> {
    if zstr.is_none() {
        return Some(0);
    }
    let mut count = 0;
    let mut cur = start(zstr);
    loop {
        match cur {
            Advance::Advanced(pos) if pos < end_pos => {
                count += 1;
                cur = advance(zstr, pos);
            }
            Advance::Advanced(_) | Advance::End => return Some(count),
            Advance::Invalid => return None,
        }
    }
}

/// Move over `count` valid characters, forward or backward.
///
/// With `count > 0`, applies [`advance`] repeatedly, stopping early with
/// [`Advance::End`] or [`Advance::Invalid`] if the sequence ends or becomes
/// unusable before the count is consumed. With `count < 0`, applies
/// [`retreat`] repeatedly, stopping with [`Advance::End`] if the base is
/// passed first. `count == 0` returns the position unchanged.
///
/// # Examples
///
/// ```
/// use zscan::{skip, Advance};
///
/// let s: &[u8] = b"Hello, World!\0";
/// assert_eq!(skip(Some(s), 0, 2), Advance::Advanced(2));
/// assert_eq!(skip(Some(s), 2, -2), Advance::Advanced(0));
/// assert_eq!(skip(Some(s), 0, 100), Advance::End);
/// assert_eq!(skip(Some(s), 0, -1), Advance::End);
/// ```
pub fn skip(zstr: Option<&[u8]>, pos: usize, count: isize) -> Advance {
    if zstr.is_none() {
        return Advance::End;
    }

    if count < 0 {
        let mut cur = pos;
        for _ in 0..count.unsigned_abs() {
            match retreat(zstr, cur) {
                Some(prev) => cur = prev,
                None => return Advance::End,
            }
        }
        return Advance::Advanced(cur);
    }

    let mut cur = Advance::Advanced(pos);
    for _ in 0..count {
        let Advance::Advanced(at) = cur else {
            break;
        };
        cur = advance(zstr, at);
        if cur == Advance::Invalid {
            break;
        }
    }
    cur
}
