//! Binary timestamp codec
//!
//! Pure functions converting a [`Timestamp`] to and from its canonical
//! 12-byte form. The codec holds no state and is never called by the clock.
//!
//! # Wire Layout
//!
//! | Offset | Length | Field | Encoding |
//! |--------|--------|-------|----------|
//! | 0 | 8 | `wall_time` | unsigned, big-endian |
//! | 8 | 4 | `logical` | unsigned, big-endian |
//!
//! Big-endian encoding keeps the byte-wise order of encoded timestamps equal
//! to their logical order, so encoded keys sort correctly in byte-ordered
//! stores.

use crate::error::{ClockError, ClockResult};
use crate::timestamp::Timestamp;

/// Name the codec identifies itself with
pub const NAME: &str = "hlc";

/// Size of an encoded timestamp in bytes
pub const ENCODED_LEN: usize = 12;

const WALL_TIME_LEN: usize = 8;

/// Encodes a timestamp into a fresh buffer
///
/// # Example
/// ```rust
/// use hlcsphere::prelude::*;
///
/// let bytes = codec::encode(&Timestamp::new(15, 5));
/// assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 5]);
/// ```
pub fn encode(timestamp: &Timestamp) -> [u8; ENCODED_LEN] {
    let mut out = [0u8; ENCODED_LEN];
    out[..WALL_TIME_LEN].copy_from_slice(&timestamp.wall_time().to_be_bytes());
    out[WALL_TIME_LEN..].copy_from_slice(&timestamp.logical().to_be_bytes());
    out
}

/// Encodes a timestamp into `target` starting at `offset`
///
/// Bytes outside `offset..offset + 12` are left untouched.
///
/// # Errors
/// [`ClockError::BufferTooSmall`] if fewer than 12 bytes are available from
/// `offset`. The target is not modified in that case.
pub fn encode_into(timestamp: &Timestamp, target: &mut [u8], offset: usize) -> ClockResult<()> {
    let slot = window_mut(target, offset)?;
    slot.copy_from_slice(&encode(timestamp));
    Ok(())
}

/// Decodes a timestamp from `bytes` starting at `offset`
///
/// # Errors
/// [`ClockError::BufferTooSmall`] if fewer than 12 bytes are available from
/// `offset`.
pub fn decode(bytes: &[u8], offset: usize) -> ClockResult<Timestamp> {
    let available = bytes.len().saturating_sub(offset);
    let window = bytes
        .get(offset..)
        .and_then(|rest| rest.get(..ENCODED_LEN))
        .ok_or(ClockError::BufferTooSmall {
            required: ENCODED_LEN,
            available,
        })?;

    let mut wall_time = [0u8; WALL_TIME_LEN];
    wall_time.copy_from_slice(&window[..WALL_TIME_LEN]);
    let mut logical = [0u8; ENCODED_LEN - WALL_TIME_LEN];
    logical.copy_from_slice(&window[WALL_TIME_LEN..]);

    Ok(Timestamp::new(
        u64::from_be_bytes(wall_time),
        u32::from_be_bytes(logical),
    ))
}

fn window_mut(target: &mut [u8], offset: usize) -> ClockResult<&mut [u8]> {
    let available = target.len().saturating_sub(offset);
    target
        .get_mut(offset..)
        .and_then(|rest| rest.get_mut(..ENCODED_LEN))
        .ok_or(ClockError::BufferTooSmall {
            required: ENCODED_LEN,
            available,
        })
}
