//! Basic Hybrid Logical Clock Example
//!
//! Issue timestamps, merge remote ones, move them over the wire and react
//! to drift errors.

use hlcsphere::prelude::*;

const SECOND: u64 = 1_000_000_000;

fn main() -> Result<(), ClockError> {
    let config = ClockConfig::new().with_max_offset(60 * SECOND); // 1 minute
    let mut clock = HybridLogicalClock::with_config(SystemClock::new(), config);

    let first = clock.now()?;
    let second = clock.now()?;
    println!("Local timestamps: {first} < {second}");

    // A peer a few seconds ahead pulls this clock forward
    let remote = Timestamp::from_wall_time(second.wall_time() + 5 * SECOND);
    let merged = clock.update(&remote)?;
    println!("After merging {remote}: {merged}");

    // Twelve bytes on the wire
    let bytes = merged.encode();
    let decoded = Timestamp::decode(&bytes, 0)?;
    println!("Encoded {bytes:02x?} -> {decoded}");

    // A peer two minutes ahead is refused and leaves the clock untouched
    let runaway = Timestamp::from_wall_time(merged.wall_time() + 120 * SECOND);
    match clock.update(&runaway) {
        Err(err @ ClockError::ClockOffset { .. }) => println!("Rejected: {err}"),
        other => println!("Unexpected: {other:?}"),
    }
    println!("Clock still at {}", clock.last());

    Ok(())
}
