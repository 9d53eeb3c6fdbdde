//! Node Synchronization Example
//!
//! Three nodes share a frozen wall clock, each with its own skew. Without
//! exchanging timestamps two nodes keep issuing identical timestamps; after
//! a sync round all of them order after the node that runs furthest ahead.

use hlcsphere::prelude::*;

fn tick_all(nodes: &mut [HybridLogicalClock<ManualClock>; 3]) -> Result<[Timestamp; 3], ClockError> {
    Ok([nodes[0].now()?, nodes[1].now()?, nodes[2].now()?])
}

fn sync_all(nodes: &mut [HybridLogicalClock<ManualClock>; 3]) -> Result<(), ClockError> {
    let stamps = tick_all(nodes)?;
    for (i, node) in nodes.iter_mut().enumerate() {
        for (j, stamp) in stamps.iter().enumerate() {
            if i != j {
                node.update(stamp)?;
            }
        }
    }
    Ok(())
}

fn print_round(label: &str, stamps: [Timestamp; 3]) {
    println!("{label}");
    for (i, stamp) in stamps.iter().enumerate() {
        println!("  node{}: {stamp}", i + 1);
    }
}

fn main() -> Result<(), ClockError> {
    let time = ManualClock::new(1);
    let mut nodes = [
        HybridLogicalClock::new(time.clone()),
        HybridLogicalClock::new(time.clone()),
        HybridLogicalClock::new(time.skewed(5)),
    ];

    print_round("Frozen wall clock:", tick_all(&mut nodes)?);
    print_round("Still frozen, node1 and node2 collide:", tick_all(&mut nodes)?);

    sync_all(&mut nodes)?;
    print_round("After syncing:", tick_all(&mut nodes)?);

    time.advance(10);
    print_round("Wall clock advanced by 10:", tick_all(&mut nodes)?);

    Ok(())
}
