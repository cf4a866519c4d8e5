//! Fixtures shared by unit tests.

use proptest::prelude::*;

use crate::domain::{LineId, LineRecord, Network};

/// Stop names drawn on by generated networks.
const STOP_POOL: &[&str] = &[
    "Вокзал", "Ринок", "Парк", "Арена", "Depot", "Market", "Square", "Bridge",
];

pub(crate) fn line_id(n: u32) -> LineId {
    LineId::new(n).unwrap()
}

/// Build a network from `(id, forward, reverse)` triples, panicking on bad data.
pub(crate) fn network(lines: &[(u32, &[&str], &[&str])]) -> Network {
    let records = lines
        .iter()
        .map(|(id, forward, reverse)| {
            LineRecord::new(line_id(*id), format!("Line {id}"), forward, reverse)
        })
        .collect::<Vec<_>>();
    let loaded = Network::load(records).unwrap();
    assert!(loaded.skipped.is_empty(), "fixture has malformed lines");
    loaded.network
}

fn direction_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(STOP_POOL.to_vec(), 0..=5)
        .prop_shuffle()
        .prop_map(|stops| stops.into_iter().map(String::from).collect())
}

/// Random small networks. Lines with two empty directions are skipped by
/// the loader, so a generated network may have fewer lines than records.
pub(crate) fn network_strategy() -> impl Strategy<Value = Network> {
    prop::collection::vec((direction_strategy(), direction_strategy()), 1..=5).prop_map(
        |directions| {
            let records = directions
                .into_iter()
                .enumerate()
                .map(|(i, (forward, reverse))| {
                    let n = i as u32 + 1;
                    LineRecord {
                        id: line_id(n),
                        name: format!("Line {n}"),
                        forward,
                        reverse,
                    }
                })
                .collect::<Vec<_>>();
            Network::load(records).unwrap().network
        },
    )
}

/// Every stop name a generated network may contain.
pub(crate) fn stop_pool() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(STOP_POOL)
}
