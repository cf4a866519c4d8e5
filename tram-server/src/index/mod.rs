//! Stop index: which lines serve each stop, and the sorted list of stops.
//!
//! Derived once from a [`Network`] and read-only afterwards. Rebuilding
//! from the same network yields an equal index.

mod collation;

use std::collections::{BTreeSet, HashMap};

use crate::domain::{Direction, LineId, Network};

pub use collation::{Collation, UKRAINIAN_ALPHABET};

static NO_LINES: BTreeSet<LineId> = BTreeSet::new();

/// Lookup from stop name to the lines serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopIndex {
    lines_at: HashMap<String, BTreeSet<LineId>>,
    sorted: Vec<String>,
}

impl StopIndex {
    /// Build the index with the default (Ukrainian) collation.
    pub fn build(network: &Network) -> Self {
        Self::build_with(network, &Collation::default())
    }

    /// Build the index, ordering stops with `collation`.
    ///
    /// Stops whose keys collate equal keep their first-appearance order:
    /// lines by ascending id, forward stops before reverse stops.
    pub fn build_with(network: &Network, collation: &Collation) -> Self {
        let mut lines_at: HashMap<String, BTreeSet<LineId>> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for line in network.lines() {
            for direction in Direction::BOTH {
                for stop in line.stops(direction) {
                    match lines_at.get_mut(stop) {
                        Some(lines) => {
                            lines.insert(line.id());
                        }
                        None => {
                            first_seen.push(stop.clone());
                            lines_at.insert(stop.clone(), BTreeSet::from([line.id()]));
                        }
                    }
                }
            }
        }

        // Stable: equal keys stay in first-seen order
        first_seen.sort_by_cached_key(|name| collation.key(name));

        Self {
            lines_at,
            sorted: first_seen,
        }
    }

    /// Returns the lines serving `stop` in either direction.
    ///
    /// An unknown stop yields the empty set.
    pub fn lines_at(&self, stop: &str) -> &BTreeSet<LineId> {
        self.lines_at.get(stop).unwrap_or(&NO_LINES)
    }

    /// Returns every stop of the network once, in collation order.
    pub fn all_stops_sorted(&self) -> &[String] {
        &self.sorted
    }

    /// Returns true if some line serves `stop`.
    pub fn contains(&self, stop: &str) -> bool {
        self.lines_at.contains_key(stop)
    }

    /// Returns the number of distinct stops.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Returns true if the network has no stops.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineRecord;

    fn id(n: u32) -> LineId {
        LineId::new(n).unwrap()
    }

    fn network(records: Vec<LineRecord>) -> Network {
        Network::load(records).unwrap().network
    }

    fn lviv() -> Network {
        network(vec![
            LineRecord::new(
                id(1),
                "Вокзал - Погулянка",
                &["Вокзал", "Площа Ринок", "Погулянка"],
                &["Погулянка", "Площа Ринок", "Вокзал"],
            ),
            LineRecord::new(
                id(2),
                "Київська - Арена",
                &["Київська", "Площа Ринок", "Арена"],
                &["Арена", "Ґалицька", "Київська"],
            ),
        ])
    }

    #[test]
    fn lines_at_known_stop() {
        let index = StopIndex::build(&lviv());
        assert_eq!(index.lines_at("Площа Ринок"), &BTreeSet::from([id(1), id(2)]));
        assert_eq!(index.lines_at("Вокзал"), &BTreeSet::from([id(1)]));
    }

    #[test]
    fn lines_at_reverse_only_stop() {
        let index = StopIndex::build(&lviv());
        assert_eq!(index.lines_at("Ґалицька"), &BTreeSet::from([id(2)]));
    }

    #[test]
    fn lines_at_unknown_stop_is_empty() {
        let index = StopIndex::build(&lviv());
        assert!(index.lines_at("Нікуди").is_empty());
        // Exact match only
        assert!(index.lines_at("площа ринок").is_empty());
        assert!(!index.contains("Нікуди"));
    }

    #[test]
    fn all_stops_sorted_by_alphabet() {
        let index = StopIndex::build(&lviv());
        assert_eq!(
            index.all_stops_sorted(),
            &["Арена", "Вокзал", "Ґалицька", "Київська", "Площа Ринок", "Погулянка"]
        );
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn equal_keys_keep_first_seen_order() {
        let net = network(vec![
            LineRecord::new(id(2), "Later", &["ринок", "Б"], &[]),
            LineRecord::new(id(1), "Earlier", &["Ринок!", "А"], &["РИНОК"]),
        ]);
        let index = StopIndex::build(&net);

        // Line 1 comes first (ascending id), forward before reverse
        assert_eq!(index.all_stops_sorted(), &["А", "Б", "Ринок!", "РИНОК", "ринок"]);
    }

    #[test]
    fn names_outside_alphabet_sort_first() {
        let net = network(vec![LineRecord::new(
            id(1),
            "Mixed",
            &["Бульвар", "Depot", "Аеропорт", "42"],
            &[],
        )]);
        let index = StopIndex::build(&net);
        assert_eq!(
            index.all_stops_sorted(),
            &["Depot", "42", "Аеропорт", "Бульвар"]
        );
    }

    #[test]
    fn custom_collation() {
        let net = network(vec![LineRecord::new(
            id(1),
            "Depot - Square",
            &["Square", "Market", "Depot"],
            &[],
        )]);
        let index = StopIndex::build_with(&net, &Collation::new("abcdefghijklmnopqrstuvwxyz"));
        assert_eq!(index.all_stops_sorted(), &["Depot", "Market", "Square"]);
    }

    #[test]
    fn rebuild_is_equal() {
        let net = lviv();
        assert_eq!(StopIndex::build(&net), StopIndex::build(&net));
    }

    #[test]
    fn empty_network_gives_empty_index() {
        let index = StopIndex::build(&Network::default());
        assert!(index.is_empty());
        assert!(index.all_stops_sorted().is_empty());
    }
}
