//! The in-memory tram network.

use std::collections::{BTreeMap, HashSet};

use tracing::warn;

use super::{Line, LineId, LineRecord, NetworkError};

/// Every line of the network, keyed by line number.
///
/// Built once by [`Network::load`] and never mutated afterwards. Lines are
/// iterated in ascending id order, which is also the order in which route
/// search considers them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    lines: BTreeMap<LineId, Line>,
    /// Distinct stop names over all lines.
    stop_count: usize,
}

/// Outcome of loading a network: the lines that validated, plus the
/// per-line errors for records that were skipped.
#[derive(Debug, Clone)]
pub struct LoadedNetwork {
    pub network: Network,
    pub skipped: Vec<NetworkError>,
}

impl Network {
    /// Build a network from raw line records.
    ///
    /// A malformed record is skipped (and reported in
    /// [`LoadedNetwork::skipped`]) without affecting the other lines.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::DuplicateLineId`] if two records share an id,
    /// whether or not either of them is otherwise valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use tram_server::domain::{LineId, LineRecord, Network};
    ///
    /// let one = LineId::new(1).unwrap();
    /// let records = vec![LineRecord::new(one, "Depot - Square", &["Depot", "Market", "Square"], &[])];
    ///
    /// let loaded = Network::load(records).unwrap();
    /// assert!(loaded.skipped.is_empty());
    /// assert_eq!(loaded.network.len(), 1);
    /// assert!(loaded.network.contains_stop("Market"));
    /// ```
    pub fn load(records: impl IntoIterator<Item = LineRecord>) -> Result<LoadedNetwork, NetworkError> {
        let mut lines = BTreeMap::new();
        let mut malformed: BTreeMap<LineId, NetworkError> = BTreeMap::new();

        for record in records {
            let id = record.id;
            if lines.contains_key(&id) || malformed.contains_key(&id) {
                return Err(NetworkError::DuplicateLineId(id));
            }

            match Line::from_record(record) {
                Ok(line) => {
                    lines.insert(id, line);
                }
                Err(reason) => {
                    warn!(line = %id, reason, "Skipping malformed line");
                    malformed.insert(id, NetworkError::MalformedLine { id, reason });
                }
            }
        }

        let stop_count = lines
            .values()
            .flat_map(|line| line.stop_names())
            .collect::<HashSet<_>>()
            .len();

        Ok(LoadedNetwork {
            network: Network { lines, stop_count },
            skipped: malformed.into_values().collect(),
        })
    }

    /// Look up a line by number.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    /// Returns all lines in ascending id order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the network has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct stops served by any line.
    pub fn stop_count(&self) -> usize {
        self.stop_count
    }

    /// Returns true if any line calls at `stop` in either direction.
    pub fn contains_stop(&self, stop: &str) -> bool {
        self.lines().any(|line| line.serves(stop))
    }
}
