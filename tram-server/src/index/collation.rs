//! Alphabet-based collation for stop names.

use std::collections::HashMap;

/// The Ukrainian alphabet in canonical order, lowercase.
pub const UKRAINIAN_ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

/// Orders stop names by a fixed alphabet, case-insensitively.
///
/// Each character of a name is lowercased and replaced by its position in
/// the alphabet. Characters outside the alphabet (digits, punctuation,
/// spaces, other scripts) contribute nothing to the key, so distinct
/// names can collate equal.
///
/// # Examples
///
/// ```
/// use tram_server::index::Collation;
///
/// let ukrainian = Collation::default();
/// // Ґ sorts after Г, and case is ignored
/// assert!(ukrainian.key("Героїв") < ukrainian.key("ґанок"));
/// // Punctuation and digits are ignored
/// assert_eq!(ukrainian.key("1-й Провулок"), ukrainian.key("Й провулок"));
/// ```
#[derive(Debug, Clone)]
pub struct Collation {
    positions: HashMap<char, u16>,
}

impl Collation {
    /// Build a collation from letters listed in order.
    ///
    /// Letters are lowercased; if a letter repeats, its first position
    /// counts.
    pub fn new(alphabet: &str) -> Self {
        let mut positions = HashMap::new();
        let mut next: u16 = 0;

        for letter in alphabet.chars().flat_map(char::to_lowercase) {
            if !positions.contains_key(&letter) {
                positions.insert(letter, next);
                next = next.saturating_add(1);
            }
        }

        Self { positions }
    }

    /// Collation for Ukrainian stop names.
    pub fn ukrainian() -> Self {
        Self::new(UKRAINIAN_ALPHABET)
    }

    /// Returns the sort key of `name`.
    pub fn key(&self, name: &str) -> Vec<u16> {
        name.chars()
            .flat_map(char::to_lowercase)
            .filter_map(|c| self.positions.get(&c).copied())
            .collect()
    }

    /// Returns the number of distinct letters in the alphabet.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the alphabet has no letters.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for Collation {
    fn default() -> Self {
        Self::ukrainian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(collation: &Collation, names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| (*s).to_string()).collect();
        names.sort_by_cached_key(|n| collation.key(n));
        names
    }

    #[test]
    fn ukrainian_alphabet_has_33_letters() {
        assert_eq!(Collation::ukrainian().len(), 33);
    }

    #[test]
    fn ukrainian_letter_order() {
        let c = Collation::ukrainian();
        let names = [
            "Яворівська",
            "Іллєнка",
            "Ґрунтова",
            "Героїв",
            "Їжакевича",
            "Йорданська",
            "Ирпінська",
            "Єрусалимська",
            "Енергетиків",
        ];
        assert_eq!(
            sorted(&c, &names),
            vec![
                "Героїв",
                "Ґрунтова",
                "Енергетиків",
                "Єрусалимська",
                "Ирпінська",
                "Іллєнка",
                "Їжакевича",
                "Йорданська",
                "Яворівська",
            ]
        );
    }

    #[test]
    fn case_insensitive() {
        let c = Collation::ukrainian();
        assert_eq!(c.key("ВОКЗАЛ"), c.key("вокзал"));
        assert_eq!(c.key("Їжакевича"), c.key("їжакевича"));
    }

    #[test]
    fn foreign_characters_dropped() {
        let c = Collation::ukrainian();
        assert!(c.key("Depot 42").is_empty());
        assert_eq!(c.key("пл. Ринок"), c.key("плРинок"));
        assert_eq!(c.key("вул. Шевченка (кінцева)"), c.key("вулШевченкакінцева"));
    }

    #[test]
    fn prefix_sorts_first() {
        let c = Collation::ukrainian();
        assert!(c.key("Парк") < c.key("Парковий"));
    }

    #[test]
    fn custom_alphabet() {
        let c = Collation::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(c.len(), 26);
        assert_eq!(
            sorted(&c, &["Square", "depot", "Market"]),
            vec!["depot", "Market", "Square"]
        );
    }

    #[test]
    fn repeated_letters_keep_first_position() {
        let c = Collation::new("abca");
        assert_eq!(c.len(), 3);
        assert_eq!(c.key("a"), vec![0]);
    }
}
