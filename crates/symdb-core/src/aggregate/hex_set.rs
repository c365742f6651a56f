use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of hex value strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct HexSet {
    values: Vec<String>,
    seen: HashSet<String>,
}

impl HexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning false if it was already present
    pub fn insert(&mut self, value: String) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.values.push(value);
        true
    }

    /// Insert every value not yet present, returning how many were added
    pub fn union<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut added = 0;
        for value in values {
            if self.insert(value) {
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<String> for HexSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        set.union(iter);
        set
    }
}

impl From<Vec<String>> for HexSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<HexSet> for Vec<String> {
    fn from(set: HexSet) -> Self {
        set.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_insert_keeps_first_seen_order() {
        let mut set = HexSet::new();
        assert!(set.insert("0xB".to_string()));
        assert!(set.insert("0xA".to_string()));
        assert!(!set.insert("0xB".to_string()));
        assert_eq!(set.as_slice(), strings(&["0xB", "0xA"]).as_slice());
    }

    #[test]
    fn test_union_drops_seen_values() {
        let mut set: HexSet = strings(&["0xAAAA"]).into();
        let added = set.union(strings(&["0xAAAA", "0xBBBB", "0xBBBB", "0xCCCC"]));
        assert_eq!(added, 2);
        assert_eq!(
            set.as_slice(),
            strings(&["0xAAAA", "0xBBBB", "0xCCCC"]).as_slice()
        );
        assert!(set.contains("0xCCCC"));
        assert!(!set.contains("0xDDDD"));
    }

    #[test]
    fn test_serializes_as_list() {
        let set: HexSet = strings(&["0x2", "0x1", "0x2"]).into();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["0x2","0x1"]"#);

        let back: HexSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
