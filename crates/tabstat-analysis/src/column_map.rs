use serde::{Serialize, Serializer};

/// An ordered mapping keyed by column name.
///
/// Entries keep the order in which they were configured, and serialize as a
/// JSON object in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for ColumnMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> FromIterator<(String, V)> for ColumnMap<V> {
    /// Collects entries; a repeated column keeps its first value.
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        for (column, value) in iter {
            if !map.contains(&column) {
                map.entries.push((column, value));
            }
        }
        map
    }
}

impl<V> ColumnMap<V> {
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&V> {
        self.entries
            .iter()
            .find_map(|(c, v)| (c == column).then_some(v))
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }
}

impl<V> Serialize for ColumnMap<V>
where
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_configured_order() {
        let map = [("b".to_owned(), 1), ("a".to_owned(), 2)]
            .into_iter()
            .collect::<ColumnMap<_>>();
        assert_eq!(map.columns().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let map = [("a".to_owned(), 1), ("a".to_owned(), 2)]
            .into_iter()
            .collect::<ColumnMap<_>>();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), None);
    }
}
