//! Joins positional key and value lists into an ordered map.

use indexmap::IndexMap;
use std::hash::Hash;

/// Pairs each key with the value at the same position, dropping positions
/// whose value is absent.
///
/// A missing value never shows up as an entry; it only shows up as a missing
/// key. Extra positions on either side are ignored.
pub fn assemble<K, V, KI, VI>(keys: KI, values: VI) -> IndexMap<K, V>
where
    K: Hash + Eq,
    KI: IntoIterator<Item = K>,
    VI: IntoIterator<Item = Option<V>>,
{
    keys.into_iter()
        .zip(values)
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_dropped() {
        let map = assemble(vec!["a", "b", "c"], vec![Some(1), None, Some(3)]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&1));
        assert!(!map.contains_key("b"));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_insertion_order_follows_keys() {
        let map = assemble(vec!["z", "m", "a"], vec![Some(1), Some(2), Some(3)]);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["z", "m", "a"]);
    }

    #[test]
    fn test_empty_inputs() {
        let map: IndexMap<&str, i32> = assemble(Vec::new(), Vec::new());
        assert!(map.is_empty());
    }
}
