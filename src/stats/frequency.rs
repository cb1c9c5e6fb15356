use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Value counts – explicit frequency table with a deterministic order
// ---------------------------------------------------------------------------

/// Occurrence count per distinct value, ordered by descending count.
///
/// Equal counts keep the ascending order of the values themselves, so the
/// mode of a tie is always the smallest tied value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCounts<T> {
    counts: Vec<(T, usize)>,
}

impl<T: Ord> ValueCounts<T> {
    /// Count every value yielded by `values`.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut table: BTreeMap<T, usize> = BTreeMap::new();
        for v in values {
            *table.entry(v).or_insert(0) += 1;
        }
        let mut counts: Vec<(T, usize)> = table.into_iter().collect();
        // Stable sort keeps the BTreeMap's ascending order among ties.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Self { counts }
    }
}

impl<T> ValueCounts<T> {
    /// The most frequent value, or `None` when nothing was counted.
    pub fn mode(&self) -> Option<&T> {
        self.counts.first().map(|(v, _)| v)
    }

    /// The most frequent value together with its count.
    pub fn mode_with_count(&self) -> Option<(&T, usize)> {
        self.counts.first().map(|(v, n)| (v, *n))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(v, n)| (v, *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_descending_count() {
        let vc = ValueCounts::from_values(["b", "a", "b", "c", "b", "a"]);
        let ordered: Vec<_> = vc.iter().collect();
        assert_eq!(ordered, vec![(&"b", 3), (&"a", 2), (&"c", 1)]);
        assert_eq!(vc.mode(), Some(&"b"));
        assert_eq!(vc.mode_with_count(), Some((&"b", 3)));
        assert_eq!(vc.iter().count(), 3);
    }

    #[test]
    fn ties_resolve_to_smallest_value() {
        let vc = ValueCounts::from_values([17, 8, 8, 17, 12]);
        assert_eq!(vc.mode(), Some(&8));
        let ordered: Vec<_> = vc.iter().map(|(v, _)| *v).collect();
        assert_eq!(ordered, vec![8, 17, 12]);
    }

    #[test]
    fn empty_input_has_no_mode() {
        let vc = ValueCounts::<u32>::from_values([]);
        assert!(vc.is_empty());
        assert_eq!(vc.mode(), None);
        assert_eq!(vc.mode_with_count(), None);
    }
}
