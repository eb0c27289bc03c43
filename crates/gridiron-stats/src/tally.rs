use std::{cmp::Ordering, collections::BTreeMap};

/// Occurrence counts per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<K> {
    counts: BTreeMap<K, u32>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

/// Every key sharing the highest count, in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaders<'a, K> {
    pub count: u32,
    pub keys: Vec<&'a K>,
}

impl<K> Tally<K>
where
    K: Ord,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    #[must_use]
    pub fn get(&self, key: &K) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, u32)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }

    /// Keys with the maximum count, found in one pass that keeps a running
    /// maximum and restarts the list whenever it is beaten.
    ///
    /// Returns `None` for an empty tally.
    #[must_use]
    pub fn leaders(&self) -> Option<Leaders<'_, K>> {
        let mut count = 0;
        let mut keys = Vec::new();
        for (key, &n) in &self.counts {
            match n.cmp(&count) {
                Ordering::Greater => {
                    count = n;
                    keys.clear();
                    keys.push(key);
                }
                Ordering::Equal => keys.push(key),
                Ordering::Less => {}
            }
        }
        (!keys.is_empty()).then_some(Leaders { count, keys })
    }
}

impl<K> FromIterator<K> for Tally<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.increment(key);
        }
        tally
    }
}
