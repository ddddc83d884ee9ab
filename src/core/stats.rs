//! Per-station aggregates and the station → aggregate map.
//!
//! Everything is kept in integer tenths; `sum` is exact for the whole run.

use std::collections::{HashMap, hash_map};

/// Running min / max / count / sum for one station.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StationStats {
    pub min: i32,
    pub max: i32,
    pub count: u64,
    pub sum: i64,
}

impl StationStats {
    /// First observation of a station.
    #[inline]
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self {
            min: value,
            max: value,
            count: 1,
            sum: i64::from(value),
        }
    }

    #[inline]
    pub fn observe(&mut self, value: i32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.count += 1;
        self.sum += i64::from(value);
    }

    /// Same result as replaying every observation of `other` through `observe`.
    #[inline]
    pub fn merge(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.count += other.count;
        self.sum += other.sum;
    }
}

/// Station name → aggregate. Used both per chunk and for the whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StationMap {
    inner: HashMap<String, StationStats>,
}

impl StationMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one reading in, allocating the key only on first sight.
    #[inline]
    pub fn observe(&mut self, station: &str, value: i32) {
        if let Some(stats) = self.inner.get_mut(station) {
            stats.observe(value);
        } else {
            self.inner
                .insert(station.to_owned(), StationStats::new(value));
        }
    }

    /// Absorb `other`, moving its keys rather than copying them.
    pub fn merge(&mut self, other: StationMap) {
        for (station, stats) in other.inner {
            match self.inner.entry(station) {
                hash_map::Entry::Occupied(mut e) => e.get_mut().merge(&stats),
                hash_map::Entry::Vacant(e) => {
                    e.insert(stats);
                }
            }
        }
    }

    #[must_use]
    pub fn get(&self, station: &str) -> Option<&StationStats> {
        self.inner.get(station)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StationStats)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for StationMap {
    type Item = (String, StationStats);
    type IntoIter = hash_map::IntoIter<String, StationStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> FromIterator<(&'a str, i32)> for StationMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, i32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (station, value) in iter {
            map.observe(station, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_of(values: &[i32]) -> StationStats {
        let mut s = StationStats::new(values[0]);
        for &v in &values[1..] {
            s.observe(v);
        }
        s
    }

    #[test]
    fn first_observation_initialises_everything() {
        let s = StationStats::new(-32);
        assert_eq!(
            s,
            StationStats {
                min: -32,
                max: -32,
                count: 1,
                sum: -32
            }
        );
    }

    #[test]
    fn observe_tracks_extrema_and_sum() {
        let s = stats_of(&[100, 200, -55]);
        assert_eq!((s.min, s.max, s.count, s.sum), (-55, 200, 3, 245));
    }

    #[test]
    fn merge_equals_replay() {
        let mut a = stats_of(&[5, -7]);
        a.merge(&stats_of(&[12, 0, 3]));
        assert_eq!(a, stats_of(&[5, -7, 12, 0, 3]));
    }

    #[test]
    fn merge_is_commutative_and_associative() {
        let (a, b, c) = (stats_of(&[1, 9]), stats_of(&[-4]), stats_of(&[30, 2, 2]));

        let mut ab = a;
        ab.merge(&b);
        let mut ba = b;
        ba.merge(&a);
        assert_eq!(ab, ba);

        let mut left = ab;
        left.merge(&c);
        let mut bc = b;
        bc.merge(&c);
        let mut right = a;
        right.merge(&bc);
        assert_eq!(left, right);
    }

    #[test]
    fn sum_does_not_overflow_i32() {
        let mut s = StationStats::new(i32::MAX);
        s.observe(i32::MAX);
        assert_eq!(s.sum, 2 * i64::from(i32::MAX));
    }

    #[test]
    fn map_merge_inserts_and_combines() {
        let mut global: StationMap = [("A", 10), ("B", 20)].into_iter().collect();
        let chunk: StationMap = [("A", -5), ("C", 7)].into_iter().collect();
        global.merge(chunk);

        assert_eq!(global.len(), 3);
        assert_eq!(global.get("A"), Some(&stats_of(&[10, -5])));
        assert_eq!(global.get("C"), Some(&StationStats::new(7)));
    }

    #[test]
    fn merging_empty_map_changes_nothing() {
        let mut global: StationMap = [("A", 10), ("A", 3)].into_iter().collect();
        let before = global.clone();
        global.merge(StationMap::new());
        assert_eq!(global, before);
    }
}
