//! Occurrence counting for named platform events.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::trace;

/// Count plus the order in which the name was first seen, for
/// deterministic tie-breaking.
#[derive(Debug, Clone, Copy)]
struct Tally {
    count: u64,
    first_seen: u64,
}

#[derive(Debug, Default)]
struct CounterInner {
    tallies: HashMap<String, Tally>,
    next_seen: u64,
}

/// Tallies every observed platform notification by name and answers
/// ranking and exact-count queries.
///
/// An explicitly constructed instance owned by the hosting agent; there is
/// no process-global counter. Internally one exclusive lock guards the
/// map, so [`top`](EventCounter::top) ranks a consistent snapshot.
///
/// Ranking ties (equal counts) break by first-seen order, so repeated
/// queries over unchanged state always return the same sequence.
#[derive(Debug, Default)]
pub struct EventCounter {
    inner: Mutex<CounterInner>,
}

impl EventCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `name`, initializing it to 1 on first
    /// sight.
    pub fn tick(&self, name: &str) {
        let mut inner = self.inner.lock();
        if let Some(tally) = inner.tallies.get_mut(name) {
            tally.count += 1;
            return;
        }
        let first_seen = inner.next_seen;
        inner.next_seen += 1;
        inner
            .tallies
            .insert(name.to_string(), Tally { count: 1, first_seen });
        trace!(event = name, "first occurrence of event");
    }

    /// Current count for `name`; 0 for names never ticked.
    pub fn count(&self, name: &str) -> u64 {
        self.inner
            .lock()
            .tallies
            .get(name)
            .map_or(0, |tally| tally.count)
    }

    /// Number of distinct names seen.
    pub fn distinct(&self) -> usize {
        self.inner.lock().tallies.len()
    }

    /// The `n` most frequent event names with their counts, descending by
    /// count, ties in first-seen order. Returns everything seen when
    /// fewer than `n` names exist.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = self.snapshot();
        ranked.truncate(n);
        ranked
    }

    /// Every `(name, count)` pair in ranking order, for administrative
    /// dumps.
    pub fn snapshot(&self) -> Vec<(String, u64)> {
        let inner = self.inner.lock();
        let mut ranked: Vec<(&String, &Tally)> = inner.tallies.iter().collect();
        ranked.sort_unstable_by(|(_, a), (_, b)| {
            b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen))
        });
        ranked
            .into_iter()
            .map(|(name, tally)| (name.clone(), tally.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_number_of_ticks() {
        let counter = EventCounter::new();
        for _ in 0..3 {
            counter.tick("message_create");
        }
        assert_eq!(counter.count("message_create"), 3);
        assert_eq!(counter.count("never_seen"), 0);
    }

    #[test]
    fn top_ranks_by_count_descending() {
        let counter = EventCounter::new();
        for _ in 0..3 {
            counter.tick("a");
        }
        for _ in 0..5 {
            counter.tick("b");
        }
        let top = counter.top(1);
        assert_eq!(top, vec![("b".to_string(), 5)]);
    }

    #[test]
    fn top_with_fewer_names_than_n_returns_all() {
        let counter = EventCounter::new();
        counter.tick("a");
        counter.tick("b");
        assert_eq!(counter.top(5).len(), 2);
    }

    #[test]
    fn equal_counts_rank_in_first_seen_order() {
        let counter = EventCounter::new();
        counter.tick("later");
        counter.tick("later");
        counter.tick("earlier_but_fewer");
        counter.tick("also_two");
        counter.tick("also_two");
        let names: Vec<String> = counter.top(3).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["later", "also_two", "earlier_but_fewer"]);
    }

    #[test]
    fn distinct_counts_unique_names() {
        let counter = EventCounter::new();
        counter.tick("a");
        counter.tick("a");
        counter.tick("b");
        assert_eq!(counter.distinct(), 2);
    }
}
