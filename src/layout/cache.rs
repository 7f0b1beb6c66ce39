use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::model::{BoardLayout, Task, TimeUnit, Viewport};

use super::grouping::GroupBy;

/// Number of layouts kept before the oldest insertion is evicted.
const CACHE_CAPACITY: usize = 10;

/// Fingerprint of every input a layout computation depends on.
///
/// A structured value compared field-by-field, so any change to the task
/// set, granularity, anchor, viewport, grouping, or column count misses
/// the cache. Kept as data rather than a concatenated string to rule out
/// two different inputs ever formatting to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutKey {
    /// `(file_path, start, end)` per task, in input order.
    tasks: Vec<(String, NaiveDate, Option<NaiveDate>)>,
    unit: TimeUnit,
    anchor: NaiveDate,
    /// Explicit viewport bounds; `None` is the centered default window.
    viewport: Option<(NaiveDate, NaiveDate)>,
    group_by: GroupBy,
    /// Available group names, sorted so caller ordering is irrelevant.
    groups: Vec<String>,
    columns: usize,
}

impl LayoutKey {
    pub fn new(
        tasks: &[Task],
        unit: TimeUnit,
        anchor: NaiveDate,
        viewport: Option<Viewport>,
        group_by: GroupBy,
        available_groups: &[String],
        columns: usize,
    ) -> Self {
        let mut groups: Vec<String> = available_groups.to_vec();
        groups.sort();
        Self {
            tasks: tasks
                .iter()
                .map(|t| (t.file_path.clone(), t.start, t.end))
                .collect(),
            unit,
            anchor,
            viewport: viewport.map(|v| (v.start, v.end)),
            group_by,
            groups,
            columns,
        }
    }
}

/// Bounded memo of computed layouts.
///
/// Insertion-order FIFO eviction: when the capacity is exceeded the
/// single oldest entry is dropped. Hits do not refresh an entry's
/// position — this is deliberately not an LRU.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: HashMap<LayoutKey, Arc<BoardLayout>>,
    order: VecDeque<LayoutKey>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached layout for `key`, as the same `Arc` that was stored.
    pub fn get(&self, key: &LayoutKey) -> Option<Arc<BoardLayout>> {
        self.entries.get(key).cloned()
    }

    pub fn insert(&mut self, key: LayoutKey, layout: Arc<BoardLayout>) {
        if self.entries.insert(key.clone(), layout).is_none() {
            self.order.push_back(key);
            if self.order.len() > CACHE_CAPACITY {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn key(columns: usize) -> LayoutKey {
        LayoutKey::new(
            &[],
            TimeUnit::Day,
            anchor(),
            None,
            GroupBy::None,
            &[],
            columns,
        )
    }

    fn layout() -> Arc<BoardLayout> {
        Arc::new(BoardLayout::empty(TimeUnit::Day, anchor()))
    }

    #[test]
    fn hit_returns_the_stored_arc() {
        let mut cache = LayoutCache::new();
        let stored = layout();
        cache.insert(key(7), stored.clone());
        let hit = cache.get(&key(7)).unwrap();
        assert!(Arc::ptr_eq(&stored, &hit));
    }

    #[test]
    fn every_key_field_discriminates() {
        let tasks = vec![Task::new("a", anchor())];
        let base = LayoutKey::new(
            &tasks,
            TimeUnit::Day,
            anchor(),
            None,
            GroupBy::None,
            &[],
            7,
        );

        let other_columns = LayoutKey::new(
            &tasks,
            TimeUnit::Day,
            anchor(),
            None,
            GroupBy::None,
            &[],
            8,
        );
        assert_ne!(base, other_columns);

        let other_viewport = LayoutKey::new(
            &tasks,
            TimeUnit::Day,
            anchor(),
            Some(Viewport::new(anchor(), anchor())),
            GroupBy::None,
            &[],
            7,
        );
        assert_ne!(base, other_viewport);

        let other_grouping = LayoutKey::new(
            &tasks,
            TimeUnit::Day,
            anchor(),
            None,
            GroupBy::Status,
            &[],
            7,
        );
        assert_ne!(base, other_grouping);

        let mut moved = tasks.clone();
        moved[0].start = anchor() + chrono::Duration::days(1);
        let other_tasks = LayoutKey::new(
            &moved,
            TimeUnit::Day,
            anchor(),
            None,
            GroupBy::None,
            &[],
            7,
        );
        assert_ne!(base, other_tasks);
    }

    #[test]
    fn group_list_order_does_not_matter() {
        let a = LayoutKey::new(
            &[],
            TimeUnit::Day,
            anchor(),
            None,
            GroupBy::Status,
            &["Todo".into(), "Done".into()],
            7,
        );
        let b = LayoutKey::new(
            &[],
            TimeUnit::Day,
            anchor(),
            None,
            GroupBy::Status,
            &["Done".into(), "Todo".into()],
            7,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn eviction_drops_the_oldest_insertion() {
        let mut cache = LayoutCache::new();
        for columns in 1..=CACHE_CAPACITY + 1 {
            cache.insert(key(columns), layout());
        }
        assert_eq!(cache.len(), CACHE_CAPACITY);
        assert!(cache.get(&key(1)).is_none());
        assert!(cache.get(&key(2)).is_some());
        assert!(cache.get(&key(CACHE_CAPACITY + 1)).is_some());
    }

    #[test]
    fn hits_do_not_refresh_insertion_order() {
        let mut cache = LayoutCache::new();
        for columns in 1..=CACHE_CAPACITY {
            cache.insert(key(columns), layout());
        }
        // Touch the oldest entry, then insert one more.
        assert!(cache.get(&key(1)).is_some());
        cache.insert(key(CACHE_CAPACITY + 1), layout());
        // The hit did not save it.
        assert!(cache.get(&key(1)).is_none());
    }

    #[test]
    fn reinserting_an_existing_key_does_not_grow_the_queue() {
        let mut cache = LayoutCache::new();
        cache.insert(key(7), layout());
        cache.insert(key(7), layout());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = LayoutCache::new();
        cache.insert(key(7), layout());
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(&key(7)).is_none());
    }
}
