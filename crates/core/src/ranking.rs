// crates/core/src/ranking.rs
// frequency ranking utilities
use std::{cmp::Ordering, hash::Hash};

use crate::frequency::FrequencyTable;

/// ソート順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// Orders a frequency table by count and optionally keeps only the head.
///
/// The sort is stable: entries with equal counts keep the table's
/// first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ranking {
    order: SortOrder,
    limit: Option<usize>,
}

impl Ranking {
    pub fn new(order: SortOrder, limit: Option<usize>) -> Self {
        Self { order, limit }
    }

    /// 出現回数の多い順
    pub fn descending() -> Self {
        Self::new(SortOrder::Descending, None)
    }

    pub fn ascending() -> Self {
        Self::new(SortOrder::Ascending, None)
    }

    /// Keep at most `limit` entries after sorting.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// 並べ替えた新しいテーブルを返す
    pub fn apply<K>(&self, mut table: FrequencyTable<K>) -> FrequencyTable<K>
    where
        K: Eq + Hash + Clone,
    {
        let order = self.order;
        table.sort_by(|a, b| order.apply(a.1.cmp(&b.1)));
        if let Some(limit) = self.limit {
            table.truncate(limit);
        }
        table
    }
}

// ============================================================================
// Tests
// ============================================================================
