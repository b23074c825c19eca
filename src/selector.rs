//! Category partitioning and capped selection.

use crate::types::{Category, ClassifiedQuote};

/// Classified quotes partitioned by category.
///
/// Partitions are a fixed-size array indexed by the category's position in
/// `Category::ALL`; input order is preserved within each partition.
pub struct CategoryPartitions {
    partitions: [Vec<ClassifiedQuote>; Category::ALL.len()],
}

impl CategoryPartitions {
    /// Partition records by category, preserving input order.
    pub fn from_records(records: Vec<ClassifiedQuote>) -> Self {
        let mut partitions: [Vec<ClassifiedQuote>; Category::ALL.len()] = Default::default();
        for record in records {
            // Discriminants follow Category::ALL order (asserted in tests)
            partitions[record.category as usize].push(record);
        }
        Self { partitions }
    }

    /// Per-category record counts in `Category::ALL` order.
    pub fn counts(&self) -> [(Category, usize); Category::ALL.len()] {
        let mut counts = [(Category::default(), 0); Category::ALL.len()];
        for (slot, category) in Category::ALL.iter().enumerate() {
            counts[slot] = (*category, self.partitions[slot].len());
        }
        counts
    }

    /// Take at most `cap` records per category, concatenated in
    /// `Category::ALL` order. Selection is purely positional: the first
    /// `cap` records of each partition, never padded, never shuffled.
    pub fn select(self, cap: usize) -> Vec<ClassifiedQuote> {
        let mut selected = Vec::new();
        for partition in self.partitions {
            selected.extend(partition.into_iter().take(cap));
        }
        selected
    }
}
