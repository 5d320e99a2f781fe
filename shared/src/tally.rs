use std::collections::BTreeMap;
use serde::Serialize;
use crate::models::{ProductId, Vote};

/// Vote counts per product, derived from a snapshot of recorded votes.
///
/// Every key has a count of at least one and the counts add up to the number
/// of votes the tally was built from. Iteration follows `ProductId` ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    counts: BTreeMap<ProductId, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, product_id: &ProductId) {
        *self.counts.entry(product_id.clone()).or_insert(0) += 1;
    }

    pub fn get(&self, product_id: &ProductId) -> usize {
        self.counts.get(product_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, usize)> {
        self.counts.iter().map(|(id, &count)| (id, count))
    }
}

impl<'a> FromIterator<&'a Vote> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a Vote>>(votes: I) -> Self {
        let mut tally = Self::new();
        votes.into_iter().for_each(|vote| tally.record(&vote.product_id));
        tally
    }
}

pub fn aggregate(votes: &[Vote]) -> Tally {
    votes.iter().collect()
}
