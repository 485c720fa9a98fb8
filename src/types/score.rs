use crate::error::{PersonaError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-category score totals for one completed attempt. The key set is fixed
/// at construction from the test's declared categories; `add` rejects keys
/// outside it rather than accepting arbitrary strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreMap {
    order: Vec<String>,
    totals: BTreeMap<String, i32>,
}

impl ScoreMap {
    pub fn new(categories: &[String]) -> Self {
        let totals = categories
            .iter()
            .map(|category| (category.clone(), 0))
            .collect();
        Self {
            order: categories.to_vec(),
            totals,
        }
    }

    pub fn add(&mut self, category: &str, delta: i32) -> Result<()> {
        match self.totals.get_mut(category) {
            Some(total) => {
                *total += delta;
                Ok(())
            }
            None => Err(PersonaError::UndeclaredScoreKey(category.to_string())),
        }
    }

    pub fn get(&self, category: &str) -> Option<i32> {
        self.totals.get(category).copied()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.totals.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates entries in declared category order, not map order. The
    /// declared order is the ranking tie-break downstream.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.order
            .iter()
            .map(|category| (category.as_str(), self.totals[category]))
    }
}
