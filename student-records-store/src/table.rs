use dashmap::DashMap;
use student_records_core::{Identified, Page};

use crate::error::{StoreError, StoreResult};

/// One resource's records, keyed by lower-cased id.
#[derive(Debug)]
pub struct Table<T> {
    resource: &'static str,
    rows: DashMap<String, T>,
}

fn key(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

impl<T> Table<T>
where
    T: Identified + Clone,
{
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            rows: DashMap::new(),
        }
    }

    pub fn seeded(resource: &'static str, rows: impl IntoIterator<Item = T>) -> Self {
        let table = Self::new(resource);
        for row in rows {
            table.insert(row);
        }
        table
    }

    pub fn insert(&self, row: T) -> Option<T> {
        self.rows.insert(key(row.id()), row)
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.rows.get(&key(id)).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Matching rows in id order.
    pub fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let mut rows: Vec<(String, T)> = self
            .rows
            .iter()
            .filter(|r| predicate(r.value()))
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows.into_iter().map(|(_, row)| row).collect()
    }

    pub fn all(&self) -> Vec<T> {
        self.select(|_| true)
    }

    /// One page of the matching rows plus the total match count.
    pub fn page(&self, predicate: impl Fn(&T) -> bool, offset: usize, limit: usize) -> Page<T> {
        let matches = self.select(predicate);
        let total = matches.len();
        let items = matches.into_iter().skip(offset).take(limit).collect();
        Page::new(items, total)
    }

    /// Overwrite an existing row.
    pub fn replace(&self, id: &str, row: T) -> StoreResult<T> {
        match self.rows.get_mut(&key(id)) {
            Some(mut existing) => {
                *existing = row.clone();
                Ok(row)
            }
            None => Err(StoreError::NotFound {
                resource: self.resource,
                id: id.to_string(),
            }),
        }
    }
}
