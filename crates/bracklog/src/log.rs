//! Log — the ordered, read-only collection of extracted records.
//!
//! Append-only at construction; afterwards the only mutation is the
//! in-place datetime re-sort, which reorders the sequence without touching
//! the records themselves.

use std::ops::Index;
use std::slice;
use std::vec;

use serde::Serialize;

use crate::model::LogRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Log {
    records: Vec<LogRecord>,
}

impl Log {
    pub(crate) fn new(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LogRecord> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&LogRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&LogRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    /// Re-sort the records in place by datetime, descending by default
    /// (newest first).
    ///
    /// The sort is stable in both directions: records with equal datetimes
    /// keep their original match order whether sorting descending or
    /// ascending. Ties never invert.
    pub fn sort_by_datetime(&mut self, ascending: bool) {
        if self.records.len() <= 1 {
            return;
        }
        if ascending {
            self.records.sort_by(|a, b| a.datetime.cmp(&b.datetime));
        } else {
            self.records.sort_by(|a, b| b.datetime.cmp(&a.datetime));
        }
    }
}

impl Index<usize> for Log {
    type Output = LogRecord;

    fn index(&self, index: usize) -> &LogRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Log {
    type Item = &'a LogRecord;
    type IntoIter = slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Log {
    type Item = LogRecord;
    type IntoIter = vec::IntoIter<LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
