// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::seq::record::SeqRecord;

/// Header -> sequence map that remembers the order in which headers were first seen.
///
/// Inserting a header that is already present replaces its sequence but keeps its position, so
/// a file with duplicate headers yields the last sequence at the first header's rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeqMap {
    records: Vec<SeqRecord>,
    index: HashMap<String, usize>,
}

impl SeqMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sequence that was replaced, if any.
    pub fn insert(&mut self, header: String, sequence: String) -> Option<String> {
        if let Some(&i) = self.index.get(&header) {
            return Some(std::mem::replace(&mut self.records[i].sequence, sequence));
        }
        self.index.insert(header.clone(), self.records.len());
        self.records.push(SeqRecord { header, sequence });
        None
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.index
            .get(header)
            .map(|&i| self.records[i].sequence.as_str())
    }

    pub fn contains_header(&self, header: &str) -> bool {
        self.index.contains_key(header)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeqRecord> {
        self.records.iter()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|rec| rec.header.as_str())
    }

    /// Sum of all sequence lengths, in characters.
    pub fn total_length(&self) -> usize {
        self.records
            .iter()
            .map(|rec| rec.sequence.chars().count())
            .sum()
    }

    pub fn into_records(self) -> Vec<SeqRecord> {
        self.records
    }
}

impl IntoIterator for SeqMap {
    type Item = SeqRecord;
    type IntoIter = std::vec::IntoIter<SeqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a SeqMap {
    type Item = &'a SeqRecord;
    type IntoIter = std::slice::Iter<'a, SeqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<(String, String)> for SeqMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = SeqMap::new();
        for (header, sequence) in iter {
            map.insert(header, sequence);
        }
        map
    }
}

// A JSON object in first-seen order, not an array of records.
impl Serialize for SeqMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for rec in &self.records {
            map.serialize_entry(&rec.header, &rec.sequence)?;
        }
        map.end()
    }
}
