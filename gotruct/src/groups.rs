//! @ai:module:intent Accumulate converter records into groups keyed by group identifier
//! @ai:module:layer domain
//! @ai:module:public_api ConverterGroups
//! @ai:module:depends_on declaration, extractor, matcher
//! @ai:module:stateless true

use crate::declaration::{ConverterRecord, DeclarationBlock};
use crate::extractor::{extract_blocks, MatchedBlock};
use crate::matcher::Matcher;
use serde::Serialize;
use std::collections::BTreeMap;

/// @ai:intent Mapping from group key to the records discovered under it
/// @ai:invariant every stored group holds at least one record
/// @ai:invariant keys are stored exactly as extracted, never case-transformed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConverterGroups {
    groups: BTreeMap<String, Vec<ConverterRecord>>,
}

impl ConverterGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Append records to a group, creating it on first use
    /// @ai:post an empty `records` leaves the mapping unchanged
    /// @ai:effects pure
    pub fn insert(&mut self, key: &str, records: impl IntoIterator<Item = ConverterRecord>) {
        let mut records = records.into_iter().peekable();
        if records.peek().is_none() {
            return;
        }

        match self.groups.get_mut(key) {
            Some(existing) => existing.extend(records),
            None => {
                self.groups.insert(key.to_string(), records.collect());
            }
        }
    }

    /// @ai:intent Append every group of another accumulator after this one's records
    /// @ai:effects pure
    pub fn merge(&mut self, other: ConverterGroups) {
        for (key, records) in other.groups {
            self.insert(&key, records);
        }
    }

    /// @ai:intent Fold a file's declaration blocks into a fresh accumulator
    /// @ai:effects pure
    pub fn fold_blocks(blocks: &[DeclarationBlock], matcher: &Matcher) -> Self {
        extract_blocks(blocks, matcher)
            .inspect(|block| {
                tracing::debug!(
                    "{}:{} matched group {} ({} types)",
                    block.location.file.display(),
                    block.location.line,
                    block.group_key,
                    block.records.len()
                );
            })
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&[ConverterRecord]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// @ai:intent Iterate groups in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ConverterRecord])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Extend<MatchedBlock> for ConverterGroups {
    fn extend<I: IntoIterator<Item = MatchedBlock>>(&mut self, iter: I) {
        for block in iter {
            self.insert(&block.group_key, block.records);
        }
    }
}

impl FromIterator<MatchedBlock> for ConverterGroups {
    fn from_iter<I: IntoIterator<Item = MatchedBlock>>(iter: I) -> Self {
        let mut groups = Self::new();
        groups.extend(iter);
        groups
    }
}
