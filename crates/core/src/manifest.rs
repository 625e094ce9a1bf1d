// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Metadata manifest parsing.
//!
//! A manifest is a flat text file of `key: value` lines. Entries are
//! delimited by the repeating `ProfileName` key: each occurrence starts a
//! new entry and flushes the previous one. Lines without a colon or with
//! an empty key carry no information and are skipped; this is intentional
//! policy, not error recovery.

use std::path::Path;

use crate::error::Result;

/// Key that starts a new manifest entry.
pub const MARKER_KEY: &str = "ProfileName";

/// Key whose presence marks an entry as a derived timing measurement.
pub const TOA_KEY: &str = "TOA";

/// Classification of a finished manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// References a raw archive product to be uploaded.
    Archive,
    /// A derived time-of-arrival measurement record.
    Toa,
}

/// One manifest entry: an ordered field mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    fields: Vec<(String, String)>,
}

impl Entry {
    /// Returns the value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Inserts a field, overwriting an earlier duplicate key.
    pub fn insert(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Entries carrying a time-of-arrival field are measurements, not
    /// archive references.
    pub fn kind(&self) -> EntryKind {
        if self.get(TOA_KEY).is_some() {
            EntryKind::Toa
        } else {
            EntryKind::Archive
        }
    }

    /// The file name an archive entry refers to: the marker key's value.
    pub fn profile_name(&self) -> Option<&str> {
        self.get(MARKER_KEY)
    }
}

/// Splits one manifest line on its first colon.
///
/// Values may contain colons of their own. Returns None for lines that
/// contribute nothing: no colon, or an empty key.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Parses manifest text into entries, in first-seen order.
pub fn parse(text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut entry = Entry::default();
    for line in text.lines() {
        let Some((key, value)) = parse_line(line) else {
            continue;
        };
        if key == MARKER_KEY && !entry.is_empty() {
            entries.push(std::mem::take(&mut entry));
        }
        entry.insert(key.to_string(), value.to_string());
    }
    if !entry.is_empty() {
        entries.push(entry);
    }
    entries
}

/// Reads and parses a manifest file.
pub fn read(path: &Path) -> Result<Vec<Entry>> {
    Ok(parse(&std::fs::read_to_string(path)?))
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
