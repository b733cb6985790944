//! Input reference table
//!
//! Built once from the configured inputs and the persisted names. The
//! position of an entry is its identifier on the accessory side, so the
//! table is never reordered after construction.

use std::collections::BTreeMap;

use crate::config::InputSpec;

/// A resolved input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEntry {
    /// Reference as written in the configuration; key of the persisted names
    pub raw_reference: String,
    /// Reference with all whitespace removed, as sent in `SI{reference}`
    pub reference: String,
    /// Name shown for the input
    pub configured_name: String,
}

/// Ordered table of resolved inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTable {
    entries: Vec<InputEntry>,
}

impl InputTable {
    /// Resolve configured inputs against the persisted names.
    ///
    /// Entries without a reference are dropped. The shown name is the
    /// persisted one, then the configured one, then the raw reference.
    pub fn resolve(specs: &[InputSpec], saved_names: &BTreeMap<String, String>) -> Self {
        let entries = specs
            .iter()
            .filter_map(|spec| {
                let raw_reference = spec.raw_reference().filter(|r| !r.is_empty())?;
                let reference: String = raw_reference
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();

                let configured_name = saved_names
                    .get(raw_reference)
                    .filter(|name| !name.is_empty())
                    .map(String::as_str)
                    .or_else(|| spec.name())
                    .unwrap_or(raw_reference)
                    .to_string();

                Some(InputEntry {
                    raw_reference: raw_reference.to_string(),
                    reference,
                    configured_name,
                })
            })
            .collect();

        Self { entries }
    }

    /// Identifier of the first entry whose reference equals `reference`
    pub fn position(&self, reference: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.reference == reference)
    }

    pub fn get(&self, identifier: usize) -> Option<&InputEntry> {
        self.entries.get(identifier)
    }

    pub(crate) fn get_mut(&mut self, identifier: usize) -> Option<&mut InputEntry> {
        self.entries.get_mut(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEntry> {
        self.entries.iter()
    }

    /// Stripped references in identifier order
    pub fn references(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.reference.as_str()).collect()
    }
}
