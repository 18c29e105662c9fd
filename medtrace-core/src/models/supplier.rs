//! Supplier identity and the id → display-name directory.
//!
//! The directory also remembers which suppliers are blacklisted.
//!
//! # Examples
//!
//! ```
//! use medtrace_core::models::{SupplierDirectory, SupplierId};
//!
//! let directory = SupplierDirectory::from_pairs([("S1", "Acme Pharma")]);
//! assert_eq!(directory.display_name(&SupplierId::from("S1")), "Acme Pharma");
//! assert_eq!(directory.display_name(&SupplierId::from("S2")), "Unknown");
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::UNKNOWN_SUPPLIER_NAME;

/// Supplier identifier as issued by the backend.
///
/// Ordered so it can key the deterministic grouping maps and serve as the
/// trust-score tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierId(pub String);

impl SupplierId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank ids are treated as "no supplier".
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SupplierId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SupplierId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One entry of the supplier listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierEntry {
    pub id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub blacklisted: bool,
}

impl SupplierEntry {
    pub fn new(id: impl Into<SupplierId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            blacklisted: false,
        }
    }

    pub fn blacklisted(mut self) -> Self {
        self.blacklisted = true;
        self
    }
}

/// Lookup from supplier id to display name and blacklist status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierDirectory {
    names: HashMap<SupplierId, String>,
    blacklisted: HashSet<SupplierId>,
}

impl SupplierDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(id, name)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<SupplierId>,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
            blacklisted: HashSet::new(),
        }
    }

    pub fn insert(&mut self, id: impl Into<SupplierId>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    /// Record (or overwrite) an entry, blacklist flag included.
    pub fn insert_entry(&mut self, entry: SupplierEntry) {
        if entry.blacklisted {
            self.blacklisted.insert(entry.id.clone());
        } else {
            self.blacklisted.remove(&entry.id);
        }
        self.names.insert(entry.id, entry.name);
    }

    pub fn get(&self, id: &SupplierId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Name for `id`, or `"Unknown"` when the directory has no entry.
    pub fn display_name(&self, id: &SupplierId) -> &str {
        self.get(id).unwrap_or(UNKNOWN_SUPPLIER_NAME)
    }

    pub fn is_blacklisted(&self, id: &SupplierId) -> bool {
        self.blacklisted.contains(id)
    }

    /// Every known supplier id, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &SupplierId> {
        self.names.keys()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<SupplierEntry> for SupplierDirectory {
    fn from_iter<T: IntoIterator<Item = SupplierEntry>>(iter: T) -> Self {
        let mut directory = Self::new();
        for entry in iter {
            directory.insert_entry(entry);
        }
        directory
    }
}
