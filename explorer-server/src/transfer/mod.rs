//! Transfer stations.
//!
//! An interchange carries one code per line (Taipei Main Station is both
//! `R10` and `BL22`). Places are tagged with a single nearest code, so
//! looking up places for an interchange has to consider every code of the
//! same physical station.
//!
//! Stations are stored as groups: each member maps to a group id, and each
//! group id maps to its member list. Every member of a group resolves to the
//! same list, so the relation is symmetric without duplicated entries.

use std::collections::HashMap;

use crate::domain::StationId;

/// Index into the group list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GroupId(usize);

/// Error returned when a transfer document cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid transfer document: {0}")]
pub struct TransferParseError(#[from] serde_json::Error);

/// Lookup of physically-equivalent station codes.
#[derive(Debug, Clone, Default)]
pub struct TransferTable {
    group_of: HashMap<StationId, GroupId>,
    groups: Vec<Vec<StationId>>,
}

impl TransferTable {
    /// Create an empty table, where every station is only equivalent to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from a JSON array of groups, e.g. `[["R10", "BL22"]]`.
    ///
    /// Codes that are not valid station ids are skipped.
    pub fn from_json(json: &str) -> Result<Self, TransferParseError> {
        let groups: Vec<Vec<String>> = serde_json::from_str(json)?;
        let builder = groups.iter().fold(TransferTableBuilder::new(), |b, group| {
            let codes: Vec<&str> = group.iter().map(String::as_str).collect();
            b.group(&codes)
        });
        Ok(builder.build())
    }

    /// Add a group of equivalent stations.
    ///
    /// If any member already belongs to a group, the groups are merged so
    /// that equivalence stays transitive.
    pub fn add_group(&mut self, members: impl IntoIterator<Item = StationId>) {
        let mut merged: Vec<StationId> = Vec::new();
        let mut absorbed: Vec<GroupId> = Vec::new();

        for id in members {
            match self.group_of.get(&id) {
                Some(&gid) => {
                    if !absorbed.contains(&gid) {
                        absorbed.push(gid);
                    }
                }
                None => {
                    if !merged.contains(&id) {
                        merged.push(id);
                    }
                }
            }
        }

        let target = match absorbed.first() {
            Some(&gid) => gid,
            None => {
                if merged.len() < 2 {
                    // A singleton group is the same as no entry.
                    return;
                }
                self.groups.push(Vec::new());
                GroupId(self.groups.len() - 1)
            }
        };

        for &gid in absorbed.iter().skip(1) {
            let moved = std::mem::take(&mut self.groups[gid.0]);
            merged.extend(moved);
        }

        for id in merged {
            self.group_of.insert(id.clone(), target);
            self.groups[target.0].push(id);
        }
    }

    /// All station codes equivalent to `id`, including `id` itself.
    ///
    /// Stations without transfers resolve to a one-element slice.
    pub fn equivalents<'a>(&'a self, id: &'a StationId) -> &'a [StationId] {
        match self.group_of.get(id) {
            Some(gid) => &self.groups[gid.0],
            None => std::slice::from_ref(id),
        }
    }

    /// Check if two stations are the same physical location.
    pub fn are_equivalent(&self, a: &StationId, b: &StationId) -> bool {
        a == b || self.equivalents(a).contains(b)
    }

    /// Returns the number of transfer groups.
    pub fn len(&self) -> usize {
        self.groups.iter().filter(|g| !g.is_empty()).count()
    }

    /// Returns true if no transfers are defined.
    pub fn is_empty(&self) -> bool {
        self.group_of.is_empty()
    }
}

/// Builder for creating transfer tables.
///
/// Provides a fluent API for adding groups from string codes.
#[derive(Debug, Default)]
pub struct TransferTableBuilder {
    inner: TransferTable,
}

impl TransferTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group of equivalent station codes. Invalid codes are skipped.
    pub fn group(mut self, codes: &[&str]) -> Self {
        let ids = codes.iter().filter_map(|c| match StationId::parse(c) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "skipping transfer station");
                None
            }
        });
        self.inner.add_group(ids);
        self
    }

    /// Build the transfer table.
    pub fn build(self) -> TransferTable {
        self.inner
    }
}

/// Create the Taipei Metro interchange table.
pub fn taipei_transfers() -> TransferTable {
    TransferTableBuilder::new()
        .group(&["R10", "BL22"]) // Taipei Main Station
        .group(&["R11", "G14"]) // Zhongshan
        .group(&["R08", "G10"]) // Chiang Kai-shek Memorial Hall
        .group(&["R13", "O11"]) // Minquan W. Rd.
        .group(&["G15", "O08"]) // Songjiang Nanjing
        .group(&["G16", "BR11"]) // Nanjing Fuxing
        .group(&["BL20", "O07"]) // Zhongxiao Xinsheng
        .group(&["BL19", "BR10"]) // Zhongxiao Fuxing
        .group(&["BL11", "BR24"]) // Taipei Nangang Exhibition Center
        .group(&["R05", "BR09"]) // Daan
        .group(&["BL23", "G12"]) // Ximen
        .group(&["R07", "O06"]) // Dongmen
        .group(&["G09", "O05"]) // Guting
        .group(&["O02", "Y11"]) // Jingan
        .group(&["O17", "Y18"]) // Touqianzhuang
        .group(&["BL27", "Y16"]) // Banqiao
        .build()
}
