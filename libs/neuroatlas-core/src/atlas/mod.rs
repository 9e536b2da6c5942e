//! Brain region atlas: region metadata, hierarchy and search.

mod hierarchy;
mod regions;

pub use hierarchy::HierarchyNode;

use crate::catalog::{Catalog, CatalogItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anatomical group a region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionGroup {
    Cortex,
    Hippocampus,
    Subcortical,
    Thalamus,
    Midbrain,
    Hindbrain,
}

impl RegionGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cortex => "cortex",
            Self::Hippocampus => "hippocampus",
            Self::Subcortical => "subcortical",
            Self::Thalamus => "thalamus",
            Self::Midbrain => "midbrain",
            Self::Hindbrain => "hindbrain",
        }
    }
}

/// One atlas region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Atlas acronym, e.g. `MOp`.
    pub id: String,
    /// Allen Mouse Brain Atlas structure id.
    pub allen_id: u32,
    pub name: String,
    pub acronym: String,
    pub description: String,
    /// Stereotaxic coordinates and approach notes.
    pub surgical_notes: String,
    /// Ids of connected regions.
    pub connections: Vec<String>,
    pub group: RegionGroup,
    /// Present in both hemispheres.
    pub bilateral: bool,
}

/// A set of regions with an id index and an optional hierarchy.
#[derive(Debug, Clone)]
pub struct Atlas {
    regions: Vec<Region>,
    index: HashMap<String, usize>,
    hierarchy: Vec<HierarchyNode>,
}

impl Atlas {
    /// Build an atlas from regions in display order. Later duplicates of an
    /// id are ignored.
    pub fn new(regions: Vec<Region>) -> Self {
        Self::with_hierarchy(regions, Vec::new())
    }

    pub fn with_hierarchy(regions: Vec<Region>, hierarchy: Vec<HierarchyNode>) -> Self {
        let mut unique = Vec::with_capacity(regions.len());
        let mut index = HashMap::with_capacity(regions.len());
        for region in regions {
            if index.contains_key(&region.id) {
                tracing::warn!(id = %region.id, "duplicate region id ignored");
                continue;
            }
            index.insert(region.id.clone(), unique.len());
            unique.push(region);
        }
        Self {
            regions: unique,
            index,
            hierarchy,
        }
    }

    /// The built-in mouse brain atlas.
    pub fn mouse() -> Self {
        Self::with_hierarchy(regions::mouse_regions(), hierarchy::mouse_hierarchy())
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.index.get(id).map(|&i| &self.regions[i])
    }

    pub fn hierarchy(&self) -> &[HierarchyNode] {
        &self.hierarchy
    }

    /// Regions whose id, name, acronym, description or group contains
    /// `query` (case-insensitive), in atlas order. A blank query returns
    /// every region.
    pub fn search(&self, query: &str) -> Vec<&Region> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.regions.iter().collect();
        }

        self.regions
            .iter()
            .filter(|r| {
                r.id.to_lowercase().contains(&query)
                    || r.name.to_lowercase().contains(&query)
                    || r.acronym.to_lowercase().contains(&query)
                    || r.description.to_lowercase().contains(&query)
                    || r.group.as_str().contains(&query)
            })
            .collect()
    }

    /// Connected regions that exist in this atlas.
    pub fn connections(&self, id: &str) -> Vec<&Region> {
        self.region(id)
            .map(|r| r.connections.iter().filter_map(|c| self.region(c)).collect())
            .unwrap_or_default()
    }
}

impl Catalog for Atlas {
    fn item(&self, id: &str) -> Option<CatalogItem<'_>> {
        self.region(id).map(|r| CatalogItem {
            id: &r.id,
            category: r.group.as_str(),
            display_name: &r.name,
            short_code: &r.acronym,
        })
    }

    fn item_ids(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.id.as_str()).collect()
    }
}
