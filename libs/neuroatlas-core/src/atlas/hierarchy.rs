//! Region hierarchy tree for browsing.

use serde::{Deserialize, Serialize};

/// A node in the browse tree. Leaves reference a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl HierarchyNode {
    pub fn branch(id: &str, label: &str, children: Vec<HierarchyNode>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            children,
            region_id: None,
        }
    }

    /// Leaf node `<region>-node` pointing at `region_id`.
    pub fn leaf(region_id: &str, label: &str) -> Self {
        Self {
            id: format!("{region_id}-node"),
            label: label.to_string(),
            children: Vec::new(),
            region_id: Some(region_id.to_string()),
        }
    }

    /// Region ids referenced under this node, depth-first.
    pub fn region_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_region_ids(&mut ids);
        ids
    }

    fn collect_region_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(id) = &self.region_id {
            out.push(id);
        }
        for child in &self.children {
            child.collect_region_ids(out);
        }
    }

    /// Depth-first search for a node by id, including this one.
    pub fn find(&self, id: &str) -> Option<&HierarchyNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

#[rustfmt::skip]
pub(super) fn mouse_hierarchy() -> Vec<HierarchyNode> {
    use HierarchyNode as N;

    vec![
        N::branch("cortex", "Cortex", vec![
            N::branch("motor", "Motor Cortex", vec![
                N::leaf("MOp", "MOp - Primary Motor"),
                N::leaf("MOs", "MOs - Secondary Motor"),
            ]),
            N::branch("sensory", "Sensory Cortex", vec![
                N::leaf("SSp", "SSp - Primary Somatosensory"),
                N::leaf("VIS", "VIS - Visual"),
                N::leaf("AUD", "AUD - Auditory"),
            ]),
            N::branch("prefrontal", "Prefrontal Cortex", vec![
                N::leaf("ACA", "ACA - Anterior Cingulate"),
                N::leaf("PL", "PL - Prelimbic"),
                N::leaf("ILA", "ILA - Infralimbic"),
            ]),
            N::branch("association", "Association Cortex", vec![
                N::leaf("PPC", "PPC - Posterior Parietal"),
                N::leaf("RSC", "RSC - Retrosplenial"),
            ]),
        ]),
        N::branch("hippocampus", "Hippocampal Formation", vec![
            N::leaf("HIP", "HIP - Hippocampus"),
            N::leaf("CA1", "CA1"),
            N::leaf("CA3", "CA3"),
            N::leaf("DG", "DG - Dentate Gyrus"),
        ]),
        N::branch("subcortical", "Subcortical Nuclei", vec![
            N::branch("basal-ganglia", "Basal Ganglia", vec![
                N::leaf("CP", "CP - Caudoputamen"),
                N::leaf("GPe", "GPe - Globus Pallidus"),
                N::leaf("ACB", "ACB - Nucleus Accumbens"),
            ]),
            N::branch("amygdala", "Amygdala", vec![
                N::leaf("BLA", "BLA - Basolateral"),
                N::leaf("CEA", "CEA - Central"),
            ]),
            N::leaf("CLA", "CLA - Claustrum"),
        ]),
        N::branch("thalamus", "Thalamus & Hypothalamus", vec![
            N::leaf("TH", "TH - Thalamus"),
            N::leaf("HY", "HY - Hypothalamus"),
            N::leaf("LHA", "LHA - Lateral Hypothalamic"),
            N::leaf("PVH", "PVH - Paraventricular"),
        ]),
        N::branch("midbrain", "Midbrain", vec![
            N::leaf("VTA", "VTA - Ventral Tegmental"),
            N::leaf("SNc", "SNc - Substantia Nigra"),
            N::leaf("PAG", "PAG - Periaqueductal Gray"),
            N::leaf("SCm", "SCm - Superior Colliculus"),
        ]),
        N::branch("hindbrain", "Hindbrain", vec![
            N::leaf("CB", "CB - Cerebellum"),
            N::leaf("LC", "LC - Locus Coeruleus"),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::Atlas;
    use std::collections::HashSet;

    #[test]
    fn leaves_cover_every_region_once() {
        let atlas = Atlas::mouse();
        let leaves: Vec<&str> = atlas
            .hierarchy()
            .iter()
            .flat_map(|node| node.region_ids())
            .collect();
        let unique: HashSet<&str> = leaves.iter().copied().collect();
        assert_eq!(leaves.len(), unique.len());

        let regions: HashSet<&str> = atlas.regions().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(unique, regions);
    }

    #[test]
    fn find_nested_node() {
        let tree = mouse_hierarchy();
        let node = tree.iter().find_map(|n| n.find("amygdala")).unwrap();
        assert_eq!(node.region_ids(), vec!["BLA", "CEA"]);
        assert!(tree.iter().all(|n| n.find("missing").is_none()));
    }

    #[test]
    fn leaf_ids_follow_region_naming() {
        let leaf = HierarchyNode::leaf("DG", "DG - Dentate Gyrus");
        assert_eq!(leaf.id, "DG-node");
        assert_eq!(leaf.region_id.as_deref(), Some("DG"));
    }
}
