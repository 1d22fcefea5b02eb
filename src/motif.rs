use crate::types::VId;
use itertools::Itertools;
use std::fmt;

/// A discovered subgraph held in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Motif {
    nodes: Vec<VId>,
}

impl Motif {
    /// Canonicalizes the node ids by sorting them ascending.
    pub fn new(mut nodes: Vec<VId>) -> Self {
        nodes.sort();
        Self { nodes }
    }

    pub fn nodes(&self) -> &[VId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.nodes.iter().join(", "))
    }
}

/// The motifs observed for one label, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedMotifs {
    motifs: Vec<Motif>,
}

impl SortedMotifs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `motif` at the position preserving ascending order.
    /// Duplicates are kept; motifs are never removed.
    pub fn insert(&mut self, motif: Motif) {
        match self.motifs.binary_search(&motif) {
            Ok(i) | Err(i) => self.motifs.insert(i, motif),
        }
    }

    /// Whether some held motif equals `motif` element-wise.
    pub fn contains(&self, motif: &Motif) -> bool {
        self.motifs.binary_search(motif).is_ok()
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Motif> {
        self.motifs.iter()
    }

    pub fn as_slice(&self) -> &[Motif] {
        &self.motifs
    }
}
