//! Various types related to motif comparison.

/// The node id type.
pub type VId = u32;

/// The label type identifying a group of motifs.
pub type Label = String;
