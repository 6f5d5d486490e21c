use super::{LinkId, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// a directed connection between two nodes. `length` is in coordinate
/// units, which for projected MATSim networks are meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub from: NodeId,
    pub to: NodeId,
    pub length: f64,
    pub freespeed: f64,
    pub capacity: f64,
    pub permlanes: f64,
    /// travel modes permitted on this link, such as "car" or "pt"
    pub modes: BTreeSet<String>,
}

impl Link {
    /// default number of lanes when the source data does not provide one
    pub const DEFAULT_PERMLANES: f64 = 1.0;
}
