use super::StopFacilityId;
use serde::{Deserialize, Serialize};

/// a scheduled visit to a stop facility along a transit route. offsets
/// are whole seconds relative to the start of each vehicle trip and are
/// non-decreasing along the stop sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub facility: StopFacilityId,
    pub arrival_offset: u32,
    pub departure_offset: u32,
}
