use crate::model::network::LinkId;
use geo::Coord;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
#[serde(transparent)]
pub struct StopFacilityId(pub String);

impl Display for StopFacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StopFacilityId {
    fn from(id: &str) -> Self {
        StopFacilityId(String::from(id))
    }
}

/// a physical transit stop. each facility is served via exactly one
/// network link, named by `link`, which must be registered in the
/// network before the facility references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopFacility {
    pub id: StopFacilityId,
    pub coord: Coord<f64>,
    pub link: LinkId,
    /// whether vehicles serving this stop block the lane while dwelling
    pub is_blocking: bool,
}
