use crate::model::vehicles::VehicleId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
#[serde(transparent)]
pub struct DepartureId(pub String);

impl Display for DepartureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DepartureId {
    fn from(id: &str) -> Self {
        DepartureId(String::from(id))
    }
}

/// one timed trip along a transit route. `time` is seconds past midnight.
/// every departure is served by its own dedicated vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departure {
    pub id: DepartureId,
    pub time: u32,
    pub vehicle: VehicleId,
}
