use super::VehicleTypeId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        VehicleId(String::from(id))
    }
}

/// a single vehicle instance typed by a registered [`super::VehicleType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub vehicle_type: VehicleTypeId,
}
