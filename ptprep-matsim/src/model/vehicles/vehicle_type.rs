use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
#[serde(transparent)]
pub struct VehicleTypeId(pub String);

impl Display for VehicleTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VehicleTypeId {
    fn from(id: &str) -> Self {
        VehicleTypeId(String::from(id))
    }
}

/// physical and capacity parameters shared by a class of vehicles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    pub id: VehicleTypeId,
    pub description: Option<String>,
    pub seats: u32,
    pub standing_room: u32,
    /// vehicle length in meters
    pub length: f64,
    /// vehicle width in meters
    pub width: f64,
    /// passenger car equivalents consumed on a link
    pub pce: f64,
    /// maximum velocity in meters per second
    pub maximum_velocity: f64,
    /// the network mode this vehicle type travels on
    pub network_mode: String,
}
