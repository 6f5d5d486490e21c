mod vehicle;
mod vehicle_fleet;
mod vehicle_type;

pub use vehicle::{Vehicle, VehicleId};
pub use vehicle_fleet::VehicleFleet;
pub use vehicle_type::{VehicleType, VehicleTypeId};
