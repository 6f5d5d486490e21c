use super::{Vehicle, VehicleId, VehicleType, VehicleTypeId};
use crate::model::MatsimError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// the vehicles available to a scenario: vehicle types plus the vehicle
/// instances of those types. a vehicle can only be registered once its
/// type is.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct VehicleFleet {
    vehicle_types: IndexMap<VehicleTypeId, VehicleType>,
    vehicles: IndexMap<VehicleId, Vehicle>,
}

impl VehicleFleet {
    pub fn empty() -> VehicleFleet {
        VehicleFleet::default()
    }

    pub fn add_vehicle_type(&mut self, vehicle_type: VehicleType) -> Result<(), MatsimError> {
        if self.vehicle_types.contains_key(&vehicle_type.id) {
            return Err(MatsimError::DuplicateId(
                "vehicle type",
                vehicle_type.id.to_string(),
            ));
        }
        self.vehicle_types
            .insert(vehicle_type.id.clone(), vehicle_type);
        Ok(())
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), MatsimError> {
        if self.vehicles.contains_key(&vehicle.id) {
            return Err(MatsimError::DuplicateId("vehicle", vehicle.id.to_string()));
        }
        if !self.vehicle_types.contains_key(&vehicle.vehicle_type) {
            return Err(MatsimError::UnknownVehicleType(
                vehicle.id.clone(),
                vehicle.vehicle_type.clone(),
            ));
        }
        self.vehicles.insert(vehicle.id.clone(), vehicle);
        Ok(())
    }

    /// helper with error handling for getting a registered vehicle
    pub fn get_vehicle(&self, id: &VehicleId) -> Result<&Vehicle, MatsimError> {
        self.vehicles
            .get(id)
            .ok_or_else(|| MatsimError::MissingVehicle(id.clone()))
    }

    pub fn vehicle_types(&self) -> impl Iterator<Item = &VehicleType> {
        self.vehicle_types.values()
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    pub fn n_vehicles(&self) -> usize {
        self.vehicles.len()
    }
}
