use super::shuttle_config::{ServiceWindowConfig, VehicleTypeConfig};
use super::shuttle_error::ShuttleError;
use ptprep_matsim::io::format_time;
use ptprep_matsim::model::schedule::{Departure, DepartureId, TransitRoute};
use ptprep_matsim::model::vehicles::{Vehicle, VehicleFleet, VehicleId, VehicleType, VehicleTypeId};

pub fn create_vehicle_type(config: &VehicleTypeConfig) -> VehicleType {
    VehicleType {
        id: VehicleTypeId::from(config.id.as_str()),
        description: Some(config.description.clone()),
        seats: config.seats,
        standing_room: config.standing_room,
        length: config.length,
        width: config.width,
        pce: config.pce,
        maximum_velocity: config.maximum_velocity,
        network_mode: config.network_mode.clone(),
    }
}

/// walks the service window and creates one departure per tick, each with
/// its own dedicated vehicle of the given type. vehicles are registered
/// into the fleet and departures attached to the route as they are
/// created, so the two collections always pair 1:1.
pub fn generate_departures(
    route: &mut TransitRoute,
    fleet: &mut VehicleFleet,
    vehicle_type: &VehicleTypeId,
    service: &ServiceWindowConfig,
) -> Result<usize, ShuttleError> {
    if service.step == 0 {
        return Err(ShuttleError::InvalidServiceWindow(String::from(
            "departure interval must be positive",
        )));
    }

    let mut count = 0;
    for time in (service.start_time..service.end_time).step_by(service.step as usize) {
        let vehicle = Vehicle {
            id: vehicle_id(time),
            vehicle_type: vehicle_type.clone(),
        };
        let departure = Departure {
            id: departure_id(time),
            time,
            vehicle: vehicle.id.clone(),
        };
        fleet.add_vehicle(vehicle)?;
        route.add_departure(departure)?;
        count += 1;
    }

    log::info!(
        "generated {count} departures between {} and {} every {} seconds",
        format_time(service.start_time),
        format_time(service.end_time),
        service.step
    );
    Ok(count)
}

fn departure_id(time: u32) -> DepartureId {
    DepartureId(format!("departure_{time}"))
}

fn vehicle_id(time: u32) -> VehicleId {
    VehicleId(format!("shuttle_vehicle_{time}"))
}
