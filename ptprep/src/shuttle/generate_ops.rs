use super::shuttle_config::ShuttleConfig;
use super::shuttle_error::ShuttleError;
use super::{fleet_ops, line_ops, network_ops, route_ops, stop_ops};
use ptprep_matsim::io;
use ptprep_matsim::model::schedule::TransitSchedule;
use ptprep_matsim::model::vehicles::VehicleFleet;
use ptprep_matsim::model::MatsimError;
use std::path::Path;

/// runs the full generation pipeline: load the baseline network, graft
/// the shuttle infrastructure onto it, derive stops, route, departures,
/// and vehicles, and write the three scenario files. every step threads
/// its result into the next; any failure aborts the run before the first
/// output file is written.
pub fn generate_scenario(config: &ShuttleConfig) -> Result<(), ShuttleError> {
    let mut network = io::read_network(&config.input_network)?;

    let mut fleet = VehicleFleet::empty();
    let vehicle_type = fleet_ops::create_vehicle_type(&config.vehicle_type);
    let type_id = vehicle_type.id.clone();
    fleet.add_vehicle_type(vehicle_type)?;

    let mut schedule = TransitSchedule::empty();
    let infrastructure = network_ops::extend_network(&mut network, config)?;
    let (first_stop, last_stop) = stop_ops::create_stops(&infrastructure, &network, &mut schedule)?;

    let stops = [
        (first_stop, config.first_stop),
        (last_stop, config.last_stop),
    ];
    let mut route = route_ops::build_route(
        &infrastructure.link_path(),
        &stops,
        &network,
        &schedule,
        config,
    )?;
    fleet_ops::generate_departures(&mut route, &mut fleet, &type_id, &config.service)?;
    line_ops::assemble_line(route, &mut schedule, config)?;

    let output_directory = config.resolve_output_directory()?;
    ensure_directory(&output_directory)?;
    io::write_network(&network, &output_directory.join(&config.network_filename))?;
    io::write_schedule(&schedule, &output_directory.join(&config.schedule_filename))?;
    io::write_vehicles(&fleet, &output_directory.join(&config.vehicles_filename))?;

    log::info!("finished, scenario files in {}", output_directory.display());
    Ok(())
}

fn ensure_directory(directory: &Path) -> Result<(), ShuttleError> {
    if !directory.is_dir() {
        std::fs::create_dir_all(directory).map_err(|e| {
            ShuttleError::MatsimError(MatsimError::FileError {
                path: directory.to_path_buf(),
                source: e,
            })
        })?;
    }
    Ok(())
}
