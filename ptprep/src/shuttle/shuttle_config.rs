use super::shuttle_error::ShuttleError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// parameters for one shuttle generation run. the defaults reproduce the
/// serengeti-park reference scenario this tool was first built for.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct ShuttleConfig {
    /// baseline network the service is grafted onto
    pub input_network: PathBuf,
    /// where the three output files land. defaults to the parent
    /// directory of the input network.
    pub output_directory: Option<PathBuf>,
    pub network_filename: String,
    pub schedule_filename: String,
    pub vehicles_filename: String,
    /// where passengers board, at the start of the service path
    pub origin: TerminusConfig,
    /// where passengers alight, at the end of the service path
    pub destination: TerminusConfig,
    pub service: ServiceWindowConfig,
    pub first_stop: StopOffsetConfig,
    pub last_stop: StopOffsetConfig,
    pub link_freespeed: f64,
    pub link_capacity: f64,
    pub transport_mode: String,
    pub line_id: String,
    pub route_id: String,
    pub vehicle_type: VehicleTypeConfig,
}

/// one end of the shuttle service: the id of an existing network node the
/// service link attaches to, and the coordinate of the synthesized
/// terminus node.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TerminusConfig {
    pub anchor_node: String,
    pub x: f64,
    pub y: f64,
}

/// the daily operating window. departures leave every `step` seconds from
/// `start_time` up to but excluding `end_time`, both in seconds past
/// midnight.
#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct ServiceWindowConfig {
    pub start_time: u32,
    pub end_time: u32,
    pub step: u32,
}

/// arrival and departure offsets of one stop visit, in seconds relative
/// to trip start.
#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct StopOffsetConfig {
    pub arrival: u32,
    pub departure: u32,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct VehicleTypeConfig {
    pub id: String,
    pub description: String,
    pub seats: u32,
    pub standing_room: u32,
    pub length: f64,
    pub width: f64,
    pub pce: f64,
    pub maximum_velocity: f64,
    pub network_mode: String,
}

impl Default for ShuttleConfig {
    fn default() -> Self {
        Self {
            input_network: PathBuf::from(
                "scenarios/serengeti-park-v1.0/input/serengeti-park-network-v1.0.xml.gz",
            ),
            output_directory: None,
            network_filename: String::from("network-with-pt.xml.gz"),
            schedule_filename: String::from("transit-schedule.xml.gz"),
            vehicles_filename: String::from("transit-vehicles.xml.gz"),
            origin: TerminusConfig {
                anchor_node: String::from("29589035"),
                x: 544006.781992937 + 100.0,
                y: 5847658.641000098 + 100.0,
            },
            destination: TerminusConfig {
                anchor_node: String::from("3667621813"),
                x: 541785.9309178652 - 100.0,
                y: 5844877.673792916 - 100.0,
            },
            service: ServiceWindowConfig::default(),
            first_stop: StopOffsetConfig {
                arrival: 0,
                departure: 10,
            },
            last_stop: StopOffsetConfig {
                arrival: 3600,
                departure: 3610,
            },
            link_freespeed: 100.0,
            link_capacity: 10000.0,
            transport_mode: String::from("pt"),
            line_id: String::from("Shuttle"),
            route_id: String::from("route-1"),
            vehicle_type: VehicleTypeConfig::default(),
        }
    }
}

impl Default for ServiceWindowConfig {
    fn default() -> Self {
        Self {
            start_time: 9 * 3600,
            end_time: 13 * 3600,
            step: 300,
        }
    }
}

impl Default for VehicleTypeConfig {
    fn default() -> Self {
        Self {
            id: String::from("shuttle"),
            description: String::from("shuttle vehicle type"),
            seats: 10000,
            standing_room: 0,
            length: 20.0,
            width: 1.0,
            pce: 2.0,
            maximum_velocity: 36.0,
            network_mode: String::from("pt"),
        }
    }
}

impl ShuttleConfig {
    pub fn resolve_output_directory(&self) -> Result<PathBuf, ShuttleError> {
        match &self.output_directory {
            Some(directory) => Ok(directory.clone()),
            None => self
                .input_network
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| {
                    ShuttleError::ConfigurationError(format!(
                        "cannot derive an output directory from input path '{}'",
                        self.input_network.display()
                    ))
                }),
        }
    }
}

impl TryFrom<&String> for ShuttleConfig {
    type Error = ShuttleError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ShuttleError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                ShuttleError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ShuttleError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                ShuttleError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(ShuttleError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_reference_scenario() {
        let config = ShuttleConfig::default();
        assert_eq!(config.service.start_time, 32400);
        assert_eq!(config.service.end_time, 46800);
        assert_eq!(config.service.step, 300);
        assert_eq!(config.origin.anchor_node, "29589035");
        assert_eq!(config.destination.anchor_node, "3667621813");
        assert_eq!(config.vehicle_type.seats, 10000);
        assert_eq!(config.vehicle_type.pce, 2.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let partial = r#"
            link_freespeed = 50.0

            [service]
            start_time = 21600
            end_time = 28800
            step = 600
        "#;
        let config: ShuttleConfig = toml::from_str(partial).unwrap();
        assert_eq!(config.link_freespeed, 50.0);
        assert_eq!(config.service.step, 600);
        // untouched sections fall back to the reference values
        assert_eq!(config.link_capacity, 10000.0);
        assert_eq!(config.line_id, "Shuttle");
    }

    #[test]
    fn test_output_directory_defaults_to_input_parent() {
        let config = ShuttleConfig::default();
        let directory = config.resolve_output_directory().unwrap();
        assert_eq!(
            directory,
            PathBuf::from("scenarios/serengeti-park-v1.0/input")
        );
    }
}
