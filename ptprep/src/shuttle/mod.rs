pub mod app;
mod fleet_ops;
mod generate_ops;
mod line_ops;
mod network_ops;
mod route_ops;
mod shuttle_config;
mod shuttle_error;
mod stop_ops;

pub use generate_ops::generate_scenario;
pub use network_ops::ShuttleInfrastructure;
pub use shuttle_config::{
    ServiceWindowConfig, ShuttleConfig, StopOffsetConfig, TerminusConfig, VehicleTypeConfig,
};
pub use shuttle_error::ShuttleError;
