use ptprep_matsim::model::network::NodeId;
use ptprep_matsim::model::MatsimError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShuttleError {
    #[error("anchor node '{0}' not found in loaded network")]
    AnchorNodeNotFound(NodeId),
    #[error("invalid shuttle configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid service window: {0}")]
    InvalidServiceWindow(String),
    #[error("invalid route: {0}")]
    InvalidRouteConfiguration(String),
    #[error("{0}")]
    MatsimError(#[from] MatsimError),
}
