use super::network::{LinkId, NodeId};
use super::vehicles::{VehicleId, VehicleTypeId};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatsimError {
    #[error("failure accessing file {}: {source}", path.display())]
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failure reading xml from {}: {msg}", path.display())]
    XmlReadError { path: PathBuf, msg: String },
    #[error("failure writing xml to {}: {msg}", path.display())]
    XmlWriteError { path: PathBuf, msg: String },
    #[error("attempting to get node '{0}' not in network")]
    MissingNode(NodeId),
    #[error("attempting to get link '{0}' not in network")]
    MissingLink(LinkId),
    #[error("link '{0}' references node '{1}' not in network")]
    DanglingLinkEndpoint(LinkId, NodeId),
    #[error("attempting to get stop facility '{0}' not in schedule")]
    MissingStopFacility(String),
    #[error("attempting to get vehicle '{0}' not in fleet")]
    MissingVehicle(VehicleId),
    #[error("vehicle '{0}' references vehicle type '{1}' not in fleet")]
    UnknownVehicleType(VehicleId, VehicleTypeId),
    #[error("attempting to add {0} '{1}' more than once")]
    DuplicateId(&'static str, String),
    #[error("structure of matsim data is invalid: {0}")]
    InvalidData(String),
}
