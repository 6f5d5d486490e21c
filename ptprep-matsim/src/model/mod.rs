mod matsim_error;
pub mod network;
pub mod schedule;
pub mod vehicles;

pub use matsim_error::MatsimError;
