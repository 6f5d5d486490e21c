mod operation;
mod shuttle_app;

pub use operation::ShuttleOperation;
pub use shuttle_app::ShuttleApp;
