mod network_reader;
mod network_writer;
mod schedule_writer;
mod vehicles_writer;
mod xml_ops;

pub use network_reader::read_network;
pub use network_writer::write_network;
pub use schedule_writer::write_schedule;
pub use vehicles_writer::write_vehicles;
pub use xml_ops::format_time;
