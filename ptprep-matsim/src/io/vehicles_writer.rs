use super::xml_ops::{self, fmt_number};
use crate::model::vehicles::VehicleFleet;
use crate::model::MatsimError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use std::path::Path;

const VEHICLES_XMLNS: &str = "http://www.matsim.org/files/dtd";
const VEHICLES_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
const VEHICLES_SCHEMA_LOCATION: &str =
    "http://www.matsim.org/files/dtd http://www.matsim.org/files/dtd/vehicleDefinitions_v2.0.xsd";

/// writes a vehicle fleet as a matsim vehicleDefinitions v2.0 document,
/// gzip-compressed when the filename ends in `.gz`.
pub fn write_vehicles(fleet: &VehicleFleet, path: &Path) -> Result<(), MatsimError> {
    let (sink, tmp) = xml_ops::open_sink(path)?;
    let mut writer = Writer::new_with_indent(sink, b'\t', 1);
    write_document(&mut writer, fleet).map_err(|e| MatsimError::XmlWriteError {
        path: path.to_path_buf(),
        msg: format!("{e}"),
    })?;
    writer
        .into_inner()
        .finish()
        .map_err(|e| MatsimError::FileError {
            path: tmp.clone(),
            source: e,
        })?;
    xml_ops::commit(&tmp, path)?;
    log::info!(
        "wrote fleet with {} vehicles to {}",
        fleet.n_vehicles(),
        path.display()
    );
    Ok(())
}

fn write_document<W: Write>(
    writer: &mut Writer<W>,
    fleet: &VehicleFleet,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("vehicleDefinitions");
    root.push_attribute(("xmlns", VEHICLES_XMLNS));
    root.push_attribute(("xmlns:xsi", VEHICLES_XSI));
    root.push_attribute(("xsi:schemaLocation", VEHICLES_SCHEMA_LOCATION));
    writer.write_event(Event::Start(root))?;

    for vehicle_type in fleet.vehicle_types() {
        let mut type_element = BytesStart::new("vehicleType");
        type_element.push_attribute(("id", vehicle_type.id.0.as_str()));
        writer.write_event(Event::Start(type_element))?;

        if let Some(description) = &vehicle_type.description {
            writer.write_event(Event::Start(BytesStart::new("description")))?;
            writer.write_event(Event::Text(BytesText::new(description)))?;
            writer.write_event(Event::End(BytesEnd::new("description")))?;
        }

        let mut capacity = BytesStart::new("capacity");
        capacity.push_attribute(("seats", vehicle_type.seats.to_string().as_str()));
        capacity.push_attribute((
            "standingRoomInPersons",
            vehicle_type.standing_room.to_string().as_str(),
        ));
        writer.write_event(Event::Empty(capacity))?;

        let mut length = BytesStart::new("length");
        length.push_attribute(("meter", fmt_number(vehicle_type.length).as_str()));
        writer.write_event(Event::Empty(length))?;

        let mut width = BytesStart::new("width");
        width.push_attribute(("meter", fmt_number(vehicle_type.width).as_str()));
        writer.write_event(Event::Empty(width))?;

        let mut velocity = BytesStart::new("maximumVelocity");
        velocity.push_attribute((
            "meterPerSecond",
            fmt_number(vehicle_type.maximum_velocity).as_str(),
        ));
        writer.write_event(Event::Empty(velocity))?;

        let mut pce = BytesStart::new("passengerCarEquivalents");
        pce.push_attribute(("pce", fmt_number(vehicle_type.pce).as_str()));
        writer.write_event(Event::Empty(pce))?;

        let mut mode = BytesStart::new("networkMode");
        mode.push_attribute(("networkMode", vehicle_type.network_mode.as_str()));
        writer.write_event(Event::Empty(mode))?;

        writer.write_event(Event::End(BytesEnd::new("vehicleType")))?;
    }

    for vehicle in fleet.vehicles() {
        let mut element = BytesStart::new("vehicle");
        element.push_attribute(("id", vehicle.id.0.as_str()));
        element.push_attribute(("type", vehicle.vehicle_type.0.as_str()));
        writer.write_event(Event::Empty(element))?;
    }

    writer.write_event(Event::End(BytesEnd::new("vehicleDefinitions")))?;
    Ok(())
}
