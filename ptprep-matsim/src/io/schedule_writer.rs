use super::xml_ops::{self, fmt_number, format_time};
use crate::model::schedule::TransitSchedule;
use crate::model::MatsimError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use std::path::Path;

const SCHEDULE_DOCTYPE: &str =
    r#"transitSchedule SYSTEM "http://www.matsim.org/files/dtd/transitSchedule_v2.dtd""#;

/// writes a transit schedule as a matsim transitSchedule_v2 document,
/// gzip-compressed when the filename ends in `.gz`.
pub fn write_schedule(schedule: &TransitSchedule, path: &Path) -> Result<(), MatsimError> {
    let (sink, tmp) = xml_ops::open_sink(path)?;
    let mut writer = Writer::new_with_indent(sink, b'\t', 1);
    write_document(&mut writer, schedule).map_err(|e| MatsimError::XmlWriteError {
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
        "wrote schedule with {} stop facilities and {} lines to {}",
        schedule.n_stop_facilities(),
        schedule.n_lines(),
        path.display()
    );
    Ok(())
}

fn write_document<W: Write>(
    writer: &mut Writer<W>,
    schedule: &TransitSchedule,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(SCHEDULE_DOCTYPE)))?;
    writer.write_event(Event::Start(BytesStart::new("transitSchedule")))?;

    writer.write_event(Event::Start(BytesStart::new("transitStops")))?;
    for facility in schedule.stop_facilities() {
        let mut element = BytesStart::new("stopFacility");
        element.push_attribute(("id", facility.id.0.as_str()));
        element.push_attribute(("x", fmt_number(facility.coord.x).as_str()));
        element.push_attribute(("y", fmt_number(facility.coord.y).as_str()));
        element.push_attribute(("linkRefId", facility.link.0.as_str()));
        element.push_attribute(("isBlocking", bool_attribute(facility.is_blocking)));
        writer.write_event(Event::Empty(element))?;
    }
    writer.write_event(Event::End(BytesEnd::new("transitStops")))?;

    for line in schedule.lines() {
        let mut line_element = BytesStart::new("transitLine");
        line_element.push_attribute(("id", line.id.0.as_str()));
        writer.write_event(Event::Start(line_element))?;

        for route in line.routes() {
            let mut route_element = BytesStart::new("transitRoute");
            route_element.push_attribute(("id", route.id.0.as_str()));
            writer.write_event(Event::Start(route_element))?;

            writer.write_event(Event::Start(BytesStart::new("transportMode")))?;
            writer.write_event(Event::Text(BytesText::new(&route.transport_mode)))?;
            writer.write_event(Event::End(BytesEnd::new("transportMode")))?;

            writer.write_event(Event::Start(BytesStart::new("routeProfile")))?;
            for stop in &route.stops {
                let mut element = BytesStart::new("stop");
                element.push_attribute(("refId", stop.facility.0.as_str()));
                element.push_attribute(("arrivalOffset", format_time(stop.arrival_offset).as_str()));
                element.push_attribute((
                    "departureOffset",
                    format_time(stop.departure_offset).as_str(),
                ));
                writer.write_event(Event::Empty(element))?;
            }
            writer.write_event(Event::End(BytesEnd::new("routeProfile")))?;

            writer.write_event(Event::Start(BytesStart::new("route")))?;
            for link in &route.link_path {
                let mut element = BytesStart::new("link");
                element.push_attribute(("refId", link.0.as_str()));
                writer.write_event(Event::Empty(element))?;
            }
            writer.write_event(Event::End(BytesEnd::new("route")))?;

            writer.write_event(Event::Start(BytesStart::new("departures")))?;
            for departure in route.departures() {
                let mut element = BytesStart::new("departure");
                element.push_attribute(("id", departure.id.0.as_str()));
                element.push_attribute(("departureTime", format_time(departure.time).as_str()));
                element.push_attribute(("vehicleRefId", departure.vehicle.0.as_str()));
                writer.write_event(Event::Empty(element))?;
            }
            writer.write_event(Event::End(BytesEnd::new("departures")))?;

            writer.write_event(Event::End(BytesEnd::new("transitRoute")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("transitLine")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("transitSchedule")))?;
    Ok(())
}

fn bool_attribute(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::network::LinkId;
    use crate::model::schedule::{
        Departure, DepartureId, RouteStop, StopFacility, StopFacilityId, TransitLine,
        TransitLineId, TransitRoute, TransitRouteId,
    };
    use crate::model::vehicles::VehicleId;
    use geo::Coord;
    use std::io::Read;

    fn test_schedule() -> TransitSchedule {
        let mut schedule = TransitSchedule::empty();
        schedule
            .add_stop_facility(StopFacility {
                id: StopFacilityId::from("Stop_1"),
                coord: Coord { x: 0.0, y: 0.0 },
                link: LinkId::from("pt_1"),
                is_blocking: false,
            })
            .unwrap();

        let mut route = TransitRoute::new(
            TransitRouteId::from("route-1"),
            String::from("pt"),
            vec![LinkId::from("pt_1"), LinkId::from("pt_2")],
            vec![RouteStop {
                facility: StopFacilityId::from("Stop_1"),
                arrival_offset: 0,
                departure_offset: 10,
            }],
        );
        route
            .add_departure(Departure {
                id: DepartureId::from("departure_32400"),
                time: 32400,
                vehicle: VehicleId::from("shuttle_vehicle_32400"),
            })
            .unwrap();

        let mut line = TransitLine::new(TransitLineId::from("Shuttle"));
        line.add_route(route);
        schedule.add_line(line).unwrap();
        schedule
    }

    #[test]
    fn test_schedule_document_content() {
        let path = std::env::temp_dir().join(format!(
            "ptprep-matsim-{}-schedule.xml",
            std::process::id()
        ));
        write_schedule(&test_schedule(), &path).unwrap();

        let mut content = String::new();
        std::fs::File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(content.contains("transitSchedule_v2.dtd"));
        assert!(content.contains(
            r#"<stopFacility id="Stop_1" x="0.0" y="0.0" linkRefId="pt_1" isBlocking="false"/>"#
        ));
        assert!(content.contains("<transportMode>pt</transportMode>"));
        assert!(content
            .contains(r#"<stop refId="Stop_1" arrivalOffset="00:00:00" departureOffset="00:00:10"/>"#));
        assert!(content.contains(r#"<link refId="pt_2"/>"#));
        assert!(content.contains(
            r#"<departure id="departure_32400" departureTime="09:00:00" vehicleRefId="shuttle_vehicle_32400"/>"#
        ));
    }
}
