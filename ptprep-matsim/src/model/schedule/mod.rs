mod departure;
mod route_stop;
mod stop_facility;
mod transit_line;
mod transit_route;
mod transit_schedule;

pub use departure::{Departure, DepartureId};
pub use route_stop::RouteStop;
pub use stop_facility::{StopFacility, StopFacilityId};
pub use transit_line::{TransitLine, TransitLineId};
pub use transit_route::{TransitRoute, TransitRouteId};
pub use transit_schedule::TransitSchedule;
