use super::{Departure, RouteStop};
use crate::model::network::LinkId;
use crate::model::MatsimError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
#[serde(transparent)]
pub struct TransitRouteId(pub String);

impl Display for TransitRouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransitRouteId {
    fn from(id: &str) -> Self {
        TransitRouteId(String::from(id))
    }
}

/// one service pattern of a transit line: an ordered link path through the
/// network, the stops visited along it, and the timed departures serving it.
/// the link path and stop sequence are fixed at construction; departures
/// are the only part grown afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitRoute {
    pub id: TransitRouteId,
    pub transport_mode: String,
    pub link_path: Vec<LinkId>,
    pub stops: Vec<RouteStop>,
    departures: Vec<Departure>,
}

impl TransitRoute {
    pub fn new(
        id: TransitRouteId,
        transport_mode: String,
        link_path: Vec<LinkId>,
        stops: Vec<RouteStop>,
    ) -> TransitRoute {
        TransitRoute {
            id,
            transport_mode,
            link_path,
            stops,
            departures: vec![],
        }
    }

    /// attaches a timed departure to this route. departure ids are unique
    /// within the route.
    pub fn add_departure(&mut self, departure: Departure) -> Result<(), MatsimError> {
        if self.departures.iter().any(|d| d.id == departure.id) {
            return Err(MatsimError::DuplicateId(
                "departure",
                departure.id.to_string(),
            ));
        }
        self.departures.push(departure);
        Ok(())
    }

    pub fn departures(&self) -> &[Departure] {
        &self.departures
    }

    pub fn n_departures(&self) -> usize {
        self.departures.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::schedule::DepartureId;
    use crate::model::vehicles::VehicleId;

    #[test]
    fn test_duplicate_departure_rejected() {
        let mut route = TransitRoute::new(
            TransitRouteId::from("r1"),
            String::from("pt"),
            vec![LinkId::from("l1")],
            vec![],
        );
        let departure = Departure {
            id: DepartureId::from("d1"),
            time: 0,
            vehicle: VehicleId::from("v1"),
        };
        route.add_departure(departure.clone()).unwrap();
        assert!(route.add_departure(departure).is_err());
        assert_eq!(route.n_departures(), 1);
    }
}
