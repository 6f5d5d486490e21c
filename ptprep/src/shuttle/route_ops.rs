use super::shuttle_config::{ShuttleConfig, StopOffsetConfig};
use super::shuttle_error::ShuttleError;
use itertools::Itertools;
use ptprep_matsim::model::network::{LinkId, Network};
use ptprep_matsim::model::schedule::{
    RouteStop, StopFacilityId, TransitRoute, TransitRouteId, TransitSchedule,
};

/// builds the transit route from the service link path and the ordered
/// stop visits. the path must be contiguous in the network, the first and
/// last stops must sit on the first and last path links, and stop offsets
/// must not run backwards along the sequence.
pub fn build_route(
    link_path: &[LinkId],
    stops: &[(StopFacilityId, StopOffsetConfig)],
    network: &Network,
    schedule: &TransitSchedule,
    config: &ShuttleConfig,
) -> Result<TransitRoute, ShuttleError> {
    validate_path(link_path, network)?;
    validate_stops(link_path, stops, schedule)?;

    let route_stops = stops
        .iter()
        .map(|(facility, offsets)| RouteStop {
            facility: facility.clone(),
            arrival_offset: offsets.arrival,
            departure_offset: offsets.departure,
        })
        .collect();

    Ok(TransitRoute::new(
        TransitRouteId::from(config.route_id.as_str()),
        config.transport_mode.clone(),
        link_path.to_vec(),
        route_stops,
    ))
}

fn validate_path(link_path: &[LinkId], network: &Network) -> Result<(), ShuttleError> {
    if link_path.is_empty() {
        return Err(ShuttleError::InvalidRouteConfiguration(String::from(
            "route path has no links",
        )));
    }
    for (leading_id, trailing_id) in link_path.iter().tuple_windows() {
        let leading = network.get_link(leading_id)?;
        let trailing = network.get_link(trailing_id)?;
        if leading.to != trailing.from {
            return Err(ShuttleError::InvalidRouteConfiguration(format!(
                "links '{leading_id}' and '{trailing_id}' do not share a node"
            )));
        }
    }
    // a single-link path still has to exist in the network
    if link_path.len() == 1 {
        network.get_link(&link_path[0])?;
    }
    Ok(())
}

fn validate_stops(
    link_path: &[LinkId],
    stops: &[(StopFacilityId, StopOffsetConfig)],
    schedule: &TransitSchedule,
) -> Result<(), ShuttleError> {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(ShuttleError::InvalidRouteConfiguration(String::from(
                "route serves no stops",
            )))
        }
    };

    // boundary stops must sit on the boundary links of the path. for a
    // single-link path this forces both stops onto that one link.
    let first_facility = schedule.get_stop_facility(&first.0)?;
    if Some(&first_facility.link) != link_path.first() {
        return Err(ShuttleError::InvalidRouteConfiguration(format!(
            "first stop '{}' is not on the first path link",
            first.0
        )));
    }
    let last_facility = schedule.get_stop_facility(&last.0)?;
    if Some(&last_facility.link) != link_path.last() {
        return Err(ShuttleError::InvalidRouteConfiguration(format!(
            "last stop '{}' is not on the last path link",
            last.0
        )));
    }

    for (id, offsets) in stops {
        if offsets.departure < offsets.arrival {
            return Err(ShuttleError::InvalidRouteConfiguration(format!(
                "stop '{id}' departs before it arrives"
            )));
        }
    }
    for ((leading_id, leading), (trailing_id, trailing)) in stops.iter().tuple_windows() {
        if trailing.arrival < leading.departure {
            return Err(ShuttleError::InvalidRouteConfiguration(format!(
                "offsets run backwards between stops '{leading_id}' and '{trailing_id}'"
            )));
        }
    }
    if stops.len() > 1 && last.1.arrival <= first.1.departure {
        return Err(ShuttleError::InvalidRouteConfiguration(format!(
            "offsets do not increase between stops '{}' and '{}'",
            first.0, last.0
        )));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shuttle::network_ops::extend_network;
    use crate::shuttle::network_ops::test::{synthetic_config, synthetic_network};
    use crate::shuttle::stop_ops::create_stops;
    use ptprep_matsim::model::network::Network;
    use ptprep_matsim::model::schedule::TransitSchedule;

    struct Fixture {
        network: Network,
        schedule: TransitSchedule,
        path: Vec<LinkId>,
        stops: Vec<(StopFacilityId, StopOffsetConfig)>,
        config: ShuttleConfig,
    }

    fn fixture() -> Fixture {
        let config = synthetic_config();
        let mut network = synthetic_network();
        let infrastructure = extend_network(&mut network, &config).unwrap();
        let mut schedule = TransitSchedule::empty();
        let (first, last) = create_stops(&infrastructure, &network, &mut schedule).unwrap();
        Fixture {
            network,
            schedule,
            path: infrastructure.link_path(),
            stops: vec![(first, config.first_stop), (last, config.last_stop)],
            config,
        }
    }

    #[test]
    fn test_route_is_built_from_contiguous_path() {
        let f = fixture();
        let route = build_route(&f.path, &f.stops, &f.network, &f.schedule, &f.config).unwrap();

        assert_eq!(route.id, TransitRouteId::from("route-1"));
        assert_eq!(route.transport_mode, "pt");
        assert_eq!(route.link_path, f.path);
        assert_eq!(route.stops.len(), 2);
        assert_eq!(route.stops[0].arrival_offset, 0);
        assert_eq!(route.stops[0].departure_offset, 10);
        assert_eq!(route.stops[1].arrival_offset, 3600);
        assert_eq!(route.stops[1].departure_offset, 3610);
    }

    #[test]
    fn test_empty_path_is_fatal() {
        let f = fixture();
        let result = build_route(&[], &f.stops, &f.network, &f.schedule, &f.config);
        assert!(matches!(
            result,
            Err(ShuttleError::InvalidRouteConfiguration(_))
        ));
    }

    #[test]
    fn test_discontiguous_path_is_rejected() {
        let f = fixture();
        // drop the connector so start and end links no longer touch
        let broken = vec![f.path[0].clone(), f.path[2].clone()];
        let result = build_route(&broken, &f.stops, &f.network, &f.schedule, &f.config);
        assert!(matches!(
            result,
            Err(ShuttleError::InvalidRouteConfiguration(_))
        ));
    }

    #[test]
    fn test_misaligned_stops_are_rejected() {
        let f = fixture();
        let swapped: Vec<_> = f.stops.iter().rev().cloned().collect();
        let result = build_route(&f.path, &swapped, &f.network, &f.schedule, &f.config);
        assert!(matches!(
            result,
            Err(ShuttleError::InvalidRouteConfiguration(_))
        ));
    }

    #[test]
    fn test_backwards_offsets_are_rejected() {
        let mut f = fixture();
        f.stops[1].1 = StopOffsetConfig {
            arrival: 5,
            departure: 8,
        };
        let result = build_route(&f.path, &f.stops, &f.network, &f.schedule, &f.config);
        assert!(matches!(
            result,
            Err(ShuttleError::InvalidRouteConfiguration(_))
        ));
    }
}
