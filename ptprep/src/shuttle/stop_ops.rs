use super::network_ops::ShuttleInfrastructure;
use super::shuttle_error::ShuttleError;
use ptprep_matsim::model::network::{LinkId, Network, NodeId};
use ptprep_matsim::model::schedule::{StopFacility, StopFacilityId, TransitSchedule};

mod element_ids {
    pub const FIRST_STOP: &str = "Stop_1";
    pub const LAST_STOP: &str = "Stop_2";
}

/// creates the boarding and alighting stop facilities, one per boundary
/// link of the service path, each placed at the terminus node of its link
/// and registered into the schedule. the links are resolved in the network
/// first, so a facility can never reference an unregistered link.
pub fn create_stops(
    infrastructure: &ShuttleInfrastructure,
    network: &Network,
    schedule: &mut TransitSchedule,
) -> Result<(StopFacilityId, StopFacilityId), ShuttleError> {
    let first = stop_facility(
        element_ids::FIRST_STOP,
        &infrastructure.start_link,
        &infrastructure.start_node,
        network,
    )?;
    let last = stop_facility(
        element_ids::LAST_STOP,
        &infrastructure.end_link,
        &infrastructure.end_node,
        network,
    )?;

    let ids = (first.id.clone(), last.id.clone());
    schedule.add_stop_facility(first)?;
    schedule.add_stop_facility(last)?;
    Ok(ids)
}

fn stop_facility(
    id: &str,
    link_id: &LinkId,
    at_node: &NodeId,
    network: &Network,
) -> Result<StopFacility, ShuttleError> {
    let link = network.get_link(link_id)?;
    let node = network.get_node(at_node)?;
    Ok(StopFacility {
        id: StopFacilityId::from(id),
        coord: node.coord,
        link: link.id.clone(),
        is_blocking: false,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shuttle::network_ops::test::{synthetic_config, synthetic_network};
    use crate::shuttle::network_ops::extend_network;

    #[test]
    fn test_stops_bind_to_registered_boundary_links() {
        let mut network = synthetic_network();
        let infrastructure = extend_network(&mut network, &synthetic_config()).unwrap();
        let mut schedule = TransitSchedule::empty();

        let (first, last) = create_stops(&infrastructure, &network, &mut schedule).unwrap();

        assert_eq!(schedule.n_stop_facilities(), 2);
        let boarding = schedule.get_stop_facility(&first).unwrap();
        assert_eq!(boarding.link, infrastructure.start_link);
        assert!(network.contains_link(&boarding.link));
        assert!(!boarding.is_blocking);

        let alighting = schedule.get_stop_facility(&last).unwrap();
        assert_eq!(alighting.link, infrastructure.end_link);
        assert!(network.contains_link(&alighting.link));
    }

    #[test]
    fn test_stops_sit_at_the_terminus_nodes() {
        let mut network = synthetic_network();
        let config = synthetic_config();
        let infrastructure = extend_network(&mut network, &config).unwrap();
        let mut schedule = TransitSchedule::empty();

        let (first, last) = create_stops(&infrastructure, &network, &mut schedule).unwrap();

        let boarding = schedule.get_stop_facility(&first).unwrap();
        assert_eq!(boarding.coord.x, config.origin.x);
        assert_eq!(boarding.coord.y, config.origin.y);

        let alighting = schedule.get_stop_facility(&last).unwrap();
        assert_eq!(alighting.coord.x, config.destination.x);
        assert_eq!(alighting.coord.y, config.destination.y);
    }

    #[test]
    fn test_unknown_boundary_link_fails() {
        let mut network = synthetic_network();
        let mut infrastructure = extend_network(&mut network, &synthetic_config()).unwrap();
        infrastructure.start_link = LinkId::from("nope");
        let mut schedule = TransitSchedule::empty();

        let result = create_stops(&infrastructure, &network, &mut schedule);
        assert!(result.is_err());
        assert_eq!(schedule.n_stop_facilities(), 0);
    }
}
