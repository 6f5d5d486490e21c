use super::shuttle_config::ShuttleConfig;
use super::shuttle_error::ShuttleError;
use ptprep_matsim::model::schedule::{TransitLine, TransitLineId, TransitRoute, TransitSchedule};

/// wraps the finished route into the named transit line and registers it
/// in the schedule.
pub fn assemble_line(
    route: TransitRoute,
    schedule: &mut TransitSchedule,
    config: &ShuttleConfig,
) -> Result<(), ShuttleError> {
    if route.link_path.is_empty() {
        return Err(ShuttleError::InvalidRouteConfiguration(format!(
            "cannot publish line '{}' for a route with no links",
            config.line_id
        )));
    }
    let mut line = TransitLine::new(TransitLineId::from(config.line_id.as_str()));
    line.add_route(route);
    schedule.add_line(line)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use ptprep_matsim::model::network::LinkId;
    use ptprep_matsim::model::schedule::TransitRouteId;

    fn route(link_path: Vec<LinkId>) -> TransitRoute {
        TransitRoute::new(
            TransitRouteId::from("route-1"),
            String::from("pt"),
            link_path,
            vec![],
        )
    }

    #[test]
    fn test_line_is_registered() {
        let mut schedule = TransitSchedule::empty();
        let config = ShuttleConfig::default();
        assemble_line(route(vec![LinkId::from("pt_1")]), &mut schedule, &config).unwrap();

        assert_eq!(schedule.n_lines(), 1);
        let line = schedule.lines().next().unwrap();
        assert_eq!(line.id, TransitLineId::from("Shuttle"));
        assert_eq!(line.routes().len(), 1);
    }

    #[test]
    fn test_empty_route_is_rejected() {
        let mut schedule = TransitSchedule::empty();
        let config = ShuttleConfig::default();
        let result = assemble_line(route(vec![]), &mut schedule, &config);
        assert!(matches!(
            result,
            Err(ShuttleError::InvalidRouteConfiguration(_))
        ));
        assert_eq!(schedule.n_lines(), 0);
    }
}
