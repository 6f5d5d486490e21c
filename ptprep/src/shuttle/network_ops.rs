use super::shuttle_config::ShuttleConfig;
use super::shuttle_error::ShuttleError;
use geo::{Distance, Euclidean};
use ptprep_matsim::model::network::{Link, LinkId, Network, Node, NodeId};
use std::collections::BTreeSet;

mod element_ids {
    pub const START_NODE: &str = "pt_start";
    pub const END_NODE: &str = "pt_end";
    pub const START_LINK: &str = "pt_1";
    pub const CONNECTOR_LINK: &str = "pt_2";
    pub const END_LINK: &str = "pt_3";
}

/// the network elements synthesized for the shuttle service. later
/// generation stages reference these ids rather than re-deriving them.
#[derive(Debug, Clone)]
pub struct ShuttleInfrastructure {
    pub start_node: NodeId,
    pub end_node: NodeId,
    pub start_link: LinkId,
    pub connector_link: LinkId,
    pub end_link: LinkId,
}

impl ShuttleInfrastructure {
    /// the full service path in travel order
    pub fn link_path(&self) -> Vec<LinkId> {
        vec![
            self.start_link.clone(),
            self.connector_link.clone(),
            self.end_link.clone(),
        ]
    }
}

/// grafts the shuttle infrastructure onto the network: two terminus nodes
/// and three transit-only links running start → anchor A → anchor B → end.
/// everything already in the network is left untouched. both anchors are
/// resolved before the first mutation, so a missing anchor leaves the
/// network exactly as loaded.
pub fn extend_network(
    network: &mut Network,
    config: &ShuttleConfig,
) -> Result<ShuttleInfrastructure, ShuttleError> {
    let anchor_a = lookup_anchor(network, &config.origin.anchor_node)?;
    let anchor_b = lookup_anchor(network, &config.destination.anchor_node)?;

    let start_node = Node::new(
        NodeId::from(element_ids::START_NODE),
        config.origin.x,
        config.origin.y,
    );
    let end_node = Node::new(
        NodeId::from(element_ids::END_NODE),
        config.destination.x,
        config.destination.y,
    );

    let start_link = service_link(element_ids::START_LINK, &start_node, &anchor_a, config);
    let connector_link = service_link(element_ids::CONNECTOR_LINK, &anchor_a, &anchor_b, config);
    let end_link = service_link(element_ids::END_LINK, &anchor_b, &end_node, config);

    let infrastructure = ShuttleInfrastructure {
        start_node: start_node.id.clone(),
        end_node: end_node.id.clone(),
        start_link: start_link.id.clone(),
        connector_link: connector_link.id.clone(),
        end_link: end_link.id.clone(),
    };

    network.add_node(start_node)?;
    network.add_node(end_node)?;
    network.add_link(start_link)?;
    network.add_link(connector_link)?;
    network.add_link(end_link)?;

    log::info!(
        "extended network with service path {} -> {} -> {} -> {}",
        infrastructure.start_node,
        config.origin.anchor_node,
        config.destination.anchor_node,
        infrastructure.end_node
    );
    Ok(infrastructure)
}

fn lookup_anchor(network: &Network, anchor_node: &str) -> Result<Node, ShuttleError> {
    let id = NodeId::from(anchor_node);
    network
        .get_node(&id)
        .map(|node| node.clone())
        .map_err(|_| ShuttleError::AnchorNodeNotFound(id))
}

/// helper building a transit-only link between two nodes. freespeed and
/// capacity come from the configuration and are sized to never constrain
/// the simulation; length is the euclidean distance of the endpoints.
fn service_link(id: &str, from: &Node, to: &Node, config: &ShuttleConfig) -> Link {
    Link {
        id: LinkId::from(id),
        from: from.id.clone(),
        to: to.id.clone(),
        length: Euclidean.distance(from.get_point(), to.get_point()),
        freespeed: config.link_freespeed,
        capacity: config.link_capacity,
        permlanes: Link::DEFAULT_PERMLANES,
        modes: BTreeSet::from([config.transport_mode.clone()]),
    }
}
