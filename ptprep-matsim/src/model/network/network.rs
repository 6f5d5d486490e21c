use super::{Link, LinkId, Node, NodeId};
use crate::model::MatsimError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// an in-memory MATSim network: nodes and directed links keyed by id.
/// insertion order is preserved so repeated runs over the same input
/// produce identical output files.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub name: Option<String>,
    nodes: IndexMap<NodeId, Node>,
    links: IndexMap<LinkId, Link>,
}

impl Network {
    pub fn empty() -> Network {
        Network::default()
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    pub fn contains_link(&self, link_id: &LinkId) -> bool {
        self.links.contains_key(link_id)
    }

    /// helper with error handling for getting the node data for a given node id
    pub fn get_node(&self, node_id: &NodeId) -> Result<&Node, MatsimError> {
        self.nodes
            .get(node_id)
            .ok_or_else(|| MatsimError::MissingNode(node_id.clone()))
    }

    /// helper with error handling for getting the link data for a given link id
    pub fn get_link(&self, link_id: &LinkId) -> Result<&Link, MatsimError> {
        self.links
            .get(link_id)
            .ok_or_else(|| MatsimError::MissingLink(link_id.clone()))
    }

    pub fn add_node(&mut self, node: Node) -> Result<(), MatsimError> {
        if self.contains_node(&node.id) {
            return Err(MatsimError::DuplicateId("node", node.id.to_string()));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// adds a link. both endpoints must already be members of the network.
    pub fn add_link(&mut self, link: Link) -> Result<(), MatsimError> {
        if self.contains_link(&link.id) {
            return Err(MatsimError::DuplicateId("link", link.id.to_string()));
        }
        for endpoint in [&link.from, &link.to] {
            if !self.contains_node(endpoint) {
                return Err(MatsimError::DanglingLinkEndpoint(
                    link.id.clone(),
                    endpoint.clone(),
                ));
            }
        }
        self.links.insert(link.id.clone(), link);
        Ok(())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_links(&self) -> usize {
        self.links.len()
    }
}
