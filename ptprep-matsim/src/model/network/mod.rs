mod link;
mod link_id;
#[allow(clippy::module_inception)]
mod network;
mod node;
mod node_id;

pub use link::Link;
pub use link_id::LinkId;
pub use network::Network;
pub use node::Node;
pub use node_id::NodeId;
