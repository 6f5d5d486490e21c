use super::xml_ops::is_gzipped;
use crate::model::network::{Link, LinkId, Network, Node, NodeId};
use crate::model::MatsimError;
use flate2::read::MultiGzDecoder;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// the `<network>` document shape of matsim's network_v2 files. elements
/// we do not model, such as `<attributes>` blocks, are skipped by the
/// deserializer.
#[derive(Debug, Deserialize)]
struct RawNetwork {
    #[serde(rename = "@name")]
    name: Option<String>,
    nodes: RawNodes,
    links: RawLinks,
}

#[derive(Debug, Deserialize)]
struct RawNodes {
    #[serde(rename = "node", default)]
    nodes: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@x")]
    x: f64,
    #[serde(rename = "@y")]
    y: f64,
}

#[derive(Debug, Deserialize)]
struct RawLinks {
    #[serde(rename = "link", default)]
    links: Vec<RawLink>,
}

#[derive(Debug, Deserialize)]
struct RawLink {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@from")]
    from: String,
    #[serde(rename = "@to")]
    to: String,
    #[serde(rename = "@length")]
    length: f64,
    #[serde(rename = "@freespeed")]
    freespeed: f64,
    #[serde(rename = "@capacity")]
    capacity: f64,
    #[serde(rename = "@permlanes", default = "default_permlanes")]
    permlanes: f64,
    #[serde(rename = "@modes", default)]
    modes: Option<String>,
}

fn default_permlanes() -> f64 {
    Link::DEFAULT_PERMLANES
}

/// reads a matsim network file, decompressing when the filename ends in
/// `.gz`. node and link insertion order follows document order.
pub fn read_network(path: &Path) -> Result<Network, MatsimError> {
    let file = File::open(path).map_err(|e| MatsimError::FileError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let network = if is_gzipped(path) {
        decode(BufReader::new(MultiGzDecoder::new(file)), path)
    } else {
        decode(BufReader::new(file), path)
    }?;
    log::info!(
        "read network from {} with {} nodes and {} links",
        path.display(),
        network.n_nodes(),
        network.n_links()
    );
    Ok(network)
}

fn decode<R: BufRead>(reader: R, path: &Path) -> Result<Network, MatsimError> {
    let raw: RawNetwork =
        quick_xml::de::from_reader(reader).map_err(|e| MatsimError::XmlReadError {
            path: path.to_path_buf(),
            msg: format!("{e}"),
        })?;
    build_network(raw)
}

fn build_network(raw: RawNetwork) -> Result<Network, MatsimError> {
    let mut network = Network::empty();
    network.name = raw.name;
    for node in raw.nodes.nodes {
        network.add_node(Node::new(NodeId(node.id), node.x, node.y))?;
    }
    for link in raw.links.links {
        network.add_link(Link {
            id: LinkId(link.id),
            from: NodeId(link.from),
            to: NodeId(link.to),
            length: link.length,
            freespeed: link.freespeed,
            capacity: link.capacity,
            permlanes: link.permlanes,
            modes: parse_modes(link.modes.as_deref()),
        })?;
    }
    Ok(network)
}

fn parse_modes(modes: Option<&str>) -> BTreeSet<String> {
    modes
        .unwrap_or_default()
        .split(',')
        .map(|mode| mode.trim().to_string())
        .filter(|mode| !mode.is_empty())
        .collect()
}
