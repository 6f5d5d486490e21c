use super::xml_ops::{self, fmt_number};
use crate::model::network::Network;
use crate::model::MatsimError;
use itertools::Itertools;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use std::path::Path;

const NETWORK_DOCTYPE: &str =
    r#"network SYSTEM "http://www.matsim.org/files/dtd/network_v2.dtd""#;

/// writes a network as a matsim network_v2 document, gzip-compressed when
/// the filename ends in `.gz`.
pub fn write_network(network: &Network, path: &Path) -> Result<(), MatsimError> {
    let (sink, tmp) = xml_ops::open_sink(path)?;
    let mut writer = Writer::new_with_indent(sink, b'\t', 1);
    write_document(&mut writer, network).map_err(|e| MatsimError::XmlWriteError {
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
        "wrote network with {} nodes and {} links to {}",
        network.n_nodes(),
        network.n_links(),
        path.display()
    );
    Ok(())
}

fn write_document<W: Write>(
    writer: &mut Writer<W>,
    network: &Network,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(NETWORK_DOCTYPE)))?;

    let mut network_element = BytesStart::new("network");
    if let Some(name) = &network.name {
        network_element.push_attribute(("name", name.as_str()));
    }
    writer.write_event(Event::Start(network_element))?;

    writer.write_event(Event::Start(BytesStart::new("nodes")))?;
    for node in network.nodes() {
        let mut element = BytesStart::new("node");
        element.push_attribute(("id", node.id.0.as_str()));
        element.push_attribute(("x", fmt_number(node.coord.x).as_str()));
        element.push_attribute(("y", fmt_number(node.coord.y).as_str()));
        writer.write_event(Event::Empty(element))?;
    }
    writer.write_event(Event::End(BytesEnd::new("nodes")))?;

    let mut links_element = BytesStart::new("links");
    links_element.push_attribute(("capperiod", "01:00:00"));
    links_element.push_attribute(("effectivecellsize", "7.5"));
    links_element.push_attribute(("effectivelanewidth", "3.75"));
    writer.write_event(Event::Start(links_element))?;
    for link in network.links() {
        let mut element = BytesStart::new("link");
        element.push_attribute(("id", link.id.0.as_str()));
        element.push_attribute(("from", link.from.0.as_str()));
        element.push_attribute(("to", link.to.0.as_str()));
        element.push_attribute(("length", fmt_number(link.length).as_str()));
        element.push_attribute(("freespeed", fmt_number(link.freespeed).as_str()));
        element.push_attribute(("capacity", fmt_number(link.capacity).as_str()));
        element.push_attribute(("permlanes", fmt_number(link.permlanes).as_str()));
        element.push_attribute(("oneway", "1"));
        element.push_attribute(("modes", link.modes.iter().join(",").as_str()));
        writer.write_event(Event::Empty(element))?;
    }
    writer.write_event(Event::End(BytesEnd::new("links")))?;

    writer.write_event(Event::End(BytesEnd::new("network")))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::read_network;
    use crate::model::network::{Link, LinkId, Node, NodeId};
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn test_network() -> Network {
        let mut network = Network::empty();
        network.name = Some(String::from("roundtrip"));
        network
            .add_node(Node::new(NodeId::from("a"), 0.0, 0.0))
            .unwrap();
        network
            .add_node(Node::new(NodeId::from("b"), 250.0, 100.0))
            .unwrap();
        network
            .add_link(Link {
                id: LinkId::from("ab"),
                from: NodeId::from("a"),
                to: NodeId::from("b"),
                length: 269.258,
                freespeed: 13.9,
                capacity: 1000.0,
                permlanes: 1.0,
                modes: BTreeSet::from([String::from("car"), String::from("pt")]),
            })
            .unwrap();
        network
    }

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ptprep-matsim-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_write_then_read_preserves_entities() {
        let path = temp_file("roundtrip.xml.gz");
        let network = test_network();
        write_network(&network, &path).unwrap();

        let read_back = read_network(&path).unwrap();
        assert_eq!(read_back.name.as_deref(), Some("roundtrip"));
        assert_eq!(read_back.n_nodes(), network.n_nodes());
        assert_eq!(read_back.n_links(), network.n_links());

        let original = network.get_link(&LinkId::from("ab")).unwrap();
        let link = read_back.get_link(&LinkId::from("ab")).unwrap();
        assert_eq!(link, original);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let path = temp_file("committed.xml");
        write_network(&test_network(), &path).unwrap();
        assert!(path.exists());
        assert!(!xml_ops::tmp_path(&path).exists());
        std::fs::remove_file(&path).unwrap();
    }
}
