//! Map-file parsing and graph construction.
//!
//! A map file is a plain-text description of a directed graph:
//!
//! ```text
//! # Airline routes, spring schedule
//! 3
//! UME ARN
//! ARN LHR
//! UME OSD
//! ```
//!
//! Lines before the first line consisting solely of digits are ignored as
//! headers. That line is the declared edge count. Every following line that
//! is not blank and does not start with `#` must hold exactly two node
//! names, each ASCII-alphanumeric and at most [`MAX_NODE_NAME_LEN`]
//! characters. Any violation aborts the whole load; the engine is only ever
//! handed a fully validated store.

use std::path::Path;

use causeway_graph::{GraphStore, NodeId};
use tokio::fs;
use tracing::debug;

use crate::error::{Error, Result};

/// Maximum accepted length of a node name, in characters.
pub const MAX_NODE_NAME_LEN: usize = 40;

/// A directed edge as written in a map file.
///
/// Edge records exist only to drive store construction; they are not
/// retained once the graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Name of the node the edge leaves.
    pub origin: String,
    /// Name of the node the edge points to.
    pub destination: String,
}

/// A parsed map file: the declared edge count plus the edge records.
#[derive(Debug, Clone)]
pub struct MapFile {
    /// Edge count declared in the file header.
    ///
    /// This is a sizing hint, not a promise: the store is dimensioned to
    /// twice this value because each edge touches at most two new names.
    pub declared_edges: usize,
    /// Edge records in file order.
    pub edges: Vec<EdgeRecord>,
}

impl MapFile {
    /// Read and parse a map file from disk.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or any parse error
    /// from [`MapFile::parse`].
    pub async fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).await?;
        let map = Self::parse(&text)?;
        debug!(
            map = %path.display(),
            declared = map.declared_edges,
            parsed = map.edges.len(),
            "loaded map file"
        );
        Ok(map)
    }

    /// Parse map text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEdgeCount`] when no positive edge count line
    /// is found, and [`Error::Map`] for any malformed or invalid edge line.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate();

        let mut declared = None;
        for (idx, raw) in lines.by_ref() {
            let line = raw.trim_end();
            if !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()) {
                let count = line.parse::<usize>().map_err(|err| Error::Map {
                    line: idx + 1,
                    message: format!("invalid edge count '{line}': {err}"),
                })?;
                declared = Some(count);
                break;
            }
        }

        let declared = declared.ok_or(Error::MissingEdgeCount)?;
        if declared == 0 {
            return Err(Error::MissingEdgeCount);
        }

        let mut edges = Vec::with_capacity(declared);
        for (idx, raw) in lines {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let (Some(origin), Some(destination), None) =
                (tokens.next(), tokens.next(), tokens.next())
            else {
                return Err(Error::Map {
                    line: idx + 1,
                    message: "expected exactly two node names".to_string(),
                });
            };

            validate_node_name(origin, idx + 1)?;
            validate_node_name(destination, idx + 1)?;

            edges.push(EdgeRecord {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }

        Ok(Self {
            declared_edges: declared,
            edges,
        })
    }

    /// Build a graph store from the parsed edges.
    ///
    /// The store is sized to twice the declared edge count regardless of the
    /// distinct-name count. Nodes are created on first mention
    /// (find-before-insert); each record then contributes one directed edge.
    ///
    /// # Errors
    ///
    /// Returns the store's capacity error when a degenerate map names more
    /// distinct nodes than twice its declared edge count.
    pub fn build_store(&self) -> Result<GraphStore> {
        let mut store = GraphStore::with_capacity(self.declared_edges * 2)?;

        for edge in &self.edges {
            let origin = find_or_insert(&mut store, &edge.origin)?;
            let destination = find_or_insert(&mut store, &edge.destination)?;
            store.insert_edge(origin, destination);
        }

        debug!(
            nodes = store.node_count(),
            edges = store.edge_count(),
            "built graph store"
        );
        Ok(store)
    }
}

/// Look a name up in the store, inserting it when absent.
fn find_or_insert(store: &mut GraphStore, name: &str) -> Result<NodeId> {
    match store.find_node(name) {
        Some(id) => Ok(id),
        None => Ok(store.insert_node(name)?),
    }
}

/// Check that a node name is ASCII-alphanumeric and within the length bound.
fn validate_node_name(name: &str, line: usize) -> Result<()> {
    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::Map {
            line,
            message: format!("node name '{name}' is not alphanumeric"),
        });
    }

    if name.len() > MAX_NODE_NAME_LEN {
        return Err(Error::Map {
            line,
            message: format!(
                "node name exceeds {MAX_NODE_NAME_LEN} characters ({} given)",
                name.len()
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_a_plain_map() {
        let map = MapFile::parse("2\na b\nb c\n").unwrap();
        assert_eq!(map.declared_edges, 2);
        assert_eq!(map.edges.len(), 2);
        assert_eq!(map.edges[0].origin, "a");
        assert_eq!(map.edges[0].destination, "b");
    }

    #[test]
    fn skips_headers_before_the_edge_count() {
        let text = "Route map\nrevision B\n2\na b\nb c\n";
        let map = MapFile::parse(text).unwrap();
        assert_eq!(map.declared_edges, 2);
        assert_eq!(map.edges.len(), 2);
    }

    #[test]
    fn skips_comments_and_blank_lines_between_edges() {
        let text = "1\n\n# busiest route\na b\n\n";
        let map = MapFile::parse(text).unwrap();
        assert_eq!(map.edges.len(), 1);
    }

    #[test]
    fn missing_edge_count_is_fatal() {
        let err = MapFile::parse("a b\nb c\n").unwrap_err();
        assert!(matches!(err, Error::MissingEdgeCount));
    }

    #[test]
    fn zero_edge_count_is_fatal() {
        let err = MapFile::parse("0\na b\n").unwrap_err();
        assert!(matches!(err, Error::MissingEdgeCount));
    }

    #[test]
    fn mixed_alphanumeric_line_is_not_an_edge_count() {
        // "3rd edition" starts with a digit but is not all digits, so it is
        // still a header line.
        let map = MapFile::parse("3rd edition\n1\na b\n").unwrap();
        assert_eq!(map.declared_edges, 1);
    }

    #[rstest]
    #[case::one_token("1\nlonely\n")]
    #[case::three_tokens("1\na b c\n")]
    fn wrong_token_count_is_fatal(#[case] text: &str) {
        let err = MapFile::parse(text).unwrap_err();
        assert!(matches!(err, Error::Map { line: 2, .. }));
    }

    #[rstest]
    #[case::punctuation("a!b")]
    #[case::hyphen("a-b")]
    #[case::non_ascii("caf\u{e9}")]
    fn non_alphanumeric_name_is_fatal(#[case] name: &str) {
        let text = format!("1\n{name} dest\n");
        let err = MapFile::parse(&text).unwrap_err();
        match err {
            Error::Map { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("not alphanumeric"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn name_of_exactly_forty_characters_is_accepted() {
        let name = "a".repeat(MAX_NODE_NAME_LEN);
        let map = MapFile::parse(&format!("1\n{name} b\n")).unwrap();
        assert_eq!(map.edges[0].origin.len(), MAX_NODE_NAME_LEN);
    }

    #[test]
    fn name_of_forty_one_characters_is_rejected() {
        let name = "a".repeat(MAX_NODE_NAME_LEN + 1);
        let err = MapFile::parse(&format!("1\n{name} b\n")).unwrap_err();
        match err {
            Error::Map { message, .. } => assert!(message.contains("exceeds 40")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn build_store_reuses_nodes_across_edges() {
        let map = MapFile::parse("3\na b\nb c\na c\n").unwrap();
        let store = map.build_store().unwrap();

        assert_eq!(store.node_count(), 3);
        assert_eq!(store.edge_count(), 3);
        assert_eq!(store.capacity(), 6);
    }

    #[test]
    fn build_store_fails_when_names_outgrow_the_declared_count() {
        // One declared edge gives two slots; three distinct names overrun.
        let map = MapFile::parse("1\na b\nb c\n").unwrap();
        let err = map.build_store().unwrap_err();
        assert!(matches!(
            err,
            Error::Graph(causeway_graph::Error::CapacityExhausted { limit: 2 })
        ));
    }

    #[test]
    fn adjacency_order_is_most_recent_edge_first() {
        let map = MapFile::parse("3\nhub a\nhub b\nhub c\n").unwrap();
        let store = map.build_store().unwrap();
        let hub = store.find_node("hub").unwrap();

        let order: Vec<&str> = store.neighbours(hub).map(|id| store.name(id)).collect();
        assert_eq!(order, vec!["c", "b", "a"]);
    }
}
