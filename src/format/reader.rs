//! Reads whitespace-separated edge lists into an undirected graph.

use std::io::BufRead;
use std::path::Path;

use crate::graph::UndirectedGraph;
use crate::types::error::{GnError, GnResult};
use crate::types::NodeId;

/// Reader for line-oriented edge lists.
///
/// Each line holds a source and a target id separated by tabs or spaces;
/// further columns are ignored. Blank lines and lines starting with `#` are
/// skipped.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into an UndirectedGraph.
    pub fn read_from_file(path: &Path) -> GnResult<UndirectedGraph> {
        let file = std::fs::File::open(path)?;
        let graph = Self::read_from(&mut std::io::BufReader::new(file))?;
        log::info!(
            "Loaded {} node(s) and {} edge(s) from {}",
            graph.node_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Read from any buffered reader into an UndirectedGraph.
    pub fn read_from(reader: &mut impl BufRead) -> GnResult<UndirectedGraph> {
        Ok(UndirectedGraph::from_edges(Self::read_pairs(reader)?))
    }

    /// Parse every edge line into a (source, target) pair, in file order.
    pub fn read_pairs(reader: &mut impl BufRead) -> GnResult<Vec<(NodeId, NodeId)>> {
        let mut pairs = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(pair) = parse_line(&line, idx + 1)? {
                pairs.push(pair);
            }
        }
        Ok(pairs)
    }
}

/// Parse one line; `None` for blank and comment lines.
fn parse_line(line: &str, line_no: usize) -> GnResult<Option<(NodeId, NodeId)>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut fields = trimmed.split_whitespace();
    let source = parse_id(fields.next(), line_no)?;
    let target = parse_id(fields.next(), line_no)?;
    Ok(Some((source, target)))
}

fn parse_id(field: Option<&str>, line_no: usize) -> GnResult<NodeId> {
    let field = field.ok_or_else(|| GnError::Parse {
        line: line_no,
        message: "expected two node ids".to_string(),
    })?;
    field.parse::<NodeId>().map_err(|e| GnError::Parse {
        line: line_no,
        message: format!("invalid node id {:?}: {}", field, e),
    })
}
