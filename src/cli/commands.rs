//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use crate::engine::{edge_betweenness, SplitEngine, SplitParams};
use crate::format::{ComponentWriter, EdgeListReader};
use crate::graph::{connected_components, largest_component};
use crate::types::GnResult;

/// Run the full split pipeline and emit the final components.
///
/// Output goes to `output` when given, otherwise to stdout.
pub fn cmd_split(
    input: &Path,
    output: Option<&Path>,
    params: SplitParams,
    json: bool,
) -> GnResult<()> {
    let graph = EdgeListReader::read_from_file(input)?;
    let engine = SplitEngine::new(params)?;
    let report = engine.run(graph)?;

    match (output, json) {
        (Some(path), false) => {
            ComponentWriter::write_to_file(&report.components, path)?;
            println!(
                "Wrote {} component(s) to {} after {} round(s) ({} edge(s) removed)",
                report.component_count(),
                path.display(),
                report.rounds.len(),
                report.removed_edge_count()
            );
        }
        (Some(path), true) => {
            let file = std::fs::File::create(path)?;
            let mut writer = std::io::BufWriter::new(file);
            ComponentWriter::write_json(&report, &mut writer, true)?;
            writer.flush()?;
        }
        (None, false) => {
            ComponentWriter::write_to(&report.components, &mut std::io::stdout().lock())?;
        }
        (None, true) => {
            ComponentWriter::write_json(&report, &mut std::io::stdout().lock(), true)?;
        }
    }
    Ok(())
}

/// Display node, edge and component counts for an edge list.
pub fn cmd_info(input: &Path, json: bool) -> GnResult<()> {
    let graph = EdgeListReader::read_from_file(input)?;
    let components = connected_components(&graph);
    let largest = largest_component(&graph);
    let isolated = graph
        .nodes()
        .filter(|&n| graph.degree(n).map(|d| d == 0).unwrap_or(false))
        .count();

    if json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "components": components.len(),
            "largest_component": largest.len(),
            "isolated_nodes": isolated,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("File: {}", input.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Components: {}", components.len());
        println!("Largest component: {}", largest.len());
        println!("Isolated nodes: {}", isolated);
    }
    Ok(())
}

/// Score every edge once and list the highest.
pub fn cmd_betweenness(input: &Path, top: usize, json: bool) -> GnResult<()> {
    let graph = EdgeListReader::read_from_file(input)?;
    let scores = edge_betweenness(&graph)?;
    let ranked = scores.top(top);

    if json {
        let rows: Vec<serde_json::Value> = ranked
            .iter()
            .map(|&((u, v), score)| serde_json::json!({"source": u, "target": v, "score": score}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if ranked.is_empty() {
        println!("No edges.");
    } else {
        for ((u, v), score) in ranked {
            println!("{:>12.3}  {} -- {}", score, u, v);
        }
    }
    Ok(())
}
