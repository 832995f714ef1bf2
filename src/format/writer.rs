//! Writes final components in the line-oriented text format or as JSON.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::engine::{RoundSummary, SplitReport, StopReason};
use crate::types::error::GnResult;
use crate::types::{NodeId, COMPONENT_SEPARATOR};

/// One component in JSON output.
#[derive(Debug, Serialize)]
struct ComponentRecord<'a> {
    size: usize,
    nodes: &'a [NodeId],
}

/// Full run in JSON output.
#[derive(Debug, Serialize)]
struct ReportRecord<'a> {
    component_count: usize,
    components: Vec<ComponentRecord<'a>>,
    stop_reason: StopReason,
    rounds: &'a [RoundSummary],
    pruned_nodes: usize,
    modularity: f64,
    elapsed_ms: u64,
}

/// Writer for component lists.
pub struct ComponentWriter;

impl ComponentWriter {
    /// Write components to a file in the text format.
    pub fn write_to_file(components: &[Vec<NodeId>], path: &Path) -> GnResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(components, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write components to any writer in the text format.
    ///
    /// The component count comes first; each component is then written as
    /// a `--` line, its size, and one sorted node id per line.
    pub fn write_to(components: &[Vec<NodeId>], writer: &mut impl Write) -> GnResult<()> {
        writeln!(writer, "{}", components.len())?;
        for component in components {
            let mut ids = component.clone();
            ids.sort_unstable();
            writeln!(writer, "{}", COMPONENT_SEPARATOR)?;
            writeln!(writer, "{}", ids.len())?;
            for id in ids {
                writeln!(writer, "{}", id)?;
            }
        }
        Ok(())
    }

    /// Write a full split report as JSON.
    pub fn write_json(report: &SplitReport, writer: &mut impl Write, pretty: bool) -> GnResult<()> {
        let record = ReportRecord {
            component_count: report.component_count(),
            components: report
                .components
                .iter()
                .map(|c| ComponentRecord {
                    size: c.len(),
                    nodes: c,
                })
                .collect(),
            stop_reason: report.stop_reason,
            rounds: &report.rounds,
            pruned_nodes: report.pruned_nodes,
            modularity: report.modularity,
            elapsed_ms: report.elapsed_ms,
        };
        if pretty {
            serde_json::to_writer_pretty(&mut *writer, &record)?;
        } else {
            serde_json::to_writer(&mut *writer, &record)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
