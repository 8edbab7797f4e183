use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, error};

use super::config::MAX_VERTEX_COUNT;
use super::error::Error;
use super::types::GraphProvider;
use bellman_ford_core::Graph;
use common::types::Edge;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_node: usize,

    #[serde(rename = "to")]
    pub to_node: usize,

    #[serde(rename = "weight")]
    pub weight: i64,
}

/// Loads a graph from a headered `from,to,weight` CSV file. Extra columns are
/// ignored.
pub struct CsvGraphLoader {
    path: PathBuf,
    /// Fixed vertex count; inferred as `max endpoint + 1` when absent.
    vertex_count: Option<usize>,
}

impl CsvGraphLoader {
    pub fn new(path: PathBuf, vertex_count: Option<usize>) -> Self {
        CsvGraphLoader { path, vertex_count }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<Edge>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "failed to open graph file");
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            edges.push((record.from_node, record.to_node, record.weight));
        }
        Ok(edges)
    }

    /// The configured vertex count, or `max endpoint + 1`, bounded by
    /// `MAX_VERTEX_COUNT` so a stray endpoint cannot trigger a huge allocation.
    fn resolve_vertex_count(&self, edges: &[Edge]) -> Result<usize, Error> {
        let vertex_count = match self.vertex_count {
            Some(count) => count,
            None => edges
                .iter()
                .flat_map(|&(u, v, _)| [u, v])
                .max()
                .map_or(Some(0), |max_id| max_id.checked_add(1))
                .unwrap_or(usize::MAX),
        };

        if vertex_count > MAX_VERTEX_COUNT {
            return Err(Error::InvalidConfig(format!(
                "vertex count {} of {} exceeds the limit of {}",
                vertex_count,
                self.path.display(),
                MAX_VERTEX_COUNT
            )));
        }
        Ok(vertex_count)
    }
}

impl GraphProvider for CsvGraphLoader {
    fn load(&self) -> Result<Graph, Error> {
        let edges = self.parse_csv_to_edges()?;
        let vertex_count = self.resolve_vertex_count(&edges)?;

        debug!(
            path = %self.path.display(),
            rows = edges.len(),
            vertex_count,
            "graph file parsed"
        );

        Ok(Graph::from_raw_edges(vertex_count, edges)?)
    }
}
