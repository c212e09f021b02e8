//! CSV loading for the edge and class files
//!
//! Both files carry a header row. Rows that fail to parse are skipped and
//! counted; only failing to open the file is an error.
//!
//! - edges: `locationId1,locationId2,name1,name2,travelTime`
//! - classes: `classCode,locationId,startTime,endTime`

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;

use crate::error::{CampusError, Result};
use crate::graph::{EdgeStore, NodeId, TravelTime};
use crate::registry::{ClassCode, ClassInfo, Registry};
use crate::trace_time;

/// Row counts from one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| CampusError::io_operation("open", path.display(), e))
}

pub fn load_edges(path: &Path, graph: &mut EdgeStore) -> Result<LoadSummary> {
    let start = Instant::now();
    let summary = read_edges(open(path)?, graph);
    tracing::debug!(
        path = %path.display(),
        loaded = summary.loaded,
        skipped = summary.skipped,
        "edges loaded"
    );
    trace_time!(start, "load_edges", rows = summary.loaded);
    Ok(summary)
}

/// Read edge rows into `graph`
pub fn read_edges<R: Read>(input: R, graph: &mut EdgeStore) -> LoadSummary {
    let mut summary = LoadSummary::default();
    for (index, row) in reader(input).records().enumerate() {
        // header is line 1
        let line = index + 2;
        match row.map_err(CampusError::from).and_then(|r| parse_edge(&r)) {
            Ok(edge) => {
                graph.add_edge(edge.from, edge.to, edge.weight);
                graph.set_name(edge.from, &edge.from_name);
                graph.set_name(edge.to, &edge.to_name);
                summary.loaded += 1;
            }
            Err(e) => {
                tracing::warn!(line, error = %e, "skipping edge row");
                summary.skipped += 1;
            }
        }
    }
    summary
}

struct EdgeRow {
    from: NodeId,
    to: NodeId,
    from_name: String,
    to_name: String,
    weight: TravelTime,
}

fn parse_edge(record: &StringRecord) -> Result<EdgeRow> {
    let field = |i: usize, name: &str| {
        record
            .get(i)
            .ok_or_else(|| CampusError::invalid_value("edge row", format!("missing {}", name)))
    };
    let weight = field(4, "travel time")?;
    Ok(EdgeRow {
        from: field(0, "first location")?.parse()?,
        to: field(1, "second location")?.parse()?,
        from_name: field(2, "first name")?.to_string(),
        to_name: field(3, "second name")?.to_string(),
        weight: weight
            .parse()
            .map_err(|_| CampusError::invalid_value("travel time", weight))?,
    })
}

pub fn load_classes(path: &Path, graph: &mut EdgeStore, registry: &mut Registry) -> Result<LoadSummary> {
    let start = Instant::now();
    let summary = read_classes(open(path)?, graph, registry);
    tracing::debug!(
        path = %path.display(),
        loaded = summary.loaded,
        skipped = summary.skipped,
        "classes loaded"
    );
    trace_time!(start, "load_classes", rows = summary.loaded);
    Ok(summary)
}

/// Read class rows into `registry`; each class location becomes a node of
/// `graph`
pub fn read_classes<R: Read>(input: R, graph: &mut EdgeStore, registry: &mut Registry) -> LoadSummary {
    let mut summary = LoadSummary::default();
    for (index, row) in reader(input).records().enumerate() {
        let line = index + 2;
        match row.map_err(CampusError::from).and_then(|r| parse_class(&r)) {
            Ok((code, info)) => {
                if registry.set_class_info(graph, code.clone(), info).is_some() {
                    tracing::debug!(line, class = %code, "class redefined");
                }
                summary.loaded += 1;
            }
            Err(e) => {
                tracing::warn!(line, error = %e, "skipping class row");
                summary.skipped += 1;
            }
        }
    }
    summary
}

fn parse_class(record: &StringRecord) -> Result<(ClassCode, ClassInfo)> {
    let field = |i: usize, name: &str| {
        record
            .get(i)
            .ok_or_else(|| CampusError::invalid_value("class row", format!("missing {}", name)))
    };
    let code: ClassCode = field(0, "class code")?.parse()?;
    let info = ClassInfo {
        location: field(1, "location")?.parse()?,
        start_time: field(2, "start time")?.to_string(),
        end_time: field(3, "end time")?.to_string(),
    };
    Ok((code, info))
}
