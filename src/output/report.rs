use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::Point;
use crate::planner::Plan;

use super::OutputFormat;

/// Serialized form of a plan
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub start: Point,
    pub end: Point,
    pub found: bool,
    pub length: f64,
    pub path: &'a [Point],
    pub routes: usize,
    pub nodes: usize,
    pub depth: usize,
}

impl<'a> From<&'a Plan> for PlanReport<'a> {
    fn from(plan: &'a Plan) -> Self {
        Self {
            start: plan.start,
            end: plan.end,
            found: plan.is_found(),
            length: plan.length,
            path: &plan.path,
            routes: plan.routes,
            nodes: plan.nodes,
            depth: plan.depth,
        }
    }
}

/// Human-readable plan summary
pub fn render_text(plan: &Plan) -> String {
    let mut out = String::new();

    if !plan.is_found() {
        out.push_str(&format!("No path from {} to {}\n", plan.start, plan.end));
    } else {
        out.push_str(&format!(
            "Path from {} to {}: {} points, length {:.3}\n",
            plan.start,
            plan.end,
            plan.path.len(),
            plan.length
        ));
        for (i, point) in plan.path.iter().enumerate() {
            out.push_str(&format!("  {:>2}. {}\n", i, point));
        }
    }

    out.push_str(&format!(
        "Explored {} routes over {} nodes (depth {})\n",
        plan.routes, plan.nodes, plan.depth
    ));
    out
}

/// Write a plan to any writer in the given format
pub fn write_report<W: Write>(mut writer: W, plan: &Plan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writer.write_all(render_text(plan).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &PlanReport::from(plan))
                .context("Failed to serialize plan report")?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write a plan report to a file
pub fn write_report_file(path: &Path, plan: &Plan, format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    write_report(BufWriter::new(file), plan, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Polygon;
    use crate::planner::Planner;
    use std::fs;
    use tempfile::tempdir;

    fn wall_plan() -> Plan {
        let wall = Polygon::from(vec![(1.0, 0.0), (2.0, 0.0), (2.0, 15.0), (1.0, 15.0)]);
        Planner::default()
            .plan(&[wall], Point::new(0.0, 0.0), Point::new(20.0, 20.0))
            .unwrap()
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&wall_plan());
        assert!(text.starts_with("Path from (0, 0) to (20, 20): 3 points"));
        assert!(text.contains("   1. (1, 16)"));
        assert!(text.contains("Explored 6 routes over 13 nodes (depth 2)"));
    }

    #[test]
    fn test_render_text_no_path() {
        let plan = Plan {
            start: Point::new(0.0, 0.0),
            end: Point::new(5.0, 5.0),
            path: Vec::new(),
            length: 0.0,
            routes: 1,
            nodes: 1,
            depth: 0,
        };
        assert!(render_text(&plan).starts_with("No path from (0, 0) to (5, 5)"));
    }

    #[test]
    fn test_write_json_report_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");

        write_report_file(&path, &wall_plan(), OutputFormat::Json).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["found"], true);
        assert_eq!(value["nodes"], 13);
        assert_eq!(value["path"][1], serde_json::json!([1.0, 16.0]));
        assert_eq!(value["end"], serde_json::json!([20.0, 20.0]));
    }

    #[test]
    fn test_write_text_report_to_buffer() {
        let mut buf = Vec::new();
        write_report(&mut buf, &wall_plan(), OutputFormat::Text).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("length 35.448"));
    }
}
