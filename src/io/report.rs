//! JSON run report for refinement results

use crate::error::{RefineError, Result};
use crate::pipeline::{MeshCounts, RefineSummary};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Record of one refinement run
#[derive(Debug, Serialize, Deserialize)]
pub struct RefineReport {
    /// Source mesh file
    pub input_file: String,

    /// Destination mesh file
    pub output_file: String,

    /// Timestamp when the run finished
    pub timestamp: String,

    /// Smoothing parameters used
    pub parameters: ParametersJson,

    /// Mesh size before refinement
    pub input_mesh: MeshCounts,

    /// Mesh size after refinement
    pub output_mesh: MeshCounts,
}

/// JSON representation of the smoothing parameters
#[derive(Debug, Serialize, Deserialize)]
pub struct ParametersJson {
    pub subdivision_levels: u32,
    pub smoothing_iterations: u32,
    pub smoothing_factor: f64,
}

impl RefineReport {
    /// Create a report from a finished run
    pub fn new(input_file: &Path, output_file: &Path, summary: &RefineSummary) -> Self {
        let timestamp = chrono::Utc::now().to_rfc3339();

        Self {
            input_file: input_file.display().to_string(),
            output_file: output_file.display().to_string(),
            timestamp,
            parameters: ParametersJson {
                subdivision_levels: 1,
                smoothing_iterations: summary.config.iterations,
                smoothing_factor: summary.config.factor,
            },
            input_mesh: summary.input,
            output_mesh: summary.output,
        }
    }

    /// Export the report to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        serde_json::to_writer_pretty(file, self).map_err(|e| {
            RefineError::JsonError(format!("Failed to write JSON report: {}", e))
        })?;

        log::info!("Wrote run report to {:?}", path.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RefineConfig;

    fn make_summary() -> RefineSummary {
        RefineSummary {
            input: MeshCounts {
                vertices: 3,
                faces: 1,
                edges: 3,
            },
            output: MeshCounts {
                vertices: 6,
                faces: 4,
                edges: 9,
            },
            config: RefineConfig::default(),
        }
    }

    #[test]
    fn test_report_fields() {
        let report = RefineReport::new(
            Path::new("in.obj"),
            Path::new("out.obj"),
            &make_summary(),
        );

        assert_eq!(report.input_file, "in.obj");
        assert_eq!(report.parameters.smoothing_iterations, 4);
        assert_eq!(report.output_mesh.faces, 4);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }

    #[test]
    fn test_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = RefineReport::new(
            Path::new("in.obj"),
            Path::new("out.obj"),
            &make_summary(),
        );
        report.to_file(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["output_mesh"]["vertices"], 6);
        assert_eq!(value["parameters"]["smoothing_factor"], 0.6);
    }
}
