//! CLI commands and interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mesh-refine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display information about a mesh file
    Info {
        /// Path to the mesh file (.obj or .json)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Apply one level of midpoint subdivision
    Subdivide {
        /// Path to the mesh file (.obj or .json)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output mesh path (.obj, .json or .vtk)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Apply Laplacian smoothing without subdividing
    Smooth {
        /// Path to the mesh file (.obj or .json)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output mesh path (.obj, .json or .vtk)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Number of smoothing passes
        #[arg(long, default_value = "4")]
        iterations: u32,

        /// Blend factor toward the neighbor mean, within [0, 1]
        #[arg(long, default_value = "0.6")]
        factor: f64,
    },

    /// Full pipeline: subdivide, then smooth
    Refine {
        /// Path to the mesh file (.obj or .json)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output mesh path (.obj, .json or .vtk)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Number of smoothing passes (overrides the config file)
        #[arg(long)]
        iterations: Option<u32>,

        /// Blend factor toward the neighbor mean (overrides the config file)
        #[arg(long)]
        factor: Option<f64>,

        /// Configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write a JSON run report to this path
        #[arg(short, long, value_name = "FILE")]
        report: Option<PathBuf>,
    },
}
