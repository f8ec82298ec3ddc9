//! Mesh Refine CLI Application

use clap::Parser;
use mesh_refine::config::RefineConfig;
use mesh_refine::io::{read_mesh, write_mesh, RefineReport};
use mesh_refine::mesh::{
    bounding_box, count_distinct_edges, count_isolated_vertices, smooth_mesh, subdivide,
    surface_area,
};
use mesh_refine::{refine, Result};
use std::path::PathBuf;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Info { input } => cmd_info(input),
        Commands::Subdivide { input, output } => cmd_subdivide(input, output),
        Commands::Smooth {
            input,
            output,
            iterations,
            factor,
        } => cmd_smooth(input, output, iterations, factor),
        Commands::Refine {
            input,
            output,
            iterations,
            factor,
            config,
            report,
        } => cmd_refine(input, output, iterations, factor, config, report),
    }
}

fn cmd_info(input: PathBuf) -> Result<()> {
    println!("Reading mesh file: {}", input.display());
    let mesh = read_mesh(&input)?;

    println!("\n{}", "=".repeat(60));
    println!("MESH INFORMATION");
    println!("{}", "=".repeat(60));
    println!();
    println!("  Vertices:     {}", mesh.num_vertices());
    println!("  Faces:        {}", mesh.num_faces());
    println!("  Edges:        {}", count_distinct_edges(&mesh.faces));
    println!("  Isolated:     {}", count_isolated_vertices(&mesh));
    println!();

    if let Some((lo, hi)) = bounding_box(&mesh.vertices) {
        println!("Bounding Box:");
        println!("  - min: ({:.6}, {:.6}, {:.6})", lo.x, lo.y, lo.z);
        println!("  - max: ({:.6}, {:.6}, {:.6})", hi.x, hi.y, hi.z);
        println!();
    }

    match surface_area(&mesh) {
        Ok(area) => println!("  Surface Area: {:.6}", area),
        Err(e) => {
            log::warn!("Mesh is not a valid triangle mesh: {}", e);
            println!("  Surface Area: n/a ({})", e);
        }
    }
    println!();

    println!("{}", "=".repeat(60));

    Ok(())
}

fn cmd_subdivide(input: PathBuf, output: PathBuf) -> Result<()> {
    let mesh = read_mesh(&input)?;
    let subdivided = subdivide(mesh)?;
    write_mesh(&subdivided, &output)?;

    println!(
        "Wrote {} vertices and {} faces to {}",
        subdivided.num_vertices(),
        subdivided.num_faces(),
        output.display()
    );
    Ok(())
}

fn cmd_smooth(input: PathBuf, output: PathBuf, iterations: u32, factor: f64) -> Result<()> {
    let mesh = read_mesh(&input)?;
    let smoothed = smooth_mesh(mesh, iterations, factor)?;
    write_mesh(&smoothed, &output)?;

    println!(
        "Smoothed {} vertices ({} passes, factor {}) into {}",
        smoothed.num_vertices(),
        iterations,
        factor,
        output.display()
    );
    Ok(())
}

fn cmd_refine(
    input: PathBuf,
    output: PathBuf,
    iterations: Option<u32>,
    factor: Option<f64>,
    config: Option<PathBuf>,
    report: Option<PathBuf>,
) -> Result<()> {
    let base = match config {
        Some(path) => RefineConfig::from_file(&path)?,
        None => RefineConfig::default(),
    };
    let config = base.with_overrides(iterations, factor);

    println!("Reading mesh file: {}", input.display());
    let mesh = read_mesh(&input)?;

    let (refined, summary) = refine(mesh, &config)?;
    write_mesh(&refined, &output)?;

    summary.print_summary();

    if let Some(report_path) = report {
        RefineReport::new(&input, &output, &summary).to_file(&report_path)?;
        println!("Report written to {}", report_path.display());
    }

    Ok(())
}
