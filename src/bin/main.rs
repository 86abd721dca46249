use std::error::Error as StdError;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use thiserror::Error;

use remcf::algorithm::{SolveError, SolveMinCostMaxFlow};
use remcf::data::network::residual::{EdgeError, Graph};
use remcf::io::error::Import;
use remcf::io::import;
use remcf::io::report::{matrix, Summary};

/// A minimum cost maximum flow solver written in rust.
///
/// Each file holds a vertex count followed by arcs, written as four integers: tail, head, capacity
/// and cost. Flow is sent from the first to the last vertex unless specified otherwise.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Files containing the network descriptions, solved one after the other
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Vertex at which all flow starts
    #[arg(long)]
    source: Option<usize>,
    /// Vertex at which all flow ends
    #[arg(long)]
    sink: Option<usize>,
    /// Don't print the cost and capacity matrices
    #[arg(long)]
    no_matrices: bool,
}

/// Why a single file could not be solved.
#[derive(Error, Debug)]
enum Failure {
    #[error(transparent)]
    Import(#[from] Import),
    #[error("invalid terminals")]
    Terminals(#[from] EdgeError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let opts = Opts::parse();

    let mut nr_failed = 0;
    for path in &opts.files {
        if let Err(failure) = solve_file(path, &opts) {
            error!("Skipping \"{}\": {}", path.display(), with_causes(&failure));
            nr_failed += 1;
        }
    }

    if nr_failed > 0 {
        error!("{} of {} files could not be solved", nr_failed, opts.files.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// An error followed by the chain of errors that caused it, separated by colons.
fn with_causes(error: &dyn StdError) -> String {
    let mut text = error.to_string();
    let mut cause = error.source();
    while let Some(error) = cause {
        text.push_str(": ");
        text.push_str(&error.to_string());
        cause = error.source();
    }

    text
}

fn solve_file(path: &Path, opts: &Opts) -> Result<(), Failure> {
    println!("\n****Find Flow {}", path.display());

    let mut graph: Graph<i64> = import(path)?;
    info!("Read {} vertices from \"{}\"", graph.vertex_count(), path.display());
    let source = opts.source.unwrap_or(graph.source());
    let sink = opts.sink.unwrap_or(graph.sink());
    graph.set_terminals(source, sink)?;

    if !opts.no_matrices {
        println!("{}", matrix("Edge Cost", graph.costs()));
        println!("{}", matrix("Capacity", graph.capacities()));
    }

    let result = graph.solve()?;
    let minimum_cut = graph.minimum_cut(graph.source())?;
    print!("{}", Summary::new(&graph, &result, &minimum_cut));

    Ok(())
}
