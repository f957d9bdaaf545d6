use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kaleido::api::{
    apply_chain, parse_chain, solid_mesh, uniform_entries, MeshCfg, Polyhedron, SolverCfg,
    WythoffSymbol,
};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;

use export::{write_json, MeshExport, SolveSummary};

#[derive(Parser)]
#[command(name = "kaleido")]
#[command(about = "Uniform polyhedra from Wythoff symbols, with Conway operators")]
#[command(version = kaleido::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a symbol and print its counts and names as JSON
    Solve {
        /// Wythoff symbol such as "5/2 3|3", or "#n" for a tabulated entry
        #[arg(long)]
        symbol: String,
    },
    /// Build the mesh of a symbol, apply an operator chain, write JSON
    Mesh {
        #[arg(long)]
        symbol: String,
        /// Comma-separated operators, e.g. "k0.1@sides5,d,a"
        #[arg(long, default_value = "")]
        ops: String,
        /// Skip faces that cannot be oriented instead of failing
        #[arg(long)]
        lenient: bool,
        /// Output path; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the tabulated uniform polyhedra
    Table,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { symbol } => solve(&symbol),
        Action::Mesh {
            symbol,
            ops,
            lenient,
            out,
        } => mesh(&symbol, &ops, lenient, out),
        Action::Table => table(),
    }
}

fn solve_symbol(symbol: &str) -> Result<Polyhedron> {
    let sym = WythoffSymbol::parse(symbol)?;
    Polyhedron::solve(sym, &SolverCfg::default()).with_context(|| format!("solving {symbol}"))
}

fn solve(symbol: &str) -> Result<()> {
    let p = solve_symbol(symbol)?;
    tracing::info!(symbol, name = p.name.as_str(), "solve");
    println!("{}", serde_json::to_string_pretty(&SolveSummary::new(&p))?);
    Ok(())
}

fn mesh(symbol: &str, ops: &str, lenient: bool, out: Option<PathBuf>) -> Result<()> {
    let chain = parse_chain(ops)?;
    let p = solve_symbol(symbol)?;
    let base = solid_mesh(&p, &MeshCfg { lenient })?;
    let result = apply_chain(&base, &chain)?;
    tracing::info!(
        symbol,
        ops,
        v = result.vertex_count(),
        f = result.face_count(),
        "mesh"
    );

    let metadata = serde_json::json!({
        "symbol": p.symbol.to_string(),
        "name": p.name,
        "ops": ops,
        "closed": result.is_closed(),
        "euler": result.euler(),
        "version": kaleido::VERSION,
    });
    let doc = MeshExport::new(&result, metadata);
    match out {
        Some(path) => write_json(&path, &doc)?,
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn table() -> Result<()> {
    let rows: Vec<_> = uniform_entries()
        .map(|e| {
            serde_json::json!({
                "index": e.index,
                "symbol": e.symbol,
                "name": e.name,
                "dual": e.dual,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
