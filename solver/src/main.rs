mod cli;
mod logging;

use std::io;

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use log::{debug, info};

use cli::{Args, Command};
use logging::Logger;
use route_solver::{SearchReport, SearchRunner, Session, Strategy, loader};

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    debug!(
        "loading {} and {}",
        args.adjacency.display(),
        args.coordinates.display()
    );
    let graph = loader::read_adjacency(&args.adjacency)?;
    let coordinates = loader::read_coordinates(&args.coordinates)?;
    info!(
        "loaded {} locations, {} edges, {} coordinates",
        graph.len(),
        graph.edge_count(),
        coordinates.len()
    );

    let runner = SearchRunner::new(&graph, &coordinates);

    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let mut session = Session::new(runner, io::stdin().lock(), io::stdout().lock());
            session.run()?;
        }
        Command::Search {
            from,
            to,
            algorithm,
        } => {
            let report = runner.run(&from, &to, algorithm)?;
            print_result(&report);
        }
        Command::Benchmark { from, to } => {
            run_benchmark(&runner, &from, &to)?;
        }
    }

    Ok(())
}

fn run_benchmark(runner: &SearchRunner<'_>, from: &str, to: &str) -> Result<()> {
    // fail on unknown endpoints once instead of once per strategy
    runner.graph().resolve(from)?;
    runner.graph().resolve(to)?;

    info!("benchmarking all strategies: {} -> {}", from, to);

    let mut completed_results = Vec::new();

    for strategy in Strategy::all() {
        info!("testing {}", strategy.name());

        match runner.run(from, to, strategy) {
            Ok(report) => {
                print_result(&report);
                completed_results.push(report);
            }
            Err(e) => {
                log::error!("{} failed: {}", strategy.name(), e);
            }
        }
    }

    print_benchmark_summary(&completed_results);
    Ok(())
}

// ========== Utilities ==========

fn print_result(report: &SearchReport) {
    println!("{}", report.strategy.name().bold());
    let Some(path) = &report.path else {
        println!("{}", "No path found.".red());
        return;
    };

    println!("{} {}", "Path:".cyan(), path.join(" -> "));
    if let Some(distance) = report.distance {
        println!("{} {:.4}", "Total Distance:".cyan(), distance);
    }
    println!(
        "{} {:.6} seconds",
        "Total Time:".cyan(),
        report.elapsed.as_secs_f64()
    );
    match report.peak_memory_kb {
        Some(kb) => println!("{} {} KB", "Memory Used:".cyan(), kb),
        None => println!("{} unavailable", "Memory Used:".cyan()),
    }
}

fn print_benchmark_summary(results: &[SearchReport]) {
    info!("\nbenchmark results:");
    info!(
        "{:<12} {:>6}  {:>12}  {:>14}",
        "algorithm", "hops", "distance", "time"
    );
    info!("{:-<50}", "");

    for report in results {
        let hops = report
            .hops()
            .map_or_else(|| "-".to_string(), |hops| hops.to_string());
        let distance = report
            .distance
            .map_or_else(|| "-".to_string(), |distance| format!("{:.4}", distance));
        info!(
            "{:<12} {:>6}  {:>12}  {:>14?}",
            report.strategy.name(),
            hops,
            distance,
            report.elapsed,
        );
    }

    let found: Vec<&SearchReport> = results.iter().filter(|r| r.found()).collect();
    if found.is_empty() {
        info!("\nno strategy found a path");
        return;
    }

    if let Some(report) = found.iter().min_by_key(|r| r.hops()) {
        info!(
            "\nfewest hops: {} ({} hops)",
            report.strategy.name(),
            report.hops().unwrap_or_default()
        );
    }

    if let Some(report) = found.iter().min_by(|a, b| {
        let a = a.distance.unwrap_or(f64::INFINITY);
        let b = b.distance.unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    }) {
        info!(
            "shortest: {} ({:.4})",
            report.strategy.name(),
            report.distance.unwrap_or_default()
        );
    }

    if let Some(report) = found.iter().min_by_key(|r| r.elapsed) {
        info!("fastest: {} ({:?})", report.strategy.name(), report.elapsed);
    }
}
