// main.rs

use std::{
    path::Path,
    process::ExitCode,
};

use anyhow::Result;
use cpdiag::{
    config::{
        ColorChoice,
        Config,
    },
    flags,
    stress::Stress,
    style,
};
use tracing::{
    error,
    info,
};

mod args;
mod demo;
mod logging;

fn main() -> ExitCode {
    match run() {
        | Ok(true) => ExitCode::SUCCESS,
        | Ok(false) => ExitCode::FAILURE,
        | Err(e) => {
            error!("{e:#}");
            eprintln!("{}{e:#}", style::red("error: "));
            ExitCode::from(2)
        },
    }
}

/// Unlike the library's lazy `CONFIG`, a broken config file is an error here
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        | Some(path) => Config::load_from(path),
        | None => Config::load(),
    }
}

fn run() -> Result<bool> {
    let args = args::parse_args();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(iterations) = args.iterations {
        config.stress.iterations = iterations;
    }
    if let Some(seed) = args.seed {
        config.stress.seed = seed;
    }
    if let Some(report) = args.report {
        config.stress.report = report;
    }
    if args.stop_after.is_some() {
        config.stress.stop_after = args.stop_after;
    }

    flags::set_color(if args.no_color { ColorChoice::Never } else { config.diagnostics.color });

    let _guard = logging::init(&config.stress.log_dir)?;
    info!("Running with {config:#?}");

    let solve = if args.broken { demo::max_subarray_broken } else { demo::max_subarray };
    let summary = Stress::from_config(&config.stress).run(demo::generate, demo::check(solve));

    summary.write_jsonl(&config.stress.report)?;

    for case in &summary.failures {
        println!("{} {} -> {}", style::bold(&format!("#{}", case.iteration)), case.input, case.failure);
    }
    println!(
        "checked {} inputs, {} failed (report: {})",
        summary.iterations,
        summary.failures.len(),
        config.stress.report.display()
    );

    Ok(summary.passed())
}
