use grid_line_cover::config::{load_config, RuntimeConfig};
use grid_line_cover::io::{read_problem, write_json_file};
use grid_line_cover::LineCoverSolver;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = match env::args().nth(1).as_deref() {
        Some("-h" | "--help") => {
            println!("{}", usage());
            return Ok(());
        }
        Some(path) => load_config(Path::new(path))?,
        None => RuntimeConfig::default(),
    };

    let problem = read_problem(config.input_path.as_deref())?;
    let solver = LineCoverSolver::new(config.solver.clone());
    let report = solver.solve_with_diagnostics(&problem.rects);

    let format = config.output.format;
    if format.includes_text() {
        println!("{}", report.result.total_lines);
    }
    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        eprintln!("JSON report written to {}", path.display());
    } else if format.includes_json() {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
        println!("{json}");
    }
    Ok(())
}

fn usage() -> String {
    "Usage: grid-line-cover [config.json]\n\nReads the problem from stdin unless the config names an input_path.".to_string()
}
