use clap::Parser;
use std::fmt::Write as FmtWrite;
use std::process;
use walkers_landscape::{CATALOG, Landscape, ObjectiveFunction, find_spec};
use walkers_optimizers::{Optimizer, OptimizerError, RunConfigBuilder, WalkMeasures, save_trace_csv};

#[derive(Parser, Debug)]
#[command(
    name = "run_walker",
    about = "Minimize a benchmark landscape with one population-based metaheuristic"
)]
struct Cli {
    /// Optimizer short name (use --list-optimizers to see available options)
    #[arg(long, default_value = "PSO")]
    optimizer: String,

    /// Name of the landscape to minimize (use --list-functions to see available options)
    #[arg(long)]
    function: Option<String>,

    /// Dimensionality of the problem (defaults to the landscape's smallest supported dimension)
    #[arg(long)]
    dim: Option<usize>,

    /// Number of population members
    #[arg(long, default_value_t = 50)]
    population: usize,

    /// Number of iterations
    #[arg(long, default_value_t = 500)]
    max_iters: usize,

    /// Random seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Override one hyperparameter, as name=value (repeatable)
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, f64)>,

    /// Log the incumbent at every iteration
    #[arg(long)]
    verbose: bool,

    /// Write the full run record as JSON to this path
    #[arg(long)]
    output: Option<String>,

    /// Write the convergence trace as CSV to this path
    #[arg(long)]
    trace_csv: Option<String>,

    /// List all available landscapes and exit
    #[arg(long)]
    list_functions: bool,

    /// List all optimizers with their default hyperparameters and exit
    #[arg(long)]
    list_optimizers: bool,
}

fn parse_param(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for '{}': {e}", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

fn main() {
    let args = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "info" } else { "warn" }),
    )
    .init();

    if args.list_functions {
        list_available_functions();
        return;
    }
    if args.list_optimizers {
        for opt in Optimizer::all() {
            println!("- {opt}");
        }
        return;
    }

    let function_name = match &args.function {
        Some(name) => name.trim(),
        None => {
            eprintln!("Error: --function must be provided unless --list-functions is used.");
            process::exit(2);
        }
    };

    let spec = find_spec(function_name).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(2);
    });
    let dim = args.dim.unwrap_or_else(|| spec.dims.default_dim());
    let landscape = Landscape::new(spec, dim).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(2);
    });

    let mut optimizer: Optimizer = args.optimizer.parse().unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(2);
    });
    for (name, value) in &args.params {
        if let Err(err) = optimizer.set_hyperparameter(name, *value) {
            eprintln!("Error: {err}");
            process::exit(2);
        }
    }

    let config = RunConfigBuilder::for_objective(&landscape)
        .population(args.population)
        .max_iters(args.max_iters)
        .seed(args.seed)
        .verbose(args.verbose)
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            process::exit(2);
        });

    println!("Running {} on {}...", optimizer, landscape);

    let record = match optimizer.run(&landscape, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: optimization failed: {}", e);
            process::exit(1);
        }
    };

    print!("{record}");
    let mut best_vector = String::new();
    for (idx, value) in record.best().position.iter().enumerate() {
        if idx > 0 {
            best_vector.push_str(", ");
        }
        let _ = write!(&mut best_vector, "{value:.6}");
    }
    println!("Best parameters: [{}]", best_vector);
    if let Some(d) = landscape.minimum().distance_to(record.best().position.view()) {
        println!("Distance to nearest known minimizer: {:.6e}", d);
    }
    let measures = WalkMeasures::from_record(&record);
    println!("Mean incumbent speed: {:.6e}", measures.mean_speed);
    for w in record.warnings() {
        println!("Warning: {w}");
    }

    if let Some(path) = &args.output {
        let written = std::fs::File::create(path)
            .map_err(OptimizerError::from)
            .and_then(|f| record.to_writer(std::io::BufWriter::new(f)));
        if let Err(err) = written {
            eprintln!("Error: cannot write '{path}': {err}");
            process::exit(1);
        }
        println!("Run record written to {path}");
    }
    if let Some(path) = &args.trace_csv {
        if let Err(err) = save_trace_csv(&record, path) {
            eprintln!("Error: cannot write '{path}': {err}");
            process::exit(1);
        }
        println!("Trace written to {path}");
    }
}

fn list_available_functions() {
    println!("Available landscapes ({}):", CATALOG.len());
    for spec in CATALOG {
        println!("- {:<16} {} ({})", spec.name, spec.description, spec.dims);
    }
}
