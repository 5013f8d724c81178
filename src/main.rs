//! Command-line front end: loads a scenario, runs the cost calculation, prints the trace.

use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

use hvac_cost::calc::engine::calculate;
use hvac_cost::config::ScenarioConfig;
use hvac_cost::io::export::export_csv;
use hvac_cost::reference::{
    BUILDING_BASE_LOAD, CITIES, HVAC_SYSTEM_COP, INFILTRATION_PRESETS, INSULATION_FACTOR,
    OCCUPANT_LATENT_PRESETS,
};

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    trace_out: Option<String>,
    json: bool,
    list: bool,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("hvac-cost — hourly HVAC energy and per-tenant cost estimator");
    eprintln!();
    eprintln!("Usage: hvac-cost [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!(
        "  --preset <name>          Use a built-in preset ({})",
        ScenarioConfig::PRESETS.join(", ")
    );
    eprintln!("  --trace-out <path>       Export the calculation trace to CSV");
    eprintln!("  --json                   Print the result as JSON");
    eprintln!("  --list                   List reference table keys and exit");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start the HTTP API server instead of calculating");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostic logging.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        trace_out: None,
        json: false,
        list: false,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--trace-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --trace-out requires a path argument");
                    process::exit(1);
                }
                cli.trace_out = Some(args[i].clone());
            }
            "--json" => {
                cli.json = true;
            }
            "--list" => {
                cli.list = true;
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.scenario_path.is_some() && cli.preset.is_some() {
        eprintln!("error: --scenario and --preset are mutually exclusive");
        process::exit(1);
    }

    cli
}

fn print_reference() {
    println!("Cities:");
    for (name, c) in CITIES.entries {
        println!("  {name:<16} {:>5.1} °F  {:>5.1} %RH", c.temp_f, c.rh_pct);
    }
    let scalar_tables = [
        ("Building types (BTU/h/ft²/°F)", &BUILDING_BASE_LOAD),
        ("Insulation levels (multiplier)", &INSULATION_FACTOR),
        ("HVAC systems (COP)", &HVAC_SYSTEM_COP),
        ("Infiltration presets (CFM/ft²)", &INFILTRATION_PRESETS),
        ("Occupant latent presets (BTU/h/person)", &OCCUPANT_LATENT_PRESETS),
    ];
    for (title, table) in scalar_tables {
        println!("{title}:");
        for (name, value) in table.entries {
            println!("  {name:<40} {value}");
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "api")]
fn run_server(port: u16) {
    use std::net::SocketAddr;
    use std::sync::Arc;

    let state = Arc::new(hvac_cost::api::AppState::new());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(hvac_cost::api::serve(state, addr)) {
        eprintln!("error: server failed on {addr}: {e}");
        process::exit(1);
    }
}

fn main() {
    init_logging();
    let cli = parse_args();

    if cli.list {
        print_reference();
        return;
    }

    #[cfg(feature = "api")]
    if cli.serve {
        run_server(cli.port);
        return;
    }

    // Load config: --scenario takes priority, then --preset, then baseline default
    let scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    for (field, key) in scenario.unknown_keys() {
        tracing::warn!(field, key, "unknown reference key, using default");
    }

    let input = scenario.to_input();
    let result = calculate(&input);

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: failed to serialize result: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{}", result.trace);
        println!("Cost per hour:        ${:.2}", result.cost_per_hour);
        println!("Cost per tenant-hour: ${:.2}", result.cost_per_tenant);
    }

    // Export CSV if requested
    if let Some(ref path) = cli.trace_out {
        if let Err(e) = export_csv(&result.trace, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        tracing::info!(path = %path, "trace written");
        eprintln!("Trace written to {path}");
    }
}
