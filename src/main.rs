//! Planner entry point: CLI wiring and config-driven planning runs.

use std::path::Path;
use std::process;

use maint_opt::config::PlannerConfig;
use maint_opt::io::export::export_csv;
use maint_opt::model::Facility;
use maint_opt::reporting;
use maint_opt::sched::{self, SearchParams};
use maint_opt::store;
use maint_opt::summary;

/// Parsed CLI arguments.
struct CliArgs {
    records_path: Option<String>,
    demo: bool,
    config_path: Option<String>,
    preset: Option<String>,
    month: Option<u32>,
    window_override: Option<usize>,
    penalty_override: Option<f64>,
    facilities_override: Option<usize>,
    seed_override: Option<u64>,
    out: Option<String>,
}

fn print_help() {
    eprintln!("maint-opt — weekly maintenance visit planner over energy consumption");
    eprintln!();
    eprintln!("Usage: maint-opt --month <1-12> (--records <path> | --demo) [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --month <1-12>       Month to plan for (required)");
    eprintln!("  --records <path>     Load daily readings from a CSV file");
    eprintln!("                       (columns: facility_id,facility_name,date,kwh)");
    eprintln!("  --demo               Use seeded synthetic data instead of a file");
    eprintln!("  --config <path>      Load planner config from TOML file");
    eprintln!("  --preset <name>      Use a built-in preset (standard, short_trial)");
    eprintln!("  --window <n>         Override the scheduling window length");
    eprintln!("  --penalty <f64>      Override the facility switching penalty");
    eprintln!("  --facilities <n>     Override the synthetic facility count (--demo only)");
    eprintln!("  --seed <u64>         Override the synthetic random seed (--demo only)");
    eprintln!("  --out <path>         Export the plan to CSV");
    eprintln!("  --help               Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the standard preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        records_path: None,
        demo: false,
        config_path: None,
        preset: None,
        month: None,
        window_override: None,
        penalty_override: None,
        facilities_override: None,
        seed_override: None,
        out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--records" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --records requires a path argument");
                    process::exit(1);
                }
                cli.records_path = Some(args[i].clone());
            }
            "--demo" => {
                cli.demo = true;
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--month" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --month requires a 1-12 argument");
                    process::exit(1);
                }
                if let Ok(m) = args[i].parse::<u32>() {
                    cli.month = Some(m);
                } else {
                    eprintln!("error: --month value \"{}\" is not a valid month", args[i]);
                    process::exit(1);
                }
            }
            "--window" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --window requires a length argument");
                    process::exit(1);
                }
                if let Ok(w) = args[i].parse::<usize>() {
                    cli.window_override = Some(w);
                } else {
                    eprintln!("error: --window value \"{}\" is not a valid length", args[i]);
                    process::exit(1);
                }
            }
            "--penalty" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --penalty requires an f64 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<f64>() {
                    cli.penalty_override = Some(p);
                } else {
                    eprintln!("error: --penalty value \"{}\" is not a valid f64", args[i]);
                    process::exit(1);
                }
            }
            "--facilities" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --facilities requires a count argument");
                    process::exit(1);
                }
                if let Ok(n) = args[i].parse::<usize>() {
                    cli.facilities_override = Some(n);
                } else {
                    eprintln!("error: --facilities value \"{}\" is not a valid count", args[i]);
                    process::exit(1);
                }
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --out requires a path argument");
                    process::exit(1);
                }
                cli.out = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Loads facilities from the source selected on the command line.
fn load_facilities(cli: &CliArgs, config: &PlannerConfig) -> Vec<Facility> {
    if let Some(ref path) = cli.records_path {
        match store::load_csv_file(Path::new(path)) {
            Ok(facilities) => facilities,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    } else {
        let seed = cli.seed_override.unwrap_or(config.synthetic.seed);
        store::synthetic::generate(&config.synthetic, seed)
    }
}

fn main() {
    let cli = parse_args();

    let Some(month) = cli.month else {
        eprintln!("error: --month is required");
        print_help();
        process::exit(1);
    };
    if cli.records_path.is_some() && cli.demo {
        eprintln!("error: --records and --demo are mutually exclusive");
        process::exit(1);
    }
    if cli.records_path.is_none() && !cli.demo {
        eprintln!("error: a data source is required, pass --records <path> or --demo");
        process::exit(1);
    }
    if cli.records_path.is_some()
        && (cli.seed_override.is_some() || cli.facilities_override.is_some())
    {
        eprintln!("error: --seed and --facilities apply to --demo data only");
        process::exit(1);
    }

    // Load config: --config takes priority, then --preset, then standard
    let mut config = if let Some(ref path) = cli.config_path {
        match PlannerConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match PlannerConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        PlannerConfig::standard()
    };

    // Apply overrides
    if let Some(window) = cli.window_override {
        config.schedule.window_days = window;
    }
    if let Some(penalty) = cli.penalty_override {
        config.schedule.switch_penalty = penalty;
    }
    if let Some(n) = cli.facilities_override {
        config.synthetic.facilities = n;
    }

    // Validate
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let facilities = load_facilities(&cli, &config);

    // Average daily consumption per facility
    let averages = match summary::average_daily_consumption(&facilities, month) {
        Ok(averages) => averages,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    reporting::print_average_report(month, &averages);

    // Optimal weekly visit plan
    let params = SearchParams::new(config.schedule.window_days, config.schedule.switch_penalty);
    let plan = match sched::optimal_schedule(&facilities, month, &params) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    println!();
    reporting::print_plan(&plan);

    // Export CSV if requested
    if let Some(ref path) = cli.out {
        if let Err(e) = export_csv(&plan, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Plan written to {path}");
    }
}
