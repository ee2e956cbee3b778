mod error;

use clap::{Parser, Subcommand};
use error::{CliError, CliResult};
use hp_fuel::{DEFAULT_INPUT, DEFAULT_OUTPUT, run_report};
use hp_pathways::{OperatingPoint, Production, Quantity, SweepResult, parse_quantity};
use hp_scenario::{ScenarioReport, run_scenario};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hp-cli")]
#[command(about = "h2prod CLI - Nuclear hydrogen production estimates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Low-temperature electrolysis
    Lte {
        /// Reactor thermal power (default MW)
        #[arg(long)]
        power: String,
        /// Thermal-to-electric efficiency (fraction or %)
        #[arg(long)]
        efficiency: String,
    },
    /// Sulfur-Iodine cycle
    Si {
        /// Reactor thermal power (default MW)
        #[arg(long)]
        power: String,
        /// Reactor outlet temperature (default °C)
        #[arg(long)]
        outlet: String,
    },
    /// Sulfur-Iodine cycle with electric boost to the process temperature
    SiBoosted {
        /// Reactor thermal power (default MW)
        #[arg(long)]
        power: String,
        /// Reactor outlet temperature (default °C)
        #[arg(long)]
        outlet: String,
        /// SI process temperature (default °C)
        #[arg(long)]
        process: String,
    },
    /// High-temperature electrolysis
    Hte {
        /// Reactor thermal power (default MW)
        #[arg(long)]
        power: String,
        /// Electrolyser pressure (default atm)
        #[arg(long)]
        pressure: String,
        /// Reactor outlet temperature (default °C)
        #[arg(long)]
        outlet: String,
    },
    /// High-temperature electrolysis with electric boost to the electrolysis temperature
    HteBoosted {
        /// Reactor thermal power (default MW)
        #[arg(long)]
        power: String,
        /// Electrolyser pressure (default atm)
        #[arg(long)]
        pressure: String,
        /// Reactor outlet temperature (default °C)
        #[arg(long)]
        outlet: String,
        /// Electrolysis temperature (default °C)
        #[arg(long)]
        electrolysis: String,
    },
    /// Run every evaluation and sweep in a scenario file
    Run {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Yearly fuel consumption report
    Fuel {
        /// Fuel log to read
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// SVG plot to write
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lte { power, efficiency } => cmd_evaluate(OperatingPoint::Lte {
            thermal_power_mw: arg(&power, Quantity::Power, "power")?,
            efficiency: arg(&efficiency, Quantity::Efficiency, "efficiency")?,
        }),
        Commands::Si { power, outlet } => cmd_evaluate(OperatingPoint::Si {
            thermal_power_mw: arg(&power, Quantity::Power, "power")?,
            outlet_temp_c: arg(&outlet, Quantity::Temperature, "outlet")?,
        }),
        Commands::SiBoosted {
            power,
            outlet,
            process,
        } => cmd_evaluate(OperatingPoint::SiBoosted {
            thermal_power_mw: arg(&power, Quantity::Power, "power")?,
            outlet_temp_c: arg(&outlet, Quantity::Temperature, "outlet")?,
            process_temp_c: arg(&process, Quantity::Temperature, "process")?,
        }),
        Commands::Hte {
            power,
            pressure,
            outlet,
        } => cmd_evaluate(OperatingPoint::Hte {
            thermal_power_mw: arg(&power, Quantity::Power, "power")?,
            pressure_atm: arg(&pressure, Quantity::Pressure, "pressure")?,
            outlet_temp_c: arg(&outlet, Quantity::Temperature, "outlet")?,
        }),
        Commands::HteBoosted {
            power,
            pressure,
            outlet,
            electrolysis,
        } => cmd_evaluate(OperatingPoint::HteBoosted {
            thermal_power_mw: arg(&power, Quantity::Power, "power")?,
            pressure_atm: arg(&pressure, Quantity::Pressure, "pressure")?,
            outlet_temp_c: arg(&outlet, Quantity::Temperature, "outlet")?,
            electrolysis_temp_c: arg(&electrolysis, Quantity::Temperature, "electrolysis")?,
        }),
        Commands::Run { scenario_path } => cmd_run(&scenario_path),
        Commands::Fuel { input, output } => cmd_fuel(&input, &output),
    }
}

fn arg(text: &str, quantity: Quantity, name: &'static str) -> CliResult<f64> {
    parse_quantity(text, quantity).map_err(|source| CliError::Unit { arg: name, source })
}

fn cmd_evaluate(point: OperatingPoint) -> CliResult<()> {
    let production = point.evaluate()?;
    println!("{}", point.pathway().label());
    println!("  Inputs: {}", point);
    print_production(&production);
    Ok(())
}

fn print_production(production: &Production) {
    println!(
        "  Production rate:     {:.2} kg/h",
        production.production_rate_kg_per_h
    );
    println!(
        "  Specific energy:     {:.2} kWh/kg-H2",
        production.specific_energy_kwh_per_kg
    );
    if let Some(gamma) = production.gamma {
        println!("  Electrical fraction: {:.4}", gamma);
    }
}

fn cmd_run(scenario_path: &Path) -> CliResult<()> {
    println!("Running scenario: {}", scenario_path.display());
    let scenario = hp_scenario::load(scenario_path)?;
    let report = run_scenario(&scenario)?;
    print_scenario_report(&report);
    Ok(())
}

fn print_scenario_report(report: &ScenarioReport) {
    println!("Scenario: {}", report.name);

    if !report.evaluations.is_empty() {
        println!();
        println!("Evaluations:");
        for evaluation in &report.evaluations {
            println!("- {} ({})", evaluation.id, evaluation.point);
            match &evaluation.outcome {
                Ok(production) => print_production(production),
                Err(err) => println!("  ✗ {}", err),
            }
        }
    }

    for sweep in &report.sweeps {
        println!();
        println!(
            "Sweep {}: {} over {}",
            sweep.id,
            sweep.result.pathway().label(),
            sweep.result.parameter
        );
        print_sweep_table(&sweep.result);
    }

    let failed = report.num_failed();
    if failed > 0 {
        println!();
        println!("{} point(s) failed", failed);
    }
}

fn print_sweep_table(result: &SweepResult) {
    let unit = result.parameter.quantity().unit();
    println!(
        "  {:>14} {:>14} {:>16} {:>8}",
        format!("value [{}]", unit),
        "rate [kg/h]",
        "energy [kWh/kg]",
        "gamma"
    );
    for point in &result.outcomes {
        match &point.outcome {
            Ok(p) => println!(
                "  {:>14.3} {:>14.2} {:>16.3} {:>8}",
                point.value,
                p.production_rate_kg_per_h,
                p.specific_energy_kwh_per_kg,
                p.gamma.map_or_else(|| "-".to_string(), |g| format!("{:.4}", g))
            ),
            Err(err) => println!("  {:>14.3}  ✗ {}", point.value, err),
        }
    }
}

fn cmd_fuel(input: &Path, output: &Path) -> CliResult<()> {
    let report = run_report(input, output)?;
    print!("{}", report.summary);
    if report.skipped > 0 {
        println!("({} row(s) outside the calendar skipped)", report.skipped);
    }
    println!("Plot written to {}", output.display());
    Ok(())
}
