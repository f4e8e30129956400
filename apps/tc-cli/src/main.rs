use clap::{Parser, Subcommand};
use serde_json::json;
use std::borrow::Cow;
use std::path::PathBuf;
use tc_core::units::{k, m3, pa};
use tc_cycles::{GasState, OttoCycle, OttoSolution, RankineCycle, RankineSolution, VaporState};
use tc_tables::{air, load_gas_table, water, GasAnchor, GasTable, TableError};

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "thermocycle CLI - closed power-cycle analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an air-standard Otto cycle
    Otto {
        /// Initial (bottom-dead-center) volume in cubic meters
        #[arg(long, default_value_t = 0.0005)]
        v1: f64,
        /// Initial temperature in kelvin
        #[arg(long, default_value_t = 300.0)]
        t1: f64,
        /// Initial pressure in pascals
        #[arg(long, default_value_t = 101_325.0)]
        p1: f64,
        /// Compression ratio v1/v2
        #[arg(long, default_value_t = 8.0)]
        ratio: f64,
        /// Peak temperature after heat addition, in kelvin
        #[arg(long, default_value_t = 2000.0)]
        t3: f64,
        /// Gas property table file (five columns; built-in air if omitted)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Cycle name for the report
        #[arg(long, default_value = "Otto Cycle")]
        name: String,
        /// Emit JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Solve a Rankine vapor power cycle
    Rankine {
        /// Condenser pressure in pascals
        #[arg(long, default_value_t = 8_000.0)]
        p_low: f64,
        /// Boiler pressure in pascals
        #[arg(long, default_value_t = 8_000_000.0)]
        p_high: f64,
        /// Turbine inlet temperature in kelvin (saturated vapor if omitted)
        #[arg(long)]
        t_high: Option<f64>,
        /// Turbine isentropic efficiency in (0, 1]
        #[arg(long, default_value_t = 1.0)]
        turbine_eff: f64,
        /// Cycle name for the report
        #[arg(long, default_value = "Rankine Cycle")]
        name: String,
        /// Emit JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Resolve a single gas state from exactly one known property
    State {
        /// Temperature in kelvin
        #[arg(long)]
        t: Option<f64>,
        /// Specific enthalpy in kJ/kg
        #[arg(long)]
        h: Option<f64>,
        /// Relative pressure (dimensionless)
        #[arg(long)]
        pr: Option<f64>,
        /// Specific internal energy in kJ/kg
        #[arg(long)]
        u: Option<f64>,
        /// Relative volume (dimensionless)
        #[arg(long)]
        vr: Option<f64>,
        /// Gas property table file (five columns; built-in air if omitted)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Emit JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> CliResult {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Otto {
            v1,
            t1,
            p1,
            ratio,
            t3,
            table,
            name,
            json,
        } => cmd_otto(v1, t1, p1, ratio, t3, table, &name, json),
        Commands::Rankine {
            p_low,
            p_high,
            t_high,
            turbine_eff,
            name,
            json,
        } => cmd_rankine(p_low, p_high, t_high, turbine_eff, &name, json),
        Commands::State {
            t,
            h,
            pr,
            u,
            vr,
            table,
            json,
        } => cmd_state(t, h, pr, u, vr, table, json),
    }
}

fn gas_table(path: Option<PathBuf>) -> Result<Cow<'static, GasTable>, TableError> {
    match path {
        Some(path) => {
            tracing::info!("loading gas table from {}", path.display());
            Ok(Cow::Owned(load_gas_table(&path)?))
        }
        None => Ok(Cow::Borrowed(air())),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_otto(
    v1: f64,
    t1: f64,
    p1: f64,
    ratio: f64,
    t3: f64,
    table_path: Option<PathBuf>,
    name: &str,
    json: bool,
) -> CliResult {
    let table = gas_table(table_path)?;
    let cycle = OttoCycle::new(&table, m3(v1), k(t1), pa(p1), ratio, k(t3), name)?;
    let solution = cycle.solve()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&otto_json(&solution)?)?);
    } else {
        print!("{solution}");
    }
    Ok(())
}

fn cmd_rankine(
    p_low: f64,
    p_high: f64,
    t_high: Option<f64>,
    turbine_eff: f64,
    name: &str,
    json: bool,
) -> CliResult {
    let cycle = RankineCycle::new(
        water(),
        pa(p_low),
        pa(p_high),
        t_high.map(k),
        turbine_eff,
        name,
    )?;
    let solution = cycle.solve()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rankine_json(&solution)?)?
        );
    } else {
        print!("{solution}");
    }
    Ok(())
}

fn cmd_state(
    t: Option<f64>,
    h: Option<f64>,
    pr: Option<f64>,
    u: Option<f64>,
    vr: Option<f64>,
    table_path: Option<PathBuf>,
    json: bool,
) -> CliResult {
    let table = gas_table(table_path)?;
    // Zero or several supplied properties is a configuration error, reported
    // before any table query runs.
    let anchor = GasAnchor::from_options(t, h, pr, u, vr)?;
    let state = GasState::resolve(&table, anchor, "State")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&gas_state_json(&state))?);
    } else {
        println!("{}", state.summary());
    }
    Ok(())
}

fn gas_state_json(state: &GasState) -> serde_json::Value {
    json!({
        "label": state.label(),
        "temperature_k": state.temperature().value,
        "pressure_pa": state.pressure.map(|p| p.value),
        "volume_m3": state.volume.map(|v| v.value),
        "enthalpy_kj_kg": state.enthalpy(),
        "internal_energy_kj_kg": state.internal_energy(),
        "relative_pressure": state.relative_pressure(),
        "relative_volume": state.relative_volume(),
    })
}

fn vapor_state_json(state: &VaporState) -> serde_json::Value {
    json!({
        "label": state.label(),
        "temperature_k": state.temperature().value,
        "pressure_pa": state.pressure.value,
        "enthalpy_kj_kg": state.enthalpy(),
        "entropy_kj_kg_k": state.entropy(),
        "specific_volume_m3_kg": state.specific_volume(),
        "quality": state.quality(),
    })
}

fn otto_json(solution: &OttoSolution) -> Result<serde_json::Value, serde_json::Error> {
    Ok(json!({
        "name": solution.name(),
        "metrics": serde_json::to_value(solution.metrics())?,
        "states": solution.states().map(gas_state_json),
        "pv_points": solution.pv_points(),
    }))
}

fn rankine_json(solution: &RankineSolution) -> Result<serde_json::Value, serde_json::Error> {
    Ok(json!({
        "name": solution.name(),
        "metrics": serde_json::to_value(solution.metrics())?,
        "states": solution.states().map(vapor_state_json),
        "ideal_turbine_exit": vapor_state_json(solution.turbine_exit_ideal()),
        "ts_points": solution.ts_points(),
    }))
}
