//! Plasma attack simulator.
//!
//! Replays a spam attack against the momentum policies: the attacker fills
//! momentums to drive the base price up and shut out small fused accounts,
//! while the recharge policy slows the attacker's own plasma regeneration.
//! Reports how long small holders stay blocked versus how long the attacker
//! needs to recharge.

mod config;
mod simulation;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use plasma_core::constants::NetworkType;
use plasma_policy::PolicyEngine;
use tracing::{error, info};

use crate::config::{SimConfig, load_params};
use crate::simulation::{AttackReport, AttackSimulation};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NetworkArg {
    Mainnet,
    Testnet,
    Devnet,
}

impl From<NetworkArg> for NetworkType {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Mainnet => NetworkType::Mainnet,
            NetworkArg::Testnet => NetworkType::Testnet,
            NetworkArg::Devnet => NetworkType::Devnet,
        }
    }
}

/// Plasma attack simulator.
#[derive(Parser, Debug)]
#[command(
    name = "plasma-sim",
    version,
    about = "Simulate a spam attack against the Plasma momentum policies"
)]
struct Args {
    /// Built-in parameter table to simulate against
    #[arg(long, value_enum, default_value = "mainnet")]
    network: NetworkArg,

    /// JSON parameter table overriding --network
    #[arg(long)]
    params: Option<PathBuf>,

    /// Maximum number of momentums to simulate
    #[arg(long, default_value_t = SimConfig::default().rounds)]
    rounds: u64,

    /// Total fusion units held by the attacker
    #[arg(long, default_value_t = SimConfig::default().attacker_fused_units)]
    attacker_units: u64,

    /// Fusion units per attacker address
    #[arg(long, default_value_t = SimConfig::default().attacker_units_per_address)]
    units_per_address: u64,

    /// Holders below this many fusion units should be priced out
    #[arg(long, default_value_t = SimConfig::default().cutoff_fused_units)]
    cutoff_units: u64,

    /// Transactions per momentum while the attacker is admitted
    #[arg(long, default_value_t = SimConfig::default().momentum_tx_count)]
    momentum_txs: u64,

    /// Transactions in the initial frontier momentum
    #[arg(long, default_value_t = SimConfig::default().initial_tx_count)]
    initial_txs: u64,

    /// Base price of the initial frontier momentum
    #[arg(long, default_value_t = SimConfig::default().initial_base_price)]
    initial_base_price: u64,

    /// Share of the initial frontier's plasma covered by PoW, in percent
    #[arg(long, default_value_t = SimConfig::default().initial_pow_percent)]
    initial_pow_percent: u64,

    /// Difficulty per plasma of the initial frontier momentum
    #[arg(long, default_value_t = SimConfig::default().initial_difficulty_per_plasma)]
    initial_difficulty_per_plasma: u64,

    /// Fusion recharge rate of the initial frontier momentum
    #[arg(long, default_value_t = SimConfig::default().initial_fusion_recharge_rate)]
    initial_recharge_rate: u64,

    /// Seconds between momentums
    #[arg(long, default_value_t = SimConfig::default().momentum_time_secs)]
    momentum_time: u64,

    /// Print the final report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Args {
    /// Convert CLI args into a SimConfig.
    fn sim_config(&self) -> SimConfig {
        SimConfig {
            initial_tx_count: self.initial_txs,
            initial_base_price: self.initial_base_price,
            initial_pow_percent: self.initial_pow_percent,
            initial_difficulty_per_plasma: self.initial_difficulty_per_plasma,
            initial_fusion_recharge_rate: self.initial_recharge_rate,
            attacker_fused_units: self.attacker_units,
            attacker_units_per_address: self.units_per_address,
            cutoff_fused_units: self.cutoff_units,
            momentum_tx_count: self.momentum_txs,
            rounds: self.rounds,
            momentum_time_secs: self.momentum_time,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level, &args.log_format);

    if let Err(e) = run(&args) {
        error!("simulation failed: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let network = NetworkType::from(args.network);
    let params = match &args.params {
        Some(path) => load_params(path)?,
        None => network.params(),
    };
    let config = args.sim_config();

    info!("Plasma attack simulator v{}", env!("CARGO_PKG_VERSION"));
    info!(network = network.name(), custom_params = args.params.is_some(), "parameter table");
    info!(?config, "simulation config");

    let engine = PolicyEngine::try_new(params).context("invalid parameter table")?;
    let report = AttackSimulation::new(&engine, config)
        .run()
        .context("policy evaluation failed")?;

    log_report(&report);
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode report")?
        );
    }
    Ok(())
}

fn log_report(report: &AttackReport) {
    info!(
        rounds = report.rounds,
        completed = report.completed,
        filled = report.attacker_filled_momentums,
        "attack finished"
    );
    info!(
        base_price = report.final_params.base_price,
        difficulty_per_plasma = report.final_params.difficulty_per_plasma,
        fusion_recharge_rate = report.final_params.fusion_recharge_rate,
        "final params"
    );
    info!(
        "average attacker recharge rate: {} plasma/momentum",
        report.average_recharge_rate
    );
    info!("small holders blocked for {:.2} minutes", report.blocking_minutes);
    match (report.cooldown_minutes, report.bandwidth_ratio) {
        (Some(cooldown), Some(ratio)) => {
            info!("attack can be repeated in {cooldown:.2} minutes");
            info!("bandwidth ratio {ratio:.2}");
        }
        _ => info!("attacker did not exhaust its budget; no cooldown estimate"),
    }
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Pass `format = "json"` for structured JSON output. Any other value
/// defaults to human-readable text. `RUST_LOG` overrides `level_str`.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_match_default_config() {
        let args = Args::parse_from(["plasma-sim"]);
        assert_eq!(args.sim_config(), SimConfig::default());
        assert!(matches!(NetworkType::from(args.network), NetworkType::Mainnet));
    }

    #[test]
    fn args_override_config() {
        let args = Args::parse_from([
            "plasma-sim",
            "--network",
            "devnet",
            "--rounds",
            "7",
            "--cutoff-units",
            "25",
        ]);
        let cfg = args.sim_config();
        assert_eq!(cfg.rounds, 7);
        assert_eq!(cfg.initial_pow_percent, SimConfig::default().initial_pow_percent);
        assert_eq!(cfg.cutoff_fused_units, 25);
        assert_eq!(NetworkType::from(args.network), NetworkType::Devnet);
    }

    #[test]
    fn initial_frontier_flags_reach_config() {
        let args = Args::parse_from([
            "plasma-sim",
            "--initial-pow-percent",
            "35",
            "--initial-difficulty-per-plasma",
            "2500",
        ]);
        let cfg = args.sim_config();
        assert_eq!(cfg.initial_pow_percent, 35);
        assert_eq!(cfg.initial_difficulty_per_plasma, 2500);
        assert_eq!(
            SimConfig {
                initial_pow_percent: 20,
                initial_difficulty_per_plasma: 1000,
                ..cfg
            },
            SimConfig::default()
        );
    }

    #[test]
    fn run_rejects_initial_difficulty_below_floor() {
        let args = Args::parse_from(["plasma-sim", "--initial-difficulty-per-plasma", "10"]);
        assert!(run(&args).is_err());
    }

    #[test]
    fn run_with_custom_params_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&NetworkType::Testnet.params()).unwrap();
        write!(file, "{json}").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let args = Args::parse_from(["plasma-sim", "--params", &path, "--rounds", "20"]);
        assert!(run(&args).is_ok());
    }

    #[test]
    fn run_rejects_bad_params_file() {
        let args = Args::parse_from(["plasma-sim", "--params", "/nonexistent/params.json"]);
        assert!(run(&args).is_err());
    }
}
