pub mod allocate;
pub mod gain;
pub mod gyms;
pub mod rank;
pub mod train;

use std::path::{Path, PathBuf};

use clap::Args;
use gym_core::{GymRegistry, Stat, StatMap, TrainingInput, TrainingProfile};
use gym_engine::{EngineConfig, GainMode, TrainingEngine};
use serde::Serialize;

/// Engine, gym table, and output settings shared by every command.
pub struct Context {
    pub engine: TrainingEngine,
    pub registry: GymRegistry,
    pub json: bool,
}

impl Context {
    /// Build the context from the optional config and gym table files.
    pub fn load(config: Option<&Path>, gyms: Option<&Path>, json: bool) -> Result<Self, String> {
        let config = match config {
            Some(path) => EngineConfig::from_json(&read_file(path)?).map_err(|e| e.to_string())?,
            None => EngineConfig::default(),
        };
        let engine = TrainingEngine::new(config).map_err(|e| e.to_string())?;

        let registry = match gyms {
            Some(path) => GymRegistry::from_json(&read_file(path)?).map_err(|e| e.to_string())?,
            None => GymRegistry::builtin(),
        };

        tracing::debug!(gyms = registry.len(), "context loaded");
        Ok(Self {
            engine,
            registry,
            json,
        })
    }
}

/// Which stat to train and its current value.
#[derive(Args)]
pub struct StatArgs {
    /// Stat to train: strength, defense, speed, dexterity (or str, def, spd, dex)
    #[arg(short, long)]
    pub stat: String,

    /// Current value of the stat (default: taken from the profile)
    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<f64>,
}

impl StatArgs {
    fn stat(&self) -> Result<Stat, String> {
        self.stat.parse().map_err(|e: gym_core::GymError| e.to_string())
    }
}

/// The trainer's situation: profile file plus per-field overrides.
#[derive(Args)]
pub struct TrainerArgs {
    /// Saved training profile (JSON) to start from
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Gym name
    #[arg(short, long)]
    pub gym: Option<String>,

    /// Current happiness
    #[arg(long, allow_hyphen_values = true)]
    pub happy: Option<f64>,

    /// Available energy
    #[arg(short, long, allow_hyphen_values = true)]
    pub energy: Option<f64>,

    /// Manual bonus %: one number for all stats, or "spd=4,str=2"
    #[arg(long)]
    pub manual: Option<String>,

    /// Steadfast bonus %: one number for all stats, or "spd=7"
    #[arg(long)]
    pub steadfast: Option<String>,
}

impl TrainerArgs {
    /// The profile file (or an empty profile) with command-line overrides applied.
    pub fn profile(&self) -> Result<TrainingProfile, String> {
        let mut profile = match &self.profile {
            Some(path) => TrainingProfile::from_json(&read_file(path)?).map_err(|e| e.to_string())?,
            None => TrainingProfile::default(),
        };

        if let Some(gym) = &self.gym {
            profile.gym = Some(gym.clone());
        }
        if let Some(happy) = self.happy {
            profile.happiness = happy;
        }
        if let Some(energy) = self.energy {
            profile.energy = energy;
        }
        if let Some(spec) = &self.manual {
            profile.bonuses.manual = parse_stat_values(spec)?;
        }
        if let Some(spec) = &self.steadfast {
            profile.bonuses.steadfast = parse_stat_values(spec)?;
        }
        Ok(profile)
    }
}

/// Resolve the training input for a single-stat command.
fn training_input(
    ctx: &Context,
    stat_args: &StatArgs,
    trainer: &TrainerArgs,
) -> Result<TrainingInput, String> {
    let stat = stat_args.stat()?;
    let mut profile = trainer.profile()?;
    if let Some(value) = stat_args.value {
        profile.stats[stat] = value;
    }
    profile
        .training_input(stat, &ctx.registry)
        .map_err(|e| e.to_string())
}

/// Parse per-stat numbers.
///
/// Accepts a single number (applied to every stat), four comma-separated
/// numbers in str,def,spd,dex order, or `stat=value` pairs.
pub fn parse_stat_values(spec: &str) -> Result<StatMap<f64>, String> {
    let spec = spec.trim();
    if let Ok(value) = spec.parse::<f64>() {
        return Ok(StatMap::splat(value));
    }

    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.iter().all(|p| !p.contains('=')) {
        if parts.len() != 4 {
            return Err(format!(
                "expected 4 values (str,def,spd,dex), got {} in '{spec}'",
                parts.len()
            ));
        }
        let mut values = StatMap::splat(0.0);
        for (stat, part) in Stat::ALL.into_iter().zip(&parts) {
            values[stat] = parse_number(part)?;
        }
        return Ok(values);
    }

    let mut values = StatMap::splat(0.0);
    for part in parts {
        let Some((key, value)) = part.split_once('=') else {
            return Err(format!("expected stat=value, got '{part}'"));
        };
        let stat: Stat = key.parse().map_err(|e: gym_core::GymError| e.to_string())?;
        values[stat] = parse_number(value)?;
    }
    Ok(values)
}

fn parse_number(text: &str) -> Result<f64, String> {
    text.trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", text.trim()))
}

/// Dynamic unless `--static` was given.
pub fn mode(fixed: bool) -> GainMode {
    if fixed { GainMode::Static } else { GainMode::Dynamic }
}

/// Print any serializable result as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

/// Two decimals with thousands separators: `1054117.9158` -> `1,054,117.92`.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}
