//! Command line front end.
//!
//! One subcommand per calculator: pace/watts conversion, time for a
//! distance, distance for a time, required effort, and start group.

use std::path::Path;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use skiergcalc::metrics::power;
use skiergcalc::metrics::start_group::{
    classify_athlete, ClassificationResult, ExperienceTier, START_GROUP_THRESHOLDS,
};
use skiergcalc::metrics::MetricsError;
use skiergcalc::storage::config::{load_config_from, save_config_to, AppConfig};
use skiergcalc::timing::{
    format_time, parse_minutes_seconds, parse_time, TimeParseError, MIN_SEC_FORMAT_HINT,
    TIME_FORMAT_HINT,
};

#[derive(Debug, Parser)]
#[command(
    name = "skiergcalc",
    version,
    about = "Ski-ergometer power, pace and start group calculator",
    long_about = "Converts between pace, watts, time and distance using the Concept2 power formula, \
                  and seeds athletes into start groups from their 5000m time."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Decimal places for formatted times (overrides config)
    #[arg(long, global = true)]
    pub decimals: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a pace per 500m to watts
    Watts {
        /// Pace per 500m, e.g. 1:57.0 or 117
        pace: String,
    },

    /// Convert watts to a pace per 500m
    Pace {
        /// Power in watts
        watts: f64,
    },

    /// Time needed to cover a distance
    Time {
        /// Distance in meters
        distance: f64,
        #[command(flatten)]
        effort: EffortArgs,
    },

    /// Distance covered in a given time
    Distance {
        /// Time, e.g. 20:00 or 1:00:00
        time: String,
        #[command(flatten)]
        effort: EffortArgs,
    },

    /// Watts and pace required to cover a distance in a given time
    Required {
        /// Distance in meters
        distance: f64,
        /// Target time, e.g. 19:30
        time: String,
    },

    /// Start group from a 5000m time and body weight
    StartGroup {
        /// 5000m time as mm:ss.d, e.g. 19:30.0
        time: String,
        /// Body weight in kg (defaults to the saved profile)
        #[arg(long)]
        weight: Option<f64>,
        /// Experience tier: liten, okej or stor (defaults to the saved profile)
        #[arg(long)]
        tier: Option<ExperienceTier>,
    },

    /// Print the start group threshold table
    Groups {
        /// Only show thresholds for this tier
        #[arg(long)]
        tier: Option<ExperienceTier>,
    },

    /// Show or update the saved athlete profile
    Profile {
        /// Body weight in kg
        #[arg(long)]
        weight: Option<f64>,
        /// Experience tier: liten, okej or stor
        #[arg(long)]
        tier: Option<ExperienceTier>,
    },
}

/// Constant effort given either as power or as pace.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct EffortArgs {
    /// Power in watts
    #[arg(long)]
    pub watts: Option<f64>,
    /// Pace per 500m, e.g. 1:57.0
    #[arg(long)]
    pub pace: Option<String>,
}

/// Input the calculators cannot work with.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{source}. {hint}")]
    Time {
        #[source]
        source: TimeParseError,
        hint: &'static str,
    },

    #[error("Invalid {0}: must be a positive number")]
    NonPositive(&'static str),

    #[error("No weight given and none saved in the profile (use --weight)")]
    MissingWeight,

    #[error("Invalid weight: {0}")]
    Weight(&'static str),

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

#[derive(Debug, Serialize)]
struct WattsReport {
    pace_secs: f64,
    watts: f64,
}

#[derive(Debug, Serialize)]
struct TimeReport {
    distance_m: f64,
    pace_secs: f64,
    time_secs: f64,
}

#[derive(Debug, Serialize)]
struct RequiredReport {
    distance_m: f64,
    time_secs: f64,
    watts: f64,
    pace_secs: f64,
}

#[derive(Debug, Serialize)]
struct ThresholdRow {
    group: &'static str,
    tier: ExperienceTier,
    watts_per_kg: f64,
}

/// Run a parsed command against the config stored at `config_path`.
pub fn run(cli: Cli, config_path: &Path) -> anyhow::Result<()> {
    // Only the profile command rewrites the file, so only it must see a valid one
    let mut config = match load_config_from(config_path) {
        Ok(config) => config,
        Err(err) if !matches!(cli.command, Command::Profile { .. }) => {
            tracing::warn!(
                "Ignoring unreadable config {}: {}",
                config_path.display(),
                err
            );
            AppConfig::default()
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("failed to load config from {}", config_path.display())))
        }
    };

    let json = cli.json || config.display.json;
    let decimals = cli.decimals.unwrap_or(config.display.decimals);

    let output = match cli.command {
        Command::Watts { pace } => {
            let pace_secs = positive("pace", parse_flexible(&pace)?)?;
            let report = WattsReport {
                pace_secs,
                watts: power::pace_to_watts(pace_secs),
            };
            render(json, &report, || format!("{:.0} W", report.watts))?
        }
        Command::Pace { watts } => {
            let watts = positive("watts", watts)?;
            let report = WattsReport {
                pace_secs: power::watts_to_pace(watts),
                watts,
            };
            render(json, &report, || {
                format!("{} /500m", format_time(report.pace_secs, decimals))
            })?
        }
        Command::Time { distance, effort } => {
            let distance_m = positive("distance", distance)?;
            let effort = Effort::from_args(&effort)?;
            let time_secs = match effort {
                Effort::Watts(watts) => power::time_from_watts(distance_m, watts),
                Effort::Pace(pace_secs) => power::time_from_pace(distance_m, pace_secs),
            };
            let report = TimeReport {
                distance_m,
                pace_secs: effort.pace_secs(),
                time_secs,
            };
            render(json, &report, || {
                format!("Time: {}", format_time(report.time_secs, decimals))
            })?
        }
        Command::Distance { time, effort } => {
            let time_secs = positive("time", parse_flexible(&time)?)?;
            let effort = Effort::from_args(&effort)?;
            let distance_m = match effort {
                Effort::Watts(watts) => power::distance_from_watts(time_secs, watts),
                Effort::Pace(pace_secs) => power::distance_from_pace(time_secs, pace_secs),
            };
            let report = TimeReport {
                distance_m,
                pace_secs: effort.pace_secs(),
                time_secs,
            };
            render(json, &report, || format!("Distance: {:.0} m", report.distance_m))?
        }
        Command::Required { distance, time } => {
            let distance_m = positive("distance", distance)?;
            let time_secs = positive("time", parse_flexible(&time)?)?;
            let report = RequiredReport {
                distance_m,
                time_secs,
                watts: power::required_watts(distance_m, time_secs),
                pace_secs: power::required_pace(distance_m, time_secs),
            };
            render(json, &report, || {
                format!(
                    "Watts: {:.0} W\nPace: {} /500m",
                    report.watts,
                    format_time(report.pace_secs, decimals)
                )
            })?
        }
        Command::StartGroup { time, weight, tier } => {
            let time_secs = positive("time", parse_race_time(&time)?)?;
            let weight_kg = weight
                .or(config.athlete.weight_kg)
                .ok_or(InputError::MissingWeight)?;
            let tier = tier.unwrap_or(config.athlete.tier);
            let result = classify_athlete(weight_kg, time_secs, tier).map_err(InputError::from)?;
            render(json, &result, || describe_classification(&result, decimals))?
        }
        Command::Groups { tier } => {
            let tiers = match tier {
                Some(tier) => vec![tier],
                None => ExperienceTier::ALL.to_vec(),
            };
            let rows: Vec<ThresholdRow> = START_GROUP_THRESHOLDS
                .iter()
                .flat_map(|row| {
                    tiers.iter().map(move |&tier| ThresholdRow {
                        group: row.group.label(),
                        tier,
                        watts_per_kg: row.thresholds.for_tier(tier),
                    })
                })
                .collect();
            render(json, &rows, || describe_thresholds(&tiers))?
        }
        Command::Profile { weight, tier } => {
            if weight.is_some() || tier.is_some() {
                if let Some(weight) = weight {
                    config
                        .athlete
                        .set_weight(weight)
                        .map_err(InputError::Weight)?;
                }
                if let Some(tier) = tier {
                    config.athlete.tier = tier;
                }
                save_config_to(&config, config_path).with_context(|| {
                    format!("failed to save config to {}", config_path.display())
                })?;
            }
            render(json, &config.athlete, || describe_profile(&config))?
        }
    };

    println!("{}", output);
    Ok(())
}

fn render<T: Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text())
    }
}

fn parse_flexible(input: &str) -> Result<f64, InputError> {
    parse_time(input).map_err(|source| InputError::Time {
        source,
        hint: TIME_FORMAT_HINT,
    })
}

fn parse_race_time(input: &str) -> Result<f64, InputError> {
    parse_minutes_seconds(input).map_err(|source| InputError::Time {
        source,
        hint: MIN_SEC_FORMAT_HINT,
    })
}

fn positive(name: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NonPositive(name))
    }
}

/// Validated constant effort.
#[derive(Debug, Clone, Copy)]
enum Effort {
    Watts(f64),
    Pace(f64),
}

impl Effort {
    fn from_args(args: &EffortArgs) -> Result<Self, InputError> {
        match (args.watts, args.pace.as_deref()) {
            (Some(watts), _) => Ok(Effort::Watts(positive("watts", watts)?)),
            (None, Some(pace)) => Ok(Effort::Pace(positive("pace", parse_flexible(pace)?)?)),
            (None, None) => Err(InputError::NonPositive("watts")),
        }
    }

    fn pace_secs(&self) -> f64 {
        match *self {
            Effort::Watts(watts) => power::watts_to_pace(watts),
            Effort::Pace(pace_secs) => pace_secs,
        }
    }
}

fn describe_classification(result: &ClassificationResult, decimals: u32) -> String {
    let mut lines = vec![
        format!("Start group: {}", result.group),
        format!("Watts: {} W", result.watts),
        format!("W/kg: {:.2}", result.watts_per_kg),
        format!("Pace: {} /500m", format_time(result.pace_secs, decimals)),
        format!("Tier: {}", result.tier),
    ];
    if let Some(position) = result.position {
        lines.push(format!("Position in group: {:.0}%", position * 100.0));
    }
    lines.join("\n")
}

fn describe_thresholds(tiers: &[ExperienceTier]) -> String {
    let mut lines = vec![format!(
        "{:<6}{}",
        "Group",
        tiers
            .iter()
            .map(|tier| format!("{:>8}", tier.name()))
            .collect::<String>()
    )];
    for row in START_GROUP_THRESHOLDS {
        let values: String = tiers
            .iter()
            .map(|&tier| format!("{:>8.2}", row.thresholds.for_tier(tier)))
            .collect();
        lines.push(format!("{:<6}{}", row.group.label(), values));
    }
    lines.join("\n")
}

fn describe_profile(config: &AppConfig) -> String {
    let weight = config
        .athlete
        .weight_kg
        .map(|w| format!("{:.1} kg", w))
        .unwrap_or_else(|| "not set".to_string());
    format!("Weight: {}\nTier: {}", weight, config.athlete.tier)
}
