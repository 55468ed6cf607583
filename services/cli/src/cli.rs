use crate::score::{run_explain, run_score};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use team_fit::config::AppConfig;
use team_fit::error::AppError;
use team_fit::scoring::ZeroGapPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "team-fit",
    about = "Score job applicants against the attribute profile of an existing team",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every applicant in a roster file (default command)
    Score(ScoreArgs),
    /// Print the scoring configuration that a run would use
    Explain(ScoringOverrides),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Roster JSON with "team" and "applicants" arrays
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Destination for the scored applicants document
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Skip the stage-by-stage breakdown on stdout
    #[arg(long)]
    pub(crate) quiet: bool,
    #[command(flatten)]
    pub(crate) overrides: ScoringOverrides,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoringOverrides {
    /// Divisor applied to raw ratings before scoring
    #[arg(long)]
    pub(crate) divisor: Option<f64>,
    /// Weight of the fit score in the composite
    #[arg(long)]
    pub(crate) fit_weight: Option<f64>,
    /// Weight of the gap-filler score in the composite
    #[arg(long)]
    pub(crate) gap_weight: Option<f64>,
    /// What to do when the team has no gap on any attribute ("fail" or "zero")
    #[arg(long)]
    pub(crate) zero_gap_policy: Option<ZeroGapPolicy>,
}

impl ScoringOverrides {
    pub(crate) fn apply(self, config: &mut AppConfig) {
        if let Some(divisor) = self.divisor {
            config.scoring.normalization_divisor = divisor;
        }
        if let Some(weight) = self.fit_weight {
            config.scoring.fit_weight = weight;
        }
        if let Some(weight) = self.gap_weight {
            config.scoring.gap_weight = weight;
        }
        if let Some(policy) = self.zero_gap_policy {
            config.scoring.zero_gap_policy = policy;
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Score(ScoreArgs::default()));

    let config = AppConfig::load()?;
    match command {
        Command::Score(args) => run_score(config, args),
        Command::Explain(overrides) => run_explain(config, overrides),
    }
}
