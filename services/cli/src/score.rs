use crate::cli::{ScoreArgs, ScoringOverrides};
use crate::report::render_outcome;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use team_fit::config::AppConfig;
use team_fit::error::AppError;
use team_fit::roster::{write_scored_applicants, RosterImporter};
use team_fit::scoring::{ScoringConfig, ScoringEngine};
use team_fit::telemetry;
use tracing::info;

pub(crate) fn run_score(mut config: AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        output,
        quiet,
        overrides,
    } = args;

    if let Some(input) = input {
        config.paths.input = input;
    }
    if let Some(output) = output {
        config.paths.output = output;
    }
    overrides.apply(&mut config);

    telemetry::init(&config.telemetry)?;

    let engine = ScoringEngine::new(config.scoring.clone())?;
    info!(
        ?config.environment,
        input = %config.paths.input.display(),
        "loading roster"
    );
    let roster = RosterImporter::from_path(&config.paths.input)?;

    let outcome = engine.score(&roster.team, &roster.applicants)?;

    if !quiet {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        render_outcome(&mut out, &outcome)?;
        out.flush()?;
    }

    let scored = outcome.scored_applicants();
    write_scored_applicants(&config.paths.output, &scored)?;
    info!(
        applicants = scored.len(),
        output = %config.paths.output.display(),
        "scored applicants written"
    );

    Ok(())
}

#[derive(Debug, Serialize)]
struct ExplainView<'a> {
    input: &'a Path,
    output: &'a Path,
    scoring: &'a ScoringConfig,
}

pub(crate) fn run_explain(
    mut config: AppConfig,
    overrides: ScoringOverrides,
) -> Result<(), AppError> {
    overrides.apply(&mut config);
    ScoringEngine::new(config.scoring.clone())?;

    let view = ExplainView {
        input: &config.paths.input,
        output: &config.paths.output,
        scoring: &config.scoring,
    };
    let rendered = serde_json::to_string_pretty(&view).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}
