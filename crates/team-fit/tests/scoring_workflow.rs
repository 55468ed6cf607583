use std::path::PathBuf;

use team_fit::roster::{write_scored_applicants, RosterError, RosterImporter};
use team_fit::scoring::{ScoringConfig, ScoringEngine, ScoringError, ZeroGapPolicy};

const ROSTER: &str = r#"{
  "team": [
    {"name": "Eddie", "attributes": {"intelligence": 1, "strength": 5, "endurance": 3, "spicyFoodTolerance": 1}},
    {"name": "Will", "attributes": {"intelligence": 9, "strength": 4, "endurance": 1, "spicyFoodTolerance": 6}},
    {"name": "Mike", "attributes": {"intelligence": 3, "strength": 2, "endurance": 9, "spicyFoodTolerance": 4}}
  ],
  "applicants": [
    {"name": "John", "attributes": {"intelligence": 4, "strength": 5, "endurance": 2, "spicyFoodTolerance": 1}},
    {"name": "Jane", "attributes": {"intelligence": 7, "strength": 4, "endurance": 3, "spicyFoodTolerance": 8}},
    {"name": "Joe", "attributes": {"intelligence": 1, "strength": 1, "endurance": 1, "spicyFoodTolerance": 1}}
  ]
}"#;

fn scratch_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "team-fit-{label}-{}.json",
        std::process::id()
    ))
}

#[test]
fn roster_round_trips_through_files() {
    let input = scratch_path("input");
    let output = scratch_path("output");
    std::fs::write(&input, ROSTER).expect("write roster fixture");

    let roster = RosterImporter::from_path(&input).expect("roster parses");
    let engine = ScoringEngine::new(ScoringConfig::default()).expect("default config");
    let outcome = engine
        .score(&roster.team, &roster.applicants)
        .expect("roster scores");

    write_scored_applicants(&output, &outcome.scored_applicants()).expect("scores written");

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).expect("read output"))
            .expect("output is JSON");
    let entries = written["scoredApplicants"]
        .as_array()
        .expect("scoredApplicants array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["name"], "John");
    assert_eq!(entries[1]["name"], "Jane");
    assert_eq!(entries[2]["name"], "Joe");
    for entry in entries {
        let score = entry["score"].as_f64().expect("numeric score");
        assert!(score > 0.0 && score < 1.0, "unexpected score {score}");
    }

    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();
}

#[test]
fn jane_outranks_joe_for_the_sample_team() {
    let roster = RosterImporter::from_json(ROSTER).expect("roster parses");
    let outcome = ScoringEngine::default()
        .score(&roster.team, &roster.applicants)
        .expect("roster scores");

    let jane = outcome.applicant("Jane").expect("jane scored");
    let joe = outcome.applicant("Joe").expect("joe scored");
    assert!(jane.score > joe.score);
    assert!(jane.contribution > joe.contribution);
}

#[test]
fn missing_input_surfaces_io_error() {
    let missing = scratch_path("does-not-exist");
    match RosterImporter::from_path(&missing) {
        Err(RosterError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn empty_team_is_fatal_even_when_json_is_valid() {
    let roster = RosterImporter::from_json(r#"{"team": [], "applicants": []}"#)
        .expect("empty roster parses");
    let result = ScoringEngine::default().score(&roster.team, &roster.applicants);
    assert_eq!(result, Err(ScoringError::EmptyTeam));
}

#[test]
fn perfect_team_respects_zero_gap_policy() {
    let raw = r#"{
        "team": [{"name": "Eleven", "attributes": {"intelligence": 10, "strength": 10, "endurance": 10, "spicyFoodTolerance": 10}}],
        "applicants": [{"name": "Kali", "attributes": {"intelligence": 5, "strength": 5, "endurance": 5, "spicyFoodTolerance": 5}}]
    }"#;
    let roster = RosterImporter::from_json(raw).expect("roster parses");

    let strict = ScoringEngine::default().score(&roster.team, &roster.applicants);
    assert_eq!(strict, Err(ScoringError::ZeroTotalGap));

    let lenient = ScoringEngine::new(ScoringConfig {
        zero_gap_policy: ZeroGapPolicy::TreatAsZero,
        ..ScoringConfig::default()
    })
    .expect("lenient config");
    let outcome = lenient
        .score(&roster.team, &roster.applicants)
        .expect("lenient scoring succeeds");
    let kali = &outcome.applicants[0];
    assert_eq!(kali.distance, 1.0);
    assert_eq!(kali.fit_score, 0.5);
    assert_eq!(kali.score, 0.8 * 0.5);
}

#[test]
fn overflowing_ratings_never_reach_the_output() {
    let raw = r#"{
        "team": [{"name": "Joyce", "attributes": {"intelligence": 5, "strength": 5, "endurance": 5, "spicyFoodTolerance": 5}}],
        "applicants": [{"name": "Big", "attributes": {"intelligence": 1e308, "strength": 1e308, "endurance": 5, "spicyFoodTolerance": 5}}]
    }"#;
    let roster = RosterImporter::from_json(raw).expect("finite ratings parse");

    let err = ScoringEngine::default()
        .score(&roster.team, &roster.applicants)
        .expect_err("overflowing score is fatal");
    assert!(matches!(
        err,
        ScoringError::NonFiniteScore { ref applicant } if applicant == "Big"
    ));
    assert!(err.to_string().contains("Big"));
}
