use std::io::{self, Write};
use team_fit::scoring::{Attribute, ScoringOutcome};

/// Stage-by-stage breakdown of a scoring run, three decimals throughout.
pub(crate) fn render_outcome<W: Write>(out: &mut W, outcome: &ScoringOutcome) -> io::Result<()> {
    writeln!(out, "Team centroid")?;
    for (attribute, value) in outcome.centroid.iter() {
        writeln!(out, "- {}: {:.3}", attribute.label(), value)?;
    }

    writeln!(out, "\nDistance from centroid")?;
    for applicant in &outcome.applicants {
        writeln!(
            out,
            "- {}: distance {:.3}, fit score {:.3}",
            applicant.name, applicant.distance, applicant.fit_score
        )?;
    }

    let gaps: Vec<String> = Attribute::ALL
        .iter()
        .map(|&attribute| {
            format!(
                "{} {:.3}",
                attribute.label(),
                outcome.gap_vector.get(attribute)
            )
        })
        .collect();
    writeln!(out, "\nGap vector: {}", gaps.join(", "))?;
    writeln!(out, "Total gap: {:.3}", outcome.total_gap)?;

    writeln!(out, "\nGap filling")?;
    for applicant in &outcome.applicants {
        writeln!(
            out,
            "- {}: contribution {:.3}, gap score {:.3}",
            applicant.name, applicant.contribution, applicant.gap_filler_score
        )?;
    }

    writeln!(out, "\nApplicant scores")?;
    if outcome.applicants.is_empty() {
        writeln!(out, "- none")?;
    }
    for applicant in &outcome.applicants {
        writeln!(out, "- {}: {:.3}", applicant.name, applicant.score)?;
    }

    Ok(())
}
