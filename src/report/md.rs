use crate::gender::Gender;
use crate::report::ValidationReport;
use crate::types::result::ResultSummary;

pub fn summary_to_markdown(summary: &ResultSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Personality Profile — {}\n\n", summary.test_id));

    if let Some(respondent) = &summary.respondent {
        let salutation = match respondent.gender {
            Gender::Female => format!("Prepared for Ms {}.", respondent.name),
            Gender::Male => format!("Prepared for Mr {}.", respondent.name),
            Gender::Unknown => format!("Prepared for {}.", respondent.name),
        };
        output.push_str(&salutation);
        output.push_str("\n\n");
    }

    output.push_str(&summary.overview);
    output.push_str("\n\n## Dimensions\n\n");
    for entry in &summary.ranked {
        output.push_str(&format!(
            "- {}: {}% ({}) — {}: {}\n",
            entry.category,
            entry.percentage,
            entry.range.as_str(),
            entry.profile.title,
            entry.profile.short_description
        ));
    }
    output.push('\n');

    let primary = summary.primary();
    output.push_str(&format!("## Primary: {}\n\n", primary.profile.title));
    output.push_str(&primary.profile.detailed_description);
    output.push_str("\n\n");
    push_list(&mut output, "Strengths", &primary.profile.strengths);
    push_list(&mut output, "Challenges", &primary.profile.challenges);
    output.push_str(&format!(
        "Professional fit: {}\n\n",
        primary.profile.professional_suitability
    ));
    push_list(
        &mut output,
        "Development tips",
        &primary.profile.development_tips,
    );

    if let Some(secondary) = summary.secondary() {
        output.push_str(&format!("## Secondary: {}\n\n", secondary.profile.title));
        output.push_str(&secondary.profile.short_description);
        output.push_str("\n\n");
    }

    push_list(
        &mut output,
        "Combined strengths",
        &summary.combined_strengths,
    );
    push_list(&mut output, "Keywords", &summary.combined_keywords);

    output
}

pub fn validation_to_markdown(report: &ValidationReport) -> String {
    let mut output = String::new();
    output.push_str("# Content Validation\n\n");
    output.push_str(&format!("Fingerprint: {}\n\n", report.fingerprint));
    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking {
                    "blocking"
                } else {
                    "warning"
                },
                finding.title,
                finding.body
            ));
        }
    }
    output
}

fn push_list(output: &mut String, heading: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    output.push_str(&format!("{heading}:\n"));
    for entry in entries {
        output.push_str(&format!("- {entry}\n"));
    }
    output.push('\n');
}
