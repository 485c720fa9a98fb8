use crate::content::catalog::ProfileCatalog;
use crate::error::{PersonaError, Result};
use crate::gender::classify_first_name;
use crate::types::range::QualitativeRange;
use crate::types::result::{ResolvedProfile, Respondent, ResultSummary};
use crate::types::score::ScoreMap;
use std::collections::BTreeMap;

/// Theoretical per-question contribution bounds used for normalization.
const MAX_DELTA: i32 = 3;

/// Everything the resolver needs beyond the scores themselves.
pub struct ResolveContext<'a> {
    pub test_id: &'a str,
    pub respondent: Option<&'a str>,
    /// How many questions can contribute to each category; sets the
    /// theoretical range [-3q, +3q] the raw score normalizes against.
    pub questions_per_category: &'a BTreeMap<String, usize>,
}

/// Turns raw per-category totals into the ranked, narrated result. Pure and
/// deterministic; a missing catalog cell aborts the whole resolution rather
/// than substituting default text.
pub fn resolve(
    scores: &ScoreMap,
    context: &ResolveContext<'_>,
    catalog: &ProfileCatalog,
) -> Result<ResultSummary> {
    if scores.is_empty() {
        return Err(PersonaError::NoCategories(context.test_id.to_string()));
    }

    let mut ranked = Vec::with_capacity(scores.len());
    for (category, score) in scores.iter() {
        let questions = context
            .questions_per_category
            .get(category)
            .copied()
            .unwrap_or(0);
        let percentage = normalize(score, questions);
        let range = QualitativeRange::from_percentage(percentage);
        let profile = catalog.profile(category, range)?.clone();
        ranked.push(ResolvedProfile {
            category: category.to_string(),
            percentage,
            range,
            profile,
        });
    }

    // stable sort: ties keep declared category order
    ranked.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    let primary = &ranked[0];
    let secondary = ranked.get(1);
    let overview = overview_sentence(primary, secondary);
    let combined_strengths = combine(
        &primary.profile.strengths,
        secondary.map(|entry| entry.profile.strengths.as_slice()),
    );
    let combined_keywords = combine(
        &primary.profile.keywords,
        secondary.map(|entry| entry.profile.keywords.as_slice()),
    );

    Ok(ResultSummary {
        test_id: context.test_id.to_string(),
        respondent: context.respondent.map(|name| Respondent {
            name: name.to_string(),
            gender: classify_first_name(name),
        }),
        primary_category: primary.category.clone(),
        secondary_category: secondary.map(|entry| entry.category.clone()),
        overview,
        combined_strengths,
        combined_keywords,
        ranked,
    })
}

/// Linear normalization of a raw total into 0-100 against the theoretical
/// range for the category. Zero questions means the category can never move,
/// so it pins to 0 instead of dividing by zero.
pub fn normalize(score: i32, questions: usize) -> u8 {
    if questions == 0 {
        return 0;
    }
    let min = f64::from(-MAX_DELTA) * questions as f64;
    let max = f64::from(MAX_DELTA) * questions as f64;
    let percentage = ((f64::from(score) - min) / (max - min) * 100.0).round();
    percentage.clamp(0.0, 100.0) as u8
}

fn overview_sentence(primary: &ResolvedProfile, secondary: Option<&ResolvedProfile>) -> String {
    let first = primary.profile.title.to_lowercase();
    match secondary {
        Some(second) => format!(
            "Your answers point to {first} as your dominant side, complemented by {}.",
            second.profile.title.to_lowercase()
        ),
        None => format!("Your answers point to {first} as your dominant side."),
    }
}

/// First 3 entries from the primary list, then the first 2 from the
/// secondary one.
fn combine(primary: &[String], secondary: Option<&[String]>) -> Vec<String> {
    let mut combined: Vec<String> = primary.iter().take(3).cloned().collect();
    if let Some(secondary) = secondary {
        combined.extend(secondary.iter().take(2).cloned());
    }
    combined
}
