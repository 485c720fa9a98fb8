use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::fixtures;
    use crate::engine::resolve::{resolve, ResolveContext};
    use crate::types::score::ScoreMap;
    use std::collections::BTreeMap;

    #[test]
    fn json_summary_contains_ranked_entries_and_overview() {
        let catalog = fixtures::full_catalog(&["openness", "neuroticism"]);
        let declared = vec!["openness".to_string(), "neuroticism".to_string()];
        let mut scores = ScoreMap::new(&declared);
        scores.add("openness", 9).expect("declared key should add");
        scores
            .add("neuroticism", -9)
            .expect("declared key should add");
        let meta: BTreeMap<String, usize> =
            [("openness".to_string(), 3), ("neuroticism".to_string(), 3)]
                .into_iter()
                .collect();
        let context = ResolveContext {
            test_id: "big-five",
            respondent: None,
            questions_per_category: &meta,
        };
        let summary = resolve(&scores, &context, &catalog).expect("attempt should resolve");

        let rendered = to_json(&summary).expect("summary should serialize");
        assert!(rendered.contains("\"testId\": \"big-five\""));
        assert!(rendered.contains("\"primaryCategory\": \"openness\""));
        assert!(rendered.contains("\"percentage\": 100"));
        assert!(rendered.contains("\"range\": \"veryHigh\""));
        assert!(rendered.contains("\"overview\""));
    }
}
