use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Female,
    Male,
    Unknown,
}

/// Given names matched exactly (case-insensitive) before any suffix rule.
/// The exact list wins over suffixes so names like "Luca" classify male even
/// though "-a" leans female.
const FEMALE_NAMES: &[&str] = &[
    "anna", "emma", "mia", "sofia", "lea", "marie", "laura", "lena", "julia", "sarah", "hannah",
    "clara", "lisa", "nina", "eva", "ella", "ida", "frieda", "charlotte", "amelie", "johanna",
    "katharina", "melanie", "nicole", "sandra", "stefanie", "vanessa", "jasmin", "michelle",
    "doris", "heike", "ingrid", "karin", "monika", "petra", "renate", "sabine", "ursula",
];

const MALE_NAMES: &[&str] = &[
    "noah", "leon", "paul", "ben", "elias", "felix", "jonas", "luca", "luis", "max", "maximilian",
    "moritz", "tim", "tom", "jan", "lukas", "david", "julian", "niklas", "simon", "fabian",
    "florian", "tobias", "sebastian", "alexander", "andreas", "christian", "daniel", "dennis",
    "kevin", "marcel", "markus", "martin", "michael", "patrick", "stefan", "thomas", "wolfgang",
    "andrea",
];

/// Name endings checked longest-first when the exact lists miss.
const FEMALE_SUFFIXES: &[&str] = &["ine", "ette", "elle", "ika", "ia", "ah", "a", "e"];
const MALE_SUFFIXES: &[&str] = &["ius", "os", "us", "o", "n", "k", "l", "m", "r", "s", "t"];

/// Classifies a given name. First token only, so "Anna Lena" classifies by
/// "Anna". Pure string lookup; no locale handling beyond ASCII lowercasing.
pub fn classify_first_name(name: &str) -> Gender {
    let first = name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if first.is_empty() {
        return Gender::Unknown;
    }

    if FEMALE_NAMES.contains(&first.as_str()) {
        return Gender::Female;
    }
    if MALE_NAMES.contains(&first.as_str()) {
        return Gender::Male;
    }

    let female_hit = longest_suffix(&first, FEMALE_SUFFIXES);
    let male_hit = longest_suffix(&first, MALE_SUFFIXES);
    match (female_hit, male_hit) {
        (Some(female), Some(male)) if female >= male => Gender::Female,
        (Some(_), Some(_)) => Gender::Male,
        (Some(_), None) => Gender::Female,
        (None, Some(_)) => Gender::Male,
        (None, None) => Gender::Unknown,
    }
}

fn longest_suffix(name: &str, suffixes: &[&str]) -> Option<usize> {
    suffixes
        .iter()
        .filter(|suffix| name.len() > suffix.len() && name.ends_with(*suffix))
        .map(|suffix| suffix.len())
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_classify_by_exact_list() {
        assert_eq!(classify_first_name("Anna"), Gender::Female);
        assert_eq!(classify_first_name("noah"), Gender::Male);
        // exact list beats the "-a" suffix lean
        assert_eq!(classify_first_name("Luca"), Gender::Male);
        assert_eq!(classify_first_name("Andrea"), Gender::Male);
    }

    #[test]
    fn unknown_names_fall_back_to_suffix_rules() {
        assert_eq!(classify_first_name("Svetlana"), Gender::Female);
        assert_eq!(classify_first_name("Henrik"), Gender::Male);
        assert_eq!(classify_first_name("Josephine"), Gender::Female);
    }

    #[test]
    fn only_the_first_token_is_classified() {
        assert_eq!(classify_first_name("Anna Lena Schmidt"), Gender::Female);
    }

    #[test]
    fn empty_or_unmatchable_input_is_unknown() {
        assert_eq!(classify_first_name(""), Gender::Unknown);
        assert_eq!(classify_first_name("   "), Gender::Unknown);
        assert_eq!(classify_first_name("Xy"), Gender::Unknown);
    }
}
