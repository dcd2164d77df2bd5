// Heuristic category detection for activity records.
//
// The rules are an ordered chain; the first predicate that matches wins.
// Ordering matters: the library rule runs before the museum rule so that an
// exhibition hosted by a library still classifies as a library, and the pool
// rule excludes exhibition wording so an aquarium-themed art show does not
// classify as a swimming venue. Keyword lists are bilingual because the
// datasets are French.
use crate::model::SpotType;

struct Rule {
    category: SpotType,
    matches: fn(&str) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        category: SpotType::Pool,
        matches: is_pool,
    },
    Rule {
        category: SpotType::Library,
        matches: is_library,
    },
    Rule {
        category: SpotType::Museum,
        matches: is_museum,
    },
];

/// Infers the category of an activity from its title, description and lead
/// text. Always returns one of pool/library/museum/activity; park and
/// fountain are structural categories decided by the source dataset, never
/// by text.
pub fn detect_activity_type(title: &str, description: &str, lead_text: &str) -> SpotType {
    let text = format!("{} {} {}", title, description, lead_text).to_lowercase();

    for rule in RULES {
        if (rule.matches)(&text) {
            return rule.category;
        }
    }

    SpotType::Activity
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

fn mentions_exhibition(text: &str) -> bool {
    text.contains("exposition") || text.contains("exhibition")
}

fn is_pool(text: &str) -> bool {
    contains_any(
        text,
        &[
            "piscine",
            "centre aquatique",
            "aquatic center",
            "natation",
            "swimming",
            "baignade",
            "bathing",
        ],
    ) || (text.contains("aqua") && !mentions_exhibition(text))
}

fn is_library(text: &str) -> bool {
    contains_any(text, &["bibliothèque", "médiathèque", "library"])
}

fn is_museum(text: &str) -> bool {
    contains_any(text, &["musée", "museum"])
        || (mentions_exhibition(text)
            && contains_any(
                text,
                &["visite", "visit", "galerie", "gallery", "collection"],
            ))
        || contains_any(text, &["galerie d'art", "art gallery", "patrimoine", "heritage"])
}
