// Arrondissement resolution from the two address shapes the datasets use.
use std::sync::LazyLock;

use regex::Regex;

use crate::model::Arrondissement;

// Commune strings look like "PARIS 15EME ARRONDISSEMENT".
static COMMUNE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*EME").unwrap());

const PARIS_POSTAL_PREFIX: &str = "75";

/// Resolves a 5-digit postal code ("75001".."75020") to an arrondissement.
/// Codes outside Paris, or malformed ones, default to the 1st.
pub fn from_postal_code(postal_code: &str) -> Arrondissement {
    let code = postal_code.trim();
    if !code.starts_with(PARIS_POSTAL_PREFIX) || code.len() < 2 {
        return Arrondissement::FIRST;
    }

    code.get(code.len() - 2..)
        .and_then(|suffix| suffix.parse::<u32>().ok())
        .map(Arrondissement::from_number)
        .unwrap_or(Arrondissement::FIRST)
}

/// Resolves a free-text commune string ("PARIS 4EME") to an arrondissement.
/// No recognizable pattern defaults to the 1st.
pub fn from_commune(commune: &str) -> Arrondissement {
    COMMUNE_RE
        .captures(commune)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .map(Arrondissement::from_number)
        .unwrap_or(Arrondissement::FIRST)
}
