// Price bucket extraction from the activity dataset's free-text price fields.
use std::sync::LazyLock;

use regex::Regex;

use crate::model::PriceRange;
use crate::text::clean_html;

// "19,90 €", "15.90€", "20 euros"
static EURO_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:€|euros?)").unwrap());
// "De 5 à 35 euros" / "from 5 to 35 euros"
static RANGE_FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:de|from)\s+(\d+(?:[.,]\d+)?)\s+(?:à|to)\s+(\d+(?:[.,]\d+)?)\s+euros?")
        .unwrap()
});
// "5 à 35 euros" / "5 to 35 euros"
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s+(?:à|to)\s+(\d+(?:[.,]\d+)?)\s+euros?").unwrap()
});

/// Maps a price-type label plus an optional free-text detail (possibly HTML)
/// to a price bucket. A label that says free wins outright; otherwise every
/// amount mentioned in the detail is collected and the maximum decides the
/// bucket, so tiered pricing is never under-classified.
pub fn parse_price(price_type: &str, price_detail: &str) -> PriceRange {
    let label = price_type.to_lowercase();
    if price_type.trim().is_empty() || label.contains("gratuit") || label.contains("free") {
        return PriceRange::Free;
    }

    let says_paid = label.contains("payant") || label.contains("paid");
    if price_detail.trim().is_empty() {
        return if says_paid {
            PriceRange::FiveToFifteen
        } else {
            PriceRange::Free
        };
    }

    let detail = clean_html(price_detail);
    let amounts = extract_amounts(&detail);

    let Some(max) = amounts.iter().copied().reduce(f64::max) else {
        return if says_paid {
            PriceRange::FiveToFifteen
        } else {
            PriceRange::Free
        };
    };

    bucket_for(max)
}

/// All euro amounts mentioned in a plain-text price description.
pub fn extract_amounts(text: &str) -> Vec<f64> {
    let mut amounts = Vec::new();

    for caps in EURO_AMOUNT_RE.captures_iter(text) {
        push_amount(&mut amounts, &caps[1]);
    }
    for caps in RANGE_FROM_RE.captures_iter(text) {
        push_amount(&mut amounts, &caps[1]);
        push_amount(&mut amounts, &caps[2]);
    }
    for caps in RANGE_RE.captures_iter(text) {
        push_amount(&mut amounts, &caps[1]);
        push_amount(&mut amounts, &caps[2]);
    }

    amounts
}

fn push_amount(amounts: &mut Vec<f64>, raw: &str) {
    // Comma is the decimal separator in the source data.
    if let Ok(value) = raw.replace(',', ".").parse::<f64>() {
        if value > 0.0 {
            amounts.push(value);
        }
    }
}

fn bucket_for(max: f64) -> PriceRange {
    if max < 5.0 {
        PriceRange::Under5
    } else if max <= 15.0 {
        PriceRange::FiveToFifteen
    } else if max <= 30.0 {
        PriceRange::FifteenToThirty
    } else {
        PriceRange::Over30
    }
}
