use crate::api::records::{ApiRecord, RawGreenSpace};
use crate::district;
use crate::model::{CoolSpot, Coordinates, PriceRange, SpotType};
use crate::transform::PARIS_CENTER;

const SWIMMING_KEYWORDS: &[&str] = &[
    "piscine",
    "aquatique",
    "aquatic",
    "natation",
    "swimming",
    "baignade",
];

const WATER_KEYWORDS: &[&str] = &["fontaine", "fountain", "bassin", "basin"];

/// Maps an `espaces_verts` record to a CoolSpot. Green spaces are free,
/// always open and shaded; a handful of them are actually swimming venues,
/// detected from the name and category text.
pub fn transform_green_space(record: &ApiRecord<RawGreenSpace>) -> CoolSpot {
    let raw = &record.fields;

    let name = if raw.nom_ev.trim().is_empty() {
        "Green space".to_string()
    } else {
        raw.nom_ev.clone()
    };
    let description = format!("{} - {}", raw.type_ev, raw.categorie);
    let full_text = format!("{} {}", name, description).to_lowercase();

    let spot_type = if SWIMMING_KEYWORDS.iter().any(|kw| full_text.contains(kw)) {
        SpotType::Pool
    } else {
        SpotType::Park
    };

    let features: Vec<String> = if spot_type == SpotType::Pool {
        vec!["Swimming pool", "Green space", "Water activities"]
    } else {
        vec!["Green space", "Nature", "Quiet"]
    }
    .into_iter()
    .map(String::from)
    .collect();

    let has_water =
        spot_type == SpotType::Pool || WATER_KEYWORDS.iter().any(|kw| full_text.contains(kw));

    let number = raw
        .adresse_numero
        .map(|n| n.to_string())
        .unwrap_or_default();
    let address = format!(
        "{} {}, {}",
        number, raw.adresse_libellevoie, raw.adresse_codepostal
    )
    .trim()
    .to_string();

    // The dataset delivers geom_x_y as-is; the pair is passed through in
    // source order ([0] -> lat, [1] -> lng) and never reordered here.
    let coordinates = match raw.geom_x_y {
        Some([a, b]) => Coordinates { lat: a, lng: b },
        None => PARIS_CENTER,
    };

    CoolSpot {
        id: record.recordid.clone(),
        name,
        spot_type,
        arrondissement: district::from_postal_code(&raw.adresse_codepostal),
        address,
        description,
        price_range: PriceRange::Free,
        is_open: true,
        opening_hours: "Varies by season".to_string(),
        rating: 4.0,
        features,
        accessibility: true,
        has_shade: true,
        has_water,
        coordinates,
    }
}
