use crate::api::records::{ApiRecord, RawActivity};
use crate::classify::detect_activity_type;
use crate::district;
use crate::model::{CoolSpot, Coordinates, SpotType};
use crate::price::parse_price;
use crate::text::clean_html;
use crate::transform::PARIS_CENTER;

/// Maps a `que-faire-a-paris-` record to a CoolSpot. This is the transformer
/// that leans on the heuristics: category from the classifier, price bucket
/// from the price parser, description through the HTML sanitizer.
pub fn transform_activity(record: &ApiRecord<RawActivity>) -> CoolSpot {
    let raw = &record.fields;

    let spot_type = detect_activity_type(&raw.title, &raw.description, &raw.lead_text);
    let price_range = parse_price(&raw.price_type, &raw.price_detail);
    let features = activity_features(spot_type, &raw.title, &raw.description);
    let (has_shade, has_water) = activity_attributes(spot_type);

    let raw_description = if raw.lead_text.trim().is_empty() {
        raw.description.as_str()
    } else {
        raw.lead_text.as_str()
    };

    let address = format!(
        "{}, {} {}",
        raw.address_street, raw.address_city, raw.address_zipcode
    )
    .trim()
    .to_string();

    CoolSpot {
        id: record.recordid.clone(),
        name: raw.title.clone(),
        spot_type,
        arrondissement: district::from_postal_code(&raw.address_zipcode),
        address,
        description: clean_html(raw_description),
        price_range,
        is_open: true,
        opening_hours: "See details".to_string(),
        rating: 4.2,
        features,
        accessibility: true,
        has_shade,
        has_water,
        coordinates: activity_coordinates(raw.lat_lon),
    }
}

// A zero component means "not filled in" in this dataset, so each axis falls
// back to the city center independently.
fn activity_coordinates(lat_lon: Option<[f64; 2]>) -> Coordinates {
    let [lat, lng] = lat_lon.unwrap_or([0.0, 0.0]);
    Coordinates {
        lat: if lat == 0.0 { PARIS_CENTER.lat } else { lat },
        lng: if lng == 0.0 { PARIS_CENTER.lng } else { lng },
    }
}

/// Indoor categories count as shaded (climate-controlled space); only pools
/// count as watered.
fn activity_attributes(spot_type: SpotType) -> (bool, bool) {
    match spot_type {
        SpotType::Pool => (false, true),
        SpotType::Museum | SpotType::Library => (true, false),
        _ => (true, false),
    }
}

/// Display tags per category, refined by a keyword scan of title and
/// description.
fn activity_features(spot_type: SpotType, title: &str, description: &str) -> Vec<String> {
    let text = format!("{} {}", title, description).to_lowercase();
    let mut features: Vec<&str> = Vec::new();

    match spot_type {
        SpotType::Pool => {
            features.extend(["Swimming pool", "Water activities"]);
            if text.contains("couverte") || text.contains("indoor") {
                features.push("Indoor pool");
            }
            if text.contains("extérieure") || text.contains("outdoor") {
                features.push("Outdoor pool");
            }
            if text.contains("chauffée") || text.contains("heated") {
                features.push("Heated water");
            }
        }
        SpotType::Museum => {
            features.extend(["Museum", "Culture"]);
            if text.contains("art") {
                features.push("Art");
            }
            if text.contains("histoire") || text.contains("history") {
                features.push("History");
            }
            if text.contains("science") {
                features.push("Science");
            }
            if text.contains("exposition") || text.contains("exhibition") {
                features.push("Exhibitions");
            }
        }
        SpotType::Library => {
            features.extend(["Library", "Reading"]);
            if text.contains("numérique") || text.contains("digital") {
                features.push("Digital resources");
            }
            if text.contains("enfant") || text.contains("children") {
                features.push("Children's section");
            }
            if text.contains("wifi") {
                features.push("WiFi");
            }
        }
        _ => {
            features.extend(["Activity", "Event"]);
            if text.contains("concert") {
                features.push("Concert");
            }
            if text.contains("théâtre") || text.contains("theatre") {
                features.push("Theatre");
            }
            if text.contains("atelier") || text.contains("workshop") {
                features.push("Workshop");
            }
            if text.contains("spectacle") || text.contains("show") {
                features.push("Show");
            }
        }
    }

    features.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriceRange;

    fn record(fields: RawActivity) -> ApiRecord<RawActivity> {
        ApiRecord {
            recordid: "act-1".to_string(),
            fields,
            record_timestamp: None,
        }
    }

    #[test]
    fn paid_museum_activity() {
        let spot = transform_activity(&record(RawActivity {
            title: "Exposition au Musée Carnavalet".to_string(),
            description: "Histoire de Paris".to_string(),
            lead_text: "<p>Une <strong>visite</strong> de la collection permanente</p>".to_string(),
            address_street: "23 Rue de Sévigné".to_string(),
            address_city: "Paris".to_string(),
            address_zipcode: "75003".to_string(),
            price_type: "payant".to_string(),
            price_detail: "De 5 à 12 euros".to_string(),
            lat_lon: Some([48.8578, 2.3622]),
        }));

        assert_eq!(spot.spot_type, SpotType::Museum);
        assert_eq!(spot.price_range, PriceRange::FiveToFifteen);
        assert_eq!(spot.arrondissement.label(), "3rd");
        assert_eq!(spot.description, "Une visite de la collection permanente");
        assert!(spot.has_shade);
        assert!(!spot.has_water);
        assert!(spot.features.iter().any(|f| f == "History"));
        assert!(spot.features.iter().any(|f| f == "Exhibitions"));
    }

    #[test]
    fn pool_gets_water_not_shade() {
        let spot = transform_activity(&record(RawActivity {
            title: "Piscine couverte chauffée".to_string(),
            price_type: "gratuit".to_string(),
            ..RawActivity::default()
        }));

        assert_eq!(spot.spot_type, SpotType::Pool);
        assert!(!spot.has_shade);
        assert!(spot.has_water);
        assert!(spot.features.iter().any(|f| f == "Indoor pool"));
        assert!(spot.features.iter().any(|f| f == "Heated water"));
    }

    #[test]
    fn museum_mentioning_art_gets_the_art_tag() {
        let spot = transform_activity(&record(RawActivity {
            title: "Musée d'art moderne".to_string(),
            ..RawActivity::default()
        }));
        assert_eq!(spot.spot_type, SpotType::Museum);
        assert!(spot.features.iter().any(|f| f == "Art"));
    }

    #[test]
    fn description_falls_back_when_lead_text_is_empty() {
        let spot = transform_activity(&record(RawActivity {
            title: "Concert".to_string(),
            description: "<p>Musique en plein air</p>".to_string(),
            ..RawActivity::default()
        }));

        assert_eq!(spot.description, "Musique en plein air");
        assert!(spot.features.iter().any(|f| f == "Concert"));
    }

    #[test]
    fn zero_coordinates_fall_back_to_city_center() {
        let spot = transform_activity(&record(RawActivity {
            lat_lon: Some([0.0, 0.0]),
            ..RawActivity::default()
        }));
        assert_eq!(spot.coordinates, PARIS_CENTER);

        let spot = transform_activity(&record(RawActivity {
            lat_lon: None,
            ..RawActivity::default()
        }));
        assert_eq!(spot.coordinates, PARIS_CENTER);

        // One valid axis is kept.
        let spot = transform_activity(&record(RawActivity {
            lat_lon: Some([48.9, 0.0]),
            ..RawActivity::default()
        }));
        assert_eq!(spot.coordinates.lat, 48.9);
        assert_eq!(spot.coordinates.lng, PARIS_CENTER.lng);
    }

    #[test]
    fn blank_record_gets_defaults() {
        let spot = transform_activity(&record(RawActivity::default()));

        assert_eq!(spot.spot_type, SpotType::Activity);
        assert_eq!(spot.price_range, PriceRange::Free);
        assert_eq!(spot.arrondissement.label(), "1st");
        assert_eq!(spot.description, "");
        assert!(spot.is_open);
    }
}
