use crate::api::records::{ApiRecord, RawFountain};
use crate::district;
use crate::model::{CoolSpot, Coordinates, PriceRange, SpotType};
use crate::transform::PARIS_CENTER;

// Literal availability sentinel used by the fontaines-a-boire dataset.
const AVAILABLE: &str = "OUI";

/// Maps a `fontaines-a-boire` record to a CoolSpot. Fountains are always
/// free, unshaded and watered; availability comes straight from the
/// dataset's flag.
pub fn transform_fountain(record: &ApiRecord<RawFountain>) -> CoolSpot {
    let raw = &record.fields;

    let coordinates = match raw.geo_point_2d {
        Some([lat, lng]) => Coordinates { lat, lng },
        None => PARIS_CENTER,
    };

    CoolSpot {
        id: record.recordid.clone(),
        name: format!("Fountain - {}", raw.voie),
        spot_type: SpotType::Fountain,
        arrondissement: district::from_commune(&raw.commune),
        address: format!("{}, {}", raw.voie, raw.commune),
        description: format!("{} - {}", raw.type_objet, raw.modele),
        price_range: PriceRange::Free,
        is_open: raw.dispo == AVAILABLE,
        opening_hours: "24/7".to_string(),
        rating: 4.5,
        features: vec!["Drinking water".to_string(), "Public fountain".to_string()],
        accessibility: true,
        has_shade: false,
        has_water: true,
        coordinates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: RawFountain) -> ApiRecord<RawFountain> {
        ApiRecord {
            recordid: "f-1".to_string(),
            fields,
            record_timestamp: None,
        }
    }

    #[test]
    fn available_fountain() {
        let spot = transform_fountain(&record(RawFountain {
            voie: "Rue de Rivoli".to_string(),
            dispo: "OUI".to_string(),
            type_objet: "Fontaine Wallace".to_string(),
            commune: "PARIS 4EME ARRONDISSEMENT".to_string(),
            modele: "Wallace bois".to_string(),
            geo_point_2d: Some([48.8556, 2.3622]),
        }));

        assert_eq!(spot.name, "Fountain - Rue de Rivoli");
        assert_eq!(spot.spot_type, SpotType::Fountain);
        assert_eq!(spot.arrondissement.label(), "4th");
        assert!(spot.is_open);
        assert_eq!(spot.opening_hours, "24/7");
        assert!(spot.has_water);
        assert!(!spot.has_shade);
        assert_eq!(spot.description, "Fontaine Wallace - Wallace bois");
    }

    #[test]
    fn unavailable_fountain_is_closed() {
        let spot = transform_fountain(&record(RawFountain {
            dispo: "NON".to_string(),
            ..RawFountain::default()
        }));
        assert!(!spot.is_open);
    }

    #[test]
    fn sentinel_match_is_exact() {
        for dispo in ["oui", "Oui", "OUI ", "yes"] {
            let spot = transform_fountain(&record(RawFountain {
                dispo: dispo.to_string(),
                ..RawFountain::default()
            }));
            assert!(!spot.is_open, "dispo={:?} must not count as available", dispo);
        }
    }

    #[test]
    fn blank_record_gets_defaults() {
        let spot = transform_fountain(&record(RawFountain::default()));

        assert_eq!(spot.name, "Fountain - ");
        assert_eq!(spot.arrondissement.label(), "1st");
        assert_eq!(spot.price_range, PriceRange::Free);
        assert_eq!(spot.coordinates, PARIS_CENTER);
    }
}
