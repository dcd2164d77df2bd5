// Raw record shapes returned by the opendata.paris.fr search API.
//
// Every field the transformers read is defaulted: records in these datasets
// routinely omit fields, and a missing field must never fail the whole fetch.
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Standard envelope of the records/1.0/search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub nhits: u64,
    #[serde(default = "Vec::new")]
    pub records: Vec<ApiRecord<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRecord<T> {
    pub recordid: String,
    pub fields: T,
    #[serde(default)]
    pub record_timestamp: Option<DateTime<Utc>>,
}

/// A record of the `espaces_verts` dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGreenSpace {
    #[serde(default)]
    pub nom_ev: String,
    #[serde(default)]
    pub type_ev: String,
    #[serde(default)]
    pub categorie: String,
    #[serde(default)]
    pub adresse_codepostal: String,
    #[serde(default)]
    pub adresse_libellevoie: String,
    #[serde(default)]
    pub adresse_numero: Option<u32>,
    /// Pair as supplied by the dataset. Passed through untouched; see the
    /// green-space transformer for the axis-order caveat.
    #[serde(default)]
    pub geom_x_y: Option<[f64; 2]>,
}

/// A record of the `fontaines-a-boire` dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFountain {
    #[serde(default)]
    pub voie: String,
    #[serde(default)]
    pub dispo: String,
    #[serde(default)]
    pub type_objet: String,
    #[serde(default)]
    pub commune: String,
    #[serde(default)]
    pub modele: String,
    #[serde(default)]
    pub geo_point_2d: Option<[f64; 2]>,
}

/// A record of the `que-faire-a-paris-` dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawActivity {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lead_text: String,
    #[serde(default)]
    pub address_city: String,
    #[serde(default)]
    pub address_street: String,
    #[serde(default)]
    pub address_zipcode: String,
    #[serde(default)]
    pub price_type: String,
    #[serde(default)]
    pub price_detail: String,
    #[serde(default)]
    pub lat_lon: Option<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_activity_record_deserializes() {
        let json = r#"{
            "recordid": "abc123",
            "fields": { "title": "Expo au musée" }
        }"#;
        let record: ApiRecord<RawActivity> = serde_json::from_str(json).unwrap();
        assert_eq!(record.recordid, "abc123");
        assert_eq!(record.fields.title, "Expo au musée");
        assert_eq!(record.fields.price_type, "");
        assert!(record.fields.lat_lon.is_none());
        assert!(record.record_timestamp.is_none());
    }

    #[test]
    fn envelope_with_unknown_fields_deserializes() {
        let json = r#"{
            "nhits": 1,
            "parameters": { "dataset": "fontaines-a-boire", "rows": 1 },
            "records": [{
                "datasetid": "fontaines-a-boire",
                "recordid": "f1",
                "fields": { "voie": "Rue de Rivoli", "dispo": "OUI", "commune": "PARIS 4EME" },
                "record_timestamp": "2024-06-01T12:00:00Z"
            }]
        }"#;
        let response: ApiResponse<RawFountain> = serde_json::from_str(json).unwrap();
        assert_eq!(response.nhits, 1);
        assert_eq!(response.records.len(), 1);
        assert_eq!(response.records[0].fields.dispo, "OUI");
        assert!(response.records[0].record_timestamp.is_some());
    }
}
