// Multi-criteria filtering over the unified spot list, plus the aggregate
// counts shown next to it.
use crate::model::{CoolSpot, FilterOptions, PriceRange, SpotStats};

/// Applies the filter criteria to a spot list: AND across criteria groups,
/// OR within each multi-select group. Pure function; default criteria return
/// the input unchanged, in order.
pub fn filter_spots(spots: &[CoolSpot], filters: &FilterOptions) -> Vec<CoolSpot> {
    spots
        .iter()
        .filter(|spot| matches(spot, filters))
        .cloned()
        .collect()
}

fn matches(spot: &CoolSpot, filters: &FilterOptions) -> bool {
    if !filters.types.is_empty() && !filters.types.contains(&spot.spot_type) {
        return false;
    }

    if !filters.arrondissements.is_empty()
        && !filters.arrondissements.contains(&spot.arrondissement)
    {
        return false;
    }

    if !filters.price_ranges.is_empty() && !filters.price_ranges.contains(&spot.price_range) {
        return false;
    }

    if filters.open_only && !spot.is_open {
        return false;
    }

    if filters.accessible_only && !spot.accessibility {
        return false;
    }

    if filters.with_shade && !spot.has_shade {
        return false;
    }

    if filters.with_water && !spot.has_water {
        return false;
    }

    let query = filters.search_query.trim().to_lowercase();
    if !query.is_empty() {
        let in_name = spot.name.to_lowercase().contains(&query);
        let in_address = spot.address.to_lowercase().contains(&query);
        let in_description = spot.description.to_lowercase().contains(&query);
        let in_features = spot
            .features
            .iter()
            .any(|feature| feature.to_lowercase().contains(&query));

        if !in_name && !in_address && !in_description && !in_features {
            return false;
        }
    }

    true
}

impl SpotStats {
    pub fn compute(spots: &[CoolSpot]) -> SpotStats {
        SpotStats {
            total_spots: spots.len(),
            open_spots: spots.iter().filter(|s| s.is_open).count(),
            free_spots: spots
                .iter()
                .filter(|s| s.price_range == PriceRange::Free)
                .count(),
            accessible_spots: spots.iter().filter(|s| s.accessibility).count(),
        }
    }
}
