// Joins the three dataset fetches into one unified spot list with
// partial-failure state.
use futures::join;
use tracing::{info, warn};

use crate::api::SpotSource;
use crate::model::{CoolSpot, FetchError};
use crate::transform::{transform_activity, transform_fountain, transform_green_space};

/// Outcome of one fetch-and-transform cycle. A failed source contributes no
/// spots but does not block the others; partial data is a displayable state,
/// not an exceptional one.
#[derive(Debug)]
pub struct SpotAggregate {
    /// Successful sources concatenated in fixed order: green spaces,
    /// fountains, activities.
    pub spots: Vec<CoolSpot>,
    failures: Vec<FetchError>,
}

impl SpotAggregate {
    pub fn is_error(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The failure to surface to the user, in fixed precedence order
    /// green spaces > fountains > activities.
    pub fn first_error(&self) -> Option<&FetchError> {
        self.failures.first()
    }

    pub fn failures(&self) -> &[FetchError] {
        &self.failures
    }
}

/// Fetches and transforms all three datasets concurrently. Retry is simply
/// calling this again; entities are rebuilt from scratch on every call.
pub async fn fetch_all_spots<S: SpotSource + ?Sized>(source: &S) -> SpotAggregate {
    let (green_spaces, fountains, activities) = join!(
        async {
            source
                .green_spaces()
                .await
                .map(|records| records.iter().map(transform_green_space).collect::<Vec<_>>())
        },
        async {
            source
                .fountains()
                .await
                .map(|records| records.iter().map(transform_fountain).collect::<Vec<_>>())
        },
        async {
            source
                .activities()
                .await
                .map(|records| records.iter().map(transform_activity).collect::<Vec<_>>())
        },
    );

    let mut spots = Vec::new();
    let mut failures = Vec::new();

    // Precedence order is fixed here; both the concatenation and the
    // surfaced error depend on it.
    for outcome in [green_spaces, fountains, activities] {
        match outcome {
            Ok(batch) => spots.extend(batch),
            Err(error) => {
                warn!("{}", error);
                failures.push(error);
            }
        }
    }

    info!(
        "aggregated {} spots ({} source(s) failed)",
        spots.len(),
        failures.len()
    );

    SpotAggregate { spots, failures }
}
