//! Discovery of cool spots (parks, fountains, pools, activities, libraries,
//! museums) from three Paris open-data datasets: fetch, normalize into one
//! unified entity model, then filter and paginate.

pub mod aggregate;
pub mod api;
pub mod classify;
pub mod config;
pub mod debounce;
pub mod district;
pub mod filter;
pub mod model;
pub mod paginate;
pub mod price;
pub mod text;
pub mod transform;

pub use aggregate::{SpotAggregate, fetch_all_spots};
pub use api::{OpenDataClient, SpotSource};
pub use config::AppConfig;
pub use filter::filter_spots;
pub use model::{
    Arrondissement, CoolSpot, Coordinates, Dataset, FetchError, FilterOptions, PriceRange,
    SpotStats, SpotType,
};
pub use paginate::Paginator;
