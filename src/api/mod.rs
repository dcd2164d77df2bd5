pub mod client;
pub mod records;

pub use client::{OpenDataClient, SpotSource};
