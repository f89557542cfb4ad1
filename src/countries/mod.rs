pub mod client;
pub mod models;

pub use client::CountryClient;
pub use models::Country;
