pub mod client;
pub mod models;

pub use client::ChartsClient;
pub use models::TopTrack;
