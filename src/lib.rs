pub mod charts;
pub mod config;
pub mod countries;
pub mod error;
pub mod server;

pub use charts::{ChartsClient, TopTrack};
pub use config::Config;
pub use countries::CountryClient;
pub use error::{AppError, Result};
pub use server::{AppState, TopTrackReply, router};
