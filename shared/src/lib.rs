pub mod adapters;
pub mod analytics;
pub mod core;
pub mod utils;

pub use reqwest::Client;
