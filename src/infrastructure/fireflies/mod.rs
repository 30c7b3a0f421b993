//! Fireflies API adapter

mod client;
pub mod query;
pub mod response;

pub use client::FirefliesClient;
pub use query::GRAPHQL_URL;
