//! Porsche Catalog
//!
//! Server-rendered listing and detail pages over a remote JSON catalog.
//! Each request fetches the catalog, filters it by name, sorts it by a dotted
//! field path and renders an Askama template.
//!
//! - `config`: environment-driven settings
//! - `data`: catalog records and the upstream fetch
//! - `listing`: name filter, field-path sort, id lookups
//! - `utils/`: field path resolution and string collation
//! - `web/`: page handlers and templates
//! - `api_server`: router, shared state and error responses

pub mod config;
pub mod data;
pub mod listing;
pub mod utils;
pub mod web;
pub mod api_server;

// Re-export commonly used types
pub use api_server::{AppError, AppState, create_router};
pub use config::AppConfig;
pub use data::{CatalogClient, CatalogModel, FetchError, Manufacturer};
pub use listing::{ListingQuery, SortOrder, filter_by_name, sort_by_field};
