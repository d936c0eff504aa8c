// web_app/api/mod.rs - API module for server-side logic
//
// This module contains the outbound HTTP client for the demo store API
// and the typed endpoint calls the server functions delegate to.

pub mod client;
pub mod store;

pub use client::{get_store, init_store, StoreApiError, StoreClient};
