// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use crate::web_app::model::*;
use leptos::prelude::*;

#[cfg(feature = "ssr")]
fn store() -> Result<&'static crate::web_app::api::StoreClient, ServerFnError> {
    crate::web_app::api::get_store().map_err(|e| {
        tracing::error!("Store API client unavailable: {e}");
        ServerFnError::new("Store API client not available")
    })
}

#[cfg(feature = "ssr")]
fn display_error(operation: &str, e: crate::web_app::api::StoreApiError) -> ServerFnError {
    tracing::error!("{operation} failed: {e}");
    if e.is_not_found() {
        ServerFnError::new(format!("{operation}: not found"))
    } else {
        ServerFnError::new(format!("{operation} failed: {e}"))
    }
}

/// Fetch the full product collection
#[server(ListProducts, "/api")]
pub async fn list_products() -> Result<Vec<Product>, ServerFnError> {
    let products = store()?
        .products()
        .await
        .map_err(|e| display_error("Loading products", e))?;
    tracing::info!("Fetched {} products", products.len());
    Ok(products)
}

/// Fetch a single product by id
#[server(GetProduct, "/api")]
pub async fn get_product(id: i32) -> Result<Product, ServerFnError> {
    tracing::info!("Fetching product {id}");
    store()?
        .product(id)
        .await
        .map_err(|e| display_error("Loading product", e))
}

/// Fetch the distinct category names
#[server(ListCategories, "/api")]
pub async fn list_categories() -> Result<Vec<String>, ServerFnError> {
    let categories = store()?
        .categories()
        .await
        .map_err(|e| display_error("Loading categories", e))?;
    tracing::info!("Fetched {} categories", categories.len());
    Ok(categories)
}

/// Create a product from the add form draft
#[server(CreateProduct, "/api")]
pub async fn create_product(draft: ProductDraft) -> Result<Product, ServerFnError> {
    tracing::info!("Creating product '{}'", draft.title);
    store()?
        .create_product(&draft)
        .await
        .map_err(|e| display_error("Creating product", e))
}

/// Update a product from the edit form draft
#[server(UpdateProduct, "/api")]
pub async fn update_product(id: i32, draft: ProductDraft) -> Result<Product, ServerFnError> {
    tracing::info!("Updating product {id}");
    store()?
        .update_product(id, &draft)
        .await
        .map_err(|e| display_error("Updating product", e))
}

/// Fetch the full user collection
#[server(ListUsers, "/api")]
pub async fn list_users() -> Result<Vec<User>, ServerFnError> {
    let users = store()?
        .users()
        .await
        .map_err(|e| display_error("Loading users", e))?;
    tracing::info!("Fetched {} users", users.len());
    Ok(users)
}

/// Fetch a single user by id
#[server(GetUser, "/api")]
pub async fn get_user(id: i32) -> Result<User, ServerFnError> {
    tracing::info!("Fetching user {id}");
    store()?
        .user(id)
        .await
        .map_err(|e| display_error("Loading user", e))
}

/// Create a user from the add form draft
#[server(CreateUser, "/api")]
pub async fn create_user(draft: UserDraft) -> Result<User, ServerFnError> {
    tracing::info!("Creating user '{} {}'", draft.firstname, draft.lastname);
    store()?
        .create_user(&draft)
        .await
        .map_err(|e| display_error("Creating user", e))
}

/// Update a user from the edit form draft
#[server(UpdateUser, "/api")]
pub async fn update_user(id: i32, draft: UserDraft) -> Result<User, ServerFnError> {
    tracing::info!("Updating user {id}");
    store()?
        .update_user(id, &draft)
        .await
        .map_err(|e| display_error("Updating user", e))
}
