// web_app/api/store.rs - Typed calls for every consumed store endpoint
//
// Thin wrappers over the shared client; one method per remote operation.
// Create/update return the record echoed by the demo service so callers
// can report the submitted state without refetching.

use crate::web_app::api::client::{StoreApiError, StoreClient};
use crate::web_app::model::{Product, ProductDraft, User, UserDraft};

impl StoreClient {
    /// `GET /products` - the full product collection
    pub async fn products(&self) -> Result<Vec<Product>, StoreApiError> {
        self.get_json("/products").await
    }

    /// `GET /products/{id}`
    pub async fn product(&self, id: i32) -> Result<Product, StoreApiError> {
        self.get_json(&format!("/products/{id}")).await
    }

    /// `GET /products/categories` - distinct category names
    pub async fn categories(&self) -> Result<Vec<String>, StoreApiError> {
        self.get_json("/products/categories").await
    }

    /// `POST /products`
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, StoreApiError> {
        self.post_json("/products", draft).await
    }

    /// `PUT /products/{id}`
    pub async fn update_product(
        &self,
        id: i32,
        draft: &ProductDraft,
    ) -> Result<Product, StoreApiError> {
        self.put_json(&format!("/products/{id}"), draft).await
    }

    /// `GET /users` - the full user collection
    pub async fn users(&self) -> Result<Vec<User>, StoreApiError> {
        self.get_json("/users").await
    }

    /// `GET /users/{id}`
    pub async fn user(&self, id: i32) -> Result<User, StoreApiError> {
        self.get_json(&format!("/users/{id}")).await
    }

    /// `POST /users`
    pub async fn create_user(&self, draft: &UserDraft) -> Result<User, StoreApiError> {
        self.post_json("/users", draft).await
    }

    /// `PUT /users/{id}`
    pub async fn update_user(&self, id: i32, draft: &UserDraft) -> Result<User, StoreApiError> {
        self.put_json(&format!("/users/{id}"), draft).await
    }
}
