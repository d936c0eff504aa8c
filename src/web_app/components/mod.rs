// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Loading, inputs, etc.)
// - navbar.rs: Top navigation bar
// - controls.rs: List controls (search, category, sort, pagination)
// - product.rs: Product display components (ProductCard, ProductGrid)
// - user.rs: User display components (UserTable)

pub mod common;
pub mod controls;
pub mod navbar;
pub mod product;
pub mod user;

// Re-export commonly used components for convenience
pub use common::*;
pub use controls::*;
pub use navbar::*;
pub use product::*;
pub use user::*;
