// web_app/pages/mod.rs - Page components module
//
// This module contains the page-level Leptos components:
// - DashboardPage: Admin landing page
// - ProductsPage / ProductDetailPage / AddProductPage / EditProductPage
// - UsersPage / UserDetailPage / AddUserPage / EditUserPage

pub mod dashboard;
pub mod product_detail;
pub mod product_form;
pub mod products;
pub mod user_detail;
pub mod user_form;
pub mod users;

// Re-export page components
pub use dashboard::DashboardPage;
pub use product_detail::ProductDetailPage;
pub use product_form::{AddProductPage, EditProductPage};
pub use products::ProductsPage;
pub use user_detail::UserDetailPage;
pub use user_form::{AddUserPage, EditUserPage};
pub use users::UsersPage;
