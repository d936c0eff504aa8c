// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the navbar, and the page component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::Navbar;
use crate::web_app::pages::{
    AddProductPage, AddUserPage, DashboardPage, EditProductPage, EditUserPage, ProductDetailPage,
    ProductsPage, UserDetailPage, UsersPage,
};

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Router with all admin routes plus a catch-all
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        // HTML meta tags
        <Title text="Store Admin Console" />
        <Meta name="description" content="Admin console for the demo store API: manage users and products" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/store_admin.css" />

        // Router setup
        <Router>
            <Navbar />
            <main class="min-h-screen bg-gray-50">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/users") view=UsersPage />
                    <Route path=path!("/users/add") view=AddUserPage />
                    <Route path=path!("/users/edit/:id") view=EditUserPage />
                    <Route path=path!("/users/:id") view=UserDetailPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/products/add") view=AddProductPage />
                    <Route path=path!("/products/edit/:id") view=EditProductPage />
                    <Route path=path!("/products/:id") view=ProductDetailPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Dashboard"
                </a>
            </div>
        </div>
    }
}
