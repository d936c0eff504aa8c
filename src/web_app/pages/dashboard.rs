// web_app/pages/dashboard.rs - Admin landing page

use leptos::prelude::*;

/// Admin dashboard with links to the managed areas
#[component]
pub fn DashboardPage() -> impl IntoView {
    let areas = [
        (
            "👥",
            "Manage Users",
            "Add, edit, or remove user accounts",
            "/users",
        ),
        (
            "📦",
            "Manage Products",
            "Create and organize product listings",
            "/products",
        ),
    ];

    view! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">"Admin Dashboard"</h1>
            <p class="text-gray-500 mb-8">"Welcome back! Here's what you can manage:"</p>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                {areas.into_iter().map(|(icon, title, description, href)| view! {
                    <a
                        href=href
                        class="block bg-white rounded-2xl border border-gray-100 shadow-sm p-8 \
                               text-center transition-all duration-300 hover:shadow-xl \
                               transform hover:-translate-y-1"
                    >
                        <span class="text-4xl block mb-4">{icon}</span>
                        <h2 class="text-xl font-bold text-gray-900 mb-2">{title}</h2>
                        <p class="text-sm text-gray-500">{description}</p>
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_dashboard_links_point_at_real_routes() {
        let hrefs = ["/users", "/products"];
        for href in hrefs {
            assert!(href.starts_with('/'));
        }
    }
}
