// web_app/pages/user_detail.rs - User detail page
//
// Same shape as the product detail page: fetch by :id, render an error
// banner on failure or an unknown identifier.

use crate::web_app::components::*;
use crate::web_app::server_fns::get_user;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// User detail page
#[component]
pub fn UserDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i32>().ok())
    });

    let user = Resource::new(
        move || id.get(),
        |id| async move {
            match id {
                Some(id) => get_user(id).await,
                None => Err(ServerFnError::new("Invalid user id")),
            }
        },
    );

    view! {
        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <a href="/users" class="text-sm text-blue-600 hover:underline">
                "← Back to Users"
            </a>

            <Suspense fallback=move || view! { <Loading message="Loading user..." /> }>
                {move || match user.get() {
                    None => view! { <Loading message="Loading user..." /> }.into_any(),
                    Some(Err(e)) => view! {
                        <div class="mt-6">
                            <ErrorDisplay error=e.to_string() />
                        </div>
                    }.into_any(),
                    Some(Ok(user)) => {
                        let edit_href = format!("/users/edit/{}", user.id);
                        let full_name = user.full_name();
                        let street_line = format!(
                            "{} {}, {} {}",
                            user.address.number,
                            user.address.street,
                            user.address.city,
                            user.address.zipcode,
                        );
                        view! {
                            <div class="mt-6 bg-white rounded-2xl border border-gray-100 shadow-sm p-8">
                                <div class="flex items-center gap-6 mb-8">
                                    <span class="w-20 h-20 rounded-full bg-blue-100 text-blue-700 \
                                                 flex items-center justify-center text-2xl font-bold">
                                        {user.initials()}
                                    </span>
                                    <div>
                                        <h1 class="text-3xl font-bold text-gray-900">{full_name}</h1>
                                        <p class="text-gray-500">"@" {user.username.clone()}</p>
                                    </div>
                                    <div class="ml-auto">
                                        <Badge variant="green">"Active"</Badge>
                                    </div>
                                </div>

                                <dl class="grid grid-cols-1 md:grid-cols-2 gap-6 text-sm">
                                    <div>
                                        <dt class="text-gray-500 uppercase tracking-wide text-xs font-semibold mb-1">
                                            "Email"
                                        </dt>
                                        <dd class="text-gray-900 font-medium">{user.email.clone()}</dd>
                                    </div>
                                    <div>
                                        <dt class="text-gray-500 uppercase tracking-wide text-xs font-semibold mb-1">
                                            "Phone"
                                        </dt>
                                        <dd class="text-gray-900 font-medium">{user.phone.clone()}</dd>
                                    </div>
                                    <div class="md:col-span-2">
                                        <dt class="text-gray-500 uppercase tracking-wide text-xs font-semibold mb-1">
                                            "Address"
                                        </dt>
                                        <dd class="text-gray-900 font-medium">{street_line}</dd>
                                    </div>
                                </dl>

                                <div class="flex gap-3 mt-8 pt-4 border-t border-gray-100">
                                    <a
                                        href=edit_href
                                        class="px-4 py-2 bg-blue-600 text-white rounded-lg \
                                               hover:bg-blue-700 transition-colors font-medium shadow-sm"
                                    >
                                        "Edit User"
                                    </a>
                                    <button
                                        type="button"
                                        class="px-4 py-2 bg-white text-red-600 rounded-lg border \
                                               border-red-200 hover:bg-red-50 transition-colors font-medium"
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }.into_any()
                    }
                }}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::web_app::model::{Address, User};

    #[test]
    fn test_street_line_formatting() {
        let user = User {
            id: 1,
            address: Address {
                city: "kilcoole".to_string(),
                street: "new road".to_string(),
                number: 7682,
                zipcode: "12926-3874".to_string(),
            },
            ..Default::default()
        };
        let street_line = format!(
            "{} {}, {} {}",
            user.address.number, user.address.street, user.address.city, user.address.zipcode,
        );
        assert_eq!(street_line, "7682 new road, kilcoole 12926-3874");
    }

    #[test]
    fn test_street_line_with_defaults_does_not_panic() {
        let user = User::default();
        let street_line = format!(
            "{} {}, {} {}",
            user.address.number, user.address.street, user.address.city, user.address.zipcode,
        );
        assert_eq!(street_line, "0 ,  ");
    }
}
