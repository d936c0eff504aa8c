// web_app/components/user.rs - User display components
//
// The users listing renders as a table; each row carries the same
// view/edit/delete affordances as the product cards. Delete is
// presentational only; no request is issued.

use crate::web_app::model::User;
use leptos::prelude::*;

use super::common::Badge;

/// One table row for a user
#[component]
pub fn UserRow(
    /// The user to display
    user: User,
) -> impl IntoView {
    let detail_href = format!("/users/{}", user.id);
    let edit_href = format!("/users/edit/{}", user.id);
    let initials = user.initials();
    let full_name = user.full_name();
    let address_line = format!("{}, {}", user.address.city, user.address.zipcode);

    view! {
        <tr class="hover:bg-gray-50 transition-colors">
            <td class="px-4 py-3">
                <div class="flex items-center gap-3">
                    <span class="w-10 h-10 rounded-full bg-blue-100 text-blue-700 \
                                 flex items-center justify-center font-semibold">
                        {initials}
                    </span>
                    <span class="font-medium text-gray-900">{full_name}</span>
                </div>
            </td>
            <td class="px-4 py-3 text-gray-700">{user.email.clone()}</td>
            <td class="px-4 py-3 text-gray-700">{user.phone.clone()}</td>
            <td class="px-4 py-3 text-gray-700">{address_line}</td>
            <td class="px-4 py-3">
                <Badge variant="green">"Active"</Badge>
            </td>
            <td class="px-4 py-3 text-right whitespace-nowrap">
                <a
                    href=detail_href
                    class="inline-block p-2 rounded-full text-blue-500 hover:bg-blue-50 transition-colors"
                    title="View Details"
                >
                    "👁"
                </a>
                <a
                    href=edit_href
                    class="inline-block p-2 rounded-full text-green-600 hover:bg-green-50 transition-colors mx-1"
                    title="Edit User"
                >
                    "✎"
                </a>
                <button
                    type="button"
                    class="p-2 rounded-full text-red-500 hover:bg-red-50 transition-colors"
                    title="Delete User"
                >
                    "🗑"
                </button>
            </td>
        </tr>
    }
}

/// Users table with an empty state
#[component]
pub fn UserTable(
    /// The page of users to display
    users: Signal<Vec<User>>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-gray-100 overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead>
                    <tr class="bg-gray-100 text-left text-gray-700">
                        <th class="px-4 py-3 font-bold">"User"</th>
                        <th class="px-4 py-3 font-bold">"Email"</th>
                        <th class="px-4 py-3 font-bold">"Phone"</th>
                        <th class="px-4 py-3 font-bold">"Address"</th>
                        <th class="px-4 py-3 font-bold">"Status"</th>
                        <th class="px-4 py-3 font-bold text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    <Show
                        when=move || !users.get().is_empty()
                        fallback=|| view! {
                            <tr>
                                <td colspan="6" class="px-4 py-10 text-center text-gray-500">
                                    "No users found matching your criteria"
                                </td>
                            </tr>
                        }
                    >
                        <For
                            each=move || users.get()
                            key=|user| user.id
                            children=move |user| view! { <UserRow user=user /> }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}
