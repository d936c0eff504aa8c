// web_app/pages/users.rs - Users listing page
//
// Loads the full user collection on mount, then filters by name/email
// substring and paginates with a selectable page size. No sorting is
// offered here; the table keeps the remote order.
//
// Page-reset rules: changing the search term or the page size resets the
// page index to the first page.

use crate::web_app::collection::{page_view, PageView};
use crate::web_app::components::*;
use crate::web_app::model::User;
use crate::web_app::server_fns::list_users;
use leptos::prelude::*;

/// Users listing page
#[component]
pub fn UsersPage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(0_usize);
    let page_size = RwSignal::new(5_usize);

    // One fetch per screen visit
    let data = Resource::new(|| (), |()| async move { list_users().await });

    let page_window = Signal::derive(move || {
        let term = search.get();
        let page_index = page.get();
        let size = page_size.get();
        data.get()
            .and_then(|result| result.ok())
            .map(|users| page_view(&users, |u: &User| u.matches_search(&term), page_index, size))
            .unwrap_or_else(|| PageView {
                items: Vec::new(),
                total: 0,
                page_count: 0,
                page: page_index,
            })
    });

    let page_items = Signal::derive(move || page_window.get().items);
    let page_count = Signal::derive(move || page_window.get().page_count);
    let total = Signal::derive(move || page_window.get().total);

    // Search and page-size changes start over from the first page
    let reset_page_on_search = Callback::new(move |_: String| page.set(0));
    let reset_page_on_resize = Callback::new(move |_: usize| page.set(0));

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-3xl font-bold text-gray-900">"Users"</h1>
                <a
                    href="/users/add"
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                           transition-colors font-medium shadow-sm"
                >
                    "+ Add New User"
                </a>
            </div>

            <Suspense fallback=move || view! { <Loading message="Loading users..." /> }>
                {move || match data.get() {
                    None => view! { <Loading message="Loading users..." /> }.into_any(),
                    Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                    Some(Ok(_)) => view! {
                        <div class="mb-6">
                            <SearchBar
                                query=search
                                placeholder="Search users by name or email..."
                                on_change=reset_page_on_search
                            />
                        </div>

                        <UserTable users=page_items />

                        <div class="flex items-center justify-between mt-4">
                            <span class="text-sm text-gray-500">
                                {move || format!("{} users", total.get())}
                            </span>
                            <RowsPerPage page_size=page_size on_change=reset_page_on_resize />
                        </div>

                        <Show when=move || (page_count.get() > 1)>
                            <Pager current_page=page page_count=page_count />
                        </Show>
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_users;

    #[test]
    fn test_default_view_is_first_five_users() {
        let users = sample_users();
        let view = page_view(&users, |u: &User| u.matches_search(""), 0, 5);
        assert_eq!(view.items.len(), 5.min(users.len()));
        assert_eq!(view.total, users.len());
    }

    #[test]
    fn test_search_matches_name_or_email_only() {
        let users = sample_users();
        let view = page_view(&users, |u: &User| u.matches_search("gmail"), 0, 25);
        assert!(view.total > 0);
        for user in &view.items {
            assert!(user.matches_search("gmail"));
        }
    }

    #[test]
    fn test_page_size_change_rewindows_without_losing_filter() {
        let users = sample_users();
        let term = "o";
        let small = page_view(&users, |u: &User| u.matches_search(term), 0, 5);
        let large = page_view(&users, |u: &User| u.matches_search(term), 0, 25);
        assert_eq!(small.total, large.total);
        assert!(small.items.len() <= 5);
    }

    #[test]
    fn test_pages_partition_the_filtered_users() {
        let users = sample_users();
        let size = 3;
        let full = page_view(&users, |u: &User| u.matches_search(""), 0, usize::MAX);
        let mut stitched = Vec::new();
        let pages = page_view(&users, |u: &User| u.matches_search(""), 0, size).page_count;
        for page in 0..pages {
            stitched.extend(page_view(&users, |u: &User| u.matches_search(""), page, size).items);
        }
        assert_eq!(stitched, full.items);
    }
}
