// web_app/components/controls.rs - List control components
//
// These components drive the list/search/sort/paginate pipeline:
// - SearchBar: live substring search input
// - CategorySelect: category equality filter with the "all" sentinel
// - SortSelect: product sort key selector
// - Pager: previous/next page navigation
// - RowsPerPage: page size selector for the users table
//
// Page-reset rules live in the pages: search and category changes reset
// the page index via the on_change callbacks, sort changes do not.

use crate::web_app::model::{ProductSort, ALL_CATEGORIES};
use leptos::prelude::*;

/// Live search input with a leading icon
#[component]
pub fn SearchBar(
    /// Current search term
    query: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "Search...")]
    placeholder: &'static str,
    /// Called with the new term on every keystroke
    #[prop(into, optional)]
    on_change: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="relative w-full">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-gray-400">"🔍"</span>
            </div>
            <input
                type="search"
                placeholder=placeholder
                class="w-full pl-10 pr-4 py-2 border border-gray-300 rounded-lg \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                       outline-none transition-shadow shadow-sm"
                prop:value=move || query.get()
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    query.set(term.clone());
                    if let Some(handler) = on_change {
                        handler.run(term);
                    }
                }
            />
        </div>
    }
}

/// Capitalize the first character, as the category labels are lowercase
/// in the remote data
pub fn title_case_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Category filter dropdown
///
/// Offers "All Categories" plus every category the remote reported.
#[component]
pub fn CategorySelect(
    /// Available category names
    categories: Signal<Vec<String>>,
    /// Currently selected category (or the "all" sentinel)
    selected: RwSignal<String>,
    /// Called with the new category on change
    #[prop(into, optional)]
    on_change: Option<Callback<String>>,
) -> impl IntoView {
    let class = "px-4 py-2 border border-gray-300 rounded-lg bg-white \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none cursor-pointer shadow-sm";

    view! {
        <select
            class=class
            on:change=move |ev| {
                let value = event_target_value(&ev);
                selected.set(value.clone());
                if let Some(handler) = on_change {
                    handler.run(value);
                }
            }
        >
            <option
                value=ALL_CATEGORIES
                selected=move || selected.get() == ALL_CATEGORIES
            >
                "All Categories"
            </option>
            {move || categories.get().into_iter().map(|category| {
                let value = category.clone();
                let label = title_case_first(&category);
                let is_selected = category;
                view! {
                    <option
                        value=value
                        selected=move || selected.get() == is_selected
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Product sort key dropdown
#[component]
pub fn SortSelect(
    /// Current sort key
    sort: RwSignal<ProductSort>,
) -> impl IntoView {
    let options = [
        ProductSort::Name,
        ProductSort::PriceLow,
        ProductSort::PriceHigh,
        ProductSort::Rating,
    ];

    view! {
        <select
            class="px-4 py-2 border border-gray-300 rounded-lg bg-white \
                   focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                   outline-none cursor-pointer shadow-sm"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                sort.set(ProductSort::from_str(&value).unwrap_or_default());
            }
        >
            {options.into_iter().map(|option| {
                view! {
                    <option
                        value=option.as_str()
                        selected=move || sort.get() == option
                    >
                        {option.to_string()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Pagination component
///
/// Previous/next navigation over a 0-based page index; the label shows
/// the page 1-based as users expect.
#[component]
pub fn Pager(
    /// Current page (0-indexed)
    current_page: RwSignal<usize>,
    /// Total number of pages
    page_count: Signal<usize>,
) -> impl IntoView {
    let can_go_prev = move || current_page.get() > 0;
    let can_go_next = move || current_page.get() + 1 < page_count.get();

    let go_prev = move |_| {
        if can_go_prev() {
            current_page.update(|p| *p = p.saturating_sub(1));
        }
    };

    let go_next = move |_| {
        if can_go_next() {
            current_page.update(|p| *p += 1);
        }
    };

    view! {
        <div class="flex items-center justify-center gap-4 mt-8">
            <button
                type="button"
                class="px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700"
                disabled=move || !can_go_prev()
                on:click=go_prev
            >
                "← Previous"
            </button>

            <span class="text-sm font-medium text-gray-600 bg-gray-100 px-4 py-2 rounded-lg">
                "Page " {move || current_page.get() + 1} " of " {move || page_count.get().max(1)}
            </span>

            <button
                type="button"
                class="px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700"
                disabled=move || !can_go_next()
                on:click=go_next
            >
                "Next →"
            </button>
        </div>
    }
}

/// Rows-per-page selector for the users table
#[component]
pub fn RowsPerPage(
    /// Current page size
    page_size: RwSignal<usize>,
    /// Called with the new size on change
    #[prop(into, optional)]
    on_change: Option<Callback<usize>>,
) -> impl IntoView {
    let options = [5usize, 10, 25];

    view! {
        <label class="flex items-center gap-2 text-sm text-gray-600">
            "Rows per page:"
            <select
                class="px-2 py-1 border border-gray-300 rounded-lg bg-white \
                       focus:ring-2 focus:ring-blue-500 outline-none cursor-pointer"
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(5);
                    page_size.set(size);
                    if let Some(handler) = on_change {
                        handler.run(size);
                    }
                }
            >
                {options.into_iter().map(|size| view! {
                    <option
                        value=size.to_string()
                        selected=move || page_size.get() == size
                    >
                        {size}
                    </option>
                }).collect_view()}
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_first() {
        assert_eq!(title_case_first("electronics"), "Electronics");
        assert_eq!(title_case_first("men's clothing"), "Men's clothing");
        assert_eq!(title_case_first(""), "");
    }

    #[test]
    fn test_sort_select_values_round_trip() {
        for option in [
            ProductSort::Name,
            ProductSort::PriceLow,
            ProductSort::PriceHigh,
            ProductSort::Rating,
        ] {
            assert_eq!(ProductSort::from_str(option.as_str()), Some(option));
        }
    }

    #[test]
    fn test_pager_bounds_logic() {
        let current_page = 0usize;
        let page_count = 3usize;

        let can_go_prev = current_page > 0;
        let can_go_next = current_page + 1 < page_count;
        assert!(!can_go_prev);
        assert!(can_go_next);

        let current_page = 2usize;
        let can_go_next = current_page + 1 < page_count;
        assert!(!can_go_next);
    }

    #[test]
    fn test_rows_per_page_options() {
        let options = [5usize, 10, 25];
        assert!(options.contains(&5));
        assert!(options.windows(2).all(|w| w[0] < w[1]));
    }
}
