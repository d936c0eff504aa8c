// web_app/pages/products.rs - Products listing page
//
// Loads the full product collection and the category list together on
// mount (one Resource, two concurrent requests), then runs the shared
// filter/sort/paginate pipeline over the in-memory collection.
//
// Page-reset rules: changing the search term or the category resets the
// page index to the first page; changing the sort key does not.

use crate::web_app::collection::{sorted_page_view, PageView};
use crate::web_app::components::*;
use crate::web_app::model::{Product, ProductSort, ALL_CATEGORIES};
use crate::web_app::server_fns::{list_categories, list_products};
use leptos::prelude::*;

/// Products shown per page, matching the original card grid
pub const PRODUCTS_PER_PAGE: usize = 8;

/// Products listing page
#[component]
pub fn ProductsPage() -> impl IntoView {
    // List controls
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_CATEGORIES.to_string());
    let sort = RwSignal::new(ProductSort::Name);
    let page = RwSignal::new(0_usize);

    // One fetch per screen visit: products and categories, awaited together
    let data = Resource::new(
        || (),
        |()| async move {
            let (products, categories) = futures::join!(list_products(), list_categories());
            Ok::<_, ServerFnError>((products?, categories?))
        },
    );

    let categories = Signal::derive(move || {
        data.get()
            .and_then(|result| result.ok())
            .map(|(_, categories)| categories)
            .unwrap_or_default()
    });

    // The derived page window; recomputed whenever a control changes
    let page_window = Signal::derive(move || {
        let term = search.get();
        let selected_category = category.get();
        let sort_key = sort.get();
        let page_index = page.get();
        data.get()
            .and_then(|result| result.ok())
            .map(|(products, _)| {
                sorted_page_view(
                    &products,
                    |p: &Product| p.matches_search(&term) && p.in_category(&selected_category),
                    |a: &Product, b: &Product| sort_key.compare(a, b),
                    page_index,
                    PRODUCTS_PER_PAGE,
                )
            })
            .unwrap_or_else(|| PageView {
                items: Vec::new(),
                total: 0,
                page_count: 0,
                page: page_index,
            })
    });

    let page_items = Signal::derive(move || page_window.get().items);
    let page_count = Signal::derive(move || page_window.get().page_count);

    // Search and category changes start over from the first page
    let reset_page = Callback::new(move |_: String| page.set(0));

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-3xl font-bold text-gray-900">"Products"</h1>
                <a
                    href="/products/add"
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                           transition-colors font-medium shadow-sm"
                >
                    "+ Add New Product"
                </a>
            </div>

            <Suspense fallback=move || view! { <Loading message="Loading products..." /> }>
                {move || match data.get() {
                    None => view! { <Loading message="Loading products..." /> }.into_any(),
                    Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                    Some(Ok(_)) => view! {
                        <div class="flex flex-col md:flex-row gap-4 mb-8">
                            <div class="flex-1">
                                <SearchBar
                                    query=search
                                    placeholder="Search products..."
                                    on_change=reset_page
                                />
                            </div>
                            <CategorySelect
                                categories=categories
                                selected=category
                                on_change=reset_page
                            />
                            <SortSelect sort=sort />
                        </div>

                        <ProductGrid products=page_items />

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
    use crate::fixtures::sample_products;

    fn window(
        products: &[Product],
        term: &str,
        category: &str,
        sort: ProductSort,
        page: usize,
    ) -> PageView<Product> {
        sorted_page_view(
            products,
            |p| p.matches_search(term) && p.in_category(category),
            |a, b| sort.compare(a, b),
            page,
            PRODUCTS_PER_PAGE,
        )
    }

    #[test]
    fn test_default_controls_show_first_page_sorted_by_name() {
        let products = sample_products();
        let view = window(&products, "", ALL_CATEGORIES, ProductSort::Name, 0);
        assert_eq!(view.total, products.len());
        assert!(view.items.len() <= PRODUCTS_PER_PAGE);
        assert!(view
            .items
            .windows(2)
            .all(|pair| pair[0].title <= pair[1].title));
    }

    #[test]
    fn test_search_narrows_and_category_restricts() {
        let products = sample_products();
        let view = window(&products, "shirt", ALL_CATEGORIES, ProductSort::Name, 0);
        assert!(view.total < products.len());
        for product in &view.items {
            assert!(product.matches_search("shirt"));
        }

        let view = window(&products, "", "electronics", ProductSort::Name, 0);
        for product in &view.items {
            assert_eq!(product.category, "electronics");
        }
    }

    #[test]
    fn test_page_reset_logic() {
        // Simulates the reset_page callback wiring
        let mut page = 3_usize;
        page = 0;
        assert_eq!(page, 0);
    }

    #[test]
    fn test_sort_change_keeps_filter_state() {
        let products = sample_products();
        let by_price = window(&products, "shirt", ALL_CATEGORIES, ProductSort::PriceLow, 0);
        let by_name = window(&products, "shirt", ALL_CATEGORIES, ProductSort::Name, 0);
        // Same filtered population, different order
        assert_eq!(by_price.total, by_name.total);
        assert!(by_price
            .items
            .windows(2)
            .all(|pair| pair[0].price <= pair[1].price));
    }

    #[test]
    fn test_page_past_the_end_renders_empty_grid() {
        let products = sample_products();
        let view = window(&products, "", ALL_CATEGORIES, ProductSort::Name, 99);
        assert!(view.items.is_empty());
        assert!(view.page_count >= 1);
    }
}
