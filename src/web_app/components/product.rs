// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: Grid card for the products listing
// - ProductGrid: Grid layout with an empty state

use crate::web_app::model::Product;
use leptos::prelude::*;

use super::common::{Badge, StarRating};

/// Shorten long titles and descriptions for card display
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Product card for the listing grid
///
/// Shows the summary plus view/edit/delete affordances. Delete is
/// presentational only; no request is issued.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let detail_href = format!("/products/{}", product.id);
    let edit_href = format!("/products/edit/{}", product.id);
    let title = truncate_text(&product.title, 50);
    let price_display = format!("${:.2}", product.price);

    view! {
        <div class="group bg-white rounded-xl shadow-sm hover:shadow-xl \
                    transition-all duration-300 border border-gray-100 \
                    flex flex-col h-full overflow-hidden transform hover:-translate-y-1">
            <a href=detail_href.clone() class="flex flex-col flex-1">
                <div class="h-48 bg-white flex items-center justify-center p-4">
                    <img
                        src=product.image.clone()
                        alt=product.title.clone()
                        class="max-h-full max-w-full object-contain"
                    />
                </div>

                <div class="p-5 flex flex-col flex-1">
                    <div class="mb-2">
                        <Badge variant="blue">{product.category.clone()}</Badge>
                    </div>

                    <h3 class="font-bold text-gray-900 mb-2 text-lg group-hover:text-blue-600 transition-colors">
                        {title}
                    </h3>

                    <div class="flex items-center gap-2 mb-3">
                        <StarRating rating=product.rating.rate show_value=false />
                        <span class="text-sm text-gray-500">
                            "(" {product.rating.count} ")"
                        </span>
                    </div>

                    <span class="mt-auto text-lg font-bold text-blue-600">
                        {price_display}
                    </span>
                </div>
            </a>

            <div class="flex justify-between items-center px-3 py-2 border-t border-gray-100">
                <a
                    href=detail_href
                    class="p-2 rounded-full text-blue-500 hover:bg-blue-50 transition-colors"
                    title="View Details"
                >
                    "👁"
                </a>
                <a
                    href=edit_href
                    class="p-2 rounded-full text-green-600 hover:bg-green-50 transition-colors"
                    title="Edit Product"
                >
                    "✎"
                </a>
                <button
                    type="button"
                    class="p-2 rounded-full text-red-500 hover:bg-red-50 transition-colors"
                    title="Delete Product"
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}

/// Products listing grid with an empty state
#[component]
pub fn ProductGrid(
    /// The page of products to display
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.get().is_empty()
            fallback=|| view! {
                <div class="bg-white rounded-xl p-12 text-center border border-gray-100">
                    <p class="text-lg text-gray-500">
                        "No products found matching your criteria"
                    </p>
                </div>
            }
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=move |product| view! { <ProductCard product=product /> }
                />
            </div>
        </Show>
    }
}
