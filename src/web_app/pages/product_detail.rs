// web_app/pages/product_detail.rs - Product detail page
//
// Fetches one product by the :id route parameter. A bad identifier or a
// failed request renders an error banner with a way back to the list,
// never a blank screen.

use crate::web_app::components::*;
use crate::web_app::server_fns::get_product;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Product detail page
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i32>().ok())
    });

    let product = Resource::new(
        move || id.get(),
        |id| async move {
            match id {
                Some(id) => get_product(id).await,
                None => Err(ServerFnError::new("Invalid product id")),
            }
        },
    );

    view! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <a href="/products" class="text-sm text-blue-600 hover:underline">
                "← Back to Products"
            </a>

            <Suspense fallback=move || view! { <Loading message="Loading product..." /> }>
                {move || match product.get() {
                    None => view! { <Loading message="Loading product..." /> }.into_any(),
                    Some(Err(e)) => view! {
                        <div class="mt-6">
                            <ErrorDisplay error=e.to_string() />
                        </div>
                    }.into_any(),
                    Some(Ok(product)) => {
                        let edit_href = format!("/products/edit/{}", product.id);
                        view! {
                            <div class="mt-6 bg-white rounded-2xl border border-gray-100 shadow-sm p-8">
                                <div class="flex flex-col md:flex-row gap-8">
                                    <div class="w-full md:w-1/3 bg-white rounded-xl border border-gray-100 \
                                                flex items-center justify-center p-6">
                                        <img
                                            src=product.image.clone()
                                            alt=product.title.clone()
                                            class="max-h-80 max-w-full object-contain"
                                        />
                                    </div>

                                    <div class="flex-1 space-y-4">
                                        <Badge variant="blue">{product.category.clone()}</Badge>

                                        <h1 class="text-3xl font-bold text-gray-900 leading-tight">
                                            {product.title.clone()}
                                        </h1>

                                        <div class="flex items-center gap-3">
                                            <StarRating rating=product.rating.rate />
                                            <span class="text-gray-500 text-sm">
                                                "(" {product.rating.count} " reviews)"
                                            </span>
                                        </div>

                                        <PriceDisplay price=product.price highlight=true />

                                        <p class="text-gray-600 leading-relaxed">
                                            {product.description.clone()}
                                        </p>

                                        <div class="flex gap-3 pt-4 border-t border-gray-100">
                                            <a
                                                href=edit_href
                                                class="px-4 py-2 bg-blue-600 text-white rounded-lg \
                                                       hover:bg-blue-700 transition-colors font-medium shadow-sm"
                                            >
                                                "Edit Product"
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
    #[test]
    fn test_route_param_parsing() {
        // The id derivation tolerates junk identifiers
        assert_eq!("7".parse::<i32>().ok(), Some(7));
        assert_eq!("abc".parse::<i32>().ok(), None);
        assert_eq!("".parse::<i32>().ok(), None);
    }

    #[test]
    fn test_edit_link_from_id() {
        let id = 3;
        assert_eq!(format!("/products/edit/{id}"), "/products/edit/3");
    }
}
