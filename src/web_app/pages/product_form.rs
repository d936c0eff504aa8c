// web_app/pages/product_form.rs - Add and edit product pages
//
// Both forms submit the writable product fields through a server function
// and report the outcome in a banner. Submits are fire-and-forget against
// the remote service; local state is not reconciled afterwards.

use crate::web_app::components::*;
use crate::web_app::model::ProductDraft;
use crate::web_app::server_fns::{create_product, get_product, update_product};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Parse the price input, rejecting negatives per the data model
fn parse_price(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value >= 0.0 => Ok(value),
        Ok(_) => Err("Price must not be negative".to_string()),
        Err(_) => Err("Price must be a number".to_string()),
    }
}

/// The shared field set for both product forms
#[component]
fn ProductFormFields(
    title: RwSignal<String>,
    price: RwSignal<String>,
    description: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <label class="block">
                <span class="text-sm font-medium text-gray-700 mb-1 block">"Title"</span>
                <TextInput value=title placeholder="Product title" />
            </label>
            <label class="block">
                <span class="text-sm font-medium text-gray-700 mb-1 block">"Price"</span>
                <TextInput value=price input_type="number" placeholder="0.00" />
            </label>
            <label class="block">
                <span class="text-sm font-medium text-gray-700 mb-1 block">"Description"</span>
                <TextArea value=description placeholder="Product description" />
            </label>
        </div>
    }
}

/// Add product page
#[component]
pub fn AddProductPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let validation = RwSignal::new(None::<String>);

    let submit = Action::new(|draft: &ProductDraft| {
        let draft = draft.clone();
        async move { create_product(draft).await }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        match parse_price(&price.get()) {
            Ok(value) => {
                validation.set(None);
                submit.dispatch(ProductDraft {
                    title: title.get(),
                    price: value,
                    description: description.get(),
                });
            }
            Err(message) => validation.set(Some(message)),
        }
    };

    view! {
        <div class="max-w-xl mx-auto px-4 py-8">
            <a href="/products" class="text-sm text-blue-600 hover:underline">
                "← Back to Products"
            </a>
            <h1 class="text-3xl font-bold text-gray-900 mt-2 mb-6">"Add Product"</h1>

            <div class="space-y-4 mb-6">
                {move || validation.get().map(|message| view! { <ErrorDisplay error=message /> })}
                {move || submit.value().get().map(|result| match result {
                    Ok(product) => view! {
                        <SuccessDisplay message=format!("Product \"{}\" submitted", product.title) />
                    }.into_any(),
                    Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                })}
            </div>

            <form on:submit=on_submit class="bg-white rounded-2xl border border-gray-100 shadow-sm p-6">
                <ProductFormFields title=title price=price description=description />
                <div class="mt-6">
                    <Button button_type="submit">
                        "Add Product"
                    </Button>
                </div>
            </form>
        </div>
    }
}

/// Edit product page
///
/// Loads the current record to prefill the form, then submits the edited
/// draft with PUT. A failed load renders the error banner instead of an
/// empty form.
#[component]
pub fn EditProductPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i32>().ok())
    });

    let title = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let validation = RwSignal::new(None::<String>);

    let existing = Resource::new(
        move || id.get(),
        |id| async move {
            match id {
                Some(id) => get_product(id).await,
                None => Err(ServerFnError::new("Invalid product id")),
            }
        },
    );

    // Prefill once the record arrives
    Effect::new(move || {
        if let Some(Ok(product)) = existing.get() {
            title.set(product.title);
            price.set(product.price.to_string());
            description.set(product.description);
        }
    });

    let submit = Action::new(|input: &(i32, ProductDraft)| {
        let (id, draft) = input.clone();
        async move { update_product(id, draft).await }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = id.get_untracked() else {
            return;
        };
        match parse_price(&price.get()) {
            Ok(value) => {
                validation.set(None);
                submit.dispatch((
                    id,
                    ProductDraft {
                        title: title.get(),
                        price: value,
                        description: description.get(),
                    },
                ));
            }
            Err(message) => validation.set(Some(message)),
        }
    };

    view! {
        <div class="max-w-xl mx-auto px-4 py-8">
            <a href="/products" class="text-sm text-blue-600 hover:underline">
                "← Back to Products"
            </a>
            <h1 class="text-3xl font-bold text-gray-900 mt-2 mb-6">"Edit Product"</h1>

            <Suspense fallback=move || view! { <Loading message="Loading product..." /> }>
                {move || match existing.get() {
                    None => view! { <Loading message="Loading product..." /> }.into_any(),
                    Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                    Some(Ok(_)) => view! {
                        <div class="space-y-4 mb-6">
                            {move || validation.get().map(|message| view! { <ErrorDisplay error=message /> })}
                            {move || submit.value().get().map(|result| match result {
                                Ok(product) => view! {
                                    <SuccessDisplay message=format!("Product \"{}\" updated", product.title) />
                                }.into_any(),
                                Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                            })}
                        </div>

                        <form on:submit=on_submit class="bg-white rounded-2xl border border-gray-100 shadow-sm p-6">
                            <ProductFormFields title=title price=price description=description />
                            <div class="mt-6">
                                <Button button_type="submit">
                                    "Update Product"
                                </Button>
                            </div>
                        </form>
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
