#![recursion_limit = "256"]
// lib.rs - Root module for the store-admin library
//
// The crate compiles two ways:
// - natively with the `ssr` feature for the actix-web server binary
// - to WASM with the `hydrate` feature for client-side hydration of the
//   server-rendered markup

/// The fixtures module contains reusable sample data for tests
pub mod fixtures;

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        /// WASM entry point for client-side hydration
        #[wasm_bindgen::prelude::wasm_bindgen]
        pub fn hydrate() {
            use crate::web_app::App;

            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(App);
        }
    }
}
