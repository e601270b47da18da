//! Product Image Uploader - Leptos WebAssembly widget
//!
//! Lets a user pick an image, preview it locally and upload it as a
//! product's main image, reporting success or failure inline.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (host)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (session status)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero                                                    │
//! │  ├── product id input                                        │
//! │  ├── ProductImageUploader ──► services::upload (gloo-net)    │
//! │  │      └── state::UploaderState                             │
//! │  └── UploadedImageCard (last on_uploaded body)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Constants and endpoint construction
//! - [`types`] - Status, request and error types
//! - [`state`] - Selection/upload state machine
//! - [`components`] - UI components
//! - [`services`] - File access, upload transport, session token

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use serde_json::Value;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Status
    StatusMessage, UploadStatus,
    // Requests
    HttpReply, UploadOutcome, UploadTarget, UploadedImage,
    // Errors
    AppError, AppResult,
};

// State
pub use state::UploaderState;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Product Image Uploader - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Product Images"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                    <Route path="/products/:id" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let params = use_params_map();
    let route_product = move || params.with(|p| p.get("id").cloned());

    // The host owns the session; the uploader only receives the token.
    let token = stored_access_token().unwrap_or_default();
    if token.is_empty() {
        log::warn!("⚠️ No access token in localStorage, uploads will be anonymous");
    }

    let (product_id, set_product_id) = create_signal(
        untrack(route_product).unwrap_or_else(|| DEMO_PRODUCT_ID.to_string()),
    );
    let (last_upload, set_last_upload) = create_signal(None::<UploadRecord>);

    // Follow /products/:id navigation; the input can still override it.
    create_effect(move |_| {
        let current = product_id.get_untracked();
        if let Some(id) = routed_product_change(route_product(), &current) {
            set_product_id.set(id);
            set_last_upload.set(None);
        }
    });

    let on_uploaded = move |body: Value| {
        log::info!("🖼️ Backend accepted image for product {}", product_id.get_untracked());
        set_last_upload.set(Some(UploadRecord::new(product_id.get_untracked(), body)));
    };

    view! {
        <Header token=token.clone()/>

        <div class="container">
            <Hero/>

            <label class="product-field">
                "Product ID "
                <input
                    type="text"
                    prop:value=product_id
                    on:input=move |ev| {
                        set_product_id.set(event_target_value(&ev).trim().to_string());
                        set_last_upload.set(None);
                    }
                />
            </label>

            <ProductImageUploader
                product_id=product_id
                token=token
                on_uploaded=on_uploaded
                class="mt-4"
            />

            <UploadedImageCard record=last_upload/>
        </div>

        <Footer/>
    }
}

/// New product id to apply after a route change, if any.
fn routed_product_change(route_id: Option<String>, current: &str) -> Option<String> {
    route_id.filter(|id| !id.is_empty() && id != current)
}
