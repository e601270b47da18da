//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Product Images"</h1>
            <p class="subtitle">
                "Choose a product, pick an image up to 5 MB and upload it as the product's main image."
            </p>
        </div>
    }
}
