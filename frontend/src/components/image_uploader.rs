//! Product main-image uploader.
//!
//! Pick an image, preview it locally, upload it to the product's
//! `upload_main_image` endpoint and report the result inline.

use leptos::*;
use serde_json::Value;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::{ACCEPTED_IMAGE_TYPES, DEFAULT_API_BASE_URL};
use crate::services::HttpTransport;
use crate::state::{helper_text, perform_upload, UploaderState};
use crate::UploadTarget;

#[component]
pub fn ProductImageUploader(
    /// Product receiving the image. Uploads are disabled while empty.
    #[prop(into)]
    product_id: MaybeSignal<String>,
    /// Bearer token sent with the upload, may be empty.
    #[prop(into)]
    token: MaybeSignal<String>,
    /// Backend API base URL, defaults to [`DEFAULT_API_BASE_URL`].
    #[prop(optional, into)]
    api_base_url: Option<String>,
    /// Called with the parsed JSON body after a successful upload.
    #[prop(optional, into)]
    on_uploaded: Option<Callback<Value>>,
    /// Extra classes for the outer container.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let api_base_url = api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let product_id = Signal::derive(move || product_id.get());
    let token = Signal::derive(move || token.get());

    let state = create_rw_signal(UploaderState::<File>::new());

    let preview_src = move || state.with(|s| s.preview_src().map(str::to_string));
    let can_upload = move || product_id.with(|id| state.with(|s| s.can_upload(id)));

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let picked = input.files().and_then(|files| files.get(0));
        state.update(|s| s.select(picked));
    };

    let on_upload = move |_| {
        let target = UploadTarget::new(
            api_base_url.clone(),
            product_id.get_untracked(),
            token.get_untracked(),
        );
        let on_uploaded = on_uploaded.map(|callback| move |body: Value| callback.call(body));

        spawn_local(async move {
            perform_upload(&state, &HttpTransport, &target, on_uploaded).await;
        });
    };

    view! {
        <div class=move || format!(
            "border rounded-md p-3 bg-white {} {}",
            state.with(|s| s.status().css_class()),
            class,
        )>
            <div class="flex items-start gap-3">
                <div class="w-28 h-28 flex-shrink-0 border rounded-md bg-gray-50 overflow-hidden flex items-center justify-center">
                    {move || match preview_src() {
                        Some(src) => view! {
                            <img src=src alt="preview" class="w-full h-full object-cover"/>
                        }.into_view(),
                        None => view! {
                            <span class="text-xs text-gray-400">"No image"</span>
                        }.into_view(),
                    }}
                </div>
                <div class="flex-1">
                    <input
                        type="file"
                        accept=ACCEPTED_IMAGE_TYPES
                        on:change=on_file_change
                        class="block w-full text-sm text-gray-700 file:mr-3 file:py-2 file:px-3 file:rounded-md file:border-0 file:text-sm file:font-medium file:bg-blue-50 file:text-blue-700 hover:file:bg-blue-100"
                    />
                    <div class="mt-2 flex items-center gap-2">
                        <button
                            on:click=on_upload
                            disabled=move || !can_upload()
                            class=move || if can_upload() {
                                "px-4 py-2 rounded-md text-white text-sm bg-blue-600 hover:bg-blue-700"
                            } else {
                                "px-4 py-2 rounded-md text-white text-sm bg-gray-300"
                            }
                        >
                            {move || state.with(|s| s.button_label())}
                        </button>
                        {move || state.with(|s| s.message().cloned()).map(|msg| view! {
                            <span
                                class=msg.css_class()
                                role=if msg.is_error() { "alert" } else { "status" }
                            >
                                {msg.text().to_string()}
                            </span>
                        })}
                    </div>
                    {move || product_id.with(|id| helper_text(id)).map(|text| view! {
                        <div class="mt-2 text-xs text-gray-500">{text}</div>
                    })}
                </div>
            </div>
        </div>
    }
}
