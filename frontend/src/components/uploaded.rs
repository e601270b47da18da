//! Card showing the backend's reply to the last successful upload.

use leptos::*;
use serde_json::Value;

use crate::UploadedImage;

/// A successful upload as seen by the host app.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadRecord {
    pub product_id: String,
    pub body: Value,
    /// Local time (HH:MM:SS)
    pub uploaded_at: String,
}

impl UploadRecord {
    pub fn new(product_id: String, body: Value) -> Self {
        Self {
            product_id,
            body,
            uploaded_at: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn image_url(&self) -> Option<String> {
        UploadedImage::from_value(&self.body).and_then(|image| image.image_url)
    }

    pub fn pretty_body(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}

#[component]
pub fn UploadedImageCard(record: ReadSignal<Option<UploadRecord>>) -> impl IntoView {
    move || {
        record.get().map(|record| {
            let image = record.image_url().map(|url| {
                view! {
                    <a href=url.clone() target="_blank">
                        <img src=url alt="uploaded main image" class="uploaded-thumb"/>
                    </a>
                }
            });

            view! {
                <div class="uploaded-card">
                    <div class="uploaded-title">
                        "✅ Product " {record.product_id.clone()} " updated at " {record.uploaded_at.clone()}
                    </div>
                    {image}
                    <pre class="uploaded-json">{record.pretty_body()}</pre>
                </div>
            }
        })
    }
}
