use leptos::*;

/// Top bar showing whether a session token was found.
#[component]
pub fn Header(
    /// Token the host will hand to the uploader
    token: String,
) -> impl IntoView {
    let signed_in = !token.is_empty();

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"OOX"</a>
                <span class="badge">"Orders"</span>
            </div>
            <div class="header-right">
                <div class="session-status" class:connected=signed_in>
                    <span class="session-dot" class:connected=signed_in></span>
                    <span>
                        {if signed_in { "Signed in" } else { "No session token" }}
                    </span>
                </div>
            </div>
        </header>
    }
}
