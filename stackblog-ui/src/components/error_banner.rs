//! Error Banner Component

use leptos::*;

/// Terminal error message; recovery is a page reload
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-100 border-l-4 border-red-500 text-red-700 p-4 rounded-md" role="alert">
            <p class="font-bold">"Error"</p>
            <p>{message}</p>
        </div>
    }
}
