//! Header Component
//!
//! Site title and tagline.

use leptos::*;

use crate::state::use_blog_state;

/// Page header
#[component]
pub fn Header() -> impl IntoView {
    let site = use_blog_state().site.get_value();

    view! {
        <header class="bg-white shadow-md">
            <div class="container mx-auto p-4 md:p-6 flex justify-between items-center">
                <h1 class="text-2xl md:text-3xl font-bold text-slate-900">{site.title}</h1>
                <p class="text-slate-500">{site.tagline}</p>
            </div>
        </header>
    }
}
