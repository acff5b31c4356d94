//! Post Detail Component

use leptos::*;

use stackblog::ViewEvent;

use crate::state::use_blog_state;

/// A single post.
///
/// The body is inserted as trusted HTML. A stack whose authors are not fully
/// trusted can inject script here.
#[component]
pub fn PostDetail(
    back_label: &'static str,
    #[prop(into)]
    title: String,
    #[prop(into)]
    body_html: String,
) -> impl IntoView {
    let state = use_blog_state();

    view! {
        <div class="bg-white p-6 md:p-8 rounded-lg shadow-lg max-w-4xl mx-auto">
            <button
                on:click=move |_| {
                    state.dispatch(ViewEvent::Back);
                }
                class="mb-6 text-blue-600 hover:text-blue-800 transition-colors"
            >
                {back_label}
            </button>
            <article>
                <h2 class="text-4xl font-extrabold mb-4 text-slate-900">{title}</h2>
                <div class="prose lg:prose-xl max-w-none" inner_html=body_html />
            </article>
        </div>
    }
}
