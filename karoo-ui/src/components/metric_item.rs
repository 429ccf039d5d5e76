//! Icon + content row used in the weather panel and the modals

use leptos::*;

#[component]
pub fn MetricItem(
    /// Emoji icon on the left
    icon: &'static str,
    /// Extra classes, e.g. a highlight background
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center gap-5 p-4 my-3 rounded-lg border border-slate-200 bg-slate-50 {}",
            class
        )>
            <span class="text-2xl shrink-0 text-slate-500">{icon}</span>
            <div class="flex-grow">{children()}</div>
        </div>
    }
}
