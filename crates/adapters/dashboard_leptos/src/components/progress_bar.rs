use leptos::prelude::*;

/// Horizontal track whose fill width follows `width` (a CSS percentage).
#[component]
pub fn ProgressBar(id: &'static str, width: Signal<String>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div id=id class="progress-fill" style:width=move || width.get()></div>
        </div>
    }
}
