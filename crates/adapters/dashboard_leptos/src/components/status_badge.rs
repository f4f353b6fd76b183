//! Status indicator rendered from a badge display value.

use leptos::prelude::*;

use nodewatch_domain::display::Badge;

/// A badge (`<span class="{base} {state}">`) plus its optional detail line.
/// Connection badges lead with a coloured dot.
///
/// Renders nothing until the first value arrives.
#[component]
pub fn StatusBadge(
    /// DOM id of the container.
    id: &'static str,
    /// CSS class shared by every state of this badge.
    base: &'static str,
    badge: Signal<Option<Badge>>,
) -> impl IntoView {
    view! {
        <div id=id>
            {move || {
                badge
                    .get()
                    .map(|badge| {
                        let class = format!("{base} {}", badge.state.css_class());
                        let dot = badge
                            .state
                            .has_indicator()
                            .then(|| view! { <span class="dot"></span> });
                        view! {
                            <span class=class>
                                {dot}
                                {badge.label}
                            </span>
                            {badge.detail.map(|detail| view! { <div class="stat-sub">{detail}</div> })}
                        }
                    })
            }}
        </div>
    }
}
