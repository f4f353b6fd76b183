//! Stat card component for displaying a labelled value.

use leptos::prelude::*;

/// A card with a label above its content.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    label: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            {children()}
        </div>
    }
}
