//! Tooltip Component
//!
//! Renders its children and, while `visible`, a floating text box after
//! them. Placement is up to the parent's layout.

use lib_starfield::tooltip;
use leptos::prelude::*;

#[component]
pub fn Tooltip(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] content: String,
    /// Extra classes appended after the base `tooltip` class.
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay = move || {
        tooltip::overlay(visible.get(), &content, class.as_deref()).map(|tip| {
            let style = tip.style();
            view! {
                <div class=tip.class role="tooltip" style=style>
                    {tip.content.to_string()}
                </div>
            }
        })
    };

    view! {
        {children()}
        {overlay}
    }
}
