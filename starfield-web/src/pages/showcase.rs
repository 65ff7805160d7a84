//! Showcase Page - one starfield variant behind a short description card

use lib_starfield::Variant;
use leptos::prelude::*;

use crate::components::{Starfield, Tooltip};
use crate::utils::starfield_config;

#[component]
pub fn ShowcasePage(variant: Variant) -> impl IntoView {
    let config = starfield_config(variant);
    let (show_details, set_show_details) = signal(false);

    let (title, blurb) = match config.variant {
        Variant::Parallax => (
            "Parallax Starfield",
            "Move the pointer: near stars shift further than distant ones.",
        ),
        Variant::Ambient => (
            "Ambient Starfield",
            "No interaction. Watch for the occasional shooting star.",
        ),
    };
    let details = format!(
        "First star after {}ms, then every {}ms with probability {}; each star lives {}ms.",
        config.initial_delay_ms, config.interval_ms, config.spawn_probability, config.display_ms
    );

    view! {
        <Starfield config=config/>
        <div class="showcase">
            <div class="card">
                <h1 class="card-title">{title}</h1>
                <p class="card-text">{blurb}</p>
                <span class="tooltip-anchor">
                    <Tooltip visible=show_details content=details>
                        <button
                            class="btn"
                            on:mouseenter=move |_| set_show_details.set(true)
                            on:mouseleave=move |_| set_show_details.set(false)
                            on:focus=move |_| set_show_details.set(true)
                            on:blur=move |_| set_show_details.set(false)
                        >
                            "Timing"
                        </button>
                    </Tooltip>
                </span>
            </div>
        </div>
    }
}
