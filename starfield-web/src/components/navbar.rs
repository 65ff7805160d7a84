//! Navigation Bar Component - Space Theme

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::Tooltip;

#[component]
pub fn Navbar() -> impl IntoView {
    let (parallax_hint, set_parallax_hint) = signal(false);
    let (ambient_hint, set_ambient_hint) = signal(false);

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Starfield"</span>
                </A>
                <div class="nav-links">
                    <span
                        class="tooltip-anchor"
                        on:mouseenter=move |_| set_parallax_hint.set(true)
                        on:mouseleave=move |_| set_parallax_hint.set(false)
                    >
                        <Tooltip visible=parallax_hint content="Star layers drift against the pointer">
                            <A href="/">"Parallax"</A>
                        </Tooltip>
                    </span>
                    <span
                        class="tooltip-anchor"
                        on:mouseenter=move |_| set_ambient_hint.set(true)
                        on:mouseleave=move |_| set_ambient_hint.set(false)
                    >
                        <Tooltip visible=ambient_hint content="A calm sky with one shooting star a minute">
                            <A href="/ambient">"Ambient"</A>
                        </Tooltip>
                    </span>
                </div>
            </div>
        </nav>
    }
}
