//! Starfield demo app
//!
//! `/` shows the parallax variant, `/ambient` the ambient one.

use lib_starfield::Variant;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::pages::ShowcasePage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=|| view! { <ShowcasePage variant=Variant::Parallax/> }/>
                    <Route path=path!("/ambient") view=|| view! { <ShowcasePage variant=Variant::Ambient/> }/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="showcase">
            <div class="card">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="card-text">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
