//! Starfield Background Component
//!
//! Nebula pulse, three static star layers and timed shooting stars. The
//! parallax variant shifts each layer against the pointer; the ambient
//! variant ignores it.

use lib_starfield::rng::seeded;
use lib_starfield::scene::NEBULA_CLASS;
use lib_starfield::{
    LayerDepth, ShootingStar, SpriteView, StarfieldConfig, StarfieldModel, Variant,
};
use leptos::ev;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::state::ShootingStarDriver;
use crate::utils::{current_viewport, random_seed};

#[component]
pub fn Starfield(
    /// Preset used when no `config` is given.
    #[prop(optional)]
    variant: Variant,
    #[prop(optional)] config: Option<StarfieldConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_else(|| variant.preset());
    let variant = config.variant;
    let tracks_pointer = variant.tracks_pointer();

    let mut rng = seeded(random_seed());

    // Layers are generated here, once per mount. Pointer moves only change
    // the model's pointer, which re-runs the layer transforms.
    let model = RwSignal::new(StarfieldModel::new(variant, &mut rng));
    if tracks_pointer {
        let listener = window_event_listener(ev::mousemove, move |event| {
            let viewport = current_viewport();
            model.maybe_update(|model| {
                model.on_pointer_move(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    viewport,
                )
            });
        });
        on_cleanup(move || listener.remove());
    }

    let (live, set_live) = signal(Vec::<ShootingStar>::new());
    let driver = SendWrapper::new(ShootingStarDriver::start(config, rng, move |stars| {
        set_live.set(stars)
    }));
    on_cleanup(move || {
        let cancelled = driver.borrow_mut().teardown();
        log::debug!("Starfield cleanup cancelled {cancelled} timers");
    });

    let layer_views = model
        .with_untracked(|model| {
            LayerDepth::ALL.map(|depth| {
                let layer = model.layer_view(depth);
                (depth, layer.class(), layer.dots_style())
            })
        })
        .into_iter()
        .map(|(depth, class, dots_style)| {
            let transform = move || {
                model.with(|model| {
                    model
                        .layer_view(depth)
                        .transform
                        .map(|transform| format!("transform: {transform};"))
                        .unwrap_or_default()
                })
            };
            view! {
                <div class=class style=transform>
                    <div class="star-dots" style=dots_style></div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=format!("starfield starfield--{}", variant.as_str()) aria-hidden="true">
            <div class=NEBULA_CLASS></div>
            {layer_views}
            <For
                each=move || live.get()
                key=|star: &ShootingStar| star.id
                children=move |star: ShootingStar| {
                    let sprite = SpriteView::from(&star);
                    view! {
                        <span class="shooting-star" data-star=sprite.id.to_string() style=sprite.style></span>
                    }
                }
            />
        </div>
    }
}
