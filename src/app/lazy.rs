use leptos::{either::*, html, prelude::*};

use super::viewport::{measure_top, use_viewport};
use crate::config::MotionConfig;
use crate::latch::{ImageLoad, MountGate, MountState};
use crate::visibility::LoadAhead;

const IMAGE_FADE_MS: u32 = 500;

/// Handle on a mount latch driven by the shared viewport.
#[derive(Debug, Clone, Copy)]
pub struct LazyMount {
    gate: StoredValue<MountGate>,
    state: RwSignal<MountState>,
}

impl LazyMount {
    pub fn state(&self) -> MountState {
        self.state.get()
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.state.get(), MountState::Mounted(_))
    }

    /// Records an image load outcome. A no-op once the wrapper has been torn down.
    pub fn resolve(&self, outcome: ImageLoad) {
        if let Some(next) = self.gate.try_update_value(|g| g.resolve(outcome)) {
            let _ = self.state.try_set(next);
        }
    }
}

pub fn use_lazy_mount(node_ref: NodeRef<html::Div>, gate: MountGate) -> LazyMount {
    let viewport = use_viewport();
    let gate = StoredValue::new(gate);
    let state = RwSignal::new(MountState::Placeholder);

    Effect::new(move |_| {
        // mounted gates stop measuring and stop listening to the viewport
        if gate.with_value(MountGate::is_mounted) {
            return;
        }
        let Some(el) = node_ref.get() else {
            return;
        };
        let current = viewport.get();
        let top = measure_top(&el, current);
        let mut fired = false;
        gate.update_value(|g| fired = g.observe(top, current));
        if fired {
            log::debug!("mounting lazy content at {top:?}");
            state.set(gate.with_value(MountGate::state));
        }
    });

    LazyMount { gate, state }
}

fn load_ahead_or_default(config: &MotionConfig, load_ahead: Option<f64>) -> LoadAhead {
    load_ahead
        .map(|a| {
            LoadAhead::new(a)
                .inspect_err(|e| log::warn!("ignoring load-ahead: {e}"))
                .unwrap_or(config.load_ahead)
        })
        .unwrap_or(config.load_ahead)
}

/// Defers building `children` until the section is within reach of the viewport.
///
/// The wrapper keeps `min_height` in both states so mounting alone never shifts layout.
#[component]
pub fn LazySection(
    /// Any CSS length, e.g. `"600px"` or `"80vh"`.
    #[prop(into)]
    min_height: String,
    #[prop(optional)] load_ahead: Option<f64>,
    #[prop(optional, into)] id: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let node_ref = NodeRef::<html::Div>::new();
    let lazy = use_lazy_mount(
        node_ref,
        MountGate::section(load_ahead_or_default(&config, load_ahead)),
    );
    let reserved = format!("min-height: {min_height};");

    view! {
        <div node_ref=node_ref id=id style=reserved class="w-full scroll-mt-20">
            {move || {
                if lazy.is_mounted() {
                    Either::Left(children())
                } else {
                    Either::Right(view! { <Skeleton height=min_height.clone() /> })
                }
            }}
        </div>
    }
}

#[component]
fn Skeleton(height: String) -> impl IntoView {
    view! {
        <div
            class="loading-skeleton rounded-lg w-full"
            style=format!("height: {height};")
            aria-hidden="true"
        ></div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImagePhase {
    Placeholder,
    Image,
    Broken,
}

/// Lazily loaded image that reserves its intrinsic box and fades in once decoded.
///
/// A failed load keeps the box and shows a broken-image marker instead.
#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    width: u32,
    height: u32,
    #[prop(optional)] load_ahead: Option<f64>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let div_ref = NodeRef::<html::Div>::new();
    let lazy = use_lazy_mount(
        div_ref,
        MountGate::image(load_ahead_or_default(&config, load_ahead)),
    );
    // Pending -> Loaded must not rebuild the <img>, so only the phase is tracked here
    let phase = Memo::new(move |_| match lazy.state() {
        MountState::Placeholder => ImagePhase::Placeholder,
        MountState::Mounted(ImageLoad::Failed) => ImagePhase::Broken,
        MountState::Mounted(_) => ImagePhase::Image,
    });
    let loaded = move || lazy.state() == MountState::Mounted(ImageLoad::Loaded);

    view! {
        <div
            node_ref=div_ref
            class=format!("relative w-full overflow-hidden {class}")
            style=format!("aspect-ratio: {width} / {height}; max-width: {width}px;")
        >
            {move || match phase.get() {
                ImagePhase::Placeholder => {
                    EitherOf3::A(
                        view! { <div class="absolute inset-0 loading-skeleton" aria-hidden="true"></div> },
                    )
                }
                ImagePhase::Image => {
                    EitherOf3::B(
                        view! {
                            <img
                                src=src.clone()
                                alt=alt.clone()
                                width=width.to_string()
                                height=height.to_string()
                                decoding="async"
                                class="absolute inset-0 w-full h-full object-cover"
                                style=move || {
                                    format!(
                                        "opacity: {}; transition: opacity {IMAGE_FADE_MS}ms ease-in-out;",
                                        if loaded() { 1 } else { 0 },
                                    )
                                }
                                on:load=move |_| lazy.resolve(ImageLoad::Loaded)
                                on:error=move |_| {
                                    log::warn!("image failed to load");
                                    lazy.resolve(ImageLoad::Failed)
                                }
                            />
                        },
                    )
                }
                ImagePhase::Broken => {
                    EitherOf3::C(
                        view! {
                            <div
                                class="absolute inset-0 flex flex-col items-center justify-center gap-2 border border-dashed border-pink-500/60 bg-black/60 text-pink-400 text-sm"
                                role="img"
                                aria-label=alt.clone()
                            >
                                <span class="text-2xl">"⚠"</span>
                                <span class="px-4 text-center">{alt.clone()}</span>
                            </div>
                        },
                    )
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_ahead_override_falls_back_to_page_default() {
        let config = MotionConfig::new(0.8, 1.5, 800, 0).unwrap();
        assert_eq!(load_ahead_or_default(&config, None).get(), 1.5);
        assert_eq!(load_ahead_or_default(&config, Some(2.0)).get(), 2.0);
        assert_eq!(load_ahead_or_default(&config, Some(-1.0)).get(), 1.5);
        assert_eq!(load_ahead_or_default(&config, Some(f64::NAN)).get(), 1.5);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn section_placeholder_reserves_min_height() {
        use crate::app::render_with_page_context;

        let html = render_with_page_context(|| {
            view! {
                <LazySection min_height="900px" id="career">
                    <p>"deferred body"</p>
                </LazySection>
            }
        });
        assert!(html.contains("min-height: 900px;"));
        assert!(html.contains("height: 900px;"));
        assert!(html.contains("loading-skeleton"));
        assert!(!html.contains("deferred body"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn image_placeholder_reserves_intrinsic_box() {
        use crate::app::render_with_page_context;

        let html = render_with_page_context(|| {
            view! { <LazyImage src="/shot.png" alt="screenshot" width=640 height=360 /> }
        });
        assert!(html.contains("aspect-ratio: 640 / 360; max-width: 640px;"));
        assert!(html.contains("loading-skeleton"));
        assert!(!html.contains("<img"));
    }
}
