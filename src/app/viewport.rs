use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::viewport::{ElementTop, ViewportState};

/// Shared scroll offset and viewport height for every wrapper on the page.
///
/// The window listeners are the only writers. They are removed when the
/// reactive owner that created the tracker is disposed.
#[derive(Debug, Clone, Copy)]
pub struct ViewportTracker {
    state: RwSignal<ViewportState>,
}

impl ViewportTracker {
    pub fn new() -> Self {
        // read synchronously so the first evaluation already has real metrics
        let state = RwSignal::new(read_window());

        let _ = use_event_listener(use_window(), ev::scroll, move |_| {
            state.set(read_window());
        });
        let _ = use_event_listener(use_window(), ev::resize, move |_| {
            state.set(read_window());
        });
        let _ = use_event_listener(
            use_window(),
            ev::Custom::<web_sys::Event>::new("orientationchange"),
            move |_| {
                state.set(read_window());
            },
        );

        Self { state }
    }

    /// Tracked read: the calling effect re-runs on the next scroll or resize.
    pub fn get(&self) -> ViewportState {
        self.state.get()
    }
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_viewport() -> ViewportTracker {
    let tracker = ViewportTracker::new();
    provide_context(tracker);
    tracker
}

pub fn use_viewport() -> ViewportTracker {
    expect_context::<ViewportTracker>()
}

/// Document-space top of `el` under the given viewport.
pub fn measure_top(el: &web_sys::Element, viewport: ViewportState) -> ElementTop {
    let rect = el.get_bounding_client_rect();
    ElementTop::from_client_rect(rect.top(), viewport)
}

#[cfg(feature = "hydrate")]
fn read_window() -> ViewportState {
    let window = window();
    let scroll_y = window.scroll_y().unwrap_or_default();
    let inner_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    ViewportState::from_window_metrics(scroll_y, inner_height)
}

#[cfg(not(feature = "hydrate"))]
fn read_window() -> ViewportState {
    // no window while rendering on the server; every element is unmeasured anyway
    ViewportState::default()
}
