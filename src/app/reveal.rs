use leptos::{html, prelude::*};
use leptos_use::{use_raf_fn_with_options, utils::Pausable, UseRafFnCallbackArgs, UseRafFnOptions};

use super::viewport::{measure_top, use_viewport};
use crate::config::MotionConfig;
use crate::latch::RevealGate;
use crate::motion::{AnimationClock, AnimationKind, Tween};
use crate::visibility::RevealThreshold;

#[derive(Debug, Clone, Copy)]
pub struct RevealOptions {
    pub threshold: RevealThreshold,
    pub tween: Tween,
}

impl RevealOptions {
    /// Page defaults with optional per-wrapper overrides.
    ///
    /// An invalid threshold is logged and replaced by the page default.
    pub fn resolve(config: &MotionConfig, threshold: Option<f64>, delay_ms: Option<u32>) -> Self {
        let threshold = threshold
            .map(|t| {
                RevealThreshold::new(t)
                    .inspect_err(|e| log::warn!("ignoring reveal threshold: {e}"))
                    .unwrap_or(config.reveal_threshold)
            })
            .unwrap_or(config.reveal_threshold);
        Self {
            threshold,
            tween: Tween::new(
                delay_ms.unwrap_or(config.delay_ms),
                config.duration_ms,
                config.easing,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub triggered: ReadSignal<bool>,
    /// 0 until triggered, then eases to 1 over the configured duration.
    pub progress: ReadSignal<f64>,
}

/// Watches `node_ref` and fires a one-shot entrance once it scrolls into view.
pub fn use_reveal(node_ref: NodeRef<html::Div>, options: RevealOptions) -> Reveal {
    let viewport = use_viewport();
    let gate = StoredValue::new(RevealGate::new(options.threshold));
    let clock = StoredValue::new(AnimationClock::new(options.tween));
    let (triggered, set_triggered) = signal(false);
    let (progress, set_progress) = signal(0.0_f64);
    let (finished, set_finished) = signal(false);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let mut frame = (0.0, false);
            clock.update_value(|c| frame = c.tick(args.timestamp));
            let (p, done) = frame;
            set_progress.set(p);
            if done {
                set_finished.set(true);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if finished.get() {
            pause();
        }
    });

    Effect::new(move |_| {
        // once triggered nothing below is read, so this effect drops its subscriptions
        if gate.with_value(RevealGate::is_triggered) {
            return;
        }
        let Some(el) = node_ref.get() else {
            return;
        };
        let state = viewport.get();
        let top = measure_top(&el, state);
        let mut fired = false;
        gate.update_value(|g| fired = g.observe(top, state));
        if fired {
            log::debug!("revealed element at {top:?}");
            set_triggered.set(true);
            resume();
        }
    });

    Reveal {
        triggered,
        progress,
    }
}

/// Wraps content in a one-shot entrance animation.
///
/// The outer box is the one measured and is never transformed; the entrance
/// style goes on an inner box so the offset cannot move the measured top.
#[component]
pub fn AnimatedSection(
    #[prop(optional)] animation: AnimationKind,
    /// Milliseconds between the trigger and the start of the entrance.
    #[prop(optional)]
    delay: Option<u32>,
    #[prop(optional)] threshold: Option<f64>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let node_ref = NodeRef::<html::Div>::new();
    let Reveal {
        triggered,
        progress,
    } = use_reveal(node_ref, RevealOptions::resolve(&config, threshold, delay));

    view! {
        <div node_ref=node_ref id=id class=class data-revealed=move || triggered.get().to_string()>
            <div style=move || animation.style(progress.get())>{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_fall_back_to_page_defaults() {
        let config = MotionConfig::new(0.8, 1.5, 600, 50).unwrap();
        let options = RevealOptions::resolve(&config, None, None);
        assert_eq!(options.threshold.get(), 0.8);
        assert_eq!(options.tween.delay_ms, 50);
        assert_eq!(options.tween.duration_ms, 600);

        let options = RevealOptions::resolve(&config, Some(0.3), Some(200));
        assert_eq!(options.threshold.get(), 0.3);
        assert_eq!(options.tween.delay_ms, 200);

        let options = RevealOptions::resolve(&config, Some(4.0), None);
        assert_eq!(options.threshold.get(), 0.8);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn measured_box_carries_no_transform() {
        use crate::app::render_with_page_context;

        let html = render_with_page_context(|| {
            view! {
                <AnimatedSection animation=AnimationKind::SlideUp id="about">
                    <p>"hello"</p>
                </AnimatedSection>
            }
        });
        let measured = html
            .split('>')
            .find(|tag| tag.contains("data-revealed"))
            .expect("measured wrapper is rendered");
        assert!(measured.contains(r#"id="about""#));
        assert!(!measured.contains("transform"));
        assert!(html.contains("translateY(50.00px)"));
        assert!(html.contains("hello"));
    }
}
