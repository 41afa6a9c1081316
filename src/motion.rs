/// Timing curve applied to the linear time fraction of an entrance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps `t` in `[0, 1]` onto the curve; input outside the range is clamped.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Entrance style for a revealed block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationKind {
    #[default]
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    ScaleIn,
}

const SLIDE_DISTANCE_PX: f64 = 50.0;
const SCALE_FROM: f64 = 0.8;

impl AnimationKind {
    /// Inline CSS for the given progress. Every kind also fades.
    pub fn style(&self, progress: f64) -> String {
        let p = progress.clamp(0.0, 1.0);
        let rest = 1.0 - p;
        let transform = match self {
            Self::FadeIn => "none".to_string(),
            Self::SlideUp => format!("translateY({:.2}px)", SLIDE_DISTANCE_PX * rest),
            // slides in from the left edge, moving right
            Self::SlideLeft => format!("translateX({:.2}px)", -SLIDE_DISTANCE_PX * rest),
            Self::SlideRight => format!("translateX({:.2}px)", SLIDE_DISTANCE_PX * rest),
            Self::ScaleIn => format!("scale({:.4})", SCALE_FROM + (1.0 - SCALE_FROM) * p),
        };
        format!("opacity: {p:.4}; transform: {transform}; will-change: opacity, transform;")
    }
}

/// Delay + duration + curve of a one-shot entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(delay_ms: u32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            delay_ms,
            duration_ms,
            easing,
        }
    }

    /// Eased progress `elapsed_ms` after the trigger.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        let running = elapsed_ms - f64::from(self.delay_ms);
        if running <= 0.0 {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.easing.apply(running / f64::from(self.duration_ms))
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.delay_ms) + f64::from(self.duration_ms)
    }
}

/// Turns animation-frame timestamps into tween progress.
///
/// The first frame after the trigger anchors the clock.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    tween: Tween,
    started_at: Option<f64>,
}

impl AnimationClock {
    pub fn new(tween: Tween) -> Self {
        Self {
            tween,
            started_at: None,
        }
    }

    /// Returns `(progress, finished)` for the frame at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> (f64, bool) {
        let start = *self.started_at.get_or_insert(now_ms);
        let elapsed = (now_ms - start).max(0.0);
        if self.tween.is_finished(elapsed) {
            (1.0, true)
        } else {
            (self.tween.progress_at(elapsed), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
        assert!((Easing::EaseInOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
        assert!(Easing::EaseInOutCubic.apply(0.25) < 0.25);
        assert!(Easing::EaseInOutCubic.apply(0.75) > 0.75);
    }

    #[test]
    fn tween_waits_for_delay() {
        let tween = Tween::new(200, 800, Easing::Linear);
        assert_eq!(tween.progress_at(0.0), 0.0);
        assert_eq!(tween.progress_at(200.0), 0.0);
        assert!((tween.progress_at(600.0) - 0.5).abs() < 1e-12);
        assert_eq!(tween.progress_at(1000.0), 1.0);
        assert!(!tween.is_finished(999.0));
        assert!(tween.is_finished(1000.0));
    }

    #[test]
    fn clock_anchors_on_first_frame() {
        let mut clock = AnimationClock::new(Tween::new(0, 800, Easing::Linear));
        assert_eq!(clock.tick(5_000.0), (0.0, false));
        let (progress, done) = clock.tick(5_400.0);
        assert!((progress - 0.5).abs() < 1e-12);
        assert!(!done);
        assert_eq!(clock.tick(5_800.0), (1.0, true));
        assert_eq!(clock.tick(9_000.0), (1.0, true));
    }

    #[test]
    fn styles_settle_at_identity() {
        assert_eq!(
            AnimationKind::SlideUp.style(1.0),
            "opacity: 1.0000; transform: translateY(0.00px); will-change: opacity, transform;"
        );
        assert_eq!(
            AnimationKind::ScaleIn.style(0.0),
            "opacity: 0.0000; transform: scale(0.8000); will-change: opacity, transform;"
        );
        assert!(AnimationKind::SlideLeft.style(0.0).contains("translateX(-50.00px)"));
        assert!(AnimationKind::SlideRight.style(0.0).contains("translateX(50.00px)"));
        assert!(AnimationKind::FadeIn.style(0.5).contains("transform: none"));
    }
}
