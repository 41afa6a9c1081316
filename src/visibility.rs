//! Pure visibility decisions for the reveal and lazy-mount wrappers.
//!
//! Every check takes the element's cached [`ElementTop`] and a [`ViewportState`]
//! snapshot. An unmeasured element is never visible, so nothing renders eagerly
//! before the first layout pass.

use crate::config::{ConfigError, DEFAULT_LOAD_AHEAD, DEFAULT_REVEAL_THRESHOLD};
use crate::viewport::{ElementTop, ViewportState};

/// Fraction of the viewport height, in `(0, 1]`, used by the reveal check.
///
/// The reveal line sits at `height * (1 - threshold)` below the top of the viewport,
/// so lower values reveal earlier.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RevealThreshold(f64);

impl RevealThreshold {
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::RevealThreshold(value))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for RevealThreshold {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_THRESHOLD)
    }
}

/// How many viewport heights ahead of the visible area lazy content starts mounting.
///
/// May exceed `1.0`: `1.5` means "start one and a half screens early".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LoadAhead(f64);

impl LoadAhead {
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::LoadAhead(value))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    /// Buffer in pixels for the given viewport.
    pub fn buffer(&self, viewport: ViewportState) -> f64 {
        f64::from(viewport.viewport_height) * self.0
    }
}

impl Default for LoadAhead {
    fn default() -> Self {
        Self(DEFAULT_LOAD_AHEAD)
    }
}

/// Which bounds the proximity check applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Proximity {
    /// Only "not yet too far below": used for whole page sections.
    #[default]
    Ahead,
    /// Both below and above the viewport: used for images.
    Window,
}

/// True once the element's top has crossed `threshold` of the way up the viewport.
///
/// `top < scroll + height - height * threshold`, strictly.
pub fn should_reveal(top: ElementTop, viewport: ViewportState, threshold: RevealThreshold) -> bool {
    let Some(top) = top.px() else {
        return false;
    };
    let height = f64::from(viewport.viewport_height);
    let line = viewport.bottom() as f64 - height * threshold.get();
    f64::from(top) < line
}

/// True when the element is within `ahead` viewport heights of the visible area.
pub fn is_near(
    top: ElementTop,
    viewport: ViewportState,
    ahead: LoadAhead,
    proximity: Proximity,
) -> bool {
    let Some(top) = top.px() else {
        return false;
    };
    let top = f64::from(top);
    let buffer = ahead.buffer(viewport);
    let below = top < viewport.bottom() as f64 + buffer;
    match proximity {
        Proximity::Ahead => below,
        Proximity::Window => below && top > f64::from(viewport.scroll_position) - buffer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reveal(top: i32, scroll: i32, height: i32, threshold: f64) -> bool {
        should_reveal(
            ElementTop::Measured(top),
            ViewportState::new(scroll, height),
            RevealThreshold::new(threshold).unwrap(),
        )
    }

    #[test]
    fn reveal_boundary_is_strict() {
        // 500 < scroll + 800 - 640  <=>  scroll > 340
        assert!(!reveal(500, 339, 800, 0.8));
        assert!(!reveal(500, 340, 800, 0.8));
        assert!(reveal(500, 341, 800, 0.8));
    }

    #[test]
    fn lower_threshold_reveals_earlier() {
        // at scroll 0 the line is at 800 - 800 * t
        assert!(!reveal(300, 0, 800, 0.8));
        assert!(reveal(300, 0, 800, 0.5));
        assert!(!reveal(0, 0, 800, 1.0));
        assert!(reveal(-1, 0, 800, 1.0));
    }

    #[test]
    fn section_proximity_uses_load_ahead_buffer() {
        let ahead = LoadAhead::new(1.5).unwrap();
        let top = ElementTop::Measured(4000);
        let at = |scroll| is_near(top, ViewportState::new(scroll, 800), ahead, Proximity::Ahead);
        assert!(!at(0));
        assert!(!at(2000));
        assert!(at(2001));
        // sections have no lower bound
        assert!(at(100_000));
    }

    #[test]
    fn image_proximity_has_lower_bound() {
        let ahead = LoadAhead::new(0.5).unwrap();
        let top = ElementTop::Measured(1000);
        let at = |scroll| is_near(top, ViewportState::new(scroll, 800), ahead, Proximity::Window);
        // buffer is 400: near while -200 < scroll < 1400
        assert!(at(0));
        assert!(at(1399));
        assert!(!at(1400));
        assert!(!at(5000));
    }

    #[test]
    fn unmeasured_top_fails_closed() {
        for scroll in [0, 340, 10_000, i32::MAX] {
            let viewport = ViewportState::new(scroll, 800);
            assert!(!should_reveal(
                ElementTop::Unmeasured,
                viewport,
                RevealThreshold::new(1.0).unwrap()
            ));
            for proximity in [Proximity::Ahead, Proximity::Window] {
                assert!(!is_near(
                    ElementTop::Unmeasured,
                    viewport,
                    LoadAhead::new(100.0).unwrap(),
                    proximity
                ));
            }
        }
    }

    #[test]
    fn threshold_validation() {
        assert!(RevealThreshold::new(0.0).is_err());
        assert!(RevealThreshold::new(1.01).is_err());
        assert!(RevealThreshold::new(f64::NAN).is_err());
        assert!(RevealThreshold::new(1.0).is_ok());
        assert!(LoadAhead::new(0.0).is_ok());
        assert!(LoadAhead::new(3.0).is_ok());
        assert!(LoadAhead::new(f64::INFINITY).is_err());
        assert!(LoadAhead::new(-0.1).is_err());
    }

    proptest! {
        #[test]
        fn reveal_matches_inequality(
            top in -10_000i32..50_000,
            scroll in 0i32..50_000,
            height in 1i32..4_000,
            threshold in 0.01f64..=1.0,
        ) {
            let expected = f64::from(top)
                < f64::from(scroll) + f64::from(height) - f64::from(height) * threshold;
            prop_assert_eq!(reveal(top, scroll, height, threshold), expected);
        }

        #[test]
        fn window_proximity_implies_ahead(
            top in -10_000i32..50_000,
            scroll in 0i32..50_000,
            height in 1i32..4_000,
            ahead in 0.0f64..5.0,
        ) {
            let ahead = LoadAhead::new(ahead).unwrap();
            let top = ElementTop::Measured(top);
            let viewport = ViewportState::new(scroll, height);
            if is_near(top, viewport, ahead, Proximity::Window) {
                prop_assert!(is_near(top, viewport, ahead, Proximity::Ahead));
            }
        }
    }
}
