//! One-shot latches behind the reveal and lazy-mount wrappers.
//!
//! None of these types expose a way back to their initial state: a revealed block
//! stays revealed and mounted content stays mounted for the life of the wrapper.

use crate::viewport::{ElementTop, ViewportState};
use crate::visibility::{is_near, should_reveal, LoadAhead, Proximity, RevealThreshold};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NotTriggered,
    Triggered,
}

/// Load status of a mounted image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageLoad {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageLoad {
    fn settle(self, next: ImageLoad) -> ImageLoad {
        match self {
            ImageLoad::Pending => next,
            settled => settled,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MountState {
    #[default]
    Placeholder,
    Mounted(ImageLoad),
}

/// Reveal latch for one wrapped block.
#[derive(Debug, Clone, Copy)]
pub struct RevealGate {
    state: RevealState,
    threshold: RevealThreshold,
}

impl RevealGate {
    pub fn new(threshold: RevealThreshold) -> Self {
        Self {
            state: RevealState::NotTriggered,
            threshold,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.state == RevealState::Triggered
    }

    /// Evaluates a fresh measurement.
    ///
    /// Returns `true` only on the call that fires the latch. Once triggered every
    /// later measurement is ignored.
    pub fn observe(&mut self, top: ElementTop, viewport: ViewportState) -> bool {
        if self.is_triggered() {
            return false;
        }
        if should_reveal(top, viewport, self.threshold) {
            self.state = RevealState::Triggered;
            true
        } else {
            false
        }
    }
}

/// Mount latch for lazily constructed sections and images.
#[derive(Debug, Clone, Copy)]
pub struct MountGate {
    state: MountState,
    top: ElementTop,
    ahead: LoadAhead,
    proximity: Proximity,
}

impl MountGate {
    pub fn new(ahead: LoadAhead, proximity: Proximity) -> Self {
        Self {
            state: MountState::Placeholder,
            top: ElementTop::Unmeasured,
            ahead,
            proximity,
        }
    }

    pub fn section(ahead: LoadAhead) -> Self {
        Self::new(ahead, Proximity::Ahead)
    }

    pub fn image(ahead: LoadAhead) -> Self {
        Self::new(ahead, Proximity::Window)
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.state, MountState::Mounted(_))
    }

    /// Cached top; frozen from the moment the gate mounts.
    pub fn top(&self) -> ElementTop {
        self.top
    }

    /// Same contract as [`RevealGate::observe`], using the proximity check.
    pub fn observe(&mut self, top: ElementTop, viewport: ViewportState) -> bool {
        if self.is_mounted() {
            return false;
        }
        self.top = top;
        if is_near(self.top, viewport, self.ahead, self.proximity) {
            self.state = MountState::Mounted(ImageLoad::Pending);
            true
        } else {
            false
        }
    }

    /// Records the outcome of the underlying resource load.
    ///
    /// Ignored before mounting and after the first outcome. Returns the resulting state.
    pub fn resolve(&mut self, outcome: ImageLoad) -> MountState {
        if let MountState::Mounted(load) = self.state {
            self.state = MountState::Mounted(load.settle(outcome));
        }
        self.state
    }
}
