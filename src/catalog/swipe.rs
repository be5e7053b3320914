use serde::Serialize;
use tracing::info;

use super::strategy::StrategyTier;

/// Horizontal drag distance that confirms a transaction
pub const SWIPE_THRESHOLD_PX: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeOutcome {
    Confirmed,
    /// Released short of the threshold, the handle springs back
    Reset,
}

/// Drag-to-confirm gesture evaluator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfirm {
    threshold_px: f32,
}

impl Default for SwipeConfirm {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeConfirm {
    pub fn new(threshold_px: f32) -> Self {
        Self { threshold_px }
    }

    pub fn threshold_px(&self) -> f32 {
        self.threshold_px
    }

    /// Fill fraction for a drag offset, clamped to [0, 1]
    pub fn progress(&self, offset_px: f32) -> f32 {
        (offset_px / self.threshold_px).clamp(0.0, 1.0)
    }

    /// Outcome of releasing at `offset_px`; the threshold itself is not enough
    pub fn release(&self, offset_px: f32) -> SwipeOutcome {
        if offset_px > self.threshold_px {
            SwipeOutcome::Confirmed
        } else {
            SwipeOutcome::Reset
        }
    }
}

/// Selection and confirmation state of the investment screen
#[derive(Debug, Clone, Default)]
pub struct InvestmentFlow {
    gesture: SwipeConfirm,
    selected: Option<StrategyTier>,
    confirming: bool,
    progress: f32,
}

impl InvestmentFlow {
    pub fn new(gesture: SwipeConfirm) -> Self {
        Self {
            gesture,
            ..Self::default()
        }
    }

    pub fn select(&mut self, tier: StrategyTier) {
        self.selected = Some(tier);
    }

    pub fn selected(&self) -> Option<StrategyTier> {
        self.selected
    }

    /// Show the confirm screen. Requires a selected tier.
    pub fn open_confirm(&mut self) -> bool {
        self.confirming = self.selected.is_some();
        self.progress = 0.0;
        self.confirming
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn drag(&mut self, offset_px: f32) {
        if self.confirming {
            self.progress = self.gesture.progress(offset_px);
        }
    }

    /// Finish the drag. A confirmed swipe closes the confirm screen.
    pub fn release(&mut self, offset_px: f32) -> Option<SwipeOutcome> {
        if !self.confirming {
            return None;
        }

        let outcome = self.gesture.release(offset_px);
        if outcome == SwipeOutcome::Confirmed {
            if let Some(tier) = self.selected {
                info!("Transaction confirmed for {} strategy", tier);
            }
            self.confirming = false;
        }
        self.progress = 0.0;

        Some(outcome)
    }
}
