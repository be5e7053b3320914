//! Static strategy catalog and the swipe-to-confirm flow
//!
//! Everything here is in-memory view state; nothing is persisted or executed.

mod strategy;
mod swipe;

pub use strategy::{Investment, InvestmentMetrics, Strategy, StrategyTier, UnknownTier};
pub use swipe::{InvestmentFlow, SwipeConfirm, SwipeOutcome, SWIPE_THRESHOLD_PX};
