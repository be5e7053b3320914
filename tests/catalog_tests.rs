use swarmfund_assistant::catalog::SWIPE_THRESHOLD_PX;
use swarmfund_assistant::{InvestmentFlow, StrategyTier, SwipeConfirm, SwipeOutcome};

#[test]
fn test_tier_parsing() {
    assert_eq!("low".parse::<StrategyTier>().unwrap(), StrategyTier::Low);
    assert_eq!("medium".parse::<StrategyTier>().unwrap(), StrategyTier::Medium);
    assert_eq!("high".parse::<StrategyTier>().unwrap(), StrategyTier::High);

    let err = "extreme".parse::<StrategyTier>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown strategy tier: extreme");
}

#[test]
fn test_strategy_catalog() {
    let low = StrategyTier::Low.strategy();
    assert_eq!(low.name, "Conservative");
    assert_eq!(low.risk, "Low");
    assert_eq!(low.returns, "5-10%");
    assert_eq!(low.color, "#4ade80");

    let medium = StrategyTier::Medium.strategy();
    assert_eq!(medium.name, "Balanced");
    assert_eq!(medium.returns, "10-20%");

    let high = StrategyTier::High.strategy();
    assert_eq!(high.name, "Aggressive");
    assert_eq!(high.returns, "20%+");
    assert_eq!(high.color, "#ef4444");
}

#[test]
fn test_investment_matches_strategy() {
    for tier in StrategyTier::ALL {
        let strategy = tier.strategy();
        let investment = tier.investment();

        assert_eq!(investment.tier, tier);
        assert_eq!(investment.metrics.apy, strategy.returns);
        assert_eq!(investment.metrics.risk, strategy.risk);
    }

    assert_eq!(StrategyTier::High.investment().title, "Venture Portfolio");
    assert_eq!(StrategyTier::Low.investment().metrics.term, "12+ months");
}

#[test]
fn test_tier_serializes_lowercase() {
    let json = serde_json::to_string(&StrategyTier::Medium.strategy()).unwrap();
    assert!(json.contains("\"id\":\"medium\""));
}

#[test]
fn test_swipe_progress_is_clamped() {
    let swipe = SwipeConfirm::default();

    assert_eq!(swipe.threshold_px(), SWIPE_THRESHOLD_PX);
    assert_eq!(swipe.progress(-50.0), 0.0);
    assert_eq!(swipe.progress(100.0), 0.5);
    assert_eq!(swipe.progress(200.0), 1.0);
    assert_eq!(swipe.progress(400.0), 1.0);
}

#[test]
fn test_swipe_release_requires_passing_threshold() {
    let swipe = SwipeConfirm::default();

    assert_eq!(swipe.release(150.0), SwipeOutcome::Reset);
    assert_eq!(swipe.release(200.0), SwipeOutcome::Reset);
    assert_eq!(swipe.release(201.0), SwipeOutcome::Confirmed);
}

#[test]
fn test_flow_requires_selection_before_confirm() {
    let mut flow = InvestmentFlow::default();

    assert!(!flow.open_confirm());
    assert_eq!(flow.release(300.0), None);
}

#[test]
fn test_flow_confirmed_swipe_closes_confirm_screen() {
    let mut flow = InvestmentFlow::default();
    flow.select(StrategyTier::High);
    assert!(flow.open_confirm());

    flow.drag(120.0);
    assert_eq!(flow.progress(), 0.6);

    assert_eq!(flow.release(120.0), Some(SwipeOutcome::Reset));
    assert!(flow.is_confirming());
    assert_eq!(flow.progress(), 0.0);

    flow.drag(250.0);
    assert_eq!(flow.release(250.0), Some(SwipeOutcome::Confirmed));
    assert!(!flow.is_confirming());
    assert_eq!(flow.selected(), Some(StrategyTier::High));
}

#[test]
fn test_flow_custom_threshold() {
    let mut flow = InvestmentFlow::new(SwipeConfirm::new(100.0));
    flow.select(StrategyTier::Low);
    flow.open_confirm();

    assert_eq!(flow.release(150.0), Some(SwipeOutcome::Confirmed));
}
