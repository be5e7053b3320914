use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Risk bucket offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyTier {
    Low,
    Medium,
    High,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strategy tier: {0}")]
pub struct UnknownTier(pub String);

impl StrategyTier {
    pub const ALL: [StrategyTier; 3] = [StrategyTier::Low, StrategyTier::Medium, StrategyTier::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyTier::Low => "low",
            StrategyTier::Medium => "medium",
            StrategyTier::High => "high",
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            StrategyTier::Low => Strategy {
                id: *self,
                name: "Conservative",
                risk: "Low",
                returns: "5-10%",
                color: "#4ade80",
            },
            StrategyTier::Medium => Strategy {
                id: *self,
                name: "Balanced",
                risk: "Medium",
                returns: "10-20%",
                color: "#fbbf24",
            },
            StrategyTier::High => Strategy {
                id: *self,
                name: "Aggressive",
                risk: "High",
                returns: "20%+",
                color: "#ef4444",
            },
        }
    }

    pub fn investment(&self) -> Investment {
        match self {
            StrategyTier::Low => Investment {
                tier: *self,
                title: "Blue Chip Portfolio",
                description: "A diversified portfolio of established companies focused on stable, long-term growth.",
                metrics: InvestmentMetrics {
                    apy: "5-10%",
                    risk: "Low",
                    term: "12+ months",
                },
            },
            StrategyTier::Medium => Investment {
                tier: *self,
                title: "Growth Portfolio",
                description: "Balanced mix of established companies and emerging market opportunities.",
                metrics: InvestmentMetrics {
                    apy: "10-20%",
                    risk: "Medium",
                    term: "6-12 months",
                },
            },
            StrategyTier::High => Investment {
                tier: *self,
                title: "Venture Portfolio",
                description: "High-growth potential startups and emerging technology investments.",
                metrics: InvestmentMetrics {
                    apy: "20%+",
                    risk: "High",
                    term: "3-6 months",
                },
            },
        }
    }
}

impl fmt::Display for StrategyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(StrategyTier::Low),
            "medium" => Ok(StrategyTier::Medium),
            "high" => Ok(StrategyTier::High),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

/// Card shown for a tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Strategy {
    pub id: StrategyTier,
    pub name: &'static str,
    pub risk: &'static str,
    pub returns: &'static str,
    pub color: &'static str,
}

/// Detail view for a selected tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Investment {
    pub tier: StrategyTier,
    pub title: &'static str,
    pub description: &'static str,
    pub metrics: InvestmentMetrics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestmentMetrics {
    pub apy: &'static str,
    pub risk: &'static str,
    pub term: &'static str,
}
