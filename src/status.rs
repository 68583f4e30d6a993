use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl StatusTier {
    pub fn label(self) -> &'static str {
        match self {
            StatusTier::Excellent => "Excellent",
            StatusTier::Good => "Good",
            StatusTier::Fair => "Fair",
            StatusTier::NeedsAttention => "Needs Attention",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StatusTier::Excellent => "tier-excellent",
            StatusTier::Good => "tier-good",
            StatusTier::Fair => "tier-fair",
            StatusTier::NeedsAttention => "tier-attention",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WellnessStatus {
    pub label: &'static str,
    pub tier: StatusTier,
}

// Out-of-range scores are not clamped.
pub fn resolve(score: i32) -> WellnessStatus {
    let tier = match score {
        s if s >= 80 => StatusTier::Excellent,
        s if s >= 60 => StatusTier::Good,
        s if s >= 40 => StatusTier::Fair,
        _ => StatusTier::NeedsAttention,
    };

    WellnessStatus {
        label: tier.label(),
        tier,
    }
}
