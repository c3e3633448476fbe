//! Domain types for the SDG dashboard live here.

pub mod climate;
pub mod datasets;
pub mod farming;
pub mod indicators;

#[allow(unused_imports)]
pub use climate::{
    ClimateReading, ClimateTab, ConditionAlert, Region, RegionalImpact, RiskLevel, Severity,
    TimeFrame,
};
#[allow(unused_imports)]
pub use farming::{FarmingRecommendation, Urgency};
#[allow(unused_imports)]
pub use indicators::{ChangeTrend, IconKind, Metric, SdgGoal};
