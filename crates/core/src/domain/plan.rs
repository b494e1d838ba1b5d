use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stage of the go-to-market timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct LaunchPhase {
    pub name: String,
    pub focus: String,
    pub plays: Vec<String>,
    pub proof_points: Vec<String>,
    /// Positional label from the horizon's duration set, e.g. "Days 1-10"
    pub duration: String,
}

/// A buyer archetype with what it needs, what moves it, and what stops it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PersonaInsight {
    pub name: String,
    pub needs: Vec<String>,
    pub triggers: Vec<String>,
    pub objections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct MessagingPillar {
    pub name: String,
    pub narrative: String,
    pub content_angles: Vec<String>,
    pub proof_assets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ChannelStrategy {
    pub name: String,
    pub role: String,
    pub cadences: Vec<String>,
    pub kpis: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct GrowthExperiment {
    pub title: String,
    pub hypothesis: String,
    pub playbook: Vec<String>,
    pub measurement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct MeasurementMetric {
    pub name: String,
    pub target: String,
    pub instrumentation: String,
    pub cadence: String,
}

/// The synthesized go-to-market plan. Sequences are rendered in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub executive_summary: String,
    pub launch_phases: Vec<LaunchPhase>,
    pub persona_insights: Vec<PersonaInsight>,
    pub messaging_pillars: Vec<MessagingPillar>,
    pub channel_strategy: Vec<ChannelStrategy>,
    pub growth_experiments: Vec<GrowthExperiment>,
    pub measurement_framework: Vec<MeasurementMetric>,
}
