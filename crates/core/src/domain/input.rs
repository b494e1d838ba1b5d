use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::CoreError;

/// Raw form submission. Every key is optional on the wire and non-string
/// values read as absent, so that every unusable key can be reported
/// together instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct PlanRequest {
    #[serde(deserialize_with = "text_or_none")]
    pub product_name: Option<String>,
    #[serde(deserialize_with = "text_or_none")]
    pub product_summary: Option<String>,
    #[serde(deserialize_with = "text_or_none")]
    pub audience: Option<String>,
    #[serde(deserialize_with = "text_or_none")]
    pub problem: Option<String>,
    #[serde(deserialize_with = "text_or_none")]
    pub differentiation: Option<String>,
    #[serde(deserialize_with = "text_or_none")]
    pub pricing: Option<String>,
    #[serde(deserialize_with = "text_or_none")]
    pub brand_voice: Option<String>,
    #[serde(deserialize_with = "text_or_none")]
    pub primary_goal: Option<String>,
    #[serde(deserialize_with = "text_or_none")]
    pub success_metric: Option<String>,
    #[serde(deserialize_with = "text_or_none")]
    pub launch_horizon: Option<String>,
}

/// Accepts a JSON string; numbers, booleans, arrays and objects become `None`.
fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Field>::deserialize(deserializer)? {
        Some(Field::Text(text)) => Some(text),
        Some(Field::Other(_)) | None => None,
    })
}

impl PlanRequest {
    fn fields(&self) -> [(&'static str, Option<&str>); 10] {
        [
            ("productName", self.product_name.as_deref()),
            ("productSummary", self.product_summary.as_deref()),
            ("audience", self.audience.as_deref()),
            ("problem", self.problem.as_deref()),
            ("differentiation", self.differentiation.as_deref()),
            ("pricing", self.pricing.as_deref()),
            ("brandVoice", self.brand_voice.as_deref()),
            ("primaryGoal", self.primary_goal.as_deref()),
            ("successMetric", self.success_metric.as_deref()),
            ("launchHorizon", self.launch_horizon.as_deref()),
        ]
    }

    /// Wire keys that are absent or blank after trimming, in request order.
    pub fn missing_fields(&self) -> Vec<String> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
            .map(|(key, _)| key.to_string())
            .collect()
    }

    /// Check every required field and produce a trimmed [`PlanInput`].
    pub fn validate(self) -> Result<PlanInput, CoreError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CoreError::Validation { missing });
        }

        let take = |value: Option<String>| value.map(|v| v.trim().to_string()).unwrap_or_default();

        Ok(PlanInput {
            product_name: take(self.product_name),
            product_summary: take(self.product_summary),
            audience: take(self.audience),
            problem: take(self.problem),
            differentiation: take(self.differentiation),
            pricing: take(self.pricing),
            brand_voice: take(self.brand_voice),
            primary_goal: take(self.primary_goal),
            success_metric: take(self.success_metric),
            launch_horizon: take(self.launch_horizon),
        })
    }
}

/// Validated marketing inputs. All fields are non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    pub product_name: String,
    pub product_summary: String,
    pub audience: String,
    pub problem: String,
    pub differentiation: String,
    pub pricing: String,
    pub brand_voice: String,
    pub primary_goal: String,
    pub success_metric: String,
    pub launch_horizon: String,
}

impl From<PlanInput> for PlanRequest {
    fn from(input: PlanInput) -> Self {
        Self {
            product_name: Some(input.product_name),
            product_summary: Some(input.product_summary),
            audience: Some(input.audience),
            problem: Some(input.problem),
            differentiation: Some(input.differentiation),
            pricing: Some(input.pricing),
            brand_voice: Some(input.brand_voice),
            primary_goal: Some(input.primary_goal),
            success_metric: Some(input.success_metric),
            launch_horizon: Some(input.launch_horizon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> PlanRequest {
        PlanRequest {
            product_name: Some("Beacon".to_string()),
            product_summary: Some("Beacon maps customer journeys.".to_string()),
            audience: Some("Marketing leaders".to_string()),
            problem: Some("Fragmented attribution".to_string()),
            differentiation: Some("Real-time journey stitching".to_string()),
            pricing: Some("$49 per seat".to_string()),
            brand_voice: Some("Confident".to_string()),
            primary_goal: Some("Grow pipeline".to_string()),
            success_metric: Some("200 SQLs".to_string()),
            launch_horizon: Some("Next quarter".to_string()),
        }
    }

    #[test]
    fn test_validate_complete_request() {
        let input = complete_request().validate().unwrap();
        assert_eq!(input.product_name, "Beacon");
        assert_eq!(input.launch_horizon, "Next quarter");
    }

    #[test]
    fn test_validate_trims_values() {
        let mut request = complete_request();
        request.product_name = Some("  Beacon \n".to_string());

        let input = request.validate().unwrap();
        assert_eq!(input.product_name, "Beacon");
    }

    #[test]
    fn test_missing_fields_in_request_order() {
        let mut request = complete_request();
        request.brand_voice = None;
        request.pricing = Some("   ".to_string());

        let err = request.validate().unwrap_err();
        assert_eq!(err.missing_fields(), ["pricing", "brandVoice"]);
    }

    #[test]
    fn test_empty_request_reports_every_field() {
        let missing = PlanRequest::default().missing_fields();
        assert_eq!(
            missing,
            vec![
                "productName",
                "productSummary",
                "audience",
                "problem",
                "differentiation",
                "pricing",
                "brandVoice",
                "primaryGoal",
                "successMetric",
                "launchHorizon",
            ]
        );
    }

    #[test]
    fn test_request_deserializes_camel_case_with_gaps() {
        let request: PlanRequest = serde_json::from_str(
            r#"{"productName": "Beacon", "brandVoice": null, "launchHorizon": "30 days"}"#,
        )
        .unwrap();

        assert_eq!(request.product_name.as_deref(), Some("Beacon"));
        assert!(request.brand_voice.is_none());
        assert_eq!(request.launch_horizon.as_deref(), Some("30 days"));
    }

    #[test]
    fn test_non_string_values_count_as_missing() {
        let request: PlanRequest = serde_json::from_str(
            r#"{"productName": "Beacon", "pricing": 42, "audience": ["devs"], "problem": {"a": 1}}"#,
        )
        .unwrap();

        assert_eq!(request.product_name.as_deref(), Some("Beacon"));
        assert!(request.pricing.is_none());
        assert_eq!(
            request.missing_fields(),
            vec![
                "productSummary",
                "audience",
                "problem",
                "differentiation",
                "pricing",
                "brandVoice",
                "primaryGoal",
                "successMetric",
                "launchHorizon",
            ]
        );
    }
}
