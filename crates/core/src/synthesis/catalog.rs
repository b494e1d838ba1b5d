//! Growth experiments and measurement metrics. Identical for every plan.

use super::to_strings;
use crate::domain::{GrowthExperiment, MeasurementMetric};

struct ExperimentTemplate {
    title: &'static str,
    hypothesis: &'static str,
    playbook: &'static [&'static str],
    measurement: &'static str,
}

struct MetricTemplate {
    name: &'static str,
    target: &'static str,
    instrumentation: &'static str,
    cadence: &'static str,
}

static EXPERIMENTS: [ExperimentTemplate; 3] = [
    ExperimentTemplate {
        title: "Value-Led Pricing Page",
        hypothesis: "Leading the pricing page with outcomes instead of features will lift plan selection.",
        playbook: &[
            "Rewrite plan descriptions around customer outcomes",
            "Add a short proof block above the plan table",
            "Split traffic evenly for two weeks",
        ],
        measurement: "Compare pricing-page-to-checkout conversion between variants.",
    },
    ExperimentTemplate {
        title: "Guided Onboarding Checklist",
        hypothesis: "A three-step in-product checklist will shorten time to first value.",
        playbook: &[
            "Identify the three actions most correlated with retention",
            "Ship a checklist that walks new accounts through them",
            "Trigger a nudge email when a step stalls for 48 hours",
        ],
        measurement: "Track activation rate and median time to first value by cohort.",
    },
    ExperimentTemplate {
        title: "Partner Co-Hosted Webinar",
        hypothesis: "Co-hosting with a trusted partner will convert attendees at a higher rate than solo events.",
        playbook: &[
            "Select a partner with an overlapping audience",
            "Co-develop a session around a shared customer problem",
            "Follow up within 24 hours with a tailored offer",
        ],
        measurement: "Measure attendee-to-opportunity conversion against solo webinar baselines.",
    },
];

static METRICS: [MetricTemplate; 4] = [
    MetricTemplate {
        name: "Qualified pipeline",
        target: "3x launch quarter revenue goal",
        instrumentation: "CRM opportunity stages with campaign attribution",
        cadence: "Weekly",
    },
    MetricTemplate {
        name: "Activation rate",
        target: "40% of new accounts reach first value within 7 days",
        instrumentation: "Product analytics funnel on the core activation event",
        cadence: "Weekly",
    },
    MetricTemplate {
        name: "Content-assisted conversion",
        target: "25% of sign-ups touch launch content before converting",
        instrumentation: "UTM tagging with multi-touch attribution",
        cadence: "Bi-weekly",
    },
    MetricTemplate {
        name: "Net revenue retention",
        target: "110% across launch cohorts",
        instrumentation: "Billing system cohort reports",
        cadence: "Monthly",
    },
];

pub fn growth_experiments() -> Vec<GrowthExperiment> {
    EXPERIMENTS
        .iter()
        .map(|experiment| GrowthExperiment {
            title: experiment.title.to_string(),
            hypothesis: experiment.hypothesis.to_string(),
            playbook: to_strings(experiment.playbook),
            measurement: experiment.measurement.to_string(),
        })
        .collect()
}

pub fn measurement_framework() -> Vec<MeasurementMetric> {
    METRICS
        .iter()
        .map(|metric| MeasurementMetric {
            name: metric.name.to_string(),
            target: metric.target.to_string(),
            instrumentation: metric.instrumentation.to_string(),
            cadence: metric.cadence.to_string(),
        })
        .collect()
}
