use super::to_strings;
use crate::domain::{LaunchPhase, PlanInput};

const QUARTER_DURATIONS: &[&str] = &["Weeks 1-3", "Weeks 4-6", "Weeks 7-9", "Weeks 10-13"];
const SHORT_DURATIONS: &[&str] = &["Days 1-10", "Days 11-20", "Days 21-30"];
const DEFAULT_DURATIONS: &[&str] = &["Early window", "Mid window", "Late window"];

struct PhaseTemplate {
    name: &'static str,
    focus: &'static str,
    plays: &'static [&'static str],
    proof_points: &'static [&'static str],
}

static CORE_PHASES: [PhaseTemplate; 3] = [
    PhaseTemplate {
        name: "Ignition",
        focus: "Seed awareness with the highest-intent audience and validate the core narrative",
        plays: &[
            "Brief internal teams and early champions on the launch narrative",
            "Publish a founder or product-lead story that frames the problem",
            "Open a waitlist or beta cohort with a clear call to action",
        ],
        proof_points: &[
            "Early access sign-ups from the target audience",
            "Qualitative feedback confirming the problem framing",
        ],
    },
    PhaseTemplate {
        name: "Amplify",
        focus: "Scale reach through owned, earned, and partner channels",
        plays: &[
            "Launch across owned channels with a coordinated content drop",
            "Activate partners and community voices to extend reach",
            "Run paid retargeting against engaged visitors",
        ],
        proof_points: &[
            "Share of voice in target communities",
            "Engaged visitors returning within seven days",
        ],
    },
    PhaseTemplate {
        name: "Convert",
        focus: "Turn engaged prospects into activated customers",
        plays: &[
            "Deploy lifecycle nurture sequences tied to product milestones",
            "Offer guided onboarding or live demos for high-fit accounts",
            "Equip sales with objection handling and proof assets",
        ],
        proof_points: &[
            "Trial-to-paid or demo-to-close conversion rate",
            "Time to first value for new accounts",
        ],
    },
];

static SCALE_PHASE: PhaseTemplate = PhaseTemplate {
    name: "Scale",
    focus: "Compound what works and expand into adjacent segments",
    plays: &[
        "Double down on the top-performing channel and message pairings",
        "Package customer stories into case studies and references",
        "Plan the next segment or geography expansion",
    ],
    proof_points: &[
        "Expansion revenue from launch cohorts",
        "Referral and word-of-mouth share of new sign-ups",
    ],
};

/// Duration labels for the launch horizon. A quarter gets four labels, a
/// month-scale horizon the short set, anything else the generic set.
pub fn duration_labels(horizon: &str) -> &'static [&'static str] {
    let horizon = horizon.to_lowercase();

    if horizon.contains("quarter") {
        QUARTER_DURATIONS
    } else if horizon.contains("30") || horizon.contains("month") {
        SHORT_DURATIONS
    } else {
        DEFAULT_DURATIONS
    }
}

/// Label for the phase at `index`; the last label repeats once exhausted.
fn label_at(labels: &[&str], index: usize) -> String {
    labels
        .get(index)
        .or_else(|| labels.last())
        .map(|label| label.to_string())
        .unwrap_or_default()
}

pub fn shape_phases(input: &PlanInput) -> Vec<LaunchPhase> {
    let labels = duration_labels(&input.launch_horizon);

    let mut templates: Vec<&PhaseTemplate> = CORE_PHASES.iter().collect();
    if labels.len() > CORE_PHASES.len() {
        templates.push(&SCALE_PHASE);
    }

    templates
        .into_iter()
        .enumerate()
        .map(|(index, template)| LaunchPhase {
            name: template.name.to_string(),
            focus: template.focus.to_string(),
            plays: to_strings(template.plays),
            proof_points: to_strings(template.proof_points),
            duration: label_at(labels, index),
        })
        .collect()
}
