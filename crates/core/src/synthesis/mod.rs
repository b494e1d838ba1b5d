//! The plan synthesizer: independent selection functions assembled into a
//! single [`Plan`].

mod catalog;
mod channels;
mod messaging;
mod personas;
mod phases;

pub use catalog::{growth_experiments, measurement_framework};
pub use channels::adapt_channels;
pub use messaging::tailor_messaging;
pub use personas::{select_personas, Persona};
pub use phases::{duration_labels, shape_phases};

use crate::domain::{Plan, PlanInput};

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Text placed mid-sentence, without its own closing period.
fn clause(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == '.' || c.is_whitespace())
}

/// Text that stands as its own sentence, closed with a period if it has no
/// terminal punctuation.
fn sentence(text: &str) -> String {
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

/// Five-sentence summary built from the input fields.
pub fn executive_summary(input: &PlanInput) -> String {
    format!(
        "{product} launches with one objective: {goal}. {summary} \
         The narrative leads with a {voice} voice and names the core problem plainly: {problem}. \
         Differentiation rests on {differentiation}, packaged as {pricing}. \
         Every motion in this plan is sequenced to land within {horizon}.",
        product = input.product_name,
        goal = clause(&input.primary_goal).to_lowercase(),
        summary = sentence(&input.product_summary),
        voice = input.brand_voice.to_lowercase(),
        problem = clause(&input.problem).to_lowercase(),
        differentiation = clause(&input.differentiation).to_lowercase(),
        pricing = clause(&input.pricing),
        horizon = clause(&input.launch_horizon).to_lowercase(),
    )
}

/// Map validated inputs onto a go-to-market plan. Total and deterministic.
pub fn synthesize(input: &PlanInput) -> Plan {
    let personas = select_personas(input);

    Plan {
        executive_summary: executive_summary(input),
        launch_phases: shape_phases(input),
        persona_insights: personas.iter().map(Persona::insight).collect(),
        messaging_pillars: tailor_messaging(input, &personas),
        channel_strategy: adapt_channels(input),
        growth_experiments: growth_experiments(),
        measurement_framework: measurement_framework(),
    }
}
