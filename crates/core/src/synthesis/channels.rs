use super::to_strings;
use crate::domain::{ChannelStrategy, PlanInput};

const STRATEGIC_ALLIANCES: &str = "Strategic Alliances";
const PRODUCT_LED_MOTION: &str = "Product-Led Motion";

const CO_SELLING_CLAUSE: &str =
    " Prioritize co-selling motions with partners who already own pipeline conversations.";
const ONBOARDING_CLAUSE: &str =
    " Instrument onboarding so every new account reaches first value in its first session.";

struct ChannelTemplate {
    name: &'static str,
    role: &'static str,
    cadences: &'static [&'static str],
    kpis: &'static [&'static str],
}

static CHANNELS: [ChannelTemplate; 4] = [
    ChannelTemplate {
        name: "Owned Content & SEO",
        role: "Own the problem narrative and capture high-intent search demand.",
        cadences: &["Two long-form articles per week", "Monthly pillar page refresh"],
        kpis: &["Organic sessions", "Content-assisted sign-ups"],
    },
    ChannelTemplate {
        name: "Community & Social",
        role: "Build credibility where the audience already gathers.",
        cadences: &["Daily social posts", "Weekly community AMA or live session"],
        kpis: &["Engagement rate", "Community-sourced referrals"],
    },
    ChannelTemplate {
        name: STRATEGIC_ALLIANCES,
        role: "Borrow distribution and trust from complementary partners.",
        cadences: &["Bi-weekly partner syncs", "Quarterly joint campaign"],
        kpis: &["Partner-sourced opportunities", "Co-marketing reach"],
    },
    ChannelTemplate {
        name: PRODUCT_LED_MOTION,
        role: "Let the product drive discovery, activation, and expansion.",
        cadences: &["Weekly onboarding experiment review", "In-app messaging every release"],
        kpis: &["Activation rate", "Product-qualified leads"],
    },
];

/// Fixed channel set, with role clauses appended when the primary goal
/// names revenue or adoption outcomes.
pub fn adapt_channels(input: &PlanInput) -> Vec<ChannelStrategy> {
    let goal = input.primary_goal.to_lowercase();
    let revenue_goal = goal.contains("pipeline") || goal.contains("revenue");
    let adoption_goal = goal.contains("adoption") || goal.contains("activation");

    CHANNELS
        .iter()
        .take(4)
        .map(|template| {
            let mut role = template.role.to_string();
            if revenue_goal && template.name == STRATEGIC_ALLIANCES {
                role.push_str(CO_SELLING_CLAUSE);
            }
            if adoption_goal && template.name == PRODUCT_LED_MOTION {
                role.push_str(ONBOARDING_CLAUSE);
            }

            ChannelStrategy {
                name: template.name.to_string(),
                role,
                cadences: to_strings(template.cadences),
                kpis: to_strings(template.kpis),
            }
        })
        .collect()
}
