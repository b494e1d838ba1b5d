use super::to_strings;
use crate::domain::{PersonaInsight, PlanInput};

/// Buyer archetypes, in the order they are checked and emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    Builder,
    Operator,
    Executive,
}

struct PersonaProfile {
    name: &'static str,
    needs: &'static [&'static str],
    triggers: &'static [&'static str],
    objections: &'static [&'static str],
}

static BUILDER: PersonaProfile = PersonaProfile {
    name: "Builder",
    needs: &[
        "Fast time-to-value with minimal setup",
        "Transparent documentation and APIs they can trust",
        "Room to extend the product into their own stack",
    ],
    triggers: &[
        "Outgrowing a homegrown workaround",
        "A peer recommendation in a developer community",
        "Kicking off a new project that needs tooling",
    ],
    objections: &[
        "Fear of lock-in and migration cost",
        "Skepticism of marketing claims without hands-on proof",
    ],
};

static OPERATOR: PersonaProfile = PersonaProfile {
    name: "Operator",
    needs: &[
        "Predictable pipeline and campaign performance",
        "Reporting that ties activity to revenue",
        "Workflows that remove manual coordination",
    ],
    triggers: &[
        "Missing a quarterly target",
        "Team growth outpacing current processes",
        "A leadership mandate to do more with less",
    ],
    objections: &[
        "Change management burden on the team",
        "Integration effort with the existing stack",
    ],
};

static EXECUTIVE: PersonaProfile = PersonaProfile {
    name: "Executive",
    needs: &[
        "Strategic differentiation in a crowded market",
        "Measurable return on every dollar invested",
        "Low operational and security risk",
    ],
    triggers: &[
        "Board pressure on growth efficiency",
        "Risk of competitive displacement",
        "Annual planning and budget cycles",
    ],
    objections: &[
        "Unproven vendor maturity",
        "Lengthy security and compliance review",
    ],
};

impl Persona {
    fn profile(&self) -> &'static PersonaProfile {
        match self {
            Self::Builder => &BUILDER,
            Self::Operator => &OPERATOR,
            Self::Executive => &EXECUTIVE,
        }
    }

    pub fn insight(&self) -> PersonaInsight {
        let profile = self.profile();
        PersonaInsight {
            name: profile.name.to_string(),
            needs: to_strings(profile.needs),
            triggers: to_strings(profile.triggers),
            objections: to_strings(profile.objections),
        }
    }
}

/// Pick personas by substring containment on the lower-cased audience and
/// goal. Falls back to Operator alone when nothing matches.
pub fn select_personas(input: &PlanInput) -> Vec<Persona> {
    let audience = input.audience.to_lowercase();
    let goal = input.primary_goal.to_lowercase();

    let mut personas = Vec::new();

    if audience.contains("founder") || audience.contains("developer") {
        personas.push(Persona::Builder);
    }
    if audience.contains("marketing") || audience.contains("growth") || goal.contains("pipeline") {
        personas.push(Persona::Operator);
    }
    if audience.contains("executive") || audience.contains("c-suite") || goal.contains("enterprise")
    {
        personas.push(Persona::Executive);
    }

    if personas.is_empty() {
        personas.push(Persona::Operator);
    }

    personas
}
