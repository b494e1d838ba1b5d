use super::personas::Persona;
use super::to_strings;
use crate::domain::{MessagingPillar, PlanInput};

pub fn tailor_messaging(input: &PlanInput, personas: &[Persona]) -> Vec<MessagingPillar> {
    let product = &input.product_name;

    let mut pillars = vec![
        MessagingPillar {
            name: "Why Now".to_string(),
            narrative: format!(
                "Teams can no longer afford {}. {} turns that pressure into a clear path forward.",
                input.problem.to_lowercase(),
                product
            ),
            content_angles: to_strings(&[
                "Cost-of-inaction breakdown",
                "Market shift explainer",
                "Before-and-after workflow story",
            ]),
            proof_assets: to_strings(&["Industry benchmark data", "Customer pain quotes"]),
        },
        MessagingPillar {
            name: "Differentiated Value".to_string(),
            narrative: format!(
                "{} stands apart through {}.",
                product,
                input.differentiation.to_lowercase()
            ),
            content_angles: to_strings(&[
                "Side-by-side comparison with the status quo",
                "Product walkthrough of the signature capability",
                "Expert point-of-view article",
            ]),
            proof_assets: to_strings(&["Interactive demo", "Analyst or expert validation"]),
        },
        MessagingPillar {
            name: "Proof & Trust".to_string(),
            narrative: format!(
                "{} backs every claim with customer evidence, transparent pricing, and measurable outcomes.",
                product
            ),
            content_angles: to_strings(&[
                "Customer success spotlight",
                "ROI calculator walkthrough",
                "Security and reliability overview",
            ]),
            proof_assets: to_strings(&["Case studies", "Testimonials", "Trust center page"]),
        },
    ];

    if personas.contains(&Persona::Builder) {
        pillars.push(MessagingPillar {
            name: "Builder Velocity".to_string(),
            narrative: format!(
                "{} gives builders the primitives to ship faster without waiting on anyone else's roadmap.",
                product
            ),
            content_angles: to_strings(&[
                "Quickstart tutorials",
                "Open changelog and roadmap",
                "Community showcase of builds",
            ]),
            proof_assets: to_strings(&["API reference", "Sample apps and templates"]),
        });
    }

    pillars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::tests::sample_input;

    #[test]
    fn test_three_pillars_without_builder() {
        let pillars = tailor_messaging(&sample_input(), &[Persona::Operator]);
        let names: Vec<_> = pillars.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Why Now", "Differentiated Value", "Proof & Trust"]);
    }

    #[test]
    fn test_builder_adds_velocity_pillar() {
        let pillars = tailor_messaging(&sample_input(), &[Persona::Builder, Persona::Executive]);
        assert_eq!(pillars.len(), 4);
        assert_eq!(pillars[3].name, "Builder Velocity");
        assert!(pillars[3].narrative.starts_with("Beacon gives builders"));
    }

    #[test]
    fn test_narratives_interpolate_input() {
        let pillars = tailor_messaging(&sample_input(), &[Persona::Operator]);
        assert_eq!(
            pillars[0].narrative,
            "Teams can no longer afford fragmented attribution across channels. \
             Beacon turns that pressure into a clear path forward."
        );
        assert_eq!(
            pillars[1].narrative,
            "Beacon stands apart through real-time journey stitching."
        );
    }
}
