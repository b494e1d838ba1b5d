use std::fmt::Write;

use crate::domain::Plan;

fn bullets(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "**{}**", label);
    for item in items {
        let _ = writeln!(out, "- {}", item);
    }
    out.push('\n');
}

/// Render a plan as a markdown document, sections in record order.
pub fn render_markdown(plan: &Plan) -> String {
    let mut out = String::new();

    out.push_str("# Go-To-Market Plan\n\n");
    let _ = writeln!(out, "{}\n", plan.executive_summary);

    out.push_str("## Launch Phases\n\n");
    for phase in &plan.launch_phases {
        let _ = writeln!(out, "### {} ({})\n", phase.name, phase.duration);
        let _ = writeln!(out, "{}\n", phase.focus);
        bullets(&mut out, "Plays", &phase.plays);
        bullets(&mut out, "Proof points", &phase.proof_points);
    }

    out.push_str("## Persona Insights\n\n");
    for persona in &plan.persona_insights {
        let _ = writeln!(out, "### {}\n", persona.name);
        bullets(&mut out, "Needs", &persona.needs);
        bullets(&mut out, "Triggers", &persona.triggers);
        bullets(&mut out, "Objections", &persona.objections);
    }

    out.push_str("## Messaging Pillars\n\n");
    for pillar in &plan.messaging_pillars {
        let _ = writeln!(out, "### {}\n", pillar.name);
        let _ = writeln!(out, "{}\n", pillar.narrative);
        bullets(&mut out, "Content angles", &pillar.content_angles);
        bullets(&mut out, "Proof assets", &pillar.proof_assets);
    }

    out.push_str("## Channel Strategy\n\n");
    for channel in &plan.channel_strategy {
        let _ = writeln!(out, "### {}\n", channel.name);
        let _ = writeln!(out, "{}\n", channel.role);
        bullets(&mut out, "Cadences", &channel.cadences);
        bullets(&mut out, "KPIs", &channel.kpis);
    }

    out.push_str("## Growth Experiments\n\n");
    for experiment in &plan.growth_experiments {
        let _ = writeln!(out, "### {}\n", experiment.title);
        let _ = writeln!(out, "*Hypothesis:* {}\n", experiment.hypothesis);
        bullets(&mut out, "Playbook", &experiment.playbook);
        let _ = writeln!(out, "*Measurement:* {}\n", experiment.measurement);
    }

    out.push_str("## Measurement Framework\n\n");
    out.push_str("| Metric | Target | Instrumentation | Cadence |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for metric in &plan.measurement_framework {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            metric.name, metric.target, metric.instrumentation, metric.cadence
        );
    }

    out
}
