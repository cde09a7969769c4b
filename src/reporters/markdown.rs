//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Steering committee handouts
//! - Project wikis
//! - Pull request comments on migration tracking repos

use crate::models::{Assessment, Compatibility, Priority, RiskSeverity};
use crate::roadmap::{PhaseStatus, Roadmap};
use anyhow::Result;
use chrono::Local;

/// Maximum modules listed in the breakdown table
const MAX_MODULE_ROWS: usize = 10;

/// Render assessment as GitHub-flavored Markdown
pub fn render(assessment: &Assessment) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(assessment));
    md.push('\n');

    md.push_str(&render_toc());
    md.push('\n');

    md.push_str(&render_summary(assessment));
    md.push('\n');

    md.push_str(&render_custom_code(assessment));
    md.push('\n');

    md.push_str(&render_roadmap(assessment));
    md.push('\n');

    md.push_str(&render_recommendations(assessment));
    md.push('\n');

    md.push_str(&render_risks(assessment));
    md.push('\n');

    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(assessment: &Assessment) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# {} Migration Readiness Assessment

**Readiness: {}%** | **Complexity: {}** | **Duration: {} weeks**

Assessment `{}` dated {} | Generated: {}
"#,
        score_emoji(assessment.total_score),
        assessment.total_score,
        assessment.complexity_level,
        assessment.estimated_duration,
        assessment.id,
        assessment.assessment_date.format("%Y-%m-%d"),
        timestamp
    )
}

fn render_toc() -> String {
    r#"## Table of Contents

- [Summary](#summary)
- [Custom Code](#custom-code)
- [Roadmap](#roadmap)
- [Recommendations](#recommendations)
- [Risks](#risks)
"#
    .to_string()
}

fn render_summary(assessment: &Assessment) -> String {
    let profile = &assessment.profile;
    format!(
        r#"## Summary

| Metric | Value |
|--------|-------|
| **System** | {} ({}, {}) |
| **Database** | {} |
| **Readiness Score** | {}/100 {} |
| **Complexity Level** | {} |
| **Estimated Duration** | {} weeks |
| **System Size** | {} GB |
| **Active Users** | {} |
| **Modules** | {} |
"#,
        profile.sid,
        profile.system_type,
        profile.version,
        profile.database,
        assessment.total_score,
        score_indicator(assessment.total_score),
        assessment.complexity_level,
        assessment.estimated_duration,
        profile.size,
        profile.users,
        profile.modules.join(", ")
    )
}

fn render_custom_code(assessment: &Assessment) -> String {
    let summary = assessment.compatibility_summary();
    let mut md = String::from("## Custom Code\n\n");

    if summary.total == 0 {
        md.push_str("✅ No custom objects in scope.\n");
        return md;
    }

    md.push_str(&format!(
        "{} objects, {} lines, {} hours estimated adaptation effort.\n\n",
        summary.total,
        assessment.profile.custom_code,
        assessment.total_effort_hours()
    ));

    md.push_str("| Compatibility | Count | Share |\n|---------------|-------|-------|\n");
    for (label, compatibility, count) in [
        ("🟢 Compatible", Compatibility::Compatible, summary.compatible),
        ("🟡 Deprecated", Compatibility::Deprecated, summary.deprecated),
        ("🔵 Replaced", Compatibility::Replaced, summary.replaced),
        ("🔴 Incompatible", Compatibility::Incompatible, summary.incompatible),
    ] {
        md.push_str(&format!(
            "| {} | {} | {:.1}% |\n",
            label,
            count,
            summary.percentage(compatibility)
        ));
    }
    md.push('\n');

    let modules = assessment.module_breakdown();
    md.push_str("### By Module\n\n");
    md.push_str("| Module | Total | Compatible | Needs Review | Must Change |\n");
    md.push_str("|--------|-------|------------|--------------|-------------|\n");
    for row in modules.iter().take(MAX_MODULE_ROWS) {
        let s = &row.summary;
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            row.module,
            s.total,
            s.compatible,
            s.deprecated + s.replaced,
            s.incompatible
        ));
    }
    let hidden = modules.len().saturating_sub(MAX_MODULE_ROWS);
    if hidden > 0 {
        md.push_str(&format!("\n*...and {} more modules*\n", hidden));
    }

    md
}

fn render_roadmap(assessment: &Assessment) -> String {
    let roadmap = Roadmap::for_assessment(assessment);
    let mut md = format!(
        "## Roadmap\n\n{} weeks total, {:.0}% complete.\n\n",
        roadmap.total_weeks,
        roadmap.overall_progress()
    );
    md.push_str("| Phase | Weeks | Status | Progress | Tasks |\n");
    md.push_str("|-------|-------|--------|----------|-------|\n");
    for phase in &roadmap.phases {
        let status = match phase.status {
            PhaseStatus::Completed => "✅",
            PhaseStatus::InProgress => "🔄",
            PhaseStatus::Pending => "⏳",
        };
        md.push_str(&format!(
            "| {} | {} | {} {} | {}% | {} |\n",
            phase.name,
            phase.weeks,
            status,
            phase.status,
            phase.progress,
            phase.tasks.join(", ")
        ));
    }
    md
}

fn render_recommendations(assessment: &Assessment) -> String {
    let mut md = String::from("## Recommendations\n\n");
    if assessment.recommendations.is_empty() {
        md.push_str("No recommendations.\n");
        return md;
    }
    for rec in &assessment.recommendations {
        md.push_str(&format!(
            "#### {} {}\n\n`{}` | {} hours\n\n{}\n\n",
            priority_emoji(rec.priority),
            rec.title,
            rec.id,
            rec.effort,
            rec.description
        ));
    }
    md
}

fn render_risks(assessment: &Assessment) -> String {
    let mut md = String::from("## Risks\n\n");
    if assessment.risks.is_empty() {
        md.push_str("No risks identified.\n");
        return md;
    }
    for risk in &assessment.risks {
        md.push_str(&format!(
            "#### {} {} ({} severity, {}% likely)\n\n{}\n\n> **Mitigation:** {}\n\n",
            severity_emoji(risk.severity),
            risk.category,
            risk.severity,
            risk.probability,
            risk.description,
            risk.mitigation
        ));
    }
    md
}

fn render_footer() -> String {
    r#"---

*Generated by readiness - synthetic migration readiness assessment*
"#
    .to_string()
}

fn score_emoji(score: u8) -> &'static str {
    match score {
        90..=100 => "🏆",
        80..=89 => "⭐",
        60..=79 => "⚠️",
        _ => "❌",
    }
}

fn score_indicator(score: u8) -> &'static str {
    if score >= 80 {
        "✅ Good"
    } else if score >= 60 {
        "⚠️ Fair"
    } else {
        "❌ Poor"
    }
}

fn priority_emoji(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🔵",
    }
}

fn severity_emoji(severity: RiskSeverity) -> &'static str {
    match severity {
        RiskSeverity::Critical => "🔴",
        RiskSeverity::High => "🟠",
        RiskSeverity::Medium => "🟡",
        RiskSeverity::Low => "🔵",
    }
}
