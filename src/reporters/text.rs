//! Text (terminal) reporter with colors and formatting

use crate::models::{Assessment, Priority, RiskSeverity};
use crate::roadmap::{PhaseStatus, Roadmap};
use crate::scoring::ScoreBreakdown;
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Maximum modules listed in the breakdown table
const MAX_MODULE_ROWS: usize = 10;
/// Recommendations and risks shown in the summary
const TOP_ITEMS: usize = 3;

fn score_color(score: u8) -> &'static str {
    if score >= 80 {
        GREEN
    } else if score >= 60 {
        YELLOW
    } else {
        RED
    }
}

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => RED,
        Priority::Medium => YELLOW,
        Priority::Low => DIM,
    }
}

fn severity_color(severity: RiskSeverity) -> &'static str {
    match severity {
        RiskSeverity::Critical | RiskSeverity::High => RED,
        RiskSeverity::Medium => YELLOW,
        RiskSeverity::Low => DIM,
    }
}

/// Render assessment as formatted terminal output
pub fn render(assessment: &Assessment) -> Result<String> {
    let mut out = String::new();
    let profile = &assessment.profile;

    // Header
    out.push_str(&format!("\n{BOLD}Migration Readiness Assessment{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "{} {DIM}| System {} ({}) | {}{RESET}\n\n",
        assessment.id,
        profile.sid,
        profile.system_type,
        assessment.assessment_date.format("%Y-%m-%d")
    ));

    // Key metrics
    let color = score_color(assessment.total_score);
    out.push_str(&format!(
        "Readiness: {color}{BOLD}{}%{RESET}  Complexity: {BOLD}{}{RESET} ({} weeks)\n",
        assessment.total_score, assessment.complexity_level, assessment.estimated_duration
    ));
    out.push_str(&format!(
        "Size: {:.1} TB  Users: {}  Modules: {}\n\n",
        profile.size as f64 / 1000.0,
        profile.users,
        profile.modules.join(", ")
    ));

    // Custom code
    let summary = assessment.compatibility_summary();
    out.push_str(&format!(
        "{BOLD}CUSTOM CODE{RESET} ({} objects, {} lines, {} hrs effort)\n",
        summary.total,
        profile.custom_code,
        assessment.total_effort_hours()
    ));
    out.push_str(&format!(
        "  {GREEN}{} compatible{RESET} | {YELLOW}{} deprecated{RESET} | {RED}{} incompatible{RESET}",
        summary.compatible, summary.deprecated, summary.incompatible
    ));
    if summary.replaced > 0 {
        out.push_str(&format!(" | {} replaced", summary.replaced));
    }
    out.push_str("\n\n");

    let modules = assessment.module_breakdown();
    if !modules.is_empty() {
        out.push_str(&format!(
            "{DIM}  MODULE  TOTAL  OK    REVIEW  CHANGE{RESET}\n"
        ));
        for row in modules.iter().take(MAX_MODULE_ROWS) {
            let s = &row.summary;
            out.push_str(&format!(
                "  {:<6}  {:>5}  {:>4}  {:>6}  {:>6}\n",
                row.module,
                s.total,
                s.compatible,
                s.deprecated + s.replaced,
                s.incompatible
            ));
        }
        out.push('\n');
    }

    // Roadmap
    let roadmap = Roadmap::for_assessment(assessment);
    out.push_str(&format!(
        "{BOLD}ROADMAP{RESET} ({} weeks, {:.0}% complete)\n",
        roadmap.total_weeks,
        roadmap.overall_progress()
    ));
    for phase in &roadmap.phases {
        let marker = match phase.status {
            PhaseStatus::Completed => format!("{GREEN}[x]{RESET}"),
            PhaseStatus::InProgress => format!("{YELLOW}[~]{RESET}"),
            PhaseStatus::Pending => format!("{DIM}[ ]{RESET}"),
        };
        out.push_str(&format!(
            "  {} {:<18} {:>3} wk  {DIM}{}{RESET}\n",
            marker,
            phase.name,
            phase.weeks,
            phase.tasks.join(" • ")
        ));
    }
    out.push('\n');

    // Recommendations and risks
    if !assessment.recommendations.is_empty() {
        out.push_str(&format!("{BOLD}TOP RECOMMENDATIONS{RESET}\n"));
        for rec in assessment.recommendations.iter().take(TOP_ITEMS) {
            let c = priority_color(rec.priority);
            out.push_str(&format!(
                "  {c}[{}]{RESET} {} {DIM}({} hrs){RESET}\n      {}\n",
                rec.priority, rec.title, rec.effort, rec.description
            ));
        }
        out.push('\n');
    }

    if !assessment.risks.is_empty() {
        out.push_str(&format!("{BOLD}CRITICAL RISKS{RESET}\n"));
        for risk in assessment.risks.iter().take(TOP_ITEMS) {
            let c = severity_color(risk.severity);
            out.push_str(&format!(
                "  {c}[{}]{RESET} {} {DIM}({}% likely){RESET}\n      {}\n",
                risk.severity, risk.category, risk.probability, risk.description
            ));
        }
        out.push('\n');
    }

    Ok(out)
}

/// Render the scoring formula with every fired deduction
pub fn render_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut out = format!("{BOLD}SCORE BREAKDOWN{RESET}\n  Base score: 100\n");
    if breakdown.deductions.is_empty() {
        out.push_str(&format!("  {DIM}No deductions{RESET}\n"));
    }
    for d in &breakdown.deductions {
        out.push_str(&format!(
            "  -{:<3} {} {} > {}\n",
            d.points, d.factor, d.value, d.threshold
        ));
    }
    if breakdown.is_clamped() {
        out.push_str(&format!(
            "  Raw score {} clamped to {}\n",
            breakdown.raw_score, breakdown.score
        ));
    }
    let color = score_color(breakdown.score);
    out.push_str(&format!(
        "  = {color}{BOLD}{}{RESET}\n",
        breakdown.score
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Configuration, Scenario};
    use crate::reporters::tests::test_assessment;
    use crate::scoring::breakdown;

    #[test]
    fn test_text_render_sections() {
        let out = render(&test_assessment()).expect("render text");
        assert!(out.contains("Migration Readiness Assessment"));
        assert!(out.contains("85%"));
        assert!(out.contains("CUSTOM CODE"));
        assert!(out.contains("(12 objects"));
        assert!(out.contains("ROADMAP"));
        assert!(out.contains("Realization"));
        assert!(out.contains("TOP RECOMMENDATIONS"));
        assert!(out.contains("CRITICAL RISKS"));
    }

    #[test]
    fn test_text_render_empty_population() {
        let mut assessment = test_assessment();
        assessment.custom_objects.clear();
        assessment.profile.custom_code = 0;
        assessment.recommendations.clear();
        let out = render(&assessment).expect("render text");
        assert!(out.contains("(0 objects, 0 lines, 0 hrs effort)"));
        assert!(!out.contains("MODULE  TOTAL"));
        assert!(!out.contains("TOP RECOMMENDATIONS"));
    }

    #[test]
    fn test_breakdown_render() {
        let config = Configuration::default().with_scenario(Scenario::Realistic);
        let out = render_breakdown(&breakdown(&config));
        assert!(out.contains("system size 2500 > 2000"));
        assert!(out.contains("custom objects 150 > 100"));
        assert!(out.contains("active users 1200 > 1000"));
        assert!(out.contains("70"));

        let out = render_breakdown(&breakdown(&Configuration::default().with_scenario(Scenario::Best)));
        assert!(out.contains("No deductions"));
    }
}
