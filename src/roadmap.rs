//! Phased migration roadmap
//!
//! Four fixed phases whose base lengths (4, 12, 8 and 2 weeks) are rescaled
//! to the assessment's estimated duration. Phase status and progress are
//! static seed data.

use crate::models::Assessment;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseStatus {
    Completed,
    InProgress,
    Pending,
}

impl std::fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseStatus::Completed => write!(f, "completed"),
            PhaseStatus::InProgress => write!(f, "in-progress"),
            PhaseStatus::Pending => write!(f, "pending"),
        }
    }
}

struct PhaseTemplate {
    id: &'static str,
    name: &'static str,
    base_weeks: u32,
    tasks: &'static [&'static str],
    status: PhaseStatus,
    progress: u8,
}

const PHASES: [PhaseTemplate; 4] = [
    PhaseTemplate {
        id: "prep",
        name: "Preparation",
        base_weeks: 4,
        tasks: &["System analysis", "Custom code review", "Data cleansing"],
        status: PhaseStatus::Completed,
        progress: 100,
    },
    PhaseTemplate {
        id: "real",
        name: "Realization",
        base_weeks: 12,
        tasks: &["Configuration", "Custom code adaptation", "Integration testing"],
        status: PhaseStatus::InProgress,
        progress: 45,
    },
    PhaseTemplate {
        id: "final",
        name: "Final Preparation",
        base_weeks: 8,
        tasks: &["Data migration test", "End user training", "Cutover planning"],
        status: PhaseStatus::Pending,
        progress: 0,
    },
    PhaseTemplate {
        id: "golive",
        name: "Go-Live & Support",
        base_weeks: 2,
        tasks: &["Production cutover", "Hypercare support", "Performance tuning"],
        status: PhaseStatus::Pending,
        progress: 0,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub id: String,
    pub name: String,
    pub weeks: u32,
    pub tasks: Vec<String>,
    pub status: PhaseStatus,
    /// Completion in percent
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roadmap {
    pub total_weeks: u32,
    pub phases: Vec<Phase>,
}

impl Roadmap {
    pub fn for_assessment(assessment: &Assessment) -> Self {
        Self::for_duration(assessment.estimated_duration)
    }

    /// Distribute `total_weeks` across the phases in proportion to their base
    /// lengths. Phase weeks always sum to `total_weeks`.
    pub fn for_duration(total_weeks: u32) -> Self {
        let weeks = apportion(total_weeks);
        let phases = PHASES
            .iter()
            .zip(weeks)
            .map(|(template, weeks)| Phase {
                id: template.id.to_string(),
                name: template.name.to_string(),
                weeks,
                tasks: template.tasks.iter().map(|t| t.to_string()).collect(),
                status: template.status,
                progress: template.progress,
            })
            .collect();
        Self {
            total_weeks,
            phases,
        }
    }

    pub fn completed_weeks(&self) -> u32 {
        self.phases
            .iter()
            .filter(|p| p.status == PhaseStatus::Completed)
            .map(|p| p.weeks)
            .sum()
    }

    /// Completed share of the plan, in percent
    pub fn overall_progress(&self) -> f64 {
        if self.total_weeks == 0 {
            return 0.0;
        }
        self.completed_weeks() as f64 * 100.0 / self.total_weeks as f64
    }
}

/// Largest-remainder apportionment; once there are enough weeks, every phase
/// gets at least one
fn apportion(total_weeks: u32) -> Vec<u32> {
    let base_total: u32 = PHASES.iter().map(|p| p.base_weeks).sum();
    let numerators: Vec<u64> = PHASES
        .iter()
        .map(|p| p.base_weeks as u64 * total_weeks as u64)
        .collect();

    let mut weeks: Vec<u32> = numerators
        .iter()
        .map(|n| (n / base_total as u64) as u32)
        .collect();
    let assigned: u32 = weeks.iter().sum();

    let mut by_remainder: Vec<usize> = (0..PHASES.len()).collect();
    // Stable sort: ties go to the earlier phase
    by_remainder.sort_by_key(|&i| std::cmp::Reverse(numerators[i] % base_total as u64));
    for &i in by_remainder.iter().take((total_weeks - assigned) as usize) {
        weeks[i] += 1;
    }

    if total_weeks as usize >= PHASES.len() {
        while let Some(empty) = weeks.iter().position(|&w| w == 0) {
            let Some(largest) = (0..weeks.len()).max_by_key(|&i| weeks[i]) else {
                break;
            };
            weeks[largest] -= 1;
            weeks[empty] += 1;
        }
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplexityLevel;
    use crate::scoring::duration;

    fn weeks(roadmap: &Roadmap) -> Vec<u32> {
        roadmap.phases.iter().map(|p| p.weeks).collect()
    }

    #[test]
    fn test_base_duration_is_unchanged() {
        assert_eq!(weeks(&Roadmap::for_duration(26)), vec![4, 12, 8, 2]);
    }

    #[test]
    fn test_durations_per_complexity() {
        assert_eq!(weeks(&Roadmap::for_duration(16)), vec![3, 7, 5, 1]);
        assert_eq!(weeks(&Roadmap::for_duration(24)), vec![4, 11, 7, 2]);
        assert_eq!(weeks(&Roadmap::for_duration(36)), vec![5, 17, 11, 3]);
        assert_eq!(weeks(&Roadmap::for_duration(52)), vec![8, 24, 16, 4]);
    }

    #[test]
    fn test_phases_sum_to_total() {
        for level in ComplexityLevel::ALL {
            let total = duration(level);
            let roadmap = Roadmap::for_duration(total);
            assert_eq!(weeks(&roadmap).iter().sum::<u32>(), total);
            assert!(roadmap.phases.iter().all(|p| p.weeks >= 1));
        }
        for total in 0..80 {
            assert_eq!(weeks(&Roadmap::for_duration(total)).iter().sum::<u32>(), total);
        }
    }

    #[test]
    fn test_short_plans_still_cover_every_phase() {
        assert_eq!(weeks(&Roadmap::for_duration(4)), vec![1, 1, 1, 1]);
        assert!(weeks(&Roadmap::for_duration(5)).iter().all(|&w| w >= 1));
    }

    #[test]
    fn test_overall_progress() {
        let roadmap = Roadmap::for_duration(26);
        assert_eq!(roadmap.completed_weeks(), 4);
        assert!((roadmap.overall_progress() - 400.0 / 26.0).abs() < 1e-9);
        assert_eq!(Roadmap::for_duration(0).overall_progress(), 0.0);
    }

    #[test]
    fn test_status_label_matches_serialized_name() {
        for status in [
            PhaseStatus::Completed,
            PhaseStatus::InProgress,
            PhaseStatus::Pending,
        ] {
            let serialized = serde_json::to_string(&status).unwrap();
            assert_eq!(serialized, format!("\"{status}\""));
        }
        assert_eq!(PhaseStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn test_phase_content() {
        let roadmap = Roadmap::for_duration(36);
        assert_eq!(roadmap.phases.len(), 4);
        assert_eq!(roadmap.phases[1].name, "Realization");
        assert_eq!(roadmap.phases[1].status, PhaseStatus::InProgress);
        assert_eq!(roadmap.phases[1].progress, 45);
        assert_eq!(roadmap.phases[3].tasks.len(), 3);
    }
}
