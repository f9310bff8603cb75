//! Dashboard analytics aggregation.
//!
//! The summary is recomputed from scratch on every request by folding
//! independent store snapshots; nothing here is cached or incrementally
//! maintained. The reads are not snapshot-consistent with each other,
//! so a write landing mid-aggregation can leave the sums reflecting a
//! mixed state.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::Project;

/// Assumed working hours per employee per month, the denominator for
/// resource utilization.
pub const MONTHLY_CAPACITY_HOURS: i64 = 160;

#[derive(Debug, Clone, Copy, Default)]
pub struct TaskCounts {
    pub total: i64,
    pub completed: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HourSplit {
    pub billable: Decimal,
    pub non_billable: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_projects: i64,
    pub active_projects: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub total_hours: Decimal,
    pub billable_hours: Decimal,
    pub non_billable_hours: Decimal,
    pub total_revenue: Decimal,
    pub total_cost: Decimal,
    pub profit: Decimal,
    pub project_progress: Vec<ProjectProgress>,
    pub resource_utilization: Vec<ResourceUtilization>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgress {
    pub name: String,
    pub progress: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUtilization {
    pub name: String,
    pub utilization: u32,
}

/// Hours logged as a percentage of monthly capacity, rounded to the
/// nearest integer and clamped at 100.
pub fn utilization_pct(hours: Decimal) -> u32 {
    let pct = (hours * Decimal::from(100) / Decimal::from(MONTHLY_CAPACITY_HOURS))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    pct.min(Decimal::from(100)).to_u32().unwrap_or(0)
}

/// Fold the per-source snapshots into the dashboard summary.
pub fn summarize(
    projects: &[Project],
    tasks: TaskCounts,
    total_hours: Decimal,
    split: HourSplit,
    total_revenue: Decimal,
    total_cost: Decimal,
    hours_by_employee: Vec<(String, Decimal)>,
) -> Summary {
    let active_projects = projects
        .iter()
        .filter(|p| p.status == "in_progress")
        .count() as i64;

    let project_progress = projects
        .iter()
        .map(|p| ProjectProgress {
            name: p.name.clone(),
            progress: p.progress,
        })
        .collect();

    // Employees with no timesheets simply never appear in the grouped
    // rows, so there is no zero-hours division case to handle.
    let resource_utilization = hours_by_employee
        .into_iter()
        .map(|(name, hours)| ResourceUtilization {
            utilization: utilization_pct(hours),
            name,
        })
        .collect();

    Summary {
        total_projects: projects.len() as i64,
        active_projects,
        total_tasks: tasks.total,
        completed_tasks: tasks.completed,
        total_hours,
        billable_hours: split.billable,
        non_billable_hours: split.non_billable,
        total_revenue,
        total_cost,
        profit: total_revenue - total_cost,
        project_progress,
        resource_utilization,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn utilization_is_clamped_at_100() {
        assert_eq!(utilization_pct(dec(200)), 100);
        assert_eq!(utilization_pct(dec(160)), 100);
    }

    #[test]
    fn utilization_rounds_half_away_from_zero() {
        // 100 / 160 = 62.5% -> 63
        assert_eq!(utilization_pct(dec(100)), 63);
        assert_eq!(utilization_pct(dec(80)), 50);
        assert_eq!(utilization_pct(Decimal::ZERO), 0);
    }

    #[test]
    fn billable_split_adds_up_to_total() {
        let split = HourSplit {
            billable: Decimal::new(125, 1),
            non_billable: Decimal::new(75, 1),
        };
        let total = split.billable + split.non_billable;
        let summary = summarize(
            &[],
            TaskCounts::default(),
            total,
            split,
            Decimal::ZERO,
            Decimal::ZERO,
            vec![],
        );
        assert_eq!(
            summary.billable_hours + summary.non_billable_hours,
            summary.total_hours
        );
    }

    #[test]
    fn profit_can_go_negative() {
        let summary = summarize(
            &[],
            TaskCounts::default(),
            Decimal::ZERO,
            HourSplit::default(),
            dec(1_000),
            dec(1_500),
            vec![],
        );
        assert_eq!(summary.profit, dec(-500));
    }

    #[test]
    fn empty_population_yields_zeroes() {
        let summary = summarize(
            &[],
            TaskCounts::default(),
            Decimal::ZERO,
            HourSplit::default(),
            Decimal::ZERO,
            Decimal::ZERO,
            vec![],
        );
        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.total_hours, Decimal::ZERO);
        assert_eq!(summary.profit, Decimal::ZERO);
        assert!(summary.project_progress.is_empty());
        assert!(summary.resource_utilization.is_empty());
    }

    #[test]
    fn per_employee_utilization_is_independent() {
        let summary = summarize(
            &[],
            TaskCounts::default(),
            dec(240),
            HourSplit {
                billable: dec(240),
                non_billable: Decimal::ZERO,
            },
            Decimal::ZERO,
            Decimal::ZERO,
            vec![("Alice".to_string(), dec(200)), ("Bob".to_string(), dec(40))],
        );
        assert_eq!(summary.resource_utilization.len(), 2);
        assert_eq!(summary.resource_utilization[0].utilization, 100);
        assert_eq!(summary.resource_utilization[1].utilization, 25);
    }
}
