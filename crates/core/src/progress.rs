//! Timeline progress state and derived analytics.
//!
//! A user's progress is a set of completed step ids. Everything else
//! (percentages, the current phase, per-category stats) is derived from that
//! set and a [`TimelineCatalog`] by the pure functions below.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::timeline::{TimelineCatalog, TimelineStep};
use crate::types::StepId;

/// Completed step ids for one user.
pub type CompletedSteps = BTreeSet<StepId>;

/// Phase label reported once every threshold has been passed.
pub const TERMINAL_PHASE: &str = "Settlement";

/// Expected completion (in percent) per day of account age.
///
/// 45 days in, a user is expected to be 15% through the checklist.
const EXPECTED_PCT_PER_DAY: f64 = 15.0 / 45.0;

/// Fraction of the expected completion that still counts as on track.
const ON_TRACK_TOLERANCE: f64 = 0.8;

// ---------------------------------------------------------------------------
// State transitions
// ---------------------------------------------------------------------------

/// Apply one completion toggle to a stored step list.
///
/// Adds `step_id` when `completed` is true and it is absent; removes it when
/// `completed` is false and it is present. Returns whether the list changed.
/// Repeating a call is a no-op, so the list never holds duplicates.
pub fn apply_completion(steps: &mut Vec<StepId>, step_id: StepId, completed: bool) -> bool {
    let present = steps.contains(&step_id);
    match (completed, present) {
        (true, false) => {
            steps.push(step_id);
            true
        }
        (false, true) => {
            steps.retain(|s| *s != step_id);
            true
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Number of completed ids that exist in the catalog.
pub fn completed_count(completed: &CompletedSteps, catalog: &TimelineCatalog) -> usize {
    completed.iter().filter(|id| catalog.contains(**id)).count()
}

/// `completed / total * 100`, or 0 for an empty catalog.
pub fn completion_percentage(completed: &CompletedSteps, catalog: &TimelineCatalog) -> f64 {
    percentage(completed_count(completed, catalog), catalog.len())
}

/// Current phase label for a completed set.
///
/// Unlike [`completed_count`], ids missing from the catalog still count here.
/// Uses only the highest completed id: with nothing completed the first
/// category is returned; otherwise the first category whose last step id is
/// at or above `max(completed)`, falling back to the last category (or
/// [`TERMINAL_PHASE`]) above every threshold. Completing step 39 alone
/// therefore reports the final phase.
pub fn current_phase(completed: &CompletedSteps, catalog: &TimelineCatalog) -> String {
    let Some(max_completed) = completed.last().copied() else {
        return catalog.first_category().unwrap_or(TERMINAL_PHASE).to_string();
    };

    catalog
        .phase_thresholds()
        .iter()
        .find(|t| max_completed <= t.last_step_id)
        .map(|t| t.category.as_str())
        .or_else(|| catalog.last_category())
        .unwrap_or(TERMINAL_PHASE)
        .to_string()
}

/// Completion stats for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    pub completed: usize,
    pub percentage: f64,
}

/// Per-category stats, in catalog category order.
pub fn category_breakdown(
    completed: &CompletedSteps,
    catalog: &TimelineCatalog,
) -> IndexMap<String, CategoryStats> {
    let mut breakdown: IndexMap<String, CategoryStats> = IndexMap::new();
    for step in catalog.list_steps() {
        let entry = breakdown
            .entry(step.category.clone())
            .or_insert(CategoryStats {
                total: 0,
                completed: 0,
                percentage: 0.0,
            });
        entry.total += 1;
        if completed.contains(&step.id) {
            entry.completed += 1;
        }
    }
    for stats in breakdown.values_mut() {
        stats.percentage = percentage(stats.completed, stats.total);
    }
    breakdown
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A catalog step with the caller's completion flag.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedStep<'a> {
    #[serde(flatten)]
    pub step: &'a TimelineStep,
    pub is_completed: bool,
}

/// Annotate every catalog step with its completion flag.
pub fn annotate<'a>(catalog: &'a TimelineCatalog, completed: &CompletedSteps) -> Vec<AnnotatedStep<'a>> {
    catalog
        .list_steps()
        .iter()
        .map(|step| AnnotatedStep {
            step,
            is_completed: completed.contains(&step.id),
        })
        .collect()
}

/// Aggregate counts for a completed set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub total_steps: usize,
    pub completed_steps: usize,
    pub completion_percentage: f64,
    pub current_phase: String,
}

pub fn summarize(completed: &CompletedSteps, catalog: &TimelineCatalog) -> ProgressSummary {
    ProgressSummary {
        total_steps: catalog.len(),
        completed_steps: completed_count(completed, catalog),
        completion_percentage: completion_percentage(completed, catalog),
        current_phase: current_phase(completed, catalog),
    }
}

/// Steps of one category with their flags and stats.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup<'a> {
    pub name: String,
    pub steps: Vec<AnnotatedStep<'a>>,
    pub total_steps: usize,
    pub completed_steps: usize,
    pub completion_percentage: f64,
}

/// Annotated steps grouped by category, in catalog order.
pub fn group_by_category<'a>(
    catalog: &'a TimelineCatalog,
    completed: &CompletedSteps,
) -> IndexMap<String, CategoryGroup<'a>> {
    let mut groups: IndexMap<String, CategoryGroup<'a>> = IndexMap::new();
    for annotated in annotate(catalog, completed) {
        let group = groups
            .entry(annotated.step.category.clone())
            .or_insert_with(|| CategoryGroup {
                name: annotated.step.category.clone(),
                steps: Vec::new(),
                total_steps: 0,
                completed_steps: 0,
                completion_percentage: 0.0,
            });
        group.total_steps += 1;
        if annotated.is_completed {
            group.completed_steps += 1;
        }
        group.steps.push(annotated);
    }
    for group in groups.values_mut() {
        group.completion_percentage = percentage(group.completed_steps, group.total_steps);
    }
    groups
}

/// Pace indicators for the analytics overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineInsights {
    pub days_active: i64,
    pub avg_steps_per_week: f64,
    /// Weeks left at the current pace; `None` until a step is completed.
    pub projected_weeks_remaining: Option<f64>,
    pub expected_percentage: f64,
    pub on_track: bool,
}

/// Compare actual progress with the expected pace for an account age.
pub fn timeline_insights(summary: &ProgressSummary, days_active: i64) -> TimelineInsights {
    let days_active = days_active.max(0);
    let weeks = (days_active as f64 / 7.0).max(1.0);
    let avg_steps_per_week = round1(summary.completed_steps as f64 / weeks);

    let remaining = summary.total_steps.saturating_sub(summary.completed_steps);
    let projected_weeks_remaining = if avg_steps_per_week > 0.0 {
        Some(round1(remaining as f64 / avg_steps_per_week))
    } else {
        None
    };

    let expected_percentage = (days_active as f64 * EXPECTED_PCT_PER_DAY).min(100.0);

    TimelineInsights {
        days_active,
        avg_steps_per_week,
        projected_weeks_remaining,
        expected_percentage: round1(expected_percentage),
        on_track: summary.completion_percentage >= expected_percentage * ON_TRACK_TOLERANCE,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::CatalogVersion;

    fn v39() -> TimelineCatalog {
        TimelineCatalog::builtin(CatalogVersion::V39)
    }

    fn v34() -> TimelineCatalog {
        TimelineCatalog::builtin(CatalogVersion::V34)
    }

    fn set(ids: &[StepId]) -> CompletedSteps {
        ids.iter().copied().collect()
    }

    #[test]
    fn apply_completion_is_idempotent() {
        let mut steps = vec![1, 2];
        assert!(apply_completion(&mut steps, 5, true));
        let once = steps.clone();
        assert!(!apply_completion(&mut steps, 5, true));
        assert_eq!(steps, once);
    }

    #[test]
    fn apply_completion_round_trip_restores_state() {
        let mut steps = vec![3, 1];
        let before = steps.clone();
        apply_completion(&mut steps, 5, true);
        apply_completion(&mut steps, 5, false);
        assert_eq!(steps, before);
    }

    #[test]
    fn removing_absent_step_is_noop() {
        let mut steps = vec![1];
        assert!(!apply_completion(&mut steps, 7, false));
        assert_eq!(steps, vec![1]);
    }

    #[test]
    fn empty_set_is_first_phase() {
        assert_eq!(current_phase(&set(&[]), &v39()), "Planning");
        assert_eq!(current_phase(&set(&[]), &v34()), "Planning");
    }

    #[test]
    fn max_id_heuristic_reports_final_phase() {
        assert_eq!(current_phase(&set(&[39]), &v39()), "Settlement");
    }

    #[test]
    fn sample_user_is_in_employment_on_v39() {
        assert_eq!(current_phase(&set(&[1, 2, 3, 8, 12]), &v39()), "Employment");
    }

    #[test]
    fn sample_user_is_in_housing_on_v34() {
        // On the 34-step catalog step 12 opens the Housing band.
        assert_eq!(current_phase(&set(&[1, 2, 3, 8, 12]), &v34()), "Housing");
    }

    #[test]
    fn phase_boundaries_v39() {
        let catalog = v39();
        let cases = [
            (5, "Planning"),
            (6, "Visa & Legal"),
            (11, "Visa & Legal"),
            (18, "Employment"),
            (19, "Housing"),
            (28, "Financial"),
            (33, "Logistics"),
            (36, "UK Arrival"),
            (37, "Settlement"),
        ];
        for (max, expected) in cases {
            assert_eq!(current_phase(&set(&[1, max]), &catalog), expected, "max={max}");
        }
    }

    #[test]
    fn ids_beyond_catalog_map_to_terminal_phase() {
        assert_eq!(current_phase(&set(&[120]), &v34()), "Settlement");
    }

    #[test]
    fn percentage_of_empty_and_full() {
        let catalog = v39();
        assert_eq!(completion_percentage(&set(&[]), &catalog), 0.0);
        let all: CompletedSteps = catalog.list_steps().iter().map(|s| s.id).collect();
        assert!((completion_percentage(&all, &catalog) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_ids_do_not_count_towards_percentage() {
        let catalog = v39();
        assert_eq!(completed_count(&set(&[1, 2, 400]), &catalog), 2);
    }

    #[test]
    fn ids_left_over_from_a_larger_catalog() {
        let catalog = v34();
        let stale = set(&[37]);
        assert_eq!(completed_count(&stale, &catalog), 0);
        assert_eq!(completion_percentage(&stale, &catalog), 0.0);
        assert_eq!(current_phase(&stale, &catalog), "Settlement");

        let mixed = set(&[1, 37]);
        assert_eq!(completed_count(&mixed, &catalog), 1);
        assert_eq!(current_phase(&mixed, &catalog), "Settlement");
    }

    #[test]
    fn percentage_is_monotonic_as_steps_complete() {
        let catalog = v39();
        let mut completed = CompletedSteps::new();
        let mut last = completion_percentage(&completed, &catalog);
        for step in catalog.list_steps().iter().rev() {
            completed.insert(step.id);
            let now = completion_percentage(&completed, &catalog);
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn weighted_category_percentages_sum_to_overall() {
        for catalog in [v34(), v39()] {
            let completed = set(&[1, 2, 3, 8, 12, 17, 30, 31]);
            let overall = completion_percentage(&completed, &catalog);
            let weighted: f64 = category_breakdown(&completed, &catalog)
                .values()
                .map(|c| c.percentage * c.total as f64 / catalog.len() as f64)
                .sum();
            assert!((overall - weighted).abs() < 1e-9, "{overall} vs {weighted}");
        }
    }

    #[test]
    fn breakdown_keeps_catalog_order() {
        let catalog = v39();
        let breakdown = category_breakdown(&set(&[1, 6]), &catalog);
        let keys: Vec<&str> = breakdown.keys().map(String::as_str).collect();
        assert_eq!(keys, catalog.categories().collect::<Vec<_>>());
        assert_eq!(breakdown["Planning"].completed, 1);
        assert_eq!(breakdown["Planning"].total, 5);
        assert!((breakdown["Planning"].percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn group_by_category_counts_match_breakdown() {
        let catalog = v39();
        let completed = set(&[1, 2, 12]);
        let groups = group_by_category(&catalog, &completed);
        let breakdown = category_breakdown(&completed, &catalog);
        for (name, group) in &groups {
            assert_eq!(group.total_steps, breakdown[name].total);
            assert_eq!(group.completed_steps, breakdown[name].completed);
            assert_eq!(group.steps.len(), group.total_steps);
        }
    }

    #[test]
    fn summary_serializes_flat_fields() {
        let summary = summarize(&set(&[1]), &v39());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_steps"], 39);
        assert_eq!(json["completed_steps"], 1);
        assert_eq!(json["current_phase"], "Planning");
    }

    #[test]
    fn annotated_step_flattens_step_fields() {
        let catalog = v39();
        let annotated = annotate(&catalog, &set(&[2]));
        let json = serde_json::to_value(&annotated[1]).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["is_completed"], true);
        assert_eq!(json["category"], "Planning");
    }

    #[test]
    fn insights_on_track_threshold() {
        let catalog = v34();
        // 5 of 34 is ~14.7%; after 45 days 15% is expected and 12% is enough.
        let summary = summarize(&set(&[1, 2, 3, 8, 12]), &catalog);
        let insights = timeline_insights(&summary, 45);
        assert!(insights.on_track);
        assert_eq!(insights.expected_percentage, 15.0);

        let summary = summarize(&set(&[1]), &catalog);
        assert!(!timeline_insights(&summary, 45).on_track);
    }

    #[test]
    fn insights_without_progress_have_no_projection() {
        let summary = summarize(&set(&[]), &v39());
        let insights = timeline_insights(&summary, 10);
        assert_eq!(insights.avg_steps_per_week, 0.0);
        assert!(insights.projected_weeks_remaining.is_none());
    }
}
