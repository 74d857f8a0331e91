//! Relocation budget arithmetic.
//!
//! Amounts are whole US dollars.

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub budgeted: i64,
    pub spent: i64,
    pub remaining: i64,
}

impl BudgetLine {
    pub fn new(budgeted: i64, spent: i64) -> Self {
        Self {
            budgeted,
            spent,
            remaining: budgeted - spent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub total_budget: i64,
    pub spent_to_date: i64,
    pub committed: i64,
    pub remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingEntry {
    pub month: &'static str,
    pub amount: i64,
    pub category: &'static str,
}

/// Estimated one-off costs with their total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub items: IndexMap<&'static str, i64>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostTracking {
    pub budget_overview: BudgetOverview,
    pub cost_categories: IndexMap<&'static str, BudgetLine>,
    pub spending_timeline: Vec<SpendingEntry>,
}

#[derive(Debug, Clone)]
pub struct BudgetPlan {
    lines: IndexMap<&'static str, BudgetLine>,
    committed: i64,
    estimates: IndexMap<&'static str, i64>,
    spending: Vec<SpendingEntry>,
}

impl BudgetPlan {
    pub fn new(
        lines: IndexMap<&'static str, BudgetLine>,
        committed: i64,
        estimates: IndexMap<&'static str, i64>,
        spending: Vec<SpendingEntry>,
    ) -> Self {
        Self {
            lines,
            committed,
            estimates,
            spending,
        }
    }

    pub fn builtin() -> Self {
        let lines = [
            ("visa_and_legal", BudgetLine::new(2_000, 1_200)),
            ("moving_and_shipping", BudgetLine::new(12_000, 0)),
            ("housing_deposits", BudgetLine::new(8_000, 0)),
            ("travel_costs", BudgetLine::new(3_000, 0)),
            ("initial_living", BudgetLine::new(15_000, 0)),
            ("emergency_fund", BudgetLine::new(5_000, 0)),
        ]
        .into_iter()
        .collect();

        let estimates = [
            ("visa_fees", 1_200),
            ("moving_costs", 8_500),
            ("initial_housing", 3_000),
            ("travel_costs", 1_500),
            ("documentation", 500),
            ("miscellaneous", 2_000),
        ]
        .into_iter()
        .collect();

        let spending = vec![
            SpendingEntry {
                month: "Nov 2024",
                amount: 500,
                category: "Documentation",
            },
            SpendingEntry {
                month: "Dec 2024",
                amount: 700,
                category: "Visa fees",
            },
            SpendingEntry {
                month: "Jan 2025",
                amount: 0,
                category: "Planning",
            },
        ];

        Self::new(lines, 8_500, estimates, spending)
    }

    /// `remaining = total - spent - committed`.
    pub fn overview(&self) -> BudgetOverview {
        let total_budget: i64 = self.lines.values().map(|l| l.budgeted).sum();
        let spent_to_date: i64 = self.lines.values().map(|l| l.spent).sum();
        BudgetOverview {
            total_budget,
            spent_to_date,
            committed: self.committed,
            remaining: total_budget - spent_to_date - self.committed,
        }
    }

    pub fn estimated_costs(&self) -> CostEstimate {
        CostEstimate {
            items: self.estimates.clone(),
            total: self.estimates.values().sum(),
        }
    }

    pub fn cost_tracking(&self) -> CostTracking {
        CostTracking {
            budget_overview: self.overview(),
            cost_categories: self.lines.clone(),
            spending_timeline: self.spending.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_overview_totals() {
        let overview = BudgetPlan::builtin().overview();
        assert_eq!(
            overview,
            BudgetOverview {
                total_budget: 45_000,
                spent_to_date: 1_200,
                committed: 8_500,
                remaining: 35_300,
            }
        );
    }

    #[test]
    fn line_remaining_is_budget_minus_spent() {
        let tracking = BudgetPlan::builtin().cost_tracking();
        assert_eq!(tracking.cost_categories["visa_and_legal"].remaining, 800);
        for line in tracking.cost_categories.values() {
            assert_eq!(line.remaining, line.budgeted - line.spent);
        }
    }

    #[test]
    fn estimated_costs_total() {
        let estimate = BudgetPlan::builtin().estimated_costs();
        assert_eq!(estimate.total, 16_700);
        assert_eq!(estimate.items.len(), 6);
    }

    #[test]
    fn spending_timeline_sums_to_spent() {
        let plan = BudgetPlan::builtin();
        let spent: i64 = plan.cost_tracking().spending_timeline.iter().map(|e| e.amount).sum();
        assert_eq!(spent, plan.overview().spent_to_date);
    }

    #[test]
    fn overspent_line_goes_negative() {
        assert_eq!(BudgetLine::new(100, 150).remaining, -50);
    }
}
