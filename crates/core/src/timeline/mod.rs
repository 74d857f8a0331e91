//! Relocation timeline catalog.
//!
//! A catalog is an ordered, immutable list of [`TimelineStep`]s grouped into
//! contiguous categories. The category boundaries double as the phase
//! thresholds used by [`crate::progress::current_phase`]: the last step id of
//! each category closes that phase.
//!
//! Step dependencies are advisory. Nothing here (or in the store) prevents a
//! step from being completed before its dependencies.

mod builtin;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::StepId;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One discrete task in the relocation checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub id: StepId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Advisory duration in days.
    pub estimated_days: u32,
    /// Steps this one is expected to follow. Never enforced.
    #[serde(default)]
    pub dependencies: Vec<StepId>,
    /// Names of resources that help with this step.
    #[serde(default)]
    pub resources: Vec<String>,
}

/// The last step id of a category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseThreshold {
    pub last_step_id: StepId,
    pub category: String,
}

/// Builtin catalog variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogVersion {
    /// The original 34-step checklist (nine categories).
    V34,
    /// The extended 39-step checklist (eight categories).
    V39,
}

impl CatalogVersion {
    /// Parse a configuration value such as `v39` or `39`.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v34" | "34" => Ok(Self::V34),
            "v39" | "39" => Ok(Self::V39),
            other => Err(CoreError::Validation(format!(
                "Unknown timeline catalog '{other}'. Must be one of: v34, v39"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V34 => "v34",
            Self::V39 => "v39",
        }
    }
}

/// An immutable, validated timeline catalog.
#[derive(Debug, Clone)]
pub struct TimelineCatalog {
    version: String,
    steps: Vec<TimelineStep>,
    thresholds: Vec<PhaseThreshold>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl TimelineCatalog {
    /// Build a catalog from arbitrary steps, validating them first.
    ///
    /// Rules:
    /// - at least one step;
    /// - ids positive and strictly ascending (so ids are unique);
    /// - `estimated_days` positive, title and category non-empty;
    /// - each category occupies one contiguous run of steps.
    pub fn new(version: impl Into<String>, steps: Vec<TimelineStep>) -> Result<Self, CoreError> {
        validate_steps(&steps)?;
        Ok(Self::from_validated(version.into(), steps))
    }

    /// Load one of the builtin catalogs.
    pub fn builtin(version: CatalogVersion) -> Self {
        let steps = match version {
            CatalogVersion::V34 => builtin::steps_v34(),
            CatalogVersion::V39 => builtin::steps_v39(),
        };
        Self::from_validated(version.as_str().to_string(), steps)
    }

    /// Parse a JSON array of steps (same shape as [`TimelineStep`]).
    pub fn from_json(version: impl Into<String>, json: &str) -> Result<Self, CoreError> {
        let steps: Vec<TimelineStep> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid timeline catalog JSON: {e}")))?;
        Self::new(version, steps)
    }

    fn from_validated(version: String, steps: Vec<TimelineStep>) -> Self {
        let mut thresholds: Vec<PhaseThreshold> = Vec::new();
        for step in &steps {
            match thresholds.last_mut() {
                Some(last) if last.category == step.category => last.last_step_id = step.id,
                _ => thresholds.push(PhaseThreshold {
                    last_step_id: step.id,
                    category: step.category.clone(),
                }),
            }
        }
        Self {
            version,
            steps,
            thresholds,
        }
    }
}

fn validate_steps(steps: &[TimelineStep]) -> Result<(), CoreError> {
    if steps.is_empty() {
        return Err(CoreError::Validation(
            "Timeline catalog must contain at least one step".into(),
        ));
    }

    let mut previous: Option<&TimelineStep> = None;
    let mut closed_categories: Vec<&str> = Vec::new();

    for step in steps {
        if step.id <= 0 {
            return Err(CoreError::Validation(format!(
                "Step id {} must be positive",
                step.id
            )));
        }
        if step.estimated_days == 0 {
            return Err(CoreError::Validation(format!(
                "Step {} must have a positive estimated_days",
                step.id
            )));
        }
        if step.title.trim().is_empty() || step.category.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Step {} must have a title and a category",
                step.id
            )));
        }

        if let Some(prev) = previous {
            if step.id <= prev.id {
                return Err(CoreError::Validation(format!(
                    "Step ids must be strictly ascending: {} follows {}",
                    step.id, prev.id
                )));
            }
            if step.category != prev.category {
                if closed_categories.contains(&step.category.as_str()) {
                    return Err(CoreError::Validation(format!(
                        "Category '{}' is split: step {} reopens it",
                        step.category, step.id
                    )));
                }
                closed_categories.push(prev.category.as_str());
            }
        }
        previous = Some(step);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl TimelineCatalog {
    /// Name of this catalog (builtin version tag or a caller-provided label).
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All steps, ascending by id.
    pub fn list_steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, step_id: StepId) -> Option<&TimelineStep> {
        self.steps
            .binary_search_by_key(&step_id, |s| s.id)
            .ok()
            .map(|idx| &self.steps[idx])
    }

    pub fn contains(&self, step_id: StepId) -> bool {
        self.get(step_id).is_some()
    }

    /// Category of a step, or `NotFound` for an unknown id.
    pub fn category_of(&self, step_id: StepId) -> Result<&str, CoreError> {
        self.get(step_id)
            .map(|s| s.category.as_str())
            .ok_or_else(|| CoreError::not_found("TimelineStep", step_id))
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.thresholds.iter().map(|t| t.category.as_str())
    }

    pub fn first_category(&self) -> Option<&str> {
        self.thresholds.first().map(|t| t.category.as_str())
    }

    pub fn last_category(&self) -> Option<&str> {
        self.thresholds.last().map(|t| t.category.as_str())
    }

    /// Ascending phase thresholds, one per category.
    pub fn phase_thresholds(&self) -> &[PhaseThreshold] {
        &self.thresholds
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn step(id: StepId, category: &str) -> TimelineStep {
        TimelineStep {
            id,
            title: format!("Step {id}"),
            description: String::new(),
            category: category.to_string(),
            estimated_days: 1,
            dependencies: Vec::new(),
            resources: Vec::new(),
        }
    }

    #[test]
    fn builtin_catalogs_pass_validation() {
        for version in [CatalogVersion::V34, CatalogVersion::V39] {
            let catalog = TimelineCatalog::builtin(version);
            assert!(validate_steps(catalog.list_steps()).is_ok(), "{version:?}");
        }
    }

    #[test]
    fn builtin_sizes() {
        assert_eq!(TimelineCatalog::builtin(CatalogVersion::V34).len(), 34);
        assert_eq!(TimelineCatalog::builtin(CatalogVersion::V39).len(), 39);
    }

    #[test]
    fn v39_thresholds_match_category_boundaries() {
        let catalog = TimelineCatalog::builtin(CatalogVersion::V39);
        let ends: Vec<StepId> = catalog
            .phase_thresholds()
            .iter()
            .map(|t| t.last_step_id)
            .collect();
        assert_eq!(ends, vec![5, 11, 18, 23, 28, 33, 36, 39]);
        assert_eq!(catalog.first_category(), Some("Planning"));
        assert_eq!(catalog.last_category(), Some("Settlement"));
    }

    #[test]
    fn v34_thresholds_match_category_boundaries() {
        let catalog = TimelineCatalog::builtin(CatalogVersion::V34);
        let ends: Vec<StepId> = catalog
            .phase_thresholds()
            .iter()
            .map(|t| t.last_step_id)
            .collect();
        assert_eq!(ends, vec![3, 7, 11, 15, 19, 23, 26, 30, 34]);
    }

    #[test]
    fn list_steps_is_ascending() {
        let catalog = TimelineCatalog::builtin(CatalogVersion::V39);
        let ids: Vec<StepId> = catalog.list_steps().iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn dependencies_reference_known_steps() {
        for version in [CatalogVersion::V34, CatalogVersion::V39] {
            let catalog = TimelineCatalog::builtin(version);
            for s in catalog.list_steps() {
                for dep in &s.dependencies {
                    assert!(catalog.contains(*dep), "{version:?}: step {} -> {dep}", s.id);
                }
            }
        }
    }

    #[test]
    fn category_of_known_and_unknown() {
        let catalog = TimelineCatalog::builtin(CatalogVersion::V39);
        assert_eq!(catalog.category_of(12).unwrap(), "Employment");
        assert_matches!(
            catalog.category_of(99),
            Err(CoreError::NotFound { entity: "TimelineStep", .. })
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_matches!(
            TimelineCatalog::new("empty", Vec::new()),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_duplicate_or_descending_ids() {
        let steps = vec![step(1, "A"), step(1, "A")];
        assert_matches!(TimelineCatalog::new("dup", steps), Err(CoreError::Validation(_)));

        let steps = vec![step(2, "A"), step(1, "A")];
        assert_matches!(TimelineCatalog::new("desc", steps), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_split_category() {
        let steps = vec![step(1, "A"), step(2, "B"), step(3, "A")];
        assert_matches!(TimelineCatalog::new("split", steps), Err(CoreError::Validation(_)));
    }

    #[test]
    fn gaps_in_ids_are_allowed() {
        let steps = vec![step(1, "A"), step(5, "A"), step(9, "B")];
        let catalog = TimelineCatalog::new("gappy", steps).unwrap();
        assert!(!catalog.contains(3));
        assert_eq!(catalog.phase_thresholds()[0].last_step_id, 5);
    }

    #[test]
    fn from_json_parses_minimal_steps() {
        let json = r#"[
            {"id": 1, "title": "Plan", "description": "", "category": "Planning", "estimated_days": 2},
            {"id": 2, "title": "Go", "description": "", "category": "Moving", "estimated_days": 1, "dependencies": [1]}
        ]"#;
        let catalog = TimelineCatalog::from_json("custom", json).unwrap();
        assert_eq!(catalog.version(), "custom");
        assert_eq!(catalog.categories().collect::<Vec<_>>(), vec!["Planning", "Moving"]);
        assert_eq!(catalog.get(2).unwrap().dependencies, vec![1]);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert_matches!(
            TimelineCatalog::from_json("bad", "{not json"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn catalog_version_parsing() {
        assert_eq!(CatalogVersion::from_str_value("V39").unwrap(), CatalogVersion::V39);
        assert_eq!(CatalogVersion::from_str_value(" 34 ").unwrap(), CatalogVersion::V34);
        assert!(CatalogVersion::from_str_value("v40").is_err());
    }
}
