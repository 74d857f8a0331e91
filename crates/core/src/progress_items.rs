//! Free-form progress items: user-owned tasks with a status, priority,
//! optional due date and a list of subtasks.
//!
//! Storage lives in `relocate_db`; this module owns the value types, the
//! status transition rule for `completed_date`, the sample set every new
//! account starts with, and the dashboard arithmetic.

use chrono::Duration;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::progress::percentage;
use crate::types::Timestamp;

/// Days ahead of `now` that count as an upcoming deadline.
pub const UPCOMING_WINDOW_DAYS: i64 = 14;

/// Maximum number of overdue / upcoming items listed on the dashboard.
pub const DASHBOARD_LIST_LIMIT: usize = 5;

/// Category used when an item is created without one.
pub const DEFAULT_CATEGORY: &str = "General";

// ---------------------------------------------------------------------------
// Status & priority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 4] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Completed,
        Self::Blocked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
        }
    }

    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: not_started, in_progress, completed, blocked"
                ))
            })
    }
}

impl TryFrom<String> for ItemStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid priority '{s}'. Must be one of: low, medium, high, urgent"
                ))
            })
    }
}

impl TryFrom<String> for Priority {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

/// `completed_date` after a status change.
///
/// Entering `completed` stamps `now`; leaving it clears the date; any other
/// transition keeps `existing`.
pub fn apply_status_change(
    old: ItemStatus,
    new: ItemStatus,
    existing: Option<Timestamp>,
    now: Timestamp,
) -> Option<Timestamp> {
    match (old, new) {
        (_, ItemStatus::Completed) => Some(now),
        (ItemStatus::Completed, _) => None,
        _ => existing,
    }
}

// ---------------------------------------------------------------------------
// Subtasks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

/// Flip the completion flag of the subtask at `index`.
pub fn toggle_subtask(subtasks: &mut [Subtask], index: usize) -> Result<&Subtask, CoreError> {
    let len = subtasks.len();
    let subtask = subtasks.get_mut(index).ok_or_else(|| {
        CoreError::Validation(format!(
            "Invalid subtask index {index}: item has {len} subtasks"
        ))
    })?;
    subtask.completed = !subtask.completed;
    Ok(subtask)
}

// ---------------------------------------------------------------------------
// New items & seeding
// ---------------------------------------------------------------------------

/// Everything needed to insert a progress item for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProgressItem {
    pub category: String,
    pub title: String,
    pub description: String,
    pub status: ItemStatus,
    pub priority: Priority,
    pub due_date: Option<Timestamp>,
    pub completed_date: Option<Timestamp>,
    pub notes: Option<String>,
    pub subtasks: Vec<Subtask>,
}

struct SeedItem {
    category: &'static str,
    title: &'static str,
    description: &'static str,
    status: ItemStatus,
    priority: Priority,
    /// Due date offset from seeding time; negative means in the past.
    due_in_days: i64,
    completed_days_ago: Option<i64>,
    notes: &'static str,
    subtasks: &'static [(&'static str, bool)],
}

const SAMPLE_ITEMS: [SeedItem; 12] = [
    SeedItem {
        category: "Documentation",
        title: "Gather Birth Certificate",
        description: "Obtain certified copy of birth certificate for visa application",
        status: ItemStatus::Completed,
        priority: Priority::High,
        due_in_days: -10,
        completed_days_ago: Some(12),
        notes: "Received certified copy from state office. Cost $25.",
        subtasks: &[
            ("Request birth certificate online", true),
            ("Pay processing fee", true),
            ("Receive by mail", true),
        ],
    },
    SeedItem {
        category: "Documentation",
        title: "Apostille Documents",
        description: "Get birth certificate and education documents apostilled for UK recognition",
        status: ItemStatus::InProgress,
        priority: Priority::High,
        due_in_days: 5,
        completed_days_ago: None,
        notes: "Submitted to Secretary of State office. Processing time 2-3 weeks.",
        subtasks: &[
            ("Prepare document copies", true),
            ("Submit to state office", true),
            ("Pay apostille fees", true),
            ("Await processing", false),
        ],
    },
    SeedItem {
        category: "Visa Application",
        title: "Complete Visa Application Form",
        description: "Fill out UK Skilled Worker visa application online",
        status: ItemStatus::Completed,
        priority: Priority::High,
        due_in_days: -5,
        completed_days_ago: Some(7),
        notes: "Application submitted. Keep the GWF reference number for tracking.",
        subtasks: &[
            ("Create UK government account", true),
            ("Fill application form", true),
            ("Upload documents", true),
            ("Pay application fee", true),
        ],
    },
    SeedItem {
        category: "Visa Application",
        title: "Biometric Appointment",
        description: "Attend biometric appointment at visa application center",
        status: ItemStatus::InProgress,
        priority: Priority::High,
        due_in_days: 3,
        completed_days_ago: None,
        notes: "Appointment booked at the nearest application support center.",
        subtasks: &[
            ("Book appointment online", true),
            ("Prepare required documents", true),
            ("Attend appointment", false),
        ],
    },
    SeedItem {
        category: "Employment",
        title: "Job Search in Peak District",
        description: "Apply for tourism and outdoor recreation jobs in Peak District area",
        status: ItemStatus::InProgress,
        priority: Priority::High,
        due_in_days: 30,
        completed_days_ago: None,
        notes: "Applied to 5 positions. 2 responses received, 1 interview scheduled.",
        subtasks: &[
            ("Update CV for UK format", true),
            ("Research job opportunities", true),
            ("Submit applications", false),
            ("Prepare for interviews", false),
        ],
    },
    SeedItem {
        category: "Employment",
        title: "Certificate of Sponsorship",
        description: "Obtain Certificate of Sponsorship from UK employer",
        status: ItemStatus::NotStarted,
        priority: Priority::High,
        due_in_days: 45,
        completed_days_ago: None,
        notes: "Waiting for job offer confirmation before requesting CoS.",
        subtasks: &[
            ("Secure job offer", false),
            ("Request CoS from employer", false),
            ("Receive CoS documentation", false),
        ],
    },
    SeedItem {
        category: "Housing",
        title: "Research Peak District Areas",
        description: "Research different towns and villages in Peak District for living",
        status: ItemStatus::Completed,
        priority: Priority::Medium,
        due_in_days: -15,
        completed_days_ago: Some(18),
        notes: "Narrowed down to Bakewell, Buxton, and Hathersage based on amenities and transport links.",
        subtasks: &[
            ("Research online resources", true),
            ("Join local community groups", true),
            ("Create comparison matrix", true),
        ],
    },
    SeedItem {
        category: "Housing",
        title: "Virtual Property Viewings",
        description: "Arrange virtual viewings of rental properties",
        status: ItemStatus::InProgress,
        priority: Priority::Medium,
        due_in_days: 20,
        completed_days_ago: None,
        notes: "Scheduled 3 virtual viewings this week. Found 2 promising options.",
        subtasks: &[
            ("Contact estate agents", true),
            ("Schedule virtual tours", true),
            ("Prepare viewing questions", true),
            ("Compare properties", false),
        ],
    },
    SeedItem {
        category: "Financial",
        title: "Open UK Bank Account",
        description: "Research and apply for UK bank account before arrival",
        status: ItemStatus::NotStarted,
        priority: Priority::Medium,
        due_in_days: 60,
        completed_days_ago: None,
        notes: "Researching Monzo, Starling, and HSBC options for expats.",
        subtasks: &[
            ("Compare bank options", false),
            ("Prepare required documents", false),
            ("Submit application", false),
        ],
    },
    SeedItem {
        category: "Financial",
        title: "Currency Exchange Setup",
        description: "Set up Wise account for international money transfers",
        status: ItemStatus::Completed,
        priority: Priority::Low,
        due_in_days: -20,
        completed_days_ago: Some(25),
        notes: "Account verified. Test transfer of $100 successful.",
        subtasks: &[
            ("Create Wise account", true),
            ("Verify identity", true),
            ("Test small transfer", true),
        ],
    },
    SeedItem {
        category: "Moving",
        title: "Get Moving Quotes",
        description: "Obtain quotes from international moving companies",
        status: ItemStatus::InProgress,
        priority: Priority::Medium,
        due_in_days: 14,
        completed_days_ago: None,
        notes: "Received 3 quotes so far, ranging from $4.5k to $12k.",
        subtasks: &[
            ("Contact 5 moving companies", true),
            ("Provide inventory details", true),
            ("Compare quotes", false),
            ("Book moving service", false),
        ],
    },
    SeedItem {
        category: "Moving",
        title: "Declutter and Sort Items",
        description: "Decide what to ship, sell, donate, or store",
        status: ItemStatus::InProgress,
        priority: Priority::Medium,
        due_in_days: 45,
        completed_days_ago: None,
        notes: "Started with closet. Still need to sort garage and basement.",
        subtasks: &[
            ("Sort bedroom items", true),
            ("Sort kitchen items", false),
            ("Sort garage/storage", false),
            ("Arrange donations/sales", false),
        ],
    },
];

/// The sample items a new account starts with, dated relative to `now`.
pub fn seed_items(now: Timestamp) -> Vec<NewProgressItem> {
    SAMPLE_ITEMS
        .iter()
        .map(|seed| NewProgressItem {
            category: seed.category.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            status: seed.status,
            priority: seed.priority,
            due_date: Some(now + Duration::days(seed.due_in_days)),
            completed_date: seed.completed_days_ago.map(|d| now - Duration::days(d)),
            notes: Some(seed.notes.to_string()),
            subtasks: seed
                .subtasks
                .iter()
                .map(|(task, completed)| Subtask {
                    task: (*task).to_string(),
                    completed: *completed,
                })
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Read access to the fields the statistics need.
///
/// Implemented by the stored item model so these functions stay storage
/// agnostic.
pub trait TrackedItem {
    fn category(&self) -> &str;
    fn status(&self) -> ItemStatus;
    fn priority(&self) -> Priority;
    fn due_date(&self) -> Option<Timestamp>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStatistics {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub completion_percentage: f64,
}

pub fn statistics<T: TrackedItem>(items: &[T]) -> ItemStatistics {
    let completed = count_status(items, ItemStatus::Completed);
    ItemStatistics {
        total: items.len(),
        completed,
        in_progress: count_status(items, ItemStatus::InProgress),
        completion_percentage: percentage(completed, items.len()),
    }
}

/// Distinct categories in order of first appearance.
pub fn distinct_categories<T: TrackedItem>(items: &[T]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.iter().any(|c| c == item.category()) {
            categories.push(item.category().to_string());
        }
    }
    categories
}

/// Items matching the optional category and status filters.
pub fn filter_items<'a, T: TrackedItem>(
    items: &'a [T],
    category: Option<&str>,
    status: Option<ItemStatus>,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| category.map_or(true, |c| item.category() == c))
        .filter(|item| status.map_or(true, |s| item.status() == s))
        .collect()
}

fn count_status<T: TrackedItem>(items: &[T], status: ItemStatus) -> usize {
    items.iter().filter(|i| i.status() == status).count()
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub total_items: usize,
    pub completed_items: usize,
    pub in_progress_items: usize,
    pub overdue_items: usize,
    pub upcoming_deadlines: usize,
    pub overall_completion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCategoryStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub completion_percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct ItemDashboard<'a, T> {
    pub overview: DashboardOverview,
    pub category_breakdown: IndexMap<String, ItemCategoryStats>,
    pub status_distribution: IndexMap<&'static str, usize>,
    pub priority_distribution: IndexMap<&'static str, usize>,
    /// Oldest first, at most [`DASHBOARD_LIST_LIMIT`].
    pub overdue_items: Vec<&'a T>,
    /// Soonest first, at most [`DASHBOARD_LIST_LIMIT`].
    pub upcoming_deadlines: Vec<&'a T>,
}

/// Build the dashboard for a user's items as of `now`.
///
/// Overdue: due before `now` and not completed. Upcoming: due within
/// [`UPCOMING_WINDOW_DAYS`] of `now` and not completed.
pub fn dashboard<T: TrackedItem>(items: &[T], now: Timestamp) -> ItemDashboard<'_, T> {
    let mut category_breakdown: IndexMap<String, ItemCategoryStats> = IndexMap::new();
    let mut status_distribution: IndexMap<&'static str, usize> =
        ItemStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect();
    let mut priority_distribution: IndexMap<&'static str, usize> =
        Priority::ALL.iter().map(|p| (p.as_str(), 0)).collect();

    for item in items {
        let stats = category_breakdown
            .entry(item.category().to_string())
            .or_insert(ItemCategoryStats {
                total: 0,
                completed: 0,
                in_progress: 0,
                completion_percentage: 0.0,
            });
        stats.total += 1;
        match item.status() {
            ItemStatus::Completed => stats.completed += 1,
            ItemStatus::InProgress => stats.in_progress += 1,
            _ => {}
        }
        *status_distribution.entry(item.status().as_str()).or_default() += 1;
        *priority_distribution.entry(item.priority().as_str()).or_default() += 1;
    }
    for stats in category_breakdown.values_mut() {
        stats.completion_percentage = percentage(stats.completed, stats.total);
    }

    let horizon = now + Duration::days(UPCOMING_WINDOW_DAYS);
    let mut overdue: Vec<(Timestamp, &T)> = Vec::new();
    let mut upcoming: Vec<(Timestamp, &T)> = Vec::new();
    for item in items {
        if item.status() == ItemStatus::Completed {
            continue;
        }
        let Some(due) = item.due_date() else { continue };
        if due < now {
            overdue.push((due, item));
        } else if due <= horizon {
            upcoming.push((due, item));
        }
    }
    overdue.sort_by_key(|(due, _)| *due);
    upcoming.sort_by_key(|(due, _)| *due);

    let completed = status_distribution[ItemStatus::Completed.as_str()];
    let overview = DashboardOverview {
        total_items: items.len(),
        completed_items: completed,
        in_progress_items: status_distribution[ItemStatus::InProgress.as_str()],
        overdue_items: overdue.len(),
        upcoming_deadlines: upcoming.len(),
        overall_completion: percentage(completed, items.len()),
    };

    ItemDashboard {
        overview,
        category_breakdown,
        status_distribution,
        priority_distribution,
        overdue_items: capped(overdue),
        upcoming_deadlines: capped(upcoming),
    }
}

fn capped<T>(dated: Vec<(Timestamp, &T)>) -> Vec<&T> {
    dated
        .into_iter()
        .take(DASHBOARD_LIST_LIMIT)
        .map(|(_, item)| item)
        .collect()
}
