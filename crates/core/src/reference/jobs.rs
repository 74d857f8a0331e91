//! Job board for the destination area.

use chrono::Duration;
use indexmap::IndexMap;
use serde::Serialize;
use uuid::Uuid;

use crate::types::Timestamp;

/// Number of listings returned by [`JobBoard::featured`].
pub const FEATURED_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobListing {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub job_type: String,
    pub posted_date: Timestamp,
    pub application_url: String,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct JobBoard {
    listings: Vec<JobListing>,
}

impl JobBoard {
    pub fn new(listings: Vec<JobListing>) -> Self {
        Self { listings }
    }

    /// The builtin listings, with posting dates relative to `now`.
    pub fn builtin(now: Timestamp) -> Self {
        Self::new(SEED.iter().map(|seed| seed.to_listing(now)).collect())
    }

    pub fn all(&self) -> &[JobListing] {
        &self.listings
    }

    /// Listings matching both optional filters (exact match).
    pub fn filter(&self, category: Option<&str>, job_type: Option<&str>) -> Vec<&JobListing> {
        self.listings
            .iter()
            .filter(|j| category.map_or(true, |c| j.category == c))
            .filter(|j| job_type.map_or(true, |t| j.job_type == t))
            .collect()
    }

    /// The most recently posted listings, newest first.
    pub fn featured(&self) -> Vec<&JobListing> {
        let mut sorted: Vec<&JobListing> = self.listings.iter().collect();
        sorted.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
        sorted.truncate(FEATURED_COUNT);
        sorted
    }

    /// Listings grouped by category, in listing order.
    pub fn by_category(&self) -> IndexMap<&str, Vec<&JobListing>> {
        let mut groups: IndexMap<&str, Vec<&JobListing>> = IndexMap::new();
        for job in &self.listings {
            groups.entry(job.category.as_str()).or_default().push(job);
        }
        groups
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        distinct_sorted(self.listings.iter().map(|j| j.category.as_str()))
    }

    /// Distinct job types, sorted.
    pub fn job_types(&self) -> Vec<&str> {
        distinct_sorted(self.listings.iter().map(|j| j.job_type.as_str()))
    }
}

pub(crate) fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = values.collect();
    out.sort_unstable();
    out.dedup();
    out
}

struct JobSeed {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
    benefits: &'static [&'static str],
    job_type: &'static str,
    posted_days_ago: i64,
    application_url: &'static str,
    category: &'static str,
}

impl JobSeed {
    fn to_listing(&self, now: Timestamp) -> JobListing {
        JobListing {
            id: Uuid::new_v4(),
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: self.location.to_string(),
            salary: Some(self.salary.to_string()),
            description: self.description.to_string(),
            requirements: self.requirements.iter().map(|s| s.to_string()).collect(),
            benefits: self.benefits.iter().map(|s| s.to_string()).collect(),
            job_type: self.job_type.to_string(),
            posted_date: now - Duration::days(self.posted_days_ago),
            application_url: self.application_url.to_string(),
            category: self.category.to_string(),
        }
    }
}

const SEED: [JobSeed; 8] = [
    JobSeed {
        title: "Tourism Marketing Manager",
        company: "Peak District National Park Authority",
        location: "Bakewell, Peak District",
        salary: "£28,000 - £35,000",
        description: "Lead marketing campaigns to promote Peak District tourism, develop digital content, and coordinate with local businesses.",
        requirements: &[
            "Marketing degree or equivalent experience",
            "Digital marketing skills",
            "Experience with social media platforms",
            "Excellent communication skills",
        ],
        benefits: &["Pension scheme", "Flexible working", "Training opportunities"],
        job_type: "full-time",
        posted_days_ago: 3,
        application_url: "https://www.peakdistrict.gov.uk/careers",
        category: "Marketing & Tourism",
    },
    JobSeed {
        title: "Outdoor Activity Instructor",
        company: "PGL Adventure Holidays",
        location: "Castleton, Peak District",
        salary: "£22,000 - £26,000",
        description: "Lead outdoor activities including rock climbing, caving, and hiking for groups of all ages.",
        requirements: &[
            "Outdoor activity qualifications",
            "First aid certification",
            "Experience working with groups",
        ],
        benefits: &["Equipment provided", "Training courses", "Accommodation available"],
        job_type: "full-time",
        posted_days_ago: 1,
        application_url: "https://www.pgl.co.uk/careers",
        category: "Outdoor Recreation",
    },
    JobSeed {
        title: "Software Developer (Remote)",
        company: "Peak Tech Solutions",
        location: "Remote (UK)",
        salary: "£45,000 - £65,000",
        description: "Full-stack developer working on web applications for tourism and outdoor activity businesses.",
        requirements: &[
            "3+ years JavaScript experience",
            "React and Node.js proficiency",
            "Agile development experience",
        ],
        benefits: &["Remote working", "Flexible hours", "Professional development budget"],
        job_type: "remote",
        posted_days_ago: 2,
        application_url: "https://www.peaktech.co.uk/jobs",
        category: "Technology",
    },
    JobSeed {
        title: "Farm Manager",
        company: "Derbyshire Organic Farms",
        location: "Matlock, Peak District",
        salary: "£30,000 - £40,000",
        description: "Manage daily operations of an organic farm, oversee livestock and coordinate with local markets.",
        requirements: &[
            "Agricultural qualification or experience",
            "Knowledge of organic farming",
            "Valid driving license",
        ],
        benefits: &["Farm accommodation", "Produce allowance", "Vehicle provided"],
        job_type: "full-time",
        posted_days_ago: 5,
        application_url: "https://www.organicfarms-derbyshire.co.uk",
        category: "Agriculture",
    },
    JobSeed {
        title: "Hotel Manager",
        company: "Peak District Country House",
        location: "Buxton, Peak District",
        salary: "£32,000 - £42,000",
        description: "Oversee hotel operations, manage staff and coordinate events in a country house setting.",
        requirements: &[
            "Hospitality management experience",
            "Leadership skills",
            "Budget management",
        ],
        benefits: &["Performance bonuses", "Staff accommodation", "Career progression"],
        job_type: "full-time",
        posted_days_ago: 4,
        application_url: "https://www.peakdistricthotels.co.uk/careers",
        category: "Hospitality",
    },
    JobSeed {
        title: "Park Ranger",
        company: "National Trust",
        location: "Kinder Scout, Peak District",
        salary: "£24,000 - £28,000",
        description: "Protect and maintain national park areas, educate visitors and assist with conservation projects.",
        requirements: &[
            "Environmental science background",
            "Outdoor experience",
            "Physical fitness",
        ],
        benefits: &["National Trust membership", "Pension scheme", "Outdoor work environment"],
        job_type: "full-time",
        posted_days_ago: 6,
        application_url: "https://www.nationaltrust.org.uk/careers",
        category: "Conservation",
    },
    JobSeed {
        title: "Freelance Content Writer",
        company: "Various Local Businesses",
        location: "Peak District (Remote/Flexible)",
        salary: "£25 - £45 per hour",
        description: "Create content for local tourism websites, blogs, and marketing materials.",
        requirements: &["Excellent writing skills", "SEO knowledge", "Portfolio of work"],
        benefits: &["Flexible schedule", "Work from home", "Variety of projects"],
        job_type: "freelance",
        posted_days_ago: 7,
        application_url: "https://www.freelancer.co.uk",
        category: "Writing & Content",
    },
    JobSeed {
        title: "Digital Marketing Specialist",
        company: "Peak Adventure Tours",
        location: "Hathersage, Peak District",
        salary: "£26,000 - £34,000",
        description: "Develop digital marketing strategies for an adventure tourism company and analyze campaign performance.",
        requirements: &[
            "Digital marketing qualification",
            "Social media expertise",
            "Analytics tools proficiency",
        ],
        benefits: &["Free adventure activities", "Flexible working", "Team building events"],
        job_type: "full-time",
        posted_days_ago: 8,
        application_url: "https://www.peakadventuretours.co.uk/jobs",
        category: "Digital Marketing",
    },
];
