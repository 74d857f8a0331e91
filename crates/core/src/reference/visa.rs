//! UK visa routes and the document checklist.

use serde::Serialize;

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisaRequirement {
    pub visa_type: &'static str,
    pub slug: String,
    pub title: &'static str,
    pub description: &'static str,
    pub required_documents: &'static [&'static str],
    pub processing_time: &'static str,
    pub fee: &'static str,
    pub eligibility: &'static [&'static str],
    pub application_process: &'static [&'static str],
}

/// Documents every visa application needs, grouped.
#[derive(Debug, Clone, Serialize)]
pub struct VisaChecklist {
    pub general_documents: &'static [&'static str],
    pub financial_documents: &'static [&'static str],
    pub identity_documents: &'static [&'static str],
    pub supporting_documents: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct VisaGuide {
    requirements: Vec<VisaRequirement>,
}

/// `"Skilled Worker Visa"` -> `"skilled-worker-visa"`.
pub fn slugify(visa_type: &str) -> String {
    visa_type.to_lowercase().replace(' ', "-")
}

impl VisaGuide {
    pub fn builtin() -> Self {
        let requirements = REQUIREMENTS
            .iter()
            .map(|r| VisaRequirement {
                slug: slugify(r.visa_type),
                ..r.clone()
            })
            .collect();
        Self { requirements }
    }

    pub fn requirements(&self) -> &[VisaRequirement] {
        &self.requirements
    }

    /// Case-insensitive slug lookup.
    pub fn find(&self, slug: &str) -> Result<&VisaRequirement, CoreError> {
        let wanted = slug.to_lowercase();
        self.requirements
            .iter()
            .find(|r| r.slug == wanted)
            .ok_or_else(|| CoreError::not_found("VisaType", slug))
    }

    pub fn checklist(&self) -> &'static VisaChecklist {
        &CHECKLIST
    }
}

static CHECKLIST: VisaChecklist = VisaChecklist {
    general_documents: &[
        "Valid passport (6+ months remaining)",
        "Passport-style photographs",
        "Completed visa application form",
        "Visa application fee payment",
        "Biometric information",
    ],
    financial_documents: &[
        "Bank statements (6 months)",
        "Salary slips or employment letter",
        "Tax returns",
        "Sponsor financial documents (if applicable)",
    ],
    identity_documents: &[
        "Birth certificate",
        "Marriage certificate (if applicable)",
        "Previous passports",
        "Police clearance certificate",
    ],
    supporting_documents: &[
        "TB test results (if required)",
        "English language test certificate",
        "Academic qualifications",
        "Employment contracts or job offers",
    ],
};

const REQUIREMENTS: [VisaRequirement; 4] = [
    VisaRequirement {
        visa_type: "Skilled Worker Visa",
        slug: String::new(),
        title: "Most Common Route for Professionals",
        description: "For people who have been offered a skilled job in the UK by an approved employer.",
        required_documents: &[
            "Valid passport or travel document",
            "Certificate of sponsorship from employer",
            "Proof of English language ability",
            "Tuberculosis test results (if applicable)",
            "Police certificate from countries lived in",
            "Financial evidence",
        ],
        processing_time: "3 weeks to 8 weeks",
        fee: "£719 - £1,423 depending on circumstances",
        eligibility: &[
            "Job offer from UK employer with sponsor license",
            "Job must be at appropriate skill level (RQF Level 3+)",
            "Salary must meet minimum threshold",
            "English language requirement (B1 level)",
        ],
        application_process: &[
            "Secure job offer from licensed sponsor",
            "Receive Certificate of Sponsorship",
            "Complete online application",
            "Book and attend biometric appointment",
            "Wait for decision",
        ],
    },
    VisaRequirement {
        visa_type: "Spouse/Family Visa",
        slug: String::new(),
        title: "For Family Members of UK Citizens/Residents",
        description: "For partners of a UK citizen or someone with settled status in the UK.",
        required_documents: &[
            "Valid passport",
            "Marriage certificate or proof of relationship",
            "Financial requirement evidence",
            "English language test certificate",
            "Accommodation evidence",
        ],
        processing_time: "2 months (outside UK)",
        fee: "£1,846 for 2.5 years",
        eligibility: &[
            "Married to or in civil partnership with UK citizen/settled person",
            "Relationship must be genuine and subsisting",
            "Financial requirement must be met",
        ],
        application_process: &[
            "Check eligibility requirements",
            "Gather relationship and financial evidence",
            "Complete online application",
            "Book biometric appointment",
            "Wait for decision",
        ],
    },
    VisaRequirement {
        visa_type: "Visitor Visa",
        slug: String::new(),
        title: "For Short-term Visits and House Hunting",
        description: "For tourism, family visits or business visits up to 6 months. Useful for house hunting trips.",
        required_documents: &[
            "Valid passport",
            "Bank statements (3-6 months)",
            "Travel itinerary",
            "Return flight tickets",
        ],
        processing_time: "3 weeks",
        fee: "£100 for 6 months",
        eligibility: &[
            "Genuine intention to visit temporarily",
            "Sufficient funds for trip",
            "No intention to work",
        ],
        application_process: &[
            "Complete online application",
            "Pay application fee",
            "Attend appointment with documents",
            "Wait for decision",
        ],
    },
    VisaRequirement {
        visa_type: "Student Visa",
        slug: String::new(),
        title: "For Educational Purposes",
        description: "For study at a UK university or college.",
        required_documents: &[
            "Valid passport",
            "Confirmation of Acceptance for Studies (CAS)",
            "Financial evidence",
            "English language certificate",
        ],
        processing_time: "3 weeks",
        fee: "£348 - £490",
        eligibility: &[
            "Offer from licensed student sponsor",
            "Financial requirements met",
            "English language proficiency",
        ],
        application_process: &[
            "Receive offer from UK institution",
            "Get CAS number",
            "Apply online",
            "Attend biometric appointment",
        ],
    },
];
