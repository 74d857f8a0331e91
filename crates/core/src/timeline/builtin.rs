//! Builtin timeline catalogs.

use super::TimelineStep;
use crate::types::StepId;

fn s(
    id: StepId,
    title: &str,
    description: &str,
    category: &str,
    estimated_days: u32,
    dependencies: &[StepId],
    resources: &[&str],
) -> TimelineStep {
    TimelineStep {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        estimated_days,
        dependencies: dependencies.to_vec(),
        resources: resources.iter().map(|r| r.to_string()).collect(),
    }
}

const PLANNING: &str = "Planning";
const VISA: &str = "Visa & Legal";
const EMPLOYMENT: &str = "Employment";
const HOUSING: &str = "Housing";
const FINANCIAL: &str = "Financial";
const LOGISTICS: &str = "Logistics";
const US_EXIT: &str = "US Exit";
const UK_ARRIVAL: &str = "UK Arrival";
const SETTLEMENT: &str = "Settlement";

/// 34 steps, nine categories ending at 3, 7, 11, 15, 19, 23, 26, 30, 34.
pub(super) fn steps_v34() -> Vec<TimelineStep> {
    vec![
        // Days -180 to -90
        s(1, "Initial Research & Decision", "Research Peak District areas, cost of living, and lifestyle", PLANNING, 7, &[], &["Peak District National Park Authority", "UK Government Moving Guide"]),
        s(2, "Create Relocation Budget", "Calculate moving costs, visa fees, initial living expenses", PLANNING, 3, &[1], &["UK Cost Calculator", "Moving Cost Estimator"]),
        s(3, "Timeline & Milestones", "Set target dates for visa, job search, housing, and moving", PLANNING, 2, &[2], &["Project Management Templates"]),
        // Days -150 to -60
        s(4, "Visa Research", "Determine visa type needed (work, skilled worker, family, etc.)", VISA, 5, &[1], &["UK Government Visa Guide", "Immigration Lawyer Directory"]),
        s(5, "Document Preparation", "Gather birth certificate, passport, education certificates, etc.", VISA, 14, &[4], &["Document Checklist", "Apostille Services"]),
        s(6, "Visa Application", "Submit visa application with all required documents", VISA, 21, &[5], &["UK Visa Application Centre"]),
        s(7, "Background Checks", "Police clearance, criminal record checks, medical exams", VISA, 30, &[6], &["FBI Background Check", "Medical Exam Centers"]),
        // Days -120 to -30
        s(8, "Job Market Research", "Research job opportunities in Peak District area", EMPLOYMENT, 7, &[1], &["Indeed UK", "LinkedIn UK Jobs", "Reed.co.uk"]),
        s(9, "CV/Resume Update", "Adapt resume for UK format and standards", EMPLOYMENT, 3, &[8], &["UK CV Templates", "Career Services"]),
        s(10, "Job Applications", "Apply for positions in target area", EMPLOYMENT, 45, &[9], &["Job Search Platforms", "Recruitment Agencies"]),
        s(11, "Interviews & Offers", "Participate in interviews and negotiate offers", EMPLOYMENT, 30, &[10], &["Interview Preparation", "Salary Negotiation Guide"]),
        // Days -90 to -14
        s(12, "Housing Research", "Research neighborhoods, property types, rental market", HOUSING, 14, &[1], &["Rightmove", "Zoopla", "SpareRoom"]),
        s(13, "Virtual Viewings", "Arrange virtual property viewings", HOUSING, 21, &[12], &["Property Viewing Apps", "Estate Agents"]),
        s(14, "Housing Applications", "Apply for rental properties or purchase", HOUSING, 30, &[13], &["Rental Application Forms", "Mortgage Brokers"]),
        s(15, "Lease/Purchase Agreement", "Finalize housing arrangements", HOUSING, 14, &[14], &["Legal Services", "Property Lawyers"]),
        // Days -60 to -7
        s(16, "UK Bank Account Setup", "Research and apply for UK bank accounts", FINANCIAL, 21, &[6], &["Barclays", "HSBC", "Lloyds", "Monzo"]),
        s(17, "Credit History Transfer", "Establish UK credit history and financial profile", FINANCIAL, 14, &[16], &["Expat Credit Services", "Credit Reference Agencies"]),
        s(18, "International Money Transfer", "Set up currency exchange and money transfer services", FINANCIAL, 7, &[16], &["Wise", "Western Union", "CurrencyFair"]),
        s(19, "Insurance Setup", "Health, contents, and travel insurance", FINANCIAL, 7, &[15], &["NHS Registration", "Insurance Brokers"]),
        // Days -30 to +7
        s(20, "Moving Company Research", "Get quotes from international moving companies", LOGISTICS, 14, &[15], &["International Movers", "Shipping Companies"]),
        s(21, "Shipping Arrangements", "Book moving services and arrange shipping", LOGISTICS, 7, &[20], &["Moving Contracts", "Shipping Insurance"]),
        s(22, "Travel Booking", "Book flights and initial accommodation", LOGISTICS, 3, &[6], &["Flight Booking Sites", "Temporary Accommodation"]),
        s(23, "Packing & Shipping", "Pack belongings and ship to UK", LOGISTICS, 7, &[21], &["Packing Services", "Customs Documentation"]),
        // Days -14 to 0
        s(24, "US Affairs Settlement", "Cancel utilities, close accounts, notify services", US_EXIT, 14, &[22], &["Utility Companies", "Service Providers"]),
        s(25, "Address Changes", "Update address with IRS, banks, subscriptions", US_EXIT, 7, &[24], &["USPS Mail Forwarding", "IRS Forms"]),
        s(26, "Final Preparations", "Last-minute arrangements and goodbyes", US_EXIT, 3, &[25], &["Farewell Checklist"]),
        // Days 1 to 30
        s(27, "Arrival & Quarantine", "Arrive in UK, complete any quarantine requirements", UK_ARRIVAL, 14, &[26], &["UK Border Control", "COVID Guidelines"]),
        s(28, "Temporary Accommodation", "Check into temporary housing while waiting for permanent", UK_ARRIVAL, 7, &[27], &["Hotels", "Airbnb", "Serviced Apartments"]),
        s(29, "Essential Registrations", "Register with GP, council, utilities", UK_ARRIVAL, 7, &[28], &["NHS Registration", "Council Tax", "Utility Providers"]),
        s(30, "National Insurance Number", "Apply for National Insurance number", UK_ARRIVAL, 14, &[29], &["HMRC", "Job Centre Plus"]),
        // Days 15 to 60
        s(31, "Permanent Housing Move", "Move into permanent accommodation", SETTLEMENT, 3, &[15, 28], &["Moving Services", "Utility Connections"]),
        s(32, "Work Commencement", "Start new job or business", SETTLEMENT, 1, &[11, 30], &["Employment Contracts", "Tax Information"]),
        s(33, "Local Integration", "Join local groups, find services, explore area", SETTLEMENT, 30, &[31], &["Community Groups", "Local Services", "Tourism Information"]),
        s(34, "Long-term Setup", "Establish routines, friendships, local connections", SETTLEMENT, 60, &[33], &["Social Groups", "Hobby Clubs", "Professional Networks"]),
    ]
}

/// 39 steps, eight categories ending at 5, 11, 18, 23, 28, 33, 36, 39.
///
/// US exit tasks are folded into Logistics; sponsorship, qualification
/// recognition, referencing and tax planning get their own steps.
pub(super) fn steps_v39() -> Vec<TimelineStep> {
    vec![
        s(1, "Initial Research & Decision", "Research Peak District areas, cost of living, and lifestyle", PLANNING, 7, &[], &["Peak District National Park Authority", "UK Government Moving Guide"]),
        s(2, "Create Relocation Budget", "Calculate moving costs, visa fees, initial living expenses", PLANNING, 3, &[1], &["UK Cost Calculator", "Moving Cost Estimator"]),
        s(3, "Timeline & Milestones", "Set target dates for visa, job search, housing, and moving", PLANNING, 2, &[2], &["Project Management Templates"]),
        s(4, "Family & Pet Planning", "Plan schooling, pet relocation, and family logistics", PLANNING, 5, &[1], &["UK School Finder", "DEFRA Pet Travel Rules"]),
        s(5, "Exploratory Visit", "Short visitor-visa trip to tour towns and neighborhoods", PLANNING, 10, &[3], &["Visit Peak District", "Visitor Visa Guide"]),
        s(6, "Visa Research", "Determine visa type needed (work, skilled worker, family, etc.)", VISA, 5, &[1], &["UK Government Visa Guide", "Immigration Lawyer Directory"]),
        s(7, "Document Preparation", "Gather birth certificate, passport, education certificates, etc.", VISA, 14, &[6], &["Document Checklist"]),
        s(8, "Apostille & Certification", "Get key documents apostilled and certified for UK use", VISA, 10, &[7], &["Apostille Services", "Secretary of State Office"]),
        s(9, "English Language Evidence", "Confirm exemption or book an approved English language test", VISA, 7, &[6], &["Approved English Tests"]),
        s(10, "Visa Application", "Submit visa application with all required documents", VISA, 21, &[7, 8, 9], &["UK Visa Application Centre"]),
        s(11, "Biometrics & Decision", "Attend the biometrics appointment and await the decision", VISA, 30, &[10], &["UK Visa Application Centre", "Biometric Appointment Booking"]),
        s(12, "Job Market Research", "Research job opportunities in Peak District area", EMPLOYMENT, 7, &[1], &["Indeed UK", "LinkedIn UK Jobs", "Reed.co.uk"]),
        s(13, "CV/Resume Update", "Adapt resume for UK format and standards", EMPLOYMENT, 3, &[12], &["UK CV Templates", "Career Services"]),
        s(14, "Qualification Recognition", "Check UK recognition of degrees and professional licences", EMPLOYMENT, 14, &[13], &["UK ENIC", "Professional Bodies"]),
        s(15, "Job Applications", "Apply for positions in target area", EMPLOYMENT, 45, &[13], &["Job Search Platforms", "Recruitment Agencies"]),
        s(16, "Interviews & Offers", "Participate in interviews and negotiate offers", EMPLOYMENT, 30, &[15], &["Interview Preparation", "Salary Negotiation Guide"]),
        s(17, "Certificate of Sponsorship", "Obtain a Certificate of Sponsorship from the UK employer", EMPLOYMENT, 14, &[16], &["Sponsor Licence Register"]),
        s(18, "Contract & Start Date", "Sign the employment contract and agree a start date", EMPLOYMENT, 5, &[17], &["Employment Contracts"]),
        s(19, "Housing Research", "Research neighborhoods, property types, rental market", HOUSING, 14, &[1], &["Rightmove", "Zoopla", "SpareRoom"]),
        s(20, "Virtual Viewings", "Arrange virtual property viewings", HOUSING, 21, &[19], &["Property Viewing Apps", "Estate Agents"]),
        s(21, "Housing Applications", "Apply for rental properties or purchase", HOUSING, 30, &[20], &["Rental Application Forms", "Mortgage Brokers"]),
        s(22, "Referencing & Right to Rent", "Pass tenant referencing and right-to-rent checks", HOUSING, 7, &[21], &["Right to Rent Guide", "Guarantor Services"]),
        s(23, "Lease/Purchase Agreement", "Finalize housing arrangements", HOUSING, 14, &[22], &["Legal Services", "Property Lawyers"]),
        s(24, "UK Bank Account Setup", "Research and apply for UK bank accounts", FINANCIAL, 21, &[10], &["Barclays", "HSBC", "Lloyds", "Monzo"]),
        s(25, "Credit History Transfer", "Establish UK credit history and financial profile", FINANCIAL, 14, &[24], &["Expat Credit Services", "Credit Reference Agencies"]),
        s(26, "International Money Transfer", "Set up currency exchange and money transfer services", FINANCIAL, 7, &[24], &["Wise", "Western Union", "CurrencyFair"]),
        s(27, "US Tax Planning", "Plan US filing obligations as an overseas resident (FBAR, FEIE)", FINANCIAL, 7, &[2], &["IRS Publication 54", "Expat Tax Advisers"]),
        s(28, "Insurance Setup", "Health, contents, and travel insurance", FINANCIAL, 7, &[23], &["NHS Registration", "Insurance Brokers"]),
        s(29, "Moving Company Research", "Get quotes from international moving companies", LOGISTICS, 14, &[23], &["International Movers", "Shipping Companies"]),
        s(30, "Shipping Arrangements", "Book moving services and arrange shipping", LOGISTICS, 7, &[29], &["Moving Contracts", "Shipping Insurance"]),
        s(31, "Pet & Vehicle Transport", "Arrange pet travel and vehicle shipping or sale", LOGISTICS, 14, &[4, 30], &["Pet Relocation Services", "Vehicle Shipping"]),
        s(32, "Travel Booking & US Exit", "Book flights, close US accounts, and set up mail forwarding", LOGISTICS, 7, &[11], &["Flight Booking Sites", "USPS Mail Forwarding"]),
        s(33, "Packing & Shipping", "Pack belongings and ship to UK", LOGISTICS, 7, &[30], &["Packing Services", "Customs Documentation"]),
        s(34, "Arrival & eVisa Activation", "Arrive in the UK and confirm your eVisa status", UK_ARRIVAL, 7, &[32], &["UK Border Control", "UKVI Account"]),
        s(35, "Essential Registrations", "Register with GP, council, utilities", UK_ARRIVAL, 7, &[34], &["NHS Registration", "Council Tax", "Utility Providers"]),
        s(36, "National Insurance Number", "Apply for National Insurance number", UK_ARRIVAL, 14, &[35], &["HMRC", "Job Centre Plus"]),
        s(37, "Permanent Housing Move", "Move into permanent accommodation", SETTLEMENT, 3, &[23, 34], &["Moving Services", "Utility Connections"]),
        s(38, "Work Commencement", "Start new job or business", SETTLEMENT, 1, &[18, 36], &["Employment Contracts", "Tax Information"]),
        s(39, "Local Integration", "Join local groups, find services, explore area", SETTLEMENT, 30, &[37], &["Community Groups", "Local Services", "Tourism Information"]),
    ]
}
