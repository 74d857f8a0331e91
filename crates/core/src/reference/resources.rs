//! Curated external links, grouped by section.

use serde::Serialize;

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceLink {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceSection {
    pub key: &'static str,
    pub links: &'static [ResourceLink],
}

/// A search hit, tagged with the section it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceMatch {
    pub section: &'static str,
    #[serde(flatten)]
    pub link: &'static ResourceLink,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceDirectory;

impl ResourceDirectory {
    pub fn sections(&self) -> &'static [ResourceSection] {
        &SECTIONS
    }

    pub fn section_keys(&self) -> impl Iterator<Item = &'static str> {
        SECTIONS.iter().map(|s| s.key)
    }

    /// Case-insensitive substring search over link names and descriptions.
    ///
    /// An empty query matches everything. An unknown `section` is a
    /// validation error rather than an empty result.
    pub fn search(&self, query: &str, section: Option<&str>) -> Result<Vec<ResourceMatch>, CoreError> {
        if let Some(key) = section {
            if !SECTIONS.iter().any(|s| s.key == key) {
                return Err(CoreError::Validation(format!(
                    "Unknown resource section '{key}'"
                )));
            }
        }

        let needle = query.trim().to_lowercase();
        let matches = SECTIONS
            .iter()
            .filter(|s| section.map_or(true, |key| s.key == key))
            .flat_map(|s| s.links.iter().map(move |link| (s.key, link)))
            .filter(|(_, link)| {
                link.name.to_lowercase().contains(&needle)
                    || link.description.to_lowercase().contains(&needle)
            })
            .map(|(section, link)| ResourceMatch { section, link })
            .collect();
        Ok(matches)
    }
}

const fn link(name: &'static str, url: &'static str, description: &'static str) -> ResourceLink {
    ResourceLink {
        name,
        url,
        description,
    }
}

static SECTIONS: [ResourceSection; 6] = [
    ResourceSection {
        key: "visa_legal",
        links: &[
            link("UK Government Visa Guide", "https://www.gov.uk/browse/visas-immigration", "Official UK visa information"),
            link("Immigration Lawyer Directory", "https://www.lawsociety.org.uk", "Find qualified immigration lawyers"),
            link("Document Apostille Services", "https://www.gov.uk/get-document-legalised", "Document legalization services"),
            link("Visa Application Centre", "https://www.vfsglobal.co.uk", "UK visa application centres"),
        ],
    },
    ResourceSection {
        key: "housing",
        links: &[
            link("Rightmove", "https://www.rightmove.co.uk", "UK's largest property portal"),
            link("Zoopla", "https://www.zoopla.co.uk", "Property search and valuation"),
            link("SpareRoom", "https://www.spareroom.co.uk", "Room rental and flatshare platform"),
        ],
    },
    ResourceSection {
        key: "employment",
        links: &[
            link("Indeed UK", "https://uk.indeed.com", "Job search platform"),
            link("Reed", "https://www.reed.co.uk", "UK recruitment website"),
            link("LinkedIn UK", "https://www.linkedin.com/jobs", "Professional networking and jobs"),
        ],
    },
    ResourceSection {
        key: "financial",
        links: &[
            link("Monzo", "https://monzo.com", "Digital bank popular with expats"),
            link("Wise", "https://wise.com", "International money transfers"),
            link("HMRC", "https://www.gov.uk/government/organisations/hm-revenue-customs", "UK tax authority"),
        ],
    },
    ResourceSection {
        key: "local_services",
        links: &[
            link("Peak District National Park", "https://www.peakdistrict.gov.uk", "Official park information"),
            link("Derbyshire County Council", "https://www.derbyshire.gov.uk", "Local government services"),
            link("NHS Registration", "https://www.nhs.uk/nhs-services/gps/how-to-register-with-a-gp-surgery/", "Register with a GP"),
        ],
    },
    ResourceSection {
        key: "lifestyle",
        links: &[
            link("Visit Peak District", "https://www.visitpeakdistrict.com", "Tourism and attractions"),
            link("Met Office", "https://www.metoffice.gov.uk", "Weather forecasts"),
            link("Healthcare Finder", "https://www.nhs.uk/service-search", "Find local healthcare services"),
        ],
    },
];
