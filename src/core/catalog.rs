use crate::error::{EngineError, Result};
use crate::models::{
    AptitudeDomain, AptitudeItem, CareerCatalogEntry, InterestProfile, RequiredAptitude,
    RiasecCategory, StreamCatalogEntry,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Immutable reference data shared by all engine operations
///
/// Built once at startup, either from the built-in tables or from a TOML
/// file, and handed out behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub careers: Vec<CareerCatalogEntry>,
    pub streams: Vec<StreamCatalogEntry>,
    /// Stream name -> example career names
    #[serde(default)]
    pub stream_careers: BTreeMap<String, Vec<String>>,
    #[serde(default = "builtin_aptitude_items")]
    pub aptitude_items: Vec<AptitudeItem>,
}

impl Catalog {
    /// The default catalog: 5 careers, 3 streams, 4 aptitude items
    pub fn builtin() -> Self {
        Self {
            careers: builtin_careers(),
            streams: builtin_streams(),
            stream_careers: builtin_stream_careers(),
            aptitude_items: builtin_aptitude_items(),
        }
    }

    /// Parse and validate a catalog from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::info!(
            "Loaded catalog from {} ({} careers, {} streams, {} items)",
            path.as_ref().display(),
            catalog.careers.len(),
            catalog.streams.len(),
            catalog.aptitude_items.len()
        );
        Ok(catalog)
    }

    /// Check structural invariants the scoring code relies on
    pub fn validate(&self) -> Result<()> {
        if self.careers.is_empty() {
            return Err(invalid("catalog has no careers"));
        }
        if self.streams.is_empty() {
            return Err(invalid("catalog has no streams"));
        }
        if self.aptitude_items.is_empty() {
            return Err(invalid("catalog has no aptitude items"));
        }

        let mut career_ids = HashSet::new();
        for career in &self.careers {
            if career.id.trim().is_empty() {
                return Err(invalid("career with empty id"));
            }
            if !career_ids.insert(career.id.as_str()) {
                return Err(invalid(format!("duplicate career id '{}'", career.id)));
            }
            for (category, level) in career.riasec_profile.iter() {
                check_level(level, || format!("career '{}' {} profile", career.id, category))?;
            }
            for (domain, level) in career.required_aptitude.iter() {
                check_level(level, || format!("career '{}' {} requirement", career.id, domain))?;
            }
        }

        let mut stream_names = HashSet::new();
        for stream in &self.streams {
            if !stream_names.insert(stream.name.as_str()) {
                return Err(invalid(format!("duplicate stream '{}'", stream.name)));
            }
        }

        let mut item_ids = HashSet::new();
        for item in &self.aptitude_items {
            if item.id.trim().is_empty() {
                return Err(invalid("aptitude item with empty id"));
            }
            if !item_ids.insert(item.id.as_str()) {
                return Err(invalid(format!("duplicate aptitude item '{}'", item.id)));
            }
        }

        Ok(())
    }

    /// Example careers for a stream; empty for an unknown stream
    pub fn example_careers(&self, stream_name: &str) -> Vec<String> {
        self.stream_careers
            .get(stream_name)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidCatalog(message.into())
}

fn check_level(level: f64, what: impl FnOnce() -> String) -> Result<()> {
    if level.is_finite() && (0.0..=100.0).contains(&level) {
        Ok(())
    } else {
        Err(invalid(format!("{} out of range: {}", what(), level)))
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn builtin_careers() -> Vec<CareerCatalogEntry> {
    vec![
        CareerCatalogEntry {
            id: "software_engineer".to_string(),
            name: "Software Engineer".to_string(),
            riasec_profile: InterestProfile::from_array([20.0, 90.0, 30.0, 20.0, 40.0, 60.0]),
            required_aptitude: RequiredAptitude::all(85.0, 70.0, 60.0, 50.0),
            education_path: strings(&["Science", "Computer Science", "B.Tech/B.E."]),
            salary_range: "₹6-25 LPA".to_string(),
            job_market: "Excellent".to_string(),
            description: "Design and develop software applications and systems".to_string(),
        },
        CareerCatalogEntry {
            id: "data_scientist".to_string(),
            name: "Data Scientist".to_string(),
            riasec_profile: InterestProfile::from_array([30.0, 95.0, 20.0, 30.0, 50.0, 80.0]),
            required_aptitude: RequiredAptitude::all(90.0, 95.0, 40.0, 60.0),
            education_path: strings(&["Science", "Mathematics/Statistics", "B.Sc/B.Tech"]),
            salary_range: "₹8-30 LPA".to_string(),
            job_market: "Excellent".to_string(),
            description: "Analyze complex data to help organizations make decisions".to_string(),
        },
        CareerCatalogEntry {
            id: "graphic_designer".to_string(),
            name: "Graphic Designer".to_string(),
            riasec_profile: InterestProfile::from_array([40.0, 30.0, 95.0, 40.0, 60.0, 30.0]),
            required_aptitude: RequiredAptitude::all(50.0, 40.0, 85.0, 60.0),
            education_path: strings(&["Arts/Science", "Fine Arts/Design", "BFA/B.Des"]),
            salary_range: "₹3-12 LPA".to_string(),
            job_market: "Good".to_string(),
            description: "Create visual concepts to communicate ideas and inspire".to_string(),
        },
        CareerCatalogEntry {
            id: "teacher".to_string(),
            name: "Teacher".to_string(),
            riasec_profile: InterestProfile::from_array([20.0, 60.0, 50.0, 95.0, 40.0, 60.0]),
            required_aptitude: RequiredAptitude::all(70.0, 60.0, 30.0, 90.0),
            education_path: strings(&["Any", "Subject Specialization", "B.Ed"]),
            salary_range: "₹3-8 LPA".to_string(),
            job_market: "Good".to_string(),
            description: "Educate and guide students in academic subjects".to_string(),
        },
        CareerCatalogEntry {
            id: "business_analyst".to_string(),
            name: "Business Analyst".to_string(),
            riasec_profile: InterestProfile::from_array([20.0, 80.0, 30.0, 60.0, 85.0, 70.0]),
            required_aptitude: RequiredAptitude::all(80.0, 85.0, 40.0, 80.0),
            education_path: strings(&["Commerce/Science", "Business/Economics", "BBA/B.Com"]),
            salary_range: "₹5-18 LPA".to_string(),
            job_market: "Excellent".to_string(),
            description: "Analyze business processes and recommend improvements".to_string(),
        },
    ]
}

fn builtin_streams() -> Vec<StreamCatalogEntry> {
    vec![
        StreamCatalogEntry {
            name: "Science".to_string(),
            subjects: strings(&["Physics", "Chemistry", "Mathematics", "Biology"]),
            career_paths: strings(&["Engineering", "Medicine", "Research", "Technology"]),
            entrance_exams: strings(&["JEE", "NEET", "BITSAT"]),
            suitable_interests: vec![RiasecCategory::Investigative, RiasecCategory::Realistic],
            aptitude_domains: vec![AptitudeDomain::Logical, AptitudeDomain::Numerical],
            aptitude_reason: Some("Strong logical and numerical abilities".to_string()),
            description: "For students interested in understanding how things work".to_string(),
        },
        StreamCatalogEntry {
            name: "Commerce".to_string(),
            subjects: strings(&["Economics", "Accountancy", "Business Studies", "Mathematics"]),
            career_paths: strings(&["Business", "Finance", "CA", "Banking"]),
            entrance_exams: strings(&["CA Foundation", "CS", "CMA"]),
            suitable_interests: vec![RiasecCategory::Enterprising, RiasecCategory::Conventional],
            aptitude_domains: vec![AptitudeDomain::Numerical, AptitudeDomain::Verbal],
            aptitude_reason: Some("Good numerical and verbal skills".to_string()),
            description: "For students interested in business and economics".to_string(),
        },
        StreamCatalogEntry {
            name: "Arts".to_string(),
            subjects: strings(&["Literature", "History", "Geography", "Political Science"]),
            career_paths: strings(&["Civil Services", "Law", "Journalism", "Teaching"]),
            entrance_exams: strings(&["CLAT", "JMI", "BHU"]),
            suitable_interests: vec![RiasecCategory::Social, RiasecCategory::Artistic],
            aptitude_domains: vec![AptitudeDomain::Verbal],
            aptitude_reason: Some("Excellent verbal abilities".to_string()),
            description: "For students interested in society, culture, and humanities".to_string(),
        },
    ]
}

fn builtin_stream_careers() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        (
            "Science".to_string(),
            strings(&["Software Engineer", "Data Scientist", "Doctor", "Research Scientist"]),
        ),
        (
            "Commerce".to_string(),
            strings(&["Business Analyst", "Chartered Accountant", "Investment Banker", "Entrepreneur"]),
        ),
        (
            "Arts".to_string(),
            strings(&["Teacher", "Lawyer", "Journalist", "Civil Servant"]),
        ),
    ])
}

fn builtin_aptitude_items() -> Vec<AptitudeItem> {
    let item = |id: &str, domain, text: &str, answer: &str| AptitudeItem {
        id: id.to_string(),
        domain,
        text: text.to_string(),
        answer: answer.to_string(),
    };

    vec![
        item(
            "L1",
            AptitudeDomain::Logical,
            "If all Bloops are Razzies and all Razzies are Lazzies, are all Bloops definitely Lazzies?",
            "Yes",
        ),
        item("N1", AptitudeDomain::Numerical, "What is 15% of 200?", "30"),
        item(
            "S1",
            AptitudeDomain::Spatial,
            "Rotate an L-shape 90° clockwise. Which orientation matches?",
            "C",
        ),
        item("V1", AptitudeDomain::Verbal, "Choose the synonym of 'benevolent'", "Kind"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_CATALOG: &str = r#"
[[careers]]
id = "nurse"
name = "Nurse"
education_path = ["Science", "Nursing", "B.Sc Nursing"]

[careers.riasec_profile]
realistic = 40.0
investigative = 60.0
artistic = 10.0
social = 95.0
enterprising = 20.0
conventional = 50.0

[careers.required_aptitude]
verbal = 70.0

[[streams]]
name = "Vocational"
suitable_interests = ["realistic"]

[stream_careers]
Vocational = ["Electrician"]
"#;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.careers.len(), 5);
        assert_eq!(catalog.streams.len(), 3);
        assert_eq!(catalog.aptitude_items.len(), 4);
    }

    #[test]
    fn test_example_careers_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.example_careers("Arts")[0], "Teacher");
        assert!(catalog.example_careers("Vocational").is_empty());
    }

    #[test]
    fn test_from_toml_partial_catalog() {
        let catalog = Catalog::from_toml_str(MINIMAL_CATALOG).unwrap();

        assert_eq!(catalog.careers[0].id, "nurse");
        assert_eq!(catalog.careers[0].required_aptitude.iter().count(), 1);
        assert!(catalog.streams[0].aptitude_domains.is_empty());
        // Item bank falls back to the built-in questions
        assert_eq!(catalog.aptitude_items.len(), 4);
        assert_eq!(catalog.example_careers("Vocational"), vec!["Electrician"]);
    }

    #[test]
    fn test_duplicate_career_rejected() {
        let mut catalog = Catalog::builtin();
        let duplicate = catalog.careers[0].clone();
        catalog.careers.push(duplicate);

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidCatalog(_)));
    }

    #[test]
    fn test_out_of_range_level_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.careers[1].riasec_profile.social = 140.0;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = Catalog::from_toml_str("careers = 3").unwrap_err();
        assert!(matches!(err, EngineError::CatalogParse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::load("/nonexistent/catalog.toml").unwrap_err();
        assert!(matches!(err, EngineError::CatalogIo(_)));
    }
}
