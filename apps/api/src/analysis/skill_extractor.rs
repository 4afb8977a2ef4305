//! Skill extraction — pluggable, trait-based extractor over free text.
//!
//! Default: `KeywordSkillExtractor` (catalog substring lookup, no model).
//! `AppState` holds an `Arc<dyn SkillExtractor>`, chosen at startup.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::student::SkillAnalysis;
use crate::random::RandomSource;

/// Mock confidence range reported for every detected skill.
pub const CONFIDENCE_MIN: u32 = 70;
pub const CONFIDENCE_MAX: u32 = 95;

pub trait SkillExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<SkillAnalysis>;
}

/// Catalog-driven keyword extractor.
///
/// For each skill pattern, in catalog order, the first pattern that occurs as a
/// substring of the lowercased text yields one `SkillAnalysis`. Short patterns
/// (`ts`, `js`, `ai`) match inside longer words on purpose; this is a mock.
pub struct KeywordSkillExtractor {
    catalog: Arc<Catalog>,
    rng: Arc<dyn RandomSource>,
}

impl KeywordSkillExtractor {
    pub fn new(catalog: Arc<Catalog>, rng: Arc<dyn RandomSource>) -> Self {
        Self { catalog, rng }
    }
}

impl SkillExtractor for KeywordSkillExtractor {
    fn extract(&self, text: &str) -> Vec<SkillAnalysis> {
        let text_lower = text.to_lowercase();

        self.catalog
            .skill_patterns
            .iter()
            .filter_map(|entry| {
                let hit = entry
                    .patterns
                    .iter()
                    .find(|pattern| text_lower.contains(pattern.as_str()))?;
                Some(SkillAnalysis {
                    skill: entry.skill.clone(),
                    confidence_score: self.rng.between(CONFIDENCE_MIN, CONFIDENCE_MAX),
                    category: self.catalog.category_for(hit).to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    fn extractor() -> KeywordSkillExtractor {
        KeywordSkillExtractor::new(Arc::new(Catalog::builtin()), Arc::new(SeededRandom::new(3)))
    }

    fn names(skills: &[SkillAnalysis]) -> Vec<&str> {
        skills.iter().map(|s| s.skill.as_str()).collect()
    }

    #[test]
    fn test_detects_skills_in_catalog_order() {
        let found = extractor().extract("Built services in Python with PostgreSQL and Docker.");
        assert_eq!(names(&found), vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_category_from_first_matching_pattern() {
        let found = extractor().extract("ReactJS and mysql");
        let react = found.iter().find(|s| s.skill == "React.js").unwrap();
        // "react" is checked before "reactjs" and is a substring of it
        assert_eq!(react.category, "Frontend Development");
        let sql = found.iter().find(|s| s.skill == "SQL").unwrap();
        assert_eq!(sql.category, "Database");
    }

    #[test]
    fn test_uncategorized_pattern_is_general() {
        let found = extractor().extract("MongoDB");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "General");
    }

    #[test]
    fn test_each_skill_reported_once() {
        let found = extractor().extract("git github git GitHub");
        assert_eq!(names(&found), vec!["Git"]);
    }

    #[test]
    fn test_confidence_in_mock_range() {
        let found = extractor().extract("react typescript javascript node python sql docker aws");
        assert!(!found.is_empty());
        assert!(found
            .iter()
            .all(|s| (CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&s.confidence_score)));
    }

    #[test]
    fn test_empty_text_finds_nothing() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_same_seed_same_confidences() {
        let text = "react and python";
        assert_eq!(extractor().extract(text), extractor().extract(text));
    }
}
