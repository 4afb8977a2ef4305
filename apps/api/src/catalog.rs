//! Mock-data catalog: skill patterns, role templates, canned roadmap, market,
//! JD and CV data.
//!
//! Built once at startup (built-in tables, or a JSON file via `CATALOG_PATH`)
//! and shared read-only through `AppState`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::matching::career::CareerTemplate;
use crate::models::recruiter::JdSummary;
use crate::models::student::{
    GrowthTrend, JobMarketInsight, LearningResource, Priority, ResourceType,
};

/// A canonical skill and the lowercase substrings that reveal it in free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPattern {
    pub skill: String,
    pub patterns: Vec<String>,
}

/// Fixed parts of a parsed CV. Name, contact and experience come from the upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvTemplate {
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub previous_roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Pattern → category. Patterns without an entry fall back to "General".
    pub skill_categories: HashMap<String, String>,
    pub skill_patterns: Vec<SkillPattern>,
    pub career_templates: Vec<CareerTemplate>,
    pub learning_resources: Vec<LearningResource>,
    pub market_insights: Vec<JobMarketInsight>,
    pub jd_summary: JdSummary,
    pub cv_template: CvTemplate,
}

impl Catalog {
    /// Loads a catalog from a JSON file. Every table must be present.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file {} is not valid JSON", path.display()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        for pattern in &self.skill_patterns {
            ensure!(
                !pattern.patterns.is_empty(),
                "Skill pattern '{}' has no patterns",
                pattern.skill
            );
            ensure!(
                pattern.patterns.iter().all(|p| !p.trim().is_empty()),
                "Skill pattern '{}' contains a blank pattern",
                pattern.skill
            );
        }
        Ok(())
    }

    pub fn builtin() -> Self {
        Catalog {
            skill_categories: builtin_categories(),
            skill_patterns: builtin_patterns(),
            career_templates: builtin_templates(),
            learning_resources: builtin_resources(),
            market_insights: builtin_market(),
            jd_summary: builtin_jd_summary(),
            cv_template: CvTemplate {
                skills: strings(&[
                    "React.js",
                    "TypeScript",
                    "JavaScript",
                    "Node.js",
                    "Python",
                    "SQL",
                ]),
                education: strings(&["Bachelor's in Computer Science"]),
                previous_roles: strings(&[
                    "Software Engineer at TechCorp",
                    "Frontend Developer at StartupXYZ",
                ]),
            },
        }
    }

    pub fn category_for(&self, pattern: &str) -> &str {
        self.skill_categories
            .get(pattern)
            .map(String::as_str)
            .unwrap_or("General")
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_categories() -> HashMap<String, String> {
    [
        ("react", "Frontend Development"),
        ("javascript", "Programming Languages"),
        ("typescript", "Programming Languages"),
        ("python", "Programming Languages"),
        ("node", "Backend Development"),
        ("sql", "Database"),
        ("machine learning", "AI/ML"),
        ("git", "Version Control"),
        ("aws", "Cloud Computing"),
        ("docker", "DevOps"),
        ("html", "Frontend Development"),
        ("css", "Frontend Development"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

const SKILL_PATTERNS: &[(&str, &[&str])] = &[
    ("React.js", &["react", "reactjs"]),
    ("TypeScript", &["typescript", "ts"]),
    ("JavaScript", &["javascript", "js"]),
    ("Node.js", &["node", "nodejs"]),
    ("Python", &["python"]),
    ("SQL", &["sql", "mysql", "postgresql"]),
    ("Machine Learning", &["machine learning", "ml", "ai"]),
    ("Git", &["git", "github"]),
    ("AWS", &["aws", "amazon web services"]),
    ("Docker", &["docker"]),
    ("HTML/CSS", &["html", "css"]),
    ("Redux", &["redux"]),
    ("Vue.js", &["vue", "vuejs"]),
    ("Angular", &["angular"]),
    ("MongoDB", &["mongodb", "mongo"]),
];

const CAREER_TEMPLATES: &[(&str, &[&str], &str)] = &[
    (
        "Frontend Developer",
        &["React.js", "JavaScript", "HTML/CSS", "TypeScript"],
        "Technology",
    ),
    (
        "Full Stack Developer",
        &["React.js", "Node.js", "JavaScript", "SQL", "TypeScript"],
        "Technology",
    ),
    (
        "Data Scientist",
        &["Python", "Machine Learning", "SQL", "Statistics"],
        "Data Science",
    ),
    (
        "DevOps Engineer",
        &["AWS", "Docker", "Kubernetes", "Git", "Linux"],
        "Technology",
    ),
];

fn builtin_patterns() -> Vec<SkillPattern> {
    SKILL_PATTERNS
        .iter()
        .map(|(skill, patterns)| SkillPattern {
            skill: skill.to_string(),
            patterns: strings(patterns),
        })
        .collect()
}

fn builtin_templates() -> Vec<CareerTemplate> {
    CAREER_TEMPLATES
        .iter()
        .map(|(role, skills, industry)| CareerTemplate {
            role: role.to_string(),
            required_skills: strings(skills),
            industry: industry.to_string(),
        })
        .collect()
}

fn builtin_resources() -> Vec<LearningResource> {
    vec![
        LearningResource {
            skill: "Advanced React Patterns".to_string(),
            resource: "React Advanced Patterns Course".to_string(),
            priority: Priority::High,
            resource_type: ResourceType::Course,
            url: Some("https://example.com/react-course".to_string()),
        },
        LearningResource {
            skill: "State Management".to_string(),
            resource: "Redux Toolkit Mastery".to_string(),
            priority: Priority::High,
            resource_type: ResourceType::Course,
            url: Some("https://example.com/redux-course".to_string()),
        },
        LearningResource {
            skill: "Testing".to_string(),
            resource: "Jest & React Testing Library".to_string(),
            priority: Priority::Medium,
            resource_type: ResourceType::Course,
            url: Some("https://example.com/testing-course".to_string()),
        },
        LearningResource {
            skill: "Performance Optimization".to_string(),
            resource: "Web Performance Optimization".to_string(),
            priority: Priority::Medium,
            resource_type: ResourceType::Book,
            url: Some("https://example.com/performance-book".to_string()),
        },
    ]
}

fn builtin_market() -> Vec<JobMarketInsight> {
    [
        ("Frontend Developer", 1250, "$70K - $120K", "Remote/Global"),
        ("Full Stack Developer", 980, "$80K - $140K", "Remote/Global"),
        ("Data Scientist", 750, "$95K - $160K", "San Francisco, CA"),
    ]
    .into_iter()
    .map(|(role, openings, salary_range, location)| JobMarketInsight {
        role: role.to_string(),
        openings,
        salary_range: salary_range.to_string(),
        growth_trend: GrowthTrend::Rising,
        location: location.to_string(),
    })
    .collect()
}

fn builtin_jd_summary() -> JdSummary {
    JdSummary {
        title: "Senior Frontend Developer".to_string(),
        department: "Engineering".to_string(),
        experience_level: "5+ years".to_string(),
        required_skills: strings(&["React.js", "TypeScript", "JavaScript", "HTML/CSS", "Redux"]),
        preferred_skills: strings(&["Node.js", "AWS", "Docker", "Kubernetes"]),
        responsibilities: strings(&[
            "Develop and maintain complex web applications",
            "Collaborate with cross-functional teams",
            "Optimize applications for maximum speed and scalability",
        ]),
        qualifications: strings(&[
            "Bachelor's degree in Computer Science",
            "5+ years of frontend development experience",
            "Strong proficiency in React.js",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_tables_are_populated() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.skill_patterns.len(), 15);
        assert_eq!(catalog.career_templates.len(), 4);
        assert_eq!(catalog.learning_resources.len(), 4);
        assert_eq!(catalog.market_insights.len(), 3);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_category_falls_back_to_general() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_for("react"), "Frontend Development");
        assert_eq!(catalog.category_for("reactjs"), "General");
    }

    #[test]
    fn test_load_round_trips_builtin_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&Catalog::builtin()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = Catalog::load(file.path()).unwrap();
        assert_eq!(loaded, Catalog::builtin());
    }

    #[test]
    fn test_load_rejects_blank_pattern() {
        let mut catalog = Catalog::builtin();
        catalog.skill_patterns[0].patterns.push("  ".to_string());
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&catalog).unwrap().as_bytes())
            .unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("blank pattern"), "{err}");
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
