//! Career-path ranking: one match per role template, best first.

use serde::{Deserialize, Serialize};

use crate::matching::engine::compute_match;

/// A role the platform can recommend, with the skills it requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerTemplate {
    pub role: String,
    pub required_skills: Vec<String>,
    pub industry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPathMatch {
    pub role: String,
    pub required_skills: Vec<String>,
    pub match_percentage: u32,
    pub missing_skills: Vec<String>,
    pub industry: String,
}

/// Scores `user_skills` against every template and orders the results by
/// `match_percentage` descending. The sort is stable: equal scores keep
/// template order.
pub fn generate_career_paths<S: AsRef<str>>(
    user_skills: &[S],
    templates: &[CareerTemplate],
) -> Vec<CareerPathMatch> {
    let mut paths: Vec<CareerPathMatch> = templates
        .iter()
        .map(|template| {
            let result = compute_match(user_skills, &template.required_skills);
            CareerPathMatch {
                role: template.role.clone(),
                required_skills: template.required_skills.clone(),
                match_percentage: result.score_percent,
                missing_skills: result.missing_skills,
                industry: template.industry.clone(),
            }
        })
        .collect();

    paths.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    paths
}

/// Keeps paths whose role or industry contains `filter` (case-insensitive).
/// A blank filter keeps everything.
pub fn filter_paths(paths: Vec<CareerPathMatch>, filter: &str) -> Vec<CareerPathMatch> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return paths;
    }
    paths
        .into_iter()
        .filter(|p| {
            p.role.to_lowercase().contains(&needle) || p.industry.to_lowercase().contains(&needle)
        })
        .collect()
}
