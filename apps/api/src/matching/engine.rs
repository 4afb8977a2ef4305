//! Matching & Scoring Engine — skill overlap, percentage score, shortlist gate.
//!
//! Pure functions only. Callers validate request shape before invoking; empty
//! inputs here degrade to a zero score instead of failing.
//!
//! Matching rule: a required skill is satisfied when some candidate skill,
//! lowercased, is a substring of the lowercased required skill. The direction
//! is fixed (candidate-in-requirement): `"react"` satisfies `"React.js"`, but
//! `"React.js"` does not satisfy `"react"`.

use serde::{Deserialize, Serialize};

/// Minimum `score_percent` for a candidate to be shortlisted.
pub const SHORTLIST_THRESHOLD: u32 = 80;

/// Composite score weights: required coverage, preferred coverage, experience.
pub const REQUIRED_WEIGHT: f64 = 70.0;
pub const PREFERRED_WEIGHT: f64 = 20.0;
pub const EXPERIENCE_WEIGHT: f64 = 10.0;
/// Years of experience at which the experience component saturates.
pub const EXPERIENCE_CAP_YEARS: f64 = 5.0;

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Shortlisted,
    Rejected,
}

impl MatchStatus {
    pub fn from_score(score_percent: u32) -> Self {
        if score_percent >= SHORTLIST_THRESHOLD {
            MatchStatus::Shortlisted
        } else {
            MatchStatus::Rejected
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Shortlisted => "shortlisted",
            MatchStatus::Rejected => "rejected",
        }
    }
}

/// A role or job description and the skills it asks for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    pub required: Vec<String>,
    #[serde(default)]
    pub preferred: Vec<String>,
}

/// Outcome of scoring one candidate against one required-skill set.
///
/// `matching_skills` and `missing_skills` partition the (de-duplicated)
/// required skills, spelled and ordered as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score_percent: u32,
    pub status: MatchStatus,
}

/// Weighted breakdown mixing required skills, preferred skills and experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositeScore {
    pub required_points: u32,
    pub preferred_points: u32,
    pub experience_points: u32,
    pub total: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Scores `candidate_skills` against `required_skills`.
pub fn compute_match<C, R>(candidate_skills: &[C], required_skills: &[R]) -> MatchResult
where
    C: AsRef<str>,
    R: AsRef<str>,
{
    let needles = normalize_candidate(candidate_skills);
    let required = dedup_skills(required_skills);

    let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = required
        .into_iter()
        .partition(|skill| is_satisfied(&needles, skill));

    let score_percent = percent(
        matching_skills.len(),
        matching_skills.len() + missing_skills.len(),
    );

    MatchResult {
        matching_skills,
        missing_skills,
        score_percent,
        status: MatchStatus::from_score(score_percent),
    }
}

/// The members of `skills` the candidate satisfies, under the same rule as
/// `compute_match`.
pub fn matching_subset<C, S>(candidate_skills: &[C], skills: &[S]) -> Vec<String>
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    let needles = normalize_candidate(candidate_skills);
    dedup_skills(skills)
        .into_iter()
        .filter(|skill| is_satisfied(&needles, skill))
        .collect()
}

/// Required coverage × 70 + preferred coverage × 20 + min(years / 5, 1) × 10.
///
/// A requirement without preferred skills contributes no preferred points.
pub fn composite_score<C>(
    candidate_skills: &[C],
    requirement: &Requirement,
    experience_years: u32,
) -> CompositeScore
where
    C: AsRef<str>,
{
    let required = dedup_skills(&requirement.required);
    let preferred = dedup_skills(&requirement.preferred);

    let required_ratio = coverage(candidate_skills, &required);
    let preferred_ratio = coverage(candidate_skills, &preferred);
    let experience_ratio = (f64::from(experience_years) / EXPERIENCE_CAP_YEARS).min(1.0);

    let required_raw = required_ratio * REQUIRED_WEIGHT;
    let preferred_raw = preferred_ratio * PREFERRED_WEIGHT;
    let experience_raw = experience_ratio * EXPERIENCE_WEIGHT;

    CompositeScore {
        required_points: required_raw.round() as u32,
        preferred_points: preferred_raw.round() as u32,
        experience_points: experience_raw.round() as u32,
        total: (required_raw + preferred_raw + experience_raw).round() as u32,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Lowercased, trimmed candidate skills. Blank entries are dropped since an
/// empty string is a substring of every requirement.
fn normalize_candidate<C: AsRef<str>>(candidate_skills: &[C]) -> Vec<String> {
    candidate_skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Drops case-insensitive duplicates, keeping the first entry verbatim and the
/// list order. Blank entries are kept; no candidate skill can satisfy them.
fn dedup_skills<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(skills.len());
    let mut out = Vec::with_capacity(skills.len());
    for skill in skills {
        let key = skill.as_ref().trim().to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(skill.as_ref().to_string());
        }
    }
    out
}

fn is_satisfied(needles: &[String], required_skill: &str) -> bool {
    let haystack = required_skill.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

fn coverage<C: AsRef<str>>(candidate_skills: &[C], skills: &[String]) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }
    let matched = matching_subset(candidate_skills, skills).len();
    matched as f64 / skills.len() as f64
}

/// `round(100 * matched / total)` with halves rounding up; 0 when `total == 0`.
fn percent(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * matched + total) / (2 * total)) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_end_to_end_react_sql_example() {
        let result = compute_match(&["react", "sql"], &["React.js", "Node.js", "SQL"]);
        assert_eq!(result.matching_skills, skills(&["React.js", "SQL"]));
        assert_eq!(result.missing_skills, skills(&["Node.js"]));
        assert_eq!(result.score_percent, 67);
        assert_eq!(result.status, MatchStatus::Rejected);
    }

    #[test]
    fn test_four_of_five_is_shortlisted_at_80() {
        let required = ["Rust", "SQL", "Docker", "AWS", "Kafka"];
        let result = compute_match(&["rust", "sql", "docker", "aws"], &required);
        assert_eq!(result.score_percent, 80);
        assert_eq!(result.status, MatchStatus::Shortlisted);
    }

    #[test]
    fn test_three_of_five_is_rejected_at_60() {
        let required = ["Rust", "SQL", "Docker", "AWS", "Kafka"];
        let result = compute_match(&["rust", "sql", "docker"], &required);
        assert_eq!(result.score_percent, 60);
        assert_eq!(result.status, MatchStatus::Rejected);
    }

    #[test]
    fn test_threshold_boundary_79_vs_80() {
        assert_eq!(MatchStatus::from_score(SHORTLIST_THRESHOLD - 1), MatchStatus::Rejected);
        assert_eq!(MatchStatus::from_score(SHORTLIST_THRESHOLD), MatchStatus::Shortlisted);
        assert_eq!(MatchStatus::from_score(100), MatchStatus::Shortlisted);
        assert_eq!(MatchStatus::from_score(0), MatchStatus::Rejected);
    }

    #[test]
    fn test_empty_requirement_scores_zero() {
        let empty: [&str; 0] = [];
        let result = compute_match(&["rust", "go"], &empty);
        assert_eq!(result.score_percent, 0);
        assert_eq!(result.status, MatchStatus::Rejected);
        assert!(result.matching_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_empty_candidate_misses_everything() {
        let empty: [&str; 0] = [];
        let result = compute_match(&empty, &["Python", "SQL"]);
        assert_eq!(result.score_percent, 0);
        assert_eq!(result.missing_skills, skills(&["Python", "SQL"]));
    }

    #[test]
    fn test_blank_candidate_skill_does_not_match_everything() {
        let result = compute_match(&["", "   "], &["Python", "SQL"]);
        assert!(result.matching_skills.is_empty());
        assert_eq!(result.score_percent, 0);
    }

    #[test]
    fn test_containment_direction_is_candidate_in_requirement() {
        // "react" ⊂ "react.js" → match
        assert_eq!(compute_match(&["react"], &["React.js"]).score_percent, 100);
        // "react.js" ⊄ "react" → no match
        assert_eq!(compute_match(&["React.js"], &["React"]).score_percent, 0);
    }

    #[test]
    fn test_multi_word_requirement_matches_on_fragment() {
        let result = compute_match(&["learning"], &["Machine Learning", "Statistics"]);
        assert_eq!(result.matching_skills, skills(&["Machine Learning"]));
        assert_eq!(result.score_percent, 50);
    }

    #[test]
    fn test_partition_covers_required_without_overlap() {
        let required = skills(&["React.js", "Node.js", "JavaScript", "SQL", "TypeScript"]);
        let candidates = [
            skills(&[]),
            skills(&["java"]),
            skills(&["script", "sql"]),
            skills(&["react", "node", "javascript", "sql", "typescript"]),
        ];
        for candidate in &candidates {
            let result = compute_match(candidate, &required);
            let mut union: Vec<String> = result
                .matching_skills
                .iter()
                .chain(result.missing_skills.iter())
                .cloned()
                .collect();
            union.sort();
            let mut expected = required.clone();
            expected.sort();
            assert_eq!(union, expected);
            assert!(result
                .matching_skills
                .iter()
                .all(|m| !result.missing_skills.contains(m)));
            assert_eq!(
                result.status == MatchStatus::Shortlisted,
                result.score_percent >= SHORTLIST_THRESHOLD
            );
        }
    }

    #[test]
    fn test_duplicate_requirements_counted_once() {
        let result = compute_match(&["sql"], &["SQL", "sql", "Python"]);
        assert_eq!(result.matching_skills, skills(&["SQL"]));
        assert_eq!(result.missing_skills, skills(&["Python"]));
        assert_eq!(result.score_percent, 50);
    }

    #[test]
    fn test_blank_requirement_stays_missing() {
        let result = compute_match(&["sql"], &["", "SQL"]);
        assert_eq!(result.matching_skills, skills(&["SQL"]));
        assert_eq!(result.missing_skills, skills(&[""]));
        assert_eq!(result.score_percent, 50);
        assert_eq!(result.status, MatchStatus::Rejected);
    }

    #[test]
    fn test_requirement_spelling_is_preserved() {
        let result = compute_match(&["sql"], &[" SQL ", "sql"]);
        assert_eq!(result.matching_skills, skills(&[" SQL "]));
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.score_percent, 100);
    }

    #[test]
    fn test_score_rounds_half_up() {
        // 2/3 = 66.67 → 67, 1/3 = 33.33 → 33, 1/8 = 12.5 → 13
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(7, 7), 100);
    }

    #[test]
    fn test_matching_subset_keeps_order() {
        let preferred = ["Node.js", "AWS", "Docker", "Kubernetes"];
        let found = matching_subset(&["docker", "node"], &preferred);
        assert_eq!(found, skills(&["Node.js", "Docker"]));
    }

    #[test]
    fn test_composite_score_weights() {
        let requirement = Requirement {
            name: "Senior Frontend Developer".to_string(),
            required: skills(&["React.js", "TypeScript", "JavaScript", "HTML/CSS", "Redux"]),
            preferred: skills(&["Node.js", "AWS", "Docker", "Kubernetes"]),
        };
        let candidate = ["react", "typescript", "javascript", "html", "node"];
        let composite = composite_score(&candidate, &requirement, 6);
        // 4/5 * 70 = 56, 1/4 * 20 = 5, capped experience = 10
        assert_eq!(composite.required_points, 56);
        assert_eq!(composite.preferred_points, 5);
        assert_eq!(composite.experience_points, 10);
        assert_eq!(composite.total, 71);
    }

    #[test]
    fn test_composite_without_preferred_skills() {
        let requirement = Requirement {
            name: "Data Scientist".to_string(),
            required: skills(&["Python"]),
            preferred: vec![],
        };
        let composite = composite_score(&["python"], &requirement, 0);
        assert_eq!(composite.preferred_points, 0);
        assert_eq!(composite.experience_points, 0);
        assert_eq!(composite.total, 70);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::Shortlisted).unwrap(),
            r#""shortlisted""#
        );
        assert_eq!(MatchStatus::Rejected.as_str(), "rejected");
    }
}
