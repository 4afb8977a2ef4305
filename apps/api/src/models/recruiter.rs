use serde::{Deserialize, Serialize};

/// Structured summary of a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdSummary {
    pub title: String,
    pub department: String,
    pub experience_level: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub responsibilities: Vec<String>,
    pub qualifications: Vec<String>,
}

/// Candidate data extracted from a CV upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvParsedData {
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: Vec<String>,
    pub previous_roles: Vec<String>,
}
