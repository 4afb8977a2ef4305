use serde::{Deserialize, Serialize};

/// One skill detected in an uploaded CV or transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub skill: String,
    pub confidence_score: u32,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Course,
    Certification,
    Project,
    Book,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub skill: String,
    pub resource: String,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthTrend {
    Rising,
    Stable,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMarketInsight {
    pub role: String,
    pub openings: u32,
    pub salary_range: String,
    pub growth_trend: GrowthTrend,
    pub location: String,
}
