// Student-facing tools: skill extraction from uploads, learning roadmaps,
// job-market insights. All data comes from the shared catalog.

pub mod handlers;
pub mod market;
pub mod roadmap;
pub mod skill_extractor;
