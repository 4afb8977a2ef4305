use crate::catalog::Catalog;
use crate::models::student::JobMarketInsight;

/// Market insights, optionally narrowed to roles containing `role`
/// (case-insensitive). `None` or a blank role returns everything.
pub fn market_insights(catalog: &Catalog, role: Option<&str>) -> Vec<JobMarketInsight> {
    let needle = role.map(|r| r.trim().to_lowercase()).unwrap_or_default();

    catalog
        .market_insights
        .iter()
        .filter(|insight| needle.is_empty() || insight.role.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
