use crate::catalog::Catalog;
use crate::models::student::LearningResource;

/// Learning resources for `target_role`. The roadmap is canned: every role
/// gets the catalog's resource list in catalog order.
pub fn build_roadmap(catalog: &Catalog, _target_role: &str) -> Vec<LearningResource> {
    catalog.learning_resources.clone()
}
