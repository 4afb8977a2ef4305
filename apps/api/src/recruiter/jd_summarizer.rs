use crate::catalog::Catalog;
use crate::models::recruiter::JdSummary;

/// Summarizes a job description. Mock: the text is read but the summary is
/// the catalog's canned one.
pub fn summarize_jd(catalog: &Catalog, _jd_text: &str) -> JdSummary {
    catalog.jd_summary.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_canned_regardless_of_text() {
        let catalog = Catalog::builtin();
        let a = summarize_jd(&catalog, "Backend engineer, Go and Postgres");
        let b = summarize_jd(&catalog, "");
        assert_eq!(a, b);
        assert_eq!(a.title, "Senior Frontend Developer");
        assert_eq!(a.required_skills.len(), 5);
    }
}
