//! CV parsing. Mock: identity is derived from the upload filename, contact
//! details and experience are placeholders, the rest comes from the catalog.

use crate::catalog::CvTemplate;
use crate::models::recruiter::CvParsedData;
use crate::random::RandomSource;

const STRIPPED_EXTENSIONS: [&str; 2] = [".pdf", ".txt"];

/// "jane_doe-smith.pdf" → "Jane Doe-Smith".
///
/// Removes every `.pdf`/`.txt` occurrence, turns underscores into spaces and
/// title-cases each alphabetic run.
pub fn candidate_name_from_filename(filename: &str) -> String {
    let mut stem = filename.to_string();
    for ext in STRIPPED_EXTENSIONS {
        stem = stem.replace(ext, "");
    }
    title_case(&stem.replace('_', " "))
}

/// "Jane Doe" → "jane.doe@email.com".
pub fn email_for(candidate_name: &str) -> String {
    format!("{}@email.com", candidate_name.to_lowercase().replace(' ', "."))
}

pub fn parse_cv(filename: &str, template: &CvTemplate, rng: &dyn RandomSource) -> CvParsedData {
    let candidate_name = candidate_name_from_filename(filename);
    let email = email_for(&candidate_name);

    CvParsedData {
        email,
        phone: format!("+1-555-{}", rng.between(1000, 9999)),
        skills: template.skills.clone(),
        experience_years: rng.between(2, 8),
        education: template.education.clone(),
        previous_roles: template.previous_roles.clone(),
        candidate_name,
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
