// Recruiter tools: JD summarization and CV parsing from uploads.

pub mod cv_parser;
pub mod handlers;
pub mod jd_summarizer;
