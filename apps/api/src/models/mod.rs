pub mod envelope;
pub mod recruiter;
pub mod student;
