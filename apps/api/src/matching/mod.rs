// Matching & Scoring Engine
// Implements: skill overlap scoring, shortlist gate, career-path ranking,
// interview scheduling. Engine functions are pure; handlers validate input.

pub mod career;
pub mod engine;
pub mod handlers;
pub mod scheduling;
