pub mod query;
pub mod report;
pub mod scoring;
