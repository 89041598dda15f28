pub mod clock;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod numeric;
pub mod sources;
