pub mod answer;
pub mod api;
pub mod app;
pub mod config;
pub mod course;
pub mod paths;
pub mod report;
