pub mod classification;
pub mod export;
pub mod models;
pub mod scoring;
pub mod validation;
