pub mod classification;
pub mod common;
pub mod matches;
pub mod prediction;
pub mod user;
