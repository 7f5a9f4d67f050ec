pub mod chrome;
pub mod overview;
pub mod presentation;
