//! Tag listing.

pub mod repository;
pub mod service;

pub use service::TagService;
