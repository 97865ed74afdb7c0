//! Blog management: domain shapes, repository seam and the business service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::BlogService;
