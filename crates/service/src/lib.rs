//! Service layer providing the blog and tag business operations on top of models.
//! - Separates business logic (slugs, tag reuse, partial updates) from data access.
//! - Persistence sits behind repository traits with SeaORM and in-memory implementations.
//! - Every operation returns a typed `ServiceError`; unexpected failures are logged here.

pub mod errors;
pub mod slugs;
pub mod blog;
pub mod tag;
pub mod seed;
#[cfg(test)]
pub mod test_support;
