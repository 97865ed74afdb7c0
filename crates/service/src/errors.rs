use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// Failures the caller did not cause and cannot fix.
    pub fn is_internal(&self) -> bool {
        matches!(self, ServiceError::Db(_) | ServiceError::Model(models::errors::ModelError::Db(_)))
    }

    /// Human readable detail without the category prefix.
    pub fn detail(&self) -> String {
        match self {
            ServiceError::Validation(m)
            | ServiceError::NotFound(m)
            | ServiceError::Conflict(m)
            | ServiceError::Db(m) => m.clone(),
            ServiceError::Model(models::errors::ModelError::Validation(m))
            | ServiceError::Model(models::errors::ModelError::Db(m)) => m.clone(),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

/// Logs internal failures with full detail under `failure`; expected outcomes pass silently.
pub fn log_unexpected(failure: &'static str) -> impl FnOnce(&ServiceError) {
    move |e| {
        if e.is_internal() {
            error!(error = %e, "{}", failure);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn internal_classification() {
        assert!(ServiceError::Db("boom".into()).is_internal());
        assert!(ServiceError::Model(ModelError::Db("boom".into())).is_internal());
        assert!(!ServiceError::Model(ModelError::Validation("bad".into())).is_internal());
        assert!(!ServiceError::NotFound("x".into()).is_internal());
        assert!(!ServiceError::Conflict("x".into()).is_internal());
        assert!(!ServiceError::Validation("x".into()).is_internal());
    }

    #[test]
    fn detail_strips_prefix() {
        let e = ServiceError::NotFound("There is no blog with slug = a".into());
        assert_eq!(e.to_string(), "not found: There is no blog with slug = a");
        assert_eq!(e.detail(), "There is no blog with slug = a");
    }
}
