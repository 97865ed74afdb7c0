//! Timestamps are owned by the persistence layer: every entity stamps
//! `updated_at` on save and `created_at` on insert from its `before_save` hook.

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;

pub fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

/// Implements `ActiveModelBehavior` for an entity whose active model has
/// `created_at` and `updated_at` columns.
#[macro_export]
macro_rules! stamp_on_save {
    ($active:ty) => {
        #[async_trait::async_trait]
        impl sea_orm::ActiveModelBehavior for $active {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                let now = $crate::timestamps::now();
                self.updated_at = sea_orm::Set(now);
                if insert {
                    self.created_at = sea_orm::Set(now);
                }
                Ok(self)
            }
        }
    };
}
