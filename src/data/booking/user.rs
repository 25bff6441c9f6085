use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait};

/// Repository for user accounts.
///
/// Authentication lives outside this backend; the user row exists so
/// reservations can reference their owner and be cascade-deleted with it.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self) -> Result<entity::orrery_user::Model, DbErr> {
        let user = entity::orrery_user::ActiveModel {
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Deletes a user, cascading to their reservations and tickets
    ///
    /// Returns OK regardless of the user existing; to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::OrreryUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
