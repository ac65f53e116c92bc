use crate::entity::newsletter_log::{self, DispatchStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Number of rows returned by the admin log readback.
pub const RECENT_LOG_LIMIT: u64 = 50;

pub async fn create<C: ConnectionTrait>(
    db: &C,
    user_email: &str,
    sent_at: String,
    status: DispatchStatus,
) -> Result<newsletter_log::Model, DbErr> {
    newsletter_log::ActiveModel {
        user_email: Set(user_email.to_string()),
        sent_at: Set(sent_at),
        status: Set(status),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Most recent rows first, capped at [`RECENT_LOG_LIMIT`].
pub async fn list_recent<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<newsletter_log::Model>, DbErr> {
    newsletter_log::Entity::find()
        .order_by_desc(newsletter_log::Column::Id)
        .limit(RECENT_LOG_LIMIT)
        .all(db)
        .await
}

pub async fn list_for_email<C: ConnectionTrait>(
    db: &C,
    user_email: &str,
) -> Result<Vec<newsletter_log::Model>, DbErr> {
    newsletter_log::Entity::find()
        .filter(newsletter_log::Column::UserEmail.eq(user_email))
        .order_by_asc(newsletter_log::Column::Id)
        .all(db)
        .await
}

/// Remove every row logged for `user_email`; returns the number of rows removed.
pub async fn delete_for_email<C: ConnectionTrait>(db: &C, user_email: &str) -> Result<u64, DbErr> {
    let result = newsletter_log::Entity::delete_many()
        .filter(newsletter_log::Column::UserEmail.eq(user_email))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
