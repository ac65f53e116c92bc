use crate::entity::outbound_email::{self, EmailStatus, MAX_RETRIES};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Queue a new message as `pending` with no attempts recorded.
pub async fn enqueue<C: ConnectionTrait>(
    db: &C,
    recipient: String,
    subject: String,
    body: String,
    created_at: String,
) -> Result<outbound_email::Model, DbErr> {
    outbound_email::ActiveModel {
        recipient: Set(recipient),
        subject: Set(subject),
        body: Set(body),
        status: Set(EmailStatus::Pending),
        created_at: Set(created_at),
        retry_count: Set(0),
        sent_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn find_by_id<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<outbound_email::Model>, DbErr> {
    outbound_email::Entity::find_by_id(id).one(db).await
}

/// Rows still owed a delivery attempt: pending or failed, below the retry ceiling.
pub async fn list_eligible<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<outbound_email::Model>, DbErr> {
    outbound_email::Entity::find()
        .filter(outbound_email::Column::Status.is_in([EmailStatus::Pending, EmailStatus::Failed]))
        .filter(outbound_email::Column::RetryCount.lt(MAX_RETRIES))
        .order_by_asc(outbound_email::Column::Id)
        .all(db)
        .await
}

pub async fn mark_sent<C: ConnectionTrait>(
    db: &C,
    email: outbound_email::Model,
    sent_at: String,
) -> Result<outbound_email::Model, DbErr> {
    let mut active: outbound_email::ActiveModel = email.into();
    active.status = Set(EmailStatus::Sent);
    active.sent_at = Set(Some(sent_at));
    active.update(db).await
}

/// Record a failed attempt. The count never climbs past [`MAX_RETRIES`].
pub async fn mark_failed<C: ConnectionTrait>(
    db: &C,
    email: outbound_email::Model,
) -> Result<outbound_email::Model, DbErr> {
    let retry_count = (email.retry_count + 1).min(MAX_RETRIES);
    let mut active: outbound_email::ActiveModel = email.into();
    active.status = Set(EmailStatus::Failed);
    active.retry_count = Set(retry_count);
    active.update(db).await
}
