use crate::entity::account;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Look up an account by its already-normalized email.
pub async fn find_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<account::Model>, DbErr> {
    account::Entity::find()
        .filter(account::Column::Email.eq(email))
        .one(db)
        .await
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<account::Model>, DbErr> {
    account::Entity::find()
        .order_by_asc(account::Column::Id)
        .all(db)
        .await
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    email: String,
    hashed_password: String,
) -> Result<account::Model, DbErr> {
    account::ActiveModel {
        email: Set(email),
        hashed_password: Set(hashed_password),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    let result = account::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
