//! Events, holidays and operating hours.

use crate::entity::{event, holiday, operating_hour};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};
use time::Date;

/// All events in insertion order.
pub async fn list_events<C: ConnectionTrait>(db: &C) -> Result<Vec<event::Model>, DbErr> {
    event::Entity::find()
        .order_by_asc(event::Column::Id)
        .all(db)
        .await
}

/// All events ordered by date ascending.
pub async fn list_events_by_date<C: ConnectionTrait>(db: &C) -> Result<Vec<event::Model>, DbErr> {
    event::Entity::find()
        .order_by_asc(event::Column::Date)
        .order_by_asc(event::Column::Id)
        .all(db)
        .await
}

pub async fn create_event<C: ConnectionTrait>(
    db: &C,
    title: String,
    date: Date,
    description: Option<String>,
) -> Result<event::Model, DbErr> {
    event::ActiveModel {
        title: Set(title),
        date: Set(date),
        description: Set(description),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Delete an event; returns `false` when no row had that id.
pub async fn delete_event<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    let result = event::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_holidays<C: ConnectionTrait>(db: &C) -> Result<Vec<holiday::Model>, DbErr> {
    holiday::Entity::find()
        .order_by_asc(holiday::Column::Id)
        .all(db)
        .await
}

pub async fn list_holidays_by_date<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<holiday::Model>, DbErr> {
    holiday::Entity::find()
        .order_by_asc(holiday::Column::Date)
        .order_by_asc(holiday::Column::Id)
        .all(db)
        .await
}

pub async fn create_holiday<C: ConnectionTrait>(
    db: &C,
    name: String,
    date: Date,
) -> Result<holiday::Model, DbErr> {
    holiday::ActiveModel {
        name: Set(name),
        date: Set(date),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Delete a holiday; returns `false` when no row had that id.
pub async fn delete_holiday<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    let result = holiday::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_operating_hours<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<operating_hour::Model>, DbErr> {
    operating_hour::Entity::find()
        .order_by_asc(operating_hour::Column::Id)
        .all(db)
        .await
}

/// Insert the hours row for `day`. Only used for seeding; the API never mutates hours.
pub async fn create_operating_hour<C: ConnectionTrait>(
    db: &C,
    day: &str,
    hours: &str,
) -> Result<operating_hour::Model, DbErr> {
    operating_hour::ActiveModel {
        day: Set(day.to_string()),
        hours: Set(hours.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
