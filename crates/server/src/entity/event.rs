use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A dated museum event. Created and deleted by staff, never edited in place.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(with = "super::iso_date")]
    #[schema(value_type = String, format = Date, example = "2026-01-14")]
    pub date: time::Date,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
