//! Queued outbound email, mutated in place by the drain sweep and never deleted.

use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Delivery attempts stop once a row has failed this many times.
pub const MAX_RETRIES: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "sent")]
    Sent,
    #[sea_orm(string_value = "failed")]
    Failed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "email_queue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub status: EmailStatus,
    pub created_at: String,
    pub retry_count: i32,
    pub sent_at: Option<String>,
}

impl Model {
    /// Whether the drain sweep should (re)attempt this row.
    pub fn is_eligible(&self) -> bool {
        matches!(self.status, EmailStatus::Pending | EmailStatus::Failed)
            && self.retry_count < MAX_RETRIES
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
