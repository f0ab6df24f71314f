//! 面包店数据模型

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 序列化时只暴露自身字段，不带 baked_goods 集合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// PATCH /bakeries/:id 表单
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBakeryForm {
    pub name: Option<String>,
}
