//! 烘焙商品数据模型

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;

/// 序列化时只带 bakery_id，不嵌套所属面包店
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// POST /baked_goods 表单，字段先按字符串收下再校验
#[derive(Debug, Default, Deserialize)]
pub struct CreateBakedGoodForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub bakery_id: Option<String>,
}

/// 校验通过的新商品
#[derive(Debug, Clone, PartialEq)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}

impl CreateBakedGoodForm {
    pub fn validate(self) -> Result<NewBakedGood, CoreError> {
        let name = required("name", self.name)?;

        let price = required("price", self.price)?;
        let price = price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| invalid("price", &price, "a number"))?;

        let bakery_id = required("bakery_id", self.bakery_id)?;
        let bakery_id = bakery_id
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid("bakery_id", &bakery_id, "an integer"))?;

        Ok(NewBakedGood {
            name,
            price,
            bakery_id,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, CoreError> {
    value.ok_or_else(|| CoreError::BadRequest(format!("missing required field: {field}")))
}

fn invalid(field: &str, value: &str, expected: &str) -> CoreError {
    CoreError::BadRequest(format!("invalid {field} {value:?}: expected {expected}"))
}
