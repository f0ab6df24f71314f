//! 烘焙商品查询与写入

use sqlx::SqlitePool;

use super::model::{BakedGood, NewBakedGood};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct BakedGoodService {
    pool: SqlitePool,
}

impl BakedGoodService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<BakedGood>, CoreError> {
        let goods = sqlx::query_as::<_, BakedGood>(
            "SELECT id, name, price, bakery_id, created_at, updated_at FROM baked_goods ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(goods)
    }

    pub async fn find(&self, id: i64) -> Result<Option<BakedGood>, CoreError> {
        let good = sqlx::query_as::<_, BakedGood>(
            "SELECT id, name, price, bakery_id, created_at, updated_at FROM baked_goods WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(good)
    }

    /// bakery_id 必须指向已存在的面包店，否则返回 BadRequest
    pub async fn create(&self, new: NewBakedGood) -> Result<BakedGood, CoreError> {
        let mut tx = self.pool.begin().await?;

        let bakery: Option<(i64,)> = sqlx::query_as("SELECT id FROM bakeries WHERE id = ?")
            .bind(new.bakery_id)
            .fetch_optional(&mut *tx)
            .await?;

        if bakery.is_none() {
            return Err(CoreError::BadRequest(format!(
                "bakery_id {} does not reference an existing bakery",
                new.bakery_id
            )));
        }

        let good = sqlx::query_as::<_, BakedGood>(
            r#"
            INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?)
            RETURNING id, name, price, bakery_id, created_at, updated_at
            "#,
        )
        .bind(&new.name)
        .bind(new.price)
        .bind(new.bakery_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(good)
    }

    /// 返回是否真的删掉了一行
    pub async fn delete(&self, id: i64) -> Result<bool, CoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM baked_goods WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// 价格从高到低，同价按插入顺序
    pub async fn list_by_price(&self) -> Result<Vec<BakedGood>, CoreError> {
        let goods = sqlx::query_as::<_, BakedGood>(
            r#"
            SELECT id, name, price, bakery_id, created_at, updated_at FROM baked_goods
            ORDER BY price DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(goods)
    }

    pub async fn most_expensive(&self) -> Result<Option<BakedGood>, CoreError> {
        let good = sqlx::query_as::<_, BakedGood>(
            r#"
            SELECT id, name, price, bakery_id, created_at, updated_at FROM baked_goods
            ORDER BY price DESC, id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(good)
    }
}
