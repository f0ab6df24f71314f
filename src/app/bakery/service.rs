//! 面包店查询与更新

use sqlx::SqlitePool;

use super::model::Bakery;
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct BakeryService {
    pool: SqlitePool,
}

impl BakeryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Bakery>, CoreError> {
        let bakeries = sqlx::query_as::<_, Bakery>(
            "SELECT id, name, created_at, updated_at FROM bakeries ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bakeries)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Bakery>, CoreError> {
        let bakery = sqlx::query_as::<_, Bakery>(
            "SELECT id, name, created_at, updated_at FROM bakeries WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bakery)
    }

    /// 没有对外的创建路由，供初始化数据和测试使用
    pub async fn create(&self, name: &str) -> Result<Bakery, CoreError> {
        let mut tx = self.pool.begin().await?;

        let bakery = sqlx::query_as::<_, Bakery>(
            "INSERT INTO bakeries (name) VALUES (?) RETURNING id, name, created_at, updated_at",
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(bakery)
    }

    /// 有新名字就更新，然后返回当前状态；记录不存在返回 None
    pub async fn update_name(
        &self,
        id: i64,
        name: Option<String>,
    ) -> Result<Option<Bakery>, CoreError> {
        let mut tx = self.pool.begin().await?;

        if let Some(name) = name {
            let result = sqlx::query("UPDATE bakeries SET name = ? WHERE id = ?")
                .bind(name)
                .bind(id)
                .execute(&mut *tx)
                .await?;

            if result.rows_affected() == 0 {
                return Ok(None);
            }
        }

        let bakery = sqlx::query_as::<_, Bakery>(
            "SELECT id, name, created_at, updated_at FROM bakeries WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(bakery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::{create_tables, DatabaseManager};

    async fn service() -> BakeryService {
        let pool = DatabaseManager::in_memory().await.unwrap().into_pool();
        create_tables(&pool).await.unwrap();
        BakeryService::new(pool)
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let service = service().await;
        let created = service.create("Rise & Shine").await.unwrap();

        let found = service.find(created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(service.find(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let service = service().await;
        service.create("First").await.unwrap();
        service.create("Second").await.unwrap();

        let names: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_update_name() {
        let service = service().await;
        let created = service.create("Old").await.unwrap();

        let updated = service
            .update_name(created.id, Some("New".to_string()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New");

        let unchanged = service.update_name(created.id, None).await.unwrap().unwrap();
        assert_eq!(unchanged.name, "New");
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at() {
        let service = service().await;
        let created = service.create("Before").await.unwrap();

        // CURRENT_TIMESTAMP 精度为秒
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

        let updated = service
            .update_name(created.id, Some("After".to_string()))
            .await
            .unwrap()
            .unwrap();
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);

        let found = service.find(created.id).await.unwrap().unwrap();
        assert_eq!(found.updated_at, updated.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let service = service().await;
        assert!(service
            .update_name(42, Some("x".to_string()))
            .await
            .unwrap()
            .is_none());
        assert!(service.update_name(42, None).await.unwrap().is_none());
    }
}
