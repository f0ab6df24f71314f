//! 数据库基础设施

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error,
};
use std::{str::FromStr, time::Duration};
use tracing::info;

use super::config::DatabaseConfig;

pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(8))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// 内存数据库，只保留一个永不回收的连接，否则每个连接都会看到一个空库
    pub async fn in_memory() -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }
}

/// 建表（幂等）。结构变更交给外部迁移工具。
pub async fn create_tables(pool: &SqlitePool) -> Result<(), Error> {
    info!("Creating database tables...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bakeries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS baked_goods (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            bakery_id INTEGER NOT NULL REFERENCES bakeries(id),
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    // updated_at 由存储层刷新，处理器不碰时间戳
    for table in ["bakeries", "baked_goods"] {
        sqlx::query(&format!(
            r#"
            CREATE TRIGGER IF NOT EXISTS {table}_updated_at
                AFTER UPDATE ON {table}
                FOR EACH ROW
                WHEN NEW.updated_at = OLD.updated_at
            BEGIN
                UPDATE {table} SET updated_at = CURRENT_TIMESTAMP WHERE id = NEW.id;
            END
            "#
        ))
        .execute(pool)
        .await?;
    }

    info!("Database tables created successfully");
    Ok(())
}

/// 插入示例数据，库里已有面包店时跳过
pub async fn seed_data(pool: &SqlitePool) -> Result<(), Error> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bakeries")
        .fetch_one(pool)
        .await?;

    if count.0 > 0 {
        info!("Database already contains data, skipping seed");
        return Ok(());
    }

    info!("Seeding database with example data...");

    let bakeries: [(&str, &[(&str, f64)]); 3] = [
        (
            "Delightful donuts",
            &[("Chocolate dipped donut", 2.75), ("Apple-spice filled donut", 3.5)],
        ),
        (
            "Incredible crullers",
            &[("Glazed honey cruller", 3.25), ("Chocolate cruller", 100.0)],
        ),
        ("Pleasing pastries", &[("Raspberry danish", 4.0)]),
    ];

    let mut tx = pool.begin().await?;
    for (bakery, goods) in bakeries {
        let (bakery_id,): (i64,) =
            sqlx::query_as("INSERT INTO bakeries (name) VALUES (?) RETURNING id")
                .bind(bakery)
                .fetch_one(&mut *tx)
                .await?;

        for &(name, price) in goods {
            sqlx::query("INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?)")
                .bind(name)
                .bind(price)
                .bind(bakery_id)
                .execute(&mut *tx)
                .await?;
        }
    }
    tx.commit().await?;

    info!("Database seeded successfully");
    Ok(())
}
