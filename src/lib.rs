//! # Bakery API
//!
//! 面包店与烘焙商品的 HTTP CRUD 服务：
//! - 写请求使用 application/x-www-form-urlencoded 表单
//! - 读请求返回 JSON
//! - SQLite 存储，每个写操作一个事务

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
pub use crate::core::error::CoreError;
