//! 核心层：错误处理、中间件、响应结构

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
