//! 面包店：只读列表、按 id 查询、改名

pub mod handler;
pub mod model;
pub mod service;
