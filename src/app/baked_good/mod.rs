//! 烘焙商品：增、删、查以及按价格排序

pub mod handler;
pub mod model;
pub mod service;
