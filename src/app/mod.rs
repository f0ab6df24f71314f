//! 应用层：路由与共享状态

pub mod baked_good;
pub mod bakery;

use axum::{middleware, response::Html, routing::get, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::core::{
    error::{fallback, method_not_allowed},
    middleware::request_logging_middleware,
};
use baked_good::{handler as goods, service::BakedGoodService};
use bakery::{handler as bakeries, service::BakeryService};

#[derive(Clone)]
pub struct AppState {
    pub bakery_service: BakeryService,
    pub baked_good_service: BakedGoodService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            bakery_service: BakeryService::new(pool.clone()),
            baked_good_service: BakedGoodService::new(pool),
        }
    }
}

pub async fn home() -> Html<&'static str> {
    Html("<h1>Bakery GET-POST-PATCH-DELETE API</h1>")
}

/// 创建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home).fallback(method_not_allowed))
        .route(
            "/bakeries",
            get(bakeries::list_bakeries).fallback(method_not_allowed),
        )
        .route(
            "/bakeries/:id",
            get(bakeries::get_bakery)
                .patch(bakeries::patch_bakery)
                .fallback(method_not_allowed),
        )
        .route(
            "/baked_goods",
            get(goods::list_baked_goods)
                .post(goods::create_baked_good)
                .fallback(method_not_allowed),
        )
        .route(
            "/baked_goods/by_price",
            get(goods::baked_goods_by_price).fallback(method_not_allowed),
        )
        .route(
            "/baked_goods/most_expensive",
            get(goods::most_expensive_baked_good).fallback(method_not_allowed),
        )
        .route(
            "/baked_goods/:id",
            get(goods::get_baked_good)
                .delete(goods::delete_baked_good)
                .fallback(method_not_allowed),
        )
        .fallback(fallback)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
