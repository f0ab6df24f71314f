//! 烘焙商品处理器

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
    Form,
};
use tracing::info;

use super::model::{BakedGood, CreateBakedGoodForm};
use crate::app::AppState;
use crate::core::{
    error::CoreError,
    extract::{form_rejection, path_id},
    response::MessageResponse,
};

pub async fn list_baked_goods(
    State(state): State<AppState>,
) -> Result<Json<Vec<BakedGood>>, CoreError> {
    let goods = state.baked_good_service.list().await?;
    Ok(Json(goods))
}

pub async fn create_baked_good(
    State(state): State<AppState>,
    form: Result<Form<CreateBakedGoodForm>, FormRejection>,
) -> Result<(StatusCode, Json<BakedGood>), CoreError> {
    let Form(form) = form.map_err(form_rejection)?;
    let new = form.validate()?;

    let good = state.baked_good_service.create(new).await?;
    info!("Created baked good: {} ({})", good.name, good.id);

    Ok((StatusCode::CREATED, Json(good)))
}

pub async fn get_baked_good(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<BakedGood>, CoreError> {
    let id = path_id(path)?;

    state
        .baked_good_service
        .find(id)
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::not_found("BakedGood", id))
}

pub async fn delete_baked_good(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, CoreError> {
    let id = path_id(path)?;

    if !state.baked_good_service.delete(id).await? {
        return Err(CoreError::not_found("BakedGood", id));
    }
    info!("Deleted baked good: {}", id);

    Ok(Json(MessageResponse::new(
        "The record was successfully deleted",
    )))
}

pub async fn baked_goods_by_price(
    State(state): State<AppState>,
) -> Result<Json<Vec<BakedGood>>, CoreError> {
    let goods = state.baked_good_service.list_by_price().await?;
    Ok(Json(goods))
}

pub async fn most_expensive_baked_good(
    State(state): State<AppState>,
) -> Result<Json<BakedGood>, CoreError> {
    state
        .baked_good_service
        .most_expensive()
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::NotFound("There are no baked goods".to_string()))
}
