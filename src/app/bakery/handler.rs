//! 面包店处理器

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::Json,
    Form,
};
use tracing::info;

use super::model::{Bakery, UpdateBakeryForm};
use crate::app::AppState;
use crate::core::{
    error::CoreError,
    extract::{form_rejection, path_id},
};

pub async fn list_bakeries(State(state): State<AppState>) -> Result<Json<Vec<Bakery>>, CoreError> {
    let bakeries = state.bakery_service.list().await?;
    Ok(Json(bakeries))
}

pub async fn get_bakery(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Bakery>, CoreError> {
    let id = path_id(path)?;

    state
        .bakery_service
        .find(id)
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::not_found("Bakery", id))
}

pub async fn patch_bakery(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<UpdateBakeryForm>, FormRejection>,
) -> Result<Json<Bakery>, CoreError> {
    let id = path_id(path)?;

    // 没有表单体时视为不修改任何字段
    let form = match form {
        Ok(Form(form)) => form,
        Err(FormRejection::InvalidFormContentType(_)) => UpdateBakeryForm::default(),
        Err(rejection) => return Err(form_rejection(rejection)),
    };
    let renamed = form.name.is_some();

    let bakery = state
        .bakery_service
        .update_name(id, form.name)
        .await?
        .ok_or_else(|| CoreError::not_found("Bakery", id))?;

    if renamed {
        info!("Renamed bakery {} to {}", bakery.id, bakery.name);
    }

    Ok(Json(bakery))
}
