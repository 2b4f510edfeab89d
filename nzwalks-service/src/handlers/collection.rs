//! Generic collection handlers
//!
//! One set of axum handlers serves every [`Resource`]. Writes run the
//! validate, map, persist, respond pipeline; an invalid request never reaches
//! the store and an unknown id never produces a success response.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use super::error::{ApiError, ApiOperation};
use super::resource::Resource;
use crate::repository::{Repository, Store};
use crate::responses::Created;
use crate::state::AppState;
use crate::validation::{validate, Validate};

/// Validate an optional request body, handing it back once it is accepted
async fn accept<M, V, S>(
    input: Option<V>,
    store: &S,
    operation: ApiOperation,
) -> Result<V, ApiError>
where
    M: Resource,
    V: Validate + Sync,
    S: Store,
{
    let outcome = validate(input.as_ref(), store)
        .await
        .map_err(|e| ApiError::from(e).with_operation(operation))?;

    match (outcome, input) {
        (Ok(()), Some(input)) => Ok(input),
        (Ok(()), None) => Err(ApiError::internal("request body missing after validation")
            .with_operation(operation)),
        (Err(errors), _) => {
            tracing::warn!(
                entity = M::NAME,
                %operation,
                error_count = errors.len(),
                "request rejected by validation"
            );
            Err(ApiError::validation_failed(operation, M::NAME, errors))
        }
    }
}

/// `GET /{collection}`
pub async fn list<S, M>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<M::Response>>, ApiError>
where
    S: Store + Repository<M>,
    M: Resource,
{
    let entities = <S as Repository<M>>::find_all(state.store()).await?;
    tracing::debug!(entity = M::NAME, count = entities.len(), "listed");

    Ok(Json(entities.into_iter().map(M::Response::from).collect()))
}

/// `GET /{collection}/{id}`
pub async fn get<S, M>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<M::Response>, ApiError>
where
    S: Store + Repository<M>,
    M: Resource,
{
    let entity = <S as Repository<M>>::find_by_id(state.store(), id)
        .await?
        .ok_or_else(|| ApiError::not_found(ApiOperation::Get, M::NAME, id))?;
    tracing::debug!(entity = M::NAME, %id, "fetched");

    Ok(Json(entity.into()))
}

/// `POST /{collection}`
///
/// A request without a JSON body, or with a `null` one, is reported as a
/// validation failure on the `request` field.
pub async fn create<S, M>(
    State(state): State<AppState<S>>,
    body: Option<Json<Option<M::AddRequest>>>,
) -> Result<Created<M::Response>, ApiError>
where
    S: Store + Repository<M>,
    M: Resource,
{
    let request = accept::<M, _, _>(
        body.and_then(|Json(request)| request),
        state.store(),
        ApiOperation::Create,
    )
    .await?;

    let created = <S as Repository<M>>::create(state.store(), request.into()).await?;
    tracing::info!(entity = M::NAME, id = %created.id, "created");

    let location = M::location(created.id);
    Ok(Created::new(M::Response::from(created)).with_location(location))
}

/// `PUT /{collection}/{id}`
pub async fn update<S, M>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
    body: Option<Json<Option<M::UpdateRequest>>>,
) -> Result<Json<M::Response>, ApiError>
where
    S: Store + Repository<M>,
    M: Resource,
{
    let request = accept::<M, _, _>(
        body.and_then(|Json(request)| request),
        state.store(),
        ApiOperation::Update,
    )
    .await?;

    let updated = <S as Repository<M>>::update(state.store(), id, request.into())
        .await?
        .ok_or_else(|| ApiError::not_found(ApiOperation::Update, M::NAME, id))?;
    tracing::info!(entity = M::NAME, %id, "updated");

    Ok(Json(updated.into()))
}

/// `DELETE /{collection}/{id}`
///
/// Echoes the entity as it was just before removal.
pub async fn delete<S, M>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<M::Response>, ApiError>
where
    S: Store + Repository<M>,
    M: Resource,
{
    let deleted = <S as Repository<M>>::delete(state.store(), id)
        .await?
        .ok_or_else(|| ApiError::not_found(ApiOperation::Delete, M::NAME, id))?;
    tracing::info!(entity = M::NAME, %id, "deleted");

    Ok(Json(deleted.into()))
}
