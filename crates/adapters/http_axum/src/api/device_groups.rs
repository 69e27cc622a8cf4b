//! JSON handlers for device groups.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use devicehub_app::ports::{DeviceGroupRepository, DeviceRepository, HealthProbe};
use devicehub_domain::device_group::NewDeviceGroup;
use devicehub_domain::page::PageRequest;

use crate::dto::device_group::{CreateDeviceGroupRequest, DeviceGroupDto, DeviceGroupPageDto};
use crate::dto::page::PageQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DeviceGroupPageDto>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<DeviceGroupDto>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => {
                let location = format!("/device-groups/{}", json.0.id);
                (StatusCode::CREATED, [(header::LOCATION, location)], json).into_response()
            }
        }
    }
}

/// `GET /device-groups?pageNumber=&pageSize=`
///
/// # Errors
///
/// 400 for malformed or out-of-range pagination, 5xx for storage failures.
pub async fn list<GR, DR, HP>(
    State(state): State<AppState<GR, DR, HP>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    GR: DeviceGroupRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    HP: HealthProbe + Send + Sync + 'static,
{
    let Query(query) = query?;
    let page = PageRequest::try_from(query)?;
    let groups = state.device_group_service.list_device_groups(page).await?;
    Ok(ListResponse::Ok(Json(groups.into())))
}

/// `POST /device-groups`
///
/// # Errors
///
/// 400 for a malformed body or a missing/blank `name` or `city`, 5xx for
/// storage failures.
pub async fn create<GR, DR, HP>(
    State(state): State<AppState<GR, DR, HP>>,
    body: Result<Json<CreateDeviceGroupRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    GR: DeviceGroupRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    HP: HealthProbe + Send + Sync + 'static,
{
    let Json(req) = body?;
    let group = NewDeviceGroup::try_from(req)?;
    let created = state
        .device_group_service
        .create_device_group(state.default_owner, group)
        .await?;
    Ok(CreateResponse::Created(Json(created.into())))
}
