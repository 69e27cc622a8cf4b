//! JSON handlers for devices.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};

use devicehub_app::ports::{DeviceGroupRepository, DeviceRepository, HealthProbe};
use devicehub_domain::id::DeviceGroupId;
use devicehub_domain::page::PageRequest;

use crate::dto::device::DevicePageDto;
use crate::dto::page::PageQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DevicePageDto>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /device-groups/{group_id}/devices?pageNumber=&pageSize=`
///
/// # Errors
///
/// 400 for a non-numeric group id or bad pagination, 404 when the group does
/// not exist, 5xx for storage failures.
pub async fn list<GR, DR, HP>(
    State(state): State<AppState<GR, DR, HP>>,
    group_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    GR: DeviceGroupRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    HP: HealthProbe + Send + Sync + 'static,
{
    let Path(group_id) = group_id?;
    let Query(query) = query?;
    let page = PageRequest::try_from(query)?;
    let devices = state
        .device_service
        .list_devices(DeviceGroupId::new(group_id), page)
        .await?;
    Ok(ListResponse::Ok(Json(devices.into())))
}
