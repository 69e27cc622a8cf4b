//! Pagination query parameters.

use serde::Deserialize;

use devicehub_domain::error::DeviceHubError;
use devicehub_domain::page::PageRequest;

/// `?pageNumber=&pageSize=`: both optional, defaults applied by [`PageRequest`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl TryFrom<PageQuery> for PageRequest {
    type Error = DeviceHubError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        Self::from_optional(query.page_number, query.page_size)
    }
}
