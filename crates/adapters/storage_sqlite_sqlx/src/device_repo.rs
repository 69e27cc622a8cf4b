//! `SQLite` implementation of [`DeviceRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devicehub_app::ports::DeviceRepository;
use devicehub_domain::device::Device;
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::{DeviceGroupId, DeviceId};
use devicehub_domain::page::{Page, PageRequest};

use crate::device_group_repo::count_to_u64;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let serial_number: String = row.try_get("serial_number")?;
        let device_group_id: i64 = row.try_get("device_group_id")?;

        Ok(Self(Device {
            id: DeviceId::new(id),
            serial_number,
            device_group_id: DeviceGroupId::new(device_group_id),
        }))
    }
}

const GROUP_EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM device_groups WHERE id = ?)";
const SELECT_PAGE_BY_GROUP: &str = r"
    SELECT id, serial_number, device_group_id
    FROM devices
    WHERE device_group_id = ?
    ORDER BY id ASC
    LIMIT ? OFFSET ?
";
const COUNT_BY_GROUP: &str = "SELECT COUNT(*) FROM devices WHERE device_group_id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    async fn list_page_by_group(
        &self,
        group_id: DeviceGroupId,
        page: PageRequest,
    ) -> Result<Option<Page<Device>>, DeviceHubError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let exists: i64 = sqlx::query_scalar(GROUP_EXISTS)
            .bind(group_id.get())
            .fetch_one(&mut *tx)
            .await
            .map_err(StorageError::from)?;
        if exists == 0 {
            // dropping the transaction rolls it back
            return Ok(None);
        }

        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_PAGE_BY_GROUP)
            .bind(group_id.get())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        let total: i64 = sqlx::query_scalar(COUNT_BY_GROUP)
            .bind(group_id.get())
            .fetch_one(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        let total = count_to_u64(total).map_err(StorageError::from)?;
        Ok(Some(Page::new(
            rows.into_iter().map(|w| w.0).collect(),
            total,
        )))
    }
}
