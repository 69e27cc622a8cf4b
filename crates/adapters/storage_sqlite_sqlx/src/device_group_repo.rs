//! `SQLite` implementation of [`DeviceGroupRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devicehub_app::ports::DeviceGroupRepository;
use devicehub_domain::device_group::{DeviceGroup, NewDeviceGroup};
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::{DeviceGroupId, UserId};
use devicehub_domain::page::{Page, PageRequest};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`DeviceGroup`].
struct Wrapper(DeviceGroup);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let user_id: i64 = row.try_get("user_id")?;
        let name: String = row.try_get("name")?;
        let city: String = row.try_get("city")?;
        let weather_widget_id: Option<String> = row.try_get("weather_widget_id")?;

        Ok(Self(DeviceGroup {
            id: DeviceGroupId::new(id),
            owner_id: UserId::new(user_id),
            name,
            city,
            weather_widget_id,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO device_groups (user_id, name, city, weather_widget_id) VALUES (?, ?, ?, ?)";
const SELECT_PAGE: &str = r"
    SELECT id, user_id, name, city, weather_widget_id
    FROM device_groups
    ORDER BY id ASC
    LIMIT ? OFFSET ?
";
const COUNT_ALL: &str = "SELECT COUNT(*) FROM device_groups";

/// Convert a `COUNT(*)` result, which `SQLite` reports as a signed integer.
pub(crate) fn count_to_u64(count: i64) -> Result<u64, sqlx::Error> {
    u64::try_from(count).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// `SQLite`-backed device group repository.
pub struct SqliteDeviceGroupRepository {
    pool: SqlitePool,
}

impl SqliteDeviceGroupRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceGroupRepository for SqliteDeviceGroupRepository {
    async fn create(
        &self,
        owner: UserId,
        group: NewDeviceGroup,
    ) -> Result<DeviceGroup, DeviceHubError> {
        let result = sqlx::query(INSERT)
            .bind(owner.get())
            .bind(&group.name)
            .bind(&group.city)
            .bind(&group.weather_widget_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let id = DeviceGroupId::new(result.last_insert_rowid());
        Ok(group.into_stored(id, owner))
    }

    async fn list_page(&self, page: PageRequest) -> Result<Page<DeviceGroup>, DeviceHubError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_PAGE)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        let total: i64 = sqlx::query_scalar(COUNT_ALL)
            .fetch_one(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        let total = count_to_u64(total).map_err(StorageError::from)?;
        Ok(Page::new(rows.into_iter().map(|w| w.0).collect(), total))
    }
}
