//! Device group: a named, city-bound collection of devices owned by a user.

use serde::{Deserialize, Serialize};

use crate::error::{DeviceHubError, ValidationError};
use crate::id::{DeviceGroupId, UserId};

/// A persisted device group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceGroup {
    pub id: DeviceGroupId,
    pub owner_id: UserId,
    pub name: String,
    pub city: String,
    pub weather_widget_id: Option<String>,
}

/// A device group that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeviceGroup {
    pub name: String,
    pub city: String,
    pub weather_widget_id: Option<String>,
}

impl NewDeviceGroup {
    /// Create a builder for constructing a [`NewDeviceGroup`].
    #[must_use]
    pub fn builder() -> NewDeviceGroupBuilder {
        NewDeviceGroupBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Validation`] when `name` or `city` is blank.
    pub fn validate(&self) -> Result<(), DeviceHubError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.city.trim().is_empty() {
            return Err(ValidationError::EmptyCity.into());
        }
        Ok(())
    }

    /// Attach the storage-assigned id and owner.
    #[must_use]
    pub fn into_stored(self, id: DeviceGroupId, owner_id: UserId) -> DeviceGroup {
        DeviceGroup {
            id,
            owner_id,
            name: self.name,
            city: self.city,
            weather_widget_id: self.weather_widget_id,
        }
    }
}

/// Step-by-step builder for [`NewDeviceGroup`].
#[derive(Debug, Default)]
pub struct NewDeviceGroupBuilder {
    name: Option<String>,
    city: Option<String>,
    weather_widget_id: Option<String>,
}

impl NewDeviceGroupBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Blank widget ids are treated as absent.
    #[must_use]
    pub fn weather_widget_id(mut self, weather_widget_id: impl Into<String>) -> Self {
        let value = weather_widget_id.into();
        self.weather_widget_id = (!value.trim().is_empty()).then_some(value);
        self
    }

    /// Consume the builder, validate, and return a [`NewDeviceGroup`].
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Validation`] if `name` or `city` is missing or blank.
    pub fn build(self) -> Result<NewDeviceGroup, DeviceHubError> {
        let group = NewDeviceGroup {
            name: self.name.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            weather_widget_id: self.weather_widget_id,
        };
        group.validate()?;
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_group_when_name_and_city_provided() {
        let group = NewDeviceGroup::builder()
            .name("Rooftop")
            .city("Berlin")
            .build()
            .unwrap();
        assert_eq!(group.name, "Rooftop");
        assert_eq!(group.city, "Berlin");
        assert!(group.weather_widget_id.is_none());
    }

    #[test]
    fn should_return_validation_error_when_name_missing() {
        let result = NewDeviceGroup::builder().city("Berlin").build();
        assert!(matches!(
            result,
            Err(DeviceHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_city_is_blank() {
        let result = NewDeviceGroup::builder().name("Rooftop").city("   ").build();
        assert!(matches!(
            result,
            Err(DeviceHubError::Validation(ValidationError::EmptyCity))
        ));
    }

    #[test]
    fn should_drop_blank_weather_widget_id() {
        let group = NewDeviceGroup::builder()
            .name("Rooftop")
            .city("Berlin")
            .weather_widget_id("")
            .build()
            .unwrap();
        assert!(group.weather_widget_id.is_none());
    }

    #[test]
    fn should_attach_id_and_owner_when_stored() {
        let group = NewDeviceGroup::builder()
            .name("Rooftop")
            .city("Berlin")
            .weather_widget_id("ww-1")
            .build()
            .unwrap()
            .into_stored(DeviceGroupId::new(3), UserId::new(1));
        assert_eq!(group.id, DeviceGroupId::new(3));
        assert_eq!(group.owner_id, UserId::new(1));
        assert_eq!(group.weather_widget_id.as_deref(), Some("ww-1"));
    }
}
