//! Page request arithmetic and the page result envelope.

use serde::{Deserialize, Serialize};

use crate::error::{DeviceHubError, ValidationError};

/// Page number used when the caller does not provide one.
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Page size used when the caller does not provide one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A validated, 1-based page window.
///
/// Construction rejects `page_number < 1` and `page_size < 1` instead of
/// clamping, and rejects windows whose offset does not fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: i64,
    page_size: i64,
    offset: i64,
}

impl PageRequest {
    /// Validate the window and precompute its offset.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Validation`] when either value is below 1 or
    /// `(page_number - 1) * page_size` overflows.
    pub fn new(page_number: i64, page_size: i64) -> Result<Self, DeviceHubError> {
        if page_number < 1 {
            return Err(ValidationError::PageNumberOutOfRange(page_number).into());
        }
        if page_size < 1 {
            return Err(ValidationError::PageSizeOutOfRange(page_size).into());
        }
        let offset = (page_number - 1).checked_mul(page_size).ok_or(
            ValidationError::OffsetOverflow {
                page_number,
                page_size,
            },
        )?;
        Ok(Self {
            page_number,
            page_size,
            offset,
        })
    }

    /// Build a request from optional query values, filling in the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`PageRequest::new`].
    pub fn from_optional(
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Self, DeviceHubError> {
        Self::new(
            page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    #[must_use]
    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    /// Maximum number of rows in the window (`LIMIT`).
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Number of rows skipped before the window (`OFFSET`).
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// One window of an id-ordered result set plus the size of the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    /// Convert every item while keeping order and `total_count`.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compute_offset_from_page_number_and_size() {
        let request = PageRequest::new(3, 10).unwrap();
        assert_eq!(request.offset(), 20);
        assert_eq!(request.limit(), 10);
    }

    #[test]
    fn should_use_defaults_when_values_absent() {
        let request = PageRequest::from_optional(None, None).unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page_number(), 1);
        assert_eq!(request.limit(), 10);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn should_keep_explicit_values_over_defaults() {
        let request = PageRequest::from_optional(Some(2), None).unwrap();
        assert_eq!(request.offset(), 10);
    }

    #[test]
    fn should_reject_zero_page_number() {
        let result = PageRequest::new(0, 10);
        assert!(matches!(
            result,
            Err(DeviceHubError::Validation(
                ValidationError::PageNumberOutOfRange(0)
            ))
        ));
    }

    #[test]
    fn should_reject_negative_page_number() {
        assert!(PageRequest::new(-4, 10).is_err());
    }

    #[test]
    fn should_reject_zero_page_size() {
        let result = PageRequest::new(1, 0);
        assert!(matches!(
            result,
            Err(DeviceHubError::Validation(
                ValidationError::PageSizeOutOfRange(0)
            ))
        ));
    }

    #[test]
    fn should_accept_smallest_valid_window() {
        let request = PageRequest::new(1, 1).unwrap();
        assert_eq!(request.offset(), 0);
        assert_eq!(request.limit(), 1);
    }

    #[test]
    fn should_reject_window_whose_offset_overflows() {
        let result = PageRequest::new(i64::MAX, 2);
        assert!(matches!(
            result,
            Err(DeviceHubError::Validation(
                ValidationError::OffsetOverflow { .. }
            ))
        ));
    }

    #[test]
    fn should_preserve_total_count_when_mapping_items() {
        let page = Page::new(vec![1, 2, 3], 30).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20, 30]);
        assert_eq!(page.total_count, 30);
    }
}
