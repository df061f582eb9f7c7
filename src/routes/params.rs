use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::AppointmentStatus;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentSortBy {
    /// Date, then time.
    Date,
    /// Last name, then first name.
    Name,
    Status,
}

/// Query string of the admin appointment list. Pagination fields are inlined
/// because `serde(flatten)` does not play well with query-string numbers.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<AppointmentStatus>,
    /// Exact `YYYY-MM-DD` match.
    pub date: Option<String>,
    /// Case-insensitive search over names, email and phone.
    pub q: Option<String>,
    pub sort_by: Option<AppointmentSortBy>,
    pub sort_order: Option<SortOrder>,
}

impl AppointmentListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}
