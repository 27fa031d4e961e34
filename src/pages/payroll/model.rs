use chrono::NaiveDate;

use super::*;

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct CreatePeriod {
    pub(super) start_date: NaiveDate,
    pub(super) end_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ListPeriods {
    pub(super) page: Option<u64>,
    pub(super) size: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct PageMetadata {
    pub(super) page: u64,
    pub(super) page_size: u64,
    pub(super) total_item: u64,
    pub(super) total_page: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct PeriodPage {
    pub(super) data: Vec<payroll_period::Model>,
    pub(super) paging: PageMetadata,
}
