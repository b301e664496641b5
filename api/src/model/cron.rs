use chrono::{DateTime, Utc};
use kernel::scheduler::{InvoiceReport, ServiceCycleReport, SweepError};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepErrorResponse {
    pub id: String,
    pub error: String,
}

impl From<SweepError> for SweepErrorResponse {
    fn from(value: SweepError) -> Self {
        let SweepError { id, error } = value;
        Self { id, error }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCycleResponse {
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    pub report: ServiceCycleReportResponse,
}

impl ServiceCycleResponse {
    pub fn new(timestamp: DateTime<Utc>, report: ServiceCycleReport) -> Self {
        Self {
            success: true,
            timestamp,
            report: report.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCycleReportResponse {
    pub cleaning_logs_created: usize,
    pub laundry_logs_created: usize,
    pub rooms_processed: usize,
    pub hostels_processed: usize,
    pub errors: Vec<SweepErrorResponse>,
}

impl From<ServiceCycleReport> for ServiceCycleReportResponse {
    fn from(value: ServiceCycleReport) -> Self {
        let ServiceCycleReport {
            cleaning_logs_created,
            laundry_logs_created,
            rooms_processed,
            hostels_processed,
            errors,
        } = value;
        Self {
            cleaning_logs_created,
            laundry_logs_created,
            rooms_processed,
            hostels_processed,
            errors: errors.into_iter().map(SweepErrorResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRunResponse {
    pub processed: usize,
    pub created: usize,
    pub emails_sent: usize,
    pub errors: Vec<SweepErrorResponse>,
}

impl From<InvoiceReport> for InvoiceRunResponse {
    fn from(value: InvoiceReport) -> Self {
        let InvoiceReport {
            processed,
            created,
            emails_sent,
            errors,
        } = value;
        Self {
            processed,
            created,
            emails_sent,
            errors: errors.into_iter().map(SweepErrorResponse::from).collect(),
        }
    }
}
