use crate::{
    extractor::CronCaller,
    model::cron::{InvoiceRunResponse, ServiceCycleResponse},
};
use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn run_service_cycles(
    _caller: CronCaller,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ServiceCycleResponse>> {
    let now = registry.clock().now();
    registry
        .service_cycle_scheduler()
        .run(now)
        .await
        .map(|report| ServiceCycleResponse::new(now, report))
        .map(Json)
}

pub async fn run_monthly_invoices(
    _caller: CronCaller,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<InvoiceRunResponse>> {
    let now = registry.clock().now();
    registry
        .invoice_scheduler()
        .run(now)
        .await
        .map(InvoiceRunResponse::from)
        .map(Json)
}
