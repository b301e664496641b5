use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::cron::{run_monthly_invoices, run_service_cycles};

// 外部の cron から定期的に呼び出される
pub fn build_cron_routers() -> Router<AppRegistry> {
    let cron_routers = Router::new()
        .route("/service-cycles", get(run_service_cycles))
        .route("/monthly-invoices", get(run_monthly_invoices));

    Router::new().nest("/cron", cron_routers)
}
