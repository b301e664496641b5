use super::{
    booking::build_booking_routers, cron::build_cron_routers,
    health::build_health_check_routers, request::build_request_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_booking_routers())
        .merge(build_request_routers());
    Router::new()
        .nest("/api/v1", router)
        .merge(build_cron_routers())
}
