use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::request::{register_request, show_request_list};

pub fn build_request_routers() -> Router<AppRegistry> {
    let requests_routers = Router::new().route("/", get(show_request_list).post(register_request));

    Router::new().nest("/requests", requests_routers)
}
