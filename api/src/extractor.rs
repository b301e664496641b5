use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use registry::AppRegistry;
use shared::error::AppError;

// cron エンドポイントの呼び出し元。
// CRON_SECRET が設定されている場合のみ Bearer トークンを検証する
pub struct CronCaller;

#[async_trait]
impl FromRequestParts<AppRegistry> for CronCaller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let cron = registry.cron_config();
        if cron.secret.is_none() {
            return Ok(Self);
        }

        let header = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .ok();
        let token = header.as_ref().map(|TypedHeader(auth)| auth.token());

        if cron.authorizes(token) {
            Ok(Self)
        } else {
            tracing::warn!("rejected cron call with missing or invalid bearer token");
            Err(AppError::UnauthenticatedError)
        }
    }
}
