use crate::model::service_log::{RecordService, ServiceLog};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ServiceLogRepository: Send + Sync {
    // ログを PENDING で作成し、部屋の最終実施日時を進める
    async fn record(&self, event: RecordService) -> AppResult<ServiceLog>;
}
