use crate::model::{
    id::RequestId,
    request::{event::CreateRequest, Request, RequestListOptions},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RequestRepository: Send + Sync {
    async fn create(&self, event: CreateRequest) -> AppResult<RequestId>;
    async fn find_all(&self, options: RequestListOptions) -> AppResult<Vec<Request>>;
}
