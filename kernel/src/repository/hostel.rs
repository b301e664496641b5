use crate::model::hostel::Hostel;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait HostelRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Hostel>>;
}
