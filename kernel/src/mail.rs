use async_trait::async_trait;
use derive_new::new;
use shared::error::AppResult;

#[derive(Debug, Clone, new)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// 送信できた場合はトランスポート側のメッセージ ID を返す
    async fn send(&self, email: Email) -> AppResult<Option<String>>;
}
