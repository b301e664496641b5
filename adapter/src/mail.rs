use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use kernel::mail::{Email, Mailer};
use reqwest::Client;
use serde::Deserialize;
use shared::{
    config::MailConfig,
    error::{AppError, AppResult},
};
use std::{future::Future, pin::Pin};
use yup_oauth2::{
    authenticator::DefaultAuthenticator, authenticator_delegate::InstalledFlowDelegate,
    InstalledFlowAuthenticator, InstalledFlowReturnMethod,
};

const GMAIL_SEND_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages/send";
const GMAIL_SEND_SCOPE: &str = "https://www.googleapis.com/auth/gmail.send";

/// Gmail API 経由でメールを送信する
pub struct GmailMailer {
    client: Client,
    auth: DefaultAuthenticator,
}

#[derive(Deserialize)]
struct SendResponse {
    id: String,
}

// サーバー内ではブラウザ認可を待てないため、保存済みトークンが使えなければ失敗させる
struct NonInteractiveFlow;

impl InstalledFlowDelegate for NonInteractiveFlow {
    fn present_user_url<'a>(
        &'a self,
        url: &'a str,
        _need_code: bool,
    ) -> Pin<Box<dyn Future<Output = Result<String, String>> + Send + 'a>> {
        Box::pin(async move {
            Err(format!(
                "Gmail token is missing or expired; authorize once at {url}"
            ))
        })
    }
}

impl GmailMailer {
    /// 認証器は起動時に一度だけ作成し、送信ごとにトークンだけを取り出す
    pub async fn connect(config: MailConfig) -> AppResult<Self> {
        let secret = yup_oauth2::read_application_secret(&config.client_secret_path)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Gmail secret: {e}")))?;
        let auth =
            InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::Interactive)
                .persist_tokens_to_disk(config.token_path)
                .flow_delegate(Box::new(NonInteractiveFlow))
                .build()
                .await
                .map_err(|e| AppError::ExternalServiceError(format!("Gmail auth: {e}")))?;
        Ok(Self {
            client: Client::new(),
            auth,
        })
    }

    async fn access_token(&self) -> AppResult<String> {
        let token = self
            .auth
            .token(&[GMAIL_SEND_SCOPE])
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Gmail token: {e}")))?;
        token
            .token()
            .map(str::to_owned)
            .ok_or_else(|| AppError::ExternalServiceError("Gmail token is empty".into()))
    }
}

/// RFC 2822 形式のメッセージを base64url でエンコードする
pub fn encode_message(email: &Email) -> String {
    let message = format!(
        "To: {}\r\nSubject: {}\r\nContent-Type: text/plain; charset=UTF-8\r\n\r\n{}",
        email.to, email.subject, email.body
    );
    general_purpose::URL_SAFE_NO_PAD.encode(message.as_bytes())
}

#[async_trait]
impl Mailer for GmailMailer {
    async fn send(&self, email: Email) -> AppResult<Option<String>> {
        let access_token = self.access_token().await?;

        let res = self
            .client
            .post(GMAIL_SEND_URL)
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "raw": encode_message(&email) }))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Gmail request: {e}")))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Gmail responded {status}: {body}"
            )));
        }

        let sent: SendResponse = res
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Gmail response: {e}")))?;
        tracing::info!(to = %email.to, message_id = %sent.id, "mail sent");
        Ok(Some(sent.id))
    }
}

/// メール送信が設定されていない環境用。内容をログに出すだけ
#[derive(Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: Email) -> AppResult<Option<String>> {
        tracing::info!(to = %email.to, subject = %email.subject, "mail transport not configured; skipping");
        Ok(None)
    }
}
