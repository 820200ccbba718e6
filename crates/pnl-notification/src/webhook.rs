//! 웹훅 파일 업로드 전송기.

use std::path::Path;

use tracing::{debug, info};

use crate::types::{NotifyError, NotifyResult};

/// 웹훅 전송 설정.
///
/// URL은 호출 측 설정(예: report의 환경 변수)이 결정해서 넘깁니다.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// 업로드 대상 URL
    pub url: String,
}

impl WebhookConfig {
    /// 새 웹훅 설정을 생성합니다.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// 웹훅 파일 업로드 전송기.
pub struct WebhookSender {
    config: WebhookConfig,
    client: reqwest::Client,
}

impl WebhookSender {
    /// 새 전송기를 생성합니다.
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// 파일을 읽어 multipart 업로드로 전송합니다.
    ///
    /// 저장된 아티팩트를 디스크에서 다시 읽어 올립니다. 전송 실패는
    /// 여기서 복구하지 않고 그대로 전파합니다.
    pub async fn send_file(&self, path: &Path) -> NotifyResult<()> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "chart.png".to_string());

        debug!(url = %self.config.url, file = %file_name, size = bytes.len(), "웹훅 업로드 시작");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("image/png")
            .map_err(|e| NotifyError::Network(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.config.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| NotifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Http {
                status: status.as_u16(),
                body,
            });
        }

        info!(url = %self.config.url, "웹훅 업로드 완료");
        Ok(())
    }
}
