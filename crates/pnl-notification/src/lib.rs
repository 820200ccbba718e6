//! 웹훅 알림 전송.
//!
//! 렌더링된 차트 이미지를 설정된 웹훅 URL로 multipart 업로드합니다.
//! URL이 설정되지 않은 경우 전송은 no-op입니다.

pub mod types;
pub mod webhook;

pub use types::{NotifyError, NotifyResult};
pub use webhook::{WebhookConfig, WebhookSender};
