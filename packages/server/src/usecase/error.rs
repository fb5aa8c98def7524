//! UseCase errors.

use thiserror::Error;

use crate::{actor::ActorError, domain::ValueObjectError};

/// メッセージ送信のエラー（検証に失敗したペイロードはコアに渡らない）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("Invalid sender: {0}")]
    InvalidSender(ValueObjectError),

    #[error("Invalid content: {0}")]
    InvalidContent(ValueObjectError),
}

/// 状態取得（問い合わせ）のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Component unavailable: {0}")]
    Unavailable(#[from] ActorError),
}
