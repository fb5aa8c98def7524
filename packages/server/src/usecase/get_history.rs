//! UseCase: 履歴取得処理

use crate::{actor::HistoryHandle, domain::ChatMessage};

use super::error::QueryError;

/// 履歴取得のユースケース
pub struct GetHistoryUseCase {
    history: HistoryHandle,
}

impl GetHistoryUseCase {
    pub fn new(history: HistoryHandle) -> Self {
        Self { history }
    }

    /// 履歴全体を古い順に返す
    pub async fn execute(&self) -> Result<Vec<ChatMessage>, QueryError> {
        Ok(self.history.snapshot().await?)
    }
}
