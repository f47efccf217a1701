//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::ApiError;
use crate::domain::manga::MangaError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（请求未发出）
    #[error("{0}")]
    ValidationError(String),

    /// API 调用失败
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 面向用户的提示文本
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<MangaError> for ApplicationError {
    fn from(err: MangaError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
