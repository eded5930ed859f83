//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源。
//! 对外边界（`service::run_with_output`）不区分分支，统一打印 `Error: <message>`；
//! 分支仅用于日志中的阶段标注与测试断言。

/// 图标生成统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源图片不存在：{0}")]
    NotFound(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("写入错误：{0}")]
    Write(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("配置错误：{0}")]
    Config(String),
}

impl IconError {
    /// 出错阶段标识，供日志使用。
    pub fn stage(&self) -> &'static str {
        match self {
            Self::NotFound(_) | Self::FileSystem(_) => "load",
            Self::InvalidFormat(_) | Self::Decode(_) | Self::ResourceLimit(_) => "decode",
            Self::Resize(_) => "resize",
            Self::Write(_) => "write",
            Self::Config(_) => "config",
        }
    }
}

impl From<IconError> for String {
    fn from(error: IconError) -> Self {
        error.to_string()
    }
}
