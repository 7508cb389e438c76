use thiserror::Error;

/// 服务器生命周期错误 (启动、绑定端口、关闭)
///
/// 请求处理中的错误使用 [`crate::utils::AppError`]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器生命周期的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
