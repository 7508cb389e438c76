//! Catalog Server - 电商店铺商品目录服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储, 商品仓库
//! - **HTTP API** (`api`): RESTful 商品 CRUD 接口
//! - **服务** (`services`): HTTP 服务与中间件
//!
//! # 模块结构
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── services/      # HTTP 服务
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志、校验
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use services::build_app;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 创建日志目录并初始化日志 (生产环境输出 JSON)
///
/// `.env` 需在 [`Config::from_env`] 之前加载
pub fn setup_environment(config: &Config) -> std::io::Result<()> {
    if let Some(log_dir) = &config.log_dir {
        std::fs::create_dir_all(log_dir)?;
    }
    init_logger_with_file(
        Some(&config.log_level),
        config.log_dir.as_deref(),
        config.is_production(),
    );
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#
    );
}
