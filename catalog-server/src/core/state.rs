use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::ProductRepository;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段都是廉价克隆 (内部为 Arc)，每个请求拿到的是同一份数据库句柄
/// 和同一个商品仓库。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | products | ProductRepository | 商品仓库 (含 ID 分配锁) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 商品仓库，必须在所有请求间共享以串行化 ID 分配
    pub products: ProductRepository,
}

impl ServerState {
    /// 使用已打开的数据库创建状态
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let products = ProductRepository::new(db.clone());
        Self {
            config,
            db,
            products,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/catalog.db) 及表定义
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_path();
        let db_service = DbService::new(&db_path)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        tracing::info!(path = %db_path.display(), "Database ready");

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 获取商品仓库
    pub fn products(&self) -> &ProductRepository {
        &self.products
    }
}
