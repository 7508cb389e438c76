use anyhow::Context;
use catalog_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 和配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 设置环境 (日志)
    setup_environment(&config).context("failed to set up logging")?;

    // 打印横幅
    print_banner();

    tracing::info!(
        port = config.http_port,
        environment = %config.environment,
        "Catalog server starting..."
    );

    // 3. 初始化服务器状态
    let state = ServerState::initialize(&config)
        .await
        .context("failed to initialize server state")?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
