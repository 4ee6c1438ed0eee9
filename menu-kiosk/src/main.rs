use menu_kiosk::catalog::spawn_catalog_fetch;
use menu_kiosk::{AppState, CartStorage, CartStore, Config, init_file_logger, tui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 与配置
    dotenv::dotenv().ok();
    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    // 2. 日志 (只写文件，终端留给界面)
    let _guard = init_file_logger(&config.log_level, config.log_json, config.log_dir())?;
    tracing::info!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        "🍜 Menu kiosk starting..."
    );

    // 3. 打开本地存储，读取上次的购物车
    let storage = CartStorage::open(config.storage_path())?;
    let cart = CartStore::open(storage);
    tracing::info!(entries = cart.len(), "Cart restored from local storage");

    // 4. 后台拉取菜单 (只拉一次)
    let client = config.client_config().build_http_client()?;
    let catalog_rx = spawn_catalog_fetch(client);

    // 5. 进入终端界面
    let mut state = AppState::new(cart);
    let res = tokio::task::block_in_place(|| tui::run(&mut state, catalog_rx));

    if let Err(e) = &res {
        tracing::error!(error = %e, "Terminal UI error");
    }
    tracing::info!("Menu kiosk stopped");

    Ok(res?)
}
