use menu_client::{ClientConfig, DEFAULT_MENU_API_URL};
use std::path::PathBuf;

/// 点餐终端配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (也可写入 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./work_dir | 工作目录 (购物车数据库、日志) |
/// | MENU_API_URL | microCMS menu 端点 | 菜单接口地址 |
/// | MICROCMS_API_KEY | (空) | `X-API-KEY` 请求头 |
/// | MENU_FETCH_LIMIT | (不传) | 菜单接口 `limit` 参数 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | LOG_LEVEL | info | 未设置 RUST_LOG 时的日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/kiosk MICROCMS_API_KEY=xxxx cargo run -p menu-kiosk
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// 菜单接口地址
    pub menu_api_url: String,
    /// 菜单接口密钥
    pub api_key: Option<String>,
    /// 菜单接口 limit 参数
    pub fetch_limit: Option<u32>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            menu_api_url: std::env::var("MENU_API_URL")
                .unwrap_or_else(|_| DEFAULT_MENU_API_URL.into()),
            api_key: std::env::var("MICROCMS_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            fetch_limit: std::env::var("MENU_FETCH_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// 购物车数据库路径
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("kiosk.redb")
    }

    /// 日志目录
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 菜单客户端配置
    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig::new(&self.menu_api_url).with_timeout_ms(self.request_timeout_ms);
        if let Some(key) = &self.api_key {
            client = client.with_api_key(key);
        }
        if let Some(limit) = self.fetch_limit {
            client = client.with_limit(limit);
        }
        client
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
