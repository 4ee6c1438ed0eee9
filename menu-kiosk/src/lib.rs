//! Menu Kiosk - 店内セルフオーダー端末
//!
//! # 架构概述
//!
//! 本 crate 是点餐终端的主体，提供以下核心功能：
//!
//! - **菜单目录** (`catalog`): 启动时从 CMS 拉取一次菜单，按分类筛选
//! - **订单** (`orders`): 购物车持久化 (redb)、数量暂存、结账对话框状态机
//! - **应用状态** (`app`): 单一 `AppState`，所有变更经由 `AppEvent`
//! - **终端界面** (`tui`): ratatui 渲染与按键映射
//!
//! # 模块结构
//!
//! ```text
//! menu-kiosk/src/
//! ├── core/          # 配置
//! ├── catalog/       # 菜单目录、分类、拉取任务
//! ├── orders/        # 购物车、暂存、结账流程、本地存储
//! ├── app/           # AppState + AppEvent
//! ├── tui/           # 终端界面
//! └── utils/         # 日志
//! ```

pub mod app;
pub mod catalog;
pub mod core;
pub mod orders;
pub mod tui;
pub mod utils;

// Re-export 公共类型
pub use app::{AppError, AppEvent, AppResult, AppState};
pub use catalog::{CatalogOutcome, CatalogSource, CategoryFilter, MenuCatalog};
pub use core::Config;
pub use orders::{CartStorage, CartStore, OrderFlow, SelectionStaging};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_file_logger};
