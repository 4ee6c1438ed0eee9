//! 工具模块
//!
//! - 日志初始化与清理

pub mod logger;

pub use logger::{cleanup_old_logs, init_file_logger};
