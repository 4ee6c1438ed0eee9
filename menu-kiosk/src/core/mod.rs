//! 核心模块 - 终端配置
//!
//! - [`Config`] - 点餐终端配置

pub mod config;

pub use config::Config;
