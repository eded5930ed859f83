//! # 图标生成模块（icon_resizer）
//!
//! ## 设计思路
//!
//! 把“读取源图 → 解码 → 按尺寸缩放 → 写出 PNG → 输出汇报”按职责拆分为子模块：
//!
//! - `service`：对外边界，打印 `Saved`/`Error` 行并吞掉错误
//! - `handler`：编排整条处理流水线
//! - `loader`：源文件加载与签名/体积校验
//! - `pipeline`：解码、像素限制、正方形缩放
//! - `writer`：PNG 编码与写盘
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! service.rs（错误边界 + stdout 汇报）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（读取 + 签名/体积校验）
//!    ├─ pipeline.rs（解码 + 像素限制 + Lanczos3 缩放）
//!    └─ writer.rs（PNG 写出，覆盖已有文件）
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod service;
mod source;
mod writer;

pub use config::{DEFAULT_ICON_SIZES, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_PATH, IconConfig};
pub use error::IconError;
pub use handler::IconResizer;
pub use service::{run, run_default, run_with_output};
