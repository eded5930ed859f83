//! # 图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs ── env_logger 初始化 ── run_default()           │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ stdout: "Saved <path>" / "Error: <message>"
//! ┌───────┴──────────────────────────────────────────────────┐
//! │  icon_resizer                                            │
//! │   ├─ service   错误边界 + 汇报                           │
//! │   ├─ handler   编排 + 阶段耗时                           │
//! │   ├─ loader    读取 + 签名/体积校验                      │
//! │   ├─ pipeline  解码 + Lanczos3 正方形缩放                │
//! │   └─ writer    PNG 写出                                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! 源图固定为单张，输出固定为 `public/icons/icon{16,48,128}.png`。
//! 输出目录必须事先存在。

pub mod icon_resizer;
