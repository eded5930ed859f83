//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconResizer` 只负责流程编排，处理链路固定为：
//! 1. 加载源文件字节
//! 2. 解码为源图（只解码一次）
//! 3. 按尺寸列表顺序逐个缩放并写出 PNG
//!
//! 任一阶段出错立即返回，后续尺寸不再处理；已写出的文件保留。
//!
//! ## 实现思路
//!
//! - 每写出一个文件即调用 `on_saved` 钩子，调用方可在后续失败前先行汇报。
//! - 记录 `load/decode/resize/write/total` 阶段耗时，便于性能诊断。

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::{IconConfig, IconError};

/// 图标生成器。
pub struct IconResizer {
    config: IconConfig,
}

impl IconResizer {
    /// 根据配置创建生成器，创建时即校验尺寸列表。
    ///
    /// # 示例
    /// ```rust
    /// use icon_resizer::icon_resizer::{IconConfig, IconResizer};
    ///
    /// let resizer = IconResizer::new(IconConfig::default())?;
    /// assert_eq!(resizer.config().sizes, vec![16, 48, 128]);
    /// # Ok::<(), icon_resizer::icon_resizer::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 执行完整流程，返回已写出的文件路径（按尺寸顺序）。
    pub fn process(&self) -> Result<Vec<PathBuf>, IconError> {
        self.process_with_hooks(|_| {})
    }

    /// 执行完整流程，每写出一个文件调用一次 `on_saved`。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use icon_resizer::icon_resizer::{IconConfig, IconResizer};
    ///
    /// let resizer = IconResizer::new(IconConfig::for_paths("logo.jpg", "public/icons", &[16, 48, 128]))?;
    /// resizer.process_with_hooks(|path| println!("Saved {}", path.display()))?;
    /// # Ok::<(), icon_resizer::icon_resizer::IconError>(())
    /// ```
    pub fn process_with_hooks<F>(&self, mut on_saved: F) -> Result<Vec<PathBuf>, IconError>
    where
        F: FnMut(&Path),
    {
        let config = &self.config;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = self.load_from_file(&config.source_path, config)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let source = self.decode_source(raw, config)?;
        let decode_elapsed = decode_start.elapsed();

        let mut resize_elapsed = Duration::ZERO;
        let mut write_elapsed = Duration::ZERO;
        let mut written = Vec::with_capacity(config.sizes.len());

        for &size in &config.sizes {
            let resize_start = Instant::now();
            let icon = self.resize_square(&source, size, config.resize_filter)?;
            resize_elapsed += resize_start.elapsed();

            let write_start = Instant::now();
            let path = self.write_png(icon, config)?;
            write_elapsed += write_start.elapsed();

            on_saved(&path);
            written.push(path);
        }

        log::info!(
            "✅ 图标生成完成 - 数量={} load={}ms decode={}ms resize={}ms write={}ms total={}ms",
            written.len(),
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            resize_elapsed.as_millis(),
            write_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(written)
    }
}
