//! # 配置模块
//!
//! ## 设计思路
//!
//! 将源路径、输出目录、尺寸列表与各阶段资源上限集中到 `IconConfig`。
//! 命令行入口不接受任何参数，始终使用 `Default` 中的固定值；
//! 库调用方与测试可以构造自定义配置。
//!
//! ## 实现思路
//!
//! - `Default` 给出生产用固定值（`public/icons`，16/48/128，Lanczos3）。
//! - `validate` 在流水线开始前拒绝 0 尺寸；空列表视为“只校验源图”。
//! - 解码上限取约 179 MP（超过约 89 MP 仅告警），普通相机照片可直接使用。
//! - `output_path_for` 统一输出文件命名：`icon<size>.png`。

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use super::IconError;

/// 默认源图片路径。
pub const DEFAULT_SOURCE_PATH: &str = "assets/icon-source.jpg";
/// 默认输出目录（不会自动创建）。
pub const DEFAULT_OUTPUT_DIR: &str = "public/icons";
/// 默认输出边长，按顺序处理。
pub const DEFAULT_ICON_SIZES: [u32; 3] = [16, 48, 128];
/// 超过该像素数仅告警（约 89 MP）。
pub const LARGE_SOURCE_WARN_PIXELS: u64 = 89_478_485;
/// 解码像素硬上限，为告警阈值的两倍（约 179 MP）。
pub const MAX_SOURCE_PIXELS: u64 = 2 * LARGE_SOURCE_WARN_PIXELS;

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源图片路径。
    pub source_path: PathBuf,
    /// 输出目录，必须已存在且可写。
    pub output_dir: PathBuf,
    /// 输出正方形边长列表。
    pub sizes: Vec<u32>,
    /// 缩放滤镜。
    pub resize_filter: FilterType,
    /// 读取源文件时允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_ICON_SIZES.to_vec(),
            resize_filter: FilterType::Lanczos3,
            max_file_size: 512 * 1024 * 1024,
            max_decoded_pixels: MAX_SOURCE_PIXELS,
            max_decoded_bytes: MAX_SOURCE_PIXELS * 4,
        }
    }
}

impl IconConfig {
    /// 以默认限制为基础，替换源路径、输出目录与尺寸列表。
    ///
    /// # 示例
    /// ```rust
    /// use icon_resizer::icon_resizer::IconConfig;
    ///
    /// let config = IconConfig::for_paths("logo.jpg", "out", &[16, 48]);
    /// assert_eq!(config.sizes, vec![16, 48]);
    /// ```
    pub fn for_paths(
        source_path: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
        sizes: &[u32],
    ) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            sizes: sizes.to_vec(),
            ..Self::default()
        }
    }

    /// 校验尺寸列表。空列表合法，运行时只加载源图、不写出任何文件。
    pub fn validate(&self) -> Result<(), IconError> {
        if let Some(zero) = self.sizes.iter().position(|&size| size == 0) {
            return Err(IconError::Config(format!(
                "尺寸必须为正整数（第 {} 项为 0）",
                zero + 1
            )));
        }
        Ok(())
    }

    /// 指定边长对应的输出文件路径。
    ///
    /// # 示例
    /// ```rust
    /// use std::path::Path;
    /// use icon_resizer::icon_resizer::IconConfig;
    ///
    /// let config = IconConfig::default();
    /// assert_eq!(config.output_path_for(48), Path::new("public/icons/icon48.png"));
    /// ```
    pub fn output_path_for(&self, size: u32) -> PathBuf {
        self.output_dir.join(format!("icon{}.png", size))
    }
}
