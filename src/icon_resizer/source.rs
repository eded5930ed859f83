//! # 数据源与中间模型
//!
//! - `RawImageData`：已读取但未解码的字节
//! - `SourceImage`：解码后的只读源图，整个运行期间只解码一次
//! - `ResizedIcon`：某一边长的缩放结果，独占像素缓冲，写盘后即丢弃

use std::path::PathBuf;

use image::DynamicImage;

/// 加载阶段输出：原始字节与来源路径。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源路径（用于日志与诊断）。
    pub(crate) path: PathBuf,
}

/// 解码后的源图。
pub(crate) struct SourceImage {
    pub(crate) image: DynamicImage,
}

impl SourceImage {
    pub(crate) fn width(&self) -> u32 {
        self.image.width()
    }

    pub(crate) fn height(&self) -> u32 {
        self.image.height()
    }

    pub(crate) fn color(&self) -> image::ColorType {
        self.image.color()
    }
}

/// 单个尺寸的缩放结果。
pub(crate) struct ResizedIcon {
    pub(crate) size: u32,
    pub(crate) image: DynamicImage,
}
