//! # PNG 写出模块
//!
//! 每个缩放结果写为 `output_dir/icon<size>.png`，已存在的文件直接覆盖。
//! 输出目录不存在时写入失败，本模块不负责创建目录。

use std::path::PathBuf;

use image::{DynamicImage, ImageFormat};

use super::source::ResizedIcon;
use super::{IconConfig, IconError, IconResizer};

impl IconResizer {
    /// 将缩放结果编码为 PNG 并写盘，返回输出路径。
    pub(crate) fn write_png(
        &self,
        icon: ResizedIcon,
        config: &IconConfig,
    ) -> Result<PathBuf, IconError> {
        let output_path = config.output_path_for(icon.size);
        let encodable = Self::into_png_encodable(icon.image);

        encodable
            .save_with_format(&output_path, ImageFormat::Png)
            .map_err(|e| IconError::Write(format!("{}：{}", output_path.display(), e)))?;

        log::debug!("💾 已写出 {}", output_path.display());

        Ok(output_path)
    }

    /// PNG 不支持浮点像素，此类布局转为 8 位；其余布局原样保留。
    fn into_png_encodable(image: DynamicImage) -> DynamicImage {
        match image {
            DynamicImage::ImageRgb32F(_) => DynamicImage::ImageRgb8(image.to_rgb8()),
            DynamicImage::ImageRgba32F(_) => DynamicImage::ImageRgba8(image.to_rgba8()),
            other => other,
        }
    }
}
