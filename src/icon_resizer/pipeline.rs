//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 源图只解码一次；每个目标边长都从同一份只读源图派生独立的缩放结果。
//! 解码前先读 header 尺寸做像素/内存上限检查，降低超大输入的内存开销。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸，按上限快速拒绝
//! 2. 完整解码，按实际尺寸再次校验
//! 3. 以源图自身的像素布局缩放到 `size x size`（不保持宽高比）
//! 4. 主路径使用 `fast_image_resize`，失败时回退 `image::resize_exact`

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::io::Cursor;

use super::source::{RawImageData, ResizedIcon, SourceImage};
use super::config::LARGE_SOURCE_WARN_PIXELS;
use super::{IconConfig, IconError, IconResizer};

impl IconResizer {
    /// 将原始字节解码为源图。
    pub(crate) fn decode_source(
        &self,
        raw: RawImageData,
        config: &IconConfig,
    ) -> Result<SourceImage, IconError> {
        let format = image::guess_format(&raw.bytes)
            .map_err(|e| IconError::InvalidFormat(format!("{} 不是可解码的栅格图片：{}", raw.path.display(), e)))?;

        let (header_width, header_height) = Self::peek_source_dimensions(&raw.bytes)?;
        Self::check_decode_budget(config, header_width, header_height)?;

        let decoded = image::load_from_memory_with_format(&raw.bytes, format)
            .map_err(|e| IconError::Decode(format!("{} 解码失败：{}", raw.path.display(), e)))?;

        let (width, height) = decoded.dimensions();
        if (width, height) != (header_width, header_height) {
            Self::check_decode_budget(config, width, height)?;
        }

        log::info!(
            "✅ 源图解码成功 - 路径: {} 格式: {:?} 尺寸: {}x{} 像素布局: {:?}",
            raw.path.display(),
            format,
            width,
            height,
            decoded.color()
        );

        Ok(SourceImage { image: decoded })
    }

    /// 将源图缩放为 `size x size` 的正方形。
    pub(crate) fn resize_square(
        &self,
        source: &SourceImage,
        size: u32,
        filter: FilterType,
    ) -> Result<ResizedIcon, IconError> {
        if size == 0 {
            return Err(IconError::Resize("目标边长必须大于 0".to_string()));
        }

        let image = match Self::resize_with_fast_image_resize(&source.image, size, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                    err
                );
                source.image.resize_exact(size, size, filter)
            }
        };

        let (width, height) = image.dimensions();
        if width != size || height != size {
            return Err(IconError::Resize(format!(
                "缩放结果尺寸异常：{}x{}（期望 {}x{}）",
                width, height, size, size
            )));
        }

        log::debug!(
            "🧩 缩放完成：{}x{} -> {}x{}（filter={:?}, 像素布局={:?}）",
            source.width(),
            source.height(),
            size,
            size,
            filter,
            source.color()
        );

        Ok(ResizedIcon { size, image })
    }

    /// 只解析 header 得到源图宽高，不分配像素缓冲。
    fn peek_source_dimensions(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::InvalidFormat(format!("源图 header 无法解析：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| IconError::InvalidFormat(format!("源图 header 缺少尺寸信息：{}", e)))
    }

    /// 源图解码预算：像素数与按 RGBA 估算的内存都不得超过配置上限。
    fn check_decode_budget(config: &IconConfig, width: u32, height: u32) -> Result<(), IconError> {
        let pixels = u64::from(width) * u64::from(height);
        if pixels > config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "源图 {}x{} 共 {} 像素，超过上限 {}",
                width, height, pixels, config.max_decoded_pixels
            )));
        }

        let rgba_bytes = pixels * 4;
        if rgba_bytes > config.max_decoded_bytes {
            return Err(IconError::ResourceLimit(format!(
                "源图 {}x{} 解码约需 {} MiB，超过上限 {} MiB",
                width,
                height,
                rgba_bytes >> 20,
                config.max_decoded_bytes >> 20
            )));
        }

        if pixels > LARGE_SOURCE_WARN_PIXELS {
            log::warn!("⚠️ 源图较大（{}x{}），解码可能占用较多内存", width, height);
        }

        Ok(())
    }

    /// 以源图的像素布局直接缩放，RGB 输入不会被引入 alpha 通道。
    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        size: u32,
        filter: FilterType,
    ) -> Result<DynamicImage, IconError> {
        let mut dst_image = DynamicImage::new(size, size, image.color());

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::fast_filter_for(filter)));

        resizer
            .resize(image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

        Ok(dst_image)
    }

    /// 图标默认走 Lanczos3；其余滤镜按核宽度就近对应。
    fn fast_filter_for(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::Nearest => fr::FilterType::Box,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, ImageBuffer, ImageFormat, Rgb, Rgba};
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        image
            .write_to(&mut cursor, format)
            .expect("failed to encode test image");
        cursor.into_inner()
    }

    fn raw(bytes: Vec<u8>) -> RawImageData {
        RawImageData {
            bytes,
            path: PathBuf::from("test-source"),
        }
    }

    fn gradient_rgb(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8])
        }))
    }

    fn resizer() -> IconResizer {
        IconResizer::new(IconConfig::default()).expect("resizer init failed")
    }

    #[test]
    fn decodes_jpeg_as_opaque_rgb() {
        let jpeg = encode(gradient_rgb(1024, 1024), ImageFormat::Jpeg);

        let source = resizer()
            .decode_source(raw(jpeg), &IconConfig::default())
            .expect("decode should succeed");

        assert_eq!((source.width(), source.height()), (1024, 1024));
        assert_eq!(source.color(), ColorType::Rgb8);
    }

    #[test]
    fn rgb_source_stays_rgb_after_resize() {
        let handler = resizer();
        let source = SourceImage {
            image: gradient_rgb(256, 256),
        };

        let icon = handler
            .resize_square(&source, 128, FilterType::Lanczos3)
            .expect("resize should succeed");

        assert_eq!(icon.size, 128);
        assert_eq!(icon.image.dimensions(), (128, 128));
        assert_eq!(icon.image.color(), ColorType::Rgb8);
    }

    #[test]
    fn rgba_source_keeps_alpha_channel() {
        let handler = resizer();
        let source = SourceImage {
            image: DynamicImage::ImageRgba8(ImageBuffer::from_pixel(40, 40, Rgba([200u8, 10, 10, 128]))),
        };

        let icon = handler
            .resize_square(&source, 16, FilterType::Lanczos3)
            .expect("resize should succeed");

        assert_eq!(icon.image.color(), ColorType::Rgba8);
    }

    #[test]
    fn non_square_source_is_stretched_to_square() {
        let handler = resizer();
        let source = SourceImage {
            image: gradient_rgb(300, 100),
        };

        let icon = handler
            .resize_square(&source, 48, FilterType::Lanczos3)
            .expect("resize should succeed");

        assert_eq!(icon.image.dimensions(), (48, 48));
    }

    #[test]
    fn resize_is_deterministic() {
        let handler = resizer();
        let source = SourceImage {
            image: gradient_rgb(500, 333),
        };

        let first = handler
            .resize_square(&source, 48, FilterType::Lanczos3)
            .expect("resize should succeed");
        let second = handler
            .resize_square(&source, 48, FilterType::Lanczos3)
            .expect("resize should succeed");

        assert_eq!(first.image.as_bytes(), second.image.as_bytes());
    }

    #[test]
    fn zero_size_is_rejected() {
        let source = SourceImage {
            image: gradient_rgb(8, 8),
        };

        let result = resizer().resize_square(&source, 0, FilterType::Lanczos3);

        assert!(matches!(result, Err(IconError::Resize(_))));
    }

    #[test]
    fn rejects_too_many_pixels_before_decode() {
        let mut config = IconConfig::default();
        config.max_decoded_pixels = 1_000_000;
        let png = encode(gradient_rgb(2000, 2000), ImageFormat::Png);

        let result = resizer().decode_source(raw(png), &config);

        assert!(matches!(result, Err(IconError::ResourceLimit(_))));
    }

    #[test]
    fn rejects_decoded_memory_over_limit() {
        let mut config = IconConfig::default();
        config.max_decoded_bytes = 1024;
        let png = encode(gradient_rgb(64, 64), ImageFormat::Png);

        let result = resizer().decode_source(raw(png), &config);

        assert!(matches!(result, Err(IconError::ResourceLimit(_))));
    }

    #[test]
    fn camera_sized_source_fits_default_budget() {
        let config = IconConfig::default();

        assert!(IconResizer::check_decode_budget(&config, 8000, 6000).is_ok());
        assert!(IconResizer::check_decode_budget(&config, 12_000, 9_000).is_ok());
        assert!(matches!(
            IconResizer::check_decode_budget(&config, 20_000, 10_000),
            Err(IconError::ResourceLimit(_))
        ));
    }

    #[test]
    fn header_dimensions_are_checked_against_budget() {
        let mut config = IconConfig::default();
        config.max_decoded_pixels = 48_000_000;
        let png = encode(gradient_rgb(80, 60), ImageFormat::Png);

        assert_eq!(IconResizer::peek_source_dimensions(&png).expect("header"), (80, 60));
        assert!(resizer().decode_source(raw(png), &config).is_ok());
    }

    #[test]
    fn decodes_formats_without_common_magic_numbers() {
        for format in [ImageFormat::Pnm, ImageFormat::Qoi] {
            let bytes = encode(gradient_rgb(32, 32), format);

            let source = resizer()
                .decode_source(raw(bytes), &IconConfig::default())
                .expect("decode should succeed");

            assert_eq!((source.width(), source.height()), (32, 32));
        }
    }

    #[test]
    fn truncated_png_fails_to_decode() {
        let mut png = encode(gradient_rgb(64, 64), ImageFormat::Png);
        png.truncate(png.len() / 2);

        let result = resizer().decode_source(raw(png), &IconConfig::default());

        assert!(matches!(
            result,
            Err(IconError::Decode(_)) | Err(IconError::InvalidFormat(_))
        ));
    }

    #[test]
    fn fast_filter_mapping_uses_lanczos_for_quality() {
        assert!(matches!(
            IconResizer::fast_filter_for(FilterType::Lanczos3),
            fr::FilterType::Lanczos3
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn any_source_shape_yields_exact_square(
            width in 1u32..96,
            height in 1u32..96,
            size in 1u32..64,
        ) {
            let handler = resizer();
            let source = SourceImage { image: gradient_rgb(width, height) };

            let icon = handler
                .resize_square(&source, size, FilterType::Lanczos3)
                .expect("resize should succeed");

            prop_assert_eq!(icon.image.dimensions(), (size, size));
        }
    }
}
