//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在解码之前尽早失败：存在性 → metadata 体积 → 读取 → 文件签名。
//! 源文件缺失时返回 `NotFound`，不会触碰输出目录。
//!
//! 签名检查只拦截 `infer` 明确识别为非图片的内容（PDF、压缩包等）。
//! PNM、QOI 等 `infer` 不认识的栅格格式交给解码阶段的 `image::guess_format` 判断。

use std::io::ErrorKind;
use std::path::Path;

use super::source::RawImageData;
use super::{IconConfig, IconError, IconResizer};

impl IconResizer {
    /// 从本地路径加载图片原始字节。
    pub(crate) fn load_from_file(
        &self,
        path: &Path,
        config: &IconConfig,
    ) -> Result<RawImageData, IconError> {
        log::info!("📁 开始读取源图片 - 路径: {}", path.display());

        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => IconError::NotFound(format!("{}（{}）", path.display(), e)),
            _ => IconError::FileSystem(format!("无法读取文件信息 {}：{}", path.display(), e)),
        })?;

        if !metadata.is_file() {
            return Err(IconError::FileSystem(format!(
                "源路径不是文件：{}",
                path.display()
            )));
        }

        if metadata.len() > config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "源文件 {} 为 {} 字节，超过上限 {} 字节",
                path.display(),
                metadata.len(),
                config.max_file_size
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取图片文件 {}：{}", path.display(), e)))?;
        Self::reject_non_image_source(path, &bytes)?;

        Ok(RawImageData {
            bytes,
            path: path.to_path_buf(),
        })
    }

    fn reject_non_image_source(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
        if bytes.is_empty() {
            return Err(IconError::InvalidFormat(format!("源文件为空：{}", path.display())));
        }

        match infer::get(bytes) {
            Some(kind) if kind.matcher_type() != infer::MatcherType::Image => {
                Err(IconError::InvalidFormat(format!(
                    "{} 是 {}，不是图片",
                    path.display(),
                    kind.mime_type()
                )))
            }
            Some(_) => Ok(()),
            None => {
                log::debug!("🔍 签名未识别，交由解码阶段判断格式：{}", path.display());
                Ok(())
            }
        }
    }
}
