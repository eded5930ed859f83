//! # 服务层（对外边界）
//!
//! ## 设计思路
//!
//! 这里是整条链路唯一的错误边界：
//! - 每写出一个文件输出一行 `Saved <path>`
//! - 任一阶段失败输出一行 `Error: <message>`，错误在此被吞掉，进程正常结束
//!
//! ## 实现思路
//!
//! `run_with_output` 接受任意 `io::Write`，便于测试捕获输出；
//! `run` 绑定标准输出；`run_default` 使用固定的默认配置。

use std::io::{self, Write};
use std::path::Path;

use super::{IconConfig, IconResizer};

/// 使用默认配置（固定源路径、`public/icons`、16/48/128）运行一次。
pub fn run_default() {
    let config = IconConfig::default();
    run(&config.source_path, &config.output_dir, &config.sizes);
}

/// 生成图标并把进度写到标准输出。
pub fn run(source_path: &Path, output_dir: &Path, sizes: &[u32]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(&mut out, source_path, output_dir, sizes);
}

/// 生成图标并把进度写到 `out`，不向调用方返回错误。
///
/// # 示例
/// ```rust,no_run
/// use std::path::Path;
/// use icon_resizer::icon_resizer::run_with_output;
///
/// let mut out = Vec::new();
/// run_with_output(&mut out, Path::new("logo.jpg"), Path::new("public/icons"), &[16, 48, 128]);
/// print!("{}", String::from_utf8_lossy(&out));
/// ```
pub fn run_with_output<W: Write>(out: &mut W, source_path: &Path, output_dir: &Path, sizes: &[u32]) {
    let config = IconConfig::for_paths(source_path, output_dir, sizes);

    let result = IconResizer::new(config).and_then(|resizer| {
        resizer.process_with_hooks(|path| {
            let _ = writeln!(out, "Saved {}", path.display());
        })
    });

    if let Err(err) = result {
        log::error!("❌ 图标生成失败（stage={}）：{}", err.stage(), err);
        let _ = writeln!(out, "Error: {}", err);
    }

    let _ = out.flush();
}
