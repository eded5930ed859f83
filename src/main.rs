//! # 图标生成工具 — 命令入口
//!
//! 不接受任何命令行参数。日志输出到 stderr（`RUST_LOG` 可调整级别），
//! 结果行输出到 stdout。出错时打印 `Error: ...` 后正常退出。

use icon_resizer::icon_resizer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    icon_resizer::run_default();
}
