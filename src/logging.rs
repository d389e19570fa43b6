// ==========================================
// 固定资产导入校验 - 日志
// ==========================================
// 输出: stderr（stdout 留给预检结果 JSON）
// 级别: RUST_LOG，缺省 info
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// 文本日志（命令行默认）
///
/// ```no_run
/// building_asset_import::logging::init();
/// ```
pub fn init() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .init();
}

/// JSON 日志，附带当前 span（含 batch_id）
pub fn init_json() {
    fmt()
        .json()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_current_span(true)
        .init();
}

/// 测试用：debug 级别，输出交给测试框架捕获；重复调用无副作用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("building_asset_import=debug"))
        .with_test_writer()
        .try_init();
}
