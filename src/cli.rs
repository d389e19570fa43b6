// ==========================================
// 固定资产导入校验 - 命令行参数
// ==========================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "building-asset-import",
    version,
    about = "固定资产导入预检：输出 rightData / errorData"
)]
pub struct Cli {
    /// 待预检的表格文件 (.xlsx/.xlsm/.xls/.ods)
    pub file: PathBuf,

    /// SQLite 数据库路径（缺省时使用用户数据目录）
    #[arg(env = "BUILDING_IMPORT_DB_PATH")]
    pub db_path: Option<String>,

    /// 预检后写入 rightData
    #[arg(long)]
    pub commit: bool,

    /// 日志输出为 JSON
    #[arg(long)]
    pub json_log: bool,
}
