// ==========================================
// 固定资产导入校验 - 命令行入口
// ==========================================
// 输出: stdout 打印 rightData / errorData (JSON)；日志写入 stderr
// ==========================================

mod cli;

use building_asset_import::db::get_default_db_path;
use building_asset_import::{logging, ImportApi, APP_NAME, VERSION};
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.json_log {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", APP_NAME, VERSION);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "导入预检失败");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = cli.db_path.unwrap_or_else(get_default_db_path);
    tracing::info!("使用数据库: {}", db_path);

    let file_path = cli
        .file
        .to_str()
        .ok_or_else(|| format!("文件路径非 UTF-8: {}", cli.file.display()))?;

    let api = ImportApi::new(db_path);
    let response = api.parse_building_file(file_path).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if cli.commit {
        let inserted = api.commit_right_data(&response.right_data).await?;
        tracing::info!(inserted = inserted, "rightData 已写入");
    }

    Ok(())
}
