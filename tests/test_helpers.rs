// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 临时数据库初始化、原始行构造、已导入数据预置
// ==========================================

#![allow(dead_code)]

use building_asset_import::db::{init_schema, open_sqlite_connection};
use building_asset_import::domain::{AssetType, ConstructionArea, RawRow, ValidatedRecord};
use std::error::Error;
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub const VALID_IDCARD: &str = "11010519491231002X";
pub const VALID_PHONE: &str = "13800138000";

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("临时文件路径非 UTF-8")?
        .to_string();

    let conn = open_sqlite_connection(&db_path)?;
    init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 测试数据集路径（tests/fixtures/datasets）
///
/// - building_import_valid.xlsx: 含「填表说明」与「固定资产数据」两个工作表
/// - building_import_wrong_sheet.xlsx: 数据相同，但工作表名为 Sheet1
pub fn dataset_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("datasets")
        .join(file_name)
}

/// 构造原始行（模板列顺序）
pub fn row(row_number: usize, cells: &[&str]) -> RawRow {
    RawRow::from_strs(row_number, cells)
}

/// 模板标题行（分类时会被丢弃）
pub fn header_row() -> RawRow {
    row(
        1,
        &[
            "类型",
            "园区编号/建筑商开发期数",
            "栋",
            "单元/区域",
            "门牌号/编号",
            "建筑面积",
            "入住时间",
            "业主姓名",
            "业主身份证",
            "业主手机号码",
        ],
    )
}

/// 构造已导入记录（用于预置 building_info）
pub fn imported_record(
    asset_type: AssetType,
    area: Option<&str>,
    building: Option<&str>,
    unit: Option<&str>,
    number: &str,
) -> ValidatedRecord {
    ValidatedRecord {
        row_number: 0,
        asset_type,
        area: area.map(str::to_string),
        building: building.map(str::to_string),
        unit: unit.map(str::to_string),
        number: Some(number.to_string()),
        construction_area: Some(ConstructionArea::Measured(50.0)),
        move_in_at: None,
        owner_name: None,
        owner_idcard: None,
        owner_phone: None,
        errors: Vec::new(),
    }
}
