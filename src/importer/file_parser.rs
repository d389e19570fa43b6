// ==========================================
// 固定资产导入校验 - 文件解析器实现
// ==========================================
// 阶段 0: 打开工作簿 → 定位模板工作表 → 单元格转文本
// 支持: .xlsx / .xlsm / .xls / .ods
// ==========================================

use crate::domain::RawRow;
use crate::importer::building_parser_trait::SheetParser;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::debug;

const SUPPORTED_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

// ==========================================
// Excel Sheet Parser 实现
// ==========================================
pub struct ExcelSheetParser;

impl SheetParser for ExcelSheetParser {
    fn parse_sheet(&self, file_path: &Path, sheet_name: &str) -> ImportResult<Vec<RawRow>> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 检查扩展名
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 模板校验：必须存在指定名称的工作表
        let sheet_names = workbook.sheet_names();
        if !sheet_names.iter().any(|name| name == sheet_name) {
            debug!(expected = sheet_name, found = ?sheet_names, "模板工作表缺失");
            return Err(ImportError::TemplateMismatch {
                expected: sheet_name.to_string(),
            });
        }

        let range = workbook.worksheet_range(sheet_name)?;
        Ok(extract_rows(&range))
    }
}

/// 工作表区域 → 原始行
///
/// 行号、列位置按工作表绝对坐标计算；完全空白的行被跳过。
pub fn extract_rows(range: &Range<Data>) -> Vec<RawRow> {
    let (start_row, start_col) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    range
        .rows()
        .enumerate()
        .filter_map(|(idx, cells)| {
            let mut texts: Vec<Option<String>> = vec![None; start_col];
            texts.extend(cells.iter().map(cell_to_text));

            let row = RawRow::new(start_row + idx + 1, texts);
            if row.is_blank() {
                None
            } else {
                Some(row)
            }
        })
        .collect()
}

/// 单元格 → 文本
///
/// - 数值: 最短十进制表示（101.0 → "101"）
/// - 日期: 表格日期序列号
/// - 空单元格 / 错误单元格: None
pub fn cell_to_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::DateTime(dt) => dt.as_f64().to_string(),
        other => other.to_string(),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
