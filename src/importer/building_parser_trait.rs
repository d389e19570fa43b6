// ==========================================
// 固定资产导入校验 - 导入解析 Trait
// ==========================================
// 职责: 定义解析管道各阶段接口（不包含实现）
// 管道: 读表 → 分类 → 字段校验 → 重复检查 → 分区
// ==========================================

use crate::domain::{AssetType, ParseOutcome, RawRow, ValidatedRecord};
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// BuildingParser Trait
// ==========================================
// 用途: 固定资产导入预检主接口
// 实现者: BuildingParserImpl
#[async_trait]
pub trait BuildingParser: Send + Sync {
    /// 从表格文件解析并校验
    ///
    /// # 返回
    /// - Ok(ParseOutcome): rightData / errorData 两个有序分区
    /// - Err(TemplateMismatch): 缺少模板工作表，整批拒绝
    /// - Err(DuplicateLookupFailed): 重复查询失败，整批中止
    async fn parse_file<P: AsRef<Path> + Send>(&self, file_path: P)
        -> ImportResult<ParseOutcome>;

    /// 校验已读取的原始行（按表格顺序逐行处理）
    async fn parse_rows(&self, rows: Vec<RawRow>) -> ImportResult<ParseOutcome>;
}

// ==========================================
// SheetParser Trait
// ==========================================
// 用途: 从工作簿中读取模板工作表
// 实现者: ExcelSheetParser
pub trait SheetParser: Send + Sync {
    /// 读取指定名称的工作表为原始行（跳过完全空白的行）
    ///
    /// # 返回
    /// - Err(TemplateMismatch): 工作簿中不存在该工作表
    fn parse_sheet(&self, file_path: &Path, sheet_name: &str) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// RowClassifier Trait
// ==========================================
// 用途: 分类标签 → 资产类型
// 实现者: LabelClassifier
pub trait RowClassifier: Send + Sync {
    /// 返回 None 表示未识别（该行直接丢弃，不计为错误）
    fn classify(&self, label: Option<&str>) -> Option<AssetType>;
}

// ==========================================
// RowValidator Trait
// ==========================================
// 用途: 字段级校验（纯同步，不做 I/O）
// 实现者: FieldValidator
pub trait RowValidator: Send + Sync {
    /// 构造校验记录，errors 中按规则顺序记录全部违规
    fn validate(&self, asset_type: AssetType, row: &RawRow) -> ValidatedRecord;
}
