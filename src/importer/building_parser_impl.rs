// ==========================================
// 固定资产导入校验 - 导入解析器实现
// ==========================================
// 职责: 整合解析流程，从表格到 rightData / errorData
// 流程: 读表 → 分类 → 字段校验 → 重复检查 → 分区
// 约束: 只做校验，不写入任何数据
// ==========================================

use crate::config::ImportConfigReader;
use crate::domain::{ParseOutcome, RawRow, RowColumn, ValidatedRecord};
use crate::importer::building_parser_trait::{
    BuildingParser, RowClassifier, RowValidator, SheetParser,
};
use crate::importer::classifier::LabelClassifier;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_validator::FieldValidator;
use crate::importer::file_parser::ExcelSheetParser;
use crate::repository::BuildingInfoRepository;
use futures::future::join_all;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// 重复数据提示（总是最后一条）
pub const DUPLICATE_DATA: &str = "已导入相同数据";

// ==========================================
// BuildingParserImpl - 导入解析器实现
// ==========================================
pub struct BuildingParserImpl<R, C>
where
    R: BuildingInfoRepository,
    C: ImportConfigReader,
{
    // 重复数据查询
    building_repo: R,

    // 配置读取器
    config: C,

    // 管道组件
    sheet_parser: Box<dyn SheetParser>,
    classifier: Box<dyn RowClassifier>,
    validator: Box<dyn RowValidator>,
}

impl<R, C> BuildingParserImpl<R, C>
where
    R: BuildingInfoRepository,
    C: ImportConfigReader,
{
    /// 创建新的 BuildingParser 实例
    ///
    /// # 参数
    /// - building_repo: 已导入房产仓储（重复查询）
    /// - config: 配置读取器（模板名称）
    /// - sheet_parser: 工作表解析器
    /// - classifier: 分类器
    /// - validator: 字段校验器
    pub fn new(
        building_repo: R,
        config: C,
        sheet_parser: Box<dyn SheetParser>,
        classifier: Box<dyn RowClassifier>,
        validator: Box<dyn RowValidator>,
    ) -> Self {
        Self {
            building_repo,
            config,
            sheet_parser,
            classifier,
            validator,
        }
    }

    /// 使用标准组件创建，字段长度上限从配置读取
    pub async fn from_config(building_repo: R, config: C) -> ImportResult<Self> {
        let limits = config
            .load_validation_limits()
            .await
            .map_err(|e| ImportError::ConfigReadError {
                key: "validation_limits".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self::new(
            building_repo,
            config,
            Box::new(ExcelSheetParser),
            Box::new(LabelClassifier),
            Box::new(FieldValidator::new(limits)),
        ))
    }

    /// 处理单行
    ///
    /// # 返回
    /// - Ok(None): 未识别类型，丢弃
    /// - Ok(Some(record)): 校验记录（可能含错误）
    /// - Err: 重复查询失败
    async fn process_row(&self, row: &RawRow) -> ImportResult<Option<ValidatedRecord>> {
        let Some(asset_type) = self.classifier.classify(row.cell(RowColumn::TypeLabel)) else {
            debug!(row_number = row.row_number, "未识别类型，丢弃该行");
            return Ok(None);
        };

        let mut record = self.validator.validate(asset_type, row);

        let key = record.identity_key();
        let duplicated = self.building_repo.exists(&key).await.map_err(|e| {
            error!(row_number = row.row_number, error = %e, "重复数据查询失败");
            ImportError::DuplicateLookupFailed {
                row_number: row.row_number,
                source: e,
            }
        })?;
        if duplicated {
            record.errors.push(DUPLICATE_DATA.to_string());
        }

        debug!(
            row_number = row.row_number,
            asset_type = %asset_type,
            errors = record.errors.len(),
            "行校验完成"
        );
        Ok(Some(record))
    }

    /// 汇总为两个有序分区
    fn assemble(
        &self,
        batch_id: String,
        total_rows: usize,
        records: Vec<ValidatedRecord>,
        start_time: Instant,
    ) -> ParseOutcome {
        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        let outcome = ParseOutcome::partition(batch_id, total_rows, records, elapsed_ms);

        info!(
            batch_id = %outcome.summary.batch_id,
            total = outcome.summary.total_rows,
            discarded = outcome.summary.discarded_rows,
            right = outcome.summary.right_rows,
            error = outcome.summary.error_rows,
            elapsed_ms = outcome.summary.elapsed_ms,
            "固定资产数据校验完成"
        );

        outcome
    }

    /// 并发校验（重复查询并发执行，结果保持原始行序）
    ///
    /// # 参数
    /// - rows: 原始行
    /// - limit: 同时进行的查询数（最小为 1）
    #[instrument(skip(self, rows), fields(batch_id))]
    pub async fn parse_rows_concurrent(
        &self,
        rows: Vec<RawRow>,
        limit: usize,
    ) -> ImportResult<ParseOutcome> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        let total_rows = rows.len();
        info!(total_rows = total_rows, limit = limit, "开始并发校验");

        // 按 limit 分块并发；join_all 结果与输入顺序一致
        let mut records = Vec::with_capacity(total_rows);
        for chunk in rows.chunks(limit.max(1)) {
            let results = join_all(chunk.iter().map(|row| self.process_row(row))).await;
            for result in results {
                if let Some(record) = result? {
                    records.push(record);
                }
            }
        }

        Ok(self.assemble(batch_id, total_rows, records, start_time))
    }
}

#[async_trait::async_trait]
impl<R, C> BuildingParser for BuildingParserImpl<R, C>
where
    R: BuildingInfoRepository + Send + Sync,
    C: ImportConfigReader + Send + Sync,
{
    /// 从表格文件解析并校验
    #[instrument(skip(self, file_path))]
    async fn parse_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ParseOutcome> {
        let path = file_path.as_ref();
        info!(file_path = %path.display(), "开始解析固定资产数据");

        let sheet_name = self
            .config
            .get_template_sheet_name()
            .await
            .map_err(|e| ImportError::ConfigReadError {
                key: "template_sheet_name".to_string(),
                message: e.to_string(),
            })?;

        let rows = self.sheet_parser.parse_sheet(path, &sheet_name).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;
        info!(rows = rows.len(), sheet = %sheet_name, "工作表读取完成");

        self.parse_rows(rows).await
    }

    /// 逐行校验：每行的重复查询在处理下一行前完成
    #[instrument(skip(self, rows), fields(batch_id))]
    async fn parse_rows(&self, rows: Vec<RawRow>) -> ImportResult<ParseOutcome> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        let total_rows = rows.len();
        let mut records = Vec::with_capacity(total_rows);

        for row in &rows {
            if let Some(record) = self.process_row(row).await? {
                records.push(record);
            }
        }

        Ok(self.assemble(batch_id, total_rows, records, start_time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticImportConfig;
    use crate::domain::{AssetType, IdentityKey};
    use crate::repository::{RepositoryError, RepositoryResult};
    use async_trait::async_trait;
    use std::collections::HashSet;

    // 内存版重复查询
    struct InMemoryRepo {
        existing: HashSet<IdentityKey>,
    }

    #[async_trait]
    impl BuildingInfoRepository for InMemoryRepo {
        async fn exists(&self, key: &IdentityKey) -> RepositoryResult<bool> {
            Ok(self.existing.contains(key))
        }

        async fn batch_insert(&self, _records: &[ValidatedRecord]) -> RepositoryResult<usize> {
            Err(RepositoryError::BusinessRuleViolation("read only".to_string()))
        }

        async fn count(&self) -> RepositoryResult<usize> {
            Ok(self.existing.len())
        }
    }

    fn parser(existing: Vec<IdentityKey>) -> BuildingParserImpl<InMemoryRepo, StaticImportConfig> {
        BuildingParserImpl::new(
            InMemoryRepo {
                existing: existing.into_iter().collect(),
            },
            StaticImportConfig::default(),
            Box::new(ExcelSheetParser),
            Box::new(LabelClassifier),
            Box::new(FieldValidator::default()),
        )
    }

    #[tokio::test]
    async fn test_duplicate_error_is_appended_last() {
        let key = IdentityKey::new(AssetType::Carport, None, None, None, Some("B-01"));
        let parser = parser(vec![key]);

        let outcome = parser
            .parse_rows(vec![RawRow::from_strs(2, &["车位", "", "", "", "B-01", "0"])])
            .await
            .unwrap();

        assert!(outcome.right_data.is_empty());
        assert_eq!(
            outcome.error_data[0].errors,
            vec!["建筑面积错误".to_string(), DUPLICATE_DATA.to_string()]
        );
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let key = IdentityKey::new(AssetType::House, None, None, None, Some("0102"));
        let parser = parser(vec![key]);
        let rows: Vec<RawRow> = (0..20)
            .map(|i| {
                let number = format!("{:04}", 100 + i);
                RawRow::from_strs(i + 1, &["住宅", "", "", "", number.as_str(), "50"])
            })
            .collect();

        let sequential = parser.parse_rows(rows.clone()).await.unwrap();
        let concurrent = parser.parse_rows_concurrent(rows, 4).await.unwrap();

        assert_eq!(sequential.right_data, concurrent.right_data);
        assert_eq!(sequential.error_data, concurrent.error_data);
        assert_eq!(concurrent.error_data.len(), 1);
        assert_eq!(concurrent.error_data[0].number.as_deref(), Some("0102"));
    }
}
