// ==========================================
// 固定资产导入API
// ==========================================
// 职责: 封装固定资产导入预检与（协作方）落库
// 说明: 传输封装（HTTP/鉴权/上传）由调用方负责
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::{ParseOutcome, ParseSummary, ValidatedRecord};
use crate::importer::{BuildingParser, BuildingParserImpl};
use crate::repository::{BuildingInfoRepository, BuildingInfoRepositoryImpl};
use serde::{Deserialize, Serialize};
use tracing::info;

/// 预检响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingParseResponse {
    /// 可导入数据（errors 为空）
    pub right_data: Vec<ValidatedRecord>,
    /// 错误数据（附错误原因）
    pub error_data: Vec<ValidatedRecord>,
    /// 汇总统计
    pub summary: ParseSummary,
}

impl From<ParseOutcome> for BuildingParseResponse {
    fn from(outcome: ParseOutcome) -> Self {
        Self {
            right_data: outcome.right_data,
            error_data: outcome.error_data,
            summary: outcome.summary,
        }
    }
}

/// 导入API
pub struct ImportApi {
    db_path: String,
}

impl ImportApi {
    /// 创建新的ImportApi实例
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }

    fn open_repo(&self) -> ApiResult<BuildingInfoRepositoryImpl> {
        Ok(BuildingInfoRepositoryImpl::new(&self.db_path)?)
    }

    /// 预检固定资产表格
    ///
    /// # 参数
    /// - file_path: 表格文件路径
    ///
    /// # 返回
    /// - Ok(BuildingParseResponse): rightData / errorData
    /// - Err(ApiError::ImportTemplateError): 模板错误
    pub async fn parse_building_file(&self, file_path: &str) -> ApiResult<BuildingParseResponse> {
        if file_path.trim().is_empty() {
            return Err(ApiError::InvalidInput("文件路径不能为空".to_string()));
        }

        let repo = self.open_repo()?;
        let config = ConfigManager::new(&self.db_path)
            .map_err(|e| ApiError::DatabaseConnectionError(e.to_string()))?;

        let parser = BuildingParserImpl::from_config(repo, config).await?;
        let outcome = parser.parse_file(file_path).await?;

        Ok(outcome.into())
    }

    /// 写入已通过校验的数据（协作方职责，不属于预检）
    ///
    /// # 返回
    /// - Ok(usize): 写入条数
    pub async fn commit_right_data(&self, records: &[ValidatedRecord]) -> ApiResult<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let repo = self.open_repo()?;
        let count = repo.batch_insert(records).await?;
        info!(count = count, "固定资产数据写入完成");
        Ok(count)
    }
}
