// ==========================================
// 固定资产导入校验 - API层错误类型
// ==========================================
// 职责: 将导入/仓储层错误转换为面向调用方的错误
// 说明: 模板错误单独成类，调用方据此返回“导入模板错误”
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 模板与输入错误
    // ==========================================
    #[error("导入模板错误，请使用标准模板导入")]
    ImportTemplateError,

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 导入错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("业务规则违反: {0}")]
    BusinessRuleViolation(String),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),
}

impl ApiError {
    /// 错误码（供传输层封装响应）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::ImportTemplateError => "IMPORT_TEMPLATE_ERROR",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::BusinessRuleViolation(_) => "BUSINESS_RULE_VIOLATION",
            ApiError::DatabaseError(_) | ApiError::DatabaseConnectionError(_) => "DATABASE_ERROR",
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        if err.is_template_error() {
            return ApiError::ImportTemplateError;
        }

        match err {
            ImportError::FileNotFound(path) => {
                ApiError::InvalidInput(format!("文件不存在: {}", path))
            }
            ImportError::UnsupportedFormat(ext) => {
                ApiError::InvalidInput(format!("文件格式不支持: {}", ext))
            }
            ImportError::DuplicateLookupFailed { source, .. } => {
                ApiError::DatabaseError(format!("重复数据查询失败: {}", source))
            }
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::DatabaseTransactionError(msg)
            | RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::BusinessRuleViolation(msg) => ApiError::BusinessRuleViolation(msg),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_mapping() {
        let err: ApiError = ImportError::TemplateMismatch {
            expected: "固定资产数据".to_string(),
        }
        .into();

        assert!(matches!(err, ApiError::ImportTemplateError));
        assert_eq!(err.code(), "IMPORT_TEMPLATE_ERROR");
        assert_eq!(err.to_string(), "导入模板错误，请使用标准模板导入");
    }

    #[test]
    fn test_lookup_failure_maps_to_database_error() {
        let err: ApiError = ImportError::DuplicateLookupFailed {
            row_number: 3,
            source: RepositoryError::DatabaseQueryError("disk I/O error".to_string()),
        }
        .into();

        assert!(matches!(err, ApiError::DatabaseError(_)));
        assert!(err.to_string().contains("disk I/O error"));
    }
}
