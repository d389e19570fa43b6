// ==========================================
// 固定资产导入校验 - 导入模块错误类型
// ==========================================
// 分层: 模板错误（整批拒绝） / 行级校验（记录在 errors 中，非 Err）
//       / 协作方故障（重复查询失败，整批中止）
// 工具: thiserror 派生宏
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xlsm/.xls/.ods）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    // ===== 模板错误 =====
    #[error("导入模板错误，请使用标准模板导入（缺少工作表「{expected}」）")]
    TemplateMismatch { expected: String },

    // ===== 协作方错误 =====
    #[error("重复数据查询失败 (行 {row_number}): {source}")]
    DuplicateLookupFailed {
        row_number: usize,
        source: RepositoryError,
    },

    // ===== 配置错误 =====
    #[error("配置读取失败 (key: {key}): {message}")]
    ConfigReadError { key: String, message: String },
}

impl ImportError {
    /// 是否为模板错误（整批拒绝，不做任何行处理）
    pub fn is_template_error(&self) -> bool {
        matches!(self, ImportError::TemplateMismatch { .. })
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_message() {
        let err = ImportError::TemplateMismatch {
            expected: "固定资产数据".to_string(),
        };
        assert!(err.is_template_error());
        assert!(err.to_string().starts_with("导入模板错误，请使用标准模板导入"));
        assert!(err.to_string().contains("固定资产数据"));
    }

    #[test]
    fn test_duplicate_lookup_failure_keeps_source() {
        use std::error::Error as _;

        let err = ImportError::DuplicateLookupFailed {
            row_number: 7,
            source: RepositoryError::LockError("poisoned".to_string()),
        };
        assert!(!err.is_template_error());
        assert!(err.to_string().contains("行 7"));
        assert!(err.source().is_some());
    }
}
