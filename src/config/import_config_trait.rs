// ==========================================
// 固定资产导入校验 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入校验所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use async_trait::async_trait;
use std::error::Error;

/// 配置读取结果
pub type ConfigResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// 默认模板工作表名称
pub const DEFAULT_TEMPLATE_SHEET_NAME: &str = "固定资产数据";

/// 默认位置字段（园区/栋/单元/门牌号）最大字数
pub const DEFAULT_LOCATION_MAX_CHARS: usize = 26;

/// 默认业主姓名最大字数
pub const DEFAULT_OWNER_NAME_MAX_CHARS: usize = 12;

// ==========================================
// ValidationLimits - 字段长度上限
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub location_max_chars: usize,
    pub owner_name_max_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            location_max_chars: DEFAULT_LOCATION_MAX_CHARS,
            owner_name_max_chars: DEFAULT_OWNER_NAME_MAX_CHARS,
        }
    }
}

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: 导入校验所需的配置读取接口
// 实现者: ConfigManager（config_kv 表） / StaticImportConfig（内置默认值）
#[async_trait]
pub trait ImportConfigReader: Send + Sync {
    /// 获取模板工作表名称
    ///
    /// # 默认值
    /// - 固定资产数据
    async fn get_template_sheet_name(&self) -> ConfigResult<String>;

    /// 获取位置字段最大字数
    ///
    /// # 默认值
    /// - 26
    async fn get_location_max_chars(&self) -> ConfigResult<usize>;

    /// 获取业主姓名最大字数
    ///
    /// # 默认值
    /// - 12
    async fn get_owner_name_max_chars(&self) -> ConfigResult<usize>;

    /// 汇总读取字段长度上限
    async fn load_validation_limits(&self) -> ConfigResult<ValidationLimits> {
        Ok(ValidationLimits {
            location_max_chars: self.get_location_max_chars().await?,
            owner_name_max_chars: self.get_owner_name_max_chars().await?,
        })
    }
}

// ==========================================
// StaticImportConfig - 固定配置
// ==========================================
// 用途: 无数据库配置时使用（CLI 预检 / 测试）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticImportConfig {
    pub template_sheet_name: String,
    pub limits: ValidationLimits,
}

impl Default for StaticImportConfig {
    fn default() -> Self {
        Self {
            template_sheet_name: DEFAULT_TEMPLATE_SHEET_NAME.to_string(),
            limits: ValidationLimits::default(),
        }
    }
}

#[async_trait]
impl ImportConfigReader for StaticImportConfig {
    async fn get_template_sheet_name(&self) -> ConfigResult<String> {
        Ok(self.template_sheet_name.clone())
    }

    async fn get_location_max_chars(&self) -> ConfigResult<usize> {
        Ok(self.limits.location_max_chars)
    }

    async fn get_owner_name_max_chars(&self) -> ConfigResult<usize> {
        Ok(self.limits.owner_name_max_chars)
    }
}
