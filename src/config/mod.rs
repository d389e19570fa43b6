// ==========================================
// 固定资产导入校验 - 配置层
// ==========================================
// 职责: 模板名称与字段长度上限，支持 config_kv 覆写
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod import_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use import_config_trait::{
    ConfigResult, ImportConfigReader, StaticImportConfig, ValidationLimits,
    DEFAULT_LOCATION_MAX_CHARS, DEFAULT_OWNER_NAME_MAX_CHARS, DEFAULT_TEMPLATE_SHEET_NAME,
};
