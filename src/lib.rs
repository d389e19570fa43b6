// ==========================================
// 固定资产导入校验 - 核心库
// ==========================================
// 技术栈: Rust + calamine + SQLite
// 系统定位: 导入预检 (只校验, 不写入)
// 输出: rightData (可导入) / errorData (附错误原因)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 资产类型与校验记录
pub mod domain;

// 数据仓储层 - 已导入数据查询
pub mod repository;

// 导入层 - 读表/分类/校验/分区
pub mod importer;

// 配置层 - 模板名称与字段上限
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AssetType, ConstructionArea, IdentityKey, ParseOutcome, ParseSummary, RawRow, RowColumn,
    ValidatedRecord,
};

// 导入
pub use importer::{BuildingParser, BuildingParserImpl, ImportError, ImportResult};

// 仓储
pub use repository::{BuildingInfoRepository, BuildingInfoRepositoryImpl};

// API
pub use api::{ApiError, BuildingParseResponse, ImportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "固定资产导入校验";
