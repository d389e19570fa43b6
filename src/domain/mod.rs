// ==========================================
// 固定资产导入校验 - 领域模型层
// ==========================================
// 职责: 定义资产类型、原始行、校验记录与解析结果
// 红线: 不含数据访问逻辑,不含校验规则
// ==========================================

pub mod building;
pub mod types;

// 重导出核心类型
pub use building::{
    ConstructionArea, IdentityKey, ParseOutcome, ParseSummary, RawRow, RowColumn,
    ValidatedRecord,
};
pub use types::AssetType;
