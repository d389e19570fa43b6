// ==========================================
// 固定资产导入校验 - 领域类型定义
// ==========================================
// 资产类型: 住宅 / 车位 / 仓房（仓库） / 商户 / 车库
// 序列化格式: SCREAMING_SNAKE_CASE；落库使用数值编码
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 资产类型 (Asset Type)
// ==========================================
// 每个类型绑定唯一的模板分类标签（精确匹配，区分大小写）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    House,     // 住宅
    Carport,   // 车位
    Warehouse, // 仓房（仓库）
    Merchant,  // 商户
    Garage,    // 车库
}

impl AssetType {
    /// 全部资产类型（按编码顺序）
    pub const ALL: [AssetType; 5] = [
        AssetType::House,
        AssetType::Carport,
        AssetType::Warehouse,
        AssetType::Merchant,
        AssetType::Garage,
    ];

    /// 模板中的分类标签
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::House => "住宅",
            AssetType::Carport => "车位",
            AssetType::Warehouse => "仓房（仓库）",
            AssetType::Merchant => "商户",
            AssetType::Garage => "车库",
        }
    }

    /// 落库编码（building_info.type）
    pub fn code(&self) -> i64 {
        match self {
            AssetType::House => 1,
            AssetType::Carport => 2,
            AssetType::Warehouse => 3,
            AssetType::Merchant => 4,
            AssetType::Garage => 5,
        }
    }

    /// 由落库编码还原
    pub fn from_code(code: i64) -> Option<Self> {
        AssetType::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetType::House => write!(f, "HOUSE"),
            AssetType::Carport => write!(f, "CARPORT"),
            AssetType::Warehouse => write!(f, "WAREHOUSE"),
            AssetType::Merchant => write!(f, "MERCHANT"),
            AssetType::Garage => write!(f, "GARAGE"),
        }
    }
}
