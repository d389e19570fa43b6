// ==========================================
// 固定资产导入校验 - 房产领域模型
// ==========================================
// 原始行: 模板「固定资产数据」中的一行（按列位置取值）
// 校验记录: 分类 + 字段校验 + 重复检查后的输出单元
// ==========================================

use crate::domain::types::AssetType;
use serde::{Deserialize, Serialize};

// ==========================================
// RowColumn - 模板列位置
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowColumn {
    TypeLabel = 0,        // 类型
    Area = 1,             // 园区编号/建筑商开发期数
    Building = 2,         // 栋
    Unit = 3,             // 单元/区域
    Number = 4,           // 门牌号/编号
    ConstructionArea = 5, // 建筑面积
    MoveInSerial = 6,     // 入住时间（表格日期序列号）
    OwnerName = 7,        // 业主姓名
    OwnerIdcard = 8,      // 业主身份证
    OwnerPhone = 9,       // 业主手机号码
}

impl RowColumn {
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ==========================================
// RawRow - 原始行
// ==========================================
// 所有单元格一律视为文本；空白单元格视为缺失
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub row_number: usize, // 表格行号（从 1 开始）
    cells: Vec<Option<String>>,
}

impl RawRow {
    /// 创建原始行（TRIM + 空值标准化）
    pub fn new(row_number: usize, cells: Vec<Option<String>>) -> Self {
        let cells = cells
            .into_iter()
            .map(|cell| {
                cell.map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
            })
            .collect();

        Self { row_number, cells }
    }

    /// 由文本切片创建原始行（空字符串视为缺失）
    pub fn from_strs(row_number: usize, cells: &[&str]) -> Self {
        Self::new(
            row_number,
            cells.iter().map(|c| Some(c.to_string())).collect(),
        )
    }

    /// 读取指定列的值；列不存在或为空时返回 None
    pub fn cell(&self, column: RowColumn) -> Option<&str> {
        self.cells
            .get(column.index())
            .and_then(|c| c.as_deref())
    }

    /// 是否所有单元格均为空
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

// ==========================================
// IdentityKey - 房产识别键
// ==========================================
// (type, area, building, unit, number)，仅用于与已落库数据比对
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityKey {
    pub asset_type: AssetType,
    pub area: Option<String>,
    pub building: Option<String>,
    pub unit: Option<String>,
    pub number: Option<String>,
}

impl IdentityKey {
    pub fn new(
        asset_type: AssetType,
        area: Option<&str>,
        building: Option<&str>,
        unit: Option<&str>,
        number: Option<&str>,
    ) -> Self {
        Self {
            asset_type,
            area: area.map(str::to_string),
            building: building.map(str::to_string),
            unit: unit.map(str::to_string),
            number: number.map(str::to_string),
        }
    }
}

// ==========================================
// ConstructionArea - 建筑面积
// ==========================================
// 校验通过时为数值；否则原样保留文本，不做转换
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstructionArea {
    Measured(f64),
    Unparsed(String),
}

impl ConstructionArea {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConstructionArea::Measured(v) => Some(*v),
            ConstructionArea::Unparsed(_) => None,
        }
    }
}

// ==========================================
// ValidatedRecord - 校验记录
// ==========================================
// 不变式: errors 为空 ⟺ 属于 rightData
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub row_number: usize,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub area: Option<String>,
    pub building: Option<String>,
    pub unit: Option<String>,
    pub number: Option<String>,
    pub construction_area: Option<ConstructionArea>,
    pub move_in_at: Option<i64>, // Unix 毫秒
    pub owner_name: Option<String>,
    pub owner_idcard: Option<String>,
    pub owner_phone: Option<String>,
    pub errors: Vec<String>,
}

impl ValidatedRecord {
    /// 识别键
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::new(
            self.asset_type,
            self.area.as_deref(),
            self.building.as_deref(),
            self.unit.as_deref(),
            self.number.as_deref(),
        )
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

// ==========================================
// ParseSummary - 解析汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSummary {
    pub batch_id: String,
    pub total_rows: usize,     // 送入分类器的行数
    pub discarded_rows: usize, // 未识别类型被丢弃的行数
    pub right_rows: usize,
    pub error_rows: usize,
    pub elapsed_ms: u64,
}

// ==========================================
// ParseOutcome - 解析结果（两个有序分区）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub right_data: Vec<ValidatedRecord>,
    pub error_data: Vec<ValidatedRecord>,
    pub summary: ParseSummary,
}

impl ParseOutcome {
    /// 按 errors 是否为空划分，保持原始行序
    pub fn partition(
        batch_id: String,
        total_rows: usize,
        records: Vec<ValidatedRecord>,
        elapsed_ms: u64,
    ) -> Self {
        let classified = records.len();
        let (right_data, error_data): (Vec<_>, Vec<_>) =
            records.into_iter().partition(ValidatedRecord::is_valid);

        let summary = ParseSummary {
            batch_id,
            total_rows,
            discarded_rows: total_rows.saturating_sub(classified),
            right_rows: right_data.len(),
            error_rows: error_data.len(),
            elapsed_ms,
        };

        Self {
            right_data,
            error_data,
            summary,
        }
    }
}
