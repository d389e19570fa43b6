// ==========================================
// 固定资产导入校验 - 字段校验器实现
// ==========================================
// 职责: 对已分类的行执行全部字段规则（不短路），按规则顺序记录错误
// 规则顺序: 园区 → 栋 → 单元 → 门牌号(必填/长度) → 建筑面积 → 入住时间
//           → 业主信息完整性 → 业主姓名 → 身份证 → 手机号
// ==========================================

use crate::config::ValidationLimits;
use crate::domain::{AssetType, ConstructionArea, RawRow, RowColumn, ValidatedRecord};
use crate::importer::building_parser_trait::RowValidator;
use crate::importer::cell_parser::{
    is_mobile_phone, is_unsigned_integer, parse_construction_area, serial_to_epoch_millis,
};
use crate::importer::idcard;

pub const NUMBER_REQUIRED: &str = "「门牌号/编号」不能为空";
pub const CONSTRUCTION_AREA_INVALID: &str = "建筑面积错误";
pub const MOVE_IN_INVALID: &str = "入住时间错误";
pub const OWNER_INCOMPLETE: &str = "业主信息不完整";
pub const OWNER_IDCARD_INVALID: &str = "业主身份证错误";
pub const OWNER_PHONE_INVALID: &str = "业主手机号码错误";

/// 位置字段超长提示
pub fn location_too_long(field_label: &str, max_chars: usize) -> String {
    format!("「{}」字数超过{}个字", field_label, max_chars)
}

/// 业主姓名超长提示
pub fn owner_name_too_long(max_chars: usize) -> String {
    format!("业主姓名字数超过{}个字", max_chars)
}

pub struct FieldValidator {
    limits: ValidationLimits,
}

impl FieldValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// 按字符（非字节）计数
    fn exceeds(value: Option<&str>, max_chars: usize) -> bool {
        value.map_or(false, |v| v.chars().count() > max_chars)
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(ValidationLimits::default())
    }
}

impl RowValidator for FieldValidator {
    fn validate(&self, asset_type: AssetType, row: &RawRow) -> ValidatedRecord {
        let area = row.cell(RowColumn::Area);
        let building = row.cell(RowColumn::Building);
        let unit = row.cell(RowColumn::Unit);
        let number = row.cell(RowColumn::Number);
        let construction_area_raw = row.cell(RowColumn::ConstructionArea);
        let move_in_raw = row.cell(RowColumn::MoveInSerial);
        let owner_name = row.cell(RowColumn::OwnerName);
        let owner_idcard = row.cell(RowColumn::OwnerIdcard);
        let owner_phone = row.cell(RowColumn::OwnerPhone);

        let location_max = self.limits.location_max_chars;
        let mut errors = Vec::new();

        // ===== 位置字段 =====
        if Self::exceeds(area, location_max) {
            errors.push(location_too_long("园区编号/建筑商开发期数", location_max));
        }
        if Self::exceeds(building, location_max) {
            errors.push(location_too_long("栋", location_max));
        }
        if Self::exceeds(unit, location_max) {
            errors.push(location_too_long("单元/区域", location_max));
        }
        if number.is_none() {
            errors.push(NUMBER_REQUIRED.to_string());
        }
        if Self::exceeds(number, location_max) {
            errors.push(location_too_long("门牌号/编号", location_max));
        }

        // ===== 建筑面积 =====
        let measured_area = construction_area_raw.and_then(parse_construction_area);
        if measured_area.is_none() {
            errors.push(CONSTRUCTION_AREA_INVALID.to_string());
        }
        let construction_area = construction_area_raw.map(|raw| match measured_area {
            Some(v) => ConstructionArea::Measured(v),
            None => ConstructionArea::Unparsed(raw.to_string()),
        });

        // ===== 入住时间 =====
        // 换算总是执行，只有纯数字时才采用换算结果
        let move_in_at = move_in_raw.and_then(|raw| {
            let converted = serial_to_epoch_millis(raw);
            match converted {
                Some(millis) if is_unsigned_integer(raw) => Some(millis),
                _ => {
                    errors.push(MOVE_IN_INVALID.to_string());
                    None
                }
            }
        });

        // ===== 业主信息（全有或全无）=====
        let owner_present = [owner_name, owner_idcard, owner_phone]
            .iter()
            .filter(|v| v.is_some())
            .count();
        if owner_present > 0 && owner_present < 3 {
            errors.push(OWNER_INCOMPLETE.to_string());
        }

        if let (Some(name), Some(idcard_no), Some(phone)) = (owner_name, owner_idcard, owner_phone)
        {
            if Self::exceeds(Some(name), self.limits.owner_name_max_chars) {
                errors.push(owner_name_too_long(self.limits.owner_name_max_chars));
            }
            if !idcard::verify(idcard_no) {
                errors.push(OWNER_IDCARD_INVALID.to_string());
            }
            if !is_mobile_phone(phone) {
                errors.push(OWNER_PHONE_INVALID.to_string());
            }
        }

        ValidatedRecord {
            row_number: row.row_number,
            asset_type,
            area: area.map(str::to_string),
            building: building.map(str::to_string),
            unit: unit.map(str::to_string),
            number: number.map(str::to_string),
            construction_area,
            move_in_at,
            owner_name: owner_name.map(str::to_string),
            owner_idcard: owner_idcard.map(str::to_string),
            owner_phone: owner_phone.map(str::to_string),
            errors,
        }
    }
}
