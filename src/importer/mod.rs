// ==========================================
// 固定资产导入校验 - 导入层
// ==========================================
// 职责: 模板工作表读取、行分类、字段校验、重复检查、分区
// 支持: Excel (.xlsx/.xlsm/.xls) / ODS
// ==========================================

// 模块声明
pub mod building_parser_impl;
pub mod building_parser_trait;
pub mod cell_parser;
pub mod classifier;
pub mod error;
pub mod field_validator;
pub mod file_parser;
pub mod idcard;

// 重导出核心类型
pub use building_parser_impl::{BuildingParserImpl, DUPLICATE_DATA};
pub use classifier::LabelClassifier;
pub use error::{ImportError, ImportResult};
pub use field_validator::FieldValidator;
pub use file_parser::ExcelSheetParser;

// 重导出 Trait 接口
pub use building_parser_trait::{BuildingParser, RowClassifier, RowValidator, SheetParser};
