// ==========================================
// 固定资产导入校验 - 分类器
// ==========================================
// 规则: 标签精确匹配（区分大小写），不做模糊/本地化处理
// 未识别标签视为表头/表尾等装饰行，直接丢弃
// ==========================================

use crate::domain::AssetType;
use crate::importer::building_parser_trait::RowClassifier;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static LABEL_TABLE: Lazy<HashMap<&'static str, AssetType>> = Lazy::new(|| {
    AssetType::ALL
        .iter()
        .map(|asset_type| (asset_type.label(), *asset_type))
        .collect()
});

pub struct LabelClassifier;

impl RowClassifier for LabelClassifier {
    fn classify(&self, label: Option<&str>) -> Option<AssetType> {
        label.and_then(|l| LABEL_TABLE.get(l).copied())
    }
}
