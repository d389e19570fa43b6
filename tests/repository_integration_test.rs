// ==========================================
// Repository 层集成测试
// ==========================================
// 测试目标: SQLite 已导入数据 → 重复检查 → 分区；配置覆写
// ==========================================

mod test_helpers;

use building_asset_import::config::{config_keys, ConfigManager, ImportConfigReader};
use building_asset_import::domain::{AssetType, IdentityKey};
use building_asset_import::importer::*;
use building_asset_import::logging;
use building_asset_import::repository::{BuildingInfoRepository, BuildingInfoRepositoryImpl};
use test_helpers::{create_test_db, imported_record, row};

/// 创建连接测试数据库的解析器
async fn create_test_parser(
    db_path: &str,
) -> BuildingParserImpl<BuildingInfoRepositoryImpl, ConfigManager> {
    let repo = BuildingInfoRepositoryImpl::new(db_path).expect("Failed to create building repo");
    let config = ConfigManager::new(db_path).expect("Failed to create config");

    BuildingParserImpl::from_config(repo, config)
        .await
        .expect("Failed to create parser")
}

// ==========================================
// 测试用例
// ==========================================

#[tokio::test]
async fn test_persisted_records_are_detected_as_duplicates() {
    logging::init_test();
    let (_temp_file, db_path) = create_test_db().unwrap();

    let repo = BuildingInfoRepositoryImpl::new(&db_path).unwrap();
    let inserted = repo
        .batch_insert(&[
            imported_record(AssetType::House, Some("一期"), Some("1栋"), Some("1单元"), "0101"),
            imported_record(AssetType::Carport, None, None, None, "B-01"),
        ])
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    let parser = create_test_parser(&db_path).await;
    let outcome = parser
        .parse_rows(vec![
            row(2, &["住宅", "一期", "1栋", "1单元", "0101", "89"]),
            row(3, &["住宅", "一期", "1栋", "1单元", "0102", "89"]),
            row(4, &["车位", "", "", "", "B-01", "12"]),
            // 缺失列与已导入的缺失列匹配；有值则不匹配
            row(5, &["车位", "地下一层", "", "", "B-01", "12"]),
        ])
        .await
        .unwrap();

    let right: Vec<usize> = outcome.right_data.iter().map(|r| r.row_number).collect();
    let error: Vec<usize> = outcome.error_data.iter().map(|r| r.row_number).collect();
    assert_eq!(right, vec![3, 5]);
    assert_eq!(error, vec![2, 4]);
    for record in &outcome.error_data {
        assert_eq!(record.errors, vec![DUPLICATE_DATA.to_string()]);
    }
}

#[tokio::test]
async fn test_preview_does_not_write() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let parser = create_test_parser(&db_path).await;

    let outcome = parser
        .parse_rows(vec![row(2, &["商户", "", "", "", "S-01", "100"])])
        .await
        .unwrap();
    assert_eq!(outcome.right_data.len(), 1);

    let repo = BuildingInfoRepositoryImpl::new(&db_path).unwrap();
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_committed_right_data_is_duplicate_on_reimport() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let rows = vec![
        row(2, &["仓房（仓库）", "", "A栋", "", "W-01", "6.5"]),
        row(3, &["车库", "", "", "", "G-01", "0"]),
    ];

    let parser = create_test_parser(&db_path).await;
    let first = parser.parse_rows(rows.clone()).await.unwrap();
    assert_eq!(first.right_data.len(), 1);
    assert_eq!(first.error_data.len(), 1);

    let repo = BuildingInfoRepositoryImpl::new(&db_path).unwrap();
    assert_eq!(repo.batch_insert(&first.right_data).await.unwrap(), 1);

    let second = parser.parse_rows(rows).await.unwrap();
    assert!(second.right_data.is_empty());
    assert_eq!(second.error_data.len(), 2);
    assert_eq!(
        second.error_data[0].errors,
        vec![DUPLICATE_DATA.to_string()]
    );
    assert_eq!(
        second.error_data[1].errors,
        vec!["建筑面积错误".to_string()]
    );
}

#[tokio::test]
async fn test_exists_uses_null_aware_matching() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let repo = BuildingInfoRepositoryImpl::new(&db_path).unwrap();
    repo.batch_insert(&[imported_record(
        AssetType::Garage,
        None,
        Some("3栋"),
        None,
        "G-12",
    )])
    .await
    .unwrap();

    let same = IdentityKey::new(AssetType::Garage, None, Some("3栋"), None, Some("G-12"));
    let other_unit = IdentityKey::new(AssetType::Garage, None, Some("3栋"), Some("1"), Some("G-12"));
    let other_type = IdentityKey::new(AssetType::Carport, None, Some("3栋"), None, Some("G-12"));

    assert!(repo.exists(&same).await.unwrap());
    assert!(!repo.exists(&other_unit).await.unwrap());
    assert!(!repo.exists(&other_type).await.unwrap());
}

#[tokio::test]
async fn test_config_overrides_validation_limits() {
    let (_temp_file, db_path) = create_test_db().unwrap();

    let config = ConfigManager::new(&db_path).unwrap();
    config
        .set_global_config_value(config_keys::LOCATION_MAX_CHARS, "3")
        .unwrap();
    config
        .set_global_config_value(config_keys::OWNER_NAME_MAX_CHARS, "not-a-number")
        .unwrap();

    let limits = config.load_validation_limits().await.unwrap();
    assert_eq!(limits.location_max_chars, 3);
    assert_eq!(limits.owner_name_max_chars, 12);

    let parser = create_test_parser(&db_path).await;
    let outcome = parser
        .parse_rows(vec![
            row(2, &["住宅", "", "十二号楼", "", "101", "60"]),
            row(3, &["住宅", "", "十二号楼", "", "0101", "60"]),
            row(4, &["住宅", "", "3栋", "", "102", "60"]),
        ])
        .await
        .unwrap();

    assert_eq!(
        outcome.error_data[0].errors,
        vec!["「栋」字数超过3个字".to_string()]
    );
    // 门牌号同样受位置字段上限约束
    assert_eq!(
        outcome.error_data[1].errors,
        vec![
            "「栋」字数超过3个字".to_string(),
            "「门牌号/编号」字数超过3个字".to_string(),
        ]
    );
    assert_eq!(outcome.right_data.len(), 1);
    assert_eq!(outcome.right_data[0].row_number, 4);
}

#[tokio::test]
async fn test_template_sheet_name_override() {
    let (_temp_file, db_path) = create_test_db().unwrap();

    let config = ConfigManager::new(&db_path).unwrap();
    assert_eq!(config.get_template_sheet_name().await.unwrap(), "固定资产数据");

    config
        .set_global_config_value(config_keys::TEMPLATE_SHEET_NAME, "资产清单")
        .unwrap();
    assert_eq!(config.get_template_sheet_name().await.unwrap(), "资产清单");
}
