// ==========================================
// 固定资产导入校验 - 已导入房产 Repository 实现
// ==========================================
// 职责: 实现 building_info 表数据访问（使用 rusqlite）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::db::{init_schema, open_sqlite_connection};
use crate::domain::{IdentityKey, ValidatedRecord};
use crate::repository::building_info_repo::BuildingInfoRepository;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// BuildingInfoRepositoryImpl
// ==========================================
pub struct BuildingInfoRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl BuildingInfoRepositoryImpl {
    /// 创建新的 Repository 实例（自动建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 在事务中批量插入
    fn batch_insert_tx(tx: &Transaction, records: &[ValidatedRecord]) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO building_info (
                type, area, building, unit, number, construction_area, move_in_at,
                owner_name, owner_idcard, owner_phone, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )?;

        let created_at = Utc::now().to_rfc3339();
        let mut count = 0;
        for record in records {
            stmt.execute(params![
                record.asset_type.code(),
                record.area,
                record.building,
                record.unit,
                record.number,
                record.construction_area.as_ref().and_then(|a| a.as_f64()),
                record.move_in_at,
                record.owner_name,
                record.owner_idcard,
                record.owner_phone,
                created_at,
            ])?;
            count += 1;
        }

        Ok(count)
    }
}

#[async_trait]
impl BuildingInfoRepository for BuildingInfoRepositoryImpl {
    /// 按识别键点查（可选分量使用 IS 比对 NULL）
    async fn exists(&self, key: &IdentityKey) -> RepositoryResult<bool> {
        let conn = self.lock()?;

        let found: Option<i64> = conn
            .query_row(
                r#"
                SELECT 1 FROM building_info
                WHERE type = ?1
                  AND area IS ?2
                  AND building IS ?3
                  AND unit IS ?4
                  AND number IS ?5
                LIMIT 1
                "#,
                params![
                    key.asset_type.code(),
                    key.area,
                    key.building,
                    key.unit,
                    key.number,
                ],
                |row| row.get(0),
            )
            .optional()?;

        Ok(found.is_some())
    }

    /// 批量写入（事务化）
    async fn batch_insert(&self, records: &[ValidatedRecord]) -> RepositoryResult<usize> {
        if let Some(bad) = records.iter().find(|r| {
            !r.is_valid()
                || r.number.is_none()
                || r.construction_area.as_ref().and_then(|a| a.as_f64()).is_none()
        }) {
            return Err(RepositoryError::BusinessRuleViolation(format!(
                "第 {} 行未通过校验，不能写入",
                bad.row_number
            )));
        }

        let conn = self.lock()?;
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let count = Self::batch_insert_tx(&tx, records)?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    async fn count(&self) -> RepositoryResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM building_info", [], |row| {
            row.get(0)
        })?;
        Ok(count as usize)
    }
}
