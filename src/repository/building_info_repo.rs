// ==========================================
// 固定资产导入校验 - 已导入房产 Repository Trait
// ==========================================
// 职责: 重复数据判定（按识别键点查）与已校验数据落库
// 红线: Repository 不含业务规则，只做数据 CRUD
// 说明: 社区/租户范围由调用方负责（每个库只存一个社区）
// ==========================================

use crate::domain::{IdentityKey, ValidatedRecord};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// BuildingInfoRepository Trait
// ==========================================
// 用途: 重复数据查询（导入校验唯一的 I/O 点） + 协作方落库
// 实现者: BuildingInfoRepositoryImpl（使用 rusqlite）
#[async_trait]
pub trait BuildingInfoRepository: Send + Sync {
    /// 检查识别键是否已存在
    ///
    /// # 参数
    /// - key: (type, area, building, unit, number)，缺失分量按 NULL 比对
    ///
    /// # 返回
    /// - Ok(true): 已导入相同数据
    /// - Ok(false): 不存在
    /// - Err: 查询失败（调用方应中止整批）
    async fn exists(&self, key: &IdentityKey) -> RepositoryResult<bool>;

    /// 批量写入已通过校验的记录（事务化）
    ///
    /// # 返回
    /// - Ok(usize): 写入条数
    /// - Err: 含错误记录或数据库错误（整个事务回滚）
    async fn batch_insert(&self, records: &[ValidatedRecord]) -> RepositoryResult<usize>;

    /// 统计已导入记录数
    async fn count(&self) -> RepositoryResult<usize>;
}
