//! 项目存储接口 - 基础设施层

use crate::error::StoreError;
use crate::models::FileContent;
use async_trait::async_trait;

/// 项目文件存储
///
/// 职责：
/// - 在指定项目中创建文件
/// - 不认识批次、表单或题目流程
#[async_trait]
pub trait FileStore: Send + Sync {
    /// 在 `project_id` 中的 `path`（形如 `question/file`）创建文件
    async fn create_file(
        &self,
        project_id: &str,
        path: &str,
        content: FileContent,
    ) -> Result<(), StoreError>;
}
