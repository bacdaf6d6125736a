//! 批次提交协调器 - 编排层
//!
//! ## 职责
//!
//! 1. **任务构造**：新建文件（最多一个）+ 每个上传候选一个任务，按选择顺序
//! 2. **并发执行**：在当前任务上用 `join_all` 同时推进全部任务，只重叠 I/O
//! 3. **并发控制**：使用 Semaphore 限制同时进行的任务数量
//! 4. **结果汇总**：等待全部任务结束（不提前中止），收集成功与失败
//!
//! 本模块不修改表单状态，也不调用宿主；这些由 `AddFileDialog` 负责。

use crate::infrastructure::FileStore;
use crate::models::{BatchReport, SubmissionBatch};
use crate::utils::logging::{log_batch_complete, log_batch_start};
use crate::workflow::{named_file_task, upload_task, SubmitCtx, TaskResult};
use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use tokio::sync::Semaphore;

/// 执行一个批次并汇总结果
///
/// 单个任务的失败不会影响其他任务，返回的报告保持任务构造顺序。
pub async fn run_batch(
    store: &dyn FileStore,
    ctx: &SubmitCtx,
    batch: SubmissionBatch,
    max_concurrent: usize,
) -> BatchReport {
    log_batch_start(ctx, batch.pending.as_ref().map(|p| p.name()), batch.uploads.len());

    let semaphore = Semaphore::new(max_concurrent.max(1));
    let limiter = &semaphore;

    let mut tasks: Vec<BoxFuture<'_, TaskResult>> = Vec::with_capacity(batch.len());

    if let Some(pending) = batch.pending {
        tasks.push(
            async move {
                // 信号量只在本函数内存在，不会被关闭
                let _permit = limiter.acquire().await.ok();
                named_file_task(store, ctx, pending).await
            }
            .boxed(),
        );
    }

    for candidate in batch.uploads {
        tasks.push(
            async move {
                let _permit = limiter.acquire().await.ok();
                upload_task(store, ctx, candidate).await
            }
            .boxed(),
        );
    }

    // 等待全部任务结束
    let mut report = BatchReport::default();
    for result in join_all(tasks).await {
        match result {
            Ok(name) => report.created.push(name),
            Err(failure) => report.failures.push(failure),
        }
    }

    log_batch_complete(ctx, &report);
    report
}
