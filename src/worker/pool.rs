use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{Id, JoinSet};
use tracing::{debug, info, warn};
use crate::core::{ConversionResult, ConversionTask, TaskOutcome};
use crate::utils::{OptimizerError, OptimizerResult};

/// Fixed-size pool running conversions on the blocking thread pool.
///
/// `job` is the per-task body, normally [`ImageConverter::convert`]. At most
/// `worker_count` jobs are in flight at once. Outcomes are reported in
/// completion order; a failing or panicking task is reported and skipped
/// without affecting the others.
///
/// [`ImageConverter::convert`]: crate::processing::ImageConverter::convert
pub struct WorkerPool<J> {
    job: Arc<J>,
    semaphore: Arc<Semaphore>,
    worker_count: usize,
}

impl<J> WorkerPool<J>
where
    J: Fn(&ConversionTask) -> OptimizerResult<ConversionResult> + Send + Sync + 'static,
{
    pub fn new(job: J, worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        Self {
            job: Arc::new(job),
            semaphore: Arc::new(Semaphore::new(worker_count)),
            worker_count,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Runs every task and returns the successful results once the pool has
    /// drained. `on_complete` sees each outcome as soon as it lands.
    pub async fn run(
        &self,
        tasks: Vec<ConversionTask>,
        mut on_complete: impl FnMut(&TaskOutcome),
    ) -> Vec<ConversionResult> {
        let total = tasks.len();
        info!("Dispatching {} tasks across {} workers", total, self.worker_count);

        let mut in_flight = JoinSet::new();
        let mut pending: HashMap<Id, ConversionTask> = HashMap::with_capacity(total);

        for task in tasks {
            let job = Arc::clone(&self.job);
            let semaphore = Arc::clone(&self.semaphore);
            let worker_task = task.clone();

            let handle = in_flight.spawn(async move {
                let permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => return Err(OptimizerError::worker(format!("Failed to acquire worker: {}", e))),
                };
                debug!("Worker acquired for {}", worker_task.input_path.display());

                let joined = tokio::task::spawn_blocking(move || {
                    let _permit = permit;
                    job(&worker_task)
                })
                .await;

                match joined {
                    Ok(result) => result,
                    // Surface the panic on this task so the drain loop attributes it
                    Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
                    Err(e) => Err(OptimizerError::from(e)),
                }
            });
            pending.insert(handle.id(), task);
        }

        let mut results = Vec::with_capacity(total);
        let mut failed = 0usize;

        while let Some(joined) = in_flight.join_next_with_id().await {
            let (id, result) = match joined {
                Ok((id, result)) => (id, result),
                Err(e) => (e.id(), Err(OptimizerError::from(e))),
            };

            let Some(task) = pending.remove(&id) else {
                warn!("Completion for unknown worker task {}", id);
                failed += 1;
                continue;
            };

            let outcome = TaskOutcome { task, result };
            on_complete(&outcome);

            match outcome.result {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Error processing {}: {}", outcome.task.input_path.display(), e);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            warn!("Pool drained: {} succeeded, {} failed out of {}", results.len(), failed, total);
        } else {
            info!("Pool drained: {} tasks completed successfully", results.len());
        }

        results
    }
}
