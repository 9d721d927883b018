//! Concurrent fan-out across all registered entities
//!
//! One task per entity, every task sharing a single absolute deadline. The
//! scheduler collects whichever results land in time, in registry order, and
//! never lets one slow or failing entity abort its siblings.

use crate::search::config::SearchConfig;
use crate::search::error::SearchError;
use crate::search::executor::QueryExecutor;
use crate::search::registry::{ModelDescriptor, SearchRegistry};
use crate::search::results::ModelResult;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// What one fan-out produced
#[derive(Debug)]
pub struct FanOutOutcome {
    /// Completed per-model results paired with their descriptors, in
    /// registry order
    pub completed: Vec<(Arc<ModelDescriptor>, ModelResult)>,

    /// True iff at least one task was cancelled by the deadline
    pub is_timeout: bool,

    /// Wall-clock for the whole fan-out
    pub elapsed_time_ms: u64,
}

/// Dispatches one query executor per registered entity under one deadline
#[derive(Clone)]
pub struct FanOutScheduler {
    executor: QueryExecutor,
    cancellation_grace: Duration,
}

impl FanOutScheduler {
    pub fn new(executor: QueryExecutor, config: &SearchConfig) -> Self {
        Self {
            executor,
            cancellation_grace: Duration::from_millis(config.cancellation_grace_ms),
        }
    }

    /// Run the fan-out for `query` against every entity in `registry`
    ///
    /// Every task receives the same absolute deadline `start + global_timeout`,
    /// so a model that starts late still shares the cutoff. The scheduler
    /// itself waits at most until the deadline plus a short grace period for
    /// cancellation acknowledgment; tasks still pending at that hard stop are
    /// aborted and their eventual results discarded.
    pub async fn run(
        &self,
        query: &str,
        registry: &SearchRegistry,
        global_timeout: Duration,
        per_model_cap: usize,
    ) -> FanOutOutcome {
        let start = tokio::time::Instant::now();
        let deadline = start + global_timeout;

        let descriptors = registry.all();
        let mut slots: Vec<Option<ModelResult>> = descriptors.iter().map(|_| None).collect();
        let mut is_timeout = false;

        let mut tasks = FuturesUnordered::new();
        let mut abort_handles = Vec::with_capacity(descriptors.len());
        for (idx, descriptor) in descriptors.iter().enumerate() {
            let executor = self.executor.clone();
            let descriptor = Arc::clone(descriptor);
            let query = query.to_string();
            let cap = descriptor.result_cap.unwrap_or(per_model_cap);

            debug!(model = %descriptor.model_name, cap, "Dispatching model query");
            let handle = tokio::spawn(async move {
                let outcome = executor.execute(&descriptor, &query, cap, deadline).await;
                (idx, descriptor, outcome)
            });
            abort_handles.push(handle.abort_handle());
            tasks.push(handle);
        }

        let hard_stop = tokio::time::sleep_until(deadline + self.cancellation_grace);
        tokio::pin!(hard_stop);

        loop {
            tokio::select! {
                joined = tasks.next() => match joined {
                    Some(Ok((idx, _, Ok(result)))) => {
                        slots[idx] = Some(result);
                    }
                    Some(Ok((_, descriptor, Err(SearchError::Timeout { .. })))) => {
                        is_timeout = true;
                        warn!(model = %descriptor.model_name, "Model query hit the deadline, dropped");
                    }
                    Some(Ok((_, descriptor, Err(err)))) => {
                        warn!(model = %descriptor.model_name, error = %err, "Model query failed, dropped");
                    }
                    Some(Err(join_err)) => {
                        // A panicking entity is isolated exactly like a failing one
                        warn!(error = %join_err, "Model query task did not complete");
                    }
                    None => break,
                },
                _ = &mut hard_stop => {
                    is_timeout = true;
                    warn!("Fan-out hard stop reached, abandoning unfinished model queries");
                    for handle in &abort_handles {
                        handle.abort();
                    }
                    break;
                }
            }
        }

        let completed = descriptors
            .iter()
            .zip(slots)
            .filter_map(|(descriptor, slot)| slot.map(|result| (Arc::clone(descriptor), result)))
            .collect();

        FanOutOutcome {
            completed,
            is_timeout,
            elapsed_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
