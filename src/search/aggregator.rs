//! Folds flat per-model results into the grouped global response

use crate::search::results::{AppResult, GlobalResult};
use crate::search::scheduler::FanOutOutcome;

/// Group registry-ordered model results by owning app
///
/// Zero-item models are dropped, and an app left with no models is dropped
/// with them; apps keep their first-seen order, which equals registry order.
/// The top-level elapsed time is the scheduler's wall-clock for the whole
/// fan-out, not a sum of per-model times.
pub fn aggregate(outcome: FanOutOutcome) -> GlobalResult {
    let mut apps: Vec<AppResult> = Vec::new();

    for (descriptor, result) in outcome.completed {
        if result.is_empty() {
            continue;
        }

        match apps
            .iter_mut()
            .find(|app| app.app_label == descriptor.app_label)
        {
            Some(app) => app.models.push(result),
            None => apps.push(AppResult {
                app_label: descriptor.app_label.clone(),
                app_verbose_name: descriptor.app_verbose_name.clone(),
                models: vec![result],
            }),
        }
    }

    GlobalResult {
        apps,
        elapsed_time_ms: outcome.elapsed_time_ms,
        is_timeout: outcome.is_timeout,
    }
}
