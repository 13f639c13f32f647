//! Process-wide scheduler handle.
//!
//! `Scheduler::start` spawns one tokio task per job when jobs are enabled and
//! returns a no-op handle otherwise. `shutdown` stops the tasks through a
//! watch channel and waits for them; a run in progress finishes first.

use std::sync::Arc;
use std::time::Instant;

use futures_util::future::join_all;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::Job;
use crate::app_state::AppState;

pub enum Scheduler {
    Running {
        shutdown: watch::Sender<bool>,
        tasks: Vec<JoinHandle<()>>,
    },
    Noop,
}

impl Scheduler {
    pub fn start(enabled: bool, jobs: Vec<Arc<dyn Job>>, state: AppState) -> Self {
        if !enabled {
            tracing::info!("background jobs disabled, scheduler not started");
            return Self::Noop;
        }

        let (shutdown, rx) = watch::channel(false);
        let tasks = jobs
            .into_iter()
            .map(|job| {
                tracing::info!(job = job.name(), interval_secs = job.interval().as_secs(), "scheduling job");
                tokio::spawn(run_job(job, state.clone(), rx.clone()))
            })
            .collect();

        Self::Running { shutdown, tasks }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    pub fn job_count(&self) -> usize {
        match self {
            Self::Running { tasks, .. } => tasks.len(),
            Self::Noop => 0,
        }
    }

    pub async fn shutdown(self) {
        let Self::Running { shutdown, tasks } = self else {
            return;
        };

        let _ = shutdown.send(true);
        for res in join_all(tasks).await {
            if let Err(e) = res {
                tracing::warn!(error = %e, "job task ended abnormally");
            }
        }
        tracing::info!("scheduler stopped");
    }
}

async fn run_job(job: Arc<dyn Job>, state: AppState, mut stop: watch::Receiver<bool>) {
    let mut tick = tokio::time::interval(job.interval());
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            // sender dropped counts as shutdown too
            _ = stop.changed() => break,

            _ = tick.tick() => {
                let started = Instant::now();
                let res = job.run(&state).await;
                let metrics = state.metrics();
                metrics.job_duration.observe(&[("job", job.name())], started.elapsed());

                match res {
                    Ok(()) => metrics.job_runs.inc(&[("job", job.name()), ("outcome", "ok")]),
                    Err(e) => {
                        // retried on the next tick
                        metrics.job_runs.inc(&[("job", job.name()), ("outcome", "error")]);
                        tracing::warn!(job = job.name(), error = %e, "job run failed");
                    }
                }
            }
        }
    }

    tracing::debug!(job = job.name(), "job stopped");
}
