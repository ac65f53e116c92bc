//! Sweep lifecycle management.
//!
//! The scheduler owns the sweep jobs and their triggers. `start` spawns one loop per
//! job; every loop sleeps until its next fire, runs the job to completion and re-arms,
//! so a job never overlaps itself. `stop` halts all loops.

use super::trigger::Trigger;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Type alias for a single sweep run.
pub type SweepTask = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Builds one run of a sweep from the injected storage handle.
pub type SweepFn = Arc<dyn Fn(Arc<DatabaseConnection>) -> SweepTask + Send + Sync>;

#[derive(Clone)]
pub struct SweepJob {
    pub name: &'static str,
    pub trigger: Trigger,
    pub task: SweepFn,
}

impl SweepJob {
    pub fn new<F>(name: &'static str, trigger: Trigger, task: F) -> Self
    where
        F: Fn(Arc<DatabaseConnection>) -> SweepTask + Send + Sync + 'static,
    {
        Self {
            name,
            trigger,
            task: Arc::new(task),
        }
    }
}

impl std::fmt::Debug for SweepJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepJob")
            .field("name", &self.name)
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}

struct RunningJob {
    flag: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

pub struct SweepScheduler {
    jobs: Vec<SweepJob>,
    running: RwLock<HashMap<&'static str, RunningJob>>,
}

impl SweepScheduler {
    pub fn new(jobs: Vec<SweepJob>) -> Self {
        Self {
            jobs,
            running: RwLock::new(HashMap::new()),
        }
    }

    /// Arm every job. Jobs that are already running are left alone.
    #[tracing::instrument(skip_all)]
    pub async fn start(&self, db: Arc<DatabaseConnection>) {
        let mut running = self.running.write().await;
        for job in &self.jobs {
            if running.contains_key(job.name) {
                continue;
            }
            let flag = Arc::new(AtomicBool::new(true));
            let handle = tokio::spawn(run_job_loop(job.clone(), db.clone(), flag.clone()));
            running.insert(job.name, RunningJob { flag, handle });
            tracing::info!(
                name = "sweeps.scheduler.armed",
                target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
                job = job.name,
                trigger = ?job.trigger,
                message = "Sweep armed"
            );
        }
    }

    /// Whether the loop for `name` has been started and not stopped.
    pub async fn is_running(&self, name: &str) -> bool {
        let running = self.running.read().await;
        running
            .get(name)
            .is_some_and(|job| job.flag.load(Ordering::SeqCst) && !job.handle.is_finished())
    }

    /// Stops all running sweeps. A run in progress is cancelled at its next await point.
    #[tracing::instrument(skip(self))]
    pub async fn stop(&self) {
        let mut running = self.running.write().await;
        for (name, job) in running.drain() {
            job.flag.store(false, Ordering::SeqCst);
            job.handle.abort();
            tracing::info!(
                name = "sweeps.scheduler.stopped",
                target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
                job = name,
                message = "Sweep stopped"
            );
        }
    }
}

async fn run_job_loop(job: SweepJob, db: Arc<DatabaseConnection>, flag: Arc<AtomicBool>) {
    while flag.load(Ordering::SeqCst) {
        let Some(delay) = job.trigger.delay_from(OffsetDateTime::now_utc()) else {
            tracing::error!(
                name = "sweeps.scheduler.bad_trigger",
                target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
                job = job.name,
                trigger = ?job.trigger,
                message = "Trigger never fires; sweep disabled"
            );
            return;
        };
        tokio::time::sleep(delay).await;
        if !flag.load(Ordering::SeqCst) {
            break;
        }
        (job.task)(db.clone()).await;
    }
}
