//! Fixed-size pool of asynchronous workers.
//!
//! Workers share one unbounded queue. Submitting a job never waits for a free
//! worker; the caller gets a [`WorkerHandle`] that resolves once the job has
//! run. A panicking job is caught and reported through its handle, and the
//! worker that ran it keeps serving the queue.

use futures::FutureExt;
use futures::future::{BoxFuture, join_all};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

type Job = BoxFuture<'static, ()>;

/// Errors reported by the worker pool
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// The pool no longer accepts work
    #[error("worker pool is shut down")]
    Closed,
    /// The job panicked
    #[error("job panicked: {0}")]
    Panicked(String),
    /// The job was dropped before it produced a result
    #[error("job was dropped before completion")]
    Dropped,
}

/// Pending result of a submitted job
#[derive(Debug)]
pub struct WorkerHandle<T> {
    rx: oneshot::Receiver<Result<T, PoolError>>,
}

impl<T> WorkerHandle<T> {
    /// Wait for the job to finish
    pub async fn join(self) -> Result<T, PoolError> {
        match self.rx.await {
            Ok(result) => result,
            Err(_) => Err(PoolError::Dropped),
        }
    }
}

/// A fixed number of long-lived workers pulling jobs from a shared queue
pub struct WorkerPool {
    sender: RwLock<Option<mpsc::UnboundedSender<Job>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    size: usize,
}

impl WorkerPool {
    /// Start `size` workers on the current Tokio runtime.
    ///
    /// A size of zero is raised to one.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        let (tx, rx) = mpsc::unbounded_channel::<Job>();
        let rx = Arc::new(tokio::sync::Mutex::new(rx));

        let workers = (0..size)
            .map(|worker_id| tokio::spawn(worker_loop(worker_id, Arc::clone(&rx))))
            .collect();

        info!("Worker pool started with {} workers", size);

        Self {
            sender: RwLock::new(Some(tx)),
            workers: Mutex::new(workers),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_running(&self) -> bool {
        self.sender.read().is_some()
    }

    /// Queue a job for execution.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Closed`] once the pool has been shut down.
    pub fn submit<F, T>(&self, job: F) -> Result<WorkerHandle<T>, PoolError>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let job: Job = Box::pin(async move {
            let result = AssertUnwindSafe(job)
                .catch_unwind()
                .await
                .map_err(|panic| PoolError::Panicked(panic_message(panic.as_ref())));
            // The submitter may have stopped waiting
            let _ = tx.send(result);
        });

        let guard = self.sender.read();
        let sender = guard.as_ref().ok_or(PoolError::Closed)?;
        sender.send(job).map_err(|_| PoolError::Closed)?;

        Ok(WorkerHandle { rx })
    }

    /// Stop accepting work, let the workers drain the queue, and wait for them.
    pub async fn shutdown(&self) {
        if self.sender.write().take().is_none() {
            return;
        }

        let workers = std::mem::take(&mut *self.workers.lock());
        debug!("Waiting for {} workers to drain the queue", workers.len());
        join_all(workers).await;

        info!("Worker pool shut down");
    }

    /// Stop accepting work and cancel every queued and running job.
    pub async fn abort(&self) {
        self.sender.write().take();

        let workers = std::mem::take(&mut *self.workers.lock());
        for worker in &workers {
            worker.abort();
        }
        join_all(workers).await;

        info!("Worker pool aborted");
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("size", &self.size)
            .field("running", &self.is_running())
            .finish()
    }
}

async fn worker_loop(
    worker_id: usize,
    rx: Arc<tokio::sync::Mutex<mpsc::UnboundedReceiver<Job>>>,
) {
    trace!("Worker {worker_id} started");

    loop {
        let job = rx.lock().await.recv().await;
        match job {
            Some(job) => job.await,
            None => break,
        }
    }

    trace!("Worker {worker_id} stopped");
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
