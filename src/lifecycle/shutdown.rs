//! In-process shutdown trigger.

use tokio::sync::broadcast;

/// Owner side of the shutdown broadcast.
///
/// Dropping it releases every listener, so keep it alive for as long as
/// the servers holding its listeners should run.
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

/// One server's view of the shutdown broadcast.
#[derive(Debug)]
pub struct ShutdownListener {
    rx: broadcast::Receiver<()>,
}

impl ShutdownListener {
    /// Resolves on `Shutdown::trigger` or when the `Shutdown` is dropped.
    pub async fn wait(mut self) {
        let _ = self.rx.recv().await;
    }
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    pub fn trigger(&self) {
        // Err only means nobody is listening.
        let _ = self.tx.send(());
    }

    /// Listeners not yet consumed by `wait`.
    pub fn listeners(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
