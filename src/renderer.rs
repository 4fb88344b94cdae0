use std::io::Write;

use tokio::{sync::watch, task::JoinHandle};
use tracing::debug;

use crate::snapshot::Snapshot;

/// Repaints the terminal with the latest ordinal whenever one is published.
///
/// Stand-in for the fullscreen surface: it only ever reads snapshots from the
/// watch channel, never the generator itself. The task ends when the sequence
/// actor goes away.
pub fn spawn_renderer(mut updates: watch::Receiver<Snapshot>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if updates.changed().await.is_err() {
                break;
            }
            let snapshot = updates.borrow_and_update().clone();
            debug!("repainting step {}", snapshot.step);
            paint(&snapshot);
        }
    })
}

fn paint(snapshot: &Snapshot) {
    // Clear, home, then the value on its own line.
    print!("\x1b[2J\x1b[H\n\n        {}\n", snapshot.rendered);
    let _ = std::io::stdout().flush();
}
