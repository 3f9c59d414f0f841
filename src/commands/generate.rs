//! Generate the site manifest and post listing

use anyhow::Result;
use notify::Watcher;
use std::fs;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::Press;

/// Manifest file name inside the output directory
pub const MANIFEST_FILE: &str = "config.json";

/// Post listing file name inside the output directory
pub const POSTS_FILE: &str = "posts.json";

/// Resolve everything and write both artifacts
pub fn run(press: &Press) -> Result<()> {
    let start = Instant::now();

    let manifest = press.manifest()?;
    let posts = press.posts()?;

    tracing::info!(
        "Resolved {} sidebar sections and {} posts",
        manifest.theme_config.sidebar.len(),
        posts.len()
    );

    fs::create_dir_all(&press.out_dir)?;

    let manifest_path = press.out_dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
    tracing::debug!("Wrote {:?}", manifest_path);

    let posts_path = press.out_dir.join(POSTS_FILE);
    fs::write(&posts_path, serde_json::to_string_pretty(&posts)?)?;
    tracing::debug!("Wrote {:?}", posts_path);

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch the docs directory and config file, regenerating on change
pub async fn watch(press: &Press) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(&press.docs_dir, notify::RecursiveMode::Recursive)?;

    if let Some(config_path) = &press.config_path {
        watcher.watch(config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut debounce = Debounce::new(Duration::from_millis(500), Instant::now());
    let mut press = press.clone();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => {
                // Our own output may live under the docs directory
                if !event.paths.iter().all(|p| p.starts_with(&press.out_dir)) {
                    debounce.record();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }

        if debounce.due(Instant::now()) {
            tracing::info!("File changed, regenerating...");

            // Config edits change the sidebar and base path
            match Press::new(&press.base_dir) {
                Ok(reloaded) => press = reloaded,
                Err(e) => tracing::error!("Failed to reload config: {}", e),
            }

            if let Err(e) = run(&press) {
                tracing::error!("Generation failed: {}", e);
            }
        }
    }

    Ok(())
}

/// Coalesces bursts of file events into rebuilds at least `interval` apart
///
/// An event arriving too soon after a rebuild stays pending until the
/// interval has passed, so the last change of a burst is never lost.
struct Debounce {
    interval: Duration,
    last_rebuild: Instant,
    pending: bool,
}

impl Debounce {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_rebuild: now,
            pending: false,
        }
    }

    fn record(&mut self) {
        self.pending = true;
    }

    /// Whether a rebuild should run at `now`; counts it as done if so
    fn due(&mut self, now: Instant) -> bool {
        if self.pending && now.duration_since(self.last_rebuild) > self.interval {
            self.pending = false;
            self.last_rebuild = now;
            true
        } else {
            false
        }
    }
}
