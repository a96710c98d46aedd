//! Subscriber setup for the binary.
//!
//! The subscriber is installed before any layout file is read, so load and
//! validation events are never dropped. The layout's `logging.level` is
//! swapped in afterwards through a reload handle, unless `RUST_LOG` or
//! `--verbose` already chose the filter.

use std::io;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

pub const DEFAULT_LEVEL: &str = "info";

pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl LogControl {
    /// Whether `RUST_LOG` or `--verbose` fixed the filter
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn apply_level(&self, level: &str) -> Result<()> {
        if self.pinned {
            return Ok(());
        }
        let filter = EnvFilter::try_new(level)
            .with_context(|| format!("Invalid logging level '{level}'"))?;
        self.handle
            .reload(filter)
            .context("Failed to apply logging level")?;
        Ok(())
    }
}

/// Filter to start with, and whether it must survive the layout's level
pub fn initial_filter(verbose: bool) -> (EnvFilter, bool) {
    if verbose {
        return (EnvFilter::new("debug"), true);
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(DEFAULT_LEVEL), false),
    }
}

pub fn subscriber<W>(
    filter: EnvFilter,
    pinned: bool,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, LogControl)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer));
    (subscriber, LogControl { handle, pinned })
}

/// Install the global subscriber, writing to stderr
pub fn init(verbose: bool) -> Result<LogControl> {
    let (filter, pinned) = initial_filter(verbose);
    let (subscriber, control) = subscriber(filter, pinned, io::stderr);
    subscriber
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use crate::config::ConfigLoader;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn loader() -> ConfigLoader {
        ConfigLoader::new(env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_verbose_pins_filter() {
        let (_, pinned) = initial_filter(true);
        assert!(pinned);
    }

    #[test]
    fn test_layout_load_is_logged() {
        let out = Captured::default();
        let (subscriber, _control) = subscriber(EnvFilter::new(DEFAULT_LEVEL), false, out.clone());

        tracing::subscriber::with_default(subscriber, || {
            loader().load("layouts/three_tier.yaml").unwrap();
        });

        assert!(out.text().contains("loaded layout config"), "{}", out.text());
    }

    #[test]
    fn test_rejected_layout_is_logged() {
        let out = Captured::default();
        let (subscriber, _control) = subscriber(EnvFilter::new(DEFAULT_LEVEL), false, out.clone());

        tracing::subscriber::with_default(subscriber, || {
            assert!(loader().load("layouts/bad_radius.yaml").is_err());
        });

        assert!(out.text().contains("rejecting non-positive cell radius"));
    }

    #[test]
    fn test_layout_level_replaces_default() {
        let out = Captured::default();
        let (subscriber, control) = subscriber(EnvFilter::new("warn"), false, out.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("before reload");
            control.apply_level("info").unwrap();
            tracing::info!("after reload");
        });

        let text = out.text();
        assert!(!text.contains("before reload"));
        assert!(text.contains("after reload"));
    }

    #[test]
    fn test_pinned_filter_ignores_layout_level() {
        let out = Captured::default();
        let (subscriber, control) = subscriber(EnvFilter::new("warn"), true, out.clone());

        tracing::subscriber::with_default(subscriber, || {
            control.apply_level("debug").unwrap();
            tracing::info!("still filtered");
        });

        assert!(control.is_pinned());
        assert!(!out.text().contains("still filtered"));
    }

    #[test]
    fn test_bad_level_is_reported() {
        let (_subscriber, control) = subscriber(EnvFilter::new("warn"), false, io::sink);
        assert!(control.apply_level("not a level [").is_err());
    }
}
