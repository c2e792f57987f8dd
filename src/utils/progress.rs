//! Build progress reporting. Becomes a no-op when the `progress` feature is
//! disabled or when the caller asks for a silent build.

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

#[cfg(not(feature = "progress"))]
use self::noop::{ProgressBar, ProgressStyle};

use std::time::Duration;

/// Progress handle for a single build. Cheap to clone into worker tasks.
#[derive(Clone)]
pub struct BuildProgress {
    bar: Option<ProgressBar>,
}

impl BuildProgress {
    /// A handle that reports nothing
    pub fn hidden() -> Self {
        Self { bar: None }
    }

    /// Spinner shown while the file list is being collected
    pub fn discovering(enabled: bool) -> Self {
        if !enabled {
            return Self::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Discovering files...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(spinner) }
    }

    /// Bar advanced once per ingested file
    pub fn ingesting(enabled: bool, total: usize) -> Self {
        if !enabled {
            return Self::hidden();
        }
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        ) {
            pb.set_style(style.progress_chars("█▓▒░  "));
        }
        pb.set_message("Indexing files...");
        Self { bar: Some(pb) }
    }

    pub fn inc(&self) {
        if let Some(ref pb) = self.bar {
            pb.inc(1);
        }
    }

    pub fn finish(self, msg: String) {
        if let Some(pb) = self.bar {
            pb.finish_with_message(msg);
        }
    }
}

#[cfg(not(feature = "progress"))]
mod noop {
    use std::time::Duration;

    #[derive(Clone)]
    pub struct ProgressBar;

    impl ProgressBar {
        pub fn new(_len: u64) -> Self {
            ProgressBar
        }

        pub fn new_spinner() -> Self {
            ProgressBar
        }

        pub fn set_style(&self, _style: ProgressStyle) {}
        pub fn set_message(&self, _msg: impl Into<std::borrow::Cow<'static, str>>) {}
        pub fn enable_steady_tick(&self, _interval: Duration) {}
        pub fn inc(&self, _delta: u64) {}
        pub fn finish_with_message(&self, _msg: impl Into<std::borrow::Cow<'static, str>>) {}
    }

    pub struct ProgressStyle;

    impl ProgressStyle {
        pub fn default_spinner() -> Self {
            ProgressStyle
        }

        pub fn default_bar() -> Self {
            ProgressStyle
        }

        pub fn template(self, _template: &str) -> Result<Self, std::convert::Infallible> {
            Ok(self)
        }

        pub fn progress_chars(self, _chars: &str) -> Self {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_progress_is_inert() {
        let progress = BuildProgress::ingesting(false, 10);
        assert!(progress.bar.is_none());
        progress.inc();
        progress.finish("done".to_string());
    }
}
