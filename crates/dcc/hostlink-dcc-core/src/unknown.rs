//! Fallback provider used when no backend is registered or the host is not
//! recognized.
//!
//! Only operations with a semantically neutral answer are implemented:
//! identity queries, message sinks (routed to the process log), deferred
//! execution (run immediately) and the null progress bar. Everything else
//! keeps the catalogue's `Unsupported` default so callers can tell "no host"
//! apart from a wrong answer.

use log::{error, warn};

use crate::error::DccResult;
use crate::hosts::HostApp;
use crate::progress::{NullProgressBar, ProgressBar};
use crate::provider::DccProvider;

#[derive(Debug, Default)]
pub struct UnknownDcc;

impl UnknownDcc {
    pub fn new() -> Self {
        Self
    }
}

impl DccProvider for UnknownDcc {
    fn name(&self) -> String {
        HostApp::Unknown.as_str().to_string()
    }

    fn host(&self) -> HostApp {
        HostApp::Unknown
    }

    fn version(&self) -> DccResult<String> {
        Ok(String::from("0.0.0"))
    }

    fn file_extensions(&self) -> DccResult<Vec<String>> {
        Ok(Vec::new())
    }

    /// Standalone processes have no UI event loop.
    fn is_batch(&self) -> DccResult<bool> {
        Ok(true)
    }

    /// No idle queue to defer to; run the task right away.
    fn execute_deferred(&self, task: Box<dyn FnOnce() + Send>) -> DccResult<()> {
        task();
        Ok(())
    }

    fn warning(&self, message: &str) -> DccResult<()> {
        warn!("{message}");
        Ok(())
    }

    fn error(&self, message: &str) -> DccResult<()> {
        error!("{message}");
        Ok(())
    }

    fn progress_bar(&self) -> DccResult<Box<dyn ProgressBar>> {
        Ok(Box::new(NullProgressBar::new()))
    }
}
