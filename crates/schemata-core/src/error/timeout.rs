use std::time::Duration;

use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct TimeoutError {
    duration: Duration,
}

impl std::error::Error for TimeoutError {}

impl core::fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "operation timed out after {:?}", self.duration)
    }
}

impl Error {
    pub fn timeout(duration: Duration) -> Error {
        ErrorKind::Timeout(TimeoutError { duration }).into()
    }

    pub fn is_timeout(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::Timeout(_)))
    }
}
