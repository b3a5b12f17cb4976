pub mod config;
pub mod db;
pub mod del;
pub mod finish;
pub mod init;
pub mod list;
pub mod log;
pub mod start;
pub mod status;

use crate::utils::time::{now, parse_timestamp};
use crate::errors::AppResult;
use chrono::NaiveDateTime;

/// `--at` value if given, otherwise the current local time.
pub(crate) fn timestamp_or_now(at: Option<&String>) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => parse_timestamp(s),
        None => Ok(now()),
    }
}
