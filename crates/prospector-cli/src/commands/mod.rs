//! Command implementations.

pub mod config;
pub mod detect;
pub mod extract;
pub mod segment;

pub use self::config::execute_config;
pub use self::detect::execute_detect;
pub use self::extract::execute_extract;
pub use self::segment::execute_segment;

use crate::error::Result;
use std::fs;
use std::io::{self, Read};

/// Read a report from a file, or from stdin when the path is `-`.
pub fn read_report(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
