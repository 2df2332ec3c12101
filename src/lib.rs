#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

pub mod config;
pub mod convert;
pub mod report;
pub mod stats;
#[macro_use]
pub mod timed;
pub mod weather;
