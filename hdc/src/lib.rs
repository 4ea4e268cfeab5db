//! Harness diameter calculator: estimates the outer diameter of a cable harness bundle from its wire list,
//! using [wirepack] to pack the wire cross-sections.

use std::sync::LazyLock;
use std::time::Instant;

pub mod calculator;
pub mod catalogue;
pub mod config;
pub mod derating;
pub mod estimate;
pub mod harness;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
