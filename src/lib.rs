//! bytechart
//!
//! Throughput statistics and time-series charts for logs of timestamped
//! byte counts (`Time: <timestamp>; Byte's: <n>; ...`).
//!
//! Pure core: [`parser`], [`throughput`], [`model`].
//! Impure shell: [`source`], [`view`], [`pipeline`], [`config`], [`logging`].

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod source;
pub mod throughput;
pub mod view;
