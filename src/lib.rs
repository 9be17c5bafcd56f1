//! ideshell - state core of a browser-hosted development environment shell.
//!
//! Module layout:
//! - kernel: artifact/navigation registries, store, controller
//! - kernel::services: event bus, config/settings ports, IO adapters

pub mod kernel;
