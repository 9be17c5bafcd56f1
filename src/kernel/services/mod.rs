//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the kernel.
//! - `adapters`: OS specific implementations (filesystem, settings, replay input).

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{event_bus, EventReceiver, EventSender};
