//! Service adapters: OS specific implementations (IO).

pub mod dirs;
pub mod replay;
pub mod settings;

pub use dirs::{ensure_log_dir, get_config_dir, get_log_dir};
pub use replay::{parse_events, replay, ReplayError};
pub use settings::{get_settings_path, load_settings, load_settings_from, SettingsError};
