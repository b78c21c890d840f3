//! Tool configuration for ide-bridge.
//!
//! An optional YAML file (`--config PATH`, or `config.yaml` under the
//! platform config directory's `ide-bridge/` folder). Unknown fields are
//! ignored for forward compatibility and every field has a default, so an
//! empty file is a valid configuration.

mod model;
mod operations;


pub use model::Config;
pub use operations::default_config_path;
