pub mod toml_loader;

pub use toml_loader::{load_auth_environment, load_or_default, parse_auth_environment};
