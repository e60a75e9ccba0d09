//! # Adapters Layer
//!
//! Concrete implementations of the driven ports.
//!
//! | Port | Mock (Testing) | Production |
//! |------|----------------|------------|
//! | `RandomSource` | `FixedRandomSource`, `ScriptedRandomSource` | `SeededRandomSource`, `OsRandomSource` |
//! | `ConfigProvider` | `StaticConfigProvider` | `TomlConfigProvider` (feature `toml-config`) |

pub mod config;
pub mod random;

pub use config::StaticConfigProvider;
#[cfg(feature = "toml-config")]
pub use config::TomlConfigProvider;
pub use random::{FixedRandomSource, OsRandomSource, ScriptedRandomSource, SeededRandomSource};
