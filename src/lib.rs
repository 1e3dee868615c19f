//! File I/O helpers for project configs, JSON and binary artifacts, and
//! base64-encoded images.
//!
//! Every function is a stateless wrapper around one filesystem or
//! serialization call. Successful calls emit one `INFO` event through
//! `tracing`; scope a subscriber with `tracing::subscriber::with_default` to
//! capture them.
//!
//! ```no_run
//! use fsbox::{create_directories, read_config};
//!
//! # fn main() -> fsbox::Result<()> {
//! let config = read_config("config/config.yaml")?;
//! let root = config.get_str("artifacts_root").unwrap_or("artifacts");
//! create_directories([root], true)?;
//! # Ok(())
//! # }
//! ```

pub mod binary;
pub mod config;
pub mod error;
pub mod fsops;
pub mod image;
pub mod json;
pub mod mapping;

pub use binary::{BinaryCodec, Bincode, load_bin, load_bin_with, save_bin, save_bin_with};
pub use config::{ConfigFormat, read_config};
pub use error::{Error, Result};
pub use fsops::{create_directories, file_size_bytes, file_size_kb};
pub use image::{decode_image, encode_image_to_base64};
pub use json::{load_json, load_json_as, save_json};
pub use mapping::ConfigBox;
