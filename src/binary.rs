//! Opaque binary persistence for arbitrary serde values.
//!
//! The byte layout belongs to the codec. Files written with one codec are only
//! readable with the same one.

use std::fs;

use camino::Utf8Path;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::Result;
use crate::fsops::read_bytes;

/// Turns values into bytes and back.
pub trait BinaryCodec {
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized;

    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned;
}

/// Default codec backed by `bincode`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bincode;

impl BinaryCodec for Bincode {
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        Ok(bincode::serialize(value)?)
    }

    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Save `data` to `path` with the default codec.
pub fn save_bin<T>(data: &T, path: impl AsRef<Utf8Path>) -> Result<()>
where
    T: Serialize + ?Sized,
{
    save_bin_with(&Bincode, data, path)
}

/// Load a value written by [`save_bin`].
pub fn load_bin<T>(path: impl AsRef<Utf8Path>) -> Result<T>
where
    T: DeserializeOwned,
{
    load_bin_with(&Bincode, path)
}

pub fn save_bin_with<C, T>(codec: &C, data: &T, path: impl AsRef<Utf8Path>) -> Result<()>
where
    C: BinaryCodec,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let bytes = codec.serialize(data)?;
    fs::write(path, bytes)?;
    info!("Binary file saved at: {}", path);
    Ok(())
}

pub fn load_bin_with<C, T>(codec: &C, path: impl AsRef<Utf8Path>) -> Result<T>
where
    C: BinaryCodec,
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let data = codec.deserialize(&bytes)?;
    info!("Binary file loaded from: {}", path);
    Ok(data)
}
