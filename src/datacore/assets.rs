//! `datacore::assets` submodule provides traits and structs that encapsulate work with saved data.
//!
//! It defines [`FromFile`] and [`ToFile`] traits that are implemented on every
//! deserializable and serializable type respectively, and [`AssetManager`] that
//! treats a directory as a storage for configs and save files.
//!
//! `ggpatterns` serializes data by using Concise Binary Object Representation format.
//!

use serde::{Deserialize, Serialize};
use std::{
    fs::{create_dir_all, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// [`DataError`] enum lists all errors that could occur while saving or loading data.
///
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying filesystem operation failed.
    ///
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    /// Data could not be encoded or decoded as CBOR.
    ///
    #[error("wrong data format: {0}")]
    Format(#[from] serde_cbor::Error),
}

/// [`FromFile`] trait is implemented on objects that can be restored from file data (deserialized).
///
/// There is a blanket implementation on all types that implement `serde::Deserialize`.
///
pub trait FromFile {
    /// Deserializes object from file.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, DataError>
    where
        Self: Sized;
}
impl<T: for<'a> Deserialize<'a>> FromFile for T {
    /// Restores data from given file.
    ///
    /// This function returns an error if file does not exist or if data is not recoverable.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, DataError> {
        let file: File = File::open(filename)?;
        Ok(serde_cbor::from_reader(BufReader::new(file))?)
    }
}
/// [`ToFile`] trait is implemented on objects that can be saved to file (serialized).
///
/// There is a blanket implementation on all types that implement `serde::Serialize`.
///
pub trait ToFile {
    /// Serializes object to file.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), DataError>;
}
impl<T: Serialize> ToFile for T {
    /// Saves data to file.
    ///
    /// This implementation will create a file if it does not exist, and will truncate it if it does.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), DataError> {
        let mut writer: BufWriter<File> = BufWriter::new(File::create(filename)?);
        serde_cbor::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

/// [`AssetFormat`] trait registers kinds of data by reserving a folder for them.
///
pub trait AssetFormat {
    /// Name of folder in which assets of this format will be stored.
    ///
    fn format_folder(&self) -> &'static str;
}
/// [`ConfigAssetFormat`] represents settings (pool configs, gameplay settings).
/// Its folder is 'configs'.
///
#[derive(Debug, Clone, Copy)]
pub struct ConfigAssetFormat;
impl AssetFormat for ConfigAssetFormat {
    fn format_folder(&self) -> &'static str {
        "configs"
    }
}
/// [`SaveAssetFormat`] represents player progress (leaderboards, speedrun records).
/// Its folder is 'saves'.
///
#[derive(Debug, Clone, Copy)]
pub struct SaveAssetFormat;
impl AssetFormat for SaveAssetFormat {
    fn format_folder(&self) -> &'static str {
        "saves"
    }
}

/// [`AssetManager`] struct treats a directory as a storage for game data.
///
/// Initializing [`AssetManager`] in a directory creates one subdirectory per
/// [`AssetFormat`] (if they are not present).
///
#[derive(Debug)]
pub struct AssetManager {
    /// Directory that is being handled by [`AssetManager`].
    ///
    root_directory: PathBuf,
}
impl AssetManager {
    /// Constructs full path for asset using its metadata.
    ///
    fn full_path(&self, filename: impl AsRef<Path>, format: impl AssetFormat) -> PathBuf {
        self.root_directory
            .as_path()
            .join(format.format_folder())
            .join(filename)
    }

    /// Initializes [`AssetManager`] in a directory.
    ///
    /// Already existing folders are reused.
    ///
    /// ```rust, no_run
    /// # use ggpatterns::datacore::assets::{AssetManager, AssetFormat, ConfigAssetFormat, SaveAssetFormat};
    /// let manager: AssetManager = AssetManager::initialize_at(
    ///     "data",
    ///     &[ConfigAssetFormat.format_folder(), SaveAssetFormat.format_folder()]
    /// ).expect("Directory should be writable");
    /// ```
    ///
    pub fn initialize_at(
        path: impl AsRef<Path>,
        formats: &[&'static str],
    ) -> Result<Self, DataError> {
        for format in formats {
            create_dir_all(path.as_ref().join(format))?;
        }
        create_dir_all(&path)?;

        Ok(AssetManager {
            root_directory: path.as_ref().to_path_buf(),
        })
    }

    /// Returns directory that is handled by this [`AssetManager`].
    ///
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Saves asset using its metadata.
    ///
    pub fn save_asset<T: ToFile>(
        &self,
        filename: impl AsRef<Path>,
        format: impl AssetFormat,
        asset: &T,
    ) -> Result<(), DataError> {
        asset.to_file(self.full_path(filename, format))
    }
    /// Loads asset using its metadata.
    ///
    pub fn load_asset<T: FromFile>(
        &self,
        filename: impl AsRef<Path>,
        format: impl AssetFormat,
    ) -> Result<T, DataError> {
        T::from_file(self.full_path(filename, format))
    }
    /// Returns whether asset with given metadata exists.
    ///
    pub fn contains_asset(&self, filename: impl AsRef<Path>, format: impl AssetFormat) -> bool {
        self.full_path(filename, format).is_file()
    }
}
