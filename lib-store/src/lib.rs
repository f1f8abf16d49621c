use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::debug;
use mpu6050::OffsetStore;

#[cfg(test)]
mod tests;

#[derive(Debug)]
pub enum StoreError
{
    /// A read was attempted before the store file was ever written.
    Missing(PathBuf),

    Io(io::Error),

    /// A stored line exists for the key but its value is not a float.
    BadValue { key: String, value: String },
}

impl std::error::Error for StoreError {}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "store file {} does not exist", path.display()),
            Self::Io(err) => write!(f, "store i/o error: {}", err),
            Self::BadValue { key, value } => {
                write!(f, "stored value for {} is not a float: {:?}", key, value)
            }
        }
    }
}

impl From<io::Error> for StoreError
{
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// File-backed offset store holding one `key:=value` pair per line. Writes rewrite the line of
/// an existing key and append new keys, creating the file on the first write. Reads of a file
/// that was never written are an error: a missing store means the device was never calibrated.
///
pub struct FileStore
{
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }
}

impl OffsetStore for FileStore {
    type Error = StoreError;

    fn get(&mut self, key: &str) -> Result<Option<f32>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::Missing(self.path.clone()));
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        for line in contents.lines() {
            if let Some((name, value)) = line.split_once(":=") {
                if name == key {
                    return value.trim().parse::<f32>().map(Some).map_err(|_| {
                        StoreError::BadValue { key: key.to_string(), value: value.to_string() }
                    });
                }
            }
        }
        Ok(None)
    }

    fn set(&mut self, key: &str, value: f32) -> Result<(), StoreError> {
        let mut lines: Vec<String> = match fs::read_to_string(&self.path) {
            Ok(contents) => contents.lines().map(str::to_string).collect(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(StoreError::Io(err)),
        };

        let entry = format!("{}:={}", key, value);
        let existing = lines
            .iter_mut()
            .find(|line| matches!(line.split_once(":="), Some((name, _)) if name == key));
        match existing {
            Some(line) => *line = entry,
            None => lines.push(entry),
        }

        debug!("Persisting {}:={} to {}", key, value, self.path.display());
        fs::write(&self.path, lines.join("\n") + "\n")?;
        Ok(())
    }
}
