//! Image file storage on the local file system.
//!
//! Files are written under a random `xxxxxxxx.xxx` name so client supplied file
//! names never reach the file system. Lookups only accept plain file names; anything
//! containing a path separator or `..` is rejected with `ErrorKind::InvalidInput`.

use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use rand::Rng;
use tokio::{fs, io::AsyncWriteExt};

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const STEM_LENGTH: usize = 8;
const EXTENSION_LENGTH: usize = 3;
/// Attempts before giving up on finding an unused file name.
const MAX_NAME_ATTEMPTS: usize = 5;

/// Repository for image files stored in a single directory.
pub struct ImageFileRepository<'a> {
    dir: &'a Path,
}

impl<'a> ImageFileRepository<'a> {
    /// Creates a new ImageFileRepository instance.
    ///
    /// # Arguments
    /// - `dir` - Directory holding the image files, created on first write
    ///
    /// # Returns
    /// - `ImageFileRepository` - New repository instance
    pub fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    /// Writes `bytes` to a new file with a random name.
    ///
    /// # Returns
    /// - `Ok(String)` - Name of the new file inside the image directory
    /// - `Err(io::Error)` - Directory could not be created or file could not be written
    pub async fn store(&self, bytes: &[u8]) -> Result<String, io::Error> {
        fs::create_dir_all(self.dir).await?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let file_name = generate_file_name();
            let file = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.dir.join(&file_name))
                .await;

            let mut file = match file {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            };
            file.write_all(bytes).await?;
            file.flush().await?;

            return Ok(file_name);
        }

        Err(io::Error::new(
            ErrorKind::AlreadyExists,
            format!(
                "No unused image file name found in {} after {} attempts",
                self.dir.display(),
                MAX_NAME_ATTEMPTS
            ),
        ))
    }

    /// Reads a stored file.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - File content
    /// - `Ok(None)` - No such file
    /// - `Err(io::Error)` - Invalid file name or read failure
    pub async fn load(&self, file_name: &str) -> Result<Option<Vec<u8>>, io::Error> {
        match fs::read(self.path(file_name)?).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Removes a stored file.
    ///
    /// # Returns
    /// - `Ok(true)` - File removed
    /// - `Ok(false)` - No such file
    /// - `Err(io::Error)` - Invalid file name or removal failure
    pub async fn delete(&self, file_name: &str) -> Result<bool, io::Error> {
        match fs::remove_file(self.path(file_name)?).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn path(&self, file_name: &str) -> Result<PathBuf, io::Error> {
        if !is_plain_file_name(file_name) {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("Invalid image file name '{}'", file_name),
            ));
        }

        Ok(self.dir.join(file_name))
    }
}

/// Returns a name such as `k3x9q0ab.z7c`.
fn generate_file_name() -> String {
    let mut rng = rand::rng();
    let mut random = |len: usize| -> String {
        (0..len)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    };

    let stem = random(STEM_LENGTH);
    let extension = random(EXTENSION_LENGTH);
    format!("{}.{}", stem, extension)
}

/// A single path component that cannot escape the image directory.
fn is_plain_file_name(file_name: &str) -> bool {
    !file_name.is_empty()
        && file_name != "."
        && file_name != ".."
        && !file_name.contains(['/', '\\'])
        && !file_name.contains("..")
}
