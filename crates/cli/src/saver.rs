//! Download target on the local filesystem

use std::path::PathBuf;

use formcase_client::FileSaver;
use formcase_common::{Download, Error, Result};

/// Writes downloads into a directory, replacing any previous file
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSaver for DirectorySaver {
    fn save(&self, download: &Download) -> Result<PathBuf> {
        let name = std::path::Path::new(&download.file_name);
        if name.file_name().map(|n| n != name.as_os_str()).unwrap_or(true) {
            return Err(Error::Save(format!(
                "refusing to save outside {}: {}",
                self.dir.display(),
                download.file_name
            )));
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        std::fs::write(&path, &download.bytes)?;
        Ok(path)
    }
}
