//! Scoped temp-file spool for uploaded audio.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::stt::types::AudioUpload;
use crate::Result;

/// A spooled copy of an uploaded recording.
///
/// The backing file exists exactly as long as this value: dropping the spool
/// removes the file, on success and failure paths alike. Never shared across
/// requests.
pub struct AudioSpool {
    file: NamedTempFile,
}

impl AudioSpool {
    /// Write `upload` into a fresh temp file under `dir` (or the system temp
    /// directory when `None`).
    pub fn write(upload: &AudioUpload, dir: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        let suffix = format!(".{}", upload.format.extension());
        builder.prefix("voxlate-audio-").suffix(&suffix);
        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(&upload.data)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the spooled bytes back, as the recognizer consumes them.
    pub fn read(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.file.path())?)
    }
}

impl std::fmt::Debug for AudioSpool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioSpool").field("path", &self.path()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stt::types::AudioFormat;

    #[test]
    fn test_spool_round_trip() {
        let upload = AudioUpload::new(vec![1, 2, 3, 4], AudioFormat::Wav);
        let spool = AudioSpool::write(&upload, None).unwrap();
        assert!(spool.path().exists());
        assert_eq!(spool.read().unwrap(), vec![1, 2, 3, 4]);
        let name = spool.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("voxlate-audio-"));
        assert!(name.ends_with(".wav"));
    }

    #[test]
    fn test_spool_removed_on_drop() {
        let upload = AudioUpload::new(vec![0u8; 16], AudioFormat::Flac);
        let spool = AudioSpool::write(&upload, None).unwrap();
        let path = spool.path().to_path_buf();
        assert!(path.exists());
        drop(spool);
        assert!(!path.exists());
    }

    #[test]
    fn test_spool_in_custom_dir() {
        let dir = tempfile::tempdir().unwrap();
        let upload = AudioUpload::new(vec![9u8; 8], AudioFormat::Mp3);
        let spool = AudioSpool::write(&upload, Some(dir.path())).unwrap();
        assert_eq!(spool.path().parent().unwrap(), dir.path());
    }
}
