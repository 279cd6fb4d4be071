//! Sources to split: a downloaded audio file plus the fetcher's metadata.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use trackforged_parser::{safe_label, SourceMetadata};

/// Audio extensions the fetcher may leave behind.
pub const AUDIO_EXTENSIONS: &[&str] = &["m4a", "mp3", "opus", "aac", "flac", "wav"];

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read metadata {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse metadata {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("metadata {} has no id; pass --input instead", path.display())]
    MissingId { path: PathBuf },

    #[error("no audio file found for [{id}] in {}", dir.display())]
    NoAudio { id: String, dir: PathBuf },
}

/// A source file ready for splitting.
#[derive(Debug, Clone)]
pub struct Source {
    pub audio: PathBuf,
    pub metadata: SourceMetadata,
}

impl Source {
    /// Base name shared by every segment of this source.
    pub fn base_name(&self) -> String {
        base_name(&self.metadata)
    }

    /// Short identifier for log messages.
    pub fn display_id(&self) -> String {
        match self.metadata.id.as_deref() {
            Some(id) => format!("[{}]", id),
            None => self.audio.display().to_string(),
        }
    }
}

/// Read the fetcher's info JSON.
pub fn load_metadata(path: &Path) -> Result<SourceMetadata, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Locate the downloaded audio for an info JSON inside `dir`.
pub fn source_from_info(info_path: &Path, dir: &Path) -> Result<Source, SourceError> {
    let metadata = load_metadata(info_path)?;
    let id = metadata
        .id
        .clone()
        .ok_or_else(|| SourceError::MissingId {
            path: info_path.to_path_buf(),
        })?;

    let audio = find_audio_outputs(dir, &id)
        .into_iter()
        .max_by_key(|p| modified(p))
        .ok_or_else(|| SourceError::NoAudio {
            id,
            dir: dir.to_path_buf(),
        })?;

    Ok(Source { audio, metadata })
}

/// `"{title} [{id}]"` made filesystem-safe; the title defaults to `track`.
pub fn base_name(meta: &SourceMetadata) -> String {
    let title = meta
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or("track");
    match meta.id.as_deref() {
        Some(id) => safe_label(&format!("{} [{}]", title, id)),
        None => safe_label(title),
    }
}

/// Files in `dir` named `*[{id}].{ext}` for a known audio extension, sorted.
pub fn find_audio_outputs(dir: &Path, id: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let id_token = format!("[{}]", id);
    let mut matches: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            let (Some(stem), Some(ext)) = (p.file_stem(), p.extension()) else {
                return false;
            };
            let ext = ext.to_string_lossy();
            AUDIO_EXTENSIONS.contains(&ext.as_ref()) && stem.to_string_lossy().ends_with(&id_token)
        })
        .collect();
    matches.sort();
    matches
}

fn modified(path: &Path) -> SystemTime {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_base_name() {
        let mut meta = SourceMetadata {
            id: Some("abc".into()),
            title: Some("AC/DC: Live".into()),
            ..Default::default()
        };
        assert_eq!(base_name(&meta), "AC_DC_ Live [abc]");

        meta.title = None;
        assert_eq!(base_name(&meta), "track [abc]");

        meta.id = None;
        assert_eq!(base_name(&meta), "track");
    }

    #[test]
    fn test_find_audio_outputs() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "Song [abc].m4a",
            "Song [abc].webp",
            "Song [abc].info.json",
            "Other [xyz].m4a",
            "Song [abc].opus",
        ] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let found = find_audio_outputs(dir.path(), "abc");
        assert_eq!(
            found,
            vec![
                dir.path().join("Song [abc].m4a"),
                dir.path().join("Song [abc].opus"),
            ]
        );
        assert!(find_audio_outputs(&dir.path().join("missing"), "abc").is_empty());
    }

    #[test]
    fn test_source_from_info() {
        let dir = tempfile::tempdir().unwrap();
        let info = dir.path().join("Song [abc].info.json");
        fs::write(
            &info,
            r#"{"id": "abc", "title": "Song", "duration": 200, "chapters": []}"#,
        )
        .unwrap();
        fs::write(dir.path().join("Song [abc].m4a"), b"x").unwrap();

        let source = source_from_info(&info, dir.path()).unwrap();
        assert_eq!(source.audio, dir.path().join("Song [abc].m4a"));
        assert_eq!(source.metadata.duration, Some(200.0));
        assert_eq!(source.base_name(), "Song [abc]");
    }

    #[test]
    fn test_source_without_audio() {
        let dir = tempfile::tempdir().unwrap();
        let info = dir.path().join("info.json");
        fs::write(&info, r#"{"id": "abc"}"#).unwrap();

        let err = source_from_info(&info, dir.path()).unwrap_err();
        assert!(matches!(err, SourceError::NoAudio { .. }));
    }
}
