use std::{
    collections::HashMap,
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use tracing::warn;
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    tokenizer::NoiseWords,
};

/// Supplies the raw text of a document by its identifier.
pub trait DocumentSource {
    /// Reads the whole document. Fails with [`Error::DocumentNotFound`] if the
    /// document cannot be located.
    fn read_document(&self, document: &str) -> Result<String>;
}

/// Documents stored as files, identifiers resolved against a root directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, document: &str) -> PathBuf {
        self.root.join(document)
    }
}

impl DocumentSource for FileSource {
    fn read_document(&self, document: &str) -> Result<String> {
        let bytes = fs::read(self.path(document)).map_err(|source| match source.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => Error::DocumentNotFound {
                document: document.to_string(),
                source,
            },
            _ => Error::IO(source),
        })?;

        // Undecodable bytes become U+FFFD and are left to the tokenizer.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Documents held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, document: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(document.into(), text.into());
    }
}

impl<D: Into<String>, T: Into<String>> FromIterator<(D, T)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (D, T)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (document, text) in iter {
            source.insert(document, text);
        }
        source
    }
}

impl DocumentSource for MemorySource {
    fn read_document(&self, document: &str) -> Result<String> {
        self.documents
            .get(document)
            .cloned()
            .ok_or_else(|| Error::DocumentNotFound {
                document: document.to_string(),
                source: io::Error::new(ErrorKind::NotFound, "no such document in memory"),
            })
    }
}

/// Reads whitespace-separated document identifiers, keeping their order.
pub fn read_document_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::DocumentListNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text.split_whitespace().map(String::from).collect())
}

/// Reads whitespace-separated noise words.
pub fn read_noise_words(path: &Path) -> Result<NoiseWords> {
    let text = fs::read_to_string(path).map_err(|source| Error::NoiseWordsNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text.split_whitespace().collect())
}

/// Lists every regular file under `dir`, as identifiers relative to `dir`,
/// sorted by path. Files whose names are not valid UTF-8 are skipped.
pub fn discover_documents(dir: &Path) -> Result<Vec<String>> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(dir).unwrap_or_else(|_| entry.path());
        let Some(document) = relative.to_str() else {
            warn!(path = %relative.display(), "skipping document with non UTF-8 name");
            continue;
        };
        documents.push(document.to_string());
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_reads_documents() {
        let source: MemorySource = [("a.txt", "down the rabbit hole")].into_iter().collect();

        assert_eq!(
            source.read_document("a.txt").expect("Failed to read document"),
            "down the rabbit hole"
        );
    }

    #[test]
    fn memory_source_missing_document() {
        let source = MemorySource::new();

        assert!(matches!(
            source.read_document("missing.txt"),
            Err(Error::DocumentNotFound { document, .. }) if document == "missing.txt"
        ));
    }

    #[test]
    fn file_source_missing_document() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let source = FileSource::new(dir.path());

        assert!(matches!(
            source.read_document("missing.txt"),
            Err(Error::DocumentNotFound { .. })
        ));
    }

    #[test]
    fn reads_lists() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let docs_path = dir.path().join("docs.txt");
        let noise_path = dir.path().join("noisewords.txt");
        fs::write(&docs_path, "b.txt\na.txt  c.txt\n").expect("Failed to write docs");
        fs::write(&noise_path, "the\nA\nof\n").expect("Failed to write noise words");

        assert_eq!(
            read_document_list(&docs_path).expect("Failed to read docs"),
            vec!["b.txt", "a.txt", "c.txt"]
        );

        let noise_words = read_noise_words(&noise_path).expect("Failed to read noise words");
        assert_eq!(noise_words.len(), 3);
        assert!(noise_words.contains("a"));
        assert!(noise_words.contains("The"));
    }

    #[test]
    fn missing_lists() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        assert!(matches!(
            read_document_list(&dir.path().join("docs.txt")),
            Err(Error::DocumentListNotFound { .. })
        ));
        assert!(matches!(
            read_noise_words(&dir.path().join("noisewords.txt")),
            Err(Error::NoiseWordsNotFound { .. })
        ));
    }

    #[test]
    fn file_source_decodes_invalid_utf8_lossily() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("latin1.txt"), b"caf\xe9 rabbit").expect("Failed to write file");

        let text = FileSource::new(dir.path())
            .read_document("latin1.txt")
            .expect("Failed to read document");

        assert_eq!(text, "caf\u{fffd} rabbit");
    }

    #[cfg(unix)]
    #[test]
    fn discovery_skips_non_utf8_names() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.txt"), "a").expect("Failed to write file");
        let bad_name = dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
        if fs::write(bad_name, "b").is_err() {
            // Some filesystems refuse non UTF-8 names outright.
            return;
        }

        let documents = discover_documents(dir.path()).expect("Failed to discover documents");

        assert_eq!(documents, vec!["a.txt".to_string()]);
    }

    #[test]
    fn discovers_files_in_order() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("part")).expect("Failed to create dir");
        fs::write(dir.path().join("b.txt"), "b").expect("Failed to write file");
        fs::write(dir.path().join("a.txt"), "a").expect("Failed to write file");
        fs::write(dir.path().join("part").join("c.txt"), "c").expect("Failed to write file");

        let documents = discover_documents(dir.path()).expect("Failed to discover documents");

        assert_eq!(
            documents,
            vec![
                "a.txt".to_string(),
                "b.txt".to_string(),
                Path::new("part").join("c.txt").to_string_lossy().into_owned(),
            ]
        );
    }
}
