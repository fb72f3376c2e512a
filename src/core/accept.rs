//! Extension allow-list parsing and batch validation.

use crate::config::ACCEPT_SEPARATOR;
use crate::core::platform::FileDescriptor;
use crate::models::ValidationResult;

/// Normalized set of accepted extensions.
///
/// Tokens are trimmed and lowercased, blank tokens dropped. An empty set
/// accepts every file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptSpec {
    extensions: Vec<String>,
}

impl AcceptSpec {
    /// Parse a raw comma-separated accept string such as `".jpg, .PNG"`.
    pub fn parse(raw: &str) -> Self {
        let mut extensions: Vec<String> = Vec::new();
        for token in raw.split(ACCEPT_SEPARATOR) {
            let token = token.trim().to_lowercase();
            if !token.is_empty() && !extensions.contains(&token) {
                extensions.push(token);
            }
        }
        Self { extensions }
    }

    /// Parse an optional accept string; `None` accepts everything.
    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn accepts_all(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether a file name passes the allow-list.
    ///
    /// The extension is whatever follows the last `.`. Names without a dot
    /// have the empty extension, matched only by a bare `.` token.
    pub fn accepts_name(&self, name: &str) -> bool {
        if self.accepts_all() {
            return true;
        }
        let ext = name.rsplit_once('.').map_or("", |(_, ext)| ext);
        let dotted = format!(".{}", ext.to_lowercase());
        self.extensions.iter().any(|e| *e == dotted)
    }

    /// Partition `batch` into valid and invalid files, preserving order.
    pub fn validate<F>(&self, batch: &[F]) -> ValidationResult<F>
    where
        F: FileDescriptor + Clone,
    {
        let (valid_files, invalid_files): (Vec<F>, Vec<F>) = batch
            .iter()
            .cloned()
            .partition(|file| self.accepts_name(&file.file_name()));

        ValidationResult {
            valid_files,
            invalid_files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::headless::NamedFile;

    fn files(names: &[&str]) -> Vec<NamedFile> {
        names.iter().map(|n| NamedFile::new(*n)).collect()
    }

    fn names(files: &[NamedFile]) -> Vec<&str> {
        files.iter().map(NamedFile::name).collect()
    }

    #[test]
    fn test_parse_normalizes_tokens() {
        let spec = AcceptSpec::parse(" .PNG , .jpg,, .png ,");
        assert_eq!(spec.extensions(), [".png".to_string(), ".jpg".to_string()]);
    }

    #[test]
    fn test_equivalent_spellings() {
        for raw in [".PNG", " .png ", ".png"] {
            let spec = AcceptSpec::parse(raw);
            assert!(spec.accepts_name("photo.png"), "{raw:?}");
            assert!(spec.accepts_name("photo.PNG"), "{raw:?}");
            assert!(!spec.accepts_name("photo.jpg"), "{raw:?}");
        }
    }

    #[test]
    fn test_accept_all() {
        for spec in [
            AcceptSpec::parse(""),
            AcceptSpec::parse("  "),
            AcceptSpec::parse(" , ,"),
            AcceptSpec::from_option(None),
        ] {
            assert!(spec.accepts_all());
            let result = spec.validate(&files(&["a.anything", "noext", ".hidden"]));
            assert!(result.is_verified());
            assert_eq!(result.valid_files.len(), 3);
        }
    }

    #[test]
    fn test_last_dot_wins() {
        let spec = AcceptSpec::parse(".gz");
        assert!(spec.accepts_name("archive.tar.gz"));
        assert!(!spec.accepts_name("archive.gz.tar"));
    }

    #[test]
    fn test_name_without_dot_has_empty_extension() {
        let spec = AcceptSpec::parse(".png");
        assert!(!spec.accepts_name("README"));
        assert!(!spec.accepts_name("trailing."));

        let spec = AcceptSpec::parse(".png,.");
        assert!(spec.accepts_name("README"));
        assert!(spec.accepts_name("trailing."));
        assert!(!spec.accepts_name("photo.jpg"));
    }

    #[test]
    fn test_partition_preserves_order() {
        let spec = AcceptSpec::parse(".jpg,.png");
        let batch = files(&["b.txt", "a.jpg", "c.PNG", "d", "e.jpg.exe", "f.jpg"]);
        let result = spec.validate(&batch);

        assert!(!result.is_verified());
        assert_eq!(names(&result.valid_files), ["a.jpg", "c.PNG", "f.jpg"]);
        assert_eq!(names(&result.invalid_files), ["b.txt", "d", "e.jpg.exe"]);
        assert_eq!(result.len(), batch.len());
    }

    #[test]
    fn test_empty_batch_verifies() {
        let result = AcceptSpec::parse(".jpg").validate::<NamedFile>(&[]);
        assert!(result.is_verified());
        assert!(result.is_empty());
    }
}
