//! Extension identifiers and the list files that carry them.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{VsextError, VsextResult};

/// An installable extension token such as `rust-lang.rust-analyzer`.
///
/// The value is opaque: nothing here checks its shape, the editor does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionId(String);

impl ExtensionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered identifiers from an extension list file. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionList {
    ids: Vec<ExtensionId>,
}

impl ExtensionList {
    /// Parse newline-delimited text, skipping blank lines.
    ///
    /// A leading byte-order mark (as Notepad writes) is dropped.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let ids = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ExtensionId::new)
            .collect();
        Self { ids }
    }

    /// Read a list file. A path that is empty or not an existing file is
    /// rejected before anything is read.
    pub fn read(path: &Path) -> VsextResult<Self> {
        if path.as_os_str().is_empty() {
            return Err(VsextError::InvalidInput(
                "no extension list file was given".to_string(),
            ));
        }
        if !path.is_file() {
            return Err(VsextError::InvalidInput(format!(
                "extension list file {} does not exist",
                path.display()
            )));
        }

        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtensionId> {
        self.ids.iter()
    }
}

impl<'a> IntoIterator for &'a ExtensionList {
    type Item = &'a ExtensionId;
    type IntoIter = std::slice::Iter<'a, ExtensionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ids(list: &ExtensionList) -> Vec<&str> {
        list.iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let list = ExtensionList::parse("b.two\na.one\nb.two\n");
        assert_eq!(ids(&list), vec!["b.two", "a.one", "b.two"]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_crlf() {
        let list = ExtensionList::parse("a.b\r\n\r\n   \r\n  c.d  \r\n");
        assert_eq!(ids(&list), vec!["a.b", "c.d"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let list = ExtensionList::parse("\u{feff}a.b\r\nc.d\r\n");
        assert_eq!(ids(&list), vec!["a.b", "c.d"]);

        let list = ExtensionList::parse("\u{feff}\r\na.b\n");
        assert_eq!(ids(&list), vec!["a.b"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(ExtensionList::parse("").is_empty());
        assert!(ExtensionList::parse("\n\n").is_empty());
    }

    #[test]
    fn test_read_missing_file_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let err = ExtensionList::read(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, VsextError::InvalidInput(_)));
    }

    #[test]
    fn test_read_empty_path_is_invalid_input() {
        let err = ExtensionList::read(Path::new("")).unwrap_err();
        assert!(matches!(err, VsextError::InvalidInput(_)));
    }

    #[test]
    fn test_read_directory_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let err = ExtensionList::read(dir.path()).unwrap_err();
        assert!(matches!(err, VsextError::InvalidInput(_)));
    }

    #[test]
    fn test_read_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("extensions.txt");
        fs::write(&path, "ms-python.python\nrust-lang.rust-analyzer\n").unwrap();

        let list = ExtensionList::read(&path).unwrap();
        assert_eq!(ids(&list), vec!["ms-python.python", "rust-lang.rust-analyzer"]);
    }
}
