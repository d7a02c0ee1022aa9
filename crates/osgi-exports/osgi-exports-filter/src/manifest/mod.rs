//! JAR manifest main-section reading.
//!
//! Main attributes are `Name: value` lines. A line starting with a single
//! space continues the previous value. The first blank line ends the main
//! section; per-entry sections after it are ignored.

pub mod archive;

use osgi_exports_core::{ArchiveError, FxHashMap};

/// Main attributes of a bundle manifest. Lookups ignore ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    main: FxHashMap<String, String>,
}

impl Manifest {
    /// Parse manifest text. `archive` names the source in errors.
    pub fn parse(archive: &str, text: &str) -> Result<Self, ArchiveError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        // CRLF, LF and bare CR all end a line
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut main: FxHashMap<String, String> = FxHashMap::default();
        let mut current: Option<String> = None;

        for (index, line) in text.lines().enumerate() {
            if line.is_empty() {
                break;
            }

            if let Some(continuation) = line.strip_prefix(' ') {
                let value = current
                    .as_ref()
                    .and_then(|name| main.get_mut(name))
                    .ok_or_else(|| malformed(archive, index))?;
                value.push_str(continuation);
                continue;
            }

            let (name, value) = line
                .split_once(": ")
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| malformed(archive, index))?;
            let key = name.to_ascii_lowercase();
            main.insert(key.clone(), value.to_string());
            current = Some(key);
        }

        Ok(Self { main })
    }

    pub fn main_attribute(&self, name: &str) -> Option<&str> {
        self.main
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.main.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }
}

fn malformed(archive: &str, index: usize) -> ArchiveError {
    ArchiveError::MalformedManifest {
        archive: archive.to_string(),
        line: index + 1,
    }
}
