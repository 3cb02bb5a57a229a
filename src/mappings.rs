use crate::error::{GenerateError, Result};

/// A single extension-to-media-type mapping read from a mappings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub extension: String,
    pub media_type: String,
}

impl Mapping {
    /// Splits a line at its first run of whitespace. The token before the
    /// run is the extension; everything after it is the media type, kept
    /// verbatim so values like `text/csv; charset=utf-8` stay intact.
    fn from_line(line: &str) -> Option<Mapping> {
        let line = line.trim_start();
        let split_at = line.find(char::is_whitespace)?;
        let media_type = line[split_at..].trim_start();
        if media_type.is_empty() {
            return None;
        }
        Some(Mapping {
            extension: line[..split_at].to_string(),
            media_type: media_type.to_string(),
        })
    }
}

/// Parses the full contents of a mappings file, one record per line.
///
/// Mappings come back in file order, duplicates included. Wholly-empty
/// lines (typically the artifact of a trailing newline) are skipped; any
/// other line that does not split into an extension and a media type fails
/// the whole parse.
pub fn parse_mappings(content: &str) -> Result<Vec<Mapping>> {
    content.lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| {
            Mapping::from_line(line).ok_or_else(|| GenerateError::MalformedLine {
                line: idx + 1,
                content: line.to_string(),
            })
        })
        .collect()
}
