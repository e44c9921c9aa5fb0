use std::fs;
use std::io::{self, Read as _};
use std::path::Path;

use anyhow::{Context, Result};
use cwl_driver::InvocationEvent;

/// Read a file, or stdin when the path is `-`.
pub fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("cannot read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

/// Load an invocation event.
///
/// With `raw`, the input is the bare base64 payload; surrounding
/// whitespace (typically a trailing newline) is trimmed. Otherwise the
/// input is the host's JSON event, `{"awslogs": {"data": "..."}}`.
pub fn read_event(path: &Path, raw: bool) -> Result<InvocationEvent> {
    let text = read_text(path)?;
    if raw {
        return Ok(InvocationEvent::new(text.trim()));
    }
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not an invocation event", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn raw_payload_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.txt");
        fs::write(&path, "  H4sIAAAAAAAA/w==\n\n").unwrap();

        let event = read_event(&path, true).unwrap();
        assert_eq!(event.awslogs.data, "H4sIAAAAAAAA/w==");
    }

    #[test]
    fn json_event_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("event.json");
        fs::write(&path, r#"{"awslogs": {"data": "aGVsbG8="}}"#).unwrap();

        let event = read_event(&path, false).unwrap();
        assert_eq!(event.awslogs.data, "aGVsbG8=");
    }

    #[test]
    fn json_mode_rejects_bare_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.txt");
        fs::write(&path, "aGVsbG8=").unwrap();

        let err = read_event(&path, false).unwrap_err();
        assert!(format!("{err:#}").contains("is not an invocation event"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = read_text(&path).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}
