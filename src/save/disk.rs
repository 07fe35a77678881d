use super::record::Record;
use crate::Error;
use std::path::Path;

/// write a record as pretty-printed json. a failed write surfaces as
/// Error::Io and never touches in-memory state.
pub fn write(path: &Path, record: &Record) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(record)
        .map_err(|e| Error::MalformedState(e.to_string()))?;
    std::fs::write(path, json)?;
    log::info!("{:<24}{}", "saved session", path.display());
    Ok(())
}

/// read a record back. anything that is not a structured session record
/// is a MalformedState, a missing or unreadable file is Io.
pub fn read(path: &Path) -> Result<Record, Error> {
    let json = std::fs::read_to_string(path)?;
    let record = serde_json::from_str::<Record>(&json)
        .map_err(|e| Error::MalformedState(e.to_string()))?;
    log::info!("{:<24}{}", "loaded session", path.display());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::Status;

    #[test]
    fn round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let record = Record {
            status: Status::InProgress,
            rules: Some("Unanimity".to_string()),
            players: vec!["Alice".to_string()],
            backlog: vec!["Feature A".to_string()],
            current_feature_index: 0,
            current_round_number: 1,
            validated_features: Default::default(),
        };
        write(&path, &record).unwrap();
        assert!(read(&path).unwrap() == record);
    }

    #[test]
    fn missing_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.json");
        assert!(matches!(read(&path), Err(Error::Io(_))));
    }

    #[test]
    fn garbage_is_malformed_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(matches!(read(&path), Err(Error::MalformedState(_))));
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(read(&path), Err(Error::MalformedState(_))));
    }
}
