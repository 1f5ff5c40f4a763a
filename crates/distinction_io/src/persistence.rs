//! Snapshot persistence layered on the engine's read interface.

use crate::error::{IoError, Result};
use crate::serialization::{read_json_file, write_json_file};
use distinction_core::Engine;
use distinction_data::UniverseSnapshot;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk snapshot format version.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Envelope written around a serialized universe snapshot.
///
/// The fingerprint is the engine's content digest at save time; load and
/// restore recheck it so silent corruption or hand-editing is caught before
/// an engine is rebuilt from the data.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SnapshotFile {
    pub format_version: u32,
    pub saved_at: String,
    pub fingerprint: String,
    pub snapshot: UniverseSnapshot,
}

/// Writes the engine's current snapshot to `path` atomically.
pub fn save_snapshot<P: AsRef<Path>>(path: P, engine: &Engine) -> Result<()> {
    let file = SnapshotFile {
        format_version: SNAPSHOT_FORMAT_VERSION,
        saved_at: chrono::Utc::now().to_rfc3339(),
        fingerprint: engine.fingerprint(),
        snapshot: engine.snapshot(),
    };
    write_json_file(path, &file)
}

/// Reads a snapshot file and validates its format version and closure.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<SnapshotFile> {
    let file: SnapshotFile = read_json_file(path)?;
    if file.format_version != SNAPSHOT_FORMAT_VERSION {
        return Err(IoError::validation(format!(
            "Unsupported snapshot format version: {}",
            file.format_version
        )));
    }
    if !file.snapshot.is_closed() {
        return Err(IoError::validation(
            "Snapshot relation references an unknown distinction",
        ));
    }
    Ok(file)
}

/// Rebuilds an engine from a snapshot file.
///
/// The engine re-validates every registry invariant during reconstruction,
/// and the stored fingerprint must match the one recomputed from the
/// rebuilt state.
pub fn restore_engine<P: AsRef<Path>>(path: P) -> Result<Engine> {
    let file = load_snapshot(path)?;
    let engine = Engine::from_snapshot(&file.snapshot)
        .map_err(|e| IoError::validation(format!("Snapshot failed invariant checks: {e}")))?;
    if engine.fingerprint() != file.fingerprint {
        return Err(IoError::validation("Snapshot fingerprint mismatch"));
    }
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "distinction_persistence_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    fn grown_engine() -> Engine {
        let mut engine = Engine::new();
        let d0 = engine.d0().id.clone();
        let d1 = engine.d1().id.clone();
        let d2 = engine.synthesize(&d0, &d1).unwrap();
        engine.synthesize(&d0, &d2.id).unwrap();
        engine
    }

    #[test]
    fn test_save_load_restore() {
        let path = temp_path("roundtrip");
        let engine = grown_engine();
        save_snapshot(&path, &engine).unwrap();

        let file = load_snapshot(&path).unwrap();
        assert_eq!(file.format_version, SNAPSHOT_FORMAT_VERSION);
        assert_eq!(file.fingerprint, engine.fingerprint());

        let restored = restore_engine(&path).unwrap();
        assert_eq!(restored.fingerprint(), engine.fingerprint());
        assert_eq!(restored.distinction_count(), 4);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_tampered_fingerprint_rejected() {
        let path = temp_path("tampered");
        let engine = grown_engine();
        let file = SnapshotFile {
            format_version: SNAPSHOT_FORMAT_VERSION,
            saved_at: chrono::Utc::now().to_rfc3339(),
            fingerprint: "0".repeat(64),
            snapshot: engine.snapshot(),
        };
        write_json_file(&path, &file).unwrap();
        assert!(matches!(
            restore_engine(&path),
            Err(IoError::Validation(_))
        ));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let path = temp_path("version");
        let engine = grown_engine();
        let file = SnapshotFile {
            format_version: SNAPSHOT_FORMAT_VERSION + 1,
            saved_at: chrono::Utc::now().to_rfc3339(),
            fingerprint: engine.fingerprint(),
            snapshot: engine.snapshot(),
        };
        write_json_file(&path, &file).unwrap();
        assert!(matches!(load_snapshot(&path), Err(IoError::Validation(_))));
        std::fs::remove_file(&path).ok();
    }
}
