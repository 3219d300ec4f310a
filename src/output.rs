use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::model::FunctionRecord;

/// Serialize the catalog as one compact JSON array. The file only appears
/// once it is complete.
pub fn write_artifact(path: &Path, records: &[FunctionRecord]) -> Result<()> {
    let json = serde_json::to_string(records)?;
    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    info!("Wrote {} functions to {}", records.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
