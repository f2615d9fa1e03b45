use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use numvar_core::OperatorRegistry;

use crate::errors::GenerationError;
use crate::normalize::clean_source;

/// Load the blacklist CSV into a set of normalized numbers.
///
/// The file is expected to carry at least a `Phone` column. Entries are
/// normalized with the source cleaning policy so they compare against
/// cleaned source numbers. A missing file means an empty blacklist, not an
/// error; malformed rows are skipped.
pub fn load_blacklist(
    path: &Path,
    registry: &OperatorRegistry,
) -> Result<HashSet<String>, GenerationError> {
    if !path.exists() {
        return Ok(HashSet::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let phone_idx = reader
        .headers()?
        .iter()
        .position(|header| header.eq_ignore_ascii_case("phone"));
    let Some(phone_idx) = phone_idx else {
        warn!(path = %path.display(), "blacklist file has no Phone column");
        return Ok(HashSet::new());
    };

    let mut blacklist = HashSet::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping malformed blacklist row");
                continue;
            }
        };
        if let Some(number) = record
            .get(phone_idx)
            .and_then(|raw| clean_source(raw, registry))
        {
            blacklist.insert(number);
        }
    }

    Ok(blacklist)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn temp_csv(label: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "numvar_blacklist_{}_{}.csv",
            label,
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, contents).expect("write temp blacklist");
        path
    }

    #[test]
    fn missing_file_is_empty_blacklist() {
        let registry = OperatorRegistry::moldova();
        let path = std::env::temp_dir().join("numvar_blacklist_does_not_exist.csv");
        let blacklist = load_blacklist(&path, &registry).expect("load blacklist");
        assert!(blacklist.is_empty());
    }

    #[test]
    fn entries_are_normalized_with_source_policy() {
        let registry = OperatorRegistry::moldova();
        let path = temp_csv("normalized", "Phone\n0601234567\n79 99 99 99\n\n");
        let blacklist = load_blacklist(&path, &registry).expect("load blacklist");
        assert!(blacklist.contains("60123456"));
        assert!(blacklist.contains("79999999"));
        assert_eq!(blacklist.len(), 2);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_phone_column_yields_empty_set() {
        let registry = OperatorRegistry::moldova();
        let path = temp_csv("no_column", "Number,Operator\n60123456,Orange\n");
        let blacklist = load_blacklist(&path, &registry).expect("load blacklist");
        assert!(blacklist.is_empty());
        let _ = fs::remove_file(path);
    }
}
