//! Detection of rule files already present in the project

use std::collections::BTreeMap;

use ruler_fs::NormalizedPath;

use crate::tables::RULE_FILES;

/// Target id to path for every known rule file present under `root`.
pub fn scan_existing_rule_files(root: &NormalizedPath) -> BTreeMap<String, NormalizedPath> {
    RULE_FILES
        .iter()
        .filter_map(|(relative, target_id)| {
            let path = root.join(relative);
            path.exists().then(|| (target_id.to_string(), path))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_nested_copilot_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".github")).unwrap();
        fs::write(temp.path().join(".github/copilot-instructions.md"), "x").unwrap();
        let root = NormalizedPath::new(temp.path());

        let found = scan_existing_rule_files(&root);
        assert_eq!(found.len(), 1);
        assert_eq!(found["copilot"], root.join(".github/copilot-instructions.md"));
    }
}
