//! Keeps `tests/unit` an exact mirror of the source files under `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Files that organise modules rather than implement behaviour
    fn is_exempt(relative: &str) -> bool {
        matches!(relative, "lib.rs" | "main.rs") || relative.ends_with("mod.rs")
    }

    fn rust_files(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs")
                    && let Ok(relative) = path.strip_prefix(root)
                {
                    found.insert(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }

        Ok(found)
    }

    fn mirrored_sets() -> (BTreeSet<String>, BTreeSet<String>) {
        let sources = rust_files(Path::new("src")).unwrap_or_default();
        let tests = rust_files(Path::new("tests/unit")).unwrap_or_default();

        (
            sources.into_iter().filter(|p| !is_exempt(p)).collect(),
            tests.into_iter().filter(|p| !is_exempt(p)).collect(),
        )
    }

    // Tests that every source module has a unit test file at the same path
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let (sources, tests) = mirrored_sets();
        assert!(!sources.is_empty(), "no source files found under src");

        let missing: Vec<&String> = sources.difference(&tests).collect();
        assert!(
            missing.is_empty(),
            "source files without tests/unit counterparts: {missing:?}"
        );
    }

    // Tests that no unit test file outlives its source module
    #[test]
    fn test_no_orphaned_unit_tests() {
        let (sources, tests) = mirrored_sets();

        let orphaned: Vec<&String> = tests.difference(&sources).collect();
        assert!(
            orphaned.is_empty(),
            "tests/unit files without a src counterpart: {orphaned:?}"
        );
    }
}
