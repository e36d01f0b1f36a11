use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The GraphQL files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct InputFiles {
    pub paths: Vec<PathBuf>,
    pub num_skipped: usize,
    pub errors: Vec<anyhow::Error>,
}

/// Recursively collects every file under `roots` whose extension is one of
/// `exts` (with or without a leading `.`).
///
/// A single file passed explicitly is kept even if its extension doesn't
/// match.
pub(crate) fn collect(roots: &[PathBuf], exts: &[String]) -> InputFiles {
    let exts: HashSet<&str> = exts
        .iter()
        .map(|ext| ext.strip_prefix('.').unwrap_or(ext))
        .collect();

    log::debug!("Scanning {} input paths...", roots.len());
    let mut found = InputFiles::default();
    for root in roots {
        for entry in WalkDir::new(root.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {root:#?}."
                    );
                    found.errors.push(e.into());
                    continue;
                },
            };
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }
            let matches_ext = path
                .extension()
                .is_some_and(|ext| exts.contains(ext.to_string_lossy().as_ref()));
            if matches_ext {
                log::trace!("Found file at {path:#?}.");
                found.paths.push(path.to_path_buf());
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.paths.is_empty()
        && let [only_root] = roots
        && only_root.is_file()
    {
        log::warn!(
            "Proceeding with {only_root:#?} even though it doesn't match any \
            of the --graphql-file-exts ({}).",
            exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.paths.push(only_root.clone());
    }

    found.paths.sort();
    log::debug!("Found {} GraphQL files.", found.paths.len());
    found
}
