//! Unit tests for entry predicates and filter composition

#[cfg(test)]
mod tests {
    use crate::fixtures::write_file_sync;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use treewalk::services::filter::{
        EntryPredicate, ExtensionPredicate, FilterChain, MinSizePredicate, exceeds_min_size,
        extension_matches,
    };
    use treewalk::{EntryKind, WalkConfig, WalkEntry};

    fn file(name: &str, size: u64) -> WalkEntry {
        WalkEntry::with_size(PathBuf::from("root").join(name), EntryKind::File, size)
    }

    #[test]
    fn test_extension_matches() {
        assert!(extension_matches("dir.log", ".log"));
        assert!(!extension_matches("dir.gz", ".log"));
        assert!(!extension_matches("dir.LOG", ".log"));
        assert!(extension_matches("anything", ""));
        assert!(extension_matches("archive.tar.gz", ".tar.gz"));
    }

    #[test]
    fn test_exceeds_min_size() {
        assert!(exceeds_min_size(0, 0));
        assert!(exceeds_min_size(11, 10));
        assert!(!exceeds_min_size(10, 10));
        assert!(exceeds_min_size(10, 9));
    }

    #[test]
    fn test_inactive_predicates_are_not_built() {
        assert!(ExtensionPredicate::active("").is_none());
        assert!(MinSizePredicate::active(0).is_none());
        assert!(FilterChain::from_config(&WalkConfig::default()).is_empty());

        let config = WalkConfig {
            extension: ".log".to_string(),
            min_size: 10,
            ..WalkConfig::default()
        };
        assert_eq!(FilterChain::from_config(&config).len(), 2);
    }

    #[test]
    fn test_empty_chain_accepts_every_file() {
        let chain = FilterChain::new();
        assert!(chain.is_eligible(&file("a.bin", 0)).unwrap());
        assert!(chain.is_eligible(&file("b", 1_000)).unwrap());
    }

    #[test]
    fn test_directories_and_others_never_eligible() {
        let chain = FilterChain::new();
        let dir = WalkEntry::new(PathBuf::from("root/sub.log"), EntryKind::Directory);
        let link = WalkEntry::new(PathBuf::from("root/link.log"), EntryKind::Other);

        assert!(!chain.is_eligible(&dir).unwrap());
        assert!(!chain.is_eligible(&link).unwrap());
    }

    #[test]
    fn test_chain_is_logical_and() {
        let config = WalkConfig {
            extension: ".log".to_string(),
            min_size: 10,
            ..WalkConfig::default()
        };
        let chain = FilterChain::from_config(&config);

        assert!(chain.is_eligible(&file("big.log", 11)).unwrap());
        assert!(!chain.is_eligible(&file("small.log", 10)).unwrap());
        assert!(!chain.is_eligible(&file("big.txt", 11)).unwrap());
    }

    #[test]
    fn test_min_size_resolves_lazily() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.bin");
        write_file_sync(&path, [0u8; 20]).unwrap();

        let entry = WalkEntry::new(path.clone(), EntryKind::File);
        let predicate = MinSizePredicate::active(15).unwrap();
        assert_eq!(predicate.name(), "min-size");
        assert!(predicate.matches(&entry).unwrap());

        // The cached size survives the file going away.
        std::fs::remove_file(&path).unwrap();
        assert_eq!(entry.size().unwrap(), 20);
    }

    #[test]
    fn test_size_of_missing_file_is_an_error() {
        let entry = WalkEntry::new(PathBuf::from("/no/such/file.bin"), EntryKind::File);
        let predicate = MinSizePredicate::active(1).unwrap();

        let err = predicate.matches(&entry).expect_err("stat must fail");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
