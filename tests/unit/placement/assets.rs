//! Tests for target pool discovery and selection without replacement

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use runway_emulator::EmulatorError;
    use runway_emulator::placement::TargetPool;
    use std::collections::HashSet;
    use std::fs;
    use std::path::Path;

    fn write_targets(dir: &Path, count: usize) {
        for i in 0..count {
            RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]))
                .save(dir.join(format!("target_{i}.png")))
                .unwrap();
        }
    }

    // Tests only image files directly in the directory are candidates
    // Verified by removing the image extension filter
    #[test]
    fn test_from_directory_lists_images_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_targets(dir.path(), 3);
        fs::write(dir.path().join("notes.txt"), "not a target").unwrap();
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let pool = TargetPool::from_directory(dir.path()).unwrap();

        assert_eq!(pool.len(), 3);
        assert!(!pool.is_empty());
        assert_eq!(pool.directory(), dir.path());
        let names: Vec<_> = pool
            .candidates()
            .iter()
            .filter_map(|p| p.file_name()?.to_str().map(str::to_owned))
            .collect();
        assert_eq!(names, vec!["target_0.png", "target_1.png", "target_2.png"]);
    }

    // Tests selection picks distinct candidates
    // Verified by sampling with replacement
    #[test]
    fn test_select_without_replacement() {
        let dir = tempfile::tempdir().unwrap();
        write_targets(dir.path(), 5);
        let pool = TargetPool::from_directory(dir.path()).unwrap();

        for seed in 0..10 {
            let selected = pool.select(5, &mut StdRng::seed_from_u64(seed)).unwrap();
            let unique: HashSet<_> = selected.iter().collect();
            assert_eq!(selected.len(), 5);
            assert_eq!(unique.len(), 5);
        }
    }

    // Tests seeded selection is reproducible
    // Verified by skipping the path sort
    #[test]
    fn test_select_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        write_targets(dir.path(), 6);
        let pool = TargetPool::from_directory(dir.path()).unwrap();

        let first = pool.select(3, &mut StdRng::seed_from_u64(11)).unwrap();
        let second = pool.select(3, &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(first, second);
    }

    // Tests a short pool reports requested and available counts
    // Verified by truncating the selection instead of failing
    #[test]
    fn test_select_insufficient_assets() {
        let dir = tempfile::tempdir().unwrap();
        write_targets(dir.path(), 2);
        let pool = TargetPool::from_directory(dir.path()).unwrap();

        match pool.select(4, &mut StdRng::seed_from_u64(0)) {
            Err(EmulatorError::InsufficientAssets {
                requested,
                available,
                directory,
            }) => {
                assert_eq!(requested, 4);
                assert_eq!(available, 2);
                assert_eq!(directory, dir.path());
            }
            other => panic!("Expected InsufficientAssets, got {other:?}"),
        }
    }

    // Tests a missing directory is reported as not found
    // Verified by returning an empty pool instead
    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("targets_2");

        assert!(matches!(
            TargetPool::from_directory(&missing),
            Err(EmulatorError::FileNotFound { path }) if path == missing
        ));
    }
}
