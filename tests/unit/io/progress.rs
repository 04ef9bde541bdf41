//! Tests for the photo export progress bar

#[cfg(test)]
mod tests {
    use runway_emulator::io::progress::ProgressManager;
    use runway_emulator::placement::Point;

    // Tests a fresh manager has nothing to report
    // Verified by starting with a nonzero total
    #[test]
    fn test_new_manager_is_idle() {
        let manager = ProgressManager::default();
        assert_eq!(manager.total(), 0);
        assert_eq!(manager.position(), 0);
    }

    // Tests each saved photo advances the bar by one
    // Verified by incrementing by the photo index
    #[test]
    fn test_photo_saved_advances() {
        let mut manager = ProgressManager::new();
        manager.initialize(20);

        manager.photo_saved(0, Point::new(0, 0));
        manager.photo_saved(1, Point::new(480, 0));
        manager.photo_saved(2, Point::new(960, 0));

        assert_eq!(manager.total(), 20);
        assert_eq!(manager.position(), 3);
        manager.finish();
    }

    // Tests suspended output runs once and leaves the bar position alone
    // Verified by advancing the bar inside suspend
    #[test]
    fn test_suspend_runs_closure() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);
        manager.photo_saved(0, Point::new(0, 0));

        let mut calls = 0;
        let value = manager.suspend(|| {
            calls += 1;
            "logged"
        });

        assert_eq!(value, "logged");
        assert_eq!(calls, 1);
        assert_eq!(manager.position(), 1);
    }

    // Tests re-initializing resets the count
    // Verified by reusing the previous bar
    #[test]
    fn test_initialize_resets() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);
        manager.photo_saved(0, Point::new(0, 0));

        manager.initialize(5);

        assert_eq!(manager.total(), 5);
        assert_eq!(manager.position(), 0);
    }
}
