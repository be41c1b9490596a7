//! Utilities for snapshot testing with insta

use insta::{assert_snapshot, Settings};

/// Configure insta settings for consistent snapshots
pub fn with_settings<F>(f: F)
where
    F: FnOnce(),
{
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path("../snapshots");
    settings.set_prepend_module_to_snapshot(false);
    settings.bind(f);
}

/// Helper for creating generated-header snapshots
pub fn assert_header_snapshot(name: &str, header_source: &str, generated: &str) {
    with_settings(|| {
        assert_snapshot!(
            name,
            format!(
                "=== INPUT (C header) ===\n{}\n\n=== OUTPUT (aliases) ===\n{}",
                header_source, generated
            )
        );
    });
}
