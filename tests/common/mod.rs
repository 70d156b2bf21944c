use location_stub::FixtureStore;
use std::path::PathBuf;

/// Root of the fixtures shipped with the crate.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Fixture store rooted at the shipped fixtures directory.
pub fn fixture_store() -> FixtureStore {
    FixtureStore::new(fixtures_dir())
}
