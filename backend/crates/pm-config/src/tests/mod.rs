mod transfer;

use std::path::Path;

use tempfile::TempDir;

/// Temporary config directory pointed to by `PM_CONFIG_DIR`.
///
/// Every variable set through it is restored when it drops. Tests using it
/// must be `#[serial]`.
pub(crate) struct TestConfigDir {
    dir: TempDir,
    saved: Vec<(&'static str, Option<String>)>,
}

impl TestConfigDir {
    pub(crate) fn new() -> Self {
        let mut env = Self {
            dir: TempDir::new().unwrap(),
            saved: Vec::new(),
        };
        let path = env.dir.path().to_str().unwrap().to_string();
        env.set("PM_CONFIG_DIR", &path);
        env
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn set(&mut self, key: &'static str, value: &str) -> &mut Self {
        self.saved.push((key, std::env::var(key).ok()));
        unsafe { std::env::set_var(key, value) };
        self
    }

    pub(crate) fn write_config(&self, toml: &str) {
        std::fs::write(self.dir.path().join("config.toml"), toml).unwrap();
    }
}

impl Drop for TestConfigDir {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain(..).rev() {
            unsafe {
                match original {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
