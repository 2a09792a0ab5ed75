use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub const LOG_FILE: &str = "drill_debug.log";

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens the debug log next to the binary. Logging stays a no-op if the
/// file cannot be opened.
pub fn init() {
    init_at(Path::new(LOG_FILE));
}

pub fn init_at(path: &Path) {
    let mut logger = LOGGER.lock().unwrap();
    if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_mut() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(logger, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn log_without_init_is_a_noop() {
        log("dropped on the floor");
    }

    #[test]
    fn init_at_writes_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drill_test.log");
        init_at(&path);
        log("round started");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("round started"));
        assert!(content.starts_with('['));
    }
}
