use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugLevel::Debug => write!(f, "DEBUG"),
            DebugLevel::Info => write!(f, "INFO"),
            DebugLevel::Warn => write!(f, "WARN"),
            DebugLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCategory {
    Auth,
    Route,
    Form,
    Picture,
    Other,
}

impl fmt::Display for DebugCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugCategory::Auth => write!(f, "AUTH"),
            DebugCategory::Route => write!(f, "ROUTE"),
            DebugCategory::Form => write!(f, "FORM"),
            DebugCategory::Picture => write!(f, "PIC"),
            DebugCategory::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Clone)]
pub struct DebugEntry {
    pub timestamp: String,
    pub level: DebugLevel,
    pub category: DebugCategory,
    pub message: String,
}

impl fmt::Display for DebugEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:5} [{}] {}",
            self.timestamp, self.level, self.category, self.message
        )
    }
}

/// Bounded in-app activity log, rendered by the debug console view.
/// Entries are mirrored to `tracing` so the same events reach the
/// structured subscriber.
pub struct DebugLogger {
    entries: Arc<Mutex<Vec<DebugEntry>>>,
    max_entries: usize,
}

impl DebugLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            max_entries,
        }
    }

    pub fn log(&self, level: DebugLevel, category: DebugCategory, message: impl Into<String>) {
        let entry = DebugEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level,
            category,
            message: message.into(),
        };

        match level {
            DebugLevel::Debug => tracing::debug!(category = %category, "{}", entry.message),
            DebugLevel::Info => tracing::info!(category = %category, "{}", entry.message),
            DebugLevel::Warn => tracing::warn!(category = %category, "{}", entry.message),
            DebugLevel::Error => tracing::error!(category = %category, "{}", entry.message),
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
            if entries.len() > self.max_entries {
                entries.remove(0);
            }
        }
    }

    pub fn debug(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Debug, category, msg);
    }

    pub fn info(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Info, category, msg);
    }

    pub fn warn(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Warn, category, msg);
    }

    pub fn error(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Error, category, msg);
    }

    pub fn get_entries(&self) -> Vec<DebugEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn get_entries_by_category(&self, category: DebugCategory) -> Vec<DebugEntry> {
        self.entries
            .lock()
            .map(|e| {
                e.iter()
                    .filter(|entry| entry.category == category)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Clone for DebugLogger {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            max_entries: self.max_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_records_entries() {
        let logger = DebugLogger::new(10);
        logger.info(DebugCategory::Auth, "session established");
        logger.warn(DebugCategory::Route, "redirected");
        assert_eq!(logger.count(), 2);
    }

    #[test]
    fn test_category_filter() {
        let logger = DebugLogger::new(10);
        logger.info(DebugCategory::Auth, "a");
        logger.info(DebugCategory::Form, "b");
        logger.info(DebugCategory::Auth, "c");
        let auth = logger.get_entries_by_category(DebugCategory::Auth);
        assert_eq!(auth.len(), 2);
        assert_eq!(auth[1].message, "c");
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let logger = DebugLogger::new(2);
        logger.info(DebugCategory::Other, "1");
        logger.info(DebugCategory::Other, "2");
        logger.info(DebugCategory::Other, "3");
        let entries = logger.get_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "2");
        assert_eq!(entries[1].message, "3");
    }

    #[test]
    fn test_clear() {
        let logger = DebugLogger::new(10);
        logger.error(DebugCategory::Picture, "boom");
        logger.clear();
        assert_eq!(logger.count(), 0);
    }

    #[test]
    fn test_entry_display_contains_level_and_category() {
        let logger = DebugLogger::new(10);
        logger.warn(DebugCategory::Route, "guard redirect");
        let entry = &logger.get_entries()[0];
        let line = entry.to_string();
        assert!(line.contains("WARN"));
        assert!(line.contains("[ROUTE]"));
        assert!(line.contains("guard redirect"));
    }
}
