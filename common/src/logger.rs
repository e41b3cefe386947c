use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

const NOT_INITIALIZED: &str = "Logger not initialized! Call init_logger() first.";

pub struct Logger {
    prefix: Option<String>,
    enabled: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum LogRoute {
    Stdout(String),
    NotInitialized,
    Disabled,
}

impl Logger {
    fn new(prefix: Option<String>, enabled: bool) -> Self {
        Self { prefix, enabled }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => {
                format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
            }
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

/// First call wins; later calls are ignored. A disabled logger drops every message.
pub fn init_logger(prefix: Option<String>, enabled: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, enabled));
}

fn route(logger: Option<&Logger>, file: &str, line: u32, message: &str) -> LogRoute {
    match logger {
        None => LogRoute::NotInitialized,
        Some(logger) if !logger.enabled => LogRoute::Disabled,
        Some(logger) => LogRoute::Stdout(logger.format_line(file, line, message)),
    }
}

pub fn log(file: &str, line: u32, message: &str) {
    match route(LOGGER.get(), file, line, message) {
        LogRoute::Stdout(formatted) => println!("{}", formatted),
        LogRoute::NotInitialized => eprintln!("{}", NOT_INITIALIZED),
        LogRoute::Disabled => {}
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
