//! Application error carrying the process exit code.
//!
//! Exit codes:
//! - `2`: input problems (unreadable file, malformed line, bad export path)
//! - `3`: statistics preconditions (empty file, fewer than two samples)
//! - `4`: rendering / terminal failures

pub const EXIT_INPUT: u8 = 2;
pub const EXIT_STATS: u8 = 3;
pub const EXIT_RENDER: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    pub fn stats(message: impl Into<String>) -> Self {
        Self::new(EXIT_STATS, message)
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(EXIT_RENDER, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
