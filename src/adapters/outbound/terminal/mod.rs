mod console_reporter;
mod stdin_prompt;

pub use console_reporter::ConsoleReporter;
pub use stdin_prompt::{read_answer, StdinPrompt};
