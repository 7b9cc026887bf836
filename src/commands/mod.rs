pub mod hello;
pub mod version;

use crate::cli::Command;
use crate::error::CommandResult;

/// Dispatches execution to the appropriate command handler.
pub fn execute(command: &Command) -> CommandResult<String> {
    tracing::debug!(?command, "dispatching command");
    match command {
        Command::Version => Ok(version::message()),
        Command::Hello { name } => Ok(hello::message(name.as_deref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_version_to_its_handler() {
        let message = execute(&Command::Version).expect("version succeeds");
        assert_eq!(message, version::message());
    }

    #[test]
    fn routes_hello_to_its_handler() {
        let command = Command::Hello {
            name: Some("Alice".to_string()),
        };
        let message = execute(&command).expect("hello succeeds");
        assert_eq!(message, "Hello, Alice!");
    }
}
