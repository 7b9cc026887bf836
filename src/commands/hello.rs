/// Name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "World";

/// Returns the greeting for the provided name.
pub fn message(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_world() {
        assert_eq!(message(None), "Hello, World!");
    }

    #[test]
    fn greets_named_person() {
        assert_eq!(message(Some("Alice")), "Hello, Alice!");
    }
}
