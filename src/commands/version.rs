use crate::cli::PROGRAM_NAME;

/// Returns the version banner printed by the `version` subcommand.
pub fn message() -> String {
    format!("{PROGRAM_NAME} version {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_program_and_version() {
        let banner = message();
        assert_eq!(
            banner,
            format!("hail version {}", env!("CARGO_PKG_VERSION"))
        );
    }
}
