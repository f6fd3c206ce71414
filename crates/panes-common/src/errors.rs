use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Rejected grid shapes. A grid needs at least one row and every row needs
/// at least one pane.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("grid row {0} has no panes")]
    EmptyRow(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("invalid keybind: {0}")]
    InvalidKeybind(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PanesError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("terminal error: {0}")]
    Terminal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("keys.quit is empty".into());
        assert_eq!(err.to_string(), "config validation error: keys.quit is empty");
    }

    #[test]
    fn grid_error_display() {
        assert_eq!(GridError::EmptyGrid.to_string(), "grid has no rows");
        assert_eq!(GridError::EmptyRow(2).to_string(), "grid row 2 has no panes");
    }

    #[test]
    fn input_error_display() {
        let err = InputError::InvalidKeybind("unrecognized modifier: hyper".into());
        assert_eq!(
            err.to_string(),
            "invalid keybind: unrecognized modifier: hyper"
        );
    }

    #[test]
    fn panes_error_from_grid() {
        let err: PanesError = GridError::EmptyRow(0).into();
        assert!(matches!(err, PanesError::Grid(GridError::EmptyRow(0))));
        assert_eq!(err.to_string(), "grid row 0 has no panes");
    }

    #[test]
    fn panes_error_from_config() {
        let err: PanesError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, PanesError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn panes_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "tty missing");
        let err: PanesError = io_err.into();
        assert!(matches!(err, PanesError::Io(_)));
        assert!(err.to_string().contains("tty missing"));
    }

    #[test]
    fn panes_error_terminal() {
        let err = PanesError::Terminal("raw mode unavailable".into());
        assert_eq!(err.to_string(), "terminal error: raw mode unavailable");
    }
}
