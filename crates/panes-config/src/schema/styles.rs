//! Cell style configuration types.

use serde::{Deserialize, Serialize};

/// Border drawn around the active cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderKind {
    Normal,
    #[default]
    Rounded,
    Thick,
    Double,
    Hidden,
}

/// Anchor used when joining blocks of unequal size.
///
/// Horizontal joins read `top`/`center`/`bottom`, vertical joins read
/// `left`/`center`/`right`; both map onto the same three anchors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    #[default]
    #[serde(rename = "start", alias = "top", alias = "left")]
    Start,
    #[serde(rename = "center", alias = "middle")]
    Center,
    #[serde(rename = "end", alias = "bottom", alias = "right")]
    End,
}

/// Visual treatment of active and inactive cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesConfig {
    pub active_border: BorderKind,
    /// Optional border colour: `#rrggbb` or a named colour such as `cyan`.
    pub active_border_color: Option<String>,
    /// Padding around inactive cells (valid range: 0-4).
    pub inactive_padding: u16,
    pub horizontal_join: Align,
    pub vertical_join: Align,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            active_border: BorderKind::Rounded,
            active_border_color: None,
            inactive_padding: 1,
            horizontal_join: Align::Start,
            vertical_join: Align::Start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_config_defaults() {
        let config = StylesConfig::default();
        assert_eq!(config.active_border, BorderKind::Rounded);
        assert_eq!(config.active_border_color, None);
        assert_eq!(config.inactive_padding, 1);
        assert_eq!(config.horizontal_join, Align::Start);
        assert_eq!(config.vertical_join, Align::Start);
    }

    #[test]
    fn align_accepts_axis_names() {
        let toml_str = r#"
horizontal_join = "bottom"
vertical_join = "right"
"#;
        let config: StylesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.horizontal_join, Align::End);
        assert_eq!(config.vertical_join, Align::End);

        let config: StylesConfig = toml::from_str("vertical_join = \"left\"").unwrap();
        assert_eq!(config.vertical_join, Align::Start);
    }

    #[test]
    fn border_kind_lowercase() {
        let config: StylesConfig = toml::from_str("active_border = \"double\"").unwrap();
        assert_eq!(config.active_border, BorderKind::Double);
    }

    #[test]
    fn unknown_border_kind_is_rejected() {
        assert!(toml::from_str::<StylesConfig>("active_border = \"dotted\"").is_err());
    }
}
