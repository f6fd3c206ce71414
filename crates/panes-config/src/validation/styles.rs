//! Style validation (padding range, border colour format).

use panes_style::parse_color;

use crate::schema::PanesConfig;

use super::helpers::validate_range;

pub(crate) fn validate_styles(errors: &mut Vec<String>, config: &PanesConfig) {
    let styles = &config.styles;
    validate_range(
        errors,
        "styles.inactive_padding",
        styles.inactive_padding,
        0,
        4,
    );

    if let Some(color) = &styles.active_border_color {
        if parse_color(color).is_none() {
            errors.push(format!(
                "styles.active_border_color = '{color}' is not a #rgb, #rrggbb or named colour"
            ));
        }
    }
}
