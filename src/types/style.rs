//! Colour and shape parameters for the procedural icon.

use serde::{Deserialize, Serialize};

use super::Colour;
use crate::error::{IconError, Result};

/// Tunable parameters of the procedural icon.
///
/// Every field defaults to the stock artwork, so an empty `style:` block
/// (or none at all) renders the standard icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconStyle {
    /// Background gradient colour at the top edge.
    pub background_top: Colour,

    /// Background gradient colour at the bottom edge.
    pub background_bottom: Colour,

    /// Page gradient colour at the top of the page.
    pub page_top: Colour,

    /// Page gradient colour at the bottom of the page.
    pub page_bottom: Colour,

    /// Colour of the outermost sound-wave bars.
    pub wave_outer: Colour,

    /// Colour of the centre sound-wave bar.
    pub wave_center: Colour,

    /// Notebook rule colour, usually translucent.
    pub rule: Colour,

    /// Number of sound-wave bars.
    pub bars: usize,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background_top: Colour::rgb(41, 128, 185),
            background_bottom: Colour::rgb(33, 76, 156),
            page_top: Colour::WHITE,
            page_bottom: Colour::rgb(245, 250, 255),
            wave_outer: Colour::rgb(89, 65, 169),
            wave_center: Colour::rgb(41, 128, 185),
            rule: Colour::new(200, 210, 230, 100),
            bars: 7,
        }
    }
}

impl IconStyle {
    /// Check values the renderer cannot draw.
    pub fn validate(&self) -> Result<()> {
        if self.bars < 2 {
            return Err(IconError::Config {
                message: format!("style.bars must be at least 2, got {}", self.bars),
                help: Some("The sound wave needs a centre bar and at least one side".to_string()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(IconStyle::default().validate().is_ok());
    }

    #[test]
    fn test_single_bar_rejected() {
        let style = IconStyle {
            bars: 1,
            ..Default::default()
        };
        assert!(matches!(style.validate(), Err(IconError::Config { .. })));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let style: IconStyle = serde_yaml::from_str("wave_center: \"#FF0000\"").unwrap();
        assert_eq!(style.wave_center, Colour::rgb(255, 0, 0));
        assert_eq!(style.background_top, IconStyle::default().background_top);
        assert_eq!(style.bars, 7);
    }

    #[test]
    fn test_bad_colour_fails_to_parse() {
        let parsed: std::result::Result<IconStyle, _> = serde_yaml::from_str("rule: \"#nothex\"");
        assert!(parsed.is_err());
    }
}
