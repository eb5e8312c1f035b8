//! Text style descriptors for the styled header/standings text elements.
//!
//! A [`TextStyle`] always stores both the solid color and the gradient pair.
//! Which of them is in effect is decided at display time by
//! [`TextStyle::paint`]; toggling `gradient_enabled` never discards colors.

use serde::{Deserialize, Serialize};

/// Style descriptor for one styled text element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Color used when the gradient is disabled.
    pub solid_color: String,

    /// Selects the gradient pair over `solid_color`.
    pub gradient_enabled: bool,

    /// Gradient start color (left).
    pub gradient_from: String,

    /// Gradient end color (right).
    pub gradient_to: String,
}

/// The paint a renderer must apply for a [`TextStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPaint<'a> {
    Solid(&'a str),
    Gradient { from: &'a str, to: &'a str },
}

impl TextStyle {
    /// A gradient style whose solid fallback is the gradient start color.
    pub fn gradient(from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        Self {
            solid_color: from.clone(),
            gradient_enabled: true,
            gradient_from: from,
            gradient_to: to.into(),
        }
    }

    /// A solid-color style. The gradient pair is seeded with the same color.
    pub fn solid(color: impl Into<String>) -> Self {
        let color = color.into();
        Self {
            solid_color: color.clone(),
            gradient_enabled: false,
            gradient_from: color.clone(),
            gradient_to: color,
        }
    }

    /// Resolve the active paint: the gradient pair when enabled, otherwise
    /// the solid color. The inactive fields are never consulted.
    pub fn paint(&self) -> TextPaint<'_> {
        if self.gradient_enabled {
            TextPaint::Gradient {
                from: &self.gradient_from,
                to: &self.gradient_to,
            }
        } else {
            TextPaint::Solid(&self.solid_color)
        }
    }

    /// Merge a patch into this style. Fields absent from the patch are kept.
    pub fn apply(&mut self, patch: TextStylePatch) {
        if let Some(color) = patch.solid_color {
            self.solid_color = color;
        }
        if let Some(enabled) = patch.gradient_enabled {
            self.gradient_enabled = enabled;
        }
        if let Some(from) = patch.gradient_from {
            self.gradient_from = from;
        }
        if let Some(to) = patch.gradient_to {
            self.gradient_to = to;
        }
    }
}

/// Partial update for a [`TextStyle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TextStylePatch {
    pub solid_color: Option<String>,
    pub gradient_enabled: Option<bool>,
    pub gradient_from: Option<String>,
    pub gradient_to: Option<String>,
}

impl TextStylePatch {
    pub fn solid_color(mut self, color: impl Into<String>) -> Self {
        self.solid_color = Some(color.into());
        self
    }

    pub fn gradient_enabled(mut self, enabled: bool) -> Self {
        self.gradient_enabled = Some(enabled);
        self
    }

    pub fn gradient_from(mut self, color: impl Into<String>) -> Self {
        self.gradient_from = Some(color.into());
        self
    }

    pub fn gradient_to(mut self, color: impl Into<String>) -> Self {
        self.gradient_to = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_follows_gradient_flag() {
        let style = TextStyle::gradient("#00a8ff", "#ff3778");
        assert_eq!(
            style.paint(),
            TextPaint::Gradient {
                from: "#00a8ff",
                to: "#ff3778"
            }
        );

        let style = TextStyle::solid("#ffffff");
        assert_eq!(style.paint(), TextPaint::Solid("#ffffff"));
    }

    #[test]
    fn test_disabling_gradient_preserves_colors() {
        let mut style = TextStyle::gradient("#00a8ff", "#ff3778");
        style.apply(TextStylePatch::default().solid_color("#123456"));
        style.apply(TextStylePatch::default().gradient_enabled(false));

        assert_eq!(style.gradient_from, "#00a8ff");
        assert_eq!(style.gradient_to, "#ff3778");
        assert_eq!(style.paint(), TextPaint::Solid("#123456"));

        style.apply(TextStylePatch::default().gradient_enabled(true));
        assert_eq!(
            style.paint(),
            TextPaint::Gradient {
                from: "#00a8ff",
                to: "#ff3778"
            }
        );
        assert_eq!(style.solid_color, "#123456");
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = serde_json::to_value(TextStyle::solid("#fff")).unwrap();
        assert_eq!(json["solidColor"], "#fff");
        assert_eq!(json["gradientEnabled"], false);
        assert!(json.get("gradientFrom").is_some());
        assert!(json.get("gradientTo").is_some());
    }
}
