//! Representation tokens and their engine style descriptors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Molecular representation style, by wire token.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Representation {
    /// Space-filling spheres.
    Sphere,
    /// Sticks plus reduced spheres.
    #[default]
    BallAndStick,
    /// Sticks only.
    Stick,
    /// Wireframe lines.
    Line,
}

impl Representation {
    /// Parse a wire token; `None` for unrecognized tokens.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "sphere" => Some(Self::Sphere),
            "ballAndStick" => Some(Self::BallAndStick),
            "stick" => Some(Self::Stick),
            "line" => Some(Self::Line),
            _ => None,
        }
    }

    /// The engine style descriptor for this representation.
    #[must_use]
    pub fn style(self) -> StyleSpec {
        let part = |radius, linewidth| PartStyle {
            radius,
            linewidth,
            colorscheme: "Jmol".to_owned(),
            opacity: None,
        };
        match self {
            Self::Sphere => StyleSpec {
                sphere: Some(part(Some(0.7), None)),
                ..StyleSpec::default()
            },
            Self::BallAndStick => StyleSpec {
                stick: Some(part(Some(0.15), None)),
                sphere: Some(part(Some(0.4), None)),
                ..StyleSpec::default()
            },
            Self::Stick => StyleSpec {
                stick: Some(part(Some(0.1), None)),
                ..StyleSpec::default()
            },
            Self::Line => StyleSpec {
                line: Some(part(None, Some(2.0))),
                ..StyleSpec::default()
            },
        }
    }
}

/// Style parameters for one part (sphere, stick, or line) of a
/// representation. Serializes to the engine's per-part style dictionary;
/// unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PartStyle {
    /// Sphere or stick radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Line width, for the line part only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linewidth: Option<f64>,
    /// Coloring scheme name (Jmol, element, ...).
    pub colorscheme: String,
    /// Opacity in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// An engine style dictionary: any combination of sphere, stick, and line
/// parts. The empty spec clears all styling.
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
pub struct StyleSpec {
    /// Sphere part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sphere: Option<PartStyle>,
    /// Stick part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stick: Option<PartStyle>,
    /// Line part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<PartStyle>,
}

impl StyleSpec {
    /// The style descriptor for a wire token; unrecognized tokens map to
    /// the empty spec.
    #[must_use]
    pub fn for_token(token: &str) -> Self {
        Representation::from_token(token)
            .map_or_else(Self::default, Representation::style)
    }

    /// Whether no part is styled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sphere.is_none() && self.stick.is_none() && self.line.is_none()
    }

    /// Override the coloring scheme and/or opacity across all active parts.
    #[must_use]
    pub fn with_overrides(
        mut self,
        colorscheme: Option<&str>,
        opacity: Option<f64>,
    ) -> Self {
        for part in [&mut self.sphere, &mut self.stick, &mut self.line]
            .into_iter()
            .flatten()
        {
            if let Some(scheme) = colorscheme {
                part.colorscheme = scheme.to_owned();
            }
            if opacity.is_some() {
                part.opacity = opacity;
            }
        }
        self
    }
}

/// Default representation and background for a fresh session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Representation applied when a structure loads.
    #[schemars(title = "Representation")]
    pub representation: Representation,
    /// Initial background color (CSS name or hex string).
    #[schemars(title = "Background")]
    pub background: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            representation: Representation::default(),
            background: "white".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for (token, rep) in [
            ("sphere", Representation::Sphere),
            ("ballAndStick", Representation::BallAndStick),
            ("stick", Representation::Stick),
            ("line", Representation::Line),
        ] {
            assert_eq!(Representation::from_token(token), Some(rep));
            let json = serde_json::to_value(rep).unwrap();
            assert_eq!(json, serde_json::Value::String(token.to_owned()));
        }
        assert_eq!(Representation::from_token("cartoon"), None);
    }

    #[test]
    fn style_table_values() {
        let sphere = Representation::Sphere.style();
        assert_eq!(sphere.sphere.as_ref().unwrap().radius, Some(0.7));
        assert!(sphere.stick.is_none());

        let bas = Representation::BallAndStick.style();
        assert_eq!(bas.stick.as_ref().unwrap().radius, Some(0.15));
        assert_eq!(bas.sphere.as_ref().unwrap().radius, Some(0.4));

        let stick = Representation::Stick.style();
        assert_eq!(stick.stick.as_ref().unwrap().radius, Some(0.1));

        let line = Representation::Line.style();
        assert_eq!(line.line.as_ref().unwrap().linewidth, Some(2.0));
        assert_eq!(line.line.as_ref().unwrap().colorscheme, "Jmol");
    }

    #[test]
    fn fresh_defaults_match_the_initial_ui_state() {
        // The construction path must agree with the deserialization path:
        // a fresh session starts on a white background, not an empty string.
        let opts = DisplayOptions::default();
        assert_eq!(opts.background, "white");
        assert_eq!(opts.representation, Representation::BallAndStick);

        let parsed: DisplayOptions = toml::from_str("").unwrap();
        assert_eq!(parsed, opts);
    }

    #[test]
    fn unknown_token_maps_to_empty_spec() {
        assert!(StyleSpec::for_token("cartoon").is_empty());
        assert!(!StyleSpec::for_token("stick").is_empty());
    }

    #[test]
    fn overrides_apply_to_every_active_part() {
        let spec = Representation::BallAndStick
            .style()
            .with_overrides(Some("element"), Some(0.5));
        let stick = spec.stick.unwrap();
        let sphere = spec.sphere.unwrap();
        assert_eq!(stick.colorscheme, "element");
        assert_eq!(stick.opacity, Some(0.5));
        assert_eq!(sphere.colorscheme, "element");
        assert_eq!(sphere.opacity, Some(0.5));
    }

    #[test]
    fn style_dictionary_shape() {
        let json =
            serde_json::to_value(Representation::Stick.style()).unwrap();
        assert_eq!(json["stick"]["radius"], 0.1);
        assert_eq!(json["stick"]["colorscheme"], "Jmol");
        assert!(json.get("sphere").is_none());
        assert!(json["stick"].get("opacity").is_none());
    }
}
