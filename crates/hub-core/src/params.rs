//! Slider-driven parameters for the connector-line geometry.
//!
//! A [`Parameters`] value is an immutable snapshot. Every input event produces
//! a new snapshot via [`Parameters::with`]; nothing mutates a shared global.

use crate::constants::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("unknown control id `{0}`")]
    UnknownControl(String),
    #[error("invalid value `{raw}` for {key}")]
    InvalidValue { key: ParamKey, raw: String },
}

/// The seven values the full control panel exposes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    pub curvature: f64,
    pub thickness: f64,
    pub skew: f64,
    pub vertical_padding: f64,
    pub line_length: f64,
    pub glow_speed: f64,
    pub perspective: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            curvature: DEFAULT_CURVATURE,
            thickness: DEFAULT_THICKNESS,
            skew: DEFAULT_SKEW,
            vertical_padding: DEFAULT_VERTICAL_PADDING,
            line_length: DEFAULT_LINE_LENGTH,
            glow_speed: DEFAULT_GLOW_SPEED,
            perspective: DEFAULT_PERSPECTIVE,
        }
    }
}

impl Parameters {
    /// Return a copy with one field replaced.
    #[must_use]
    pub fn with(mut self, key: ParamKey, value: f64) -> Self {
        *self.field_mut(key) = value;
        self
    }

    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::Curvature => self.curvature,
            ParamKey::Thickness => self.thickness,
            ParamKey::Skew => self.skew,
            ParamKey::VerticalPadding => self.vertical_padding,
            ParamKey::LineLength => self.line_length,
            ParamKey::GlowSpeed => self.glow_speed,
            ParamKey::Perspective => self.perspective,
        }
    }

    fn field_mut(&mut self, key: ParamKey) -> &mut f64 {
        match key {
            ParamKey::Curvature => &mut self.curvature,
            ParamKey::Thickness => &mut self.thickness,
            ParamKey::Skew => &mut self.skew,
            ParamKey::VerticalPadding => &mut self.vertical_padding,
            ParamKey::LineLength => &mut self.line_length,
            ParamKey::GlowSpeed => &mut self.glow_speed,
            ParamKey::Perspective => &mut self.perspective,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Curvature,
    Thickness,
    Skew,
    VerticalPadding,
    LineLength,
    GlowSpeed,
    Perspective,
}

impl ParamKey {
    pub const ALL: [ParamKey; 7] = [
        ParamKey::Curvature,
        ParamKey::Thickness,
        ParamKey::Skew,
        ParamKey::VerticalPadding,
        ParamKey::LineLength,
        ParamKey::GlowSpeed,
        ParamKey::Perspective,
    ];

    /// DOM id of the range input bound to this key.
    pub fn control_id(self) -> &'static str {
        match self {
            ParamKey::Curvature => "curvature",
            ParamKey::Thickness => "thickness",
            ParamKey::Skew => "skew",
            ParamKey::VerticalPadding => "verticalPadding",
            ParamKey::LineLength => "lineLength",
            ParamKey::GlowSpeed => "glowSpeed",
            ParamKey::Perspective => "perspective",
        }
    }

    pub fn spec(self) -> &'static ControlSpec {
        // CONTROL_SPECS is laid out in ALL order
        &CONTROL_SPECS[self as usize]
    }

    /// Parse the string an `input` event carries; see [`parse_slider_value`].
    pub fn parse_value(self, raw: &str) -> Result<f64, ParamError> {
        parse_slider_value(raw).ok_or_else(|| ParamError::InvalidValue {
            key: self,
            raw: raw.to_string(),
        })
    }
}

/// Read a slider value. An empty string reads as zero, the same as the
/// browser's `Number("")`; text and non-finite numbers are rejected.
pub fn parse_slider_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_id())
    }
}

impl FromStr for ParamKey {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamKey::ALL
            .into_iter()
            .find(|k| k.control_id() == s)
            .ok_or_else(|| ParamError::UnknownControl(s.to_string()))
    }
}

/// Range and label of one slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSpec {
    pub key: ParamKey,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ControlSpec {
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub static CONTROL_SPECS: [ControlSpec; 7] = [
    ControlSpec {
        key: ParamKey::Curvature,
        label: "Curvature",
        min: 0.0,
        max: 100.0,
        step: 1.0,
        default: DEFAULT_CURVATURE,
    },
    ControlSpec {
        key: ParamKey::Thickness,
        label: "Thickness",
        min: 0.5,
        max: 6.0,
        step: 0.5,
        default: DEFAULT_THICKNESS,
    },
    ControlSpec {
        key: ParamKey::Skew,
        label: "Skew",
        min: -50.0,
        max: 50.0,
        step: 1.0,
        default: DEFAULT_SKEW,
    },
    ControlSpec {
        key: ParamKey::VerticalPadding,
        label: "Vertical Padding",
        min: 0.0,
        max: 150.0,
        step: 1.0,
        default: DEFAULT_VERTICAL_PADDING,
    },
    ControlSpec {
        key: ParamKey::LineLength,
        label: "Line Length",
        min: 0.0,
        max: 100.0,
        step: 1.0,
        default: DEFAULT_LINE_LENGTH,
    },
    ControlSpec {
        key: ParamKey::GlowSpeed,
        label: "Glow Speed (s)",
        min: 1.0,
        max: 10.0,
        step: 0.5,
        default: DEFAULT_GLOW_SPEED,
    },
    ControlSpec {
        key: ParamKey::Perspective,
        label: "Perspective (deg)",
        min: -45.0,
        max: 45.0,
        step: 1.0,
        default: DEFAULT_PERSPECTIVE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_ids_round_trip() {
        for key in ParamKey::ALL {
            assert_eq!(key.control_id().parse::<ParamKey>(), Ok(key));
        }
        assert_eq!(
            "vertical_padding".parse::<ParamKey>(),
            Err(ParamError::UnknownControl("vertical_padding".into()))
        );
    }

    #[test]
    fn specs_follow_key_order_and_defaults() {
        let defaults = Parameters::default();
        for key in ParamKey::ALL {
            let spec = key.spec();
            assert_eq!(spec.key, key);
            assert!(spec.min < spec.max, "{key}: empty range");
            assert!(spec.contains(spec.default), "{key}: default out of range");
            assert_eq!(defaults.get(key), spec.default);
        }
    }

    #[test]
    fn with_replaces_only_one_field() {
        let base = Parameters::default();
        let next = base.with(ParamKey::Skew, 12.0);
        assert_eq!(next.skew, 12.0);
        assert_eq!(base.skew, DEFAULT_SKEW);
        for key in ParamKey::ALL.into_iter().filter(|k| *k != ParamKey::Skew) {
            assert_eq!(next.get(key), base.get(key));
        }
    }

    #[test]
    fn parse_value_accepts_numbers_and_empty() {
        assert_eq!(ParamKey::Thickness.parse_value("2.5"), Ok(2.5));
        assert_eq!(ParamKey::Skew.parse_value(" -7 "), Ok(-7.0));
        assert_eq!(ParamKey::Skew.parse_value(""), Ok(0.0));
    }

    #[test]
    fn parse_value_rejects_garbage_and_non_finite() {
        for raw in ["abc", "NaN", "inf", "1.2.3"] {
            let err = ParamKey::GlowSpeed.parse_value(raw).unwrap_err();
            assert_eq!(
                err,
                ParamError::InvalidValue {
                    key: ParamKey::GlowSpeed,
                    raw: raw.to_string()
                }
            );
        }
        assert_eq!(
            ParamKey::GlowSpeed.parse_value("abc").unwrap_err().to_string(),
            "invalid value `abc` for glowSpeed"
        );
    }
}
