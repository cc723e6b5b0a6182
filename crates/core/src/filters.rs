//! Caller-supplied style preferences.
//!
//! A [`FilterSelection`] holds one [`Choice`] per enumerable field. A choice
//! is either a concrete member or the `"random"` sentinel; anything the
//! parser does not recognise also becomes `Random`, so stale or mistyped
//! filters from a client degrade to variety rather than to an error.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::LogoError;
use crate::palette::PaletteCategory;
use crate::params::param_str;
use crate::prng::RandomSource;
use crate::style::{ClosedSet, Effect, FontStyle, Layout, Pattern, Shape};

/// Wire name of the random sentinel.
pub const RANDOM: &str = "random";

/// A concrete member of `T`, or a request to pick one at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    Random,
    Fixed(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Random
    }
}

impl<T: ClosedSet> Choice<T> {
    /// Parses a wire value; the sentinel and unknown names both yield `Random`.
    pub fn parse(value: &str) -> Self {
        T::from_name(value).map_or(Choice::Random, Choice::Fixed)
    }

    /// Resolves to a concrete member, drawing uniformly from `T::ALL` when random.
    pub fn resolve<R: RandomSource + ?Sized>(self, rng: &mut R) -> T {
        match self {
            Choice::Fixed(value) => value,
            Choice::Random => T::ALL[rng.next_index(T::ALL.len())],
        }
    }

    /// Wire name: the member's name, or `"random"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Choice::Fixed(value) => value.as_str(),
            Choice::Random => RANDOM,
        }
    }

    fn from_field(filters: &Value, key: &str) -> Self {
        param_str(filters, key).map_or(Choice::Random, Choice::parse)
    }
}

impl<T: ClosedSet> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Per-field style preferences for one generation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    #[serde(rename = "paletteType")]
    pub palette_category: Choice<PaletteCategory>,
    #[serde(rename = "shapeStyle")]
    pub shape: Choice<Shape>,
    #[serde(rename = "fontStyle")]
    pub font: Choice<FontStyle>,
    pub effect: Choice<Effect>,
    #[serde(rename = "layoutMode")]
    pub layout: Choice<Layout>,
    pub pattern: Choice<Pattern>,
}

impl FilterSelection {
    /// Every field random.
    pub fn random() -> Self {
        Self::default()
    }

    /// Reads the wire object `{ paletteType, shapeStyle, fontStyle, effect,
    /// layoutMode, pattern }`.
    ///
    /// A missing or `null` object means all-random. Individual fields that are
    /// missing, mistyped, or unknown become `Random`. Any other non-object
    /// value is rejected with `LogoError::MalformedFilters`.
    pub fn from_json(filters: &Value) -> Result<Self, LogoError> {
        match filters {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => Ok(Self {
                palette_category: Choice::from_field(filters, "paletteType"),
                shape: Choice::from_field(filters, "shapeStyle"),
                font: Choice::from_field(filters, "fontStyle"),
                effect: Choice::from_field(filters, "effect"),
                layout: Choice::from_field(filters, "layoutMode"),
                pattern: Choice::from_field(filters, "pattern"),
            }),
            other => Err(LogoError::MalformedFilters(format!(
                "expected an object, got {}",
                json_type_name(other)
            ))),
        }
    }

    pub fn with_palette_category(mut self, category: PaletteCategory) -> Self {
        self.palette_category = Choice::Fixed(category);
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Choice::Fixed(shape);
        self
    }

    pub fn with_font(mut self, font: FontStyle) -> Self {
        self.font = Choice::Fixed(font);
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Choice::Fixed(effect);
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Choice::Fixed(layout);
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Choice::Fixed(pattern);
        self
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
