//! Style catalog: the closed sets a logo configuration draws from.
//!
//! Every enumerable field of a [`LogoConfiguration`](crate::LogoConfiguration)
//! is one of these enums. The string form of each member is its lowercase
//! name, used verbatim on the wire and by the filter catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LogoError;

/// A closed enumeration with a fixed, ordered member list.
pub trait ClosedSet: Copy + Eq + fmt::Debug + 'static {
    /// Every member, in catalog order.
    const ALL: &'static [Self];

    /// Wire name of this member.
    fn as_str(self) -> &'static str;

    /// Looks up a member by its wire name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == name)
    }

    /// Wire names of every member, in catalog order.
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.as_str()).collect()
    }
}

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl ClosedSet for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = LogoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as ClosedSet>::from_name(s).ok_or_else(|| {
                    LogoError::InvalidInput(format!(
                        "unknown {} '{s}'",
                        stringify!($name).to_lowercase()
                    ))
                })
            }
        }
    };
}

closed_set! {
    /// Outline family of the main mark.
    Shape {
        Hexagon => "hexagon",
        Circle => "circle",
        Diamond => "diamond",
        Shield => "shield",
        Star => "star",
        Badge => "badge",
        Infinity => "infinity",
        Arch => "arch",
    }
}

closed_set! {
    /// Typeface family used for the brand text.
    FontStyle {
        Serif => "serif",
        Sans => "sans",
        Mono => "mono",
        Display => "display",
        Cursive => "cursive",
        Geometric => "geometric",
        Rounded => "rounded",
        Sharp => "sharp",
    }
}

closed_set! {
    /// Visual treatment applied to the main shape.
    Effect {
        Glow => "glow",
        Shadow => "shadow",
        Gradient => "gradient",
        Outline => "outline",
        Emboss => "emboss",
        Neon => "neon",
        Metallic => "metallic",
        Glass => "glass",
    }
}

closed_set! {
    /// Text placement strategy for the brand name or initials.
    Layout {
        Centered => "centered",
        Stacked => "stacked",
        Horizontal => "horizontal",
        Diagonal => "diagonal",
        Circular => "circular",
        Split => "split",
        Badge => "badge",
        Monogram => "monogram",
    }
}

closed_set! {
    /// Faint tiling motif painted behind the mark.
    Pattern {
        None => "none",
        Dots => "dots",
        Lines => "lines",
        Grid => "grid",
        Waves => "waves",
        Hexagons => "hexagons",
        Triangles => "triangles",
        Circuits => "circuits",
    }
}
