//! Enumerated project colors and icons.
//!
//! Both render as their canonical names and parse case-insensitively from
//! them, which is how they are stored and submitted in forms.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident, default = $default:ident,
        [$($variant:ident => $label:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $(
                #[doc = concat!("`", $label, "`.")]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the canonical name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ProjectDomainError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                let trimmed = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ProjectDomainError::$error(value.to_owned()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = ProjectDomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_from(value.as_str())
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

named_enum! {
    /// Project label color.
    Color, UnknownColor, default = Zinc,
    [
        Zinc => "Zinc",
        Red => "Red",
        Orange => "Orange",
        Amber => "Amber",
        Yellow => "Yellow",
        Lime => "Lime",
        Green => "Green",
        Emerald => "Emerald",
        Teal => "Teal",
        Cyan => "Cyan",
        Sky => "Sky",
        Violet => "Violet",
        Purple => "Purple",
        Fuchsia => "Fuchsia",
        Pink => "Pink",
        Rose => "Rose",
    ]
}

named_enum! {
    /// Project icon.
    Icon, UnknownIcon, default = Unknown,
    [
        Unknown => "Unknown",
        Bear => "Bear",
        Bee => "Bee",
        Bird => "Bird",
        Bug => "Bug",
        Butterfly => "Butterfly",
        Cat => "Cat",
        Crab => "Crab",
        Cow => "Cow",
        Dog => "Dog",
        Elephant => "Elephant",
        Fish => "Fish",
        Frog => "Frog",
        Hedgehog => "Hedgehog",
        Horse => "Horse",
        Lion => "Lion",
        Narwhal => "Narwhal",
        Owl => "Owl",
        Panda => "Panda",
        Pig => "Pig",
        Rabbit => "Rabbit",
        Rat => "Rat",
        Snail => "Snail",
        Squirrel => "Squirrel",
        Turtle => "Turtle",
        Worm => "Worm",
        Shark => "Shark",
        Spider => "Spider",
        Whale => "Whale",
    ]
}
