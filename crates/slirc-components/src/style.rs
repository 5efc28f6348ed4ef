//! Button styles.
//!
//! Styles travel over the wire as small integers. Configuration may name
//! them instead, so both forms are accepted.

use std::fmt;
use std::str::FromStr;

use crate::error::ComponentError;

/// Visual style of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ButtonStyle {
    /// Blurple call-to-action button (code 1).
    #[default]
    Primary,
    /// Grey button (code 2).
    Secondary,
    /// Green button (code 3).
    Success,
    /// Red button (code 4).
    Danger,
    /// Navigates to a URL instead of emitting an activation (code 5).
    Link,
}

impl ButtonStyle {
    /// Map a raw wire code to a style.
    pub fn from_code(code: i64) -> Result<Self, ComponentError> {
        match code {
            1 => Ok(Self::Primary),
            2 => Ok(Self::Secondary),
            3 => Ok(Self::Success),
            4 => Ok(Self::Danger),
            5 => Ok(Self::Link),
            other => Err(ComponentError::InvalidStyle(other)),
        }
    }

    /// The raw wire code of this style.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Self::Primary => 1,
            Self::Secondary => 2,
            Self::Success => 3,
            Self::Danger => 4,
            Self::Link => 5,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Link => "link",
        }
    }
}

impl FromStr for ButtonStyle {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "blurple" => Ok(Self::Primary),
            "secondary" | "grey" | "gray" => Ok(Self::Secondary),
            "success" | "green" => Ok(Self::Success),
            "danger" | "red" => Ok(Self::Danger),
            "link" | "url" => Ok(Self::Link),
            _ => Err(ComponentError::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_all_styles() {
        for code in 1..=5 {
            let style = ButtonStyle::from_code(code).unwrap();
            assert_eq!(i64::from(style.code()), code);
        }
    }

    #[test]
    fn test_out_of_range_code_rejected() {
        assert_eq!(
            ButtonStyle::from_code(0),
            Err(ComponentError::InvalidStyle(0))
        );
        assert_eq!(
            ButtonStyle::from_code(6),
            Err(ComponentError::InvalidStyle(6))
        );
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("Primary".parse::<ButtonStyle>(), Ok(ButtonStyle::Primary));
        assert_eq!("grey".parse::<ButtonStyle>(), Ok(ButtonStyle::Secondary));
        assert_eq!(" RED ".parse::<ButtonStyle>(), Ok(ButtonStyle::Danger));
        assert!(matches!(
            "purple".parse::<ButtonStyle>(),
            Err(ComponentError::UnknownStyle(_))
        ));
    }
}
