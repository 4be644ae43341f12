use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output formats the documentation can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum DocFormat {
    /// Markdown document.
    Md,
    /// Styled `.xlsx` workbook.
    Excel,
}

impl DocFormat {
    /// Parse an interactive answer: `1`/`md` or `2`/`excel`, surrounding
    /// whitespace ignored.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" | "md" => Some(DocFormat::Md),
            "2" | "excel" => Some(DocFormat::Excel),
            _ => None,
        }
    }
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocFormat::Md => f.write_str("md"),
            DocFormat::Excel => f.write_str("excel"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported format: {0:?}")]
pub struct UnsupportedFormat(pub String);

impl FromStr for DocFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocFormat::from_choice(s).ok_or_else(|| UnsupportedFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::DocFormat;

    #[test]
    fn choices_map_to_formats() {
        assert_eq!(DocFormat::from_choice("1"), Some(DocFormat::Md));
        assert_eq!(DocFormat::from_choice("md"), Some(DocFormat::Md));
        assert_eq!(DocFormat::from_choice("2\n"), Some(DocFormat::Excel));
        assert_eq!(DocFormat::from_choice(" excel "), Some(DocFormat::Excel));
    }

    #[test]
    fn unknown_choices_are_rejected() {
        assert_eq!(DocFormat::from_choice("3"), None);
        assert_eq!(DocFormat::from_choice(""), None);
        assert_eq!(DocFormat::from_choice("MD"), None);
        let err = "xlsx".parse::<DocFormat>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported format: \"xlsx\"");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for format in [DocFormat::Md, DocFormat::Excel] {
            assert_eq!(format.to_string().parse::<DocFormat>().unwrap(), format);
        }
    }
}
