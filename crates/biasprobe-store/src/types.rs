//! Dataset row and column definitions.

use serde::{Deserialize, Serialize};

pub const DELIMITER: u8 = b';';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Prompt,
    Response,
    InferredGender,
    InferredNationality,
}

impl Column {
    /// Canonical order.
    pub const ALL: [Column; 4] = [
        Column::Prompt,
        Column::Response,
        Column::InferredGender,
        Column::InferredNationality,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Prompt => "Prompt",
            Column::Response => "Response",
            Column::InferredGender => "Inferred_Gender",
            Column::InferredNationality => "Inferred_Nationality",
        }
    }

    pub fn from_header(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header() == name.trim())
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub prompt: String,
    pub response: String,
    pub inferred_gender: String,
    pub inferred_nationality: String,
}

impl DatasetRow {
    pub fn new(
        prompt: impl Into<String>,
        response: impl Into<String>,
        inferred_gender: impl Into<String>,
        inferred_nationality: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
            inferred_gender: inferred_gender.into(),
            inferred_nationality: inferred_nationality.into(),
        }
    }

    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Prompt => &self.prompt,
            Column::Response => &self.response,
            Column::InferredGender => &self.inferred_gender,
            Column::InferredNationality => &self.inferred_nationality,
        }
    }

    pub(crate) fn set(&mut self, column: Column, value: String) {
        match column {
            Column::Prompt => self.prompt = value,
            Column::Response => self.response = value,
            Column::InferredGender => self.inferred_gender = value,
            Column::InferredNationality => self.inferred_nationality = value,
        }
    }
}

/// Replace every CR and LF with a single space.
pub fn sanitize_field(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names() {
        let names: Vec<&str> = Column::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(
            names,
            ["Prompt", "Response", "Inferred_Gender", "Inferred_Nationality"]
        );
        assert_eq!(Column::from_header(" Inferred_Gender "), Some(Column::InferredGender));
        assert_eq!(Column::from_header("Gender"), None);
    }

    #[test]
    fn test_sanitize_field() {
        assert_eq!(sanitize_field("a\r\nb\nc"), "a  b c");
        assert_eq!(sanitize_field("plain"), "plain");
    }
}
