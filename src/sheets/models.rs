//! Models for the Google Sheets v4 API
//!

use serde::{Deserialize, Serialize};

/// Orientation of a two-dimensional value grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MajorDimension {
    Rows,
    Columns,
}

impl std::fmt::Display for MajorDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MajorDimension::Rows => write!(f, "ROWS"),
            MajorDimension::Columns => write!(f, "COLUMNS"),
        }
    }
}

/// How cell values are rendered in a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueRenderOption {
    /// Values are calculated and formatted according to the cell's formatting.
    FormattedValue,
    /// Values are calculated but not formatted.
    UnformattedValue,
    /// Values are not calculated; formulas are returned as written.
    Formula,
}

impl std::fmt::Display for ValueRenderOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueRenderOption::FormattedValue => write!(f, "FORMATTED_VALUE"),
            ValueRenderOption::UnformattedValue => write!(f, "UNFORMATTED_VALUE"),
            ValueRenderOption::Formula => write!(f, "FORMULA"),
        }
    }
}

/// How dates, times and durations are rendered in a response.
///
/// Ignored by the server when the value render option is `FORMATTED_VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateTimeRenderOption {
    SerialNumber,
    FormattedString,
}

impl std::fmt::Display for DateTimeRenderOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateTimeRenderOption::SerialNumber => write!(f, "SERIAL_NUMBER"),
            DateTimeRenderOption::FormattedString => write!(f, "FORMATTED_STRING"),
        }
    }
}

/// How input data is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Stored as-is.
    Raw,
    /// Parsed as if typed into the UI.
    UserEntered,
}

impl std::fmt::Display for ValueInputOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueInputOption::Raw => write!(f, "RAW"),
            ValueInputOption::UserEntered => write!(f, "USER_ENTERED"),
        }
    }
}

/// How appended rows are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsertDataOption {
    Overwrite,
    InsertRows,
}

impl std::fmt::Display for InsertDataOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertDataOption::Overwrite => write!(f, "OVERWRITE"),
            InsertDataOption::InsertRows => write!(f, "INSERT_ROWS"),
        }
    }
}

/// Data within a range of a spreadsheet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// The range in A1 notation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<MajorDimension>,
    /// Outer list follows the major dimension.
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    pub fn new(values: Vec<Vec<serde_json::Value>>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn with_range(range: &str, values: Vec<Vec<serde_json::Value>>) -> Self {
        Self {
            range: Some(range.to_owned()),
            values,
            ..Self::default()
        }
    }

    pub fn major_dimension(mut self, major_dimension: MajorDimension) -> Self {
        self.major_dimension = Some(major_dimension);
        self
    }
}

/// Body of `values:batchUpdate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateValuesRequest {
    pub value_input_option: ValueInputOption,
    pub data: Vec<ValueRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_values_in_response: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_value_render_option: Option<ValueRenderOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_date_time_render_option: Option<DateTimeRenderOption>,
}

/// Body of `values:batchClear`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchClearValuesRequest {
    pub ranges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetProperties {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Body of a spreadsheet creation request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Spreadsheet {
    pub properties: SpreadsheetProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_matches_serde() {
        assert_eq!(
            serde_json::to_value(ValueRenderOption::UnformattedValue).unwrap(),
            json!(ValueRenderOption::UnformattedValue.to_string())
        );
        assert_eq!(
            serde_json::to_value(InsertDataOption::InsertRows).unwrap(),
            json!("INSERT_ROWS")
        );
        assert_eq!(DateTimeRenderOption::SerialNumber.to_string(), "SERIAL_NUMBER");
        assert_eq!(ValueInputOption::UserEntered.to_string(), "USER_ENTERED");
        assert_eq!(MajorDimension::Columns.to_string(), "COLUMNS");
    }

    #[test]
    fn test_value_range_json() {
        let range = ValueRange::with_range("Sheet1!A1:B1", vec![vec![json!("a"), json!(1)]])
            .major_dimension(MajorDimension::Rows);
        assert_eq!(
            serde_json::to_value(&range).unwrap(),
            json!({
                "range": "Sheet1!A1:B1",
                "majorDimension": "ROWS",
                "values": [["a", 1]],
            })
        );
        let bare = ValueRange::new(vec![]);
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!({ "values": [] }));
    }

    #[test]
    fn test_spreadsheet_json() {
        let spreadsheet = Spreadsheet {
            properties: SpreadsheetProperties {
                title: "Budget".to_owned(),
                time_zone: Some("Europe/Paris".to_owned()),
                ..Default::default()
            },
        };
        assert_eq!(
            serde_json::to_value(&spreadsheet).unwrap(),
            json!({ "properties": { "title": "Budget", "timeZone": "Europe/Paris" } })
        );
    }
}
