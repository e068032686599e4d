//! Clear values from a range
//!
//! `POST /v4/spreadsheets/{spreadsheetId}/values/{range}:clear`
//!
//! Only values are cleared; formatting and data validation are kept.

use crate::{
    client::{Operation, RequestBuilder, VALUES_ENDPOINT},
    error::Result,
    query::QueryParams,
    request::{HttpRequest, Method},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ClearValuesParam {
    spreadsheet_id: String,
    range: String,
}

impl ClearValuesParam {
    pub fn new(spreadsheet_id: &str, range: &str) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.to_owned(),
            range: range.to_owned(),
        }
    }
}

impl Operation for ClearValuesParam {
    fn build(&self, builder: &RequestBuilder) -> Result<HttpRequest> {
        let range = format!("{}:clear", self.range);
        builder.build_values_request(
            Method::Post,
            &self.spreadsheet_id,
            Some(&range),
            VALUES_ENDPOINT,
            &QueryParams::new(),
            None,
        )
    }
}

impl RequestBuilder {
    /// `POST .../values/{range}:clear`
    pub fn clear_values(&self, param: &ClearValuesParam) -> Result<HttpRequest> {
        self.request(param)
    }
}
