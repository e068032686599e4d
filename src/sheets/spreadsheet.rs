//! Spreadsheet resources
//!
//! - `GET /v4/spreadsheets/{spreadsheetId}`
//! - `POST /v4/spreadsheets`

use crate::{
    client::{Operation, RequestBuilder},
    error::Result,
    query::QueryParams,
    request::{HttpRequest, Method},
    sheets::models::{Spreadsheet, SpreadsheetProperties},
    utils::json_body,
};

/// Query parameters for fetching spreadsheet metadata
#[derive(Debug, Clone, PartialEq)]
pub struct GetSpreadsheetParam {
    spreadsheet_id: String,
    /// The ranges to retrieve from the spreadsheet.
    ranges: Vec<String>,
    /// True if grid data should be returned. Ignored if `fields` is set.
    include_grid_data: bool,
    /// Field mask limiting the response, e.g. `sheets.properties`.
    fields: Option<String>,
}

impl GetSpreadsheetParam {
    pub fn new(spreadsheet_id: &str) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.to_owned(),
            ranges: Vec::new(),
            include_grid_data: false,
            fields: None,
        }
    }

    pub fn range(&mut self, range: &str) -> &mut Self {
        self.ranges.push(range.to_owned());
        self
    }

    pub fn include_grid_data(&mut self) -> &mut Self {
        self.include_grid_data = true;
        self
    }

    pub fn fields(&mut self, fields: &str) -> &mut Self {
        self.fields = Some(fields.to_owned());
        self
    }

    pub(crate) fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_all("ranges", &self.ranges)
            .push_flag("includeGridData", self.include_grid_data)
            .push_opt("fields", self.fields.as_ref());
        query
    }
}

impl Operation for GetSpreadsheetParam {
    fn build(&self, builder: &RequestBuilder) -> Result<HttpRequest> {
        builder.build_spreadsheet_request(
            Method::Get,
            Some(&self.spreadsheet_id),
            "",
            &self.query_params(),
            None,
        )
    }
}

/// Parameters for creating a new spreadsheet
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSpreadsheetParam {
    spreadsheet: Spreadsheet,
}

impl CreateSpreadsheetParam {
    pub fn new(title: &str) -> Self {
        Self {
            spreadsheet: Spreadsheet {
                properties: SpreadsheetProperties {
                    title: title.to_owned(),
                    ..Default::default()
                },
            },
        }
    }

    /// e.g. `en_US`
    pub fn locale(&mut self, locale: &str) -> &mut Self {
        self.spreadsheet.properties.locale = Some(locale.to_owned());
        self
    }

    /// CLDR time zone, e.g. `America/New_York`
    pub fn time_zone(&mut self, time_zone: &str) -> &mut Self {
        self.spreadsheet.properties.time_zone = Some(time_zone.to_owned());
        self
    }
}

impl Operation for CreateSpreadsheetParam {
    fn build(&self, builder: &RequestBuilder) -> Result<HttpRequest> {
        builder.build_spreadsheet_request(
            Method::Post,
            None,
            "",
            &QueryParams::new(),
            Some(json_body(&self.spreadsheet)?),
        )
    }
}

impl RequestBuilder {
    /// `GET /v4/spreadsheets/{spreadsheetId}`
    pub fn get_spreadsheet(&self, param: &GetSpreadsheetParam) -> Result<HttpRequest> {
        self.request(param)
    }

    /// `POST /v4/spreadsheets`
    pub fn create_spreadsheet(&self, param: &CreateSpreadsheetParam) -> Result<HttpRequest> {
        self.request(param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_spreadsheet_root() {
        let req = RequestBuilder::default()
            .get_spreadsheet(&GetSpreadsheetParam::new("S1"))
            .unwrap();
        assert_eq!(req.method(), Method::Get);
        assert_eq!(
            req.url().as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/S1"
        );
    }

    #[test]
    fn test_get_spreadsheet_options() {
        let mut param = GetSpreadsheetParam::new("S1");
        param
            .range("Sheet1!A1:B2")
            .range("Sheet2")
            .include_grid_data()
            .fields("sheets.properties");
        let req = RequestBuilder::with_access_token("T")
            .get_spreadsheet(&param)
            .unwrap();
        let pairs = req
            .url()
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("ranges".to_owned(), "Sheet1!A1:B2".to_owned()),
                ("ranges".to_owned(), "Sheet2".to_owned()),
                ("includeGridData".to_owned(), "true".to_owned()),
                ("fields".to_owned(), "sheets.properties".to_owned()),
            ]
        );
    }

    #[test]
    fn test_create_spreadsheet() {
        let mut param = CreateSpreadsheetParam::new("Budget");
        param.locale("en_US");
        let req = RequestBuilder::with_api_key("K")
            .create_spreadsheet(&param)
            .unwrap();
        assert_eq!(req.method(), Method::Post);
        assert_eq!(req.url().path(), "/v4/spreadsheets");
        assert_eq!(req.url().query(), Some("key=K"));
        let body: serde_json::Value = serde_json::from_slice(req.body().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({ "properties": { "title": "Budget", "locale": "en_US" } })
        );
    }
}
