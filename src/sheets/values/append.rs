//! Append values after the table found in a range
//!
//! `POST /v4/spreadsheets/{spreadsheetId}/values/{range}:append`
//!
//! The server looks for a table within the range and writes the new values
//! starting with the first empty row after it.

use crate::{
    client::{Operation, RequestBuilder, VALUES_ENDPOINT},
    error::Result,
    query::QueryParams,
    request::{HttpRequest, Method},
    sheets::{
        models::{
            DateTimeRenderOption, InsertDataOption, ValueInputOption, ValueRange,
            ValueRenderOption,
        },
        values::WriteOptions,
    },
    utils::json_body,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppendValuesParam {
    spreadsheet_id: String,
    range: String,
    values: ValueRange,
    options: WriteOptions,
    insert_data_option: Option<InsertDataOption>,
}

impl AppendValuesParam {
    pub fn new(spreadsheet_id: &str, range: &str, values: ValueRange) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.to_owned(),
            range: range.to_owned(),
            values,
            options: WriteOptions::default(),
            insert_data_option: None,
        }
    }

    pub fn value_input_option(&mut self, option: ValueInputOption) -> &mut Self {
        self.options.value_input_option = Some(option);
        self
    }

    pub fn insert_data_option(&mut self, option: InsertDataOption) -> &mut Self {
        self.insert_data_option = Some(option);
        self
    }

    pub fn include_values_in_response(&mut self) -> &mut Self {
        self.options.include_values_in_response = true;
        self
    }

    pub fn response_value_render_option(&mut self, option: ValueRenderOption) -> &mut Self {
        self.options.response_value_render_option = Some(option);
        self
    }

    pub fn response_date_time_render_option(&mut self, option: DateTimeRenderOption) -> &mut Self {
        self.options.response_date_time_render_option = Some(option);
        self
    }

    pub(crate) fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        self.options.push_to(&mut query);
        query.push_opt("insertDataOption", self.insert_data_option);
        query
    }
}

impl Operation for AppendValuesParam {
    fn build(&self, builder: &RequestBuilder) -> Result<HttpRequest> {
        let range = format!("{}:append", self.range);
        builder.build_values_request(
            Method::Post,
            &self.spreadsheet_id,
            Some(&range),
            VALUES_ENDPOINT,
            &self.query_params(),
            Some(json_body(&self.values)?),
        )
    }
}

impl RequestBuilder {
    /// `POST .../values/{range}:append`
    pub fn append_values(&self, param: &AppendValuesParam) -> Result<HttpRequest> {
        self.request(param)
    }
}
