//! Write values into a range
//!
//! `PUT /v4/spreadsheets/{spreadsheetId}/values/{range}`

use crate::{
    client::{Operation, RequestBuilder, VALUES_ENDPOINT},
    error::Result,
    query::QueryParams,
    request::{HttpRequest, Method},
    sheets::{
        models::{DateTimeRenderOption, ValueInputOption, ValueRange, ValueRenderOption},
        values::WriteOptions,
    },
    utils::json_body,
};

/// Parameters for overwriting one range
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateValuesParam {
    spreadsheet_id: String,
    range: String,
    values: ValueRange,
    options: WriteOptions,
}

impl UpdateValuesParam {
    pub fn new(spreadsheet_id: &str, range: &str, values: ValueRange) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.to_owned(),
            range: range.to_owned(),
            values,
            options: WriteOptions::default(),
        }
    }

    pub fn value_input_option(&mut self, option: ValueInputOption) -> &mut Self {
        self.options.value_input_option = Some(option);
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
        query
    }
}

impl Operation for UpdateValuesParam {
    fn build(&self, builder: &RequestBuilder) -> Result<HttpRequest> {
        builder.build_values_request(
            Method::Put,
            &self.spreadsheet_id,
            Some(&self.range),
            VALUES_ENDPOINT,
            &self.query_params(),
            Some(json_body(&self.values)?),
        )
    }
}

impl RequestBuilder {
    /// `PUT .../values/{range}`
    pub fn update_values(&self, param: &UpdateValuesParam) -> Result<HttpRequest> {
        self.request(param)
    }
}
