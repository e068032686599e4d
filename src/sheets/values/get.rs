//! Read a range of values
//!
//! `GET /v4/spreadsheets/{spreadsheetId}/values/{range}`

use crate::{
    client::{Operation, RequestBuilder, VALUES_ENDPOINT},
    error::Result,
    query::QueryParams,
    request::{HttpRequest, Method},
    sheets::models::{DateTimeRenderOption, MajorDimension, ValueRenderOption},
};

/// Parameters for reading one range
#[derive(Debug, Clone, PartialEq)]
pub struct GetValuesParam {
    spreadsheet_id: String,
    /// The A1 notation or R1C1 notation of the range to retrieve values from.
    range: String,
    major_dimension: Option<MajorDimension>,
    value_render_option: Option<ValueRenderOption>,
    date_time_render_option: Option<DateTimeRenderOption>,
}

impl GetValuesParam {
    pub fn new(spreadsheet_id: &str, range: &str) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.to_owned(),
            range: range.to_owned(),
            major_dimension: None,
            value_render_option: None,
            date_time_render_option: None,
        }
    }

    pub fn major_dimension(&mut self, major_dimension: MajorDimension) -> &mut Self {
        self.major_dimension = Some(major_dimension);
        self
    }

    pub fn value_render_option(&mut self, option: ValueRenderOption) -> &mut Self {
        self.value_render_option = Some(option);
        self
    }

    pub fn date_time_render_option(&mut self, option: DateTimeRenderOption) -> &mut Self {
        self.date_time_render_option = Some(option);
        self
    }

    pub(crate) fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("majorDimension", self.major_dimension)
            .push_opt("valueRenderOption", self.value_render_option)
            .push_opt("dateTimeRenderOption", self.date_time_render_option);
        query
    }
}

impl Operation for GetValuesParam {
    fn build(&self, builder: &RequestBuilder) -> Result<HttpRequest> {
        builder.build_values_request(
            Method::Get,
            &self.spreadsheet_id,
            Some(&self.range),
            VALUES_ENDPOINT,
            &self.query_params(),
            None,
        )
    }
}

impl RequestBuilder {
    /// `GET .../values/{range}`
    pub fn get_values(&self, param: &GetValuesParam) -> Result<HttpRequest> {
        self.request(param)
    }
}
