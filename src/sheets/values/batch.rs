//! Operate on several ranges at once.
//!
//! - `GET /v4/spreadsheets/{spreadsheetId}/values:batchGet`
//! - `POST /v4/spreadsheets/{spreadsheetId}/values:batchUpdate`
//! - `POST /v4/spreadsheets/{spreadsheetId}/values:batchClear`

use crate::{
    client::{Operation, RequestBuilder},
    error::{Error, Result},
    query::QueryParams,
    request::{HttpRequest, Method},
    sheets::models::{
        BatchClearValuesRequest, BatchUpdateValuesRequest, DateTimeRenderOption, MajorDimension,
        ValueInputOption, ValueRange, ValueRenderOption,
    },
    utils::json_body,
};

const BATCH_GET_ENDPOINT: &str = "values:batchGet";
const BATCH_UPDATE_ENDPOINT: &str = "values:batchUpdate";
const BATCH_CLEAR_ENDPOINT: &str = "values:batchClear";

/// Parameters for the batch get query
#[derive(Debug, Clone, PartialEq)]
pub struct BatchGetValuesParam {
    pub spreadsheet_id: String,
    /// Each range becomes its own `ranges=` pair.
    pub ranges: Vec<String>,
    pub major_dimension: Option<MajorDimension>,
    pub value_render_option: Option<ValueRenderOption>,
    pub date_time_render_option: Option<DateTimeRenderOption>,
}

impl BatchGetValuesParam {
    pub(crate) fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_all("ranges", &self.ranges)
            .push_opt("majorDimension", self.major_dimension)
            .push_opt("valueRenderOption", self.value_render_option)
            .push_opt("dateTimeRenderOption", self.date_time_render_option);
        query
    }
}

/// Builder for the batch get query parameters
#[derive(Debug, Clone, Default)]
pub struct BatchGetValuesParamBuilder {
    spreadsheet_id: Option<String>,
    ranges: Vec<String>,
    major_dimension: Option<MajorDimension>,
    value_render_option: Option<ValueRenderOption>,
    date_time_render_option: Option<DateTimeRenderOption>,
}

impl BatchGetValuesParamBuilder {
    pub fn spreadsheet_id(&mut self, spreadsheet_id: &str) -> &mut Self {
        self.spreadsheet_id = Some(spreadsheet_id.to_owned());
        self
    }

    /// Add a range to the query
    pub fn range(&mut self, range: &str) -> &mut Self {
        self.ranges.push(range.to_owned());
        self
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

    /// Build the batch get query parameters
    pub fn build(&self) -> Result<BatchGetValuesParam> {
        let Some(ref spreadsheet_id) = self.spreadsheet_id else {
            return Err(Error::InvalidParameter(
                "spreadsheet_id must be set".to_owned(),
            ));
        };
        if self.ranges.is_empty() {
            return Err(Error::InvalidParameter("ranges is empty".to_owned()));
        }
        Ok(BatchGetValuesParam {
            spreadsheet_id: spreadsheet_id.clone(),
            ranges: self.ranges.clone(),
            major_dimension: self.major_dimension,
            value_render_option: self.value_render_option,
            date_time_render_option: self.date_time_render_option,
        })
    }
}

impl Operation for BatchGetValuesParam {
    fn build(&self, builder: &RequestBuilder) -> Result<HttpRequest> {
        if self.ranges.is_empty() {
            return Err(Error::InvalidParameter("ranges is empty".to_owned()));
        }
        builder.build_batch_request(
            Method::Get,
            &self.spreadsheet_id,
            BATCH_GET_ENDPOINT,
            &self.query_params(),
            None,
        )
    }
}

/// Parameters for the batch update query
#[derive(Debug, Clone, PartialEq)]
pub struct BatchUpdateValuesParam {
    spreadsheet_id: String,
    request: BatchUpdateValuesRequest,
}

impl BatchUpdateValuesParam {
    pub fn new(spreadsheet_id: &str, value_input_option: ValueInputOption) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.to_owned(),
            request: BatchUpdateValuesRequest {
                value_input_option,
                data: Vec::new(),
                include_values_in_response: None,
                response_value_render_option: None,
                response_date_time_render_option: None,
            },
        }
    }

    /// Add a range of values; the target range is taken from `ValueRange::range`.
    ///
    /// Fails when `values` has no range.
    pub fn data(&mut self, values: ValueRange) -> Result<&mut Self> {
        if values.range.as_deref().is_none_or(str::is_empty) {
            return Err(Error::InvalidParameter(format!(
                "data[{}] has no range",
                self.request.data.len()
            )));
        }
        self.request.data.push(values);
        Ok(self)
    }

    pub fn include_values_in_response(&mut self) -> &mut Self {
        self.request.include_values_in_response = Some(true);
        self
    }

    pub fn response_value_render_option(&mut self, option: ValueRenderOption) -> &mut Self {
        self.request.response_value_render_option = Some(option);
        self
    }

    pub fn response_date_time_render_option(&mut self, option: DateTimeRenderOption) -> &mut Self {
        self.request.response_date_time_render_option = Some(option);
        self
    }
}

impl Operation for BatchUpdateValuesParam {
    fn build(&self, builder: &RequestBuilder) -> Result<HttpRequest> {
        if self.request.data.is_empty() {
            return Err(Error::InvalidParameter("data is empty".to_owned()));
        }
        builder.build_batch_request(
            Method::Post,
            &self.spreadsheet_id,
            BATCH_UPDATE_ENDPOINT,
            &QueryParams::new(),
            Some(json_body(&self.request)?),
        )
    }
}

/// Parameters for the batch clear query
#[derive(Debug, Clone, PartialEq)]
pub struct BatchClearValuesParam {
    spreadsheet_id: String,
    request: BatchClearValuesRequest,
}

impl BatchClearValuesParam {
    /// Fails when `ranges` is empty
    pub fn new<I, S>(spreadsheet_id: &str, ranges: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ranges = ranges.into_iter().map(Into::into).collect::<Vec<_>>();
        if ranges.is_empty() {
            return Err(Error::InvalidParameter("ranges is empty".to_owned()));
        }
        Ok(Self {
            spreadsheet_id: spreadsheet_id.to_owned(),
            request: BatchClearValuesRequest { ranges },
        })
    }
}

impl Operation for BatchClearValuesParam {
    fn build(&self, builder: &RequestBuilder) -> Result<HttpRequest> {
        builder.build_batch_request(
            Method::Post,
            &self.spreadsheet_id,
            BATCH_CLEAR_ENDPOINT,
            &QueryParams::new(),
            Some(json_body(&self.request)?),
        )
    }
}

impl RequestBuilder {
    /// `GET .../values:batchGet`
    pub fn batch_get_values(&self, param: &BatchGetValuesParam) -> Result<HttpRequest> {
        self.request(param)
    }

    /// `POST .../values:batchUpdate`
    pub fn batch_update_values(&self, param: &BatchUpdateValuesParam) -> Result<HttpRequest> {
        self.request(param)
    }

    /// `POST .../values:batchClear`
    pub fn batch_clear_values(&self, param: &BatchClearValuesParam) -> Result<HttpRequest> {
        self.request(param)
    }
}
