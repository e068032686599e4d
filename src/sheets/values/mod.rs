//! Value operations `/v4/spreadsheets/{spreadsheetId}/values/*`
//!

pub mod append;
pub use append::*;
pub mod batch;
pub use batch::*;
pub mod clear;
pub use clear::*;
pub mod get;
pub use get::*;
pub mod update;
pub use update::*;

use crate::{
    query::QueryParams,
    sheets::models::{DateTimeRenderOption, ValueInputOption, ValueRenderOption},
};

/// Query options shared by `update` and `append`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteOptions {
    pub value_input_option: Option<ValueInputOption>,
    /// Echo the written values back in the response.
    pub include_values_in_response: bool,
    pub response_value_render_option: Option<ValueRenderOption>,
    pub response_date_time_render_option: Option<DateTimeRenderOption>,
}

impl WriteOptions {
    pub(crate) fn push_to(&self, query: &mut QueryParams) {
        query
            .push_opt("valueInputOption", self.value_input_option)
            .push_flag("includeValuesInResponse", self.include_values_in_response)
            .push_opt("responseValueRenderOption", self.response_value_render_option)
            .push_opt(
                "responseDateTimeRenderOption",
                self.response_date_time_render_option,
            );
    }
}
