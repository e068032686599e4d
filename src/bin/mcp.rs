use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{InitializeResult, ServerCapabilities},
    schemars, tool, tool_router,
    transport::stdio,
};
use serde_json::json;
use sheets_request::{
    AppendValuesParam, BatchGetValuesParamBuilder, ClearValuesParam, GetSpreadsheetParam,
    GetValuesParam, HttpRequest, MajorDimension, RequestBuilder, UpdateValuesParam,
    ValueInputOption, ValueRange, ValueRenderOption,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct SheetsRequestMCP {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
    builder: RequestBuilder,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetValuesRequest {
    #[schemars(description = "The ID of the spreadsheet")]
    pub spreadsheet_id: String,
    #[schemars(description = "The range in A1 notation, e.g. Sheet1!A1:B2")]
    pub range: String,
    #[schemars(description = "Return values column by column instead of row by row")]
    #[serde(default)]
    pub by_columns: bool,
    #[schemars(description = "Return formulas instead of calculated values")]
    #[serde(default)]
    pub formulas: bool,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct WriteValuesRequest {
    #[schemars(description = "The ID of the spreadsheet")]
    pub spreadsheet_id: String,
    #[schemars(description = "The range in A1 notation, e.g. Sheet1!A1")]
    pub range: String,
    #[schemars(description = "Rows of cell values")]
    pub values: Vec<Vec<serde_json::Value>>,
    #[schemars(description = "If true, parse input as if typed into the UI; otherwise store it raw")]
    #[serde(default)]
    pub user_entered: bool,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RangeRequest {
    #[schemars(description = "The ID of the spreadsheet")]
    pub spreadsheet_id: String,
    #[schemars(description = "The range in A1 notation")]
    pub range: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct BatchGetValuesRequest {
    #[schemars(description = "The ID of the spreadsheet")]
    pub spreadsheet_id: String,
    #[schemars(description = "The ranges in A1 notation")]
    pub ranges: Vec<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetSpreadsheetRequest {
    #[schemars(description = "The ID of the spreadsheet")]
    pub spreadsheet_id: String,
    #[schemars(description = "Field mask limiting the response, e.g. sheets.properties")]
    #[serde(default)]
    pub fields: Option<String>,
}

#[tool_router]
impl SheetsRequestMCP {
    pub fn new(builder: RequestBuilder) -> Self {
        Self {
            builder,
            tool_router: Self::tool_router(),
        }
    }

    fn format_request(request: sheets_request::Result<HttpRequest>) -> String {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                return serde_json::to_string_pretty(&json!({
                    "error": format!("Failed to build request: {}", e),
                }))
                .unwrap_or_else(|_| format!("Error: Failed to build request: {}", e));
            }
        };

        let headers = request
            .headers()
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.clone(), json!("Bearer <redacted>"))
                } else {
                    (name.clone(), json!(value))
                }
            })
            .collect::<serde_json::Map<String, serde_json::Value>>();

        let mut result = json!({
            "method": request.method().as_str(),
            "url": request.url().as_str(),
            "headers": headers,
        });

        if let Some(body) = request.body() {
            result["body"] = serde_json::from_slice(body)
                .unwrap_or_else(|_| json!(String::from_utf8_lossy(body)));
        }

        serde_json::to_string_pretty(&result).unwrap_or_else(|_| format!("{:?}", result))
    }

    #[tool(description = "Build the request that reads a range of values from a spreadsheet.")]
    pub async fn get_values(
        &self,
        Parameters(GetValuesRequest {
            spreadsheet_id,
            range,
            by_columns,
            formulas,
        }): Parameters<GetValuesRequest>,
    ) -> String {
        let mut param = GetValuesParam::new(&spreadsheet_id, &range);
        if by_columns {
            param.major_dimension(MajorDimension::Columns);
        }
        if formulas {
            param.value_render_option(ValueRenderOption::Formula);
        }
        Self::format_request(self.builder.get_values(&param))
    }

    #[tool(description = "Build the request that overwrites a range of values in a spreadsheet.")]
    pub async fn update_values(
        &self,
        Parameters(WriteValuesRequest {
            spreadsheet_id,
            range,
            values,
            user_entered,
        }): Parameters<WriteValuesRequest>,
    ) -> String {
        let mut param = UpdateValuesParam::new(&spreadsheet_id, &range, ValueRange::new(values));
        param.value_input_option(value_input_option(user_entered));
        Self::format_request(self.builder.update_values(&param))
    }

    #[tool(description = "Build the request that appends rows after the table found in a range.")]
    pub async fn append_values(
        &self,
        Parameters(WriteValuesRequest {
            spreadsheet_id,
            range,
            values,
            user_entered,
        }): Parameters<WriteValuesRequest>,
    ) -> String {
        let mut param = AppendValuesParam::new(&spreadsheet_id, &range, ValueRange::new(values));
        param.value_input_option(value_input_option(user_entered));
        Self::format_request(self.builder.append_values(&param))
    }

    #[tool(description = "Build the request that clears the values of a range, keeping formatting.")]
    pub async fn clear_values(
        &self,
        Parameters(RangeRequest {
            spreadsheet_id,
            range,
        }): Parameters<RangeRequest>,
    ) -> String {
        let param = ClearValuesParam::new(&spreadsheet_id, &range);
        Self::format_request(self.builder.clear_values(&param))
    }

    #[tool(description = "Build the request that reads several ranges of values at once.")]
    pub async fn batch_get_values(
        &self,
        Parameters(BatchGetValuesRequest {
            spreadsheet_id,
            ranges,
        }): Parameters<BatchGetValuesRequest>,
    ) -> String {
        let mut param_builder = BatchGetValuesParamBuilder::default();
        param_builder.spreadsheet_id(&spreadsheet_id);
        for range in &ranges {
            param_builder.range(range);
        }
        let request = param_builder
            .build()
            .and_then(|param| self.builder.batch_get_values(&param));
        Self::format_request(request)
    }

    #[tool(description = "Build the request that fetches spreadsheet metadata.")]
    pub async fn get_spreadsheet(
        &self,
        Parameters(GetSpreadsheetRequest {
            spreadsheet_id,
            fields,
        }): Parameters<GetSpreadsheetRequest>,
    ) -> String {
        let mut param = GetSpreadsheetParam::new(&spreadsheet_id);
        if let Some(ref fields) = fields {
            param.fields(fields);
        }
        Self::format_request(self.builder.get_spreadsheet(&param))
    }
}

fn value_input_option(user_entered: bool) -> ValueInputOption {
    if user_entered {
        ValueInputOption::UserEntered
    } else {
        ValueInputOption::Raw
    }
}

impl ServerHandler for SheetsRequestMCP {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: rmcp::model::ProtocolVersion::default(),
            server_info: rmcp::model::Implementation {
                name: "sheets-request".to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                title: Some("Google Sheets Request MCP Server".to_owned()),
                icons: None,
                website_url: Some("https://github.com/tangxiangong/sheets-request".to_owned()),
            },
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some("MCP Server for the Google Sheets v4 API. Tools return the HTTP request (method, url, headers, body) for an operation without sending it.".to_owned()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting Google Sheets request MCP server");

    let builder = RequestBuilder::from_env().inspect_err(|e| {
        tracing::error!("Missing credentials: {:?}", e);
    })?;

    let service = SheetsRequestMCP::new(builder)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("Error: {:?}", e);
        })?;

    service.waiting().await?;

    Ok(())
}
