//! MCP tool handlers for the contact lookup server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::services::{ContactLookupService, LookupResponse};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing contact lookups as tools.
#[derive(Clone)]
pub struct ContactLookupServer {
    lookup_service: Arc<dyn ContactLookupService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactLookupServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-lookup".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for looking up contacts loaded from a vCard file by ID, first name, phone number, email, country or state.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    /// 1-based contact ID
    contact_id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FirstNameParams {
    first_name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PhoneNumberParams {
    /// Any formatting; only the digits are compared
    phone_number: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct EmailParams {
    email: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CountryParams {
    country: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct StateParams {
    state: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn to_tool_result(response: &LookupResponse) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(response).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

// Tool router implementation
#[tool_router]
impl ContactLookupServer {
    /// Create a new contact lookup MCP server.
    pub fn new(lookup_service: Arc<dyn ContactLookupService>) -> Self {
        Self {
            lookup_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Greeting and usage hint.
    #[tool(description = "Welcome message for the contact lookup service")]
    async fn welcome(&self) -> Result<CallToolResult, McpError> {
        to_tool_result(&self.lookup_service.welcome().await)
    }

    /// List every loaded contact.
    #[tool(description = "List every loaded contact in file order")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP Handler: list_contacts called");
        to_tool_result(&self.lookup_service.list_contacts().await)
    }

    /// Retrieve a contact by its 1-based ID.
    #[tool(
        description = "Retrieve a contact by its 1-based ID. Returns {\"contact\": null} when no contact has that ID."
    )]
    async fn get_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::debug!(contact_id = params.contact_id, "MCP Handler: get_contact called");

        to_tool_result(&self.lookup_service.get_contact(params.contact_id).await)
    }

    /// Find contacts by first name.
    #[tool(
        description = "Find contacts by first name (case-insensitive). Results are sorted by last name."
    )]
    async fn find_by_first_name(
        &self,
        params: Parameters<FirstNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        to_tool_result(
            &self
                .lookup_service
                .find_by_first_name(&params.first_name)
                .await,
        )
    }

    /// Find the contact owning a phone number.
    #[tool(
        description = "Find the contact owning a phone number. Punctuation, spaces and a leading + are ignored."
    )]
    async fn find_by_phone(
        &self,
        params: Parameters<PhoneNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        to_tool_result(
            &self
                .lookup_service
                .find_by_phone_number(&params.phone_number)
                .await,
        )
    }

    /// Find the contact owning an email address.
    #[tool(description = "Find the contact owning an email address (case-insensitive)")]
    async fn find_by_email(
        &self,
        params: Parameters<EmailParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        to_tool_result(&self.lookup_service.find_by_email(&params.email).await)
    }

    /// Find contacts with an address in a country.
    #[tool(
        description = "Find contacts with an address in a country (case-insensitive). A contact appears once per matching address."
    )]
    async fn find_by_country(
        &self,
        params: Parameters<CountryParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        to_tool_result(&self.lookup_service.find_by_country(&params.country).await)
    }

    /// Find contacts with an address in a state.
    #[tool(
        description = "Find contacts with an address in a state or region (case-insensitive). A contact appears once per matching address."
    )]
    async fn find_by_state(
        &self,
        params: Parameters<StateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        to_tool_result(&self.lookup_service.find_by_state(&params.state).await)
    }
}
