//! signup_check tool implementation.
//!
//! Applies the signup form rules without contacting any auth backend.

use newsdesk_core::{Error, SignupForm};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for signup_check tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SignupCheckParams {
    /// Email address entered on the form.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
}

/// Implementation of the signup_check tool.
pub async fn signup_check_impl(params: SignupCheckParams) -> Result<CallToolResult, McpError> {
    let form = SignupForm { email: params.email, password: params.password, confirm_password: params.confirm_password };
    form.validate().map_err(Error::from)?;

    let json = serde_json::json!({ "valid": true, "email": form.email });
    Ok(CallToolResult::success(vec![Content::text(json.to_string())]))
}
