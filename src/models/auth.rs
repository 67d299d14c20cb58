use serde::Deserialize;

/// Body of a 200 from POST /api/login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of a 200 from GET /api/operatorID/{username}.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorIdResponse {
    #[serde(rename = "OpID")]
    pub op_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_id_uses_backend_field_name() {
        let response: OperatorIdResponse = serde_json::from_str(r#"{"OpID":"op1"}"#).unwrap();
        assert_eq!(response.op_id, "op1");
    }
}
