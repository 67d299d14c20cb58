use serde::Deserialize;

/// One counterparty entry from GET /api/owedBy.
#[derive(Debug, Clone, Deserialize)]
pub struct DebtEntry {
    #[serde(rename = "tollOpID")]
    pub toll_op_id: String,
    #[serde(rename = "passesCost")]
    pub passes_cost: f64,
}

/// Response of GET /api/owedBy/{op}/{from}/{to}. HTTP 204 is mapped to
/// `None` by the client before this type is ever parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct OwedByResponse {
    #[serde(rename = "tOpList")]
    pub t_op_list: Vec<DebtEntry>,
}

/// Debt table row. The id is synthesized client-side from response order
/// (1-based) and is what settlement matches on.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtRow {
    pub id: usize,
    pub operator: String,
    pub cost: f64,
}

/// Result of POST /api/settleDebts: the backend answers 200 when the debt
/// was settled and 204 when there was nothing to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    Settled,
    NothingToSettle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_field_names() {
        let json = r#"{"tOpList":[{"tollOpID":"op2","passesCost":12.5},{"tollOpID":"op3","passesCost":7.5}]}"#;
        let response: OwedByResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.t_op_list.len(), 2);
        assert_eq!(response.t_op_list[0].toll_op_id, "op2");
        assert_eq!(response.t_op_list[1].passes_cost, 7.5);
    }
}
