// ============================================================================
// DEBTS VIEWMODEL - Debt list loading and settlement
// ============================================================================
// The list is replaced wholesale on every load; settlement removes exactly
// the confirmed row locally and recomputes the total, with no re-fetch.
// ============================================================================

use crate::models::{DebtEntry, DebtRow, SessionRecord, SettleOutcome};
use crate::services::{ApiClient, ApiError};
use crate::state::AppState;
use crate::utils::dates::to_compact_date;

pub const NO_DATA_MSG: &str = "No data found for the selected period.";
pub const SETTLED_MSG: &str = "Debt successfully settled!";
pub const NOTHING_TO_SETTLE_MSG: &str = "No debts were found to settle.";

/// Map the response list 1:1 into rows with synthesized 1-based ids.
pub fn rows_from_entries(entries: &[DebtEntry]) -> Vec<DebtRow> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| DebtRow {
            id: index + 1,
            operator: entry.toll_op_id.clone(),
            cost: entry.passes_cost,
        })
        .collect()
}

/// Arithmetic sum of row costs; recomputed after every load and settlement.
pub fn total_of(rows: &[DebtRow]) -> f64 {
    rows.iter().map(|row| row.cost).sum()
}

/// Remove exactly the row matching by id. Returns the removed row.
pub fn remove_row(rows: &mut Vec<DebtRow>, id: usize) -> Option<DebtRow> {
    let position = rows.iter().position(|row| row.id == id)?;
    Some(rows.remove(position))
}

/// The operator whose debts are queried: admins supply one through the
/// form, everyone else always uses their own.
pub fn resolve_operator(record: &SessionRecord, operator_input: &str) -> Result<String, ApiError> {
    if record.is_admin() {
        let input = operator_input.trim();
        if input.is_empty() {
            return Err(ApiError::MissingInput(
                "Please provide an \"Operator ID\".".to_string(),
            ));
        }
        Ok(input.to_string())
    } else {
        record
            .operator_id()
            .map(str::to_string)
            .ok_or(ApiError::MissingToken)
    }
}

pub struct DebtsViewModel {
    api_client: ApiClient,
    state: AppState,
}

impl DebtsViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            api_client: ApiClient::new(),
            state,
        }
    }

    /// Validate the filters, fetch, and replace the list. All feedback
    /// lands in the page state.
    pub async fn load(&self) {
        let debts = &self.state.debts;
        match self.try_load().await {
            Ok(Some(count)) => {
                log::info!("✅ Loaded {} debt rows", count);
                *debts.feedback.borrow_mut() = None;
            }
            Ok(None) => {
                debts.rows.borrow_mut().clear();
                *debts.total.borrow_mut() = 0.0;
                *debts.feedback.borrow_mut() = Some(NO_DATA_MSG.to_string());
            }
            Err(e) => {
                log::error!("❌ Error loading debts: {}", e);
                *debts.feedback.borrow_mut() = Some(e.to_string());
            }
        }
    }

    async fn try_load(&self) -> Result<Option<usize>, ApiError> {
        let debts = &self.state.debts;
        let (date_from, date_to) = validate_dates(
            &debts.date_from.borrow(),
            &debts.date_to.borrow(),
            "Date From",
            "Date To",
        )?;

        let record = self.state.session.snapshot();
        let operator = resolve_operator(&record, &debts.operator_input.borrow())?;
        let token = record.token().ok_or(ApiError::MissingToken)?.to_string();

        match self
            .api_client
            .owed_by(&token, &operator, &date_from, &date_to)
            .await?
        {
            Some(response) => {
                let rows = rows_from_entries(&response.t_op_list);
                let count = rows.len();
                *debts.total.borrow_mut() = total_of(&rows);
                *debts.rows.borrow_mut() = rows;
                Ok(Some(count))
            }
            None => Ok(None),
        }
    }

    /// Settle the row pending confirmation. On success the matching row is
    /// removed locally and the total recomputed; the list is not re-fetched.
    pub async fn confirm_settlement(&self) {
        let debts = &self.state.debts;
        let Some(row) = debts.pending_settlement.borrow_mut().take() else {
            return;
        };

        match self.try_settle(&row).await {
            Ok(SettleOutcome::Settled) => {
                let mut rows = debts.rows.borrow_mut();
                remove_row(&mut rows, row.id);
                *debts.total.borrow_mut() = total_of(&rows);
                drop(rows);
                *debts.feedback.borrow_mut() = Some(SETTLED_MSG.to_string());
            }
            Ok(SettleOutcome::NothingToSettle) => {
                *debts.feedback.borrow_mut() = Some(NOTHING_TO_SETTLE_MSG.to_string());
            }
            Err(e) => {
                log::error!("❌ Error settling debt: {}", e);
                *debts.feedback.borrow_mut() = Some(e.to_string());
            }
        }
    }

    async fn try_settle(&self, row: &DebtRow) -> Result<SettleOutcome, ApiError> {
        let debts = &self.state.debts;
        let (date_from, date_to) = validate_dates(
            &debts.date_from.borrow(),
            &debts.date_to.borrow(),
            "Date From",
            "Date To",
        )?;

        let record = self.state.session.snapshot();
        let operator = resolve_operator(&record, &debts.operator_input.borrow())?;
        let token = record.token().ok_or(ApiError::MissingToken)?.to_string();

        self.api_client
            .settle_debts(&token, &operator, &row.operator, &date_from, &date_to)
            .await
    }
}

/// Presence-check both date fields, then normalize to YYYYMMDD.
pub fn validate_dates(
    date_from: &str,
    date_to: &str,
    from_label: &str,
    to_label: &str,
) -> Result<(String, String), ApiError> {
    if date_from.trim().is_empty() {
        return Err(ApiError::MissingInput(format!(
            "Please select a \"{}\".",
            from_label
        )));
    }
    if date_to.trim().is_empty() {
        return Err(ApiError::MissingInput(format!(
            "Please select a \"{}\".",
            to_label
        )));
    }
    let from = to_compact_date(date_from).map_err(ApiError::MissingInput)?;
    let to = to_compact_date(date_to).map_err(ApiError::MissingInput)?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<DebtEntry> {
        vec![
            DebtEntry {
                toll_op_id: "op2".into(),
                passes_cost: 12.5,
            },
            DebtEntry {
                toll_op_id: "op3".into(),
                passes_cost: 7.5,
            },
        ]
    }

    fn logged_in(operator_id: &str) -> SessionRecord {
        SessionRecord::LoggedIn {
            token: "abc123".into(),
            username: "op1".into(),
            operator_id: operator_id.into(),
        }
    }

    #[test]
    fn rows_get_sequential_one_based_ids() {
        let rows = rows_from_entries(&entries());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].operator, "op2");
        assert_eq!(rows[1].id, 2);
        assert_eq!(rows[1].cost, 7.5);
    }

    #[test]
    fn total_is_exact_sum_in_any_order() {
        let mut rows = rows_from_entries(&entries());
        assert_eq!(total_of(&rows), 20.0);
        rows.reverse();
        assert_eq!(total_of(&rows), 20.0);
        assert_eq!(total_of(&[]), 0.0);
    }

    #[test]
    fn settlement_removes_exactly_one_row() {
        // Scenario: two rows totalling €20.00; settling op2 leaves €7.50.
        let mut rows = rows_from_entries(&entries());
        let removed = remove_row(&mut rows, 1).unwrap();
        assert_eq!(removed.operator, "op2");
        assert_eq!(removed.cost, 12.5);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].operator, "op3");
        assert_eq!(total_of(&rows), 7.5);
    }

    #[test]
    fn removing_unknown_id_changes_nothing() {
        let mut rows = rows_from_entries(&entries());
        assert!(remove_row(&mut rows, 99).is_none());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn non_admin_always_uses_own_operator() {
        let record = logged_in("op1");
        assert_eq!(resolve_operator(&record, "op9").unwrap(), "op1");
        assert_eq!(resolve_operator(&record, "").unwrap(), "op1");
    }

    #[test]
    fn admin_must_supply_an_operator() {
        let record = logged_in("admin");
        assert_eq!(resolve_operator(&record, "op2").unwrap(), "op2");
        assert!(matches!(
            resolve_operator(&record, "  "),
            Err(ApiError::MissingInput(_))
        ));
    }

    #[test]
    fn date_validation_blocks_the_call() {
        assert!(matches!(
            validate_dates("", "2024-01-31", "Date From", "Date To"),
            Err(ApiError::MissingInput(msg)) if msg.contains("Date From")
        ));
        assert!(matches!(
            validate_dates("2024-01-01", "", "Date From", "Date To"),
            Err(ApiError::MissingInput(msg)) if msg.contains("Date To")
        ));
        let (from, to) = validate_dates("2024-01-01", "2024-01-31", "Date From", "Date To").unwrap();
        assert_eq!(from, "20240101");
        assert_eq!(to, "20240131");
    }
}
