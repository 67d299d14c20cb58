// ============================================================================
// PAGE STATE - Per-page UI state
// ============================================================================
// Each page owns its own state; nothing here is shared across pages. Kept
// in AppState (rather than render-local closures) so a full re-render
// repopulates inputs, tables, and feedback.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{DebtRow, StationView};

/// Home page: login form.
#[derive(Clone)]
pub struct HomePageState {
    pub username: Rc<RefCell<String>>,
    pub password: Rc<RefCell<String>>,
    pub error: Rc<RefCell<Option<String>>>,
    pub loading: Rc<RefCell<bool>>,
}

impl HomePageState {
    pub fn new() -> Self {
        Self {
            username: Rc::new(RefCell::new(String::new())),
            password: Rc::new(RefCell::new(String::new())),
            error: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
        }
    }
}

/// Map page: filters plus the stations of the last load.
#[derive(Clone)]
pub struct MapPageState {
    pub from_date: Rc<RefCell<String>>,
    pub to_date: Rc<RefCell<String>>,
    /// Admin-only override; non-admins always query their own id.
    pub operator_input: Rc<RefCell<String>>,
    pub stations: Rc<RefCell<Vec<StationView>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
    pub filters_open: Rc<RefCell<bool>>,
}

impl MapPageState {
    pub fn new() -> Self {
        Self {
            from_date: Rc::new(RefCell::new(String::new())),
            to_date: Rc::new(RefCell::new(String::new())),
            operator_input: Rc::new(RefCell::new(String::new())),
            stations: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
            filters_open: Rc::new(RefCell::new(true)),
        }
    }
}

/// Debts page: filters, the loaded rows, their total, and the row pending
/// confirmation in the settle dialog.
#[derive(Clone)]
pub struct DebtsPageState {
    pub date_from: Rc<RefCell<String>>,
    pub date_to: Rc<RefCell<String>>,
    pub operator_input: Rc<RefCell<String>>,
    pub rows: Rc<RefCell<Vec<DebtRow>>>,
    pub total: Rc<RefCell<f64>>,
    pub pending_settlement: Rc<RefCell<Option<DebtRow>>>,
    pub loading: Rc<RefCell<bool>>,
    pub feedback: Rc<RefCell<Option<String>>>,
}

impl DebtsPageState {
    pub fn new() -> Self {
        Self {
            date_from: Rc::new(RefCell::new(String::new())),
            date_to: Rc::new(RefCell::new(String::new())),
            operator_input: Rc::new(RefCell::new(String::new())),
            rows: Rc::new(RefCell::new(Vec::new())),
            total: Rc::new(RefCell::new(0.0)),
            pending_settlement: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
            feedback: Rc::new(RefCell::new(None)),
        }
    }
}

/// Admin page: one transient feedback string per action, plus the file
/// selected for the bulk pass upload.
#[derive(Clone)]
pub struct AdminPageState {
    pub health_status: Rc<RefCell<String>>,
    pub reset_feedback: Rc<RefCell<String>>,
    pub passes_feedback: Rc<RefCell<String>>,
    pub pass_file: Rc<RefCell<Option<web_sys::File>>>,
    pub busy: Rc<RefCell<bool>>,
}

impl AdminPageState {
    pub fn new() -> Self {
        Self {
            health_status: Rc::new(RefCell::new(String::new())),
            reset_feedback: Rc::new(RefCell::new(String::new())),
            passes_feedback: Rc::new(RefCell::new(String::new())),
            pass_file: Rc::new(RefCell::new(None)),
            busy: Rc::new(RefCell::new(false)),
        }
    }
}
