// ============================================================================
// APP STATE - Global application state
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::router::Route;
use crate::state::pages::{AdminPageState, DebtsPageState, HomePageState, MapPageState};
use crate::state::session_state::SessionState;

#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub route: Rc<RefCell<Route>>,

    pub home: HomePageState,
    pub map: MapPageState,
    pub debts: DebtsPageState,
    pub admin: AdminPageState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::restore(),
            route: Rc::new(RefCell::new(crate::router::current_route())),
            home: HomePageState::new(),
            map: MapPageState::new(),
            debts: DebtsPageState::new(),
            admin: AdminPageState::new(),
        }
    }

    pub fn current_route(&self) -> Route {
        *self.route.borrow()
    }

    pub fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }
}
