// ============================================================================
// ROUTER - Four-path navigation shell
// ============================================================================
// Deterministic mapping between URL paths and pages; no nested or
// parametrized routes. Role gating here is UI convenience only - real
// access control lives server-side.
// ============================================================================

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Map,
    Debts,
    Admin,
}

impl Route {
    /// Unknown paths fall back to Home.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/map" => Route::Map,
            "/debts" => Route::Debts,
            "/admin" => Route::Admin,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Map => "/map",
            Route::Debts => "/debts",
            Route::Admin => "/admin",
        }
    }
}

/// The route actually rendered: the admin page is not reachable unless the
/// stored operator id is the admin identifier.
pub fn effective_route(requested: Route, is_admin: bool) -> Route {
    match requested {
        Route::Admin if !is_admin => Route::Home,
        other => other,
    }
}

/// Route for the URL currently in the address bar.
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::from_path(&path)
}

/// Push a history entry for the route. The caller re-renders afterwards.
pub fn push_route(route: Route) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_four_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/map"), Route::Map);
        assert_eq!(Route::from_path("/debts"), Route::Debts);
        assert_eq!(Route::from_path("/admin"), Route::Admin);
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(Route::from_path("/nope"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::Home, Route::Map, Route::Debts, Route::Admin] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn admin_route_requires_admin_role() {
        assert_eq!(effective_route(Route::Admin, false), Route::Home);
        assert_eq!(effective_route(Route::Admin, true), Route::Admin);
        assert_eq!(effective_route(Route::Debts, false), Route::Debts);
    }
}
