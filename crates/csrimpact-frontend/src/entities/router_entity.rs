use csrimpact_bridge::session::UserRole;
use gpui::Context;

use crate::router::Route;

/// Owns the active route, the role carried by the last navigation
/// transition, and the back stack.
///
/// The navigation role feeds role resolution with the highest precedence;
/// most transitions carry `None` and fall through to the persisted role.
pub struct RouterEntity {
    route: Route,
    nav_role: Option<UserRole>,
    stack: Vec<(Route, Option<UserRole>)>,
}

impl RouterEntity {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            nav_role: None,
            stack: Vec::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn nav_role(&self) -> Option<UserRole> {
        self.nav_role
    }

    /// Navigates to a route, remembering the current one for [`Self::back`].
    pub fn push(&mut self, route: Route, nav_role: Option<UserRole>, cx: &mut Context<Self>) {
        if self.route == route && self.nav_role == nav_role {
            return;
        }
        let previous = std::mem::replace(&mut self.route, route);
        self.stack.push((previous, self.nav_role));
        self.nav_role = nav_role;
        cx.notify();
    }

    /// Returns to the previous route; with an empty history the dashboard
    /// is the safe landing spot.
    pub fn back(&mut self, cx: &mut Context<Self>) {
        let (route, nav_role) = self
            .stack
            .pop()
            .unwrap_or((Route::Dashboard, None));
        self.route = route;
        self.nav_role = nav_role;
        cx.notify();
    }
}
