use shared::gate::Navigation;
use yew_router::navigator::Navigator;
use yew_router::Routable;

use crate::Route;

/// Pushes known routes through yew-router and falls back to a full page load
/// for anything the router does not own.
#[derive(Clone)]
pub struct RouteNavigator {
    router: Option<Navigator>,
}

impl RouteNavigator {
    pub fn new(router: Option<Navigator>) -> Self {
        Self { router }
    }
}

impl Navigation for RouteNavigator {
    fn navigate(&self, route: &str) {
        if let (Some(router), Some(target)) = (&self.router, Route::recognize(route)) {
            if target != Route::NotFound {
                router.push(&target);
                return;
            }
        }

        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(route) {
                    log::error!("Failed to navigate to {route}: {e:?}");
                }
            }
            None => log::error!("Failed to navigate to {route}: no window"),
        }
    }
}
