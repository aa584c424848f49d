use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::{HttpPollingProvider, ProviderHandle};
use crate::components::bottom_nav::NavDestination;

pub mod api;
pub mod components;
pub mod config;
pub mod theme;
pub mod view_model;
pub mod analytics {
    pub mod hooks;
    pub mod http;
    pub mod in_memory;
    pub mod provider;
    pub use hooks::*;
    pub use http::*;
    pub use in_memory::*;
    pub use provider::*;
}
pub mod pages {
    pub mod admin_section;
    pub mod analytics_dashboard;
    pub mod not_found;
}

use pages::{
    admin_section::AdminSection, analytics_dashboard::AnalyticsDashboardScreen, not_found::NotFound,
};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin/users")]
    AdminUsers,
    #[at("/admin/categories")]
    AdminCategories,
    #[at("/admin/analytics")]
    AdminAnalytics,
    #[at("/admin/roles")]
    AdminRoles,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<NavDestination> for Route {
    fn from(destination: NavDestination) -> Self {
        match destination {
            NavDestination::UserManagement => Route::AdminUsers,
            NavDestination::Categories => Route::AdminCategories,
            NavDestination::Analytics => Route::AdminAnalytics,
            NavDestination::RolesPermissions => Route::AdminRoles,
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    let provider = use_memo((), |_| ProviderHandle::new(HttpPollingProvider::from_config()));

    html! {
        <ContextProvider<ProviderHandle> context={(*provider).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ProviderHandle>>
    }
}

/// Navigation callback shared by every admin page
#[hook]
fn use_nav_press() -> Callback<NavDestination> {
    let navigator = use_navigator();
    Callback::from(move |destination: NavDestination| {
        info!("Navigating to {}", destination.key());
        match &navigator {
            Some(navigator) => navigator.push(&Route::from(destination)),
            None => error!("No router available to navigate to {}", destination.key()),
        }
    })
}

#[function_component(AdminAnalyticsPage)]
fn admin_analytics_page() -> Html {
    let provider = use_context::<ProviderHandle>();
    let on_nav_press = use_nav_press();

    match provider {
        Some(provider) => html! {
            <AnalyticsDashboardScreen {provider} {on_nav_press} />
        },
        None => {
            error!("Analytics provider context not found");
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
struct AdminSectionPageProps {
    destination: NavDestination,
}

#[function_component(AdminSectionPage)]
fn admin_section_page(props: &AdminSectionPageProps) -> Html {
    let on_nav_press = use_nav_press();
    html! {
        <AdminSection destination={props.destination} {on_nav_press} />
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::AdminAnalytics} /> },
        Route::AdminAnalytics => html! { <AdminAnalyticsPage /> },
        Route::AdminUsers => html! {
            <AdminSectionPage destination={NavDestination::UserManagement} />
        },
        Route::AdminCategories => html! {
            <AdminSectionPage destination={NavDestination::Categories} />
        },
        Route::AdminRoles => html! {
            <AdminSectionPage destination={NavDestination::RolesPermissions} />
        },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting analytics dashboard");
    yew::Renderer::<App>::new().render();

    Ok(())
}

// Start function that Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            web_sys::console::error_1(&e);
        }
    });
    Ok(())
}
