use yew::prelude::*;

use crate::components::bottom_nav::{BottomNav, NavDestination};

#[derive(Properties, PartialEq)]
pub struct AdminSectionProps {
    pub destination: NavDestination,
    pub on_nav_press: Callback<NavDestination>,
}

/// Landing page for admin sections served by other parts of the console
#[function_component(AdminSection)]
pub fn admin_section(props: &AdminSectionProps) -> Html {
    html! {
        <div class="admin-section min-h-screen flex flex-col bg-slate-950 text-white">
            <header class="px-4 pt-6 pb-4">
                <h1 class="text-2xl font-bold tracking-tight">{props.destination.label()}</h1>
            </header>
            <main class="flex-1 px-4">
                <p class="text-sm text-gray-400">
                    {format!("{} is managed from the admin console.", props.destination.label())}
                </p>
            </main>
            <BottomNav active={props.destination} on_nav_press={props.on_nav_press.clone()} />
        </div>
    }
}
