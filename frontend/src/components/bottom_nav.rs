use yew::prelude::*;

use crate::theme::Theme;

/// Admin sections reachable from the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDestination {
    UserManagement,
    Categories,
    Analytics,
    RolesPermissions,
}

impl NavDestination {
    pub const ALL: [NavDestination; 4] = [
        NavDestination::UserManagement,
        NavDestination::Categories,
        NavDestination::Analytics,
        NavDestination::RolesPermissions,
    ];

    /// Stable key handed to `on_nav_press`
    pub fn key(&self) -> &'static str {
        match self {
            NavDestination::UserManagement => "admin-user-management",
            NavDestination::Categories => "admin-categories",
            NavDestination::Analytics => "admin-analytics",
            NavDestination::RolesPermissions => "admin-roles-permissions",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|destination| destination.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavDestination::UserManagement => "Users",
            NavDestination::Categories => "Categories",
            NavDestination::Analytics => "Analytics",
            NavDestination::RolesPermissions => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavDestination::UserManagement => "group",
            NavDestination::Categories => "category",
            NavDestination::Analytics => "bar_chart",
            NavDestination::RolesPermissions => "settings",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BottomNavProps {
    pub active: NavDestination,
    pub on_nav_press: Callback<NavDestination>,
    #[prop_or_default]
    pub theme: std::rc::Rc<Theme>,
}

#[function_component(BottomNav)]
pub fn bottom_nav(props: &BottomNavProps) -> Html {
    html! {
        <nav class="bottom-nav fixed bottom-0 inset-x-0 flex justify-around border-t border-white/10 bg-slate-900/95 pb-4 pt-2">
            { for NavDestination::ALL.iter().map(|destination| {
                let destination = *destination;
                let is_active = destination == props.active;
                let onclick = {
                    let on_nav_press = props.on_nav_press.clone();
                    Callback::from(move |_: MouseEvent| on_nav_press.emit(destination))
                };
                let color = if is_active { &props.theme.primary } else { &props.theme.text_muted };

                html! {
                    <button
                        key={destination.key()}
                        type="button"
                        class={classes!(
                            "flex", "flex-col", "items-center", "gap-1", "min-h-[44px]", "px-3",
                            is_active.then_some("nav-active")
                        )}
                        data-destination={destination.key()}
                        {onclick}
                    >
                        <span class="material-icons text-2xl" style={format!("color: {};", color)}>
                            {destination.icon()}
                        </span>
                        <span class="text-[10px] font-medium" style={format!("color: {};", color)}>
                            {destination.label()}
                        </span>
                    </button>
                }
            }) }
        </nav>
    }
}
