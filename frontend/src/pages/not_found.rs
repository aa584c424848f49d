use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page min-h-screen flex flex-col items-center justify-center gap-4 bg-slate-950 text-white">
            <h1 class="text-2xl font-bold">{"404 - Page Not Found"}</h1>
            <p class="text-gray-400">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::AdminAnalytics} classes={classes!("text-sm", "font-semibold", "text-emerald-400")}>
                {"Back to analytics"}
            </Link<Route>>
        </div>
    }
}
