use yew::prelude::*;

use crate::view_model::ContributorRowView;

#[derive(Properties, PartialEq)]
pub struct ContributorRowProps {
    pub row: ContributorRowView,
    pub accent: AttrValue,
    pub rank_badge: AttrValue,
}

#[function_component(ContributorRow)]
pub fn contributor_row(props: &ContributorRowProps) -> Html {
    let row = &props.row;

    html! {
        <div class="contributor-row flex items-center gap-3 py-3">
            <div class="relative w-10 h-10 shrink-0">
                if let Some(avatar) = &row.avatar {
                    <img class="w-10 h-10 rounded-full object-cover" src={avatar.clone()} alt={row.name.clone()} />
                } else {
                    <div class="w-10 h-10 rounded-full bg-white/10 flex items-center justify-center">
                        <span class="text-sm font-bold text-white">{row.initial.clone()}</span>
                    </div>
                }
                if row.is_top_ranked {
                    <span class="rank-badge absolute -bottom-1 -right-1 w-4 h-4 rounded-full bg-slate-900 flex items-center justify-center">
                        <span class="material-icons text-[10px]" style={format!("color: {};", props.rank_badge)}>
                            {"star"}
                        </span>
                    </span>
                }
            </div>
            <div class="flex-1 min-w-0">
                <p class="text-sm font-semibold text-white truncate">{row.name.clone()}</p>
                <p class="text-xs text-gray-400">{row.resolutions.clone()}</p>
            </div>
            <span
                class="efficiency-badge text-xs font-bold px-2 py-1 rounded-md bg-white/5"
                style={format!("color: {};", props.accent)}
            >
                {row.efficiency.clone()}
            </span>
        </div>
    }
}
