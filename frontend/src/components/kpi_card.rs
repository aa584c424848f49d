use yew::prelude::*;

use crate::theme::tint;
use crate::view_model::KpiCardView;

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub card: KpiCardView,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="kpi-card flex flex-col gap-2 rounded-xl p-4 bg-white/5 border border-white/10">
            <div class="flex items-center gap-2">
                <span
                    class="flex items-center justify-center w-8 h-8 rounded-full"
                    style={format!("background-color: {};", tint(&card.color, "33"))}
                >
                    <span class="material-icons text-lg" style={format!("color: {};", card.color)}>
                        {card.icon}
                    </span>
                </span>
                <span class="text-xs font-medium text-gray-400">{card.label}</span>
            </div>
            <span class="kpi-value text-2xl font-bold text-white">{card.value.clone()}</span>
        </div>
    }
}
