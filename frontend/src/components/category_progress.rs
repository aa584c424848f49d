use yew::prelude::*;

/// Bar fill for a percentage, clamped to 0..=100. Non-finite input renders empty.
pub fn fill_width(percentage: f64) -> f64 {
    if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryProgressProps {
    pub label: AttrValue,
    pub count: u64,
    pub percentage: f64,
    pub color: AttrValue,
}

#[function_component(CategoryProgress)]
pub fn category_progress(props: &CategoryProgressProps) -> Html {
    let width = fill_width(props.percentage);

    html! {
        <div class="category-progress space-y-2">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <span
                        class="inline-block w-2 h-2 rounded-full"
                        style={format!("background-color: {};", props.color)}
                    />
                    <span class="text-sm font-medium text-white">{props.label.clone()}</span>
                </div>
                <span class="text-sm font-bold text-white">{props.count}</span>
            </div>
            <div class="h-2 w-full rounded-full bg-white/10 overflow-hidden">
                <div
                    class="h-full rounded-full"
                    style={format!("width: {}%; background-color: {};", width, props.color)}
                />
            </div>
        </div>
    }
}
