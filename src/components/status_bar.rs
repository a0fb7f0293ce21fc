use yew::prelude::*;
use yew_swipe::{Displacement, SwipeEnd};

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBarProps {
    pub live: Option<Displacement>,
    pub last: Option<SwipeEnd>,
    pub dismissed: u32,
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    let live = match props.live {
        Some(d) => format!("dx {:.0}  dy {:.0}", d.x, d.y),
        None => "idle".to_string(),
    };
    let last = match props.last {
        Some(end) => format!(
            "{:.0}, {:.0} ({})",
            end.dx,
            end.dy,
            if end.is_quick { "quick" } else { "slow" }
        ),
        None => "-".to_string(),
    };
    html! {<div style="position:absolute; bottom:12px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; display:flex; gap:16px; font-size:13px;">
        <span>{ live }</span>
        <span>{ format!("last: {}", last) }</span>
        <span>{ format!("dismissed: {}", props.dismissed) }</span>
    </div>}
}
