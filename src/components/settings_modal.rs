use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_swipe::SwipeConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: SwipeConfig,
    pub on_change: Callback<SwipeConfig>,
    pub on_close: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_propagation_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config;
        Callback::from(move |_| cb.emit(cfg.with_stop_propagation(!cfg.stop_propagation)))
    };
    let duration_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                cb.emit(cfg.with_quick_swipe(v.max(0.0), cfg.quick_swipe_distance));
            }
        })
    };
    let distance_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                cb.emit(cfg.with_quick_swipe(cfg.quick_swipe_duration, v.max(0.0)));
            }
        })
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Swipe Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.config.stop_propagation} onclick={toggle_propagation_cb} />
                    <span>{"Stop Propagation"}</span>
                </label>
                <label style="display:flex; align-items:center; justify-content:space-between; gap:8px;">
                    <span>{"Quick swipe duration (ms)"}</span>
                    <input type="number" min="0" step="10" value={props.config.quick_swipe_duration.to_string()} oninput={duration_cb} style="width:80px;" />
                </label>
                <label style="display:flex; align-items:center; justify-content:space-between; gap:8px;">
                    <span>{"Quick swipe distance (px)"}</span>
                    <input type="number" min="0" step="5" value={props.config.quick_swipe_distance.to_string()} oninput={distance_cb} style="width:80px;" />
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Reset to Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"A swipe is quick when it ends before the duration and travels further than the distance on either axis."}</div>
        </div>
    </div>}
}
