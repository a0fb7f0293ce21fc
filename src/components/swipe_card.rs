use web_sys::HtmlElement;
use yew::prelude::*;
use yew_swipe::{Displacement, SwipeConfig, SwipeEnd, use_swipe};

#[derive(Properties, PartialEq, Clone)]
pub struct SwipeCardProps {
    pub label: String,
    pub config: SwipeConfig,
    pub on_progress: Callback<Displacement>,
    pub on_release: Callback<SwipeEnd>,
}

// Card follows the finger; quick swipes fling it off screen, slow ones snap back.
#[function_component(SwipeCard)]
pub fn swipe_card(props: &SwipeCardProps) -> Html {
    let card_ref = use_node_ref();
    let offset = use_state(Displacement::default);
    let dragging = use_state(|| false);

    // Keep callback identity stable: a new callback rebinds the tracker.
    let on_swipe = {
        let offset = offset.clone();
        let dragging = dragging.clone();
        use_callback(props.on_progress.clone(), move |d: Displacement, on_progress| {
            dragging.set(true);
            offset.set(d);
            on_progress.emit(d);
        })
    };
    let on_swipe_end = {
        let offset = offset.clone();
        let dragging = dragging.clone();
        use_callback(props.on_release.clone(), move |end: SwipeEnd, on_release| {
            dragging.set(false);
            if end.is_quick {
                let fling = |v: f64| if v == 0.0 { 0.0 } else { v.signum() * 1000.0 };
                offset.set(Displacement {
                    x: fling(end.dx),
                    y: fling(end.dy),
                });
            } else {
                offset.set(Displacement::default());
            }
            on_release.emit(end);
        })
    };

    let bind = use_swipe(on_swipe, on_swipe_end, props.config);
    {
        let card_ref = card_ref.clone();
        use_effect_with(card_ref, move |card_ref| {
            bind.emit(card_ref.cast::<HtmlElement>());
            || ()
        });
    }

    // New label means a new card: bring it back to the centre.
    {
        let offset = offset.clone();
        use_effect_with(props.label.clone(), move |_| {
            offset.set(Displacement::default());
            || ()
        });
    }

    let transition = if *dragging { "none" } else { "transform 0.25s ease-out" };
    let style = format!(
        "transform:translate({:.1}px, {:.1}px); transition:{}; touch-action:none; user-select:none; width:220px; height:300px; border-radius:16px; background:#21262d; border:1px solid #30363d; display:flex; align-items:center; justify-content:center; font-size:22px; font-weight:600;",
        offset.x, offset.y, transition
    );

    html! {
        <div ref={card_ref} style={style}>{ props.label.clone() }</div>
    }
}
