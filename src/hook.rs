use web_sys::HtmlElement;
use yew::prelude::*;

use crate::model::{Displacement, SwipeConfig, SwipeEnd};
use crate::tracker::GestureTracker;
use crate::web::ElementSurface;

/// Track swipes on an element.
///
/// Returns a stable setter: emit `Some(element)` to start tracking it and
/// `None` to stop. The tracker is rebuilt whenever the element, either
/// callback (by identity) or `config` changes, and torn down on unmount.
#[hook]
pub fn use_swipe(
    on_swipe: Callback<Displacement>,
    on_swipe_end: Callback<SwipeEnd>,
    config: SwipeConfig,
) -> Callback<Option<HtmlElement>> {
    let element = use_state_eq(|| None::<HtmlElement>);
    let set_element = {
        let element = element.setter();
        use_callback((), move |el: Option<HtmlElement>, _| element.set(el))
    };

    {
        let el = (*element).clone();
        use_effect_with(
            (el, on_swipe, on_swipe_end, config),
            move |(el, on_swipe, on_swipe_end, config)| {
                let mut tracker = GestureTracker::with_config(on_swipe.clone(), on_swipe_end.clone(), *config);
                tracker.set_surface(el.clone().map(ElementSurface::new));
                move || drop(tracker)
            },
        );
    }

    set_element
}
