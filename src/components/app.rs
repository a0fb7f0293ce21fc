use super::{settings_modal::SettingsModal, status_bar::StatusBar, swipe_card::SwipeCard};
use std::rc::Rc;
use yew::prelude::*;
use yew_swipe::{Displacement, SwipeConfig, SwipeEnd};

const CONFIG_KEY: &str = "yew_swipe_config";

const CARDS: &[&str] = &["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot"];

#[derive(Clone, Debug, Default, PartialEq)]
struct Deck {
    card: usize,
    dismissed: u32,
    last: Option<SwipeEnd>,
}

enum DeckAction {
    Release(SwipeEnd),
}

impl Reducible for Deck {
    type Action = DeckAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DeckAction::Release(end) => {
                next.last = Some(end);
                if end.is_quick {
                    next.dismissed += 1;
                    next.card = (next.card + 1) % CARDS.len();
                }
            }
        }
        next.into()
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(|| SwipeConfig::load(CONFIG_KEY));
    let show_settings = use_state(|| false);
    let deck = use_reducer(Deck::default);
    let live = use_state(|| None::<Displacement>);

    // Persist config changes
    use_effect_with(*config, move |cfg| {
        cfg.save(CONFIG_KEY);
        || ()
    });

    let on_progress = {
        let live = live.clone();
        use_callback((), move |d: Displacement, _| live.set(Some(d)))
    };
    let on_release = {
        let live = live.clone();
        let deck = deck.dispatcher();
        use_callback((), move |end: SwipeEnd, _| {
            live.set(None);
            deck.dispatch(DeckAction::Release(end));
        })
    };

    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let change_config = {
        let config = config.clone();
        Callback::from(move |cfg: SwipeConfig| config.set(cfg))
    };
    let reset_config = {
        let config = config.clone();
        Callback::from(move |_| config.set(SwipeConfig::default()))
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <div style="position:absolute; top:12px; right:12px;">
                <button onclick={open_settings} style="padding:4px 10px;">{"Settings"}</button>
            </div>
            <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center;">
                <SwipeCard
                    label={CARDS[deck.card].to_string()}
                    config={*config}
                    on_progress={on_progress}
                    on_release={on_release}
                />
            </div>
            <StatusBar live={*live} last={deck.last} dismissed={deck.dismissed} />
            <SettingsModal
                show={*show_settings}
                config={*config}
                on_change={change_config}
                on_close={close_settings}
                on_reset={reset_config}
            />
        </div>
    }
}
