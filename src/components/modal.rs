//! Shared dialog shell used by every modal on the site.
//!
//! One place owns the lifecycle contract: Escape-key dismissal, the document
//! scroll lock, backdrop-click close, and containment of clicks inside the
//! panel. The cleanup runs on every exit path — close, unmount, or re-render
//! with `is_open` false — so neither the key listener nor the scroll lock can
//! leak.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::scroll_lock;

#[derive(Properties, PartialEq)]
pub struct ModalShellProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Extra class on the panel, e.g. `narrow` or `wide`.
    #[prop_or_default]
    pub panel_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalShellProps) -> Html {
    use_effect_with_deps(
        move |(is_open, on_close): &(bool, Callback<()>)| {
            let destructor: Box<dyn FnOnce()> = if *is_open {
                scroll_lock::acquire();
                let on_close = on_close.clone();
                let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                });
                let document = web_sys::window().and_then(|w| w.document());
                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                Box::new(move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                    drop(callback);
                    scroll_lock::release();
                })
            } else {
                Box::new(|| ())
            };
            move || destructor()
        },
        (props.is_open, props.on_close.clone()),
    );

    if !props.is_open {
        return Html::default();
    }

    html! {
        <div class="modal-overlay">
            <div class="modal-backdrop" onclick={props.on_close.reform(|_: MouseEvent| ())}></div>
            <div
                class={classes!("modal-panel", "glass-card", props.panel_class.clone())}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}
