use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlVideoElement};
use yew::prelude::*;

use crate::components::modal::ModalShell;
use crate::media::{self, PlaybackState};
use crate::{mailer, nav};

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

const POSTER: &str =
    "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=1200&h=675&fit=crop&crop=center";
// Same clip from several hosts; the element plays whichever source loads.
const SOURCES: &[&str] = &[
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
    "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4",
    "https://www.w3schools.com/html/mov_bbb.mp4",
];

const WHAT_YOULL_SEE: &[(&str, &str)] = &[
    ("#60a5fa", "Real-time emotional analysis and twin generation"),
    ("#a78bfa", "Predictive therapy simulation in action"),
    ("#22d3ee", "Multiple perspective interactions"),
    ("#4ade80", "Clinical dashboard and insights"),
];

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("#fb923c", "5-minute comprehensive overview"),
    ("#f472b6", "Live user interaction examples"),
    ("#8b5cf6", "Future self conversation demo"),
    ("#facc15", "Clinical integration walkthrough"),
];

/// One media-element notification. Each variant patches a single transport
/// field so two events landing in the same render window cannot clobber each
/// other's updates.
pub enum PlaybackAction {
    Playing(bool),
    Muted(bool),
    Time(f64),
    Duration(f64),
    Reset,
}

impl Reducible for PlaybackState {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            PlaybackAction::Playing(playing) => next.is_playing = playing,
            PlaybackAction::Muted(muted) => next.is_muted = muted,
            PlaybackAction::Time(seconds) => next.current_time = seconds,
            PlaybackAction::Duration(seconds) => next.duration = seconds,
            PlaybackAction::Reset => next = PlaybackState::default(),
        }
        Rc::new(next)
    }
}

/// Demo video dialog. The `<video>` element is the source of truth for the
/// transport state: the play/pause icon, timestamps and progress fill are all
/// driven by the element's own notifications, never set optimistically.
#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    let playback = use_reducer(PlaybackState::default);
    let video_ref = use_node_ref();

    // Transport state does not survive a close; reopening starts fresh.
    {
        let playback = playback.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                if !is_open {
                    playback.dispatch(PlaybackAction::Reset);
                }
                || ()
            },
            props.is_open,
        );
    }

    let on_play = {
        let playback = playback.clone();
        Callback::from(move |_: Event| playback.dispatch(PlaybackAction::Playing(true)))
    };
    let on_pause = {
        let playback = playback.clone();
        Callback::from(move |_: Event| playback.dispatch(PlaybackAction::Playing(false)))
    };
    let on_time_update = {
        let playback = playback.clone();
        Callback::from(move |e: Event| {
            let video: HtmlVideoElement = e.target_unchecked_into();
            playback.dispatch(PlaybackAction::Time(video.current_time()));
        })
    };
    let on_loaded_metadata = {
        let playback = playback.clone();
        Callback::from(move |e: Event| {
            let video: HtmlVideoElement = e.target_unchecked_into();
            playback.dispatch(PlaybackAction::Duration(video.duration()));
        })
    };

    let toggle_play = {
        let video_ref = video_ref.clone();
        Callback::from(move |_| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                if video.paused() {
                    // The `play` event flips the icon once playback starts.
                    let _ = video.play();
                } else {
                    let _ = video.pause();
                }
            }
        })
    };

    let toggle_mute = {
        let playback = playback.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                let muted = !video.muted();
                video.set_muted(muted);
                playback.dispatch(PlaybackAction::Muted(muted));
            }
        })
    };

    let on_seek = {
        let video_ref = video_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            let Some(track) = e
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            let rect = track.get_bounding_client_rect();
            let fraction = media::click_fraction(e.client_x() as f64, rect.left(), rect.width());
            // No-op until metadata arrives; never seeds an invalid position.
            if let Some(target) = media::seek_target(fraction, video.duration()) {
                video.set_current_time(target);
            }
        })
    };

    let on_fullscreen = {
        let video_ref = video_ref.clone();
        Callback::from(move |_| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                // Best effort; environments without fullscreen just ignore it.
                let _ = video.request_fullscreen();
            }
        })
    };

    let early_access = Callback::from(|_| {
        mailer::compose(mailer::GENERAL, "Request Early Access - Omni Digital Twin");
    });
    let explore_features = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            on_close.emit(());
            Timeout::new(300, || nav::scroll_to_section("features")).forget();
        })
    };

    let progress = media::progress_percent(playback.current_time, playback.duration);

    html! {
        <ModalShell is_open={props.is_open} on_close={props.on_close.clone()} panel_class="wide">
            <style>{r#"
                .video-frame {
                    position: relative;
                    background: #000;
                    border-radius: 0.5rem;
                    overflow: hidden;
                }
                .video-frame video { width: 100%; height: auto; max-height: 70vh; display: block; }
                .video-controls {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    padding: 1rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                }
                .progress-track {
                    width: 100%;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    margin-bottom: 1rem;
                    cursor: pointer;
                }
                .progress-fill {
                    height: 100%;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    transition: width 0.15s linear;
                }
                .transport-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .transport-row .cluster { display: flex; align-items: center; gap: 1rem; }
                .transport-btn {
                    background: rgba(255, 255, 255, 0.2);
                    border: none;
                    border-radius: 9999px;
                    color: #fff;
                    width: 2.5rem;
                    height: 2.5rem;
                    cursor: pointer;
                }
                .transport-btn:hover { background: rgba(255, 255, 255, 0.3); }
                .time-display { font-size: 0.85rem; }
                .video-caption { font-size: 0.85rem; color: #d1d5db; }
                .demo-notes {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    margin-top: 1.5rem;
                }
                @media (max-width: 768px) {
                    .demo-notes { grid-template-columns: 1fr; }
                }
                .demo-notes h3 { font-size: 1.1rem; margin-bottom: 0.75rem; }
                .demo-note-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    font-size: 0.9rem;
                    color: #d1d5db;
                    margin-bottom: 0.5rem;
                }
                .demo-note-dot {
                    flex-shrink: 0;
                    width: 0.5rem;
                    height: 0.5rem;
                    margin-top: 0.4rem;
                    border-radius: 9999px;
                }
            "#}</style>
            <div class="modal-header">
                <div>
                    <h2 class="gradient-text">{ "Omni Digital Twin™ Demo" }</h2>
                    <p class="subtitle">{ "Experience the future of mental health technology" }</p>
                </div>
                <button class="modal-close" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-xmark"></i>
                </button>
            </div>
            <div class="video-frame">
                <video
                    ref={video_ref}
                    poster={POSTER}
                    onplay={on_play}
                    onpause={on_pause.clone()}
                    onended={on_pause}
                    ontimeupdate={on_time_update}
                    onloadedmetadata={on_loaded_metadata}
                >
                    { for SOURCES.iter().map(|src| html! {
                        <source key={*src} src={*src} type="video/mp4" />
                    }) }
                    { "Your browser does not support the video tag." }
                </video>
                <div class="video-controls">
                    <div class="progress-track" onclick={on_seek}>
                        <div class="progress-fill" style={format!("width:{progress}%;")}></div>
                    </div>
                    <div class="transport-row">
                        <div class="cluster">
                            <button class="transport-btn" onclick={toggle_play}>
                                <i class={if playback.is_playing { "fas fa-pause" } else { "fas fa-play" }}></i>
                            </button>
                            <button class="transport-btn" onclick={toggle_mute}>
                                <i class={if playback.is_muted { "fas fa-volume-xmark" } else { "fas fa-volume-high" }}></i>
                            </button>
                            <div class="time-display">
                                { format!(
                                    "{} / {}",
                                    media::format_time(playback.current_time),
                                    media::format_time(playback.duration),
                                ) }
                            </div>
                        </div>
                        <div class="cluster">
                            <span class="video-caption">{ "Omni Digital Twin™ - Interactive Demo" }</span>
                            <button class="transport-btn" onclick={on_fullscreen}>
                                <i class="fas fa-expand"></i>
                            </button>
                        </div>
                    </div>
                </div>
            </div>
            <div class="demo-notes">
                <div>
                    <h3>{ "What You'll See:" }</h3>
                    { for WHAT_YOULL_SEE.iter().map(|&(color, label)| html! {
                        <div class="demo-note-row" key={label}>
                            <div class="demo-note-dot" style={format!("background:{color};")}></div>
                            <span>{ label }</span>
                        </div>
                    }) }
                </div>
                <div>
                    <h3>{ "Demo Highlights:" }</h3>
                    { for HIGHLIGHTS.iter().map(|&(color, label)| html! {
                        <div class="demo-note-row" key={label}>
                            <div class="demo-note-dot" style={format!("background:{color};")}></div>
                            <span>{ label }</span>
                        </div>
                    }) }
                </div>
            </div>
            <div class="modal-actions">
                <button class="primary-btn" onclick={early_access}>{ "Request Early Access" }</button>
                <button class="ghost-btn" onclick={explore_features}>{ "Explore Features" }</button>
            </div>
        </ModalShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_events_keep_each_others_fields() {
        let state = Rc::new(PlaybackState::default());
        let state = state.reduce(PlaybackAction::Playing(true));
        let state = state.reduce(PlaybackAction::Duration(120.0));
        let state = state.reduce(PlaybackAction::Time(12.0));
        assert!(state.is_playing, "timeupdate must not clobber the play flag");
        assert_eq!(state.duration, 120.0);
        assert_eq!(state.current_time, 12.0);
    }

    #[test]
    fn reset_returns_the_default_transport() {
        let state = Rc::new(PlaybackState {
            is_playing: true,
            is_muted: true,
            current_time: 9.0,
            duration: 120.0,
        });
        assert_eq!(*state.reduce(PlaybackAction::Reset), PlaybackState::default());
    }
}
