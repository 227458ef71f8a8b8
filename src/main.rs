use yew::prelude::*;
use yew_router::prelude::*;

mod app;
mod components;
mod mailer;
mod media;
mod nav;
mod scroll_lock;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        // Every path lands on the one-page site; section anchors do the rest.
        Route::Home | Route::NotFound => html! { <app::App /> },
    }
}

#[function_component(Root)]
fn root() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<Root>::new().render();
}
