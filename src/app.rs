use yew::prelude::*;

use crate::components::applications::Applications;
use crate::components::comparison::ComparisonTable;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::pricing::Pricing;
use crate::components::testimonials::Testimonials;

/// The one-page site: fixed navbar, the marketing sections in order, footer.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app">
            <Navbar />
            <main>
                <Hero />
                <Features />
                <Applications />
                <Testimonials />
                <ComparisonTable />
                <Pricing />
            </main>
            <Footer />
        </div>
    }
}
