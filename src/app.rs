//! Root application shell: static heading plus routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::customers::CustomersPage;

/// Root component. Pure composition: a heading, the customer page on the
/// root route, and the router as the navigation placeholder. No state of
/// its own.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Admin Dashboard"/>

        <div class="app-heading">
            <h1>"Admin Dashboard"</h1>
        </div>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CustomersPage/>
            </Routes>
        </Router>
    }
}
