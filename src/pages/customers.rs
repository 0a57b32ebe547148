//! Customer panel: list view plus creation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the app's only screen. On mount it pulls the full customer list
//! from the remote service; a valid form submission posts a new customer
//! and then reloads the list so the displayed identity is always the
//! server-assigned one. All state mutation goes through the transitions on
//! [`CustomersState`].

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::customer_form::CustomerCreateForm;
use crate::components::customer_table::CustomerTable;
use crate::net::types::Customer;
use crate::state::customers::CustomersState;
use crate::state::form::CustomerForm;

/// Customer panel page.
///
/// Known gap carried over from the upstream behavior: nothing guards
/// against overlapping submissions, so a second click before the first
/// create settles dispatches a second call.
#[component]
pub fn CustomersPage() -> impl IntoView {
    let state = RwSignal::new(CustomersState::default());
    let draft = RwSignal::new(CustomerForm::default());

    // Teardown guard for the deferred success-message clear: once the
    // panel unmounts, a still-pending timer must not write into it.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    spawn_list_reload(state);

    let on_submit = Callback::new(move |()| {
        // Invalid drafts are dropped silently: no call, no state change.
        let Some(payload) = submission_payload(&draft.get_untracked()) else {
            return;
        };
        state.update(CustomersState::begin_submission);

        #[cfg(feature = "csr")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::add_customer(&payload).await {
                    Ok(_) => {
                        state.update(CustomersState::apply_create_success);
                        spawn_list_reload(state);
                        draft.set(CustomerForm::default());

                        gloo_timers::future::sleep(
                            crate::state::customers::SUCCESS_MESSAGE_CLEAR_DELAY,
                        )
                        .await;
                        if alive.load(Ordering::Relaxed) {
                            state.update(CustomersState::clear_success_message);
                        }
                    }
                    Err(error) => {
                        log::error!("Error adding customer: {error}");
                        state.update(|s| s.apply_create_failure(&error));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (payload, &alive);
    });

    let customers = Signal::derive(move || state.get().customers);

    view! {
        <section class="customer-page">
            <h2>"Customers"</h2>

            <Show when=move || !state.get().success_message.is_empty()>
                <p class="customer-page__message customer-page__message--success">
                    {move || state.get().success_message}
                </p>
            </Show>
            <Show when=move || !state.get().error_message.is_empty()>
                <p class="customer-page__message customer-page__message--error">
                    {move || state.get().error_message}
                </p>
            </Show>

            <CustomerCreateForm draft=draft on_submit=on_submit/>
            <CustomerTable customers=customers/>
        </section>
    }
}

/// Fetch the full list and replace the panel's copy wholesale. Failures
/// keep whatever list is showing and surface the fixed message; there is
/// no retry.
fn spawn_list_reload(state: RwSignal<CustomersState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_customers().await {
            Ok(customers) => state.update(|s| s.apply_list_success(customers)),
            Err(error) => {
                log::error!("Failed to load customers: {error}");
                state.update(CustomersState::apply_list_failure);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = state;
}

/// The submission gate: a valid draft yields its create payload, an
/// invalid one yields nothing and the submission is ignored.
fn submission_payload(draft: &CustomerForm) -> Option<Customer> {
    draft.is_valid().then(|| draft.to_customer())
}
