//! Customer creation form.

use leptos::prelude::*;

use crate::state::form::CustomerForm;

/// Three-field creation form bound to the panel's draft signal.
///
/// The form only raises `on_submit`; deciding whether the draft is valid
/// and dispatching the create call belong to the page.
#[component]
pub fn CustomerCreateForm(draft: RwSignal<CustomerForm>, on_submit: Callback<()>) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="customer-form" on:submit=handle_submit>
            <input
                class="customer-form__input"
                type="text"
                placeholder="Name"
                prop:value=move || draft.get().name
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <input
                class="customer-form__input"
                type="email"
                placeholder="Email"
                prop:value=move || draft.get().email
                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
            />
            <input
                class="customer-form__input"
                type="text"
                placeholder="Username"
                prop:value=move || draft.get().username
                on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
            />
            <button class="customer-form__submit" type="submit">
                "Add Customer"
            </button>
        </form>
    }
}
