//! Customer list table.

#[cfg(test)]
#[path = "customer_table_test.rs"]
mod customer_table_test;

use leptos::prelude::*;

use crate::net::types::Customer;

/// Table of customers in the order the remote service returned them.
#[component]
pub fn CustomerTable(#[prop(into)] customers: Signal<Vec<Customer>>) -> impl IntoView {
    view! {
        <Show
            when=move || !customers.get().is_empty()
            fallback=|| view! { <p class="customer-table__empty">"No customers yet."</p> }
        >
            <table class="customer-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Username"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        customers
                            .get()
                            .into_iter()
                            .map(|customer| {
                                view! {
                                    <tr>
                                        <td>{id_text(&customer)}</td>
                                        <td>{customer.attr_text("name")}</td>
                                        <td>{customer.attr_text("email")}</td>
                                        <td>{customer.attr_text("username")}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

/// Identifier cell text; blank when the record somehow arrived without one.
fn id_text(customer: &Customer) -> String {
    customer.id.map(|id| id.to_string()).unwrap_or_default()
}
