use super::*;
use crate::net::types::AttrValue;

#[test]
fn id_text_renders_server_assigned_id() {
    let customer = Customer { id: Some(42), attrs: std::collections::BTreeMap::new() };
    assert_eq!(id_text(&customer), "42");
}

#[test]
fn id_text_is_blank_without_an_id() {
    let customer = Customer {
        id: None,
        attrs: [("name".to_owned(), AttrValue::from("A"))].into_iter().collect(),
    };
    assert_eq!(id_text(&customer), "");
}
