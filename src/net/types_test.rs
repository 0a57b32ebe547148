use super::*;

// =============================================================
// Helpers
// =============================================================

fn customer_with_attrs(id: Option<i64>, attrs: &[(&str, AttrValue)]) -> Customer {
    Customer {
        id,
        attrs: attrs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect(),
    }
}

// =============================================================
// Customer serde
// =============================================================

#[test]
fn customer_deserializes_id_and_flattened_attrs() {
    let customer: Customer =
        serde_json::from_str(r#"{"id": 1, "name": "A", "email": "a@x.com"}"#).unwrap();
    assert_eq!(customer.id, Some(1));
    assert_eq!(customer.attr("name"), Some(&AttrValue::Text("A".to_owned())));
    assert_eq!(customer.attr("email"), Some(&AttrValue::Text("a@x.com".to_owned())));
}

#[test]
fn customer_deserializes_without_id() {
    let customer: Customer = serde_json::from_str(r#"{"name": "B"}"#).unwrap();
    assert_eq!(customer.id, None);
    assert_eq!(customer.attr_text("name"), "B");
}

#[test]
fn customer_create_payload_omits_unset_id() {
    let customer = customer_with_attrs(None, &[("name", AttrValue::from("B"))]);
    let body = serde_json::to_value(&customer).unwrap();
    assert_eq!(body, serde_json::json!({"name": "B"}));
}

#[test]
fn customer_serializes_assigned_id_at_top_level() {
    let customer = customer_with_attrs(Some(7), &[("name", AttrValue::from("C"))]);
    let body = serde_json::to_value(&customer).unwrap();
    assert_eq!(body, serde_json::json!({"id": 7, "name": "C"}));
}

#[test]
fn customer_round_trips_through_json() {
    let customer = customer_with_attrs(
        Some(3),
        &[
            ("active", AttrValue::Bool(true)),
            ("name", AttrValue::from("D")),
            ("score", AttrValue::Integer(42)),
        ],
    );
    let body = serde_json::to_string(&customer).unwrap();
    let back: Customer = serde_json::from_str(&body).unwrap();
    assert_eq!(back, customer);
}

#[test]
fn customer_attrs_iterate_in_sorted_key_order() {
    let customer: Customer =
        serde_json::from_str(r#"{"username": "u", "email": "e", "name": "n"}"#).unwrap();
    let keys: Vec<&str> = customer.attrs.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["email", "name", "username"]);
}

// =============================================================
// Boundary validation
// =============================================================

#[test]
fn customer_rejects_nested_object_attribute() {
    let result = serde_json::from_str::<Customer>(r#"{"name": {"first": "A"}}"#);
    assert!(result.is_err());
}

#[test]
fn customer_rejects_array_attribute() {
    let result = serde_json::from_str::<Customer>(r#"{"tags": ["vip"]}"#);
    assert!(result.is_err());
}

// =============================================================
// AttrValue typing and display
// =============================================================

#[test]
fn attr_value_decodes_each_scalar_type() {
    let customer: Customer = serde_json::from_str(
        r#"{"name": "A", "age": 30, "rating": 4.5, "active": true, "note": null}"#,
    )
    .unwrap();
    assert_eq!(customer.attr("name"), Some(&AttrValue::Text("A".to_owned())));
    assert_eq!(customer.attr("age"), Some(&AttrValue::Integer(30)));
    assert_eq!(customer.attr("rating"), Some(&AttrValue::Float(4.5)));
    assert_eq!(customer.attr("active"), Some(&AttrValue::Bool(true)));
    assert_eq!(customer.attr("note"), Some(&AttrValue::Null));
}

#[test]
fn attr_text_renders_scalars() {
    let customer: Customer =
        serde_json::from_str(r#"{"name": "A", "age": 30, "active": false, "note": null}"#).unwrap();
    assert_eq!(customer.attr_text("name"), "A");
    assert_eq!(customer.attr_text("age"), "30");
    assert_eq!(customer.attr_text("active"), "false");
    assert_eq!(customer.attr_text("note"), "");
}

#[test]
fn attr_text_missing_key_is_empty() {
    let customer = Customer::default();
    assert_eq!(customer.attr_text("name"), "");
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_serialize_to_expected_shape() {
    let credentials = Credentials {
        username: "admin".to_owned(),
        password: "secret".to_owned(),
    };
    let body = serde_json::to_value(&credentials).unwrap();
    assert_eq!(body, serde_json::json!({"username": "admin", "password": "secret"}));
}
