use codability::{CodingKey, CodingKeys, HasCodingKeys};

#[derive(CodingKeys)]
#[coding_keys("name=firstName, last_name=surname")]
#[allow(dead_code)]
struct Person {
    name: String,
    last_name: String,
    age: u32,
}

#[derive(CodingKeys)]
#[coding_keys("")]
#[allow(dead_code)]
struct Plain {
    a: String,
    b: u32,
}

#[derive(CodingKeys)]
#[coding_keys("value=payload")]
#[allow(dead_code)]
struct Wrapper<T> {
    value: T,
    version: u32,
}

#[test]
fn overridden_fields_use_their_keys() {
    assert_eq!(PersonCodingKeys::Name.coding_key(), "firstName");
    assert_eq!(PersonCodingKeys::LastName.coding_key(), "surname");
    assert_eq!(PersonCodingKeys::Age.coding_key(), "age");
}

#[test]
fn keys_follow_field_declaration_order() {
    let fields: Vec<_> = <Person as HasCodingKeys>::coding_keys()
        .iter()
        .map(|k| k.field_name())
        .collect();

    assert_eq!(fields, ["name", "last_name", "age"]);
}

#[test]
fn blank_string_yields_identity_mapping() {
    let pairs: Vec<_> = PlainCodingKeys::ALL
        .iter()
        .map(|k| (k.field_name(), k.coding_key()))
        .collect();

    assert_eq!(pairs, [("a", "a"), ("b", "b")]);
}

#[test]
fn reverse_lookup_by_coding_key() {
    assert_eq!(
        PersonCodingKeys::from_coding_key("surname"),
        Some(PersonCodingKeys::LastName)
    );
    assert_eq!(PersonCodingKeys::from_coding_key("last_name"), None);
}

#[test]
fn reverse_lookup_by_field_name() {
    assert_eq!(
        PersonCodingKeys::from_field_name("age"),
        Some(PersonCodingKeys::Age)
    );
    assert_eq!(PersonCodingKeys::from_field_name("firstName"), None);
}

#[test]
fn generic_structs_expand() {
    assert_eq!(WrapperCodingKeys::Value.coding_key(), "payload");
    assert_eq!(
        <Wrapper<String> as HasCodingKeys>::coding_keys().len(),
        2
    );
}
