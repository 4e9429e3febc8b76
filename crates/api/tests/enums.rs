//! String enumerations in the `enums` namespace.

use jsonbind_api::enums::{
    returns_enum, takes_enum, takes_multiple_optional_enums, takes_optional_enum, EnumType,
    OptionalEnumType, State, Type,
};
use jsonbind_core::{ConvertError, Params, Record};
use serde_json::json;

#[test]
fn enum_type_populate() {
    let value = json!({ "type": "one" });
    let enum_type = EnumType::from_dict_value(&value).unwrap();
    assert_eq!(enum_type.kind, Type::One);
    assert_eq!(enum_type.to_dict_value(), value);
}

#[test]
fn enum_type_rejects_invalid() {
    let err = EnumType::from_dict_value(&json!({ "type": "invalid" })).unwrap_err();
    match err {
        ConvertError::InvalidEnum {
            path,
            value,
            allowed,
        } => {
            assert_eq!(path.to_string(), "$.type");
            assert_eq!(value, "invalid");
            assert_eq!(allowed, &["one", "two", "three"]);
        }
        other => panic!("expected InvalidEnum, got {:?}", other),
    }
}

#[test]
fn optional_enum_type_present() {
    let value = json!({ "type": "two" });
    let enum_type = OptionalEnumType::from_dict_value(&value).unwrap();
    assert_eq!(enum_type.kind, Some(Type::Two));
    assert_eq!(enum_type.to_dict_value(), value);
}

#[test]
fn optional_enum_type_absent() {
    let value = json!({});
    let enum_type = OptionalEnumType::from_dict_value(&value).unwrap();
    assert_eq!(enum_type.kind, None);
    assert_eq!(enum_type.to_dict_value(), value);
}

#[test]
fn optional_enum_type_rejects_invalid() {
    assert!(OptionalEnumType::from_dict_value(&json!({ "type": "invalid" })).is_err());
}

#[test]
fn takes_enum_params_create() {
    let params = takes_enum::Params::create(&[json!("baz")]).unwrap();
    assert_eq!(params.state, State::Baz);
    assert!(takes_enum::Params::create(&[json!("invalid")]).is_none());
}

#[test]
fn takes_optional_enum_params_create() {
    let params = takes_optional_enum::Params::create(&[json!("baz")]).unwrap();
    assert_eq!(params.state, Some(State::Baz));

    let params = takes_optional_enum::Params::create(&[]).unwrap();
    assert_eq!(params.state, None);

    assert!(takes_optional_enum::Params::create(&[json!("invalid")]).is_none());
}

#[test]
fn takes_multiple_optional_enums_params_create() {
    use takes_multiple_optional_enums::{Params as MultiParams, Type as MultiType};

    let params = MultiParams::create(&[json!("foo"), json!("foo")]).unwrap();
    assert_eq!(params.state, Some(State::Foo));
    assert_eq!(params.kind, Some(MultiType::Foo));

    let params = MultiParams::create(&[json!("foo")]).unwrap();
    assert_eq!(params.state, Some(State::Foo));
    assert_eq!(params.kind, None);

    let params = MultiParams::create(&[]).unwrap();
    assert_eq!(params.state, None);
    assert_eq!(params.kind, None);

    assert!(MultiParams::create(&[json!("baz"), json!("invalid")]).is_none());
}

#[test]
fn enum_params_scoped_per_function() {
    use takes_multiple_optional_enums::Params as MultiParams;

    // "ding" is a Type value, not a State value.
    assert!(MultiParams::create(&[json!("ding")]).is_none());
    assert!(MultiParams::create(&[json!(null), json!("ding")]).is_some());
}

#[test]
fn returns_enum_result_create() {
    assert_eq!(returns_enum::result::create(State::Bar), json!("bar"));
}
