#![cfg(feature = "serde")]

use compact_math::{Degrees, Matrix4, Radians, Vector2, Vector3, Vector4};

#[test]
fn vectors_serialize_as_plain_arrays() {
    assert_eq!(
        serde_json::to_string(&Vector2::new(1.0, 2.0)).unwrap(),
        "[1.0,2.0]"
    );
    assert_eq!(
        serde_json::to_string(&Vector3::new(1.0, 2.0, 3.0)).unwrap(),
        "[1.0,2.0,3.0]"
    );

    let color: Vector4 = serde_json::from_str("[0.5,0.25,0.0,1.0]").unwrap();
    assert_eq!(color, Vector4::from_rgba(0.5, 0.25, 0.0, 1.0));
}

#[test]
fn matrix_serializes_as_list_of_columns() {
    let json = serde_json::to_string(&Matrix4::identity()).unwrap();
    assert_eq!(
        json,
        "[[1.0,0.0,0.0,0.0],[0.0,1.0,0.0,0.0],[0.0,0.0,1.0,0.0],[0.0,0.0,0.0,1.0]]"
    );

    let parsed: Matrix4 = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, Matrix4::identity());
}

#[test]
fn angle_units_serialize_as_numbers() {
    assert_eq!(serde_json::to_string(&Degrees(90.0)).unwrap(), "90.0");
    let radians: Radians = serde_json::from_str("0.5").unwrap();
    assert_eq!(radians, Radians(0.5));
}

#[test]
fn deserializing_wrong_component_count_fails() {
    assert!(serde_json::from_str::<Vector3>("[1.0,2.0]").is_err());
}
