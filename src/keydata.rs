//! Keyframe values
//!
//! Animation curves store either positions, scales or rotations. `KeyData`
//! holds any of them so a format layer can keep a single key list.

use crate::math::{Quaternion, Vector2, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum KeyData {
    Vector2(Vector2),
    Vector3(Vector3),
    Quaternion(Quaternion),
}

impl KeyData {
    pub fn as_vector2(&self) -> Option<Vector2> {
        match self {
            KeyData::Vector2(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vector3(&self) -> Option<Vector3> {
        match self {
            KeyData::Vector3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_quaternion(&self) -> Option<Quaternion> {
        match self {
            KeyData::Quaternion(q) => Some(*q),
            _ => None,
        }
    }
}

impl From<Vector2> for KeyData {
    fn from(v: Vector2) -> Self {
        KeyData::Vector2(v)
    }
}

impl From<Vector3> for KeyData {
    fn from(v: Vector3) -> Self {
        KeyData::Vector3(v)
    }
}

impl From<Quaternion> for KeyData {
    fn from(q: Quaternion) -> Self {
        KeyData::Quaternion(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mismatched_kinds_are_unequal() {
        let v2: KeyData = Vector2::new(0.0, 0.0).into();
        let v3: KeyData = Vector3::new(0.0, 0.0, 0.0).into();
        let q: KeyData = Quaternion::new(0.0, 0.0, 0.0, 0.0).into();
        assert_ne!(v2, v3);
        assert_ne!(v3, q);
        assert_ne!(v2, q);
        assert_eq!(v3, KeyData::Vector3(Vector3::ZERO));
    }

    #[test]
    fn test_accessors() {
        let key = KeyData::from(Quaternion::IDENTITY);
        assert_eq!(key.as_quaternion(), Some(Quaternion::IDENTITY));
        assert_eq!(key.as_vector3(), None);
        assert_eq!(key.as_vector2(), None);
    }

    #[test]
    fn test_json() {
        let keys = vec![
            KeyData::from(Vector3::new(1.0, 2.0, 3.0)),
            KeyData::from(Quaternion::new(0.0, 0.5, 0.0, 0.5)),
        ];
        let json = serde_json::to_value(&keys).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"type": "vector3", "value": {"x": 1.0, "y": 2.0, "z": 3.0}},
                {"type": "quaternion", "value": {"x": 0.0, "y": 0.5, "z": 0.0, "w": 0.5}},
            ])
        );
        let read: Vec<KeyData> = serde_json::from_value(json).unwrap();
        assert_eq!(keys, read);
    }
}
