//! Partial-update ("PATCH") merge helper.
//!
//! An update DTO has one `Option` field per mutable column. Absent fields mean
//! "no change"; present fields overwrite the loaded entity. Implement
//! [`ApplyPatch`] with [`impl_apply_patch!`](crate::impl_apply_patch) by
//! listing the mutable fields once:
//!
//! ```
//! use camsvc_core::impl_apply_patch;
//! use camsvc_core::patch::ApplyPatch;
//!
//! struct Location { id: i64, name: String, description: String }
//! struct UpdateLocation { name: Option<String>, description: Option<String> }
//!
//! impl_apply_patch!(UpdateLocation => Location { name, description });
//!
//! let mut loc = Location { id: 1, name: "A".into(), description: "old".into() };
//! UpdateLocation { name: None, description: Some("new".into()) }.apply_to(&mut loc);
//! assert_eq!(loc.name, "A");
//! assert_eq!(loc.description, "new");
//! ```
//!
//! Nullable columns use `Option<Option<T>>` in the DTO together with
//! [`nullable`] so that an explicit JSON `null` clears the column while an
//! absent key leaves it alone.

use serde::{Deserialize, Deserializer};

/// Merge a partial update onto a full entity.
pub trait ApplyPatch<T> {
    fn apply_to(self, target: &mut T);
}

/// Implement [`ApplyPatch`] for a DTO over a declarative list of fields.
///
/// Every listed field must be `Option<F>` on the DTO and `F` on the target.
#[macro_export]
macro_rules! impl_apply_patch {
    ($patch:ty => $target:ty { $($field:ident),* $(,)? }) => {
        impl $crate::patch::ApplyPatch<$target> for $patch {
            fn apply_to(self, target: &mut $target) {
                $(
                    if let Some(value) = self.$field {
                        target.$field = value;
                    }
                )*
            }
        }
    };
}

/// Deserialize a present key (including `null`) as `Some(..)`.
///
/// Use with `#[serde(default, deserialize_with = "...")]` on an
/// `Option<Option<T>>` field.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Camera {
        id: i64,
        name: String,
        location_id: Option<i64>,
        counter: i32,
    }

    #[derive(Debug, Default, Deserialize)]
    struct UpdateCamera {
        name: Option<String>,
        #[serde(default, deserialize_with = "nullable")]
        location_id: Option<Option<i64>>,
        counter: Option<i32>,
    }

    crate::impl_apply_patch!(UpdateCamera => Camera { name, location_id, counter });

    fn camera() -> Camera {
        Camera {
            id: 7,
            name: "gate".into(),
            location_id: Some(3),
            counter: 10,
        }
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut cam = camera();
        UpdateCamera::default().apply_to(&mut cam);
        assert_eq!(cam, camera());
    }

    #[test]
    fn only_present_fields_change() {
        let mut cam = camera();
        let patch: UpdateCamera = serde_json::from_str(r#"{"counter": 11}"#).unwrap();
        patch.apply_to(&mut cam);
        assert_eq!(cam.counter, 11);
        assert_eq!(cam.name, "gate");
        assert_eq!(cam.location_id, Some(3));
        assert_eq!(cam.id, 7);
    }

    #[test]
    fn explicit_null_clears_nullable_field() {
        let mut cam = camera();
        let patch: UpdateCamera = serde_json::from_str(r#"{"location_id": null}"#).unwrap();
        patch.apply_to(&mut cam);
        assert_eq!(cam.location_id, None);
    }

    #[test]
    fn absent_nullable_field_is_untouched() {
        let patch: UpdateCamera = serde_json::from_str(r#"{"name": "dock"}"#).unwrap();
        assert_eq!(patch.location_id, None);

        let mut cam = camera();
        patch.apply_to(&mut cam);
        assert_eq!(cam.name, "dock");
        assert_eq!(cam.location_id, Some(3));
    }
}
