//! Table-driven overlay
//!
//! Configuration structs are declared through [`overlay_schema!`], which
//! generates the struct, its serde mapping and its [`Overlay`] impl from one
//! field table. A field cannot be declared without taking part in the merge.
//!
//! Merge semantics:
//! - Scalars: an explicit source value replaces the target value
//! - Nested: an explicit source sub-entity is allocated on the target if
//!   missing, then merged field by field
//! - Unset source fields leave the target untouched
//! - Excluded fields are never read or written

/// Layered, non-null-wins merge of optional fields.
pub trait Overlay {
    /// Copy every explicit field of `source` onto `self`.
    fn set_from(&mut self, source: &Self);

    /// Append the dotted document path of every explicit leaf field.
    fn explicit_paths(&self, prefix: &str, out: &mut Vec<String>);

    /// Append the dotted document path of every mergeable leaf field.
    fn field_paths(prefix: &str, out: &mut Vec<String>)
    where
        Self: Sized;
}

pub(crate) fn overlay_value<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if let Some(value) = source {
        *target = Some(value.clone());
    }
}

pub(crate) fn overlay_nested<T: Overlay + Default>(target: &mut Option<T>, source: &Option<T>) {
    if let Some(nested) = source {
        target.get_or_insert_with(T::default).set_from(nested);
    }
}

/// Declare a configuration struct whose fields are all optional.
///
/// Rows are `"DocumentKey" => field: Type,`. Scalar rows come first, then an
/// optional `nested { .. }` group of [`Overlay`] sub-entities and an optional
/// `excluded { .. }` group that is decoded but never merged.
macro_rules! overlay_schema {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $key:literal => $field:ident: $ty:ty, )*
        }
        $( nested {
            $( $(#[$nmeta:meta])* $nkey:literal => $nfield:ident: $nty:ty, )*
        } )?
        $( excluded {
            $( $(#[$xmeta:meta])* $xkey:literal => $xfield:ident: $xty:ty, )*
        } )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
            $($(
                $(#[$nmeta])*
                #[serde(rename = $nkey, default, skip_serializing_if = "Option::is_none")]
                pub $nfield: Option<$nty>,
            )*)?
            $($(
                $(#[$xmeta])*
                #[serde(rename = $xkey, default, skip_serializing_if = "Option::is_none")]
                pub $xfield: Option<$xty>,
            )*)?
        }

        impl $name {
            /// Document keys of the scalar fields, in declaration order.
            pub const SCALARS: &'static [&'static str] = &[$($key),*];

            /// Document keys of the nested sub-entities.
            pub const NESTED: &'static [&'static str] = &[$($($nkey),*)?];

            /// Document keys that are decoded but never merged.
            pub const EXCLUDED: &'static [&'static str] = &[$($($xkey),*)?];
        }

        impl $crate::config::schema::Overlay for $name {
            fn set_from(&mut self, source: &Self) {
                $( $crate::config::schema::overlay_value(&mut self.$field, &source.$field); )*
                $($( $crate::config::schema::overlay_nested(&mut self.$nfield, &source.$nfield); )*)?
            }

            fn explicit_paths(&self, prefix: &str, out: &mut Vec<String>) {
                $(
                    if self.$field.is_some() {
                        out.push(format!("{}{}", prefix, $key));
                    }
                )*
                $($(
                    if let Some(nested) = &self.$nfield {
                        $crate::config::schema::Overlay::explicit_paths(
                            nested,
                            &format!("{}{}.", prefix, $nkey),
                            out,
                        );
                    }
                )*)?
            }

            fn field_paths(prefix: &str, out: &mut Vec<String>) {
                $( out.push(format!("{}{}", prefix, $key)); )*
                $($(
                    <$nty as $crate::config::schema::Overlay>::field_paths(
                        &format!("{}{}.", prefix, $nkey),
                        out,
                    );
                )*)?
            }
        }
    };
}

pub(crate) use overlay_schema;

#[cfg(test)]
mod tests {
    use super::*;

    overlay_schema! {
        /// Inner test entity.
        pub struct Inner {
            "Depth" => depth: u32,
            "Enabled" => enabled: bool,
        }
    }

    overlay_schema! {
        /// Outer test entity.
        pub struct Outer {
            "Count" => count: u64,
            "Label" => label: String,
        }
        nested {
            "Inner" => inner: Inner,
        }
        excluded {
            "Extra" => extra: Vec<u32>,
        }
    }

    #[test]
    fn test_scalar_override() {
        let mut target = Outer {
            count: Some(1),
            ..Default::default()
        };
        let source = Outer {
            count: Some(2),
            ..Default::default()
        };
        target.set_from(&source);
        assert_eq!(target.count, Some(2));
    }

    #[test]
    fn test_unset_source_keeps_target() {
        let mut target = Outer {
            count: Some(7),
            label: Some("kept".to_string()),
            ..Default::default()
        };
        target.set_from(&Outer::default());
        assert_eq!(target.count, Some(7));
        assert_eq!(target.label.as_deref(), Some("kept"));
    }

    #[test]
    fn test_explicit_zero_wins() {
        let mut target = Outer {
            count: Some(9),
            inner: Some(Inner {
                enabled: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let source = Outer {
            count: Some(0),
            inner: Some(Inner {
                enabled: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };
        target.set_from(&source);
        assert_eq!(target.count, Some(0));
        assert_eq!(target.inner.unwrap().enabled, Some(false));
    }

    #[test]
    fn test_nested_allocated_then_merged() {
        let mut target = Outer::default();
        let source = Outer {
            inner: Some(Inner {
                depth: Some(100),
                ..Default::default()
            }),
            ..Default::default()
        };
        target.set_from(&source);
        let inner = target.inner.unwrap();
        assert_eq!(inner.depth, Some(100));
        assert_eq!(inner.enabled, None);
    }

    #[test]
    fn test_nested_field_merge_preserves_siblings() {
        let mut target = Outer {
            inner: Some(Inner {
                depth: Some(10),
                enabled: Some(true),
            }),
            ..Default::default()
        };
        let source = Outer {
            inner: Some(Inner {
                depth: Some(20),
                enabled: None,
            }),
            ..Default::default()
        };
        target.set_from(&source);
        assert_eq!(
            target.inner,
            Some(Inner {
                depth: Some(20),
                enabled: Some(true),
            })
        );
    }

    #[test]
    fn test_unset_nested_leaves_target_nested() {
        let mut target = Outer {
            inner: Some(Inner {
                depth: Some(5),
                ..Default::default()
            }),
            ..Default::default()
        };
        target.set_from(&Outer {
            count: Some(1),
            ..Default::default()
        });
        assert_eq!(target.inner.unwrap().depth, Some(5));

        let mut empty = Outer::default();
        empty.set_from(&Outer::default());
        assert!(empty.inner.is_none());
    }

    #[test]
    fn test_excluded_never_merged() {
        let mut target = Outer {
            extra: Some(vec![1]),
            ..Default::default()
        };
        let source = Outer {
            extra: Some(vec![2, 3]),
            ..Default::default()
        };
        target.set_from(&source);
        assert_eq!(target.extra, Some(vec![1]));

        let mut empty = Outer::default();
        empty.set_from(&source);
        assert!(empty.extra.is_none());
    }

    #[test]
    fn test_key_tables() {
        assert_eq!(Outer::SCALARS, &["Count", "Label"]);
        assert_eq!(Outer::NESTED, &["Inner"]);
        assert_eq!(Outer::EXCLUDED, &["Extra"]);
        assert!(Inner::NESTED.is_empty());
        assert!(Inner::EXCLUDED.is_empty());
    }

    #[test]
    fn test_paths() {
        let mut all = Vec::new();
        Outer::field_paths("", &mut all);
        assert_eq!(all, vec!["Count", "Label", "Inner.Depth", "Inner.Enabled"]);

        let value = Outer {
            label: Some("x".to_string()),
            inner: Some(Inner {
                enabled: Some(false),
                ..Default::default()
            }),
            extra: Some(vec![]),
            ..Default::default()
        };
        let mut explicit = Vec::new();
        value.explicit_paths("", &mut explicit);
        assert_eq!(explicit, vec!["Label", "Inner.Enabled"]);
    }

    #[test]
    fn test_serde_mapping() {
        let value: Outer = toml::from_str("Count = 3\n[Inner]\nDepth = 4\n").unwrap();
        assert_eq!(value.count, Some(3));
        assert_eq!(value.inner.as_ref().and_then(|i| i.depth), Some(4));
        assert!(toml::from_str::<Outer>("count = 3").is_err());
        assert!(toml::from_str::<Outer>("[Inner]\nWidth = 1").is_err());

        let rendered = toml::to_string(&value).unwrap();
        assert!(rendered.contains("Count = 3"));
        assert!(!rendered.contains("Label"));
    }
}
