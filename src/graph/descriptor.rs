//! Edge descriptors accepted by bulk insertion
//!
//! A descriptor is `(u, v)`, `(u, v, attrs-or-key)` or `(u, v, key, attrs)`.
//! The third element of a 3-element descriptor is interpreted as attributes
//! when it is a map and as an edge key otherwise. A null third element means
//! "no attributes, allocate a key"; a null key in a 4-element descriptor
//! also allocates.

use super::error::{GraphError, GraphResult};
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeKey, NodeKey};

#[derive(Debug, Clone, PartialEq)]
pub enum EdgeDescriptor<N> {
    Pair(N, N),
    Triple(N, N, PropertyValue),
    Quad(N, N, Option<EdgeKey>, PropertyMap),
}

impl<N: NodeKey> EdgeDescriptor<N> {
    /// Build a descriptor from endpoints and loosely typed trailing values
    ///
    /// Used by collaborators that assemble descriptors from dynamic data.
    /// More than two trailing values is a malformed tuple, as is a 4-element
    /// descriptor whose key or attributes have the wrong shape.
    pub fn from_parts(u: N, v: N, mut rest: Vec<PropertyValue>) -> GraphResult<Self> {
        match rest.len() {
            0 => Ok(EdgeDescriptor::Pair(u, v)),
            1 => {
                let third = rest.pop().unwrap_or(PropertyValue::Null);
                Ok(EdgeDescriptor::Triple(u, v, third))
            }
            2 => {
                let attrs = rest.pop().unwrap_or(PropertyValue::Null);
                let key = rest.pop().unwrap_or(PropertyValue::Null);
                let description = format!("({:?}, {:?}, {}, {})", u, v, key, attrs);
                let key = match key {
                    PropertyValue::Null => None,
                    other => Some(
                        key_from_value(&other)
                            .ok_or_else(|| GraphError::MalformedEdgeTuple(description.clone()))?,
                    ),
                };
                let attrs = match attrs {
                    PropertyValue::Map(map) => map,
                    PropertyValue::Null => PropertyMap::new(),
                    _ => return Err(GraphError::MalformedEdgeTuple(description)),
                };
                Ok(EdgeDescriptor::Quad(u, v, key, attrs))
            }
            n => Err(GraphError::MalformedEdgeTuple(format!(
                "({:?}, {:?}, ...{} more)",
                u, v, n
            ))),
        }
    }

    pub fn endpoints(&self) -> (&N, &N) {
        match self {
            EdgeDescriptor::Pair(u, v)
            | EdgeDescriptor::Triple(u, v, _)
            | EdgeDescriptor::Quad(u, v, _, _) => (u, v),
        }
    }

    /// Resolve for a multigraph: attributes first, key as the fallback
    pub(crate) fn into_keyed(self) -> GraphResult<(N, N, Option<EdgeKey>, PropertyMap)> {
        match self {
            EdgeDescriptor::Pair(u, v) => Ok((u, v, None, PropertyMap::new())),
            EdgeDescriptor::Triple(u, v, third) => match third.into_map() {
                Ok(attrs) => Ok((u, v, None, attrs)),
                Err(PropertyValue::Null) => Ok((u, v, None, PropertyMap::new())),
                Err(other) => match key_from_value(&other) {
                    Some(key) => Ok((u, v, Some(key), PropertyMap::new())),
                    None => Err(GraphError::MalformedEdgeTuple(format!(
                        "({:?}, {:?}, {})",
                        u, v, other
                    ))),
                },
            },
            EdgeDescriptor::Quad(u, v, key, attrs) => Ok((u, v, key, attrs)),
        }
    }

    /// Resolve for a simple graph, which has no edge keys
    pub(crate) fn into_simple(self) -> GraphResult<(N, N, PropertyMap)> {
        match self {
            EdgeDescriptor::Pair(u, v) => Ok((u, v, PropertyMap::new())),
            EdgeDescriptor::Triple(u, v, third) => match third.into_map() {
                Ok(attrs) => Ok((u, v, attrs)),
                Err(other) => Err(GraphError::MalformedEdgeTuple(format!(
                    "({:?}, {:?}, {})",
                    u, v, other
                ))),
            },
            EdgeDescriptor::Quad(u, v, None, attrs) => Ok((u, v, attrs)),
            EdgeDescriptor::Quad(u, v, Some(key), _) => Err(GraphError::MalformedEdgeTuple(
                format!("({:?}, {:?}, {}, {{..}}) given to a graph without edge keys", u, v, key),
            )),
        }
    }
}

/// Only non-negative integers can be edge keys
fn key_from_value(value: &PropertyValue) -> Option<EdgeKey> {
    match value {
        PropertyValue::Integer(i) if *i >= 0 => Some(EdgeKey::new(*i as u64)),
        _ => None,
    }
}

impl<N> From<(N, N)> for EdgeDescriptor<N> {
    fn from((u, v): (N, N)) -> Self {
        EdgeDescriptor::Pair(u, v)
    }
}

impl<N> From<(N, N, PropertyMap)> for EdgeDescriptor<N> {
    fn from((u, v, attrs): (N, N, PropertyMap)) -> Self {
        EdgeDescriptor::Triple(u, v, PropertyValue::Map(attrs))
    }
}

impl<N> From<(N, N, PropertyValue)> for EdgeDescriptor<N> {
    fn from((u, v, third): (N, N, PropertyValue)) -> Self {
        EdgeDescriptor::Triple(u, v, third)
    }
}

impl<N> From<(N, N, EdgeKey)> for EdgeDescriptor<N> {
    fn from((u, v, key): (N, N, EdgeKey)) -> Self {
        EdgeDescriptor::Quad(u, v, Some(key), PropertyMap::new())
    }
}

impl<N> From<(N, N, EdgeKey, PropertyMap)> for EdgeDescriptor<N> {
    fn from((u, v, key, attrs): (N, N, EdgeKey, PropertyMap)) -> Self {
        EdgeDescriptor::Quad(u, v, Some(key), attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    #[test]
    fn test_third_element_map_is_attributes() {
        let d: EdgeDescriptor<u32> = (1, 2, props! { "w" => 5i64 }).into();
        let (u, v, key, attrs) = d.into_keyed().unwrap();
        assert_eq!((u, v, key), (1, 2, None));
        assert_eq!(attrs["w"].as_integer(), Some(5));
    }

    #[test]
    fn test_third_element_integer_is_key() {
        let d: EdgeDescriptor<u32> = (1, 2, EdgeKey::new(7)).into();
        let (_, _, key, attrs) = d.into_keyed().unwrap();
        assert_eq!(key, Some(EdgeKey::new(7)));
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_third_element_null_allocates_key() {
        let d: EdgeDescriptor<u32> = (1, 2, PropertyValue::Null).into();
        assert_eq!(d.into_keyed().unwrap().2, None);
    }

    #[test]
    fn test_third_element_unusable() {
        let d: EdgeDescriptor<u32> = (1, 2, PropertyValue::from("blue")).into();
        assert!(matches!(d.into_keyed(), Err(GraphError::MalformedEdgeTuple(_))));

        let d: EdgeDescriptor<u32> = (1, 2, PropertyValue::Integer(-1)).into();
        assert!(matches!(d.into_keyed(), Err(GraphError::MalformedEdgeTuple(_))));
    }

    #[test]
    fn test_from_parts_arity() {
        assert_eq!(
            EdgeDescriptor::from_parts(1, 2, vec![]).unwrap(),
            EdgeDescriptor::Pair(1, 2)
        );
        assert!(matches!(
            EdgeDescriptor::from_parts(1, 2, vec![PropertyValue::Integer(0)]).unwrap(),
            EdgeDescriptor::Triple(1, 2, PropertyValue::Integer(0))
        ));
        assert_eq!(
            EdgeDescriptor::from_parts(
                1,
                2,
                vec![PropertyValue::Integer(4), PropertyValue::Map(props! { "w" => 1i64 })]
            )
            .unwrap(),
            EdgeDescriptor::Quad(1, 2, Some(EdgeKey::new(4)), props! { "w" => 1i64 })
        );

        let too_long = vec![PropertyValue::Null, PropertyValue::Null, PropertyValue::Null];
        assert!(matches!(
            EdgeDescriptor::from_parts(1, 2, too_long),
            Err(GraphError::MalformedEdgeTuple(_))
        ));

        let bad_key = vec![PropertyValue::from("k"), PropertyValue::Map(props! {})];
        assert!(matches!(
            EdgeDescriptor::from_parts(1, 2, bad_key),
            Err(GraphError::MalformedEdgeTuple(_))
        ));
    }

    #[test]
    fn test_null_key_in_four_elements_allocates() {
        let d = EdgeDescriptor::from_parts(
            1u32,
            2,
            vec![PropertyValue::Null, PropertyValue::Map(props! { "w" => 3i64 })],
        )
        .unwrap();
        assert_eq!(d, EdgeDescriptor::Quad(1, 2, None, props! { "w" => 3i64 }));

        let (_, _, key, attrs) = d.clone().into_keyed().unwrap();
        assert_eq!(key, None);
        assert_eq!(attrs["w"].as_integer(), Some(3));
        assert_eq!(d.into_simple().unwrap().2["w"].as_integer(), Some(3));
    }

    #[test]
    fn test_key_above_i64_range_is_kept() {
        let big = EdgeKey::new(1 << 63);
        let d: EdgeDescriptor<u32> = (3, 4, big).into();
        assert_eq!(d.into_keyed().unwrap().2, Some(big));
    }

    #[test]
    fn test_simple_resolution_rejects_keys() {
        let d: EdgeDescriptor<u32> = (1, 2, EdgeKey::new(0), props! {}).into();
        assert!(matches!(d.into_simple(), Err(GraphError::MalformedEdgeTuple(_))));

        let d: EdgeDescriptor<u32> = (1, 2, EdgeKey::new(0)).into();
        assert!(matches!(d.into_simple(), Err(GraphError::MalformedEdgeTuple(_))));

        let d: EdgeDescriptor<u32> = (1, 2).into();
        assert_eq!(d.endpoints(), (&1, &2));
        assert!(d.into_simple().unwrap().2.is_empty());
    }
}
