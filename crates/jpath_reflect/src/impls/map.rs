use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Reflect;
use crate::info::Type;
use crate::ops::Map;

// -----------------------------------------------------------------------------
// BTreeMap

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Ord,
    V: Reflect,
{
    crate::reflection::impl_reflect_cast_fn!(Map);

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        crate::impls::map_partial_eq(self, value)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::map_debug(self, f)
    }
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Reflect + Ord,
    V: Reflect,
{
    #[inline]
    fn key_type(&self) -> Type {
        Type::of::<K>()
    }

    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        key.downcast_ref::<K>()
            .and_then(|key| Self::get(self, key))
            .map(Reflect::as_reflect)
    }

    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect> {
        key.downcast_ref::<K>()
            .and_then(move |key| Self::get_mut(self, key))
            .map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(Self::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }
}

// -----------------------------------------------------------------------------
// Hash maps

macro_rules! impl_reflect_for_hashmap {
    ($ty:path) => {
        impl<K, V, S> $crate::Reflect for $ty
        where
            K: $crate::Reflect + Eq + ::core::hash::Hash,
            V: $crate::Reflect,
            S: ::core::hash::BuildHasher + Send + Sync + 'static,
        {
            $crate::reflection::impl_reflect_cast_fn!(Map);

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
                $crate::impls::map_partial_eq(self, value)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::map_debug(self, f)
            }
        }

        impl<K, V, S> $crate::ops::Map for $ty
        where
            K: $crate::Reflect + Eq + ::core::hash::Hash,
            V: $crate::Reflect,
            S: ::core::hash::BuildHasher + Send + Sync + 'static,
        {
            #[inline]
            fn key_type(&self) -> $crate::info::Type {
                $crate::info::Type::of::<K>()
            }

            fn get(&self, key: &dyn $crate::Reflect) -> Option<&dyn $crate::Reflect> {
                key.downcast_ref::<K>()
                    .and_then(|key| Self::get(self, key))
                    .map($crate::Reflect::as_reflect)
            }

            fn get_mut(&mut self, key: &dyn $crate::Reflect) -> Option<&mut dyn $crate::Reflect> {
                key.downcast_ref::<K>()
                    .and_then(move |key| Self::get_mut(self, key))
                    .map($crate::Reflect::as_reflect_mut)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> ::alloc::boxed::Box<dyn Iterator<Item = (&dyn $crate::Reflect, &dyn $crate::Reflect)> + '_> {
                ::alloc::boxed::Box::new(Self::iter(self).map(|(k, v)| (k as &dyn $crate::Reflect, v as &dyn $crate::Reflect)))
            }
        }
    };
}

impl_reflect_for_hashmap!(hashbrown::HashMap<K, V, S>);

#[cfg(feature = "std")]
impl_reflect_for_hashmap!(std::collections::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::Map;

    #[test]
    fn btree_map_lookup_by_key_type() {
        let mut map = BTreeMap::from([(String::from("cats"), String::from("swim"))]);
        assert_eq!(map.reflect_kind(), ReflectKind::Map);

        let dyn_map: &mut dyn Map = &mut map;
        assert!(dyn_map.key_type().is::<String>());
        assert!(dyn_map.get(&String::from("dogs")).is_none());
        assert!(dyn_map.get(&"cats").is_none());

        let value = dyn_map.get_mut(&String::from("cats")).unwrap();
        value.set(Box::new(String::from("nap"))).unwrap();
        assert_eq!(map["cats"], "nap");
    }

    #[cfg(feature = "std")]
    #[test]
    fn hash_maps() {
        use std::collections::HashMap;
        use std::hash::RandomState;

        let mut brown = hashbrown::HashMap::with_hasher(RandomState::new());
        brown.insert(1_u32, 'a');
        let dyn_map: &dyn Map = &brown;
        assert!(dyn_map.key_type().is::<u32>());
        assert_eq!(dyn_map.get(&1_u32).unwrap().downcast_ref::<char>(), Some(&'a'));

        let map = HashMap::from([(String::from("a"), 1_u8)]);
        let dyn_map: &dyn Map = &map;
        assert_eq!(dyn_map.len(), 1);
        assert_eq!(dyn_map.iter().count(), 1);
        assert_eq!(map.reflect_partial_eq(&BTreeMap::from([(String::from("a"), 1_u8)])), Some(true));
    }
}
