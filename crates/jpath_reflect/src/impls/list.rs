use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::ops::List;

/// `$via` is the type whose inherent `get`, `get_mut` and `len` are used.
macro_rules! impl_reflect_for_list {
    ($ty:ty, $via:ty) => {
        impl<T: Reflect> Reflect for $ty {
            $crate::reflection::impl_reflect_cast_fn!(List);

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
                $crate::impls::list_partial_eq(self, value)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::list_debug(self, f)
            }
        }

        impl<T: Reflect> List for $ty {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                <$via>::get(self, index).map(Reflect::as_reflect)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                <$via>::get_mut(self, index).map(Reflect::as_reflect_mut)
            }

            #[inline]
            fn len(&self) -> usize {
                <$via>::len(self)
            }
        }
    };
}

impl_reflect_for_list!(Vec<T>, [T]);
impl_reflect_for_list!(VecDeque<T>, VecDeque<T>);

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!(List);

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        crate::impls::list_partial_eq(self, value)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::list_debug(self, f)
    }
}

impl<T: Reflect, const N: usize> List for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;

    use crate::ops::List;

    #[test]
    fn element_access() {
        let mut deque = VecDeque::from([1_u8, 2, 3]);
        let list: &mut dyn List = &mut deque;

        assert_eq!(list.len(), 3);
        assert!(list.get(3).is_none());

        *list.get_mut(0).unwrap().downcast_mut::<u8>().unwrap() = 10;
        assert_eq!(deque[0], 10);
    }

    #[test]
    fn arrays_and_vecs_compare_as_lists() {
        use crate::Reflect;

        let array = [1_i32, 2, 3];
        let list: &dyn List = &array;
        assert_eq!(list.iter().count(), 3);
        assert_eq!(array.reflect_partial_eq(&vec![1_i32, 2, 3]), Some(true));
    }
}
