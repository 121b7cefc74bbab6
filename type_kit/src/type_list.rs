use std::{any::type_name, fmt::Debug, marker::PhantomData};


pub trait Marker {}

pub struct Here {}

impl Marker for Here {}

pub struct There<T> {
    _phantom: PhantomData<T>,
}

impl<T> Marker for There<T> {}

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil {}

impl Debug for Nil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Nil")
    }
}

impl Nil {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type-level list node. Signatures are named with `Cons` and never carry
/// values, so the struct only holds a marker for its head and tail.
pub struct Cons<H, T> {
    _phantom: PhantomData<fn() -> (H, T)>,
}

impl<H, T: Debug + Default> Debug for Cons<H, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cons<{}, {:?}>", type_name::<H>(), T::default())
    }
}

impl<H, T> Clone for Cons<H, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T> Copy for Cons<H, T> {}

impl<H, T> Default for Cons<H, T> {
    #[inline]
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<H, T> PartialEq for Cons<H, T> {
    #[inline]
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<H, T> Eq for Cons<H, T> {}

pub trait TypeList: Sized {
    const LEN: usize;
    type Item;
    type Next: TypeList;

    #[inline]
    fn len(&self) -> usize {
        Self::LEN
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

impl TypeList for Nil {
    const LEN: usize = 0;
    type Item = ();
    type Next = Self;
}

impl<T, N: TypeList> TypeList for Cons<T, N> {
    const LEN: usize = N::LEN + 1;
    type Item = T;
    type Next = N;
}

#[cfg(test)]
mod test_macro {
    use crate::{type_list, Cons, Nil};

    trait AssertEqualTypes<A, B> {}

    impl<T> AssertEqualTypes<T, T> for () {}

    #[test]
    fn test_type_list_macro_generates_correct_type() {
        type GeneratedList = type_list![u8, u16, u32];
        type ExpectedList = Cons<u8, Cons<u16, Cons<u32, Nil>>>;

        // Compile-time assertion to check if the types are the same
        let _: &dyn AssertEqualTypes<GeneratedList, ExpectedList> = &();
    }

    #[test]
    fn test_type_list_macro_accepts_trailing_comma() {
        type GeneratedList = type_list![String, char,];
        type ExpectedList = Cons<String, Cons<char, Nil>>;

        let _: &dyn AssertEqualTypes<GeneratedList, ExpectedList> = &();
    }
}

#[macro_export]
macro_rules! type_list {
    [] => {
        $crate::Nil
    };
    [$head:ty $(, $tail:ty)* $(,)?] => {
        $crate::Cons<$head, $crate::type_list![$($tail),*]>
    };
}
