use std::{
    any::type_name,
    fmt::{self, Display, Formatter},
};

use crate::{Cons, Here, Marker, Nil, There, TypeList};


/// Variant of the empty signature. It has no values, so code matching on it
/// is statically unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CNil {}

/// Tagged union over a type list: `Head` holds the first declared type,
/// `Tail` one of the remaining ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coprod<H, T> {
    Head(H),
    Tail(T),
}

pub trait Tagged {
    /// Position of the held alternative within the declared signature.
    fn tag(&self) -> usize;
    fn type_name(&self) -> &'static str;
}

impl Tagged for CNil {
    #[inline]
    fn tag(&self) -> usize {
        match *self {}
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        match *self {}
    }
}

impl<H, T: Tagged> Tagged for Coprod<H, T> {
    #[inline]
    fn tag(&self) -> usize {
        match self {
            Coprod::Head(_) => 0,
            Coprod::Tail(tail) => tail.tag() + 1,
        }
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        match self {
            Coprod::Head(_) => type_name::<H>(),
            Coprod::Tail(tail) => tail.type_name(),
        }
    }
}

#[diagnostic::on_unimplemented(
    message = "`{T}` is not declared in the signature",
    label = "`{T}` is not one of the permitted types",
    note = "a target's declared type set must be a superset of the source's"
)]
pub trait Inject<T, M: Marker>: Sized {
    fn inject(value: T) -> Self;
    fn get(&self) -> Option<&T>;
    fn get_mut(&mut self) -> Option<&mut T>;
    fn extract(self) -> Result<T, Self>;
}

impl<H, T> Inject<H, Here> for Coprod<H, T> {
    #[inline]
    fn inject(value: H) -> Self {
        Coprod::Head(value)
    }

    #[inline]
    fn get(&self) -> Option<&H> {
        match self {
            Coprod::Head(head) => Some(head),
            Coprod::Tail(_) => None,
        }
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut H> {
        match self {
            Coprod::Head(head) => Some(head),
            Coprod::Tail(_) => None,
        }
    }

    #[inline]
    fn extract(self) -> Result<H, Self> {
        match self {
            Coprod::Head(head) => Ok(head),
            tail => Err(tail),
        }
    }
}

impl<O, S, M: Marker, T: Inject<S, M>> Inject<S, There<M>> for Coprod<O, T> {
    #[inline]
    fn inject(value: S) -> Self {
        Coprod::Tail(<T as Inject<S, M>>::inject(value))
    }

    #[inline]
    fn get(&self) -> Option<&S> {
        match self {
            Coprod::Head(_) => None,
            Coprod::Tail(tail) => <T as Inject<S, M>>::get(tail),
        }
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut S> {
        match self {
            Coprod::Head(_) => None,
            Coprod::Tail(tail) => <T as Inject<S, M>>::get_mut(tail),
        }
    }

    #[inline]
    fn extract(self) -> Result<S, Self> {
        match self {
            Coprod::Head(head) => Err(Coprod::Head(head)),
            Coprod::Tail(tail) => <T as Inject<S, M>>::extract(tail).map_err(Coprod::Tail),
        }
    }
}

impl<H, T> Coprod<H, T> {
    #[inline]
    pub fn inject<S, M: Marker>(value: S) -> Self
    where
        Self: Inject<S, M>,
    {
        <Self as Inject<S, M>>::inject(value)
    }

    #[inline]
    pub fn get<S, M: Marker>(&self) -> Option<&S>
    where
        Self: Inject<S, M>,
    {
        <Self as Inject<S, M>>::get(self)
    }

    #[inline]
    pub fn get_mut<S, M: Marker>(&mut self) -> Option<&mut S>
    where
        Self: Inject<S, M>,
    {
        <Self as Inject<S, M>>::get_mut(self)
    }

    #[inline]
    pub fn extract<S, M: Marker>(self) -> Result<S, Self>
    where
        Self: Inject<S, M>,
    {
        <Self as Inject<S, M>>::extract(self)
    }
}

impl Display for CNil {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl<H: Display, T: Display> Display for Coprod<H, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Coprod::Head(head) => Display::fmt(head, f),
            Coprod::Tail(tail) => Display::fmt(tail, f),
        }
    }
}

/// A type list whose values are stored as a tagged union of its items.
pub trait Signature: TypeList {
    type Variant: Tagged;
}

impl Signature for Nil {
    type Variant = CNil;
}

impl<H, T: Signature> Signature for Cons<H, T> {
    type Variant = Coprod<H, T::Variant>;
}

/// Holds when every type declared in `Self` is also declared in `S`.
///
/// `I` is the list of positions of `Self`'s types inside `S` and is always
/// left for the compiler to infer. When some type of `Self` is missing from
/// `S` no such list exists and the bound is not satisfied:
///
/// ```
/// use type_kit::{type_list, Signature, Subset};
///
/// fn embed<B: Subset<A, I>, A: Signature, I>(variant: B::Variant) -> A::Variant {
///     B::embed(variant)
/// }
///
/// type Small = type_list![i32, f32];
/// type Large = type_list![f32, String, i32];
/// type SmallVariant = <Small as Signature>::Variant;
///
/// let large = embed::<Small, Large, _>(SmallVariant::inject(3i32));
/// assert_eq!(large.get::<i32, _>(), Some(&3));
/// ```
///
/// ```compile_fail,E0277
/// use type_kit::{type_list, Signature, Subset};
///
/// fn embed<B: Subset<A, I>, A: Signature, I>(variant: B::Variant) -> A::Variant {
///     B::embed(variant)
/// }
///
/// type Small = type_list![i32, f32];
/// type Large = type_list![f32, String, i32];
/// type LargeVariant = <Large as Signature>::Variant;
///
/// let _ = embed::<Large, Small, _>(LargeVariant::inject(3i32));
/// ```
#[diagnostic::on_unimplemented(
    message = "the types declared in `{Self}` are not a subset of `{S}`",
    label = "`{S}` does not declare every type of `{Self}`",
    note = "a target's declared type set must be a superset of the source's"
)]
pub trait Subset<S: Signature, I>: Signature {
    fn embed(variant: Self::Variant) -> S::Variant;
}

impl<S: Signature> Subset<S, Nil> for Nil {
    #[inline]
    fn embed(variant: Self::Variant) -> S::Variant {
        match variant {}
    }
}

impl<H, T, S, M, I> Subset<S, Cons<M, I>> for Cons<H, T>
where
    S: Signature,
    S::Variant: Inject<H, M>,
    M: Marker,
    T: Subset<S, I>,
{
    #[inline]
    fn embed(variant: Self::Variant) -> S::Variant {
        match variant {
            Coprod::Head(head) => <S::Variant as Inject<H, M>>::inject(head),
            Coprod::Tail(tail) => <T as Subset<S, I>>::embed(tail),
        }
    }
}

/// Compares a value of `Self`'s union against a value of `S`'s union without
/// converting either. Values holding different concrete types are never equal.
#[diagnostic::on_unimplemented(
    message = "lists over `{Self}` cannot be compared against lists over `{S}`",
    label = "`{S}` does not declare every type of `{Self}`, or one of them lacks `PartialEq`",
    note = "a target's declared type set must be a superset of the source's"
)]
pub trait SubsetEq<S: Signature, I>: Subset<S, I> {
    fn eq_embedded(variant: &Self::Variant, target: &S::Variant) -> bool;
}

impl<S: Signature> SubsetEq<S, Nil> for Nil {
    #[inline]
    fn eq_embedded(variant: &Self::Variant, _: &S::Variant) -> bool {
        match *variant {}
    }
}

impl<H, T, S, M, I> SubsetEq<S, Cons<M, I>> for Cons<H, T>
where
    H: PartialEq,
    S: Signature,
    S::Variant: Inject<H, M>,
    M: Marker,
    T: SubsetEq<S, I>,
{
    #[inline]
    fn eq_embedded(variant: &Self::Variant, target: &S::Variant) -> bool {
        match variant {
            Coprod::Head(head) => {
                <S::Variant as Inject<H, M>>::get(target).is_some_and(|value| value == head)
            }
            Coprod::Tail(tail) => <T as SubsetEq<S, I>>::eq_embedded(tail, target),
        }
    }
}
