use std::any::type_name;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{AddAssign, Index, IndexMut};

use log::{debug, trace};
use type_kit::{Inject, Marker, Signature, Subset, SubsetEq, Tagged};

use crate::{TypedListError, TypedListResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed_list;
    use type_kit::{type_list, Coprod};

    type Mixed = type_list![String, i32, f32];
    type Wide = type_list![i32, String, f32, char];
    type Numbers = type_list![i32, f32];
    type Superset = type_list![f32, String, i32];

    fn mixed() -> TypedList<Mixed> {
        typed_list![3i32, String::from("ab"), 5i32, 3.4f32]
    }

    fn wide() -> TypedList<Wide> {
        typed_list![
            3i32,
            5i32,
            3.4f32,
            'z',
            8.2f32,
            String::from("Hello World")
        ]
    }

    fn numbers() -> TypedList<Numbers> {
        typed_list![3i32, 5i32, 3.4f32]
    }

    #[test]
    fn test_render_mixed_list() {
        assert_eq!(mixed().to_string(), "[3, ab, 5, 3.4]");
    }

    #[test]
    fn test_render_empty_list() {
        let list: TypedList<Mixed> = typed_list![];
        assert_eq!(list.to_string(), "[]");
        assert!(list.is_empty());
    }

    #[test]
    fn test_append_same_signature() {
        let mut list = mixed();
        let other = mixed();
        list.append(&other);
        assert_eq!(list.len(), 8);
        assert_eq!(list.to_string(), "[3, ab, 5, 3.4, 3, ab, 5, 3.4]");
        assert_eq!(other.len(), 4);
    }

    #[test]
    fn test_add_assign_appends() {
        let mut list = mixed();
        list += &mixed();
        assert_eq!(list.to_string(), "[3, ab, 5, 3.4, 3, ab, 5, 3.4]");
    }

    #[test]
    fn test_push_appends_at_tail() {
        let mut list = mixed();
        list.push(7i32);
        list.push(String::from("cd"));
        assert_eq!(list.len(), 6);
        assert_eq!(list.to_string(), "[3, ab, 5, 3.4, 7, cd]");
    }

    #[test]
    fn test_slice() {
        let list = wide();
        assert_eq!(list.slice(2, 5).to_string(), "[3.4, z, 8.2]");
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_slice_then_set() {
        let mut slice = wide().slice(2, 5);
        let previous = slice.set(2, 99i32).unwrap();
        assert_eq!(previous.get::<f32, _>(), Some(&8.2));
        assert_eq!(slice.to_string(), "[3.4, z, 99]");
    }

    #[test]
    fn test_slice_clamps_bounds() {
        let list = wide();
        assert_eq!(list.slice(1, 100), list.slice(1, 6));
        assert_eq!(list.slice(-4, 2), list.slice(0, 2));
        assert_eq!(list.slice(-4, 100), list);
    }

    #[test]
    fn test_slice_empty_when_lower_not_below_upper() {
        let list = wide();
        assert!(list.slice(4, 2).is_empty());
        assert!(list.slice(3, 3).is_empty());
        assert!(list.slice(10, 20).is_empty());
    }

    #[test]
    fn test_erase() {
        let mut list = wide();
        list.erase(2, 5).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_string(), "[3, 5, Hello World]");
    }

    #[test]
    fn test_erase_empty_range_is_noop() {
        let mut list = wide();
        list.erase(3, 3).unwrap();
        assert_eq!(list, wide());
    }

    #[test]
    fn test_erase_invalid_range_leaves_list_unchanged() {
        let mut list = wide();
        assert_eq!(
            list.erase(4, 2),
            Err(TypedListError::InvalidRange {
                from: 4,
                to: 2,
                len: 6
            })
        );
        assert_eq!(
            list.erase(0, 7),
            Err(TypedListError::InvalidRange {
                from: 0,
                to: 7,
                len: 6
            })
        );
        assert_eq!(list, wide());
    }

    #[test]
    fn test_get_out_of_range() {
        let mut list = mixed();
        assert_eq!(
            list.get(4),
            Err(TypedListError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert!(list.get_mut(10).is_err());
        assert!(list.set(4, 1i32).is_err());
        assert_eq!(list.to_string(), "[3, ab, 5, 3.4]");
    }

    #[test]
    fn test_index_operators() {
        let mut list = mixed();
        assert_eq!(list[1].get::<String, _>().map(String::as_str), Some("ab"));
        list[0] = Coprod::inject(4.5f32);
        assert_eq!(list.to_string(), "[4.5, ab, 5, 3.4]");
    }

    #[test]
    #[should_panic]
    fn test_index_operator_panics_out_of_range() {
        let list = mixed();
        let _ = &list[4];
    }

    #[test]
    #[should_panic]
    fn test_index_mut_operator_panics_out_of_range() {
        let mut list = mixed();
        list[4] = Coprod::inject(1i32);
    }

    #[test]
    fn test_get_as() {
        let list = mixed();
        assert_eq!(list.get_as::<i32, _>(2), Ok(&5));
        assert_eq!(
            list.get_as::<i32, _>(3),
            Err(TypedListError::TypeMismatch {
                index: 3,
                expected: "i32",
                actual: "f32"
            })
        );
        assert!(list.get_as::<i32, _>(9).is_err());
    }

    #[test]
    fn test_contains() {
        let list = mixed();
        assert!(list.contains(&3i32));
        assert!(list.contains(&String::from("ab")));
        assert!(list.contains(&3.4f32));
        assert!(!list.contains(&4i32));
        assert!(!list.contains(&3.0f32));
        assert!(!list.contains(&String::from("3")));
    }

    #[test]
    fn test_contains_type_without_elements() {
        let list = numbers().slice(0, 2);
        assert!(!list.contains(&3.4f32));
    }

    #[test]
    fn test_visit_all_mutates_only_selected_type() {
        let mut list = wide();
        list.visit_all(|value: &mut i32| *value *= 10);
        assert_eq!(list.to_string(), "[30, 50, 3.4, z, 8.2, Hello World]");

        let mut visited = Vec::new();
        list.visit_all(|value: &mut f32| visited.push(*value));
        assert_eq!(visited, vec![3.4, 8.2]);
    }

    #[test]
    fn test_iter_of_and_count_of() {
        let mut list = mixed();
        list.append(&mixed());
        let integers: Vec<_> = list.iter_of::<i32, _>().copied().collect();
        assert_eq!(integers, vec![3, 5, 3, 5]);
        assert_eq!(list.count_of(&3i32), 2);
        assert_eq!(list.count_of(&String::from("ab")), 2);
        assert_eq!(list.count_of(&9i32), 0);
    }

    #[test]
    fn test_position_of() {
        let list = wide();
        assert_eq!(list.position_of(&'z'), Some(3));
        assert_eq!(list.position_of(&5i32), Some(1));
        assert_eq!(list.position_of(&'a'), None);
    }

    #[test]
    fn test_insert_remove_pop() {
        let mut list = mixed();
        list.insert(0, 'x'.to_string()).unwrap();
        list.insert(5, 1i32).unwrap();
        assert_eq!(list.to_string(), "[x, 3, ab, 5, 3.4, 1]");
        assert_eq!(
            list.insert(7, 2i32),
            Err(TypedListError::IndexOutOfRange { index: 7, len: 6 })
        );

        let removed = list.remove(2).unwrap();
        assert_eq!(removed.get::<String, _>().map(String::as_str), Some("ab"));
        assert!(list.remove(5).is_err());

        let popped = list.pop().unwrap();
        assert_eq!(popped.get::<i32, _>(), Some(&1));
        assert_eq!(list.to_string(), "[x, 3, 5, 3.4]");

        list.clear();
        assert!(list.pop().is_none());
    }

    #[test]
    fn test_reverse() {
        let mut list = mixed();
        list.reverse();
        assert_eq!(list.to_string(), "[3.4, 5, ab, 3]");
    }

    #[test]
    fn test_clone_is_independent() {
        let list = mixed();
        let mut copy = list.clone();
        assert_eq!(copy, list);
        copy.push(1i32);
        assert_ne!(copy, list);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut list = mixed();
        let moved = list.take();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "[]");
        assert_eq!(moved.to_string(), "[3, ab, 5, 3.4]");
    }

    #[test]
    fn test_from_list_into_superset() {
        let small = numbers();
        let large = TypedList::<Superset>::from_list(&small);
        assert_eq!(large.len(), 3);
        assert_eq!(large.to_string(), "[3, 5, 3.4]");
        assert!(large.eq_list(&small));
        assert_eq!(large.get_as::<f32, _>(2), Ok(&3.4));
    }

    #[test]
    fn test_from_list_same_signature_equals_source() {
        let list = mixed();
        assert_eq!(TypedList::<Mixed>::from_list(&list), list);
        assert!(list.eq_list(&list));
    }

    #[test]
    fn test_assign_from_replaces_contents() {
        let mut large: TypedList<Superset> = typed_list![String::from("old")];
        large.assign_from(&numbers());
        assert_eq!(large.to_string(), "[3, 5, 3.4]");
        assert!(large.eq_list(&numbers()));
    }

    #[test]
    fn test_extend_from_subset() {
        let mut large: TypedList<Superset> = typed_list![String::from("head")];
        large.extend_from(&numbers());
        assert_eq!(large.to_string(), "[head, 3, 5, 3.4]");
    }

    #[test]
    fn test_push_from() {
        let mut large: TypedList<Superset> = TypedList::new();
        let small = numbers();
        large.push_from(&small, 2).unwrap();
        large.push_from(&small, 0).unwrap();
        assert_eq!(large.to_string(), "[3.4, 3]");
        assert_eq!(
            large.push_from(&small, 3),
            Err(TypedListError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(large.len(), 2);
    }

    #[test]
    fn test_eq_list_compares_type_and_value() {
        let integer: TypedList<Numbers> = typed_list![3i32];
        let float: TypedList<Superset> = typed_list![3.0f32];
        let same: TypedList<Superset> = typed_list![3i32];
        let other: TypedList<Superset> = typed_list![4i32];
        assert!(!float.eq_list(&integer));
        assert!(same.eq_list(&integer));
        assert!(!other.eq_list(&integer));
    }

    #[test]
    fn test_eq_list_length_mismatch() {
        let mut large = TypedList::<Superset>::from_list(&numbers());
        large.push(1i32);
        assert!(!large.eq_list(&numbers()));
        assert!(!TypedList::<Superset>::new().eq_list(&numbers()));
    }

    #[test]
    fn test_into_iter_preserves_order() {
        let tags: Vec<_> = mixed().into_iter().map(|item| item.tag()).collect();
        assert_eq!(tags, vec![1, 0, 1, 2]);

        let list = mixed();
        let names: Vec<_> = (&list).into_iter().map(Tagged::type_name).collect();
        assert_eq!(names, vec!["i32", type_name::<String>(), "i32", "f32"]);
    }

    #[test]
    fn test_iter_mut() {
        let mut list = numbers();
        for item in &mut list {
            if let Some(value) = item.get_mut::<f32, _>() {
                *value = 1.5;
            }
        }
        assert_eq!(list.to_string(), "[3, 5, 1.5]");
    }

    #[test]
    fn test_collect_from_variants() {
        let list: TypedList<Superset> = numbers()
            .into_iter()
            .map(<Numbers as Subset<Superset, _>>::embed)
            .collect();
        assert!(list.eq_list(&numbers()));
    }
}

/// A sequence whose elements each hold one of the types declared in the
/// signature `L`.
///
/// Values are stored as `L::Variant`, so storing an undeclared type does not
/// compile:
///
/// ```compile_fail,E0277
/// use typed_list::{type_list, TypedList};
///
/// let mut list: TypedList<type_list![i32, String]> = TypedList::new();
/// list.push(3.4f32);
/// ```
///
/// Visiting an undeclared type is rejected the same way:
///
/// ```compile_fail,E0277
/// use typed_list::{type_list, typed_list, TypedList};
///
/// let mut list: TypedList<type_list![i32, String]> = typed_list![1i32];
/// list.visit_all(|value: &mut f32| *value += 1.0);
/// ```
///
/// Lists of different signatures interoperate when the source signature is a
/// subset of the target one. The other direction is rejected for copying:
///
/// ```compile_fail,E0277
/// use typed_list::{type_list, typed_list, TypedList};
///
/// let large: TypedList<type_list![f32, String, i32]> = typed_list![3i32, 3.4f32];
/// let _ = TypedList::<type_list![i32, f32]>::from_list(&large);
/// ```
///
/// for assignment:
///
/// ```compile_fail,E0277
/// use typed_list::{type_list, typed_list, TypedList};
///
/// let large: TypedList<type_list![f32, String, i32]> = typed_list![3i32];
/// let mut small: TypedList<type_list![i32, f32]> = TypedList::new();
/// small.assign_from(&large);
/// ```
///
/// for concatenation:
///
/// ```compile_fail,E0277
/// use typed_list::{type_list, typed_list, TypedList};
///
/// let large: TypedList<type_list![f32, String, i32]> = typed_list![3i32];
/// let mut small: TypedList<type_list![i32, f32]> = TypedList::new();
/// small.extend_from(&large);
/// ```
///
/// for appending a single element:
///
/// ```compile_fail,E0277
/// use typed_list::{type_list, typed_list, TypedList};
///
/// let large: TypedList<type_list![f32, String, i32]> = typed_list![3i32];
/// let mut small: TypedList<type_list![i32, f32]> = TypedList::new();
/// let _ = small.push_from(&large, 0);
/// ```
///
/// and for comparison:
///
/// ```compile_fail,E0277
/// use typed_list::{type_list, typed_list, TypedList};
///
/// let large: TypedList<type_list![f32, String, i32]> = typed_list![3i32];
/// let small: TypedList<type_list![i32, f32]> = typed_list![3i32];
/// let _ = small.eq_list(&large);
/// ```
///
/// Appending a list to itself is refused by the borrow checker:
///
/// ```compile_fail,E0502
/// use typed_list::{type_list, typed_list, TypedList};
///
/// let mut list: TypedList<type_list![i32]> = typed_list![1i32, 2i32];
/// list.append(&list);
/// ```
pub struct TypedList<L: Signature> {
    items: Vec<L::Variant>,
}

impl<L: Signature> Default for TypedList<L> {
    #[inline]
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<L: Signature> TypedList<L> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push<T, M: Marker>(&mut self, value: T)
    where
        L::Variant: Inject<T, M>,
    {
        self.items.push(<L::Variant as Inject<T, M>>::inject(value));
    }

    #[inline]
    pub fn insert<T, M: Marker>(&mut self, index: usize, value: T) -> TypedListResult<()>
    where
        L::Variant: Inject<T, M>,
    {
        let len = self.len();
        if index > len {
            debug!("Rejected insert at index {} into list of len {}", index, len);
            return Err(TypedListError::IndexOutOfRange { index, len });
        }
        self.items
            .insert(index, <L::Variant as Inject<T, M>>::inject(value));
        Ok(())
    }

    /// Appends a copy of `other[index]`, re-tagged into this list's union.
    pub fn push_from<B, I>(&mut self, other: &TypedList<B>, index: usize) -> TypedListResult<()>
    where
        B: Subset<L, I>,
        B::Variant: Clone,
    {
        let variant = other.get(index)?.clone();
        self.items.push(<B as Subset<L, I>>::embed(variant));
        Ok(())
    }

    #[inline]
    pub fn append(&mut self, other: &Self)
    where
        L::Variant: Clone,
    {
        self.items.extend_from_slice(&other.items);
    }

    /// Appends copies of all elements of a list whose signature is a subset
    /// of this one. Nothing is appended if copying any element panics.
    pub fn extend_from<B, I>(&mut self, other: &TypedList<B>)
    where
        B: Subset<L, I>,
        B::Variant: Clone,
    {
        trace!(
            "Extending list of len {} with {} elements of {}",
            self.len(),
            other.len(),
            type_name::<B>()
        );
        let embedded = Self::from_list(other);
        self.items.extend(embedded.items);
    }

    pub fn from_list<B, I>(other: &TypedList<B>) -> Self
    where
        B: Subset<L, I>,
        B::Variant: Clone,
    {
        other
            .items
            .iter()
            .cloned()
            .map(<B as Subset<L, I>>::embed)
            .collect()
    }

    /// Replaces the contents with copies of `other`'s elements. The
    /// replacement is fully built before the current contents are dropped.
    pub fn assign_from<B, I>(&mut self, other: &TypedList<B>)
    where
        B: Subset<L, I>,
        B::Variant: Clone,
    {
        let replacement = Self::from_list(other);
        trace!(
            "Assigning {} elements of {} over {} elements",
            replacement.len(),
            type_name::<B>(),
            self.len()
        );
        *self = replacement;
    }

    /// Moves the contents out, leaving this list empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        trace!("Taking {} elements", self.len());
        std::mem::take(self)
    }

    /// Element-wise equality against a list whose signature is a subset of
    /// this one. Elements holding different concrete types are unequal.
    pub fn eq_list<B, I>(&self, other: &TypedList<B>) -> bool
    where
        B: SubsetEq<L, I>,
    {
        self.len() == other.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(item, source)| <B as SubsetEq<L, I>>::eq_embedded(source, item))
    }

    /// Copies the half-open range `[lower, upper)`. Both bounds are clamped
    /// into `[0, len]`.
    pub fn slice(&self, lower: isize, upper: isize) -> Self
    where
        L::Variant: Clone,
    {
        let lower = self.clamp_bound(lower);
        let upper = self.clamp_bound(upper);
        if lower >= upper {
            return Self::new();
        }
        Self {
            items: self.items[lower..upper].to_vec(),
        }
    }

    /// Removes the half-open range `[from, to)`. Unlike `slice`, bounds are
    /// not clamped: an invalid range leaves the list untouched.
    pub fn erase(&mut self, from: usize, to: usize) -> TypedListResult<()> {
        let len = self.len();
        if from > to || to > len {
            debug!("Rejected erase of [{}, {}) from list of len {}", from, to, len);
            return Err(TypedListError::InvalidRange { from, to, len });
        }
        trace!("Erasing [{}, {}) from list of len {}", from, to, len);
        self.items.drain(from..to);
        Ok(())
    }

    #[inline]
    pub fn remove(&mut self, index: usize) -> TypedListResult<L::Variant> {
        self.validate_index(index)?;
        Ok(self.items.remove(index))
    }

    #[inline]
    pub fn pop(&mut self) -> Option<L::Variant> {
        self.items.pop()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    #[inline]
    pub fn get(&self, index: usize) -> TypedListResult<&L::Variant> {
        let len = self.len();
        self.items
            .get(index)
            .ok_or(TypedListError::IndexOutOfRange { index, len })
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> TypedListResult<&mut L::Variant> {
        let len = self.len();
        self.items
            .get_mut(index)
            .ok_or(TypedListError::IndexOutOfRange { index, len })
    }

    pub fn get_as<T, M: Marker>(&self, index: usize) -> TypedListResult<&T>
    where
        L::Variant: Inject<T, M>,
    {
        let variant = self.get(index)?;
        <L::Variant as Inject<T, M>>::get(variant).ok_or(TypedListError::TypeMismatch {
            index,
            expected: type_name::<T>(),
            actual: variant.type_name(),
        })
    }

    /// Stores `value` at `index` and returns the element it replaced.
    #[inline]
    pub fn set<T, M: Marker>(&mut self, index: usize, value: T) -> TypedListResult<L::Variant>
    where
        L::Variant: Inject<T, M>,
    {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(
            slot,
            <L::Variant as Inject<T, M>>::inject(value),
        ))
    }

    #[inline]
    pub fn contains<T: PartialEq, M: Marker>(&self, value: &T) -> bool
    where
        L::Variant: Inject<T, M>,
    {
        self.iter_of::<T, M>().any(|item| item == value)
    }

    #[inline]
    pub fn count_of<T: PartialEq, M: Marker>(&self, value: &T) -> usize
    where
        L::Variant: Inject<T, M>,
    {
        self.iter_of::<T, M>().filter(|item| *item == value).count()
    }

    #[inline]
    pub fn position_of<T: PartialEq, M: Marker>(&self, value: &T) -> Option<usize>
    where
        L::Variant: Inject<T, M>,
    {
        self.items.iter().position(|item| {
            <L::Variant as Inject<T, M>>::get(item).is_some_and(|item| item == value)
        })
    }

    /// Iterates over the elements currently holding a `T`, in order.
    #[inline]
    pub fn iter_of<'a, T: 'a, M: Marker>(&'a self) -> impl Iterator<Item = &'a T>
    where
        L::Variant: Inject<T, M>,
    {
        self.items
            .iter()
            .filter_map(<L::Variant as Inject<T, M>>::get)
    }

    /// Calls `visitor` on every element currently holding a `T`, in order.
    /// Elements of other types are not visited.
    #[inline]
    pub fn visit_all<T, M: Marker, F>(&mut self, visitor: F)
    where
        L::Variant: Inject<T, M>,
        F: FnMut(&mut T),
    {
        self.items
            .iter_mut()
            .filter_map(<L::Variant as Inject<T, M>>::get_mut)
            .for_each(visitor);
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, L::Variant> {
        self.items.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, L::Variant> {
        self.items.iter_mut()
    }

    #[inline]
    fn clamp_bound(&self, bound: isize) -> usize {
        usize::try_from(bound).map_or(0, |bound| bound.min(self.len()))
    }

    #[inline]
    fn validate_index(&self, index: usize) -> TypedListResult<usize> {
        let len = self.len();
        if index < len {
            Ok(index)
        } else {
            Err(TypedListError::IndexOutOfRange { index, len })
        }
    }
}

impl<L: Signature> Clone for TypedList<L>
where
    L::Variant: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<L: Signature> PartialEq for TypedList<L>
where
    L::Variant: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<L: Signature> Eq for TypedList<L> where L::Variant: Eq {}

impl<L: Signature> Debug for TypedList<L>
where
    L::Variant: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedList")
            .field("signature", &type_name::<L>())
            .field("items", &self.items)
            .finish()
    }
}

impl<L: Signature> Display for TypedList<L>
where
    L::Variant: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl<L: Signature> AddAssign<&TypedList<L>> for TypedList<L>
where
    L::Variant: Clone,
{
    #[inline]
    fn add_assign(&mut self, other: &TypedList<L>) {
        self.append(other);
    }
}

/// Unchecked access: panics when `index >= len`, like `Vec`. Use
/// [`TypedList::get`] for an `IndexOutOfRange` error instead.
impl<L: Signature> Index<usize> for TypedList<L> {
    type Output = L::Variant;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

/// Unchecked access: panics when `index >= len`, like `Vec`. Use
/// [`TypedList::get_mut`] or [`TypedList::set`] for an `IndexOutOfRange`
/// error instead.
impl<L: Signature> IndexMut<usize> for TypedList<L> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl<L: Signature> FromIterator<L::Variant> for TypedList<L> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = L::Variant>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, L: Signature> IntoIterator for &'a TypedList<L> {
    type Item = &'a L::Variant;
    type IntoIter = std::slice::Iter<'a, L::Variant>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, L: Signature> IntoIterator for &'a mut TypedList<L> {
    type Item = &'a mut L::Variant;
    type IntoIter = std::slice::IterMut<'a, L::Variant>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<L: Signature> IntoIterator for TypedList<L> {
    type Item = L::Variant;
    type IntoIter = std::vec::IntoIter<L::Variant>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Builds a [`TypedList`] from values in order. The signature comes from the
/// surrounding type annotation.
#[macro_export]
macro_rules! typed_list {
    [] => {
        $crate::TypedList::new()
    };
    [$($value:expr),+ $(,)?] => {{
        let mut list = $crate::TypedList::new();
        $(list.push($value);)+
        list
    }};
}
