// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::alloc::{self, Layout};
use std::cmp;
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use rawpointer::PointerExt;
use tracing::trace;

/// Minimum alignment in bytes of every non-empty element buffer.
///
/// Wide enough for 256-bit vector loads.
pub const ALIGNMENT: usize = 32;

/// Contiguous, aligned storage for the elements of an array.
///
/// Like a `Vec`, but the allocation is aligned to
/// `max(ALIGNMENT, align_of::<A>())` so that the first-element pointer can
/// be handed to vectorized numeric kernels as is.
///
/// The container does no bounds checking of its own beyond what slice
/// indexing does; addressing checks belong to
/// [`Array`](crate::Array).
pub struct AlignedVec<A> {
    ptr: NonNull<A>,
    len: usize,
    capacity: usize,
}

impl<A> AlignedVec<A> {
    /// Create an empty container. Does not allocate.
    pub fn new() -> Self {
        AlignedVec {
            ptr: NonNull::dangling(),
            len: 0,
            capacity: 0,
        }
    }

    /// Create a container holding `n` clones of `elem`.
    pub fn from_elem(n: usize, elem: A) -> Self
    where
        A: Clone,
    {
        let mut v = Self::new();
        v.resize_fn(n, || elem.clone());
        v
    }

    /// Move the elements of `v` into aligned storage.
    pub fn from_vec(mut v: Vec<A>) -> Self {
        let mut this = Self::new();
        this.reserve_exact(v.len());
        unsafe {
            ptr::copy_nonoverlapping(v.as_ptr(), this.ptr.as_ptr(), v.len());
            this.len = v.len();
            // the elements now belong to `this`; only free the Vec's buffer
            v.set_len(0);
        }
        this
    }

    /// Hand the elements back as a `Vec`.
    pub fn into_vec(mut self) -> Vec<A> {
        let mut v = Vec::with_capacity(self.len);
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), v.as_mut_ptr(), self.len);
            v.set_len(self.len);
        }
        self.len = 0;
        v
    }

    /// Return the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[A] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [A] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Return a pointer to the first element.
    ///
    /// The pointer is dangling if the container is empty.
    #[inline]
    pub fn as_ptr(&self) -> *const A {
        self.ptr.as_ptr()
    }

    /// Return a mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut A {
        self.ptr.as_ptr()
    }

    /// Return a reference to the element at `index` without bounds checking.
    ///
    /// ## Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &A {
        debug_assert!(index < self.len);
        &*self.ptr_at(index)
    }

    /// Return a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// ## Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut A {
        debug_assert!(index < self.len);
        &mut *self.ptr_at(index)
    }

    /// Change the length to `n`; new elements are `A::default()`.
    ///
    /// Existing elements below `n` are kept. Does nothing if `n` equals the
    /// current length.
    pub fn resize(&mut self, n: usize)
    where
        A: Default,
    {
        if n != self.len {
            self.resize_fn(n, A::default);
        }
    }

    /// Change the length to `n` and fill with `elem`.
    ///
    /// If the length changes, only the new tail is filled; if it stays the
    /// same, every element is overwritten with `elem`.
    pub fn resize_with(&mut self, n: usize, elem: A)
    where
        A: Clone,
    {
        if n == self.len {
            for x in self.as_mut_slice() {
                *x = elem.clone();
            }
        } else {
            self.resize_fn(n, || elem.clone());
        }
    }

    /// Drop all elements and release the allocation.
    pub fn clear(&mut self) {
        self.truncate(0);
        self.release();
    }

    #[inline(always)]
    unsafe fn ptr_at(&self, index: usize) -> *mut A {
        PointerExt::add(self.ptr, index).as_ptr()
    }

    fn truncate(&mut self, n: usize) {
        if n >= self.len {
            return;
        }
        let old_len = self.len;
        self.len = n;
        unsafe {
            let tail = slice::from_raw_parts_mut(self.ptr_at(n), old_len - n);
            ptr::drop_in_place(tail);
        }
    }

    fn resize_fn(&mut self, n: usize, mut f: impl FnMut() -> A) {
        if n <= self.len {
            self.truncate(n);
            return;
        }
        self.reserve_exact(n);
        while self.len < n {
            unsafe {
                self.ptr_at(self.len).write(f());
            }
            // counted one by one so that a panic in `f` leaves valid state
            self.len += 1;
        }
    }

    fn reserve_exact(&mut self, capacity: usize) {
        if capacity <= self.capacity {
            return;
        }
        let new_ptr = Self::allocate(capacity);
        trace!(
            from = self.capacity,
            to = capacity,
            elem_size = mem::size_of::<A>(),
            "reallocating aligned buffer"
        );
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
        }
        self.release();
        self.ptr = new_ptr;
        self.capacity = capacity;
    }

    fn layout(capacity: usize) -> Layout {
        let align = cmp::max(ALIGNMENT, mem::align_of::<A>());
        mem::size_of::<A>()
            .checked_mul(capacity)
            .and_then(|size| Layout::from_size_align(size, align).ok())
            .unwrap_or_else(|| panic!("mrarray: capacity overflow allocating {} elements", capacity))
    }

    fn allocate(capacity: usize) -> NonNull<A> {
        let layout = Self::layout(capacity);
        if layout.size() == 0 {
            return NonNull::dangling();
        }
        let ptr = unsafe { alloc::alloc(layout) as *mut A };
        match NonNull::new(ptr) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        }
    }

    /// Free the allocation without touching elements.
    fn release(&mut self) {
        let layout = Self::layout(self.capacity);
        if self.capacity > 0 && layout.size() > 0 {
            unsafe {
                alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
        self.ptr = NonNull::dangling();
        self.capacity = 0;
    }
}

impl<A> Default for AlignedVec<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Deref for AlignedVec<A> {
    type Target = [A];
    #[inline]
    fn deref(&self) -> &[A] {
        self.as_slice()
    }
}

impl<A> DerefMut for AlignedVec<A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [A] {
        self.as_mut_slice()
    }
}

impl<A> Clone for AlignedVec<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        let mut v = Self::new();
        v.reserve_exact(self.len);
        for elt in self.as_slice() {
            unsafe {
                v.ptr_at(v.len).write(elt.clone());
            }
            v.len += 1;
        }
        v
    }
}

impl<A: PartialEq> PartialEq for AlignedVec<A> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<A: fmt::Debug> fmt::Debug for AlignedVec<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<A> Drop for AlignedVec<A> {
    fn drop(&mut self) {
        self.truncate(0);
        self.release();
    }
}

unsafe impl<A> Sync for AlignedVec<A> where A: Sync {}
unsafe impl<A> Send for AlignedVec<A> where A: Send {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn is_aligned<A>(v: &AlignedVec<A>) -> bool {
        v.as_ptr() as usize % ALIGNMENT == 0
    }

    #[test]
    fn alignment() {
        let v = AlignedVec::from_elem(3, 1u8);
        assert!(is_aligned(&v));
        let v = AlignedVec::from_vec(vec![1.0f64; 17]);
        assert!(is_aligned(&v));
        assert_eq!(v.as_slice(), &[1.0; 17][..]);
    }

    #[test]
    fn resize_keeps_prefix() {
        let mut v = AlignedVec::from_vec(vec![1, 2, 3]);
        v.resize(5);
        assert_eq!(&v[..], &[1, 2, 3, 0, 0]);
        v.resize(2);
        assert_eq!(&v[..], &[1, 2]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn resize_with_same_len_overwrites() {
        let mut v = AlignedVec::from_vec(vec![1, 2, 3]);
        v.resize_with(3, 7);
        assert_eq!(&v[..], &[7, 7, 7]);
        v.resize_with(5, 9);
        assert_eq!(&v[..], &[7, 7, 7, 9, 9]);
    }

    #[test]
    fn clear_releases() {
        let mut v = AlignedVec::from_elem(8, 0.5f32);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn drops_elements_once() {
        let token = Rc::new(());
        {
            let mut v = AlignedVec::from_elem(4, token.clone());
            assert_eq!(Rc::strong_count(&token), 5);
            v.resize_with(2, token.clone());
            assert_eq!(Rc::strong_count(&token), 3);
            let w = v.clone();
            assert_eq!(Rc::strong_count(&token), 5);
            let back = w.into_vec();
            assert_eq!(back.len(), 2);
            assert_eq!(Rc::strong_count(&token), 5);
        }
        assert_eq!(Rc::strong_count(&token), 1);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = AlignedVec::from_elem(10, ());
        assert_eq!(v.len(), 10);
        v.resize(3);
        assert_eq!(v.len(), 3);
    }
}
