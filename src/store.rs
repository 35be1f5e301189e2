//! Flat shared backing stores.
//!
//! An [`ArrayStore`] is one dense primitive buffer behind a cheaply cloneable
//! handle. The container that allocated the store is its logical owner;
//! pixel instances and accessors hold handle clones and address it by flat
//! index. A write through any handle is visible through every other handle —
//! this models the aliasing that positioned pixel instances require without
//! handing out raw pointers.
//!
//! Bounds are deliberately not enforced here: coordinate checks belong to
//! the accessor layer, and an out-of-range flat index panics on the inner
//! `Vec` access (a caller error, not a recoverable condition).

use std::cell::RefCell;
use std::rc::Rc;

use num_traits::Zero;

/// Shared handle to one flat primitive buffer.
///
/// `Clone` clones the handle, not the buffer. The handle is intentionally
/// `!Send`/`!Sync` (`Rc` inside): the core is single-threaded by design.
#[derive(Clone, Debug)]
pub struct ArrayStore<P> {
    data: Rc<RefCell<Vec<P>>>,
}

impl<P: Copy + Zero> ArrayStore<P> {
    /// Allocate a zero-filled store of `len` words.
    pub fn new(len: usize) -> Self {
        Self {
            data: Rc::new(RefCell::new(vec![P::zero(); len])),
        }
    }
}

impl<P: Copy> ArrayStore<P> {
    /// Wrap an existing buffer, e.g. raw words handed over by an I/O layer.
    pub fn from_words(words: Vec<P>) -> Self {
        Self {
            data: Rc::new(RefCell::new(words)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_empty()
    }

    /// Read the word at flat index `i`. Panics if out of range.
    #[inline]
    pub fn get(&self, i: usize) -> P {
        self.data.borrow()[i]
    }

    /// Write the word at flat index `i`. Panics if out of range.
    #[inline]
    pub fn set(&self, i: usize, value: P) {
        self.data.borrow_mut()[i] = value;
    }

    /// Whether two handles address the same buffer.
    pub fn same_buffer(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Snapshot of the raw words, e.g. for an I/O layer.
    pub fn to_words(&self) -> Vec<P> {
        self.data.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_visible_through_every_handle() {
        let a = ArrayStore::<f64>::new(4);
        let b = a.clone();
        assert!(a.same_buffer(&b));

        b.set(2, 7.5);
        assert_eq!(a.get(2), 7.5);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn from_words_keeps_contents() {
        let s = ArrayStore::from_words(vec![1u64, 2, 3]);
        assert_eq!(s.get(0), 1);
        assert_eq!(s.to_words(), vec![1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_panics() {
        let s = ArrayStore::<f64>::new(2);
        s.get(2);
    }
}
