//! Lazy view composition over containers.
//!
//! Purpose
//! - Compose coordinate transforms — translation, interval restriction,
//!   out-of-bounds extension — without copying data, and answer for any
//!   node of the chain: where does the output still equal genuine source
//!   data ("defined bounds")?
//!
//! Design
//! - A chain is a tagged-variant recursion: every [`View`] either borrows a
//!   base container or boxes a child view. Composition never mutates the
//!   wrapped source, and the defined-bounds query is a structural recursion
//!   recomputed per call, never cached.
//! - Accessors resolve a coordinate through the chain once per seek:
//!   translation subtracts its offset, restriction passes through, and an
//!   extension either forwards inside coordinates, remaps outside ones via
//!   its strategy, or selects its synthetic constant.
//!
//! Defined-bounds rules
//! - base container: its full native interval;
//! - translate: the child's result, shifted (`None` propagates);
//! - interval restriction: the child's result unchanged — restriction never
//!   manufactures data, so the report is not clipped to the window;
//! - extension: `None` always, because every value past the source interval
//!   is synthetic and the node itself does not track which coordinates are
//!   genuine.

use crate::error::ImgError;
use crate::img::ArrayImg;
use crate::interval::Interval;
use crate::oob::OutOfBounds;
use crate::pixel::NativePixel;

/// One node of a view chain over a base [`ArrayImg`].
#[derive(Clone, Debug)]
pub enum View<'a, T: NativePixel> {
    /// The base container itself.
    Img(&'a ArrayImg<T>),
    /// Coordinates shifted by a per-axis offset: `output(p) = source(p - offset)`.
    Translate {
        source: Box<View<'a, T>>,
        offset: Vec<i64>,
    },
    /// The source restricted to (or re-declared over) an interval.
    Window {
        source: Box<View<'a, T>>,
        interval: Interval,
    },
    /// The source extended to every coordinate by an out-of-bounds strategy.
    Extend {
        source: Box<View<'a, T>>,
        strategy: OutOfBounds<T>,
    },
}

impl<'a, T: NativePixel> From<&'a ArrayImg<T>> for View<'a, T> {
    fn from(img: &'a ArrayImg<T>) -> Self {
        View::Img(img)
    }
}

/// Shift `source` by `offset` per axis.
pub fn translate<'a, T: NativePixel>(
    source: impl Into<View<'a, T>>,
    offset: &[i64],
) -> View<'a, T> {
    let source = source.into();
    assert_eq!(
        offset.len(),
        source.num_dimensions(),
        "offset rank mismatch"
    );
    View::Translate {
        source: Box::new(source),
        offset: offset.to_vec(),
    }
}

/// Restrict (or re-declare) `source` over `interval`.
pub fn interval<'a, T: NativePixel>(
    source: impl Into<View<'a, T>>,
    interval: Interval,
) -> View<'a, T> {
    let source = source.into();
    assert_eq!(
        interval.num_dimensions(),
        source.num_dimensions(),
        "interval rank mismatch"
    );
    View::Window {
        source: Box::new(source),
        interval,
    }
}

/// Extend `source` beyond its interval with `strategy`.
pub fn extend<'a, T: NativePixel>(
    source: impl Into<View<'a, T>>,
    strategy: OutOfBounds<T>,
) -> View<'a, T> {
    View::Extend {
        source: Box::new(source.into()),
        strategy,
    }
}

/// Extend with the zero value of the base prototype.
pub fn extend_zero<'a, T: NativePixel>(source: impl Into<View<'a, T>>) -> View<'a, T> {
    let source = source.into();
    let zero = source.base().prototype().create_variable();
    View::Extend {
        source: Box::new(source),
        strategy: OutOfBounds::Constant(zero),
    }
}

/// Extend with a fixed detached pixel value.
pub fn extend_value<'a, T: NativePixel>(
    source: impl Into<View<'a, T>>,
    value: T,
) -> View<'a, T> {
    extend(source, OutOfBounds::Constant(value))
}

/// Extend by clamping to the nearest border coordinate.
pub fn extend_border<'a, T: NativePixel>(source: impl Into<View<'a, T>>) -> View<'a, T> {
    extend(source, OutOfBounds::Border)
}

/// Extend by mirroring without repeating the edge pixel.
pub fn extend_mirror_single<'a, T: NativePixel>(
    source: impl Into<View<'a, T>>,
) -> View<'a, T> {
    extend(source, OutOfBounds::MirrorSingle)
}

/// Extend by mirroring with the edge pixel repeated.
pub fn extend_mirror_double<'a, T: NativePixel>(
    source: impl Into<View<'a, T>>,
) -> View<'a, T> {
    extend(source, OutOfBounds::MirrorDouble)
}

/// Extend by periodic wraparound.
pub fn extend_periodic<'a, T: NativePixel>(source: impl Into<View<'a, T>>) -> View<'a, T> {
    extend(source, OutOfBounds::Periodic)
}

impl<'a, T: NativePixel> View<'a, T> {
    /// The base container at the bottom of the chain.
    pub fn base(&self) -> &ArrayImg<T> {
        match self {
            View::Img(img) => img,
            View::Translate { source, .. }
            | View::Window { source, .. }
            | View::Extend { source, .. } => source.base(),
        }
    }

    pub fn num_dimensions(&self) -> usize {
        self.base().num_dimensions()
    }

    /// This node's own domain interval; `None` for unbounded nodes
    /// (extensions accept any coordinate).
    pub fn interval(&self) -> Option<Interval> {
        match self {
            View::Img(img) => Some(img.interval()),
            View::Translate { source, offset } => {
                source.interval().map(|iv| iv.translate(offset))
            }
            View::Window { interval, .. } => Some(interval.clone()),
            View::Extend { .. } => None,
        }
    }

    /// The largest interval over which this chain returns genuine backing
    /// data, or `None` if no coordinate is guaranteed genuine.
    pub fn defined_bounds(&self) -> Option<Interval> {
        match self {
            View::Img(img) => Some(img.interval()),
            View::Translate { source, offset } => {
                source.defined_bounds().map(|iv| iv.translate(offset))
            }
            View::Window { source, .. } => source.defined_bounds(),
            View::Extend { .. } => None,
        }
    }

    /// Coordinate-addressed accessor resolving through the chain.
    pub fn random_access(&self) -> ViewRandomAccess<'_, 'a, T> {
        ViewRandomAccess::new(self)
    }

    /// Cursor over this node's interval. Fails with
    /// [`ImgError::UnboundedView`] if the node has none.
    pub fn cursor(&self) -> Result<ViewCursor<'_, 'a, T>, ImgError> {
        ViewCursor::new(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// Bound to the base store at the resolved flat index.
    Genuine,
    /// Showing the n-th constant-extension value of the chain.
    Synthetic(usize),
}

/// Coordinate-addressed accessor over a view chain.
///
/// `set_position` walks the chain once. Genuine positions bind a pixel on
/// the base container's store and support writing; synthetic positions
/// (constant extension) expose the constant read-only.
#[derive(Debug)]
pub struct ViewRandomAccess<'v, 'a, T: NativePixel> {
    view: &'v View<'a, T>,
    strides: Vec<i64>,
    pixel: T,
    /// Detached copies of each constant-extension value, outermost first.
    constants: Vec<T>,
    pos: Vec<i64>,
    work: Vec<i64>,
    slot: Slot,
}

impl<'v, 'a, T: NativePixel> ViewRandomAccess<'v, 'a, T> {
    fn new(view: &'v View<'a, T>) -> Self {
        let base = view.base();
        let mut pixel = base.bound_pixel();
        pixel.update_index(0);
        let mut constants = Vec::new();
        collect_constants(view, &mut constants);
        let n = base.num_dimensions();
        Self {
            view,
            strides: base.strides().to_vec(),
            pixel,
            constants,
            pos: vec![0; n],
            work: vec![0; n],
            slot: Slot::Genuine,
        }
    }

    /// Seek to an absolute coordinate in the view's own coordinate system.
    pub fn set_position(&mut self, pos: &[i64]) {
        assert_eq!(pos.len(), self.pos.len(), "coordinate rank mismatch");
        self.pos.copy_from_slice(pos);
        self.work.copy_from_slice(pos);

        let mut node = self.view;
        // count of constant extensions passed on the way down
        let mut constant_idx = 0usize;
        loop {
            match node {
                View::Img(_) => {
                    let flat: i64 = self
                        .work
                        .iter()
                        .zip(&self.strides)
                        .map(|(p, s)| p * s)
                        .sum();
                    self.pixel.update_index(flat as usize);
                    self.slot = Slot::Genuine;
                    return;
                }
                View::Translate { source, offset } => {
                    for (w, o) in self.work.iter_mut().zip(offset) {
                        *w -= o;
                    }
                    node = source;
                }
                View::Window { source, .. } => {
                    node = source;
                }
                View::Extend { source, strategy } => {
                    // an unbounded source is defined everywhere and needs
                    // no remapping
                    if let Some(iv) = source.interval() {
                        if !iv.contains(&self.work)
                            && !strategy.map_into(&mut self.work, &iv)
                        {
                            self.slot = Slot::Synthetic(constant_idx);
                            return;
                        }
                    }
                    if strategy.constant().is_some() {
                        constant_idx += 1;
                    }
                    node = source;
                }
            }
        }
    }

    /// Whether the current position resolved to genuine backing data.
    pub fn is_genuine(&self) -> bool {
        self.slot == Slot::Genuine
    }

    /// The pixel at the current position: the bound backing pixel for
    /// genuine coordinates, the extension constant for synthetic ones.
    pub fn pixel(&self) -> &T {
        match self.slot {
            Slot::Genuine => &self.pixel,
            Slot::Synthetic(i) => &self.constants[i],
        }
    }

    /// Mutable pixel access; `None` at synthetic positions, which are
    /// read-only (a write there would have nowhere to go).
    pub fn pixel_mut(&mut self) -> Option<&mut T> {
        match self.slot {
            Slot::Genuine => Some(&mut self.pixel),
            Slot::Synthetic(_) => None,
        }
    }

    /// Write the current view-space coordinate into `pos`.
    pub fn localize(&self, pos: &mut [i64]) {
        pos.copy_from_slice(&self.pos);
    }
}

fn collect_constants<T: NativePixel>(view: &View<'_, T>, out: &mut Vec<T>) {
    match view {
        View::Img(_) => {}
        View::Translate { source, .. } | View::Window { source, .. } => {
            collect_constants(source, out);
        }
        View::Extend { source, strategy } => {
            if let Some(c) = strategy.constant() {
                out.push(c.copy());
            }
            collect_constants(source, out);
        }
    }
}

/// Cursor over a bounded view's interval, row-major with the last axis
/// fastest, resolving every coordinate through the chain.
#[derive(Debug)]
pub struct ViewCursor<'v, 'a, T: NativePixel> {
    ra: ViewRandomAccess<'v, 'a, T>,
    interval: Interval,
    pos: Vec<i64>,
    idx: i64,
    len: i64,
}

impl<'v, 'a, T: NativePixel> ViewCursor<'v, 'a, T> {
    fn new(view: &'v View<'a, T>) -> Result<Self, ImgError> {
        let interval = view.interval().ok_or(ImgError::UnboundedView)?;
        let len = interval.num_elements();
        let pos = vec![0; interval.num_dimensions()];
        Ok(Self {
            ra: view.random_access(),
            interval,
            pos,
            idx: -1,
            len,
        })
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.idx + 1 < self.len
    }

    /// Advance and resolve the next coordinate.
    pub fn fwd(&mut self) {
        self.idx += 1;
        let mut i = self.idx;
        for d in (0..self.pos.len()).rev() {
            let size = self.interval.size(d);
            self.pos[d] = self.interval.min(d) + i.rem_euclid(size);
            i /= size;
        }
        self.ra.set_position(&self.pos);
    }

    /// Restart the traversal from before the first coordinate.
    pub fn reset(&mut self) {
        self.idx = -1;
    }

    pub fn localize(&self, pos: &mut [i64]) {
        pos.copy_from_slice(&self.pos);
    }

    pub fn is_genuine(&self) -> bool {
        self.ra.is_genuine()
    }

    pub fn pixel(&self) -> &T {
        self.ra.pixel()
    }

    pub fn pixel_mut(&mut self) -> Option<&mut T> {
        self.ra.pixel_mut()
    }
}
