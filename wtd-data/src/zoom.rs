//! Zoom window over the time-filtered history.
//!
//! Every constructor goes through [`ZoomWindow::new`], so a window always
//! satisfies `left < right <= len - 1` for the length it was built against.

/// Inclusive index pair into the filtered points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomWindow {
    left: usize,
    right: usize,
}

impl ZoomWindow {
    pub fn new(left: usize, right: usize, len: usize) -> Option<ZoomWindow> {
        if left < right && right < len {
            Some(ZoomWindow { left, right })
        } else {
            None
        }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    /// Number of points inside the window.
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Whether the window still fits data of length `len`.
    pub fn fits(&self, len: usize) -> bool {
        self.right < len
    }

    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        if !self.fits(data.len()) {
            return data;
        }
        &data[self.left..=self.right]
    }
}

/// The points shown for an optional zoom.
pub fn visible<T>(zoom: Option<ZoomWindow>, data: &[T]) -> &[T] {
    match zoom {
        Some(window) => window.slice(data),
        None => data,
    }
}

fn bounds(zoom: Option<ZoomWindow>, len: usize) -> Option<(usize, usize)> {
    match zoom {
        Some(w) if w.fits(len) => Some((w.left, w.right)),
        _ if len > 0 => Some((0, len - 1)),
        _ => None,
    }
}

/// Narrow the view by a quarter of its points at each end. Views of four
/// points or fewer are left alone.
pub fn zoom_in(zoom: Option<ZoomWindow>, len: usize) -> Option<ZoomWindow> {
    let Some((left, right)) = bounds(zoom, len) else {
        return zoom;
    };
    let count = right - left + 1;
    if count <= 4 {
        return zoom;
    }
    let shrink = count / 4;
    ZoomWindow::new(left + shrink, right - shrink, len).or(zoom)
}

/// Widen the view by half its width at each end. A view that reaches both
/// ends of the data drops the zoom entirely.
pub fn zoom_out(zoom: Option<ZoomWindow>, len: usize) -> Option<ZoomWindow> {
    let window = zoom.filter(|w| w.fits(len))?;
    let expand = ((window.right - window.left) / 2).max(1);
    let left = window.left.saturating_sub(expand);
    let right = (window.right + expand).min(len - 1);
    if left == 0 && right == len - 1 {
        None
    } else {
        ZoomWindow::new(left, right, len)
    }
}

/// Apply a drag from `start` to `end`, both indices into the currently
/// visible points. Drags spanning fewer than three points keep the current
/// zoom.
pub fn apply_selection(
    zoom: Option<ZoomWindow>,
    start: usize,
    end: usize,
    len: usize,
) -> Option<ZoomWindow> {
    let Some((offset, visible_right)) = bounds(zoom, len) else {
        return zoom;
    };
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    if hi - lo <= 1 {
        return zoom;
    }
    let left = offset + lo;
    let right = (offset + hi).min(visible_right);
    ZoomWindow::new(left, right, len).or(zoom)
}
