//! Per-series renderable point storage
//!
//! [`SeriesBuffer`] holds one series' retained points as a flat sequence of
//! interleaved `(domain - offset, range)` values, narrowed to `f32` for
//! direct consumption by a GPU vertex buffer. Narrowing happens only at
//! write time, after the shared domain offset has been subtracted: raw
//! domain values are typically large timestamps whose low-order bits would
//! alias in 32-bit floats, while offset-relative values stay small.
//!
//! The buffer is append-only up to its capacity; once full, each append
//! evicts the oldest retained point. Running extrema over the retained
//! points are cached and kept exact: appends update them incrementally,
//! and any removal that could have evicted an extreme-holding point
//! triggers a full rescan. Trims are bounded by the retention window and
//! happen at most once per update tick, so the rescan cost stays inside a
//! frame budget.

/// Growable, capacity-bounded storage for one series' renderable points.
///
/// Values are stored interleaved (`domain, range, domain, range, ...`) in
/// offset-adjusted `f32` form, ready for upload. Extrema accessors report
/// raw domain units (offset added back).
#[derive(Debug, Clone)]
pub struct SeriesBuffer {
    /// Interleaved (domain - offset, range) pairs
    values: Vec<f32>,
    domain_offset: f64,
    max_points: usize,
    /// Cached extrema over retained points, in stored (offset-adjusted) form
    domain_extrema: Option<(f32, f32)>,
    range_extrema: Option<(f32, f32)>,
    generation: u64,
}

impl SeriesBuffer {
    /// Create an empty buffer.
    ///
    /// `domain_offset` is subtracted from every domain value before
    /// narrowing; `max_points` caps retention. Initial allocation is a
    /// small fraction of the cap and grows geometrically as points arrive,
    /// so short-lived series never pay for the worst case.
    pub fn new(domain_offset: f64, max_points: usize) -> Self {
        let initial_points = (max_points / 128).clamp(1, max_points);
        Self {
            values: Vec::with_capacity(2 * initial_points),
            domain_offset,
            max_points,
            domain_extrema: None,
            range_extrema: None,
            generation: 0,
        }
    }

    /// Number of retained points
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len() / 2
    }

    /// Check if the buffer holds no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The flat interleaved value slice, ready for render upload
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Iterate retained points as stored `(domain - offset, range)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.values.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// The domain offset this buffer was created with
    #[inline]
    pub fn domain_offset(&self) -> f64 {
        self.domain_offset
    }

    /// The retention cap
    #[inline]
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Change counter, bumped on every append and trim.
    ///
    /// Lets a renderer holding last tick's buffer handle detect cheaply
    /// whether re-upload is needed.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cached (min, max) over retained domain values, in raw domain units.
    /// `None` while the buffer is empty.
    #[inline]
    pub fn domain_extrema(&self) -> Option<(f64, f64)> {
        self.domain_extrema
            .map(|(min, max)| (self.domain_offset + min as f64, self.domain_offset + max as f64))
    }

    /// Cached (min, max) over retained range values.
    /// `None` while the buffer is empty.
    #[inline]
    pub fn range_extrema(&self) -> Option<(f64, f64)> {
        self.range_extrema.map(|(min, max)| (min as f64, max as f64))
    }

    /// Append one point, evicting the oldest retained point if the buffer
    /// is at capacity. Never fails.
    pub fn append(&mut self, domain: f64, range: f64) {
        let stored_domain = (domain - self.domain_offset) as f32;
        let stored_range = range as f32;

        let evicted = self.push(stored_domain, stored_range);
        self.extend_extrema(stored_domain, stored_range);
        if let Some((domain, range)) = evicted {
            if self.held_extremum(domain, range) {
                self.rescan_extrema();
            }
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Append a run of points, deferring extrema maintenance until the end.
    ///
    /// Equivalent to repeated [`append`](Self::append) calls but with a
    /// single rescan, which is what bulk historical imports want.
    pub fn append_batch<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut appended = false;
        for (domain, range) in points {
            let stored_domain = (domain - self.domain_offset) as f32;
            self.push(stored_domain, range as f32);
            appended = true;
        }
        if appended {
            self.rescan_extrema();
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Binary search for the first index whose domain value is `>= domain`.
    ///
    /// Returns 0 when every retained point is at or past `domain`, and
    /// [`len`](Self::len) when every retained point is before it. Assumes
    /// stored domains are sorted, which holds for series advancing in time.
    pub fn find_insertion_index(&self, domain: f64) -> usize {
        let target = (domain - self.domain_offset) as f32;
        let mut low = 0;
        let mut high = self.len();
        while low < high {
            let mid = low + (high - low) / 2;
            if self.values[2 * mid] < target {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    /// Discard all points before `index`, compacting in place, then rescan
    /// extrema over the remaining points.
    ///
    /// An out-of-range index is a caller bug; it trips an assertion in
    /// debug builds and is clamped in release builds, since this runs in
    /// the per-frame update path.
    pub fn trim(&mut self, index: usize) {
        debug_assert!(
            index <= self.len(),
            "trim index {} out of range for buffer of {} points",
            index,
            self.len()
        );
        let index = index.min(self.len());
        if index == 0 {
            return;
        }
        tracing::trace!("trimming {} of {} points", index, self.len());
        self.values.drain(..2 * index);
        self.rescan_extrema();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Insert a stored pair at the tail, evicting the oldest pair first if
    /// at capacity. Returns the evicted pair, if any.
    fn push(&mut self, stored_domain: f32, stored_range: f32) -> Option<(f32, f32)> {
        let mut evicted = None;
        if self.len() >= self.max_points {
            evicted = Some((self.values[0], self.values[1]));
            self.values.copy_within(2.., 0);
            let len = self.values.len();
            self.values.truncate(len - 2);
        }
        self.values.push(stored_domain);
        self.values.push(stored_range);
        evicted
    }

    /// Widen cached extrema to cover one new stored pair. Exact for any
    /// append order, since appends can only widen.
    fn extend_extrema(&mut self, stored_domain: f32, stored_range: f32) {
        self.domain_extrema = Some(match self.domain_extrema {
            Some((min, max)) => (min.min(stored_domain), max.max(stored_domain)),
            None => (stored_domain, stored_domain),
        });
        self.range_extrema = Some(match self.range_extrema {
            Some((min, max)) => (min.min(stored_range), max.max(stored_range)),
            None => (stored_range, stored_range),
        });
    }

    /// Check whether an evicted stored pair may have defined a cached
    /// extremum. False positives just cost a rescan.
    fn held_extremum(&self, stored_domain: f32, stored_range: f32) -> bool {
        let domain_hit = self
            .domain_extrema
            .is_some_and(|(min, max)| stored_domain == min || stored_domain == max);
        let range_hit = self
            .range_extrema
            .is_some_and(|(min, max)| stored_range == min || stored_range == max);
        domain_hit || range_hit
    }

    /// Recompute both extrema by full scan over retained points
    fn rescan_extrema(&mut self) {
        let mut domain: Option<(f32, f32)> = None;
        let mut range: Option<(f32, f32)> = None;
        for pair in self.values.chunks_exact(2) {
            domain = Some(match domain {
                Some((min, max)) => (min.min(pair[0]), max.max(pair[0])),
                None => (pair[0], pair[0]),
            });
            range = Some(match range {
                Some((min, max)) => (min.min(pair[1]), max.max(pair[1])),
                None => (pair[1], pair[1]),
            });
        }
        self.domain_extrema = domain;
        self.range_extrema = range;
    }
}
