//! Piecewise-linear membership functions and their algebra.
//!
//! A [`Curve`] is an ordered list of `(x, y)` vertices joined by straight
//! lines. Left of the first vertex the membership stays at the first y, right
//! of the last vertex it stays at the last y, so a single vertex describes a
//! constant line. Two consecutive vertices may share an x only as a vertical
//! edge, which the shape generators use for singletons and rectangles; the
//! membership on a vertical edge is its highest y.
//!
//! Every operation returns a new, simplified curve and leaves its inputs
//! untouched.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::{self, Config};
use crate::error::{FuzzyError, Result};
use crate::interval::Interval;
use crate::linspace::Linspace;
use crate::math::{interp, lerp};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(FuzzyError::InvalidParameter { name: "x", value: x });
        }
        if !(0. ..=1.).contains(&y) {
            return Err(FuzzyError::Range { y });
        }

        Ok(Point { x, y })
    }
}

/// Whether an alpha-cut keeps memberships equal to alpha.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CutKind {
    /// `y >= alpha`
    Weak,
    /// `y > alpha`
    Strong,
}

/// Which end of the curve a membership solve starts scanning from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    FromLeft,
    FromRight,
}

/// How ties between several maxima are resolved by maximum defuzzification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MaxPolicy {
    First,
    Last,
    Mean,
}

/// Pointwise combination of two memberships. Each one is linear on either side
/// of the line where `switch` changes sign, which lets the merge insert exact
/// breakpoints instead of sampling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PointwiseOp {
    Min,
    Max,
    BoundedSum,
    BoundedProd,
}

impl PointwiseOp {
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Min => f64::min(a, b),
            Self::Max => f64::max(a, b),
            Self::BoundedSum => f64::min(1., a + b),
            Self::BoundedProd => f64::max(0., a + b - 1.),
        }
    }

    fn switch(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Min | Self::Max => a - b,
            Self::BoundedSum | Self::BoundedProd => a + b - 1.,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    pub fn empty() -> Self {
        Curve { points: Vec::new() }
    }

    /// Builds a simplified curve from `(x, y)` pairs. The x values must be
    /// strictly ascending and every y must lie in `[0, 1]`.
    pub fn new(coords: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let mut curve = Curve::empty();

        for (x, y) in coords {
            curve.append(x, y)?;
        }

        Ok(curve.simplify())
    }

    /// A constant membership line, anchored at `x`.
    pub fn constant(x: f64, y: f64) -> Result<Self> {
        Ok(Curve {
            points: vec![Point::new(x, y)?],
        })
    }

    /// Full membership at exactly `x` and none elsewhere.
    pub fn singleton(x: f64) -> Result<Self> {
        let bottom = Point::new(x, 0.)?;

        Ok(Curve {
            points: vec![bottom, Point { x, y: 1. }, bottom],
        })
    }

    /// Takes vertices that are already known to be valid: ascending x (equal
    /// x only for vertical edges) and y in `[0, 1]`.
    pub(crate) fn from_vertices(points: Vec<Point>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].x <= w[1].x), "vertices out of order");
        debug_assert!(points.iter().all(|p| (0. ..=1.).contains(&p.y)), "membership out of range");

        Curve { points }
    }

    /// Appends a vertex right of the current last one.
    pub fn append(&mut self, x: f64, y: f64) -> Result<()> {
        let point = Point::new(x, y)?;

        if let Some(last) = self.points.last() {
            if point.x <= last.x {
                return Err(FuzzyError::Ordering { previous: last.x, x });
            }
        }

        self.points.push(point);

        Ok(())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The x of the first and last vertex.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    /// Smallest and largest vertex membership; `(0, 0)` when empty.
    pub fn y_range(&self) -> (f64, f64) {
        if self.points.is_empty() {
            return (0., 0.);
        }

        self.points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)))
    }

    pub fn height(&self) -> f64 {
        self.y_range().1
    }

    pub fn membership(&self, x: f64) -> f64 {
        interp(Some(x), self.coords())[0]
    }

    pub fn sample(&self, xs: &[f64]) -> Vec<f64> {
        interp(xs.iter().copied(), self.coords())
    }

    fn coords(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        self.points.iter().map(|p| (p.x, p.y))
    }

    /// Every membership the curve takes at exactly `x`, left to right. More
    /// than one value means `x` carries a vertical edge.
    fn ys_at(&self, x: f64) -> Vec<f64> {
        let start = self.points.partition_point(|p| p.x < x);
        let run: Vec<f64> = self.points[start..]
            .iter()
            .take_while(|p| p.x == x)
            .map(|p| p.y)
            .collect();

        if run.is_empty() {
            vec![self.membership(x)]
        } else {
            run
        }
    }

    pub fn approx_eq(&self, other: &Curve, tolerance: f64) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance)
    }

    pub fn simplify(&self) -> Curve {
        self.simplify_with(config::tolerance())
    }

    /// Drops near-duplicate vertices and vertices lying on the segment joining
    /// their neighbours until neither remains.
    pub fn simplify_with(&self, tolerance: f64) -> Curve {
        let mut points = self.points.clone();

        loop {
            let before = points.len();

            points.dedup_by(|next, kept| {
                (next.x - kept.x).abs() <= tolerance && (next.y - kept.y).abs() <= tolerance
            });

            let mut kept: Vec<Point> = Vec::with_capacity(points.len());

            for point in points {
                kept.push(point);

                while let [.., a, b, c] = kept[..] {
                    if !redundant(a, b, c, tolerance) {
                        break;
                    }
                    let n = kept.len();
                    kept.remove(n - 2);
                }
            }

            points = kept;

            if points.len() == before {
                break;
            }
        }

        Curve { points }
    }

    pub fn union(&self, other: &Curve) -> Curve {
        self.combine(other, PointwiseOp::Max, config::tolerance())
    }

    pub fn intersection(&self, other: &Curve) -> Curve {
        self.combine(other, PointwiseOp::Min, config::tolerance())
    }

    /// `1 - y` everywhere. The empty curve, 0 everywhere, becomes the line at 1.
    pub fn complement(&self) -> Curve {
        self.complement_from(0.)
    }

    /// Complement whose constant line, for an empty curve, is anchored at `x`.
    pub(crate) fn complement_from(&self, x: f64) -> Curve {
        if self.points.is_empty() {
            return Curve {
                points: vec![Point { x, y: 1. }],
            };
        }

        self.map_levels(&[], |y| 1. - y, config::tolerance())
    }

    /// Evaluates both curves over the union of their x values, inserting the
    /// points where the combination switches branch between two grid values.
    pub(crate) fn combine(&self, other: &Curve, op: PointwiseOp, tolerance: f64) -> Curve {
        if self.is_empty() && other.is_empty() {
            return Curve::empty();
        }

        let mut grid: Vec<f64> = self.points.iter().chain(&other.points).map(|p| p.x).collect();

        grid.sort_by(f64::total_cmp);
        grid.dedup();

        let mut out = Vec::with_capacity(grid.len() * 2);
        let mut prev: Option<(f64, f64, f64)> = None;

        for x in grid {
            let a = self.ys_at(x);
            let b = other.ys_at(x);

            if let Some((px, pa, pb)) = prev {
                let (na, nb) = (a[0], b[0]);
                let g0 = op.switch(pa, pb);
                let g1 = op.switch(na, nb);

                if (g0 < 0. && g1 > 0.) || (g0 > 0. && g1 < 0.) {
                    let t = g0 / (g0 - g1);
                    let ya = pa + t * (na - pa);
                    let yb = pb + t * (nb - pb);

                    out.push(Point {
                        x: px + t * (x - px),
                        y: op.apply(ya, yb).clamp(0., 1.),
                    });
                }
            }

            for y in zip_runs(&a, &b, op) {
                out.push(Point { x, y: y.clamp(0., 1.) });
            }

            prev = a.last().zip(b.last()).map(|(&ra, &rb)| (x, ra, rb));
        }

        Curve::from_vertices(out).simplify_with(tolerance)
    }

    /// Applies `f` to every membership. `levels` are the memberships at which
    /// `f` stops being linear; segments crossing one get a vertex there so the
    /// result is exact.
    pub(crate) fn map_levels(&self, levels: &[f64], f: impl Fn(f64) -> f64, tolerance: f64) -> Curve {
        let mut out = Vec::with_capacity(self.points.len());

        for (i, p) in self.points.iter().enumerate() {
            if let Some(q) = i.checked_sub(1).map(|j| self.points[j]) {
                if p.x > q.x {
                    let mut crossings: Vec<(f64, f64)> = levels
                        .iter()
                        .filter(|&&l| (q.y < l && l < p.y) || (p.y < l && l < q.y))
                        .map(|&l| ((l - q.y) / (p.y - q.y), l))
                        .collect();

                    crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

                    for (t, level) in crossings {
                        out.push(Point {
                            x: q.x + t * (p.x - q.x),
                            y: f(level).clamp(0., 1.),
                        });
                    }
                }
            }

            out.push(Point {
                x: p.x,
                y: f(p.y).clamp(0., 1.),
            });
        }

        Curve::from_vertices(out).simplify_with(tolerance)
    }

    /// Splits every sloped segment into `parts` equal pieces. The result is
    /// deliberately left unsimplified.
    pub(crate) fn subdivide(&self, parts: usize, tolerance: f64) -> Curve {
        let mut out = Vec::with_capacity(self.points.len() * parts.max(1));

        for (i, p) in self.points.iter().enumerate() {
            if let Some(q) = i.checked_sub(1).map(|j| self.points[j]) {
                if p.x > q.x && (p.y - q.y).abs() > tolerance {
                    let interior = Linspace::new(q.x, p.x, parts + 1).skip(1).take(parts.saturating_sub(1));

                    out.extend(interior.map(|x| Point {
                        x,
                        y: lerp((q.x, q.y), (p.x, p.y), x).clamp(0., 1.),
                    }));
                }
            }
            out.push(*p);
        }

        Curve::from_vertices(out)
    }

    /// Integral of the membership over `[x_min, x_max]`.
    pub fn area(&self, x_min: f64, x_max: f64) -> Result<f64> {
        if !(x_min <= x_max) {
            return Err(FuzzyError::Ordering {
                previous: x_min,
                x: x_max,
            });
        }

        Ok(area_of(&self.knots(x_min, x_max)))
    }

    /// Vertices clipped to `[lo, hi]`, with the memberships at both bounds
    /// added so that the horizontal extension is integrated too.
    fn knots(&self, lo: f64, hi: f64) -> Vec<(f64, f64)> {
        if self.points.is_empty() {
            return Vec::new();
        }

        let mut knots = Vec::with_capacity(self.points.len() + 2);

        knots.extend(self.ys_at(lo).into_iter().map(|y| (lo, y)));
        knots.extend(
            self.points
                .iter()
                .filter(|p| p.x > lo && p.x < hi)
                .map(|p| (p.x, p.y)),
        );
        if hi > lo {
            knots.extend(self.ys_at(hi).into_iter().map(|y| (hi, y)));
        }

        knots
    }

    /// Every maximal interval of x whose membership passes the threshold, in
    /// ascending order. Ends reached through the horizontal extension are
    /// unbounded.
    pub fn alpha_cuts(&self, alpha: f64, kind: CutKind) -> Vec<Interval> {
        let tolerance = config::tolerance();
        let holds = |y: f64| match kind {
            CutKind::Weak => y >= alpha - tolerance,
            CutKind::Strong => y > alpha + tolerance,
        };
        let crossing_closed = kind == CutKind::Weak;

        let Some(first) = self.points.first() else {
            return if holds(0.) {
                vec![Interval::open(f64::NEG_INFINITY, f64::INFINITY)]
            } else {
                Vec::new()
            };
        };

        let mut pieces = Vec::new();
        let mut start = holds(first.y).then_some((f64::NEG_INFINITY, false));

        for pair in self.points.windows(2) {
            let (p, q) = (pair[0], pair[1]);
            let inside = holds(q.y);

            if holds(p.y) == inside {
                continue;
            }

            // A vertical edge is the membership's maximum at that x, so its
            // end belongs to the cut
            let (x, closed) = if q.x == p.x {
                (p.x, true)
            } else {
                let t = ((alpha - p.y) / (q.y - p.y)).clamp(0., 1.);
                (p.x + t * (q.x - p.x), crossing_closed)
            };

            if inside {
                start = Some((x, closed));
            } else if let Some((low, low_closed)) = start.take() {
                pieces.push(Interval::new(low, low_closed, x, closed));
            }
        }

        if let Some((low, low_closed)) = start {
            pieces.push(Interval::new(low, low_closed, f64::INFINITY, false));
        }

        pieces
    }

    /// The x values where the membership reaches `alpha`, as a single interval
    /// spanning every piece of the cut. `None` when no x qualifies.
    pub fn alpha_cut(&self, alpha: f64, kind: CutKind) -> Option<Interval> {
        let pieces = self.alpha_cuts(alpha, kind);
        let (first, last) = (pieces.first()?, pieces.last()?);

        Some(Interval::new(first.low, first.low_closed, last.high, last.high_closed))
    }

    /// Where the membership is above zero.
    pub fn support(&self) -> Option<Interval> {
        self.alpha_cut(0., CutKind::Strong)
    }

    /// Where the membership is one.
    pub fn core(&self) -> Option<Interval> {
        self.alpha_cut(1., CutKind::Weak)
    }

    /// Solves for the first (or last) x whose membership is `y`. A one-point
    /// curve is constant, so a match spans the whole line and the result is
    /// the matching infinity.
    pub fn x_for_membership(&self, y: f64, side: Side) -> Result<f64> {
        let tolerance = config::tolerance();
        let (min, max) = self.y_range();
        let missing = FuzzyError::NoXForMembership { y, min, max };

        if self.points.is_empty() || y < min - tolerance || y > max + tolerance {
            return Err(missing);
        }

        if self.points.len() == 1 {
            return Ok(match side {
                Side::FromLeft => f64::NEG_INFINITY,
                Side::FromRight => f64::INFINITY,
            });
        }

        let solve = |pair: &[Point]| -> Option<f64> {
            let (p, q) = (pair[0], pair[1]);

            if y < p.y.min(q.y) - tolerance || y > p.y.max(q.y) + tolerance {
                return None;
            }

            if (q.y - p.y).abs() <= tolerance {
                return Some(match side {
                    Side::FromLeft => p.x,
                    Side::FromRight => q.x,
                });
            }

            let t = ((y - p.y) / (q.y - p.y)).clamp(0., 1.);

            Some(p.x + t * (q.x - p.x))
        };

        let found = match side {
            Side::FromLeft => self.points.windows(2).find_map(solve),
            Side::FromRight => self.points.windows(2).rev().find_map(solve),
        };

        found.ok_or(missing)
    }

    /// Centroid of the area under the curve over its own x-range.
    pub fn moment_defuzzify(&self) -> Result<f64> {
        let (lo, hi) = self.x_range().ok_or(FuzzyError::InvalidDefuzzify { points: 0, height: 0. })?;

        self.moment_within(lo, hi, config::tolerance())
    }

    /// The x of the highest membership over the curve's own x-range.
    pub fn maximum_defuzzify(&self, policy: MaxPolicy) -> Result<f64> {
        let (lo, hi) = self.x_range().ok_or(FuzzyError::InvalidDefuzzify { points: 0, height: 0. })?;

        self.maximum_within(lo, hi, policy, config::tolerance())
    }

    /// The x splitting the area under the curve into two equal halves.
    pub fn bisector_defuzzify(&self) -> Result<f64> {
        let (lo, hi) = self.x_range().ok_or(FuzzyError::InvalidDefuzzify { points: 0, height: 0. })?;

        self.bisector_within(lo, hi, config::tolerance())
    }

    fn usable_knots(&self, lo: f64, hi: f64, tolerance: f64) -> Result<(Vec<(f64, f64)>, f64)> {
        let knots = self.knots(lo, hi);
        let height = knots.iter().map(|&(_, y)| y).fold(0., f64::max);

        if knots.is_empty() || height <= tolerance {
            return Err(FuzzyError::InvalidDefuzzify {
                points: self.points.len(),
                height,
            });
        }

        Ok((knots, height))
    }

    pub(crate) fn moment_within(&self, lo: f64, hi: f64, tolerance: f64) -> Result<f64> {
        let (knots, _) = self.usable_knots(lo, hi, tolerance)?;
        let (area, moment) = knots.windows(2).fold((0., 0.), |(area, moment), w| {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            let dx = x1 - x0;

            (
                area + dx * (y0 + y1) / 2.,
                moment + dx * (x0 * (2. * y0 + y1) + x1 * (y0 + 2. * y1)) / 6.,
            )
        });

        if area > tolerance {
            return Ok(moment / area);
        }

        // Nothing but spikes: weigh the vertices by their membership instead
        let (weighted, weights) = knots
            .iter()
            .fold((0., 0.), |(sum, total), &(x, y)| (sum + x * y, total + y));

        Ok(weighted / weights)
    }

    pub(crate) fn maximum_within(&self, lo: f64, hi: f64, policy: MaxPolicy, tolerance: f64) -> Result<f64> {
        let (knots, height) = self.usable_knots(lo, hi, tolerance)?;
        let mut maxima = knots.iter().filter(|&&(_, y)| y >= height - tolerance).map(|&(x, _)| x);

        let x = match policy {
            MaxPolicy::First => maxima.next(),
            MaxPolicy::Last => maxima.last(),
            MaxPolicy::Mean => {
                let (n, sum) = maxima.fold((0usize, 0.), |(n, sum), x| (n + 1, sum + x));
                (n > 0).then(|| sum / n as f64)
            },
        };

        x.ok_or(FuzzyError::InvalidDefuzzify {
            points: self.points.len(),
            height,
        })
    }

    pub(crate) fn bisector_within(&self, lo: f64, hi: f64, tolerance: f64) -> Result<f64> {
        let (knots, _) = self.usable_knots(lo, hi, tolerance)?;
        let total = area_of(&knots);

        if total <= tolerance {
            return self.moment_within(lo, hi, tolerance);
        }

        let target = total / 2.;
        let mut cumulative = 0.;

        for w in knots.windows(2) {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            let dx = x1 - x0;
            let segment = dx * (y0 + y1) / 2.;

            if dx > 0. && cumulative + segment >= target {
                let remaining = target - cumulative;
                let slope = (y1 - y0) / dx;
                let s = if slope.abs() < f64::EPSILON {
                    if y0 > 0. {
                        remaining / y0
                    } else {
                        0.
                    }
                } else {
                    (-y0 + (y0 * y0 + 2. * slope * remaining).max(0.).sqrt()) / slope
                };

                return Ok(x0 + s.clamp(0., dx));
            }

            cumulative += segment;
        }

        Ok(knots.last().map_or(hi, |&(x, _)| x))
    }
}

fn area_of(knots: &[(f64, f64)]) -> f64 {
    knots
        .windows(2)
        .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.)
        .sum()
}

/// `b` adds nothing between `a` and `c`: it lies on the segment joining them.
fn redundant(a: Point, b: Point, c: Point, tolerance: f64) -> bool {
    if (c.x - a.x).abs() <= tolerance {
        return b.y >= a.y.min(c.y) - tolerance && b.y <= a.y.max(c.y) + tolerance;
    }
    // b is the corner of a vertical edge
    if b.x - a.x <= tolerance || c.x - b.x <= tolerance {
        return false;
    }

    (b.y - lerp((a.x, a.y), (c.x, c.y), b.x)).abs() <= tolerance
}

/// Combines the memberships two curves take at one x. A single value is
/// broadcast against a vertical edge; two vertical edges are matched end to end
/// with their peaks in between.
fn zip_runs(a: &[f64], b: &[f64], op: PointwiseOp) -> Vec<f64> {
    match (a, b) {
        ([ya], _) => b.iter().map(|&yb| op.apply(*ya, yb)).collect(),
        (_, [yb]) => a.iter().map(|&ya| op.apply(ya, *yb)).collect(),
        _ => {
            let peak = |run: &[f64]| run.iter().copied().fold(0., f64::max);
            let (a0, an) = (a[0], a[a.len() - 1]);
            let (b0, bn) = (b[0], b[b.len() - 1]);

            vec![op.apply(a0, b0), op.apply(peak(a), peak(b)), op.apply(an, bn)]
        },
    }
}

impl Hash for Curve {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.points.len().hash(state);
        for p in &self.points {
            p.x.to_bits().hash(state);
            p.y.to_bits().hash(state);
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = Config::global().precision;

        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "({:.*}, {:.*})", precision, p.x, precision, p.y)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn curve(coords: &[(f64, f64)]) -> Curve {
        Curve::new(coords.iter().copied()).unwrap()
    }

    fn triangle(a: f64, b: f64, c: f64) -> Curve {
        curve(&[(a, 0.), (b, 1.), (c, 0.)])
    }

    fn coords(curve: &Curve) -> Vec<(f64, f64)> {
        curve.points().iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_construction_validates() {
        assert_eq!(
            Curve::new([(0., 0.), (5., 1.2)]),
            Err(FuzzyError::Range { y: 1.2 })
        );
        assert_eq!(
            Curve::new([(0., 0.), (5., 1.), (5., 0.)]),
            Err(FuzzyError::Ordering { previous: 5., x: 5. })
        );
        assert_eq!(
            Curve::new([(3., 0.), (1., 1.)]),
            Err(FuzzyError::Ordering { previous: 3., x: 1. })
        );
    }

    #[test]
    fn test_append_requires_ascending_x() {
        let mut curve = Curve::empty();

        curve.append(1., 0.5).unwrap();
        curve.append(2., 0.25).unwrap();

        assert_eq!(curve.append(2., 1.), Err(FuzzyError::Ordering { previous: 2., x: 2. }));
        assert_eq!(curve.append(3., -0.1), Err(FuzzyError::Range { y: -0.1 }));
        assert_eq!(curve.len(), 2);
    }

    #[test]
    fn test_simplify_removes_colinear_and_duplicates() {
        let raw = Curve::from_vertices(vec![
            Point { x: 0., y: 0. },
            Point { x: 2.5, y: 0.5 },
            Point { x: 5., y: 1. },
            Point { x: 5. + 1e-12, y: 1. },
            Point { x: 7., y: 1. },
            Point { x: 10., y: 1. },
            Point { x: 15., y: 0. },
        ]);

        assert_eq!(coords(&raw.simplify()), vec![(0., 0.), (5., 1.), (10., 1.), (15., 0.)]);
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let raw = Curve::from_vertices(vec![
            Point { x: 0., y: 0.2 },
            Point { x: 1., y: 0.2 },
            Point { x: 2., y: 0.2 },
            Point { x: 3., y: 0.6 },
            Point { x: 3., y: 0.6 },
            Point { x: 4., y: 1. },
            Point { x: 4., y: 0.3 },
            Point { x: 4., y: 0. },
            Point { x: 9., y: 0. },
        ]);
        let once = raw.simplify();

        assert_eq!(once.simplify(), once);
        assert_eq!(
            coords(&once),
            vec![(0., 0.2), (2., 0.2), (4., 1.), (4., 0.), (9., 0.)]
        );
    }

    #[test]
    fn test_simplify_keeps_spikes() {
        let spike = Curve::singleton(4.).unwrap();

        assert_eq!(spike.simplify(), spike);
        assert_eq!(spike.len(), 3);
    }

    #[test]
    fn test_membership_extends_horizontally() {
        let ramp = curve(&[(2., 0.), (4., 1.)]);

        assert_eq!(ramp.membership(0.), 0.);
        assert_eq!(ramp.membership(3.), 0.5);
        assert_eq!(ramp.membership(10.), 1.);
        assert_eq!(Curve::constant(0., 0.4).unwrap().membership(-100.), 0.4);
        assert_eq!(Curve::singleton(1.).unwrap().sample(&[0., 1., 2.]), vec![0., 1., 0.]);
    }

    #[test]
    fn test_union_of_overlapping_triangles() {
        let union = triangle(0., 5., 10.).union(&triangle(5., 10., 15.));

        assert_eq!(
            coords(&union),
            vec![(0., 0.), (5., 1.), (7.5, 0.5), (10., 1.), (15., 0.)]
        );
    }

    #[test]
    fn test_intersection_of_overlapping_triangles() {
        let intersection = triangle(0., 5., 10.).intersection(&triangle(5., 10., 15.));

        assert_eq!(coords(&intersection), vec![(0., 0.), (5., 0.), (7.5, 0.5), (10., 0.), (15., 0.)]);
        assert_eq!(intersection.height(), 0.5);
    }

    #[test]
    fn test_union_with_disjoint_domains() {
        let union = triangle(0., 1., 2.).union(&triangle(5., 6., 7.));

        assert_eq!(
            coords(&union),
            vec![(0., 0.), (1., 1.), (2., 0.), (5., 0.), (6., 1.), (7., 0.)]
        );
    }

    #[test]
    fn test_union_with_empty_curve() {
        let tri = triangle(0., 5., 10.);

        assert_eq!(tri.union(&Curve::empty()), tri);
        assert_eq!(Curve::empty().union(&Curve::empty()), Curve::empty());
        assert_eq!(tri.intersection(&Curve::empty()).height(), 0.);
    }

    #[test]
    fn test_intersection_with_singleton_reads_membership() {
        let hit = triangle(0., 5., 10.).intersection(&Curve::singleton(2.5).unwrap());

        assert_eq!(hit.height(), 0.5);
        assert_eq!(hit.membership(2.5), 0.5);
        assert_eq!(hit.membership(3.), 0.);
    }

    #[test]
    fn test_complement_involution() {
        let tri = triangle(2., 5., 8.);
        let not = tri.complement();

        assert_eq!(coords(&not), vec![(2., 1.), (5., 0.), (8., 1.)]);
        assert_eq!(not.complement(), tri);
    }

    #[test]
    fn test_complement_of_empty_is_full() {
        let full = Curve::empty().complement();

        assert_eq!(full.len(), 1);
        assert_eq!(full.membership(-42.), 1.);
        assert_eq!(full.membership(42.), 1.);
        assert_eq!(full.height(), 1.);
    }

    #[test]
    fn test_de_morgan_duality() {
        let a = triangle(0., 5., 10.);
        let b = curve(&[(3., 0.), (6., 0.8), (12., 0.8), (14., 0.)]);
        let left = a.union(&b).complement();
        let right = a.complement().intersection(&b.complement());

        assert!(left.approx_eq(&right, 1e-8), "{left} != {right}");
    }

    #[test]
    fn test_area() {
        let tri = triangle(0., 5., 10.);

        assert_eq!(tri.area(0., 10.), Ok(5.));
        assert_eq!(tri.area(0., 5.), Ok(2.5));
        assert_eq!(tri.area(-5., 20.), Ok(5.));
        assert!((tri.area(2.5, 7.5).unwrap() - 3.75).abs() < EPS);
        assert_eq!(Curve::constant(0., 0.5).unwrap().area(0., 4.), Ok(2.));
        assert_eq!(tri.area(3., 1.), Err(FuzzyError::Ordering { previous: 3., x: 1. }));
    }

    #[test]
    fn test_area_monotonicity() {
        let a = triangle(0., 5., 10.);
        let b = curve(&[(4., 0.), (8., 1.), (9., 0.4), (16., 0.)]);
        let inter = a.intersection(&b).area(0., 20.).unwrap();
        let union = a.union(&b).area(0., 20.).unwrap();

        assert!(inter <= union);
        assert!(inter > 0.);
    }

    #[test]
    fn test_alpha_cut() {
        let tri = triangle(0., 5., 10.);

        assert_eq!(tri.alpha_cut(0.5, CutKind::Weak), Some(Interval::closed(2.5, 7.5)));
        assert_eq!(tri.alpha_cut(0.5, CutKind::Strong), Some(Interval::open(2.5, 7.5)));
        assert_eq!(tri.alpha_cut(1., CutKind::Weak), Some(Interval::closed(5., 5.)));
        assert_eq!(tri.alpha_cut(1., CutKind::Strong), None);
        assert_eq!(
            tri.alpha_cut(0., CutKind::Weak),
            Some(Interval::open(f64::NEG_INFINITY, f64::INFINITY))
        );
        assert_eq!(tri.support(), Some(Interval::open(0., 10.)));
    }

    #[test]
    fn test_alpha_cuts_of_disjoint_pieces() {
        let twin = triangle(0., 5., 10.).union(&triangle(20., 25., 30.));
        let pieces = twin.alpha_cuts(0.5, CutKind::Weak);

        assert_eq!(pieces, vec![Interval::closed(2.5, 7.5), Interval::closed(22.5, 27.5)]);
        assert_eq!(twin.alpha_cut(0.5, CutKind::Weak), Some(Interval::closed(2.5, 27.5)));
    }

    #[test]
    fn test_alpha_cut_of_ramp_is_unbounded() {
        let ramp = curve(&[(2., 0.), (4., 1.)]);

        assert_eq!(
            ramp.alpha_cut(0.5, CutKind::Weak),
            Some(Interval::new(3., true, f64::INFINITY, false))
        );
        assert_eq!(Curve::singleton(3.).unwrap().core(), Some(Interval::closed(3., 3.)));
    }

    #[test]
    fn test_x_for_membership() {
        let tri = triangle(0., 5., 10.);

        assert_eq!(tri.x_for_membership(0.5, Side::FromLeft), Ok(2.5));
        assert_eq!(tri.x_for_membership(0.5, Side::FromRight), Ok(7.5));
        assert_eq!(tri.x_for_membership(1., Side::FromRight), Ok(5.));
        assert_eq!(
            tri.x_for_membership(1.5, Side::FromLeft),
            Err(FuzzyError::NoXForMembership { y: 1.5, min: 0., max: 1. })
        );

        let plateau = curve(&[(0., 0.), (5., 1.), (10., 1.), (15., 0.)]);

        assert_eq!(plateau.x_for_membership(1., Side::FromLeft), Ok(5.));
        assert_eq!(plateau.x_for_membership(1., Side::FromRight), Ok(10.));
    }

    #[test]
    fn test_x_for_membership_of_constant() {
        let constant = Curve::constant(2., 0.3).unwrap();

        assert_eq!(constant.x_for_membership(0.3, Side::FromLeft), Ok(f64::NEG_INFINITY));
        assert_eq!(constant.x_for_membership(0.3, Side::FromRight), Ok(f64::INFINITY));
        assert!(constant.x_for_membership(0.4, Side::FromLeft).is_err());
    }

    #[test]
    fn test_moment_defuzzify() {
        assert!((triangle(0., 5., 10.).moment_defuzzify().unwrap() - 5.).abs() < EPS);

        let skewed = curve(&[(0., 1.), (3., 0.)]);

        assert!((skewed.moment_defuzzify().unwrap() - 1.).abs() < EPS);
        assert_eq!(Curve::singleton(4.).unwrap().moment_defuzzify(), Ok(4.));
    }

    #[test]
    fn test_defuzzify_rejects_degenerate_curves() {
        assert_eq!(
            Curve::empty().moment_defuzzify(),
            Err(FuzzyError::InvalidDefuzzify { points: 0, height: 0. })
        );
        assert_eq!(
            curve(&[(0., 0.), (10., 0.)]).maximum_defuzzify(MaxPolicy::First),
            Err(FuzzyError::InvalidDefuzzify { points: 2, height: 0. })
        );
    }

    #[test]
    fn test_maximum_defuzzify_policies() {
        let plateau = curve(&[(0., 0.), (5., 1.), (10., 1.), (15., 0.)]);

        assert_eq!(plateau.maximum_defuzzify(MaxPolicy::First), Ok(5.));
        assert_eq!(plateau.maximum_defuzzify(MaxPolicy::Last), Ok(10.));
        assert_eq!(plateau.maximum_defuzzify(MaxPolicy::Mean), Ok(7.5));
    }

    #[test]
    fn test_bisector_defuzzify() {
        assert_eq!(triangle(0., 5., 10.).bisector_defuzzify(), Ok(5.));

        let box_curve = curve(&[(0., 1.), (4., 1.)]);

        assert_eq!(box_curve.bisector_defuzzify(), Ok(2.));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            triangle(0., 5., 10.).to_string(),
            "(0.0000, 0.0000) (5.0000, 1.0000) (10.0000, 0.0000)"
        );
    }
}
