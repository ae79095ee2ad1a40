//! Standard membership shapes, each producing a validated, simplified curve.

use crate::config::Config;
use crate::curve::{Curve, Point};
use crate::error::{FuzzyError, Result};
use crate::linspace::Linspace;

/// Gaussians are cut off this many standard deviations from their center.
const GAUSSIAN_REACH: f64 = 4.;

/// Membership function shapes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Triangular: (left, peak, right)
    Triangle(f64, f64, f64),
    /// Trapezoidal: (left, left_top, right_top, right)
    Trapezoid(f64, f64, f64, f64),
    /// Full membership on [left, right] with vertical edges
    Rectangle(f64, f64),
    /// Full membership at one x
    Singleton(f64),
    /// S-shaped: rises from 0 at left to 1 at right, 1 beyond
    S(f64, f64),
    /// Z-shaped: falls from 1 at left to 0 at right, 1 before
    Z(f64, f64),
    /// An S rise on the first two bounds and a Z fall on the last two
    Pi(f64, f64, f64, f64),
    /// Gaussian: (center, sigma)
    Gaussian(f64, f64),
    /// Full membership left of center, gaussian decay to the right
    LeftGaussian(f64, f64),
    /// Gaussian rise to center, full membership to the right
    RightGaussian(f64, f64),
}

impl Shape {
    pub fn generate(&self) -> Result<Curve> {
        self.generate_with(Config::global().shape_samples)
    }

    pub(crate) fn generate_with(&self, samples: usize) -> Result<Curve> {
        let curve = match *self {
            Shape::Triangle(a, b, c) => {
                ascending(&[a, b, c])?;
                Curve::from_vertices(vec![at(a, 0.), at(b, 1.), at(c, 0.)])
            },
            Shape::Trapezoid(a, b, c, d) => {
                ascending(&[a, b, c, d])?;
                Curve::from_vertices(vec![at(a, 0.), at(b, 1.), at(c, 1.), at(d, 0.)])
            },
            Shape::Rectangle(a, b) => {
                ascending(&[a, b])?;
                Curve::from_vertices(vec![at(a, 0.), at(a, 1.), at(b, 1.), at(b, 0.)])
            },
            Shape::Singleton(x) => {
                ascending(&[x])?;
                Curve::singleton(x)?
            },
            Shape::S(a, b) => s_curve(a, b, samples, false)?,
            Shape::Z(a, b) => s_curve(a, b, samples, true)?,
            Shape::Pi(a, b, c, d) => {
                ascending(&[a, b, c, d])?;
                let rise = s_curve(a, b, samples, false)?;
                let fall = s_curve(c, d, samples, true)?;
                Curve::from_vertices(rise.points().iter().chain(fall.points()).copied().collect())
            },
            Shape::Gaussian(center, sigma) => {
                positive_sigma(center, sigma)?;
                let reach = GAUSSIAN_REACH * sigma;
                // An odd count puts a sample on the center
                gaussian(center, sigma, Linspace::new(center - reach, center + reach, samples | 1), true, true)
            },
            Shape::LeftGaussian(center, sigma) => {
                positive_sigma(center, sigma)?;
                let reach = GAUSSIAN_REACH * sigma;
                gaussian(center, sigma, Linspace::new(center, center + reach, samples / 2 + 1), false, true)
            },
            Shape::RightGaussian(center, sigma) => {
                positive_sigma(center, sigma)?;
                let reach = GAUSSIAN_REACH * sigma;
                gaussian(center, sigma, Linspace::new(center - reach, center, samples / 2 + 1), true, false)
            },
        };

        Ok(curve.simplify())
    }
}

fn at(x: f64, y: f64) -> Point {
    Point { x, y }
}

fn ascending(xs: &[f64]) -> Result<()> {
    if let Some(&x) = xs.iter().find(|x| !x.is_finite()) {
        return Err(FuzzyError::InvalidParameter { name: "shape bound", value: x });
    }

    match xs.windows(2).find(|w| w[1] < w[0]) {
        Some(w) => Err(FuzzyError::Ordering {
            previous: w[0],
            x: w[1],
        }),
        None => Ok(()),
    }
}

fn positive_sigma(center: f64, sigma: f64) -> Result<()> {
    ascending(&[center])?;

    if !sigma.is_finite() || sigma <= 0. {
        return Err(FuzzyError::InvalidParameter {
            name: "sigma",
            value: sigma,
        });
    }

    Ok(())
}

fn s_curve(a: f64, b: f64, samples: usize, mirrored: bool) -> Result<Curve> {
    ascending(&[a, b])?;

    let flip = |y: f64| if mirrored { 1. - y } else { y };

    if a == b {
        return Ok(Curve::from_vertices(vec![at(a, flip(0.)), at(a, flip(1.))]));
    }

    let mid = (a + b) / 2.;
    let width = b - a;
    let points = Linspace::new(a, b, samples)
        .map(|x| {
            let y = if x <= mid {
                2. * ((x - a) / width).powi(2)
            } else {
                1. - 2. * ((x - b) / width).powi(2)
            };

            at(x, flip(y.clamp(0., 1.)))
        })
        .collect();

    Ok(Curve::from_vertices(points))
}

fn gaussian(center: f64, sigma: f64, xs: Linspace, zero_left: bool, zero_right: bool) -> Curve {
    let mut points: Vec<Point> = xs
        .map(|x| at(x, (-(x - center).powi(2) / (2. * sigma.powi(2))).exp().clamp(0., 1.)))
        .collect();

    // Pin the cut-off tails to zero so the horizontal extension stays empty
    if zero_left {
        if let Some(first) = points.first_mut() {
            first.y = 0.;
        }
    }
    if zero_right {
        if let Some(last) = points.last_mut() {
            last.y = 0.;
        }
    }

    Curve::from_vertices(points)
}
