use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::curve::{Curve, Point};
use crate::error::{FuzzyError, Result};

/// Linguistic hedges. Each one maps a curve to a new, simplified curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Modifier {
    Not,
    Norm,
    /// `y^2`
    Very,
    /// `y^3`
    Extremely,
    /// `y^(1/3)`
    MoreOrLess,
    /// `y^(1/2)`
    Somewhat,
    /// Contrast intensification
    Intensify,
    Above,
    Below,
    Power(f64),
}

impl Modifier {
    pub fn name(&self) -> &'static str {
        match self {
            Modifier::Not => "not",
            Modifier::Norm => "norm",
            Modifier::Very => "very",
            Modifier::Extremely => "extremely",
            Modifier::MoreOrLess => "more_or_less",
            Modifier::Somewhat => "somewhat",
            Modifier::Intensify => "intensify",
            Modifier::Above => "above",
            Modifier::Below => "below",
            Modifier::Power(_) => "power",
        }
    }

    pub fn apply(&self, curve: &Curve) -> Result<Curve> {
        let config = Config::global();
        let tolerance = config.tolerance;

        let power = |p: f64| {
            curve
                .subdivide(config.hedge_subdivisions, tolerance)
                .map_levels(&[], |y| y.powf(p), tolerance)
        };

        let curve = match *self {
            Modifier::Not => curve.complement(),
            Modifier::Norm => {
                let height = curve.height();

                if height <= tolerance {
                    return Err(FuzzyError::ZeroHeight { height });
                }

                curve.map_levels(&[], |y| y / height, tolerance)
            },
            Modifier::Very => power(2.),
            Modifier::Extremely => power(3.),
            Modifier::MoreOrLess => power(1. / 3.),
            Modifier::Somewhat => power(0.5),
            Modifier::Power(p) => {
                if !p.is_finite() || p <= 0. {
                    return Err(FuzzyError::InvalidParameter { name: "power", value: p });
                }

                power(p)
            },
            Modifier::Intensify => curve
                .subdivide(config.hedge_subdivisions, tolerance)
                .map_levels(&[0.5], intensify, tolerance),
            Modifier::Above => one_sided(curve, false).simplify_with(tolerance),
            Modifier::Below => one_sided(curve, true).simplify_with(tolerance),
        };

        Ok(curve)
    }
}

fn intensify(y: f64) -> f64 {
    if y <= 0.5 {
        2. * y * y
    } else {
        1. - 2. * (1. - y) * (1. - y)
    }
}

/// `above` maps every vertex up to the first maximum to 0 and every later one
/// to `1 - y`. `below` mirrors that around the last maximum.
fn one_sided(curve: &Curve, below: bool) -> Curve {
    let points = curve.points();
    let height = curve.height();

    let peak = if below {
        points.iter().rposition(|p| p.y == height)
    } else {
        points.iter().position(|p| p.y == height)
    };

    let Some(peak) = peak else {
        return Curve::empty();
    };

    let out: Vec<Point> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let zeroed = if below { i >= peak } else { i <= peak };
            Point {
                x: p.x,
                y: if zeroed { 0. } else { 1. - p.y },
            }
        })
        .collect();

    Curve::from_vertices(out)
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Power(p) => write!(f, "power({p})"),
            m => f.write_str(m.name()),
        }
    }
}

impl FromStr for Modifier {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();

        Ok(match name.as_str() {
            "not" => Modifier::Not,
            "norm" => Modifier::Norm,
            "very" => Modifier::Very,
            "extremely" => Modifier::Extremely,
            "more_or_less" | "more or less" | "fairly" => Modifier::MoreOrLess,
            "somewhat" => Modifier::Somewhat,
            "intensify" => Modifier::Intensify,
            "above" => Modifier::Above,
            "below" => Modifier::Below,
            _ => {
                let power = name
                    .strip_prefix("power(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .and_then(|p| p.trim().parse::<f64>().ok());

                match power {
                    Some(p) => Modifier::Power(p),
                    None => return Err(FuzzyError::UnknownModifier(s.to_owned())),
                }
            },
        })
    }
}
