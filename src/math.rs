use num::Float;

/// Linear interpolation through `(x1, y1)` and `(x2, y2)` evaluated at `x`.
#[inline]
pub(crate) fn lerp<F: Float>((x1, y1): (F, F), (x2, y2): (F, F), x: F) -> F {
    if x2 == x1 {
        return F::max(y1, y2);
    }

    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

/// Similar to numpy.interp: values left of the first coordinate take its y,
/// values right of the last take the last y. Where several coordinates share
/// the x being looked up (a vertical edge) the largest y wins. Empty
/// coordinates interpolate to zero.
pub(crate) fn interp<F: Float>(
    x_input: impl IntoIterator<Item = F>,
    coords: impl IntoIterator<Item = (F, F)> + Clone,
) -> Vec<F> {
    x_input
        .into_iter()
        .map(|x| {
            let mut iter = coords.clone().into_iter().peekable();
            let Some(&(x_first, y_first)) = iter.peek() else {
                return F::zero();
            };

            if x < x_first {
                return y_first;
            }

            let mut hit: Option<F> = None;
            let mut prev = (x_first, y_first);

            for (xi, yi) in iter {
                if xi == x {
                    hit = Some(hit.map_or(yi, |h| F::max(h, yi)));
                } else if xi > x {
                    return hit.unwrap_or_else(|| lerp(prev, (xi, yi), x));
                }
                prev = (xi, yi);
            }

            hit.unwrap_or(prev.1)
        })
        .collect()
}

#[test]
fn test_interp() {
    let x = [0., 1., 1.5, 2.72, 3.24];
    let xs = [1., 2., 3.];
    let ys = [3., 2., 0.];

    assert_eq!(
        interp(x, xs.into_iter().zip(ys.into_iter())),
        vec![3., 3., 2.5, 0.5599999999999996, 0.]
    );

    let x = [2.5, -1., 7.5];
    let xs = [0., 1., 2., 3., 4.5];
    let ys = [0., 2., 5., 3., 2.];

    assert_eq!(interp(x, xs.into_iter().zip(ys.into_iter())), vec![4., 0., 2.]);
}

#[test]
fn test_interp_vertical_edge_and_empty() {
    let coords = [(1., 0.), (1., 1.), (1., 0.)];

    assert_eq!(interp([0.5, 1., 2.], coords), vec![0., 1., 0.]);
    assert_eq!(interp([3.], std::iter::empty::<(f64, f64)>()), vec![0.]);
    assert_eq!(lerp((2., 0.25), (2., 0.75), 2.), 0.75);
}
