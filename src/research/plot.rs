//! Renders a labeled sample as a 2-D scatter plot.
//! None of the learning code depends on this module;
//! training and prediction run headlessly without it.
use plotters::prelude::*;

use std::path::Path;

use crate::Sample;


/// Render the first two features of `sample` as a scatter plot,
/// separating positively and negatively labeled examples,
/// and write it to `path` as a PNG image.
///
/// # Panics
/// If `sample` has fewer than 2 features.
pub fn scatter_plot<P: AsRef<Path>>(sample: &Sample, path: P)
    -> Result<(), Box<dyn std::error::Error>>
{
    let (n_sample, n_feature) = sample.shape();
    assert!(n_feature >= 2, "a scatter plot needs at least 2 features");

    let xs = &sample.features()[0];
    let ys = &sample.features()[1];

    let (x_min, x_max) = xs.range();
    let (y_min, y_max) = ys.range();
    let x_pad = 0.1 * (x_max - x_min).max(1.0);
    let y_pad = 0.1 * (y_max - y_min).max(1.0);

    let root = BitMapBackend::new(path.as_ref(), (640, 480))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Training sample", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(
            (x_min - x_pad)..(x_max + x_pad),
            (y_min - y_pad)..(y_max + y_pad),
        )?;

    chart.configure_mesh()
        .x_desc(xs.name())
        .y_desc(ys.name())
        .draw()?;

    let target = sample.target();

    chart.draw_series(
            (0..n_sample)
                .filter(|&i| target[i] > 0.0)
                .map(|i| Circle::new((xs[i], ys[i]), 4, RED.filled()))
        )?
        .label("+1")
        .legend(|(x, y)| Circle::new((x, y), 4, RED.filled()));

    chart.draw_series(
            (0..n_sample)
                .filter(|&i| target[i] <= 0.0)
                .map(|i| TriangleMarker::new((xs[i], ys[i]), 5, BLUE.filled()))
        )?
        .label("-1")
        .legend(|(x, y)| TriangleMarker::new((x, y), 5, BLUE.filled()));

    chart.configure_series_labels()
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}
