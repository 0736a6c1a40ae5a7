use log::info;
use plotters::prelude::*;
use std::path::Path;

/// Plot one channel's `(x, norm)` series as a line graph.
///
/// `x_clip` bounds the x axis; without it the axis spans the data.
pub fn plot_channel(
    file_out: &Path,
    channel: &str,
    points: &[(f64, f64)],
    x_desc: &str,
    x_clip: Option<(f64, f64)>,
) -> anyhow::Result<()> {
    let (x_min, x_max) = match x_clip {
        Some(clip) => clip,
        None => {
            let mut min = f64::NAN;
            let mut max = f64::NAN;
            for &(x, _) in points {
                max = x.max(max);
                min = x.min(min);
            }
            (min, max)
        }
    };

    // Find max and min of data
    let mut y_max = f64::NAN;
    let mut y_min = f64::NAN;
    for &(_, y) in points {
        y_max = y.max(y_max);
        y_min = y.min(y_min);
    }
    info!("Max of plot is {y_max}");
    info!("Min of plot is {y_min}");

    // setup graph
    let root = BitMapBackend::new(file_out, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Channel {channel} after FFT"),
            ("sans-serif", 50).into_font(),
        )
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(40)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    // draw the tickmarks and mesh
    chart
        .configure_mesh()
        .y_label_style(("sans-serif", 15).into_font())
        .x_label_style(("sans-serif", 15).into_font())
        .x_desc(x_desc)
        .y_desc("Normalized value")
        .draw()?;

    // draw series
    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))?
        .label("Normalized value")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 20, y)], BLUE));
    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    info!(
        "Successfully saved channel {channel} plot to {}",
        file_out.display()
    );
    Ok(())
}

/// Plot the normalized novelty curve against time in seconds.
pub fn plot_novelty(file_out: &Path, data: &[f64], frame_rate: f32) -> anyhow::Result<()> {
    let duration = data.len() as f64 / f64::from(frame_rate);

    // setup graph
    let root = BitMapBackend::new(file_out, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Spectral novelty", ("sans-serif", 50).into_font())
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..duration, 0f64..1f64)?;

    // draw the tickmarks and mesh
    chart
        .configure_mesh()
        .y_label_style(("sans-serif", 15).into_font())
        .x_label_style(("sans-serif", 15).into_font())
        .x_desc("Time in seconds")
        .y_desc("Normalized novelty")
        .draw()?;

    // generate pairs of frame times and values
    let series_point_iter = data
        .iter()
        .enumerate()
        .map(|(i, &x)| (i as f64 / f64::from(frame_rate), x));

    // draw series
    chart.draw_series(LineSeries::new(series_point_iter, &RED))?;

    root.present()?;
    info!(
        "Successfully saved novelty plot to {}",
        file_out.display()
    );
    Ok(())
}
