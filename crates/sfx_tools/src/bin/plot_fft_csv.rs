//! Plots one line graph per distinct channel of the fft csv table.

use clap::Parser as _;
use log::info;
use sfx_tools::{args::FftCsvCli, fft_csv::read_channel_series, plotting::plot_channel};
use std::path::PathBuf;

fn main() -> Result<(), anyhow::Error> {
    // Handle commandline arguments.
    let opt = FftCsvCli::parse();
    simple_logger::init_with_level(opt.log_opt.log_level).unwrap();

    let series = read_channel_series(&opt.in_file, opt.x_column)?;
    info!(
        "Found {} distinct channels in {}",
        series.len(),
        opt.in_file.display()
    );

    for channel_series in &series {
        let file_out = PathBuf::from(format!("fft_channel_{}.png", channel_series.channel));
        plot_channel(
            &file_out,
            &channel_series.channel,
            &channel_series.points,
            opt.x_column.x_desc(),
            opt.x_column.x_clip(),
        )?;
    }

    Ok(())
}
