//! Computes and plots the spectral novelty (onset) curve of a wav file.

use clap::Parser as _;
use log::info;
use sfx_tools::{args::NoveltyCli, constants, file_io::read_wav, plotting::plot_novelty};
use spectral::{fft::window_fn, novelty, SpectrogramConfig, WindowLength};

fn main() -> Result<(), anyhow::Error> {
    // Handle commandline arguments.
    let opt = NoveltyCli::parse();
    simple_logger::init_with_level(opt.log_opt.log_level).unwrap();

    // Read in wav file.
    let (spec, data) = read_wav(&opt.in_file)?;
    let sample_rate = spec.sample_rate as f32;

    let window_len = WindowLength::from_samples(constants::NOVELTY_WINDOW_LEN);
    let config = SpectrogramConfig::new(window_len, window_len / 4, window_fn::hann);
    let frame_rate = config.frame_rate(sample_rate);

    let spectrogram = config.compute(&data);
    info!(
        "Computed {} frames of {} bins at {frame_rate} frames/s.",
        spectrogram.frame_cnt(),
        spectrogram.bin_cnt()
    );

    let curve = novelty::novelty_curve(
        &spectrogram,
        constants::NOVELTY_GAMMA,
        constants::NOVELTY_SMOOTHING,
        frame_rate,
    );
    plot_novelty(&opt.out_file, &curve, frame_rate)?;

    Ok(())
}
