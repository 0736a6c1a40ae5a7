//! Crate for finding the Short Time Fourier Transform of a real signal and
//! novelty curves derived from it.

use derive_more::{Add, Div, Mul, Sub};
use fft::window_fn::WindowFn;
use std::time::Duration;

/// Relating to frequency analysis ex. dtft and fft.
pub mod fft;

/// Spectral novelty (onset detection) curves.
pub mod novelty;

/// A window length. Wraps the number of samples with methods for converting to/from time.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Add, Div, Mul, Sub)]
pub struct WindowLength {
    sample_num: usize,
}

impl WindowLength {
    /// [`WindowLength`] constructor.
    #[must_use]
    pub fn from_samples(sample_num: usize) -> Self {
        WindowLength { sample_num }
    }

    /// [`WindowLength`] constructor.
    /// # Arguments
    /// - `duration`: Length of the window in time.
    /// - `sample_rate`: Samples per second.
    #[must_use]
    pub fn from_duration(duration: Duration, sample_rate: f32) -> Self {
        // secs * samples/sec = samples
        WindowLength {
            sample_num: (duration.as_secs_f32() * sample_rate) as usize,
        }
    }

    /// Getter for samples
    #[must_use]
    pub fn samples(&self) -> usize {
        self.sample_num
    }
}

/// The information required to calculate a magnitude spectrogram.
#[derive(Debug)]
pub struct SpectrogramConfig {
    window_len: WindowLength,
    // The step length used for each successive window. At most the window length.
    window_step: WindowLength,
    window_fn: WindowFn,
}

impl SpectrogramConfig {
    /// Basic constructor.
    pub fn new(window_len: WindowLength, window_step: WindowLength, window_fn: WindowFn) -> Self {
        assert!(
            window_step <= window_len,
            "Step length should not be larger than the window itself."
        );
        SpectrogramConfig {
            window_len,
            window_step,
            window_fn,
        }
    }

    /// Frames per second of the resulting spectrogram. One frame per window step.
    #[must_use]
    pub fn frame_rate(&self, sample_rate: f32) -> f32 {
        sample_rate / self.window_step.samples() as f32
    }

    /// Computes the magnitude spectrogram of `data`.
    ///
    /// Windows of `window_len` samples advance by `window_step`. Each window is
    /// weighted by the window function and transformed with a scaled real fft.
    /// An incomplete trailing window is dropped.
    #[must_use]
    pub fn compute(&self, data: &[f64]) -> Spectrogram {
        let mut frames = Vec::new();
        for window_of_data in data
            .windows(self.window_len.samples())
            .step_by(self.window_step.samples())
        {
            let mut window_of_data = window_of_data.to_owned();
            fft::window_fn::apply_window(&mut window_of_data, self.window_fn);
            frames.push(fft::scaled_magnitudes(&mut window_of_data));
        }
        Spectrogram { frames }
    }
}

/// The calculated magnitude spectrogram.
///
/// Frame major: `frames()[time][bin]`, since every consumer here walks the
/// time axis. Each frame holds `window_len/2 + 1` bins from 0 hz to Nyquist.
#[derive(Debug)]
pub struct Spectrogram {
    frames: Vec<Vec<f64>>,
}

impl Spectrogram {
    /// Number of windows of time.
    #[must_use]
    pub fn frame_cnt(&self) -> usize {
        self.frames.len()
    }

    /// Number of frequency bins per frame.
    #[must_use]
    pub fn bin_cnt(&self) -> usize {
        self.frames.first().map_or(0, Vec::len)
    }

    /// Getter for the frame major magnitude data.
    #[must_use]
    pub fn frames(&self) -> &[Vec<f64>] {
        &self.frames
    }
}
