//! Spectral novelty curve highlighting onset-like energy increases.
//!
//! The construction is the standard spectral flux one: log-magnitude
//! compression, half-wave rectified time differences summed over bins,
//! local-average subtraction, then normalization by the maximum.

use crate::Spectrogram;
use log::warn;
use std::time::Duration;

/// Log compression `ln(1 + gamma*|X|)` of every magnitude.
///
/// Larger `gamma` raises the prominence of low energy (usually high frequency)
/// content relative to dominant partials.
#[must_use]
pub fn log_compress(spectrogram: &Spectrogram, gamma: f64) -> Vec<Vec<f64>> {
    spectrogram
        .frames()
        .iter()
        .map(|frame| {
            frame
                .iter()
                .map(|&magnitude| (1.0 + gamma * magnitude).ln())
                .collect()
        })
        .collect()
}

/// Half-wave rectified spectral flux of frame major data.
///
/// The first-order difference along time is clamped at zero per bin (energy
/// decreases are discarded) and summed over bins per frame. A trailing zero
/// restores the input frame count.
#[must_use]
pub fn spectral_flux(frames: &[Vec<f64>]) -> Vec<f64> {
    let mut flux = frames
        .windows(2)
        .map(|pair| {
            pair[0]
                .iter()
                .zip(pair[1].iter())
                .map(|(&curr, &next)| (next - curr).max(0.0))
                .sum()
        })
        .collect::<Vec<f64>>();
    if !frames.is_empty() {
        flux.push(0.0);
    }
    flux
}

/// Centered moving average over a `2m+1` sample window.
///
/// The window truncates at the sequence boundaries but the divisor stays
/// `2m+1`, so the first and last `m` values are biased low. That bias is kept
/// for output compatibility with the reference curves.
#[must_use]
pub fn local_average(data: &[f64], m: usize) -> Vec<f64> {
    let divisor = (2 * m + 1) as f64;
    (0..data.len())
        .map(|i| {
            let lo = i.saturating_sub(m);
            let hi = (i + m + 1).min(data.len());
            data[lo..hi].iter().sum::<f64>() / divisor
        })
        .collect()
}

/// Frame count covering `duration` at `frame_rate` frames per second, rounded up.
#[must_use]
pub fn smoothing_frames(duration: Duration, frame_rate: f32) -> usize {
    (duration.as_secs_f32() * frame_rate).ceil() as usize
}

/// Scale `data` so its maximum is 1.
///
/// An identically zero input is returned unchanged as a zero curve rather than
/// dividing by zero. Happens for pure silence.
#[must_use]
pub fn normalize_by_max(mut data: Vec<f64>) -> Vec<f64> {
    let max = data.iter().fold(0.0f64, |acc, &x| acc.max(x));
    if max > 0.0 {
        for x in &mut data {
            *x /= max;
        }
    } else if !data.is_empty() {
        warn!("Novelty curve is identically zero. Skipping normalization.");
    }
    data
}

/// The full novelty pipeline over a magnitude spectrogram.
///
/// Log compression with `gamma`, rectified spectral flux, subtraction of the
/// local average over a centered window covering `2 * smoothing` of time
/// (clamped at zero), then normalization by the maximum. Output length equals
/// the spectrogram's frame count.
#[must_use]
pub fn novelty_curve(
    spectrogram: &Spectrogram,
    gamma: f64,
    smoothing: Duration,
    frame_rate: f32,
) -> Vec<f64> {
    let compressed = log_compress(spectrogram, gamma);
    let mut flux = spectral_flux(&compressed);

    let m = smoothing_frames(smoothing, frame_rate);
    let average = local_average(&flux, m);
    for (x, avg) in flux.iter_mut().zip(average.iter()) {
        *x = (*x - avg).max(0.0);
    }

    normalize_by_max(flux)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fft::window_fn, SpectrogramConfig, WindowLength};

    const SAMPLE_RATE: f32 = 8000.0;
    const WINDOW_LEN: usize = 256;
    const WINDOW_STEP: usize = WINDOW_LEN / 4;

    fn config() -> SpectrogramConfig {
        let window_len = WindowLength::from_samples(WINDOW_LEN);
        SpectrogramConfig::new(window_len, window_len / 4, window_fn::hann)
    }

    #[test]
    fn silence_gives_all_zero_raw_novelty() {
        let data = vec![0.0; 8192];
        let spectrogram = config().compute(&data);

        let compressed = log_compress(&spectrogram, 100.0);
        let flux = spectral_flux(&compressed);

        assert_eq!(flux.len(), spectrogram.frame_cnt());
        assert!(flux.iter().all(|&x| x == 0.0));

        // The normalized curve of silence is the zero curve, not NaN.
        let curve = normalize_by_max(flux);
        assert!(curve.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn impulse_peaks_at_its_frame() {
        const IMPULSE_SAMPLE: usize = 4096;
        let mut data = vec![0.0; 8192];
        data[IMPULSE_SAMPLE] = 1.0;

        let config = config();
        let frame_rate = config.frame_rate(SAMPLE_RATE);
        let spectrogram = config.compute(&data);
        let curve = novelty_curve(
            &spectrogram,
            100.0,
            Duration::from_millis(100),
            frame_rate,
        );
        assert_eq!(curve.len(), spectrogram.frame_cnt());

        // Frames [first_frame, last_frame] are the ones whose window contains
        // the impulse sample. The flux difference between frames i and i+1 is
        // stored at index i, so the peak may land one frame before the first
        // containing frame.
        let last_frame = IMPULSE_SAMPLE / WINDOW_STEP;
        let first_frame = (IMPULSE_SAMPLE - WINDOW_LEN) / WINDOW_STEP;

        let (peak_frame, &peak) = curve
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();
        assert_eq!(peak, 1.0, "Normalization should make the peak exactly 1.");
        assert!(
            (first_frame..=last_frame).contains(&peak_frame),
            "Peak at frame {peak_frame} outside impulse frames {first_frame}..={last_frame}."
        );

        // Flux is zero away from the impulse, and subtracting the local
        // average can only lower it, so the curve is exactly zero there.
        for (frame, &x) in curve.iter().enumerate() {
            if frame + 2 < first_frame || frame > last_frame + 2 {
                assert_eq!(x, 0.0, "Nonzero novelty {x} at quiet frame {frame}.");
            }
        }
    }

    #[test]
    fn spectral_flux_discards_energy_decreases() {
        let rising = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        assert_eq!(spectral_flux(&rising), vec![4.0, 0.0]);

        let falling = vec![vec![2.0, 3.0], vec![0.0, 1.0]];
        assert_eq!(spectral_flux(&falling), vec![0.0, 0.0]);

        assert_eq!(spectral_flux(&[]), Vec::<f64>::new());
    }

    #[test]
    fn local_average_keeps_fixed_divisor_at_edges() {
        let data = vec![1.0; 5];
        let average = local_average(&data, 1);
        assert_eq!(average.len(), data.len());
        // Interior windows are full, edge windows are clipped to 2 samples but
        // still divided by 3.
        assert_eq!(average[1], 1.0);
        assert_eq!(average[2], 1.0);
        assert_eq!(average[3], 1.0);
        assert!((average[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((average[4] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_scales_max_to_one() {
        assert_eq!(normalize_by_max(vec![0.0, 2.0, 4.0]), vec![0.0, 0.5, 1.0]);
        assert_eq!(normalize_by_max(Vec::new()), Vec::<f64>::new());
    }

    #[test]
    fn smoothing_duration_rounds_up_to_frames() {
        // 44.1kHz with a hop of 512 samples is ~86.13 frames per second.
        let frame_rate = 44100.0 / 512.0;
        assert_eq!(smoothing_frames(Duration::from_millis(100), frame_rate), 9);
        assert_eq!(smoothing_frames(Duration::ZERO, frame_rate), 0);
    }
}
