use realfft::RealFftPlanner;

/// Magnitudes of the normalized real fft of `frame`.
///
/// Each element is scaled by `1/sqrt(len)` so energy is comparable across
/// window lengths. Output length is `frame.len()/2 + 1`.
pub fn scaled_magnitudes(frame: &mut [f64]) -> Vec<f64> {
    let mut real_planner = RealFftPlanner::<f64>::new();
    let r2c = real_planner.plan_fft_forward(frame.len());
    // Make output vector. `spectrum.len() == length/2 + 1`
    let mut spectrum = r2c.make_output_vec();
    // Only fails on length mismatch, which `make_output_vec` rules out.
    r2c.process(frame, &mut spectrum)
        .expect("fft input and output lengths are consistent");

    let scale_factor = 1.0 / (frame.len() as f64).sqrt();
    spectrum.iter().map(|v| v.norm() * scale_factor).collect()
}

/// Windowing functions useful for dtft analysis. See <https://en.wikipedia.org/wiki/Window_function> for details.
pub mod window_fn {
    pub type WindowFloat = f64;
    pub type WindowFn = fn(usize, usize) -> WindowFloat;
    use std::f64::consts::PI;

    /// Applies the given window function to the input data.
    pub fn apply_window(data: &mut [WindowFloat], window: WindowFn) {
        let data_len = data.len();
        for (i, elem) in data.iter_mut().enumerate() {
            *elem *= window(i, data_len);
        }
    }

    pub const fn rectangular(_n: usize, _samples: usize) -> WindowFloat {
        1.0
    }

    pub fn hann(n: usize, samples: usize) -> WindowFloat {
        const A0: WindowFloat = 0.5;
        A0 * (1.0
            - WindowFloat::cos((2.0 * PI * n as WindowFloat) / (samples as WindowFloat - 1.0)))
    }
}
