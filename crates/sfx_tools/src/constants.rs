use std::time::Duration;

// Defaults that mirror the original scripts' hard-coded values. All of them
// are overridable on the command line.
pub const MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/JstrisPlus/jstris-plus-assets/main/presets/soundPresets.json";
pub const FFT_CSV_FILE: &str = "fft.csv";
pub const NOVELTY_WAV_FILE: &str = "rick_input.wav";
pub const NOVELTY_PLOT_FILE: &str = "input_signal.png";

// Analysis parameters.
pub const NOVELTY_WINDOW_LEN: usize = 2048;
pub const NOVELTY_GAMMA: f64 = 100.0;
pub const NOVELTY_SMOOTHING: Duration = Duration::from_millis(100);
pub const FREQUENCY_PLOT_MAX_HZ: f64 = 2000.0;
