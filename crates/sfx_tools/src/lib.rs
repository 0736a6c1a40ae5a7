/// Arguments for the various binaries.
/// This is compartmentalized to a module because the binaries share most of their argument requirements.
pub mod args;

/// Defaults mirroring the values the original scripts hard-code.
pub mod constants;

/// Reading the fft csv table into per channel series.
pub mod fft_csv;

/// Simple helper functions for reading files.
pub mod file_io;

/// Plotting functionality.
pub mod plotting;
