use crate::{constants, fft_csv::XColumn};
use clap::{
    builder::{PossibleValuesParser, TypedValueParser as _},
    Args, Parser, ValueHint,
};
use log::Level;
use std::path::PathBuf;

/// Logging options.
#[derive(Args, Clone)]
pub struct LoggingOpt {
    /// The logging level to use.
    #[arg(
        short, long, default_value_t = Level::Info,
        // Needed because enum is foreign so can't use ValueEnum derive.
        value_parser = PossibleValuesParser::new(["trace", "debug", "info", "warn", "error"]).map(|s| s.parse::<Level>().unwrap()),
        ignore_case = true
    )]
    pub log_level: Level,
}

/// Download every sound file referenced by a json manifest.
#[derive(Parser, Clone)]
#[command(version)]
pub struct FetchCli {
    #[command(flatten)]
    pub log_opt: LoggingOpt,

    /// The manifest url to harvest links from.
    #[arg(short, long, default_value = constants::MANIFEST_URL)]
    pub manifest_url: String,

    /// The directory downloads are saved into.
    #[arg(short, long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub out_dir: PathBuf,
}

/// Plot one line graph per distinct channel of an fft csv table.
#[derive(Parser, Clone)]
#[command(version)]
pub struct FftCsvCli {
    #[command(flatten)]
    pub log_opt: LoggingOpt,

    /// The input csv table.
    #[arg(default_value = constants::FFT_CSV_FILE, value_hint = ValueHint::FilePath)]
    pub in_file: PathBuf,

    /// Which column of the table provides the x axis.
    #[arg(short, long, value_enum, default_value = "frequency")]
    pub x_column: XColumn,
}

/// Plot the spectral novelty (onset) curve of a wav file.
#[derive(Parser, Clone)]
#[command(version)]
pub struct NoveltyCli {
    #[command(flatten)]
    pub log_opt: LoggingOpt,

    /// The input wav file.
    #[arg(default_value = constants::NOVELTY_WAV_FILE, value_hint = ValueHint::FilePath)]
    pub in_file: PathBuf,

    /// The output image file.
    #[arg(short, long, default_value = constants::NOVELTY_PLOT_FILE, value_hint = ValueHint::FilePath)]
    pub out_file: PathBuf,
}
