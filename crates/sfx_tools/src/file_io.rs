use anyhow::Context;
use hound::{SampleFormat, WavReader, WavSpec};
use std::path::Path;

/// Read data from a wav file.
pub fn read_wav(file: &Path) -> anyhow::Result<(WavSpec, Vec<f64>)> {
    // The WAV file to decode.
    let mut reader =
        WavReader::open(file).with_context(|| format!("Invalid wav file {}", file.display()))?;
    let spec = reader.spec();
    log::trace!("Spec: {:?}", spec);
    // Select correct format representation.
    let data = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(spec.channels.into()) // Make wav mono for analysis. Ignore all but first channel.
            .map(|x| x.map(f64::from))
            .collect::<Result<_, _>>()
            .with_context(|| format!("Error reading sample of {}", file.display()))?,
        SampleFormat::Int => reader
            .samples::<i32>()
            .step_by(spec.channels.into()) // Make wav mono for analysis. Ignore all but first channel.
            .map(|x| x.map(f64::from))
            .collect::<Result<_, _>>()
            .with_context(|| format!("Error reading sample of {}", file.display()))?,
    };
    Ok((spec, data))
}
