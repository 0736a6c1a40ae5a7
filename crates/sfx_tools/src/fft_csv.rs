use crate::constants;
use anyhow::Context;
use clap::ValueEnum;
use std::{fs::File, io, path::Path};

/// Which column of the table provides the x axis.
///
/// The two variants mirror the two layouts the table is produced with: per
/// frequency bin or per sample index.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum XColumn {
    /// The `frequency` column. The plot's x axis is clipped to 0..2000 hz.
    Frequency,
    /// The `sample` column. The x axis is left unclipped.
    Sample,
}

impl XColumn {
    /// Header name of the column in the table.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            XColumn::Frequency => "frequency",
            XColumn::Sample => "sample",
        }
    }

    /// Axis description for the plot.
    #[must_use]
    pub fn x_desc(self) -> &'static str {
        match self {
            XColumn::Frequency => "Frequency",
            XColumn::Sample => "Sample",
        }
    }

    /// X axis clip for the plot, if any.
    #[must_use]
    pub fn x_clip(self) -> Option<(f64, f64)> {
        match self {
            XColumn::Frequency => Some((0.0, constants::FREQUENCY_PLOT_MAX_HZ)),
            XColumn::Sample => None,
        }
    }
}

/// All rows of one distinct channel, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSeries {
    pub channel: String,
    /// `(x, norm)` pairs.
    pub points: Vec<(f64, f64)>,
}

/// Read the table at `path` and partition its rows by channel.
///
/// Grouping is exact equality on the channel column value. Channels appear in
/// first-seen order.
pub fn read_channel_series(path: &Path, x_column: XColumn) -> anyhow::Result<Vec<ChannelSeries>> {
    let file =
        File::open(path).with_context(|| format!("Can't open csv table {}", path.display()))?;
    parse_channel_series(file, x_column)
}

/// [`read_channel_series`] over any reader.
pub fn parse_channel_series(
    rdr: impl io::Read,
    x_column: XColumn,
) -> anyhow::Result<Vec<ChannelSeries>> {
    let mut reader = csv::Reader::from_reader(rdr);
    // Cloned so the header lookup doesn't hold the reader's borrow.
    let headers = reader.headers().context("Can't read csv headers")?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header == name)
            .with_context(|| format!("Table is missing the `{name}` column"))
    };
    let channel_idx = column("channel")?;
    let x_idx = column(x_column.header())?;
    let norm_idx = column("norm")?;

    let mut series: Vec<ChannelSeries> = Vec::new();
    for (row, record) in reader.records().enumerate() {
        // Header is line 1, first record line 2.
        let line = row + 2;
        let record = record.with_context(|| format!("Invalid csv record on line {line}"))?;
        let field = |idx: usize| {
            record
                .get(idx)
                .with_context(|| format!("Short record on line {line}"))
        };
        let channel = field(channel_idx)?;
        let x = field(x_idx)?
            .parse::<f64>()
            .with_context(|| format!("Bad `{}` value on line {line}", x_column.header()))?;
        let norm = field(norm_idx)?
            .parse::<f64>()
            .with_context(|| format!("Bad `norm` value on line {line}"))?;

        match series.iter_mut().find(|s| s.channel == channel) {
            Some(existing) => existing.points.push((x, norm)),
            None => series.push(ChannelSeries {
                channel: channel.to_owned(),
                points: vec![(x, norm)],
            }),
        }
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FREQUENCY_TABLE: &str = "\
channel,frequency,norm
0,100.0,0.5
1,100.0,0.25
0,200.0,1.0
";

    #[test]
    fn groups_by_channel_in_first_seen_order() {
        let series = parse_channel_series(FREQUENCY_TABLE.as_bytes(), XColumn::Frequency).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].channel, "0");
        assert_eq!(series[0].points, vec![(100.0, 0.5), (200.0, 1.0)]);
        assert_eq!(series[1].channel, "1");
        assert_eq!(series[1].points, vec![(100.0, 0.25)]);
    }

    #[test]
    fn distinct_channel_count_ignores_row_order() {
        let shuffled = "channel,frequency,norm\n1,100.0,0.25\n0,200.0,1.0\n0,100.0,0.5\n";
        let series = parse_channel_series(shuffled.as_bytes(), XColumn::Frequency).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn sample_variant_reads_sample_column() {
        let table = "channel,sample,norm\nleft,0,0.1\nleft,1,0.2\n";
        let series = parse_channel_series(table.as_bytes(), XColumn::Sample).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].channel, "left");
        assert_eq!(series[0].points, vec![(0.0, 0.1), (1.0, 0.2)]);
    }

    #[test]
    fn missing_x_column_is_an_error() {
        let err = parse_channel_series(FREQUENCY_TABLE.as_bytes(), XColumn::Sample).unwrap_err();
        assert!(err.to_string().contains("sample"), "{err}");
    }

    #[test]
    fn bad_number_reports_line() {
        let table = "channel,frequency,norm\n0,100.0,0.5\n0,oops,0.5\n";
        let err = parse_channel_series(table.as_bytes(), XColumn::Frequency).unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }
}
