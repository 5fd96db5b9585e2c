// src/output.rs
use crate::analytics::distribution::HistogramBin;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// `path_id,s_t,discounted_payoff` rows, one per simulated path
pub fn write_samples<W: Write>(out: &mut W, samples: &[(f64, f64)]) -> io::Result<()> {
    writeln!(out, "path_id,s_t,discounted_payoff")?;
    for (i, (s_t, discounted)) in samples.iter().enumerate() {
        writeln!(out, "{},{},{}", i, s_t, discounted)?;
    }
    Ok(())
}

pub fn write_histogram<W: Write>(out: &mut W, bins: &[HistogramBin]) -> io::Result<()> {
    writeln!(out, "bin_lower,bin_upper,bin_centre,frequency")?;
    for bin in bins {
        writeln!(
            out,
            "{},{},{},{}",
            bin.lower,
            bin.upper,
            bin.centre(),
            bin.count
        )?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary_data: &[(&str, String)]) -> io::Result<()> {
    for (key, value) in summary_data {
        writeln!(out, "{},{}", key, value)?;
    }
    Ok(())
}

pub fn write_samples_to_csv<P: AsRef<Path>>(filename: P, samples: &[(f64, f64)]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_samples(&mut file, samples)?;
    file.flush()
}

pub fn write_histogram_to_csv<P: AsRef<Path>>(filename: P, bins: &[HistogramBin]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_histogram(&mut file, bins)?;
    file.flush()
}

pub fn write_summary_to_csv<P: AsRef<Path>>(
    filename: P,
    summary_data: &[(&str, String)],
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_summary(&mut file, summary_data)?;
    file.flush()
}
