//! Five-line report writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sepia_align::Alignment;
use sepia_core::{Result, SepiaError};

/// Everything the output file carries: the alignment plus two diagnostic
/// measurements that are outside the correctness contract.
#[derive(Debug)]
pub struct Report {
    pub alignment: Alignment,
    /// Wall-clock time of the generate-and-align phase, in milliseconds.
    pub elapsed_ms: f64,
    /// Peak-RSS growth over the same phase, in kilobytes.
    pub memory_delta_kb: i64,
}

impl Report {
    /// Write the report: cost, aligned A, aligned B, elapsed ms, memory KB,
    /// one per line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            SepiaError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{}", self.alignment.cost)?;
        out.write_all(&self.alignment.aligned_a)?;
        writeln!(out)?;
        out.write_all(&self.alignment.aligned_b)?;
        writeln!(out)?;
        writeln!(out, "{:.6}", self.elapsed_ms)?;
        writeln!(out, "{}", self.memory_delta_kb)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_five_lines() {
        let report = Report {
            alignment: Alignment {
                cost: 60,
                aligned_a: b"AG_".to_vec(),
                aligned_b: b"A_C".to_vec(),
            },
            elapsed_ms: 1.25,
            memory_delta_kb: 128,
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        report.write_to(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "60");
        assert_eq!(lines[1], "AG_");
        assert_eq!(lines[2], "A_C");
        assert_eq!(lines[3], "1.250000");
        assert_eq!(lines[4], "128");
    }
}
