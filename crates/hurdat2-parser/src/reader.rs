//! Storm retrieval over a forward-only line stream.
//!
//! Two modes, both strictly forward with no rewind:
//!
//! - sequential: [`StormReader::next_storm`] reads the next header and its
//!   declared block of data lines, returning `Ok(None)` at a clean end of
//!   stream;
//! - lookup: [`StormReader::find_storm`] scans line by line for one
//!   containing the requested identifier, treats it as a header, and
//!   materializes that storm.

use std::io::BufRead;

use tracing::debug;

use crate::error::{Hurdat2Error, Hurdat2Result};
use crate::record::Observation;
use crate::storm::Storm;

/// Reads storms from a HURDAT2 text stream.
pub struct StormReader<R> {
    input: R,
}

impl<R: BufRead> StormReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Sequential mode: materialize the next storm in the stream.
    ///
    /// Returns `Ok(None)` once no header line remains.
    pub fn next_storm(&mut self) -> Hurdat2Result<Option<Storm>> {
        let header = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let (id, name, count) = parse_header(&header)?;
        self.read_block(id, name, count).map(Some)
    }

    /// Lookup mode: scan forward for a line containing `storm_id`, treat
    /// it as a header, and materialize that storm.
    ///
    /// Consumes the stream up to the match; reaching end of stream first is
    /// [`Hurdat2Error::StormNotFound`].
    pub fn find_storm(&mut self, storm_id: &str) -> Hurdat2Result<Storm> {
        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Err(Hurdat2Error::StormNotFound(storm_id.to_string())),
            };
            if line.contains(storm_id) {
                let (id, name, count) = parse_header(&line)?;
                return self.read_block(id, name, count);
            }
        }
    }

    fn read_block(&mut self, id: String, name: String, count: usize) -> Hurdat2Result<Storm> {
        let mut observations = Vec::with_capacity(count);
        for line_no in 1..=count {
            let line = self.read_line()?.ok_or_else(|| Hurdat2Error::MalformedRecord {
                storm_id: id.clone(),
                line: line_no,
                reason: "unexpected end of stream".to_string(),
            })?;
            observations.push(Observation::parse(&line, &id, line_no)?);
        }
        debug!(storm_id = %id, observations = count, "parsed storm block");
        Ok(Storm {
            id,
            name,
            observations,
        })
    }

    /// Next non-empty line, without its terminator; `None` at end of stream.
    fn read_line(&mut self) -> Hurdat2Result<Option<String>> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            let line = buf.trim_end_matches(['\r', '\n']);
            if !line.trim().is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}

/// Split a header line into identifier, name, and declared record count.
fn parse_header(line: &str) -> Hurdat2Result<(String, String, usize)> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(Hurdat2Error::InvalidHeader(line.to_string()));
    }
    let count = fields[2]
        .parse::<usize>()
        .map_err(|_| Hurdat2Error::InvalidHeader(line.to_string()))?;
    Ok((fields[0].to_string(), fields[1].to_string(), count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const DATASET: &str = "\
AL011851,            UNNAMED,      2,
18510625, 0000,  , HU, 28.0N,  94.8W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
18510625, 0600,  , HU, 28.0N,  95.4W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
AL021851,            UNNAMED,      1,
18510705, 1200,  , HU, 22.2N,  97.6W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
";

    fn reader(text: &str) -> StormReader<Cursor<&str>> {
        StormReader::new(Cursor::new(text))
    }

    #[test]
    fn test_sequential_reads_all_storms_then_none() {
        let mut reader = reader(DATASET);
        let first = reader.next_storm().unwrap().unwrap();
        assert_eq!(first.id, "AL011851");
        assert_eq!(first.len(), 2);

        let second = reader.next_storm().unwrap().unwrap();
        assert_eq!(second.id, "AL021851");
        assert_eq!(second.len(), 1);

        assert!(reader.next_storm().unwrap().is_none());
    }

    #[test]
    fn test_lookup_skips_ahead() {
        let mut reader = reader(DATASET);
        let storm = reader.find_storm("AL021851").unwrap();
        assert_eq!(storm.id, "AL021851");
        assert_eq!(storm.name, "UNNAMED");
    }

    #[test]
    fn test_lookup_missing_id_is_not_found() {
        let mut reader = reader(DATASET);
        match reader.find_storm("AL991999") {
            Err(Hurdat2Error::StormNotFound(id)) => assert_eq!(id, "AL991999"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_lookup_consumes_the_stream() {
        let mut reader = reader(DATASET);
        reader.find_storm("AL021851").unwrap();
        // The scan is forward-only; earlier storms are gone.
        assert!(matches!(
            reader.find_storm("AL011851"),
            Err(Hurdat2Error::StormNotFound(_))
        ));
    }

    #[test]
    fn test_declared_count_beyond_stream_is_malformed() {
        let truncated = "AL011851,            UNNAMED,      3,\n\
            18510625, 0000,  , HU, 28.0N,  94.8W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,\n";
        let mut reader = reader(truncated);
        match reader.next_storm() {
            Err(Hurdat2Error::MalformedRecord { storm_id, line, .. }) => {
                assert_eq!(storm_id, "AL011851");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_header_with_bad_count_is_invalid() {
        let mut reader = reader("AL011851, UNNAMED, two,\n");
        assert!(matches!(
            reader.next_storm(),
            Err(Hurdat2Error::InvalidHeader(_))
        ));
    }
}
