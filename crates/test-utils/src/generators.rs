//! Generators for synthetic HURDAT2 text.
//!
//! These assemble well-formed lines from parts so tests can build exactly
//! the dataset shape they need without hand-aligning columns.

/// Build a storm header line: `ID,NAME,COUNT,`.
///
/// # Example
///
/// ```
/// use test_utils::header_line;
///
/// let header = header_line("AL011851", "UNNAMED", 2);
/// assert_eq!(header, "AL011851, UNNAMED, 2,");
/// ```
pub fn header_line(id: &str, name: &str, count: usize) -> String {
    format!("{id}, {name}, {count},")
}

/// Build a data line with the three standard radius tiers.
///
/// `flag` is the record identifier field (empty string for none); each
/// radius tier is `[ne, se, sw, nw]` in nautical miles, with −999 for
/// "not recorded".
#[allow(clippy::too_many_arguments)]
pub fn data_line(
    date: &str,
    time: &str,
    flag: &str,
    status: &str,
    lat: &str,
    lon: &str,
    wind: i32,
    pressure: i32,
    r34: [i32; 4],
    r50: [i32; 4],
    r64: [i32; 4],
) -> String {
    let radii: Vec<String> = [r34, r50, r64]
        .iter()
        .flat_map(|tier| tier.iter().map(|v| v.to_string()))
        .collect();
    format!(
        "{date}, {time}, {flag}, {status}, {lat}, {lon}, {wind}, {pressure}, {},",
        radii.join(", ")
    )
}

/// Build a data line whose radii are all unrecorded (−999).
pub fn sparse_data_line(
    date: &str,
    time: &str,
    flag: &str,
    status: &str,
    lat: &str,
    lon: &str,
    wind: i32,
) -> String {
    let unrecorded = [-999; 4];
    data_line(
        date, time, flag, status, lat, lon, wind, -999, unrecorded, unrecorded, unrecorded,
    )
}

/// Assemble a full storm block from a header and its data lines.
pub fn storm_block(id: &str, name: &str, data_lines: &[String]) -> String {
    let mut block = header_line(id, name, data_lines.len());
    block.push('\n');
    for line in data_lines {
        block.push_str(line);
        block.push('\n');
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_line_field_count() {
        let line = sparse_data_line("18510625", "0000", "", "HU", "28.0N", "94.8W", 80);
        // 8 leading fields + 12 radii + trailing empty field.
        assert_eq!(line.split(',').count(), 21);
    }

    #[test]
    fn test_storm_block_layout() {
        let lines = vec![
            sparse_data_line("18510625", "0000", "", "HU", "28.0N", "94.8W", 80),
            sparse_data_line("18510625", "0600", "L", "HU", "28.0N", "95.4W", 80),
        ];
        let block = storm_block("AL011851", "UNNAMED", &lines);
        assert!(block.starts_with("AL011851, UNNAMED, 2,\n"));
        assert_eq!(block.lines().count(), 3);
    }
}
