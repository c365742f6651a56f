use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::{LineKind, ParsedRecord, SkippedLine};
use crate::error::{Error, Result};

/// Separator between the OS text and the version token on the header line
pub const HEADER_SEPARATOR: &str = " - ";

/// Number of non-blank lines after the header that hold symbols
pub const SYMBOL_LINE_COUNT: usize = 7;

/// Minimum token count of a struct/member line (hex, type, member)
const MIN_STRUCT_TOKENS: usize = 3;

/// Header line fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub os: String,
    pub version_prefix: String,
    pub build: String,
}

/// Parse the header line `<os> - <prefix>.<build>`
pub fn parse_header(line: &str) -> Result<Header> {
    let line = line.trim();

    let (os, version) = line
        .split_once(HEADER_SEPARATOR)
        .ok_or_else(|| Error::MalformedHeader(line.to_string()))?;

    // A version without any period has no prefix to aggregate under
    let (version_prefix, build) = version
        .rsplit_once('.')
        .ok_or_else(|| Error::MalformedHeader(line.to_string()))?;

    Ok(Header {
        os: os.to_string(),
        version_prefix: version_prefix.to_string(),
        build: build.to_string(),
    })
}

/// Parse `<hex> <name>`
pub fn parse_symbol_line(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(hex), Some(name), None) => Some((hex, name)),
        _ => None,
    }
}

/// Parse `<hex> <tokens...> <member>`, ignoring the middle tokens
pub fn parse_struct_line(line: &str) -> Option<(&str, &str)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_STRUCT_TOKENS {
        return None;
    }
    Some((tokens[0], tokens[tokens.len() - 1]))
}

/// Parse the full contents of an `info.txt` file
///
/// Fails only on an empty input or a malformed header. Malformed content lines are
/// recorded in [`ParsedRecord::skipped`] and parsing continues.
pub fn parse_info(contents: &str) -> Result<ParsedRecord> {
    let mut lines = contents.lines();
    let header = parse_header(lines.next().ok_or(Error::EmptyFile)?)?;

    let content_lines: Vec<&str> = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let (symbol_lines, struct_lines) =
        content_lines.split_at(content_lines.len().min(SYMBOL_LINE_COUNT));

    let mut record = ParsedRecord {
        version_prefix: header.version_prefix,
        build: header.build,
        os: header.os,
        ..Default::default()
    };

    for line in symbol_lines {
        match parse_symbol_line(line) {
            Some((hex, name)) => record
                .symbols
                .entry(name.to_string())
                .or_default()
                .push(hex.to_string()),
            None => record.skipped.push(SkippedLine::new(LineKind::Symbol, line)),
        }
    }

    for line in struct_lines {
        match parse_struct_line(line) {
            Some((hex, member)) => record
                .structs
                .entry(member.to_string())
                .or_default()
                .push(hex.to_string()),
            None => record.skipped.push(SkippedLine::new(LineKind::Struct, line)),
        }
    }

    Ok(record)
}

/// Read and parse an `info.txt` file, logging every skipped line
pub fn parse_info_file<P: AsRef<Path>>(path: P) -> Result<ParsedRecord> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| Error::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let record = parse_info(&contents)?;
    for skipped in &record.skipped {
        warn!("Skipping line in {}: {}", path.display(), skipped.to_error());
    }

    debug!(
        "Parsed {}: os={}, version={}, {} symbol values, {} member values",
        path.display(),
        record.os,
        record.version(),
        record.symbol_value_count(),
        record.struct_value_count()
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Program Info - 1.2.345
0xFEEDFACE Some_Global_Symbol
0xDEADBEEF Another_Symbol
0x00000000 Symbol_Three
0x11111111 Symbol_Four
0x22222222 Symbol_Five
0x33333333 Symbol_Six
0x44444444 Symbol_Seven
0x00000004 StructName member_one
0x00000008 OtherStruct member_two
0x0000000C StructName member_three
";

    #[test]
    fn test_parse_header() {
        let header = parse_header("  Windows 11 24H2 - 10.0.26100.1742  ").unwrap();
        assert_eq!(header.os, "Windows 11 24H2");
        assert_eq!(header.version_prefix, "10.0.26100");
        assert_eq!(header.build, "1742");
    }

    #[test]
    fn test_parse_header_splits_on_first_separator_only() {
        let header = parse_header("A - B - 3.4").unwrap();
        assert_eq!(header.os, "A");
        assert_eq!(header.version_prefix, "B - 3");
        assert_eq!(header.build, "4");
    }

    #[test]
    fn test_parse_header_without_separator() {
        let err = parse_header("Program Info 1.2.345").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));

        // Hyphen without surrounding spaces is not a separator
        let err = parse_header("Program-1.2.345").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_parse_header_without_period() {
        let err = parse_header("Program - 12345").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_parse_symbol_line() {
        assert_eq!(parse_symbol_line("0x10  Foo"), Some(("0x10", "Foo")));
        assert_eq!(parse_symbol_line("0x10"), None);
        assert_eq!(parse_symbol_line("0x10 int Foo"), None);
    }

    #[test]
    fn test_parse_struct_line() {
        assert_eq!(parse_struct_line("0x10 T member_x"), Some(("0x10", "member_x")));
        assert_eq!(
            parse_struct_line("0x18 unsigned long long\tmember_y"),
            Some(("0x18", "member_y"))
        );
        assert_eq!(parse_struct_line("0x10 member_x"), None);
    }

    #[test]
    fn test_parse_info() {
        let record = parse_info(SAMPLE).unwrap();

        assert_eq!(record.os, "Program Info");
        assert_eq!(record.version_prefix, "1.2");
        assert_eq!(record.build, "345");
        assert_eq!(record.version(), "1.2.345");
        assert_eq!(record.symbols.len(), 7);
        assert_eq!(record.symbols["Some_Global_Symbol"], vec!["0xFEEDFACE"]);
        assert_eq!(record.structs.len(), 3);
        assert_eq!(record.structs["member_two"], vec!["0x00000008"]);
        assert!(record.skipped.is_empty());
    }

    #[test]
    fn test_parse_info_empty() {
        assert!(matches!(parse_info(""), Err(Error::EmptyFile)));
    }

    #[test]
    fn test_parse_info_blank_header() {
        assert!(matches!(parse_info("\n"), Err(Error::MalformedHeader(_))));
    }

    #[test]
    fn test_parse_info_header_only() {
        let record = parse_info("Win - 1.2.100").unwrap();
        assert!(record.symbols.is_empty());
        assert!(record.structs.is_empty());
    }

    #[test]
    fn test_blank_lines_do_not_count_toward_symbols() {
        let contents = "Win - 1.2.100\n\n0x1 A\n   \n0x2 B\n0x3 C\n\n0x4 D\n0x5 E\n0x6 F\n\n0x7 G\n\n0x10 T member_x\r\n";
        let record = parse_info(contents).unwrap();
        assert_eq!(record.symbols.len(), 7);
        assert_eq!(record.structs["member_x"], vec!["0x10"]);
        assert!(record.skipped.is_empty());
    }

    #[test]
    fn test_symbol_cutoff_is_positional() {
        // The eighth line looks like a symbol but sits in the member section
        let contents = "Win - 1.2.100\n0x1 A\n0x2 B\n0x3 C\n0x4 D\n0x5 E\n0x6 F\n0x7 G\n0x8 H\n";
        let record = parse_info(contents).unwrap();
        assert_eq!(record.symbols.len(), 7);
        assert!(!record.symbols.contains_key("H"));
        assert!(record.structs.is_empty());
        assert_eq!(record.skipped, vec![SkippedLine::new(LineKind::Struct, "0x8 H")]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let contents = "Win - 1.2.100\n0x1 A\nbogus\n0x3 C extra\n0x4 D\n0x5 E\n0x6 F\n0x7 G\n0x10 T m\n0x11 n\n";
        let record = parse_info(contents).unwrap();

        assert_eq!(record.symbols.len(), 5);
        assert_eq!(record.structs.len(), 1);
        assert_eq!(record.skipped.len(), 3);
        assert_eq!(record.skipped[0].kind, LineKind::Symbol);
        assert_eq!(record.skipped[1].line, "0x3 C extra");
        assert!(matches!(
            record.skipped[2].to_error(),
            Error::MalformedStructLine(ref line) if line == "0x11 n"
        ));
        assert_eq!(
            record.skipped[0].to_error().to_string(),
            "Malformed symbol line: 'bogus'"
        );
    }

    #[test]
    fn test_repeated_names_within_file_keep_order() {
        let contents = "Win - 1.2.100\n0x1 A\n0x2 A\n0x3 C\n0x4 D\n0x5 E\n0x6 F\n0x7 G\n0x20 T m\n0x10 U m\n";
        let record = parse_info(contents).unwrap();
        assert_eq!(record.symbols["A"], vec!["0x1", "0x2"]);
        assert_eq!(record.structs["m"], vec!["0x20", "0x10"]);
    }

    #[test]
    fn test_version_reconstructs_token() {
        for token in ["10.0.26100.1", "1.2.3", "a.b", "4..5"] {
            let record = parse_info(&format!("OS - {}", token)).unwrap();
            assert_eq!(record.version(), token);
        }
    }

    #[test]
    fn test_parse_info_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.txt");
        fs::write(&path, SAMPLE).unwrap();

        let record = parse_info_file(&path).unwrap();
        assert_eq!(record.version_prefix, "1.2");
    }

    #[test]
    fn test_parse_info_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_info_file(dir.path().join("info.txt")).unwrap_err();
        assert!(matches!(err, Error::FileUnreadable { .. }));
        assert!(err.is_not_found());
    }
}
