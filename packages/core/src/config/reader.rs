//! Hosts configuration reader
//!
//! Parses the line-oriented SSH deployment config format. Each data line
//! carries 5 comma-separated fields (id, host, ssh options, working dir,
//! agent count); only the host field is kept. Regions between
//! `@bash_begin@` and `@bash_end@` hold inline setup script and are
//! skipped wholesale.

use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Marker line opening a skip block
pub const SKIP_BEGIN_MARKER: &str = "@bash_begin@";

/// Marker line closing a skip block
pub const SKIP_END_MARKER: &str = "@bash_end@";

/// Field count every data line must have
const DATA_LINE_FIELDS: usize = 5;

/// Zero-based index of the host column
const HOST_FIELD: usize = 1;

/// Read the ordered host list from a configuration file
///
/// Fatal on I/O failure and on the first malformed data line; never
/// returns a partial list.
pub fn read_hosts(path: &Path) -> Result<Vec<String>, ConfigError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let hosts = parse_hosts(&contents)?;

    tracing::debug!("Read {} hosts from {}", hosts.len(), path.display());
    Ok(hosts)
}

/// Scan config contents into the ordered host list
///
/// Each line is trimmed, then classified in priority order: skip-block
/// begin marker, skip-block end marker, comment or blank, data line.
/// Lines inside a skip block are ignored regardless of content, even
/// ones that would not parse as data lines. Duplicate hosts are kept and
/// dispatched as often as they appear.
pub fn parse_hosts(contents: &str) -> Result<Vec<String>, ConfigError> {
    let mut hosts = Vec::new();
    let mut skip = false;

    for raw in contents.lines() {
        let line = raw.trim();
        if line.starts_with(SKIP_BEGIN_MARKER) {
            skip = true;
        } else if line.starts_with(SKIP_END_MARKER) {
            skip = false;
        } else if line.is_empty() || line.starts_with('#') {
            continue;
        } else {
            if skip {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != DATA_LINE_FIELDS {
                return Err(ConfigError::MalformedLine(line.to_string()));
            }
            hosts.push(fields[HOST_FIELD].trim().to_string());
        }
    }

    Ok(hosts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_lines_yield_hosts_in_order() {
        let hosts = parse_hosts("a,host1,b,c,d\ne,host2,f,g,h\n").unwrap();
        assert_eq!(hosts, ["host1", "host2"]);
    }

    #[test]
    fn test_host_field_is_trimmed() {
        let hosts = parse_hosts(" a , host1 ,b,c,d\n").unwrap();
        assert_eq!(hosts, ["host1"]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let hosts = parse_hosts("a,host1,b,c,d\ne,host1,f,g,h\n").unwrap();
        assert_eq!(hosts, ["host1", "host1"]);
    }

    #[test]
    fn test_comments_and_blanks_are_ignored() {
        let contents = "# header comment\n\n   \na,host1,b,c,d\n# trailing comment\n";
        let hosts = parse_hosts(contents).unwrap();
        assert_eq!(hosts, ["host1"]);
    }

    #[test]
    fn test_empty_contents_yield_empty_list() {
        assert!(parse_hosts("").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_only_contents_yield_empty_list() {
        assert!(parse_hosts("  \n\t\n   \n").unwrap().is_empty());
    }

    #[test]
    fn test_skip_block_excludes_enclosed_data_lines() {
        let contents = "\
a,host1,b,c,d
@bash_begin@
e,host2,f,g,h
@bash_end@
i,host3,j,k,l
";
        let hosts = parse_hosts(contents).unwrap();
        assert_eq!(hosts, ["host1", "host3"]);
    }

    #[test]
    fn test_skip_block_ignores_malformed_lines() {
        // Skip wins over field validation
        let contents = "\
@bash_begin@
export PATH=/opt/tools/bin:$PATH
source setup.sh
@bash_end@
a,host1,b,c,d
";
        let hosts = parse_hosts(contents).unwrap();
        assert_eq!(hosts, ["host1"]);
    }

    #[test]
    fn test_comment_inside_skip_block_is_harmless() {
        let contents = "@bash_begin@\n# inline note\n@bash_end@\na,host1,b,c,d\n";
        let hosts = parse_hosts(contents).unwrap();
        assert_eq!(hosts, ["host1"]);
    }

    #[test]
    fn test_marker_with_trailing_text_still_toggles() {
        // Markers match by prefix
        let contents = "@bash_begin@ setup\na,host1,b,c,d\n@bash_end@ done\ne,host2,f,g,h\n";
        let hosts = parse_hosts(contents).unwrap();
        assert_eq!(hosts, ["host2"]);
    }

    #[test]
    fn test_end_marker_without_begin_is_harmless() {
        let hosts = parse_hosts("@bash_end@\na,host1,b,c,d\n").unwrap();
        assert_eq!(hosts, ["host1"]);
    }

    #[test]
    fn test_four_fields_fail_naming_the_line() {
        let err = parse_hosts("a,host1,b,c\n").unwrap_err();
        match err {
            ConfigError::MalformedLine(line) => assert_eq!(line, "a,host1,b,c"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_six_fields_fail_naming_the_line() {
        let err = parse_hosts("a,host1,b,c,d,e\n").unwrap_err();
        match err {
            ConfigError::MalformedLine(line) => assert_eq!(line, "a,host1,b,c,d,e"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_line_aborts_whole_read() {
        // No partial results: hosts before the bad line are dropped too
        let result = parse_hosts("a,host1,b,c,d\nbad,line\ne,host2,f,g,h\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display_contains_offending_line() {
        let err = parse_hosts("not enough fields\n").unwrap_err();
        assert!(err.to_string().contains("not enough fields"));
    }

    #[test]
    fn test_trailing_comma_counts_as_empty_fifth_field() {
        // "a,host1,b,c," splits into 5 fields, the last one empty
        let hosts = parse_hosts("a,host1,b,c,\n").unwrap();
        assert_eq!(hosts, ["host1"]);
    }

    #[test]
    fn test_marker_token_in_host_column_is_plain_data() {
        // Only a line *starting* with the marker toggles skip mode
        let hosts = parse_hosts("a,@bash_begin@,b,c,d\n").unwrap();
        assert_eq!(hosts, ["@bash_begin@"]);
    }

    #[test]
    fn test_read_hosts_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts.cfg");
        std::fs::write(&path, "wn0, node0.example.org, , /tmp/wrk, 2\n").unwrap();

        let hosts = read_hosts(&path).unwrap();
        assert_eq!(hosts, ["node0.example.org"]);
    }

    #[test]
    fn test_read_hosts_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.cfg");

        let err = read_hosts(&path).unwrap_err();
        match err {
            ConfigError::Io(msg) => assert!(msg.contains("does-not-exist.cfg")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
