//! Module declaration (`go.mod`) reader.
//!
//! Only the `module` directive is interpreted. Other directives must use a
//! known keyword and close their blocks; their arguments are not checked.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BumpyError, Result};

/// Directives other than `module` that may appear in a module file
const OTHER_DIRECTIVES: &[&str] = &[
    "go",
    "toolchain",
    "godebug",
    "require",
    "replace",
    "exclude",
    "retract",
];

/// File name looked up when the module path points at a directory
pub const MODULE_FILE_NAME: &str = "go.mod";

/// Resolve the module file location: directories get `go.mod` appended.
pub fn module_file_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(MODULE_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Read the declared module path.
///
/// # Returns
/// * `Ok(Some(path))` - The module path from the `module` directive
/// * `Ok(None)` - If there is no module file at all
/// * `Err` - If the file cannot be read or is malformed
pub fn read_module_path(path: &Path) -> Result<Option<String>> {
    let file = module_file_path(path);

    let contents = match fs::read_to_string(&file) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %file.display(), "No module file found, ignoring");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    parse_module_path(&contents)
        .map(Some)
        .map_err(|reason| BumpyError::module_parse(file.display().to_string(), reason))
}

/// Extract the module path from `go.mod` contents.
///
/// Accepts `module path`, `module "path"` and the block form
/// `module ( path )`. The error is a human-readable reason.
pub fn parse_module_path(contents: &str) -> std::result::Result<String, String> {
    let mut found: Option<String> = None;
    let mut lines = contents.lines().enumerate();

    while let Some((index, raw_line)) = lines.next() {
        let line_no = index + 1;
        let line = strip_comment(raw_line).trim();

        if line.is_empty() {
            continue;
        }

        let Some(rest) = directive_argument(line, "module") else {
            skip_directive(line, &mut lines, line_no)?;
            continue;
        };

        let path = if rest == "(" {
            parse_block(&mut lines, line_no)?
        } else if let Some(inner) = rest.strip_prefix('(') {
            let inner = inner
                .strip_suffix(')')
                .ok_or_else(|| format!("line {}: unterminated module block", line_no))?;
            parse_module_token(inner.trim(), line_no)?
        } else {
            parse_module_token(rest, line_no)?
        };

        if found.is_some() {
            return Err(format!("line {}: repeated module statement", line_no));
        }
        found = Some(path);
    }

    found.ok_or_else(|| "no module directive found".to_string())
}

/// Check a non-module directive and step over its block, if it opens one.
fn skip_directive<'a, I>(
    line: &str,
    lines: &mut I,
    line_no: usize,
) -> std::result::Result<(), String>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let Some((keyword, rest)) = OTHER_DIRECTIVES
        .iter()
        .find_map(|keyword| directive_argument(line, keyword).map(|rest| (*keyword, rest)))
    else {
        return Err(format!("line {}: unknown directive: {}", line_no, line));
    };

    if rest.is_empty() {
        return Err(format!("line {}: missing argument to {}", line_no, keyword));
    }
    if rest == "(" {
        for (_, raw_line) in lines.by_ref() {
            if strip_comment(raw_line).trim() == ")" {
                return Ok(());
            }
        }
        return Err(format!("line {}: unterminated {} block", line_no, keyword));
    }
    if rest.starts_with('(') && !rest.ends_with(')') {
        return Err(format!("line {}: unterminated {} block", line_no, keyword));
    }
    Ok(())
}

fn parse_block<'a, I>(lines: &mut I, start_line: usize) -> std::result::Result<String, String>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut path: Option<String> = None;

    for (index, raw_line) in lines {
        let line_no = index + 1;
        let line = strip_comment(raw_line).trim();

        if line.is_empty() {
            continue;
        }
        if line == ")" {
            return path.ok_or_else(|| format!("line {}: empty module block", start_line));
        }
        if path.is_some() {
            return Err(format!("line {}: repeated module statement", line_no));
        }
        path = Some(parse_module_token(line, line_no)?);
    }

    Err(format!("line {}: unterminated module block", start_line))
}

/// Returns the text after `keyword` when `line` is that directive.
fn directive_argument<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.is_empty() {
        return Some(rest);
    }
    if rest.starts_with(|c: char| c.is_whitespace() || c == '(') {
        return Some(rest.trim());
    }
    None
}

fn parse_module_token(token: &str, line_no: usize) -> std::result::Result<String, String> {
    let path = if let Some(quoted) = token.strip_prefix('"') {
        quoted
            .strip_suffix('"')
            .ok_or_else(|| format!("line {}: unterminated quoted module path", line_no))?
    } else if let Some(quoted) = token.strip_prefix('`') {
        quoted
            .strip_suffix('`')
            .ok_or_else(|| format!("line {}: unterminated quoted module path", line_no))?
    } else {
        token
    };

    if path.is_empty() {
        return Err(format!("line {}: usage: module module/path", line_no));
    }
    if path.chars().any(|c| c.is_whitespace() || c.is_control() || c == '"') {
        return Err(format!("line {}: invalid module path {:?}", line_no, path));
    }

    Ok(path.to_string())
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(index) => &line[..index],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_plain_module() {
        let contents = "module github.com/survivorbat/go-bumpy/v5\n\ngo 1.19\n";
        assert_eq!(
            parse_module_path(contents).unwrap(),
            "github.com/survivorbat/go-bumpy/v5"
        );
    }

    #[test]
    fn test_parse_quoted_module() {
        assert_eq!(parse_module_path("module \"example.com/m/v2\"\n").unwrap(), "example.com/m/v2");
        assert_eq!(parse_module_path("module `example.com/m`\n").unwrap(), "example.com/m");
    }

    #[test]
    fn test_parse_block_module() {
        let contents = "// leading comment\nmodule (\n    example.com/blocky/v3 // trailing\n)\n";
        assert_eq!(parse_module_path(contents).unwrap(), "example.com/blocky/v3");
        assert_eq!(parse_module_path("module (example.com/inline)\n").unwrap(), "example.com/inline");
    }

    #[test]
    fn test_parse_ignores_other_directives() {
        let contents = "\
module example.com/app

go 1.21

require (
\tgithub.com/stretchr/testify v1.8.4
\tgolang.org/x/mod v0.12.0 // indirect
)

replace example.com/old => ../old
";
        assert_eq!(parse_module_path(contents).unwrap(), "example.com/app");
    }

    #[test]
    fn test_parse_does_not_confuse_similar_keywords() {
        let err = parse_module_path("modules are great\nmodule example.com/real\n").unwrap_err();
        assert!(err.contains("line 1: unknown directive"));
    }

    #[test]
    fn test_parse_rejects_unterminated_directive_block() {
        let contents = "module example.com/m\n\ngo 1.19\n\nrequire (\n\tgithub.com/x/y v1.0.0\n";
        let err = parse_module_path(contents).unwrap_err();
        assert_eq!(err, "line 5: unterminated require block");

        assert!(parse_module_path("module example.com/m\nexclude (github.com/x/y v1.0.0\n").is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_syntax() {
        let err = parse_module_path("module example.com/m\n}}} this is not go.mod syntax {{{\n")
            .unwrap_err();
        assert!(err.contains("line 2: unknown directive"));

        assert!(parse_module_path("module example.com/m\n)\n").is_err());
        assert!(parse_module_path("module example.com/m\ngo\n").is_err());
    }

    #[test]
    fn test_parse_accepts_every_known_directive() {
        let contents = "\
module example.com/full/v2

go 1.22
toolchain go1.22.1
godebug default=go1.21

require github.com/x/y v1.0.0
exclude (
\tgithub.com/x/y v0.9.0
)
retract [v2.0.0, v2.0.1] // broken
replace (github.com/a/b => ../b)
";
        assert_eq!(parse_module_path(contents).unwrap(), "example.com/full/v2");
    }

    #[test]
    fn test_parse_missing_directive() {
        let err = parse_module_path("go 1.19\n").unwrap_err();
        assert!(err.contains("no module directive"));
    }

    #[test]
    fn test_parse_commented_out_directive() {
        assert!(parse_module_path("// module example.com/m\n").is_err());
    }

    #[test]
    fn test_parse_malformed_directives() {
        assert!(parse_module_path("module\n").is_err());
        assert!(parse_module_path("module \"example.com/m\n").is_err());
        assert!(parse_module_path("module example.com/a example.com/b\n").is_err());
        assert!(parse_module_path("module (\nexample.com/m\n").is_err());
        assert!(parse_module_path("module (\n)\n").is_err());
    }

    #[test]
    fn test_parse_repeated_directive() {
        let err = parse_module_path("module example.com/a\nmodule example.com/b\n").unwrap_err();
        assert!(err.contains("line 2"));
        assert!(err.contains("repeated"));
    }

    #[test]
    fn test_read_missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_module_path(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_read_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/m/v4\n\ngo 1.19\n").unwrap();

        assert_eq!(
            read_module_path(dir.path()).unwrap(),
            Some("example.com/m/v4".to_string())
        );
    }

    #[test]
    fn test_read_from_explicit_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("custom.mod");
        fs::write(&file, "module example.com/custom\n").unwrap();

        assert_eq!(
            read_module_path(&file).unwrap(),
            Some("example.com/custom".to_string())
        );
    }

    #[test]
    fn test_read_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "go 1.19\n").unwrap();

        let err = read_module_path(dir.path()).unwrap_err();
        assert!(matches!(err, BumpyError::ModuleParse { .. }));
        assert!(err.to_string().contains("go.mod"));
    }
}
