use super::*;

fn paths(text: &str) -> Vec<String> {
    shell_paths(text)
}

fn shell_paths(text: &str) -> Vec<String> {
    as_strings(parse_with(text, Quoting::Shell))
}

fn windows_paths(text: &str) -> Vec<String> {
    as_strings(parse_with(text, Quoting::Windows))
}

fn as_strings(paths: Vec<PathBuf>) -> Vec<String> {
    paths
        .into_iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn plain_path_with_trailing_newline() {
    assert_eq!(paths("/tmp/report.pdf\n"), vec!["/tmp/report.pdf"]);
}

#[test]
fn single_quoted_path_keeps_spaces() {
    assert_eq!(
        paths("'/home/me/My Files/a b.txt' "),
        vec!["/home/me/My Files/a b.txt"]
    );
}

#[test]
fn backslash_escaped_spaces() {
    assert_eq!(
        paths("/Users/me/My\\ Files/a\\ b.txt"),
        vec!["/Users/me/My Files/a b.txt"]
    );
}

#[test]
fn double_quoted_path_with_escaped_backslashes() {
    assert_eq!(paths("\"C:\\\\data\\\\x.png\""), vec!["C:\\data\\x.png"]);
}

#[test]
fn file_uri_is_decoded() {
    assert_eq!(
        paths("file:///tmp/with%20space.md"),
        vec!["/tmp/with space.md"]
    );
    assert_eq!(paths("file://localhost/tmp/a.txt"), vec!["/tmp/a.txt"]);
}

#[test]
fn multiple_paths_keep_order() {
    assert_eq!(
        paths("/tmp/first.txt '/tmp/second file.txt'\n/tmp/third"),
        vec!["/tmp/first.txt", "/tmp/second file.txt", "/tmp/third"]
    );
}

#[test]
fn blank_payload_has_no_paths() {
    assert!(paths("").is_empty());
    assert!(paths("  \n\t").is_empty());
    assert!(paths("''").is_empty());
}

#[test]
fn shell_keeps_backslash_before_ordinary_characters() {
    assert_eq!(
        shell_paths(r"C:\Users\me\report.pdf"),
        vec![r"C:\Users\me\report.pdf"]
    );
    assert_eq!(
        shell_paths(r#""C:\Users\me\My Docs\report.pdf""#),
        vec![r"C:\Users\me\My Docs\report.pdf"]
    );
}

#[test]
fn windows_bare_path_keeps_separators() {
    assert_eq!(
        windows_paths("C:\\Users\\me\\report.pdf\r\n"),
        vec![r"C:\Users\me\report.pdf"]
    );
}

#[test]
fn windows_double_quoted_path_keeps_separators_and_spaces() {
    assert_eq!(
        windows_paths(r#""C:\Users\me\My Docs\report.pdf""#),
        vec![r"C:\Users\me\My Docs\report.pdf"]
    );
    assert_eq!(
        windows_paths(r#""\\server\share\a b.txt" D:\x.png"#),
        vec![r"\\server\share\a b.txt", r"D:\x.png"]
    );
}

#[test]
fn windows_apostrophe_is_part_of_the_name() {
    assert_eq!(
        windows_paths(r"C:\Users\O'Brien\notes.txt"),
        vec![r"C:\Users\O'Brien\notes.txt"]
    );
}

#[test]
fn platform_default_matches_target() {
    let expected = if cfg!(windows) {
        Quoting::Windows
    } else {
        Quoting::Shell
    };
    assert_eq!(PLATFORM_QUOTING, expected);
}
