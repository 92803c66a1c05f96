use super::*;

#[test]
fn api_base_trims_trailing_slashes() {
    let base = ApiBase::parse("http://localhost:8080//").unwrap();
    assert_eq!(base.as_str(), "http://localhost:8080");
    assert_eq!(base.files_url(), "http://localhost:8080/files");
    assert_eq!(base.upload_url(), "http://localhost:8080/upload");
}

#[test]
fn api_base_keeps_path_prefix() {
    let base = ApiBase::parse("https://example.com/storage").unwrap();
    assert_eq!(base.files_url(), "https://example.com/storage/files");
}

#[test]
fn api_base_rejects_non_http_schemes() {
    assert!(matches!(
        ApiBase::parse("ftp://example.com"),
        Err(ApiBaseError::UnsupportedScheme(_))
    ));
    assert!(matches!(
        ApiBase::parse("not a url"),
        Err(ApiBaseError::Invalid { .. })
    ));
}

#[test]
fn default_api_base_is_localhost() {
    assert_eq!(ApiBase::default().as_str(), DEFAULT_API_BASE);
}

#[test]
fn download_url_encodes_space_and_slash() {
    let base = ApiBase::default();
    assert_eq!(
        base.download_url("my report/v2.pdf"),
        "http://localhost:8080/download/my%20report%2Fv2.pdf"
    );
    assert_eq!(
        base.delete_url("a b"),
        "http://localhost:8080/delete/a%20b"
    );
}

#[test]
fn encoding_matches_uri_component_rules() {
    assert_eq!(encode_name("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    assert_eq!(encode_name("a+b&c=d?e#f"), "a%2Bb%26c%3Dd%3Fe%23f");
    assert_eq!(encode_name("файл.txt"), "%D1%84%D0%B0%D0%B9%D0%BB.txt");
}

#[test]
fn encoded_name_round_trips() {
    let base = ApiBase::default();
    for name in [
        "plain.txt",
        "with space.md",
        "slash/inside",
        "back\\slash",
        "..",
        "100% done?.png",
        "файл 1.doc",
    ] {
        let url = base.download_url(name);
        let segment = url.rsplit('/').next().unwrap();
        assert_eq!(decode_name(segment).as_deref(), Some(name));

        let url = base.delete_url(name);
        let segment = url.strip_prefix("http://localhost:8080/delete/").unwrap();
        assert_eq!(decode_name(segment).as_deref(), Some(name));
    }
}

#[test]
fn list_response_missing_files_is_empty() {
    let parsed: FileListResponse = serde_json::from_str("{}").unwrap();
    assert!(parsed.into_names().is_empty());

    let parsed: FileListResponse = serde_json::from_str(r#"{"files":null}"#).unwrap();
    assert!(parsed.into_names().is_empty());
}

#[test]
fn list_response_preserves_order() {
    let parsed: FileListResponse =
        serde_json::from_str(r#"{"files":["b.png","a.txt","c"],"extra":1}"#).unwrap();
    assert_eq!(parsed.into_names(), vec!["b.png", "a.txt", "c"]);
}

#[test]
fn transfer_errors_have_fixed_messages() {
    assert_eq!(TransferError::Fetch.to_string(), "failed to load the file list");
    assert_eq!(TransferError::Upload.to_string(), "failed to upload the file");
    assert_eq!(TransferError::Download.to_string(), "failed to download the file");
    assert_eq!(TransferError::Delete.to_string(), "failed to delete the file");
}
