use std::io::Write;

use pretty_assertions::assert_eq;
use station_summary::{
    Config, SummaryError, TrailingRecord, engine::GenerateOptions, engine::write_measurements,
    summarize_bytes, summarize_path, summarize_reader,
};
use tempfile::NamedTempFile;

const SAMPLE: &str = "Marseille;-20.4
Yakutsk;-0.1
Ouagadougou;38.3
Palmerston North;23.2
Copenhagen;-9.2
Marseille;12.0
Yakutsk;0.0
Ouagadougou;40.1
Copenhagen;3.3
Yakutsk;0.0
";

fn cfg(capacity: usize) -> Config {
    Config::builder().buffer_capacity(capacity).build().unwrap()
}

fn file_with(contents: &[u8]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn summarizes_a_file_on_disk() {
    let f = file_with(SAMPLE.as_bytes());
    let out = summarize_path(f.path(), &cfg(32)).unwrap();
    assert_eq!(
        out,
        "Copenhagen=-9.2/-3.0/3.3, Marseille=-20.4/-4.2/12.0, Ouagadougou=38.3/39.2/40.1, \
         Palmerston North=23.2/23.2/23.2, Yakutsk=-0.1/0.0/0.0"
    );
}

#[test]
fn chunk_size_never_changes_the_result() {
    let mut data = Vec::new();
    let opts = GenerateOptions {
        rows: 5_000,
        stations: 26,
        seed: Some(11),
    };
    write_measurements(&mut data, &opts).unwrap();

    let longest = data.split(|&b| b == b'\n').map(<[u8]>::len).max().unwrap() + 1;
    let expected = summarize_reader(&data[..], &cfg(data.len())).unwrap().render();
    assert!(!expected.is_empty());

    // same records, last one without its line-break
    let unterminated = &data[..data.len() - 1];

    for capacity in (longest..longest + 40).chain([97, 1024, 4096]) {
        let got = summarize_reader(&data[..], &cfg(capacity)).unwrap().render();
        assert_eq!(got, expected, "capacity {capacity}");
        let got = summarize_reader(unterminated, &cfg(capacity)).unwrap().render();
        assert_eq!(got, expected, "unterminated, capacity {capacity}");
    }
    let exact = summarize_reader(unterminated, &cfg(unterminated.len()))
        .unwrap()
        .render();
    assert_eq!(exact, expected);
}

#[test]
fn unterminated_record_exactly_filling_the_buffer() {
    assert_eq!(
        summarize_reader(&b"X;5.0"[..], &cfg(5)).unwrap().render(),
        "X=5.0/5.0/5.0"
    );
    assert_eq!(summarize_bytes(b"X;5.0").unwrap(), "X=5.0/5.0/5.0");
    assert_eq!(
        summarize_bytes(b"A;1.0\nB;2.0").unwrap(),
        "A=1.0/1.0/1.0, B=2.0/2.0/2.0"
    );
}

#[test]
fn record_split_across_reads_matches_single_read() {
    let input = b"Hamburg;12.0\nBulawayo;8.9\nHamburg;34.2\n";
    let whole = summarize_reader(&input[..], &cfg(input.len())).unwrap();
    let split = summarize_reader(&input[..], &cfg(15)).unwrap();
    assert_eq!(whole.stations(), split.stations());
    assert!(split.chunks() > whole.chunks());
}

#[test]
fn empty_file_gives_empty_summary() {
    let f = file_with(b"");
    assert_eq!(summarize_path(f.path(), &cfg(16)).unwrap(), "");
}

#[test]
fn trailing_record_policy() {
    let input = b"A;1.0\nB;2.0";
    assert_eq!(
        summarize_reader(&input[..], &cfg(64)).unwrap().render(),
        "A=1.0/1.0/1.0, B=2.0/2.0/2.0"
    );

    let drop = Config::builder()
        .buffer_capacity(64)
        .trailing(TrailingRecord::Drop)
        .build()
        .unwrap();
    assert_eq!(
        summarize_reader(&input[..], &drop).unwrap().render(),
        "A=1.0/1.0/1.0"
    );
}

#[test]
fn malformed_record_aborts_without_summary() {
    let f = file_with(b"A;1.0\nB 2.0\nC;3.0\n");
    match summarize_path(f.path(), &cfg(64)) {
        Err(SummaryError::Record(e)) => assert_eq!(e.offset, 6),
        other => panic!("expected record error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = summarize_path(dir.path().join("nope.txt"), &cfg(64)).unwrap_err();
    assert!(matches!(err, SummaryError::Io(_)));
}

#[test]
fn in_memory_helper() {
    assert_eq!(
        summarize_bytes(b"A;10.0\nA;20.0\nA;-5.5\n").unwrap(),
        "A=-5.5/8.2/20.0"
    );
    assert_eq!(summarize_bytes(b"").unwrap(), "");
}
