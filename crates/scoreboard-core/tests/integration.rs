//! Integration tests for extract_scoreboard() end-to-end pipeline.
//!
//! Uses a MockEngine that returns canned OCR text without invoking
//! tesseract, so these tests run without it installed.

use scoreboard_core::error::{ParseError, ScoreboardError};
use scoreboard_core::extract_scoreboard;
use scoreboard_core::extraction::OcrEngine;
use scoreboard_core::model::SkipReason;
use scoreboard_core::profile::builtin::load_preset;
use scoreboard_core::profile::schema::ParserOptions;

struct MockEngine {
    text: String,
}

impl MockEngine {
    fn new(lines: &[&str]) -> Self {
        MockEngine {
            text: lines.join("\n"),
        }
    }
}

impl OcrEngine for MockEngine {
    fn extract_text(&self, _image_bytes: &[u8]) -> Result<String, ScoreboardError> {
        Ok(self.text.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingEngine;

impl OcrEngine for FailingEngine {
    fn extract_text(&self, _image_bytes: &[u8]) -> Result<String, ScoreboardError> {
        Err(ScoreboardError::TesseractNotFound)
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

// Roughly what tesseract --psm 4 makes of a Korean-client scoreboard capture.
const CAPTURE: &[&str] = &[
    "승리   | 팀 1       @ ®",
    "",
    "",
    "챔피언    아리 리신 가렌 징크스 쓰레쉬 제드 그레이브즈 말파이트 케이틀린 룰루",
    "",
    "KDA    8/2/11 5/4/9 3/3/6 12/1/7 0/5/18 9/6/3 4/7/5 2/5/8 6/4/2 0/9/9",
    "",
    "피해량    24510 15320 11800 31020 6400 22140 14210 9870 19040 5230",
    "골드   ©   12450 10870 9960 14320 7820 11980 10110 8740 11200 6930",
    "CS    198 42 165 243 31 187 56 151 221 28",
    "1/2",
];

// ---------------------------------------------------------------------------
// Test 1: full capture with the default profile
// ---------------------------------------------------------------------------
#[test]
fn full_capture_default_profile() {
    let engine = MockEngine::new(CAPTURE);
    let parsed = extract_scoreboard(&[1], &engine, &ParserOptions::default()).unwrap();

    let table = &parsed.table;
    assert_eq!(
        table.categories().collect::<Vec<_>>(),
        vec!["챔피언", "KDA", "피해량", "골드", "CS"]
    );
    assert_eq!(table.get("player1", "챔피언"), Some("아리"));
    assert_eq!(table.get("player10", "챔피언"), Some("룰루"));
    assert_eq!(
        table.typed_value("player4", "KDA").and_then(|v| v.kda()),
        Some((12, 1, 7))
    );
    // "©" is stripped, leaving a clean gap after the label
    assert_eq!(table.get("player1", "골드"), Some("12450"));
    assert_eq!(table.get("player10", "CS"), Some("28"));
}

// ---------------------------------------------------------------------------
// Test 2: header and page-number noise is reported, not emitted
// ---------------------------------------------------------------------------
#[test]
fn noise_lines_reported_as_skipped() {
    let engine = MockEngine::new(CAPTURE);
    let parsed = extract_scoreboard(&[1], &engine, &ParserOptions::default()).unwrap();

    let last = parsed.skipped_lines.last().unwrap();
    assert_eq!(last.text, "1/2");
    assert_eq!(last.reason, SkipReason::TooShort { chars: 3 });
    assert!(parsed
        .skipped_lines
        .iter()
        .all(|s| matches!(s.reason, SkipReason::TooShort { .. })));
}

// ---------------------------------------------------------------------------
// Test 3: player-major JSON for downstream renderers
// ---------------------------------------------------------------------------
#[test]
fn json_is_player_major() {
    let engine = MockEngine::new(CAPTURE);
    let parsed = extract_scoreboard(&[1], &engine, &ParserOptions::default()).unwrap();

    let json: serde_json::Value = serde_json::to_value(&parsed.table).unwrap();
    assert_eq!(json["player5"]["챔피언"], "쓰레쉬");
    assert_eq!(json["player5"]["KDA"], "0/5/18");
    assert_eq!(json.as_object().unwrap().len(), 10);
}

// ---------------------------------------------------------------------------
// Test 4: unreadable capture falls back to the cleaned lines
// ---------------------------------------------------------------------------
#[test]
fn unreadable_capture_returns_candidates() {
    let engine = MockEngine::new(&["@@@@", "blurry", "", "", "?? ??"]);
    let err = extract_scoreboard(&[1], &engine, &ParserOptions::default()).unwrap_err();

    match err {
        ScoreboardError::Parse(ParseError::NoValidRows { candidates }) => {
            assert_eq!(candidates, vec!["", "blurry", "", " "]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Test 5: strict preset rejects a smudged row with an extra value
// ---------------------------------------------------------------------------
#[test]
fn strict_preset_rejects_extra_value() {
    let strict = load_preset("lol-strict").unwrap();
    let engine = MockEngine::new(&[
        "CS    198 42 165 243 31 187 56 151 221 28",
        "Wards    12 8 9 14 41 10 7 11 13 38 1",
    ]);

    let err = extract_scoreboard(&[1], &engine, &strict).unwrap_err();
    match err {
        ScoreboardError::Parse(ParseError::InconsistentColumnCount {
            line_index,
            category,
            expected,
            found,
        }) => {
            assert_eq!(line_index, 1);
            assert_eq!(category, "Wards");
            assert_eq!(expected, 10);
            assert_eq!(found, 11);
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Test 6: lenient preset truncates the same row
// ---------------------------------------------------------------------------
#[test]
fn lenient_preset_truncates_extra_value() {
    let lenient = load_preset("lol-lenient").unwrap();
    let engine = MockEngine::new(&["Wards    12 8 9 14 41 10 7 11 13 38 1"]);

    let parsed = extract_scoreboard(&[1], &engine, &lenient).unwrap();
    assert_eq!(parsed.table.get("player10", "Wards"), Some("38"));
    assert!(parsed.skipped_lines.is_empty());
}

// ---------------------------------------------------------------------------
// Test 7: OCR errors propagate untouched
// ---------------------------------------------------------------------------
#[test]
fn ocr_error_propagates() {
    let err = extract_scoreboard(&[1], &FailingEngine, &ParserOptions::default()).unwrap_err();
    assert!(matches!(err, ScoreboardError::TesseractNotFound));
}
