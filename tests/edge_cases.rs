//! Edge case tests for chatstats
//!
//! Boundary conditions of the transcript grammar, the decoder and the
//! aggregator that the per-module unit tests don't reach end to end.

use chatstats::config::{ParserConfig, ReportConfig, WordCloudConfig};
use chatstats::core::{StatisticsReport, aggregate, word_cloud_weights};
use chatstats::parser::TranscriptParser;
use chatstats::parsing::Encoding;
use chatstats::{ChatstatsError, Message};
use chrono::{NaiveDate, Timelike};

fn parse(text: &str) -> Vec<Message> {
    TranscriptParser::new().parse_str(text).messages
}

// =========================================================================
// Header grammar
// =========================================================================

#[test]
fn test_annotation_is_stripped_from_sender() {
    let messages = parse("02/02/23, 1:00 pm - Carol (+1 555-0100): hi");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender(), "Carol");
    assert_eq!(messages[0].body(), "hi");
    assert_eq!(messages[0].timestamp().hour(), 13);
}

#[test]
fn test_phone_number_sender_kept() {
    let messages = parse("02/02/23, 1:00 pm - +91 98765 43210: hello");
    assert_eq!(messages[0].sender(), "+91 98765 43210");
}

#[test]
fn test_colons_in_body() {
    let messages = parse("02/02/23, 1:00 pm - Bob: note: meet at 10:30: sharp");
    assert_eq!(messages[0].sender(), "Bob");
    assert_eq!(messages[0].body(), "note: meet at 10:30: sharp");
}

#[test]
fn test_uppercase_meridiem() {
    let messages = parse("02/02/23, 12:15 AM - Bob: late\n02/02/23, 12:15 PM - Bob: lunch");
    assert_eq!(messages[0].timestamp().hour(), 0);
    assert_eq!(messages[1].timestamp().hour(), 12);
}

#[test]
fn test_empty_body_is_zero_word_message() {
    let outcome = TranscriptParser::new().parse_str("02/02/23, 1:00 pm - Bob: ");
    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(outcome.messages[0].body(), "");

    let metrics = aggregate(&outcome.messages);
    assert_eq!(metrics.message_count().get("Bob"), 1);
    assert_eq!(metrics.message_lengths("Bob"), &[0]);
    assert_eq!(metrics.average_message_length("Bob"), Some(0.0));
}

#[test]
fn test_whitespace_only_body() {
    let messages = parse("02/02/23, 1:00 pm - Bob:    \t ");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].word_count(), 0);
}

#[test]
fn test_missing_colon_space_is_skipped() {
    let outcome = TranscriptParser::new().parse_str(
        "02/02/23, 1:00 pm - Alice added Bob\n\
         02/02/23, 1:01 pm - Bob:no space",
    );
    assert!(outcome.is_empty());
    assert_eq!(outcome.skipped, 2);
}

#[test]
fn test_twenty_four_hour_clock_is_skipped() {
    let outcome = TranscriptParser::new().parse_str("02/02/23, 13:00 - Bob: hi");
    assert!(outcome.is_empty());
    assert_eq!(outcome.skipped, 1);
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn test_invalid_dates_are_skipped() {
    let outcome = TranscriptParser::new().parse_str(
        "31/02/23, 10:00 am - Alice: no such day\n\
         01/13/23, 10:00 am - Alice: no such month\n\
         01/02/23, 13:00 pm - Alice: no such hour\n\
         01/02/23, 10:61 am - Alice: no such minute\n\
         29/02/24, 10:00 am - Alice: leap day",
    );
    assert_eq!(outcome.skipped, 4);
    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(
        outcome.messages[0].timestamp().date(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
}

#[test]
fn test_day_first_order() {
    let messages = parse("05/04/23, 10:00 am - Alice: hi");
    assert_eq!(
        messages[0].timestamp().date(),
        NaiveDate::from_ymd_opt(2023, 4, 5).unwrap()
    );
}

#[test]
fn test_unpadded_day_and_month() {
    let messages = parse("5/4/23, 9:07 pm - Alice: hi");
    assert_eq!(
        messages[0].timestamp(),
        NaiveDate::from_ymd_opt(2023, 4, 5)
            .unwrap()
            .and_hms_opt(21, 7, 0)
            .unwrap()
    );
}

// =========================================================================
// Block splitting
// =========================================================================

#[test]
fn test_multiline_body_counts_words_across_lines() {
    let messages = parse(
        "01/02/23, 10:00 am - Alice: one two\nthree\n\nfour five\n\
         01/02/23, 10:01 am - Bob: ok",
    );
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].body(), "one two\nthree\n\nfour five");
    assert_eq!(messages[0].word_count(), 5);
}

#[test]
fn test_body_line_starting_with_date_starts_new_block() {
    let outcome = TranscriptParser::new().parse_str(
        "01/02/23, 10:00 am - Alice: the dates are\n\
         12/03/23 and 14/03/23\n\
         01/02/23, 10:01 am - Bob: ok",
    );
    assert_eq!(outcome.messages.len(), 2);
    assert_eq!(outcome.messages[0].body(), "the dates are");
    assert_eq!(outcome.skipped, 1);
}

#[test]
fn test_leading_text_before_first_message() {
    let outcome = TranscriptParser::new().parse_str(
        "Chat history with Alice\n\n01/02/23, 10:00 am - Alice: hi",
    );
    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(outcome.skipped, 1);
}

#[test]
fn test_crlf_and_lone_cr() {
    let messages = parse("01/02/23, 10:00 am - Alice: a\r\nb\r01/02/23, 10:01 am - Bob: c\r\n");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].body(), "a\nb");
    assert_eq!(messages[1].sender(), "Bob");
}

// =========================================================================
// Decoding
// =========================================================================

#[test]
fn test_utf8_bom_does_not_break_first_header() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("01/02/23, 10:00 am - Alice: hi".as_bytes());

    let outcome = TranscriptParser::new().parse_bytes(&bytes).unwrap();
    assert_eq!(outcome.encoding, Some(Encoding::Utf8));
    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(outcome.skipped, 0);
}

#[test]
fn test_utf16_big_endian() {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in "01/02/23, 10:00 am - Иван: привет".encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }

    let outcome = TranscriptParser::new().parse_bytes(&bytes).unwrap();
    assert_eq!(outcome.encoding, Some(Encoding::Utf16));
    assert_eq!(outcome.messages[0].sender(), "Иван");
    assert_eq!(outcome.messages[0].body(), "привет");
}

#[test]
fn test_undecodable_bytes() {
    // invalid UTF-8, odd length rules out UTF-16
    let err = TranscriptParser::new()
        .parse_bytes(&[0xC3, 0x28, 0x41])
        .unwrap_err();
    assert!(err.is_encoding());
    let text = err.to_string();
    assert!(text.contains("UTF-8"));
    assert!(text.contains("UTF-16"));
}

#[test]
fn test_utf8_only_candidates() {
    let parser = TranscriptParser::with_config(
        ParserConfig::new().with_encodings(vec![Encoding::Utf8]),
    );
    let err = parser.parse_bytes(&[0xFF, 0xFE, 0x41, 0x00]).unwrap_err();
    assert!(matches!(err, ChatstatsError::Encoding { .. }));
}

#[test]
fn test_empty_file_is_not_an_error() {
    let outcome = TranscriptParser::new().parse_bytes(&[]).unwrap();
    assert!(outcome.is_empty());
    assert!(aggregate(&outcome.messages).is_empty());
}

// =========================================================================
// Aggregation boundaries
// =========================================================================

#[test]
fn test_media_only_sender_average_is_zero() {
    let metrics = aggregate(&parse(
        "01/02/23, 10:00 am - Bob: <Media omitted>\n\
         01/02/23, 10:01 am - Bob: video omitted",
    ));
    assert_eq!(metrics.message_count().get("Bob"), 2);
    assert_eq!(metrics.media_count().get("Bob"), 2);
    assert!(metrics.message_lengths("Bob").is_empty());
    assert_eq!(metrics.average_message_lengths(), vec![("Bob", 0.0)]);
    assert!(metrics.word_count().is_empty());
    assert!(metrics.emoji_count().is_empty());
}

#[test]
fn test_media_marker_is_case_sensitive() {
    let messages = parse("01/02/23, 10:00 am - Bob: IMAGE OMITTED");
    assert!(!messages[0].is_media());
}

#[test]
fn test_media_marker_inside_text() {
    let messages = parse("01/02/23, 10:00 am - Bob: sorry, image omitted earlier");
    assert!(messages[0].is_media());
}

#[test]
fn test_emoji_sequences_count_components() {
    // 👍🏽 = thumbs up + skin tone modifier
    let metrics = aggregate(&parse("01/02/23, 10:00 am - Alice: nice 👍🏽"));
    assert_eq!(metrics.emoji_count().get(&'👍'), 1);
    assert_eq!(metrics.emoji_count().get(&'🏽'), 1);
    assert_eq!(metrics.emoji_count().get(&'a'), 0);
    assert_eq!(metrics.emoji_count().total(), 2);
}

#[test]
fn test_hair_component_counts() {
    // 👩‍🦰 = woman + ZWJ + red hair
    let metrics = aggregate(&parse("01/02/23, 10:00 am - Alice: 👩\u{200D}\u{1F9B0}"));
    assert_eq!(metrics.emoji_count().get(&'👩'), 1);
    assert_eq!(metrics.emoji_count().get(&'\u{1F9B0}'), 1);
    assert_eq!(metrics.emoji_count().total(), 2);
}

#[test]
fn test_words_keep_punctuation_and_case() {
    let metrics = aggregate(&parse("01/02/23, 10:00 am - Alice: Hello hello, HELLO"));
    assert_eq!(metrics.word_count().get("Hello"), 1);
    assert_eq!(metrics.word_count().get("hello,"), 1);
    assert_eq!(metrics.word_count().get("HELLO"), 1);
}

#[test]
fn test_report_on_single_media_message() {
    let metrics = aggregate(&parse("01/02/23, 10:00 am - Bob: <Media omitted>"));
    let report = StatisticsReport::render(&metrics, &ReportConfig::default());

    assert!(report.contains("Media Messages Percentage: 100.0%"));
    assert!(!report.contains("Overall Average Message Length"));
    assert!(!report.contains("Total Words"));
}

#[test]
fn test_wordcloud_drops_stopwords_case_insensitively() {
    let metrics = aggregate(&parse("01/02/23, 10:00 am - Alice: The pizza THE pizza and"));
    let weights = word_cloud_weights(&metrics, &WordCloudConfig::default());
    assert_eq!(weights, vec![("pizza".to_string(), 2)]);
}
