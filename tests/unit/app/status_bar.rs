use super::*;

#[test]
fn test_count_words() {
    assert_eq!(count_words(""), 0);
    assert_eq!(count_words("   \n\t "), 0);
    assert_eq!(count_words("hello world"), 2);
    assert_eq!(count_words("don't stop-me now"), 5);
    assert_eq!(count_words("snake_case counts_once"), 2);
    assert_eq!(count_words("héllo wörld 42"), 3);
}

#[test]
fn test_starts_with_idle_banner() {
    let status = StatusBar::new();
    assert_eq!(status.message(), IDLE_BANNER);
    assert_eq!(status.kind(), StatusKind::Idle);
    assert_eq!(status.word_count_label(), "Word Count: 0");
}

#[test]
fn test_update_status_switches_message_and_recounts() {
    let mut status = StatusBar::new();

    status.update_status(true, "one two three");
    assert_eq!(status.message(), SAVED_MESSAGE);
    assert_eq!(status.kind(), StatusKind::Saved);
    assert_eq!(status.word_count(), 3);

    status.update_status(false, "one");
    assert_eq!(status.message(), IDLE_BANNER);
    assert_eq!(status.word_count_label(), "Word Count: 1");
}

#[test]
fn test_refresh_word_count_keeps_message() {
    let mut status = StatusBar::new();
    status.set_info("Not found: xyz");
    status.refresh_word_count("a b");
    assert_eq!(status.message(), "Not found: xyz");
    assert_eq!(status.kind(), StatusKind::Info);
    assert_eq!(status.word_count(), 2);
}
