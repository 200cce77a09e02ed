//! Tests for [`toxic_ex_bot::select`]: priority order and the probability thresholds.

mod common;

use common::{message, reply_to, user, SENDER_ID};
use toxic_ex_bot::persona::CAPTIONS;
use toxic_ex_bot::{select, Draws, ReplyDecision, ReplyPolicy};

fn draws(r1: f64, r2: f64) -> Draws {
    Draws { r1, r2 }
}

/// **Test: Plain greeting with high draws stays silent.**
///
/// **Setup:** "Привіт", no reply, r1=0.5, r2=0.5.
/// **Expected:** NoReply.
#[test]
fn test_plain_message_no_reply() {
    let decision = select(&message("Привіт"), draws(0.5, 0.5), &ReplyPolicy::default());
    assert_eq!(decision, ReplyDecision::NoReply);
}

/// **Test: Reply to another user is jealousy and names them, whatever the draws.**
#[test]
fn test_reply_to_third_party_is_jealousy() {
    let msg = reply_to("так, згодна", user(2, "Богдан"), false);
    for (r1, r2) in [(0.0, 0.0), (0.05, 0.9), (0.5, 0.5), (0.99, 0.01)] {
        let decision = select(&msg, draws(r1, r2), &ReplyPolicy::default());
        assert_eq!(
            decision,
            ReplyDecision::Jealousy {
                text: "Ну звісно, Богдан тобі цікавіший. Я все бачу.".to_string()
            }
        );
    }
}

/// **Test: Third party without a first name is named by username.**
#[test]
fn test_jealousy_uses_username_fallback() {
    let mut author = user(3, "");
    author.first_name = None;
    author.username = Some("bohdan_k".to_string());
    let decision = select(
        &reply_to("ага", author, false),
        draws(0.5, 0.5),
        &ReplyPolicy::default(),
    );
    assert_eq!(decision.kind(), "jealousy");
    if let ReplyDecision::Jealousy { text } = decision {
        assert!(text.contains("bohdan_k"));
    }
}

/// **Test: Replying to yourself is not jealousy.**
#[test]
fn test_reply_to_self_is_not_jealousy() {
    let msg = reply_to("і ще одне", user(SENDER_ID, "Оля"), false);
    let decision = select(&msg, draws(0.5, 0.5), &ReplyPolicy::default());
    assert_eq!(decision, ReplyDecision::NoReply);
}

/// **Test: r1 below the image probability always picks an image; at or above never does.**
#[test]
fn test_image_threshold() {
    let policy = ReplyPolicy::default();
    for r1 in [0.0, 0.05, 0.0999] {
        let decision = select(&message("Привіт"), draws(r1, 0.9), &policy);
        assert!(matches!(decision, ReplyDecision::Image { .. }), "r1={r1}");
    }
    for r1 in [0.1, 0.5, 0.999] {
        let decision = select(&message("Привіт"), draws(r1, 0.9), &policy);
        assert!(!matches!(decision, ReplyDecision::Image { .. }), "r1={r1}");
    }
}

/// **Test: The image caption comes from the caption set.**
#[test]
fn test_image_caption_from_set() {
    let decision = select(&message("x"), draws(0.05, 0.5), &ReplyPolicy::default());
    match decision {
        ReplyDecision::Image { caption } => assert!(CAPTIONS.contains(&caption)),
        other => panic!("expected image, got {other:?}"),
    }
}

/// **Test: Image outranks the keyword and reply-to-bot.**
#[test]
fn test_image_outranks_text_triggers() {
    let msg = reply_to("колишній", user(99, "Bot"), true);
    let decision = select(&msg, draws(0.01, 0.0), &ReplyPolicy::default());
    assert!(matches!(decision, ReplyDecision::Image { .. }));
}

/// **Test: Keyword triggers a text reply, case-insensitively.**
///
/// **Setup:** "колишній, привіт" and "КОЛИШНІЙ!", r1=0.5, r2=0.9.
/// **Expected:** Text.
#[test]
fn test_keyword_triggers_text() {
    let policy = ReplyPolicy::default();
    for text in ["колишній, привіт", "КОЛИШНІЙ!", "мій колишній такий"] {
        assert_eq!(
            select(&message(text), draws(0.5, 0.9), &policy),
            ReplyDecision::Text,
            "{text}"
        );
    }
}

/// **Test: Reply to the bot's own message triggers a text reply, not jealousy.**
#[test]
fn test_reply_to_bot_triggers_text() {
    let msg = reply_to("та ну", user(99, "ToxicEx"), true);
    assert_eq!(
        select(&msg, draws(0.5, 0.9), &ReplyPolicy::default()),
        ReplyDecision::Text
    );
}

/// **Test: Reply to some other bot in the chat is jealousy, not a reply trigger.**
///
/// **Setup:** The replied-to author is a different bot (id 777), so the message is not a reply to us.
/// **Expected:** Jealousy naming that bot, even with draws that would otherwise produce nothing.
#[test]
fn test_reply_to_other_bot_is_jealousy() {
    let msg = reply_to("привіт", user(777, "WeatherBot"), false);
    assert_eq!(
        select(&msg, draws(0.5, 0.9), &ReplyPolicy::default()),
        ReplyDecision::Jealousy {
            text: "Ну звісно, WeatherBot тобі цікавіший. Я все бачу.".to_string()
        }
    );
}

/// **Test: r2 below the text probability triggers a text reply.**
#[test]
fn test_random_text_threshold() {
    let policy = ReplyPolicy::default();
    assert_eq!(select(&message("ок"), draws(0.5, 0.29), &policy), ReplyDecision::Text);
    assert_eq!(select(&message("ок"), draws(0.5, 0.3), &policy), ReplyDecision::NoReply);
}

/// **Test: Empty text still goes through the random checks.**
#[test]
fn test_empty_text_participates() {
    let policy = ReplyPolicy::default();
    assert_eq!(select(&message(""), draws(0.5, 0.1), &policy), ReplyDecision::Text);
    assert!(matches!(
        select(&message(""), draws(0.01, 0.9), &policy),
        ReplyDecision::Image { .. }
    ));
    assert_eq!(select(&message(""), draws(0.5, 0.9), &policy), ReplyDecision::NoReply);
}

/// **Test: Custom policy values are honoured.**
#[test]
fn test_custom_policy() {
    let policy = ReplyPolicy {
        image_probability: 0.0,
        text_probability: 1.0,
        trigger_keyword: "бот".to_string(),
    };
    assert_eq!(select(&message("x"), draws(0.0, 0.99), &policy), ReplyDecision::Text);

    let silent = ReplyPolicy {
        image_probability: 0.0,
        text_probability: 0.0,
        trigger_keyword: "бот".to_string(),
    };
    assert_eq!(select(&message("колишній"), draws(0.0, 0.0), &silent), ReplyDecision::NoReply);
    assert_eq!(select(&message("Бот?"), draws(0.0, 0.0), &silent), ReplyDecision::Text);
}
