//! Reply policy: decides, per message, whether to answer and how.
//!
//! Priority: a reply to someone else's message always gets the jealousy line; otherwise the first draw
//! may pick an image; otherwise a reply to the bot, the trigger keyword or the second draw picks a
//! generated text reply. Everything else is ignored.

use rand::Rng;
use telegram_bot::Message;

use crate::persona::{jealousy_reply, CAPTIONS};

pub const DEFAULT_IMAGE_PROBABILITY: f64 = 0.10;
pub const DEFAULT_TEXT_PROBABILITY: f64 = 0.30;
pub const DEFAULT_TRIGGER_KEYWORD: &str = "колишній";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyDecision {
    /// Canned jealousy line naming the third party.
    Jealousy { text: String },
    /// Caption to render onto the sad image.
    Image { caption: &'static str },
    /// Ask the model.
    Text,
    NoReply,
}

impl ReplyDecision {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Jealousy { .. } => "jealousy",
            Self::Image { .. } => "image",
            Self::Text => "text",
            Self::NoReply => "no_reply",
        }
    }
}

/// Tunables of the policy; fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyPolicy {
    pub image_probability: f64,
    pub text_probability: f64,
    /// Matched against the lowercased message text; stored lowercased.
    pub trigger_keyword: String,
}

impl Default for ReplyPolicy {
    fn default() -> Self {
        Self {
            image_probability: DEFAULT_IMAGE_PROBABILITY,
            text_probability: DEFAULT_TEXT_PROBABILITY,
            trigger_keyword: DEFAULT_TRIGGER_KEYWORD.to_string(),
        }
    }
}

/// The two uniform draws in [0, 1) consumed per message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draws {
    /// Image branch (and caption choice when it fires).
    pub r1: f64,
    /// Random text branch.
    pub r2: f64,
}

/// Source of per-message draws. [`ThreadRandom`] in production; a fixed [`Draws`] in tests.
pub trait RandomSource: Send + Sync {
    fn draws(&self) -> Draws;
}

/// Thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draws(&self) -> Draws {
        let mut rng = rand::rng();
        Draws {
            r1: rng.random::<f64>(),
            r2: rng.random::<f64>(),
        }
    }
}

impl RandomSource for Draws {
    fn draws(&self) -> Draws {
        *self
    }
}

/// Picks the reply mode for `message`. Pure: same inputs, same decision.
pub fn select(message: &Message, draws: Draws, policy: &ReplyPolicy) -> ReplyDecision {
    if let Some(author) = message.third_party() {
        return ReplyDecision::Jealousy {
            text: jealousy_reply(&author.display_name()),
        };
    }

    if draws.r1 < policy.image_probability {
        return ReplyDecision::Image {
            caption: pick_caption(draws.r1, policy.image_probability),
        };
    }

    let keyword_hit = message
        .content
        .to_lowercase()
        .contains(policy.trigger_keyword.as_str());
    if message.is_reply_to_bot() || keyword_hit || draws.r2 < policy.text_probability {
        return ReplyDecision::Text;
    }

    ReplyDecision::NoReply
}

/// Maps r1, uniform on [0, p) once the image branch fired, onto the caption set.
fn pick_caption(r1: f64, image_probability: f64) -> &'static str {
    let scaled = (r1 / image_probability * CAPTIONS.len() as f64) as usize;
    CAPTIONS[scaled.min(CAPTIONS.len() - 1)]
}
