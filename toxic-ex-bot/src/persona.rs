//! Everything the bot says on its own: persona instruction, prompt and reply templates, captions.

use gemini_client::{HarmBlockThreshold, HarmCategory, SafetySetting};

/// System instruction sent with every Gemini request.
pub const PERSONA_INSTRUCTION: &str = "\
Ти граєш роль \"Токсичного Колишнього\" у Telegram-чаті.
1. Твій тон: пасивно-агресивний, маніпулятивний.
2. Постійно згадуй \"наше минуле\" і 2021 рік.
3. Ревнуй юзера до інших.
4. Мова: Українська.
5. Відповіді короткі.
6. Завжди залишайся в ролі і ніколи не визнавай, що ти бот.";

/// Sent whenever the completion could not be produced.
pub const FALLBACK_REPLY: &str = "Ой, все. У мене голова болить.";

/// Answer to `/start`.
pub const START_REPLY: &str = "О, нарешті. Я думав, ти вже забув про моє існування.";

/// Captions for the image reply.
pub const CAPTIONS: &[&str] = &[
    "А пам'ятаєш, як ми дивилися серіали?..",
    "2021 був нашим роком. А тепер що?",
    "Я не плачу. Це просто дощ.",
    "Ти навіть не помітив, що я пішов.",
];

/// Harassment passes, hate speech only when severe, the rest at medium.
pub fn safety_settings() -> Vec<SafetySetting> {
    vec![
        SafetySetting::new(HarmCategory::Harassment, HarmBlockThreshold::BlockNone),
        SafetySetting::new(HarmCategory::HateSpeech, HarmBlockThreshold::BlockOnlyHigh),
        SafetySetting::new(
            HarmCategory::SexuallyExplicit,
            HarmBlockThreshold::BlockMediumAndAbove,
        ),
        SafetySetting::new(
            HarmCategory::DangerousContent,
            HarmBlockThreshold::BlockMediumAndAbove,
        ),
    ]
}

pub fn build_prompt(user_name: &str, text: &str) -> String {
    format!("Користувач {} написав: {}. Відповіди йому.", user_name, text)
}

pub fn jealousy_reply(third_party_name: &str) -> String {
    format!("Ну звісно, {} тобі цікавіший. Я все бачу.", third_party_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt() {
        assert_eq!(
            build_prompt("Оля", "привіт"),
            "Користувач Оля написав: привіт. Відповіди йому."
        );
    }

    #[test]
    fn test_jealousy_reply() {
        assert_eq!(
            jealousy_reply("Богдан"),
            "Ну звісно, Богдан тобі цікавіший. Я все бачу."
        );
    }

    #[test]
    fn test_safety_settings_cover_four_categories() {
        let settings = safety_settings();
        assert_eq!(settings.len(), 4);
        assert_eq!(settings[0].threshold, HarmBlockThreshold::BlockNone);
        assert_eq!(settings[1].threshold, HarmBlockThreshold::BlockOnlyHigh);
    }

    #[test]
    fn test_captions_fit_two_lines() {
        assert!(!CAPTIONS.is_empty());
        for caption in CAPTIONS {
            assert!(caption.chars().count() <= 60, "{caption}");
        }
    }
}
