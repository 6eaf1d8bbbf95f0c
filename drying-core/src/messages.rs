use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language of the built-in advice texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    pub const fn all() -> &'static [Locale] {
        &[Locale::Ja, Locale::En]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one piece of advice text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageKey {
    Precipitation,
    RainChance,
    ExtremeCold,
    TextClearHot,
    TextClearWarm,
    TextClearMild,
    TextCloudyMild,
    TextCloudyCold,
    TextOther,
    ScoreVeryEasy,
    ScoreEasy,
    ScoreModerate,
    ScoreDifficult,
    TipDehumidifier,
    TipFan,
    Unknown,
}

impl MessageKey {
    /// Key used in the `[messages]` table of the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::Precipitation => "precipitation",
            MessageKey::RainChance => "rain_chance",
            MessageKey::ExtremeCold => "extreme_cold",
            MessageKey::TextClearHot => "text_clear_hot",
            MessageKey::TextClearWarm => "text_clear_warm",
            MessageKey::TextClearMild => "text_clear_mild",
            MessageKey::TextCloudyMild => "text_cloudy_mild",
            MessageKey::TextCloudyCold => "text_cloudy_cold",
            MessageKey::TextOther => "text_other",
            MessageKey::ScoreVeryEasy => "score_very_easy",
            MessageKey::ScoreEasy => "score_easy",
            MessageKey::ScoreModerate => "score_moderate",
            MessageKey::ScoreDifficult => "score_difficult",
            MessageKey::TipDehumidifier => "tip_dehumidifier",
            MessageKey::TipFan => "tip_fan",
            MessageKey::Unknown => "unknown",
        }
    }

    /// Look up a key by its config-file name.
    pub fn from_name(name: &str) -> Option<MessageKey> {
        MessageKey::all().iter().copied().find(|key| key.as_str() == name)
    }

    pub const fn all() -> &'static [MessageKey] {
        &[
            MessageKey::Precipitation,
            MessageKey::RainChance,
            MessageKey::ExtremeCold,
            MessageKey::TextClearHot,
            MessageKey::TextClearWarm,
            MessageKey::TextClearMild,
            MessageKey::TextCloudyMild,
            MessageKey::TextCloudyCold,
            MessageKey::TextOther,
            MessageKey::ScoreVeryEasy,
            MessageKey::ScoreEasy,
            MessageKey::ScoreModerate,
            MessageKey::ScoreDifficult,
            MessageKey::TipDehumidifier,
            MessageKey::TipFan,
            MessageKey::Unknown,
        ]
    }

    fn builtin(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ja => self.builtin_ja(),
            Locale::En => self.builtin_en(),
        }
    }

    fn builtin_ja(&self) -> &'static str {
        match self {
            MessageKey::Precipitation => {
                "雨や雪が降っています。洗濯物は屋外では乾きません。室内干しにするか、乾燥機の利用を検討してください。"
            }
            MessageKey::RainChance => {
                "降水確率が高い時間帯があります。急な雨に注意し、室内干しを検討してください。"
            }
            MessageKey::ExtremeCold => {
                "気温が低すぎます。外干しは非常に乾きにくいでしょう。乾燥機や浴室乾燥の利用をおすすめします。"
            }
            MessageKey::TextClearHot => {
                "最高の洗濯日和です！太陽が洗濯物をあっという間に乾かしてくれます。"
            }
            MessageKey::TextClearWarm | MessageKey::ScoreEasy => {
                "外干しに適しています。気持ちよく乾きますよ。"
            }
            MessageKey::TextClearMild => {
                "晴れですが、気温によっては乾きに時間がかかるかもしれません。風通しを良くしましょう。"
            }
            MessageKey::TextCloudyMild => {
                "曇り空ですが、外干しは可能です。厚手のものは乾くのに時間がかかるかも。"
            }
            MessageKey::TextCloudyCold => {
                "曇りで気温も低めです。乾きにくい一日なので、室内干しや乾燥機の検討を。"
            }
            MessageKey::TextOther => {
                "今日の天気は外干し可能ですが、状況によっては乾きにくいかもしれません。天気予報をよく確認しましょう。"
            }
            MessageKey::ScoreVeryEasy => {
                "最高の洗濯日和です！太陽と風が洗濯物をあっという間に乾かしてくれます。"
            }
            MessageKey::ScoreModerate => {
                "外干しは可能ですが、厚手のものは乾くのに時間がかかるかもしれません。風通しを良くしましょう。"
            }
            MessageKey::ScoreDifficult => {
                "乾きにくい一日です。可能であれば、室内干しや乾燥機の利用を検討してください。"
            }
            MessageKey::TipDehumidifier => "特に湿度が高いので、除湿器の利用も効果的です。",
            MessageKey::TipFan => "風が弱いので、扇風機で空気を循環させると良いでしょう。",
            MessageKey::Unknown => "天気情報が不足しているか、判断できません。",
        }
    }

    fn builtin_en(&self) -> &'static str {
        match self {
            MessageKey::Precipitation => {
                "It is raining or snowing, so laundry will not dry outdoors. Dry it indoors or use a tumble dryer."
            }
            MessageKey::RainChance => {
                "Rain is likely at some point today. Watch out for sudden showers and consider drying indoors."
            }
            MessageKey::ExtremeCold => {
                "It is too cold for laundry to dry outside. A tumble dryer or bathroom dryer is recommended."
            }
            MessageKey::TextClearHot => {
                "A perfect laundry day! The sun will dry your washing in no time."
            }
            MessageKey::TextClearWarm | MessageKey::ScoreEasy => {
                "Good conditions for drying outside. Your laundry should dry nicely."
            }
            MessageKey::TextClearMild => {
                "It is sunny, but at this temperature drying may take a while. Leave space for air to flow."
            }
            MessageKey::TextCloudyMild => {
                "Cloudy, but you can still dry outside. Heavy items may take longer."
            }
            MessageKey::TextCloudyCold => {
                "Cloudy and cool. Laundry will dry slowly, so consider drying indoors or using a dryer."
            }
            MessageKey::TextOther => {
                "You can dry outside today, but conditions may slow things down. Keep an eye on the forecast."
            }
            MessageKey::ScoreVeryEasy => {
                "A perfect laundry day! Sun and wind will dry your washing in no time."
            }
            MessageKey::ScoreModerate => {
                "Drying outside is possible, but heavy items may take a while. Leave space for air to flow."
            }
            MessageKey::ScoreDifficult => {
                "Laundry will dry slowly today. If you can, dry indoors or use a tumble dryer."
            }
            MessageKey::TipDehumidifier => "Humidity is especially high, so a dehumidifier helps too.",
            MessageKey::TipFan => "There is little wind, so a fan to circulate the air will help.",
            MessageKey::Unknown => "Not enough weather information to judge drying conditions.",
        }
    }
}

/// Advice texts for one locale, with optional per-key replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
    overrides: BTreeMap<MessageKey, String>,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale, overrides: BTreeMap::new() }
    }

    /// Replace the built-in text for `key`. Blank texts are ignored so that
    /// every advisory keeps a non-empty message.
    pub fn with_override(mut self, key: MessageKey, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.overrides.insert(key, text);
        }
        self
    }

    pub fn text(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.builtin(self.locale))
    }

    /// Append a secondary tip to a base message.
    pub fn join(&self, base: &str, tip: &str) -> String {
        match self.locale {
            Locale::Ja => format!("{base}{tip}"),
            Locale::En => format!("{base} {tip}"),
        }
    }
}
