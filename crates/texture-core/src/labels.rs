// File: crates/texture-core/src/labels.rs
// Summary: Per-language label tables for texture classes and axis titles.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-br")]
    PtBr,
    #[serde(rename = "sp")]
    Sp,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::PtBr, Language::Sp];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::PtBr => "pt-br",
            Language::Sp => "sp",
        }
    }

    /// Resolve a language code case-insensitively, falling back to English.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            tracing::warn!(code, "unknown language code; falling back to en");
            Language::En
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownLanguage(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The 13 texture classes drawn on the chart, plus "very clayey".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureClass {
    VeryClayey,
    Clay,
    SandyClay,
    SiltyClay,
    SandyClayLoam,
    ClayLoam,
    SiltyClayLoam,
    Sand,
    LoamySand,
    SandyLoam,
    Loam,
    SiltLoam,
    Silt,
}

impl TextureClass {
    pub const ALL: [TextureClass; 13] = [
        TextureClass::VeryClayey,
        TextureClass::Clay,
        TextureClass::SandyClay,
        TextureClass::SiltyClay,
        TextureClass::SandyClayLoam,
        TextureClass::ClayLoam,
        TextureClass::SiltyClayLoam,
        TextureClass::Sand,
        TextureClass::LoamySand,
        TextureClass::SandyLoam,
        TextureClass::Loam,
        TextureClass::SiltLoam,
        TextureClass::Silt,
    ];
}

/// Immutable label text for one language.
///
/// The built-in tables borrow static strings; tables read from config own theirs.
/// `language` only tags the set and has no effect on layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSet {
    pub language: Language,
    pub very_clayey: Cow<'static, str>,
    pub clay: Cow<'static, str>,
    pub sandy_clay: Cow<'static, str>,
    pub silty_clay: Cow<'static, str>,
    pub sandy_clay_loam: Cow<'static, str>,
    pub clay_loam: Cow<'static, str>,
    pub silty_clay_loam: Cow<'static, str>,
    pub sand: Cow<'static, str>,
    pub loamy_sand: Cow<'static, str>,
    pub sandy_loam: Cow<'static, str>,
    pub loam: Cow<'static, str>,
    pub silt_loam: Cow<'static, str>,
    pub silt: Cow<'static, str>,
    pub percent_clay: Cow<'static, str>,
    pub percent_silt: Cow<'static, str>,
    pub percent_sand: Cow<'static, str>,
}

pub static ENGLISH: LabelSet = LabelSet {
    language: Language::En,
    very_clayey: Cow::Borrowed("Heavy Clay"),
    clay: Cow::Borrowed("Clay"),
    sandy_clay: Cow::Borrowed("Sandy Clay"),
    silty_clay: Cow::Borrowed("Silty Clay"),
    sandy_clay_loam: Cow::Borrowed("Sandy Clay Loam"),
    clay_loam: Cow::Borrowed("Clay Loam"),
    silty_clay_loam: Cow::Borrowed("Silty Clay Loam"),
    sand: Cow::Borrowed("Sand"),
    loamy_sand: Cow::Borrowed("Loamy Sand"),
    sandy_loam: Cow::Borrowed("Sandy Loam"),
    loam: Cow::Borrowed("Loam"),
    silt_loam: Cow::Borrowed("Silt Loam"),
    silt: Cow::Borrowed("Silt"),
    percent_clay: Cow::Borrowed("% Clay"),
    percent_silt: Cow::Borrowed("% Silt"),
    percent_sand: Cow::Borrowed("% Sand"),
};

pub static PORTUGUESE: LabelSet = LabelSet {
    language: Language::PtBr,
    very_clayey: Cow::Borrowed("Muito Argiloso"),
    clay: Cow::Borrowed("Argila"),
    sandy_clay: Cow::Borrowed("Argilo Arenoso"),
    silty_clay: Cow::Borrowed("Argilo Siltoso"),
    sandy_clay_loam: Cow::Borrowed("Franco Argilo Arenoso"),
    clay_loam: Cow::Borrowed("Franco Argiloso"),
    silty_clay_loam: Cow::Borrowed("Franco Argilo Siltoso"),
    sand: Cow::Borrowed("Areia"),
    loamy_sand: Cow::Borrowed("Areia Franca"),
    sandy_loam: Cow::Borrowed("Franco Arenoso"),
    loam: Cow::Borrowed("Franco"),
    silt_loam: Cow::Borrowed("Franco Siltoso"),
    silt: Cow::Borrowed("Silte"),
    percent_clay: Cow::Borrowed("% Argila"),
    percent_silt: Cow::Borrowed("% Silte"),
    percent_sand: Cow::Borrowed("% Areia"),
};

pub static SPANISH: LabelSet = LabelSet {
    language: Language::Sp,
    very_clayey: Cow::Borrowed("Muy Argiloso"),
    clay: Cow::Borrowed("Argila"),
    sandy_clay: Cow::Borrowed("Argila Arena"),
    silty_clay: Cow::Borrowed("Argila Arena Silicada"),
    sandy_clay_loam: Cow::Borrowed("Argila Arena Lomosa"),
    clay_loam: Cow::Borrowed("Argila Lomosa"),
    silty_clay_loam: Cow::Borrowed("Argila Silicada Lomosa"),
    sand: Cow::Borrowed("Arena"),
    loamy_sand: Cow::Borrowed("Arena Lomosa"),
    sandy_loam: Cow::Borrowed("Arena Lomosa"),
    loam: Cow::Borrowed("Lomosa"),
    silt_loam: Cow::Borrowed("Silicada Lomosa"),
    silt: Cow::Borrowed("Silicada"),
    percent_clay: Cow::Borrowed("% Argila"),
    percent_silt: Cow::Borrowed("% Silicada"),
    percent_sand: Cow::Borrowed("% Arena"),
};

impl LabelSet {
    pub fn for_language(language: Language) -> &'static LabelSet {
        match language {
            Language::En => &ENGLISH,
            Language::PtBr => &PORTUGUESE,
            Language::Sp => &SPANISH,
        }
    }

    pub fn class(&self, class: TextureClass) -> &str {
        match class {
            TextureClass::VeryClayey => &self.very_clayey,
            TextureClass::Clay => &self.clay,
            TextureClass::SandyClay => &self.sandy_clay,
            TextureClass::SiltyClay => &self.silty_clay,
            TextureClass::SandyClayLoam => &self.sandy_clay_loam,
            TextureClass::ClayLoam => &self.clay_loam,
            TextureClass::SiltyClayLoam => &self.silty_clay_loam,
            TextureClass::Sand => &self.sand,
            TextureClass::LoamySand => &self.loamy_sand,
            TextureClass::SandyLoam => &self.sandy_loam,
            TextureClass::Loam => &self.loam,
            TextureClass::SiltLoam => &self.silt_loam,
            TextureClass::Silt => &self.silt,
        }
    }

    pub fn axis_title(&self, axis: crate::Component) -> &str {
        match axis {
            crate::Component::Clay => &self.percent_clay,
            crate::Component::Silt => &self.percent_silt,
            crate::Component::Sand => &self.percent_sand,
        }
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        ENGLISH.clone()
    }
}
