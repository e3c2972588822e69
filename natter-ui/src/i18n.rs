//! Localized UI strings
//!
//! Strings are addressed by `UiText` variants instead of free-form keys so a
//! missing translation is a compile error, not a runtime fallback. The active
//! language is provided by the app as a `Signal<Lang>` context; components
//! read it through [`use_lang`].

use dioxus::prelude::*;

/// Supported display languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    De,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::De];

    /// BCP 47 language code, used for persistence and the `lang` attribute
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "de" => Some(Lang::De),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::De => "Deutsch",
        }
    }

    pub fn text(&self, text: UiText) -> &'static str {
        match self {
            Lang::En => text.en(),
            Lang::De => text.de(),
        }
    }
}

/// Every user-visible string in this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiText {
    Reason,
    Cancel,
    CloseDialog,
    Kick,
    Ban,
    Unban,
    RemoveFromGroup,
    KickTitle,
    BanTitle,
    UnbanTitle,
    RemoveFromGroupTitle,
}

impl UiText {
    pub const ALL: [UiText; 11] = [
        UiText::Reason,
        UiText::Cancel,
        UiText::CloseDialog,
        UiText::Kick,
        UiText::Ban,
        UiText::Unban,
        UiText::RemoveFromGroup,
        UiText::KickTitle,
        UiText::BanTitle,
        UiText::UnbanTitle,
        UiText::RemoveFromGroupTitle,
    ];

    fn en(&self) -> &'static str {
        match self {
            UiText::Reason => "Reason",
            UiText::Cancel => "Cancel",
            UiText::CloseDialog => "Close dialog",
            UiText::Kick => "Kick",
            UiText::Ban => "Ban",
            UiText::Unban => "Unban",
            UiText::RemoveFromGroup => "Remove from community",
            UiText::KickTitle => "Kick this user?",
            UiText::BanTitle => "Ban this user?",
            UiText::UnbanTitle => "Unban this user?",
            UiText::RemoveFromGroupTitle => "Remove this user from the community?",
        }
    }

    fn de(&self) -> &'static str {
        match self {
            UiText::Reason => "Grund",
            UiText::Cancel => "Abbrechen",
            UiText::CloseDialog => "Dialog schließen",
            UiText::Kick => "Kicken",
            UiText::Ban => "Verbannen",
            UiText::Unban => "Verbannung aufheben",
            UiText::RemoveFromGroup => "Aus der Community entfernen",
            UiText::KickTitle => "Diesen Benutzer kicken?",
            UiText::BanTitle => "Diesen Benutzer verbannen?",
            UiText::UnbanTitle => "Verbannung dieses Benutzers aufheben?",
            UiText::RemoveFromGroupTitle => "Diesen Benutzer aus der Community entfernen?",
        }
    }
}

/// Current language from context, `En` when the app provides none
pub fn use_lang() -> Lang {
    try_consume_context::<Signal<Lang>>()
        .map(|lang| lang())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_string_is_translated() {
        for lang in Lang::ALL {
            for text in UiText::ALL {
                assert!(
                    !lang.text(text).is_empty(),
                    "empty string for {:?} in {:?}",
                    text,
                    lang
                );
            }
        }
    }

    #[test]
    fn codes_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Lang::default(), Lang::En);
        assert_eq!(Lang::default().text(UiText::Cancel), "Cancel");
    }
}
