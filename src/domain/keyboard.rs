//! Framework-agnostic sponsor keyboard for subscription gates.

use crate::domain::response::{SponsorKind, SponsorsResponse};

/// Callback payload of the "done" button.
pub const DONE_CALLBACK_DATA: &str = "subgram-done";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Button captions, chosen by sponsor type.
pub struct ButtonTexts {
    pub channel: String,
    pub bot: String,
    pub smart_link: String,
    pub resource: String,
    /// When `None`, no "done" row is added.
    pub done: Option<String>,
}

impl Default for ButtonTexts {
    fn default() -> Self {
        Self {
            channel: "➕ Subscribe".to_owned(),
            bot: "➕ Open bot".to_owned(),
            smart_link: "➕ Open".to_owned(),
            resource: "➕ Open".to_owned(),
            done: Some("✅ I subscribed!".to_owned()),
        }
    }
}

impl ButtonTexts {
    fn for_kind(&self, kind: SponsorKind) -> &str {
        match kind {
            SponsorKind::Channel => &self.channel,
            SponsorKind::Bot => &self.bot,
            SponsorKind::SmartLink => &self.smart_link,
            SponsorKind::Resource => &self.resource,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardButton {
    Link { text: String, url: String },
    Callback { text: String, data: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Inline keyboard layout: sponsor links in the first row, the optional
/// "done" button in the second.
pub struct SponsorKeyboard {
    pub rows: Vec<Vec<KeyboardButton>>,
}

impl SponsorKeyboard {
    /// Build a keyboard for every sponsor the user has not subscribed to yet.
    ///
    /// Returns `None` when there is nothing to subscribe to, i.e. no keyboard
    /// should be shown.
    pub fn build(response: &SponsorsResponse, texts: &ButtonTexts) -> Option<Self> {
        let links = response
            .unsubscribed()
            .map(|sponsor| KeyboardButton::Link {
                text: texts.for_kind(sponsor.kind).to_owned(),
                url: sponsor.link.clone(),
            })
            .collect::<Vec<_>>();

        if links.is_empty() {
            return None;
        }

        let mut rows = vec![links];
        if let Some(done) = texts.done.as_ref() {
            rows.push(vec![KeyboardButton::Callback {
                text: done.clone(),
                data: DONE_CALLBACK_DATA.to_owned(),
            }]);
        }
        Some(Self { rows })
    }
}
