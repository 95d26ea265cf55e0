//! Page states shown by the multi-state layout
//!
//! A [`PageState`] is a plain value: every variant carries its own [`Tip`]
//! (display text and optional image). Builders consume and return a new value,
//! so tweaking the text of one state never affects another.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Built-in tip text for [`PageState::Loading`]
pub const DEFAULT_LOADING_TEXT: &str = "加载中";
/// Built-in tip text for [`PageState::Empty`]
pub const DEFAULT_EMPTY_TEXT: &str = "数据为空";
/// Built-in tip text for [`PageState::Error`]
pub const DEFAULT_ERROR_TEXT: &str = "数据出错";

/// Identifier of an image asset, resolved to a texture by [`crate::assets`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(Cow<'static, str>);

impl AssetId {
    /// Embedded default tip image
    pub const TIP: AssetId = AssetId::from_static("tip");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display payload of a page state: a status line and an optional image
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tip {
    #[serde(default)]
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<AssetId>,
}

impl Tip {
    pub fn new(text: impl Into<String>, image: Option<AssetId>) -> Self {
        Self {
            text: text.into(),
            image,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&AssetId> {
        self.image.as_ref()
    }

    /// True when there is neither text nor image
    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && self.image.is_none()
    }
}

/// The state a page is currently in.
///
/// Loading, Empty and Error come with built-in tips (see the constructors).
/// Custom and Content start blank: callers render those themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PageState {
    Loading(Tip),
    Empty(Tip),
    Error(Tip),
    Custom(Tip),
    Content(Tip),
}

impl Default for PageState {
    fn default() -> Self {
        Self::content()
    }
}

impl PageState {
    pub fn loading() -> Self {
        Self::Loading(Tip::new(DEFAULT_LOADING_TEXT, Some(AssetId::TIP)))
    }

    pub fn empty() -> Self {
        Self::Empty(Tip::new(DEFAULT_EMPTY_TEXT, Some(AssetId::TIP)))
    }

    pub fn error() -> Self {
        Self::Error(Tip::new(DEFAULT_ERROR_TEXT, Some(AssetId::TIP)))
    }

    pub fn custom() -> Self {
        Self::Custom(Tip::default())
    }

    pub fn content() -> Self {
        Self::Content(Tip::default())
    }

    /// Fresh state of the given kind with its built-in tip
    pub fn of(kind: StateKind) -> Self {
        match kind {
            StateKind::Loading => Self::loading(),
            StateKind::Empty => Self::empty(),
            StateKind::Error => Self::error(),
            StateKind::Custom => Self::custom(),
            StateKind::Content => Self::content(),
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            Self::Loading(_) => StateKind::Loading,
            Self::Empty(_) => StateKind::Empty,
            Self::Error(_) => StateKind::Error,
            Self::Custom(_) => StateKind::Custom,
            Self::Content(_) => StateKind::Content,
        }
    }

    pub fn tip(&self) -> &Tip {
        match self {
            Self::Loading(tip)
            | Self::Empty(tip)
            | Self::Error(tip)
            | Self::Custom(tip)
            | Self::Content(tip) => tip,
        }
    }

    fn tip_mut(&mut self) -> &mut Tip {
        match self {
            Self::Loading(tip)
            | Self::Empty(tip)
            | Self::Error(tip)
            | Self::Custom(tip)
            | Self::Content(tip) => tip,
        }
    }

    pub fn text(&self) -> &str {
        self.tip().text()
    }

    pub fn image(&self) -> Option<&AssetId> {
        self.tip().image()
    }

    /// Same state with a different tip text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.tip_mut().text = text.into();
        self
    }

    /// Same state with a different (or no) tip image
    pub fn with_image(mut self, image: Option<AssetId>) -> Self {
        self.tip_mut().image = image;
        self
    }
}

/// Tag of a [`PageState`] without its tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    Loading,
    Empty,
    Error,
    Custom,
    #[default]
    Content,
}

impl StateKind {
    /// All kinds, in the order the demo shows them
    pub fn all() -> &'static [StateKind] {
        &[
            StateKind::Content,
            StateKind::Loading,
            StateKind::Empty,
            StateKind::Error,
            StateKind::Custom,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StateKind::Loading => "Loading",
            StateKind::Empty => "Empty",
            StateKind::Error => "Error",
            StateKind::Custom => "Custom",
            StateKind::Content => "Content",
        }
    }

    pub fn default_state(&self) -> PageState {
        PageState::of(*self)
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown page state: {0} (expected one of loading, empty, error, custom, content)")]
pub struct ParseStateKindError(String);

impl FromStr for StateKind {
    type Err = ParseStateKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStateKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        for state in [PageState::loading(), PageState::empty(), PageState::error()] {
            assert!(
                !state.text().is_empty(),
                "{:?} should have a tip",
                state.kind()
            );
            assert_eq!(state.image(), Some(&AssetId::TIP));
        }

        for state in [PageState::custom(), PageState::content()] {
            assert!(state.text().is_empty());
            assert!(state.image().is_none());
            assert!(state.tip().is_blank());
        }

        assert_eq!(PageState::loading().text(), "加载中");
    }

    #[test]
    fn test_with_text_does_not_leak() {
        let custom_error = PageState::error().with_text("哎呀,出错了").with_image(None);
        assert_eq!(custom_error.text(), "哎呀,出错了");
        assert!(custom_error.image().is_none());

        // A fresh value still carries the built-in tip
        let fresh = PageState::error();
        assert_eq!(fresh.text(), DEFAULT_ERROR_TEXT);
        assert_eq!(fresh.image(), Some(&AssetId::TIP));
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in StateKind::all() {
            assert_eq!(kind.default_state().kind(), *kind);
            assert_eq!(kind.name().parse::<StateKind>().unwrap(), *kind);
        }
        assert_eq!(StateKind::all().len(), 5);
    }

    #[test]
    fn test_parse_kind_case_insensitive() {
        assert_eq!("loading".parse::<StateKind>().unwrap(), StateKind::Loading);
        assert_eq!(" ERROR ".parse::<StateKind>().unwrap(), StateKind::Error);
        assert!("retry".parse::<StateKind>().is_err());
    }

    #[test]
    fn test_default_is_content() {
        assert_eq!(PageState::default(), PageState::content());
        assert_eq!(StateKind::default(), StateKind::Content);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(PageState::empty()).unwrap();
        assert_eq!(json["state"], "empty");
        assert_eq!(json["text"], DEFAULT_EMPTY_TEXT);
        assert_eq!(json["image"], "tip");

        let content = serde_json::to_value(PageState::content()).unwrap();
        assert_eq!(content["state"], "content");
        assert!(content.get("image").is_none());

        let json = r#"{"state":"error","text":"boom"}"#;
        let parsed: PageState = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, PageState::error().with_text("boom").with_image(None));
    }
}
