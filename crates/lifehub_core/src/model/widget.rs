//! Dashboard widget descriptors.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type WidgetId = Uuid;

/// Widget types the dashboard knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    Calendar,
    Tasks,
    FocusTimer,
    Weather,
    Notes,
    Email,
}

impl WidgetKind {
    /// Stable display/config name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "Calendar",
            Self::Tasks => "Tasks",
            Self::FocusTimer => "FocusTimer",
            Self::Weather => "Weather",
            Self::Notes => "Notes",
            Self::Email => "Email",
        }
    }

    /// Default card title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Calendar => "Today's Schedule",
            Self::Tasks => "Tasks",
            Self::FocusTimer => "Focus Timer",
            Self::Weather => "Weather",
            Self::Notes => "Notes",
            Self::Email => "Inbox",
        }
    }
}

impl Display for WidgetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WidgetKind {
    type Err = UnknownWidgetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Calendar" => Ok(Self::Calendar),
            "Tasks" => Ok(Self::Tasks),
            "FocusTimer" => Ok(Self::FocusTimer),
            "Weather" => Ok(Self::Weather),
            "Notes" => Ok(Self::Notes),
            "Email" => Ok(Self::Email),
            other => Err(UnknownWidgetError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWidgetError(pub String);

impl Display for UnknownWidgetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown widget: `{}`", self.0)
    }
}

impl Error for UnknownWidgetError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// One card on the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub title: String,
    pub is_visible: bool,
    /// Zero-based position; dense after every layout change.
    pub order: u32,
    pub size: WidgetSize,
}

impl Widget {
    pub fn new(kind: WidgetKind, order: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: kind.title().to_string(),
            is_visible: true,
            order,
            size: WidgetSize::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Widget, WidgetKind, WidgetSize};

    #[test]
    fn widget_names_are_stable() {
        for kind in [
            WidgetKind::Calendar,
            WidgetKind::Tasks,
            WidgetKind::FocusTimer,
            WidgetKind::Weather,
            WidgetKind::Notes,
            WidgetKind::Email,
        ] {
            assert_eq!(
                kind.as_str().parse::<WidgetKind>().expect("name should parse"),
                kind
            );
        }
    }

    #[test]
    fn rejects_unknown_widget_name() {
        let err = "Stocks".parse::<WidgetKind>().expect_err("unknown widget");
        assert_eq!(err.to_string(), "unknown widget: `Stocks`");
    }

    #[test]
    fn new_widget_gets_unique_id_and_kind_defaults() {
        let first = Widget::new(WidgetKind::Email, 2);
        let second = Widget::new(WidgetKind::Email, 2);
        assert_ne!(first.id, second.id);
        assert_eq!(first.title, "Inbox");
        assert!(first.is_visible);
        assert_eq!(first.size, WidgetSize::Medium);
    }
}
