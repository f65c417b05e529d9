//! Widget arrangement for the dashboard grid.

use crate::model::insight::LayoutSuggestion;
use crate::model::widget::{Widget, WidgetKind};
use log::debug;
use std::collections::BTreeSet;

/// Widgets shown on a fresh dashboard, in display order.
pub const DEFAULT_WIDGETS: &[WidgetKind] = &[
    WidgetKind::Calendar,
    WidgetKind::Tasks,
    WidgetKind::FocusTimer,
    WidgetKind::Weather,
    WidgetKind::Notes,
];

/// Ordered widget set with at most one widget per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetLayout {
    widgets: Vec<Widget>,
}

impl WidgetLayout {
    /// Builds a layout from kinds in display order. Repeated kinds are dropped.
    pub fn from_kinds(kinds: &[WidgetKind]) -> Self {
        let mut seen = BTreeSet::new();
        let widgets = kinds
            .iter()
            .copied()
            .filter(|kind| seen.insert(*kind))
            .enumerate()
            .map(|(index, kind)| Widget::new(kind, dense_order(index)))
            .collect();
        Self { widgets }
    }

    /// Widgets in display order, hidden ones included.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn visible_kinds(&self) -> Vec<WidgetKind> {
        self.widgets
            .iter()
            .filter(|widget| widget.is_visible)
            .map(|widget| widget.kind)
            .collect()
    }

    /// Shows or hides one widget. Returns `false` when the kind is not placed.
    pub fn set_visible(&mut self, kind: WidgetKind, visible: bool) -> bool {
        match self.widgets.iter_mut().find(|widget| widget.kind == kind) {
            Some(widget) => {
                widget.is_visible = visible;
                true
            }
            None => false,
        }
    }

    /// Moves promoted widgets to the front in suggestion order, then hides
    /// the hidden ones. Kinds not placed on this layout are skipped.
    pub fn apply(&mut self, suggestion: &LayoutSuggestion) {
        let mut promoted: Vec<Widget> = Vec::new();
        for kind in &suggestion.widgets_to_promote {
            if let Some(index) = self.widgets.iter().position(|widget| widget.kind == *kind) {
                let mut widget = self.widgets.remove(index);
                widget.is_visible = true;
                promoted.push(widget);
            }
        }
        promoted.append(&mut self.widgets);
        self.widgets = promoted;

        for kind in &suggestion.widgets_to_hide {
            self.set_visible(*kind, false);
        }
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            widget.order = dense_order(index);
        }

        debug!(
            "event=layout_apply module=dashboard status=ok theme={} promoted={} hidden={}",
            suggestion.suggested_theme,
            suggestion.widgets_to_promote.len(),
            suggestion.widgets_to_hide.len()
        );
    }
}

impl Default for WidgetLayout {
    fn default() -> Self {
        Self::from_kinds(DEFAULT_WIDGETS)
    }
}

fn dense_order(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
