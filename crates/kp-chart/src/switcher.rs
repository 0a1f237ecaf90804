//! North/South style toggle.

use std::fmt;

use crate::chart::ChartStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitcherOption {
    pub style: ChartStyle,
    pub label: &'static str,
    pub active: bool,
}

/// Two-state toggle. Every selection is reported through the change
/// callback, including re-selecting the current style.
pub struct StyleSwitcher<'a> {
    value: ChartStyle,
    on_change: Option<Box<dyn FnMut(ChartStyle) + 'a>>,
}

impl<'a> StyleSwitcher<'a> {
    pub fn new(value: ChartStyle) -> Self {
        Self {
            value,
            on_change: None,
        }
    }

    pub fn on_change(mut self, callback: impl FnMut(ChartStyle) + 'a) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn value(&self) -> ChartStyle {
        self.value
    }

    pub fn options(&self) -> [SwitcherOption; 2] {
        [ChartStyle::North, ChartStyle::South].map(|style| SwitcherOption {
            style,
            label: style.label(),
            active: style == self.value,
        })
    }

    pub fn select(&mut self, style: ChartStyle) {
        self.value = style;
        if let Some(callback) = self.on_change.as_mut() {
            callback(style);
        }
    }

    pub fn toggle(&mut self) -> ChartStyle {
        let next = self.value.toggled();
        self.select(next);
        next
    }
}

impl fmt::Debug for StyleSwitcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSwitcher")
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
