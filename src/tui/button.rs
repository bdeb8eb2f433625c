//! Styled push button.
//!
//! Stateless: appearance is a pure function of variant, size, focus,
//! disabled flag and style overrides. The press payload plays the role
//! of a click handler; a disabled button never yields it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Widget};
use serde::{Deserialize, Serialize};

use super::theme;

/// Visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// White bold text on black; turns red when focused.
    #[default]
    Primary,
    /// Dark text on light gray.
    Secondary,
    /// Bordered, no fill.
    Outline,
}

/// Button size: height in rows and horizontal padding in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub const fn height(self) -> u16 {
        match self {
            Size::Small => 1,
            Size::Medium => 3,
            Size::Large => 5,
        }
    }

    pub const fn padding(self) -> u16 {
        match self {
            Size::Small => 1,
            Size::Medium => 2,
            Size::Large => 3,
        }
    }
}

/// A push button carrying an optional press payload of type `A`.
#[derive(Debug, Clone, PartialEq)]
pub struct Button<A> {
    label: String,
    variant: Variant,
    size: Size,
    style: Style,
    disabled: bool,
    focused: bool,
    on_press: Option<A>,
}

impl<A> Button<A> {
    /// A medium primary button with no payload.
    pub fn new(label: impl Into<String>) -> Self {
        Button {
            label: label.into(),
            variant: Variant::default(),
            size: Size::default(),
            style: Style::new(),
            disabled: false,
            focused: false,
            on_press: None,
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Style patched over the variant's look (e.g. a custom background).
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn on_press(mut self, payload: A) -> Self {
        self.on_press = Some(payload);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_focused(&self) -> bool {
        self.focused && !self.disabled
    }

    /// The payload, unless the button is disabled.
    pub fn press(&self) -> Option<&A> {
        if self.disabled {
            None
        } else {
            self.on_press.as_ref()
        }
    }

    /// Rows needed to draw this button.
    pub fn height(&self) -> u16 {
        match self.variant {
            // Border needs a row above and below the label.
            Variant::Outline => self.size.height().max(3),
            _ => self.size.height(),
        }
    }

    /// Columns needed to draw the label with padding (and border).
    pub fn width(&self) -> u16 {
        let border = if self.variant == Variant::Outline { 2 } else { 0 };
        let label = u16::try_from(self.label.chars().count()).unwrap_or(u16::MAX);
        label
            .saturating_add(self.size.padding() * 2)
            .saturating_add(border)
    }

    /// Final cell style: variant look, focus, disabled dimming, overrides.
    pub fn appearance(&self) -> Style {
        let base = match (self.variant, self.is_focused()) {
            (Variant::Primary, false) => theme::STYLE_BUTTON_PRIMARY,
            (Variant::Primary, true) => theme::STYLE_BUTTON_PRIMARY_FOCUS,
            (Variant::Secondary, false) => theme::STYLE_BUTTON_SECONDARY,
            (Variant::Secondary, true) => theme::STYLE_BUTTON_SECONDARY_FOCUS,
            (Variant::Outline, false) => theme::STYLE_BUTTON_OUTLINE,
            (Variant::Outline, true) => theme::STYLE_BUTTON_OUTLINE_FOCUS,
        };

        let mut style = base.patch(self.style);
        if self.is_focused() {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if self.disabled {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }
}

impl<A> Widget for &Button<A> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = self.appearance();

        let inner = if self.variant == Variant::Outline {
            let border_style = if self.is_focused() {
                theme::STYLE_BUTTON_BORDER_FOCUS
            } else {
                theme::STYLE_BUTTON_BORDER
            };
            let block = Block::bordered().border_style(border_style).style(style);
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            buf.set_style(area, style);
            area
        };

        let pad = self.size.padding().min(inner.width / 2);
        let label_area = Rect::new(
            inner.x + pad,
            inner.y + inner.height / 2,
            inner.width - pad * 2,
            1.min(inner.height),
        );
        Line::from(self.label.as_str()).centered().render(label_area, buf);
    }
}

// ============================================================================
// TESTS
// ============================================================================
