#![forbid(unsafe_code)]

//! Presentation of a tooltip as three styled elements.
//!
//! ```text
//! <div class="tooltip">            wrapper: position, font size, width
//!   <div class="tooltip-content">  content: corner override + nudge
//!   <div class="tooltip-arrow">    arrow: rotation + translation
//! ```
//!
//! While measuring, the wrapper is rendered with `visibility: hidden` and no
//! position so the host can read its size without a visible flash.

use std::fmt::Write as _;

use anchortip_core::geometry::{Px, css_number};

use crate::config::TooltipConfig;
use crate::style::{StyleDeclarations, Visibility};
use crate::tooltip::TooltipPhase;

/// Non-breaking space padding around the content text.
const PAD: char = '\u{a0}';

/// Inline styles for the content and arrow elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipBody<'a> {
    pub content: StyleDeclarations,
    pub arrow: StyleDeclarations,
    pub text: &'a str,
}

/// Rendered form of a tooltip at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipView<'a> {
    pub wrapper: StyleDeclarations,
    /// `None` while hidden: no children are rendered.
    pub body: Option<TooltipBody<'a>>,
}

impl<'a> TooltipView<'a> {
    pub(crate) fn build(phase: &TooltipPhase, config: &TooltipConfig, text: &'a str) -> Self {
        let mut wrapper = StyleDeclarations::new();
        let mut content = StyleDeclarations::new();
        let mut arrow = StyleDeclarations::new();

        match phase {
            TooltipPhase::Hidden => {}
            TooltipPhase::Measuring => wrapper.push("visibility", Visibility::Hidden),
            TooltipPhase::Positioned(layout) => {
                wrapper.extend(&layout.position.declarations());
                content.extend(&layout.content.declarations());
                arrow.extend(&layout.arrow.declarations());
            }
        }

        wrapper.push("font-size", format_args!("{}rem", css_number(config.font_size)));
        wrapper.push("width", config.width);

        let body = match phase {
            TooltipPhase::Hidden => None,
            _ => {
                arrow.push("width", Px(config.arrow_size));
                arrow.push("height", Px(config.arrow_size));
                Some(TooltipBody {
                    content,
                    arrow,
                    text,
                })
            }
        };

        Self { wrapper, body }
    }

    /// True when the content and arrow elements are rendered.
    #[must_use]
    pub fn content_visible(&self) -> bool {
        self.body.is_some()
    }

    /// Render as an HTML fragment.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<div class=\"tooltip\" style=\"{}\">",
            escape(&self.wrapper.to_css())
        );
        if let Some(body) = &self.body {
            let _ = write!(
                out,
                "<div class=\"tooltip-content\" style=\"{}\">{PAD}{}{PAD}</div>",
                escape(&body.content.to_css()),
                escape(body.text)
            );
            let _ = write!(
                out,
                "<div class=\"tooltip-arrow\" style=\"{}\"></div>",
                escape(&body.arrow.to_css())
            );
        }
        out.push_str("</div>");
        out
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
