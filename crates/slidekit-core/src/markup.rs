//! Element tree for HTML hosts.
//!
//! The class names produced here are the contract stylesheets and
//! integration tests rely on. Keep them stable.

use std::fmt::Write as _;

use crate::config::Variant;
use crate::geometry::{format_percent, format_value, SliderGeometry, Tooltip, TOOLTIP_TOP};
use crate::slider::Slider;
use crate::state::Handle;

/// Colour of discrete step markers.
pub const MARKER_COLOR: &str = "#47B647";

/// A node in the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element with ordered attributes and inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub style: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add one or more whitespace-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }

    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.style.push((property.to_string(), value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text content of this element's subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }

    /// All elements in this subtree (self included) carrying `class`, in
    /// document order.
    pub fn find_all(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(class, &mut found);
        found
    }

    /// First element in this subtree carrying `class`.
    pub fn find(&self, class: &str) -> Option<&Element> {
        self.find_all(class).into_iter().next()
    }

    /// All elements with the given tag name, in document order.
    pub fn find_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        if self.tag == tag {
            found.push(self);
        }
        for child in &self.children {
            if let Node::Element(element) = child {
                found.extend(element.find_tag(tag));
            }
        }
        found
    }

    fn collect<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            if let Node::Element(element) = child {
                element.collect(class, found);
            }
        }
    }

    fn is_void(&self) -> bool {
        matches!(self.tag, "input" | "br" | "img")
    }

    /// Serialise to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if !self.style.is_empty() {
            let css: Vec<String> = self
                .style
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            let _ = write!(out, " style=\"{}\"", escape(&css.join("; ")));
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Element(element) => element.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
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
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Class of the container wrapping a variant's track.
pub fn variant_container_class(variant: Variant) -> &'static str {
    match variant {
        Variant::Range => "range-slider-container",
        Variant::Discrete => "discrete-slider-container",
        // legacy spelling, existing stylesheets target it
        Variant::Continuous => "continous-slider-container",
    }
}

/// Render a slider's current state.
pub fn render(slider: &Slider) -> Element {
    let config = slider.config();
    let geometry = slider.geometry();

    let mut root = Element::new("div")
        .class("slider-container")
        .class(config.size.height_class());
    if let Some(extra) = &config.class_name {
        root = root.class(extra);
    }
    for (property, value) in &config.style {
        root = root.style(property, value.clone());
    }

    let mut container = Element::new("div").class(variant_container_class(config.variant));
    if let Some(status_class) = slider.status().css_class() {
        container = container.class(status_class);
    }
    container = container.attr("aria-disabled", config.disabled.to_string());

    let mut track = Element::new("div")
        .class("slider-track")
        .style("opacity", format_value(f64::from(geometry.opacity)));
    track = track.child(
        Element::new("div")
            .class("slider-range")
            .style("left", format_percent(geometry.fill.left))
            .style("right", format_percent(geometry.fill.right)),
    );

    match config.variant {
        Variant::Range => {
            for (handle, wrapper_class) in [
                (Handle::Start, "min-slider-wrapper"),
                (Handle::End, "max-slider-wrapper"),
            ] {
                let mut wrapper = Element::new("div").class(wrapper_class);
                if let Some(tooltip) = tooltip_for(&geometry, handle) {
                    wrapper = wrapper.child(tooltip_element(tooltip));
                }
                wrapper = wrapper.child(range_input(slider, handle, None));
                track = track.child(wrapper);
            }
        }
        Variant::Discrete => {
            for marker in &geometry.markers {
                track = track.child(
                    Element::new("div")
                        .class("slider-step-marker")
                        .attr("data-value", format_value(marker.value))
                        .style("position", "absolute")
                        .style("left", format_percent(marker.offset))
                        .style("width", config.size.marker_css())
                        .style("height", config.size.marker_css())
                        .style("background-color", MARKER_COLOR)
                        .style("border-radius", "50%")
                        .style("transform", "translateX(-50%)")
                        .style("top", "20%")
                        .style(
                            "margin-top",
                            format!("{}px", config.size.marker_margin_top()),
                        )
                        .style("z-index", "1"),
                );
            }
            if let Some(tooltip) = tooltip_for(&geometry, Handle::Start) {
                track = track.child(tooltip_element(tooltip));
            }
            track = track.child(range_input(
                slider,
                Handle::Start,
                Some(config.effective_step()),
            ));
        }
        Variant::Continuous => {
            if let Some(tooltip) = tooltip_for(&geometry, Handle::Start) {
                track = track.child(tooltip_element(tooltip));
            }
            track = track.child(range_input(slider, Handle::Start, None));
        }
    }

    root.child(container.child(track))
}

fn tooltip_for(geometry: &SliderGeometry, handle: Handle) -> Option<&Tooltip> {
    geometry.tooltips.iter().find(|t| t.handle == handle)
}

fn tooltip_element(tooltip: &Tooltip) -> Element {
    let class = match tooltip.handle {
        Handle::Start => "min-tooltip",
        Handle::End => "max-tooltip",
    };
    Element::new("span")
        .class(class)
        .style("position", "absolute")
        .style("left", format_percent(tooltip.left))
        .style("top", format!("{}px", TOOLTIP_TOP))
        .text(tooltip.text.clone())
}

fn range_input(slider: &Slider, handle: Handle, step: Option<f64>) -> Element {
    let config = slider.config();
    let bounds = slider.bounds();
    let value = slider.value().get(handle).unwrap_or(bounds.min);

    let mut input = Element::new("input")
        .attr("type", "range")
        .class("slider-input");
    if config.variant == Variant::Range {
        input = input.class("range-slider");
    }
    input = input
        .class(config.size.thumb_class())
        .attr("min", format_value(bounds.min))
        .attr("max", format_value(bounds.max));
    if let Some(step) = step {
        input = input.attr("step", format_value(step));
    }
    input = input.attr("value", format_value(value));
    if config.disabled {
        input = input.attr("disabled", "");
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Size, SliderConfig, Status};
    use crate::slider::SliderCommand;
    use crate::state::PointerEvent;

    #[test]
    fn test_range_structure() {
        let config = SliderConfig::default()
            .with_tooltip(true)
            .with_defaults(20.0, Some(80.0));
        let tree = render(&Slider::new(config));

        assert!(tree.has_class("slider-container"));
        assert!(tree.has_class("h-6"));
        let container = tree.find("range-slider-container").unwrap();
        assert_eq!(container.attribute("aria-disabled"), Some("false"));

        let range = tree.find("slider-range").unwrap();
        assert_eq!(range.style_value("left"), Some("20%"));
        assert_eq!(range.style_value("right"), Some("20%"));

        assert_eq!(tree.find("min-tooltip").unwrap().text_content(), "20");
        assert_eq!(tree.find("max-tooltip").unwrap().text_content(), "80");
        assert_eq!(
            tree.find("max-tooltip").unwrap().style_value("left"),
            Some("80%")
        );

        let inputs = tree.find_tag("input");
        assert_eq!(inputs.len(), 2);
        assert!(inputs.iter().all(|i| i.has_class("range-slider")));
        assert_eq!(inputs[0].attribute("value"), Some("20"));
        assert_eq!(inputs[1].attribute("value"), Some("80"));
        assert_eq!(inputs[1].attribute("step"), None);
    }

    #[test]
    fn test_discrete_markers_rendered() {
        let tree = render(&Slider::new(SliderConfig::new(Variant::Discrete)));
        let markers = tree.find_all("slider-step-marker");
        let values: Vec<&str> = markers
            .iter()
            .filter_map(|m| m.attribute("data-value"))
            .collect();
        assert_eq!(values, vec!["0", "20", "40", "60", "80", "100"]);
        assert_eq!(markers[2].style_value("left"), Some("40%"));
        assert_eq!(markers[0].style_value("width"), Some("0.6rem"));

        let input = tree.find("slider-input").unwrap();
        assert_eq!(input.attribute("step"), Some("20"));
        assert!(!input.has_class("range-slider"));
    }

    #[test]
    fn test_continuous_uses_legacy_class() {
        let config = SliderConfig::new(Variant::Continuous).with_defaults(50.0, None);
        let tree = render(&Slider::new(config));
        assert!(tree.find("continous-slider-container").is_some());
        let range = tree.find("slider-range").unwrap();
        assert_eq!(range.style_value("left"), Some("0%"));
        assert_eq!(range.style_value("right"), Some("50%"));
        assert!(tree.find("min-tooltip").is_none());
    }

    #[test]
    fn test_disabled_attributes() {
        let tree = render(&Slider::new(SliderConfig::default().with_disabled(true)));
        let container = tree.find("range-slider-container").unwrap();
        assert_eq!(container.attribute("aria-disabled"), Some("true"));
        assert_eq!(
            tree.find("slider-track").unwrap().style_value("opacity"),
            Some("0.5")
        );
        assert!(tree
            .find_tag("input")
            .iter()
            .all(|i| i.attribute("disabled").is_some()));
    }

    #[test]
    fn test_status_and_size_classes() {
        let config = SliderConfig::new(Variant::Continuous).with_size(Size::Large);
        let mut slider = Slider::new(config);
        slider.apply(SliderCommand::Pointer(PointerEvent::Enter));
        slider.apply(SliderCommand::Pointer(PointerEvent::Down));
        let tree = render(&slider);
        assert!(tree.has_class("h-8"));
        assert!(tree.find("slider-active").is_some());
        assert!(tree.find("slider-input").unwrap().has_class("w-6"));

        let idle = render(&Slider::new(
            SliderConfig::default().with_status(Status::Hover),
        ));
        assert!(idle.find("slider-hover").is_some());
    }

    #[test]
    fn test_pass_through_class_and_style() {
        let config = SliderConfig::default()
            .with_class_name("wide primary")
            .with_style("width", "320px");
        let tree = render(&Slider::new(config));
        assert!(tree.has_class("wide"));
        assert!(tree.has_class("primary"));
        assert_eq!(tree.style_value("width"), Some("320px"));
    }

    #[test]
    fn test_to_html() {
        let config = SliderConfig::new(Variant::Continuous)
            .with_defaults(50.0, None)
            .with_class_name("a\"b");
        let html = render(&Slider::new(config)).to_html();
        assert!(html.starts_with("<div class=\"slider-container h-6 a&quot;b\">"));
        assert!(html.contains(
            "<div class=\"slider-range\" style=\"left: 0%; right: 50%\"></div>"
        ));
        assert!(html.contains(
            "<input class=\"slider-input w-4 h-4\" type=\"range\" min=\"0\" max=\"100\" value=\"50\">"
        ));
        assert!(!html.contains("</input>"));
        assert!(html.ends_with("</div></div></div>"));
    }
}
