//! SVG document builder
//!
//! [`SvgDocument`] owns the drawing list and the current [`Style`]. Element
//! methods only format markup and return it; callers decide whether to
//! [`add`](SvgDocument::add) the result to the drawing list or to nest it in
//! a container such as [`g`](SvgDocument::g).

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::attrs::Attrs;
use crate::error::SvgError;
use crate::style::Style;

const XMLNS: &str = "http://www.w3.org/2000/svg";
const XMLNS_XLINK: &str = "http://www.w3.org/1999/xlink";

const DOCTYPE: &str = r#"<?xml version="1.0"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">

"#;

// Written as-is into the header; the document's viewport is not used here.
const VIEWPORT_ATTR: &str = "0 0 1000 1000";

const FOOTER: &str = "</svg>";

/// `(x, y, width, height)`
pub type Viewport = (f64, f64, f64, f64);

pub const DEFAULT_VIEWPORT: Viewport = (0.0, 0.0, 1000.0, 1000.0);

/// Render a self-closing tag: `<name attrs />`
pub fn tag(name: &str, attrs: &Attrs) -> String {
    format!("<{}{} />", name, attrs.render())
}

/// Render a tag wrapping already rendered children
///
/// Without children this falls back to a self-closing tag.
pub fn container(name: &str, attrs: &Attrs, children: &[String]) -> String {
    if children.is_empty() {
        return tag(name, attrs);
    }
    format!(
        "<{name}{}>\n{}\n</{name}>\n",
        attrs.render(),
        children.join("\n")
    )
}

/// Parameters of a `<radialGradient>`, given in percent
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub cx: f64,
    pub cy: f64,
    pub fx: f64,
    pub fy: f64,
    pub fr: f64,
    pub r: f64,
    pub spread_method: String,
}

impl Default for RadialGradient {
    fn default() -> Self {
        Self {
            cx: 50.0,
            cy: 50.0,
            fx: 50.0,
            fy: 50.0,
            fr: 0.0,
            r: 50.0,
            spread_method: "pad".to_string(),
        }
    }
}

impl RadialGradient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the end circle center
    pub fn with_center(mut self, cx: f64, cy: f64) -> Self {
        self.cx = cx;
        self.cy = cy;
        self
    }

    /// Set the start circle center
    pub fn with_focus(mut self, fx: f64, fy: f64) -> Self {
        self.fx = fx;
        self.fy = fy;
        self
    }

    pub fn with_focal_radius(mut self, fr: f64) -> Self {
        self.fr = fr;
        self
    }

    pub fn with_radius(mut self, r: f64) -> Self {
        self.r = r;
        self
    }

    pub fn with_spread_method(mut self, method: impl Into<String>) -> Self {
        self.spread_method = method.into();
        self
    }
}

/// An SVG document under construction
///
/// All mutation goes through `&mut self`; sharing one document between
/// threads needs external locking.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: String,
    height: String,
    viewport: Viewport,
    inline: bool,
    style: Style,
    drawing: Vec<String>,
}

impl SvgDocument {
    /// Create an inline document with the default viewport
    pub fn new(width: impl fmt::Display, height: impl fmt::Display) -> Self {
        Self {
            width: width.to_string(),
            height: height.to_string(),
            viewport: DEFAULT_VIEWPORT,
            inline: true,
            style: Style::new(),
            drawing: vec![],
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set whether the XML prolog and DOCTYPE are left out
    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    /// Style merged into shapes built with `styled = true`
    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Markup added so far, in insertion order
    pub fn drawing(&self) -> &[String] {
        &self.drawing
    }

    /// Append rendered markup to the drawing list
    pub fn add(&mut self, item: impl Into<String>) {
        let item = item.into();
        log::debug!("adding {} bytes of markup", item.len());
        self.drawing.push(item);
    }

    fn header(&self) -> String {
        let doctype = if self.inline { "" } else { DOCTYPE };
        format!(
            r#"{doctype}<svg xmlns="{XMLNS}"
     xmlns:xlink="{XMLNS_XLINK}"
     width="{}" height="{}"
     viewPort="{VIEWPORT_ATTR}">
"#,
            self.width, self.height
        )
    }

    /// Build the final SVG text
    pub fn render(&self) -> String {
        let mut svg = self.header();
        for item in &self.drawing {
            svg.push_str("\n    ");
            svg.push_str(item);
        }
        svg.push('\n');
        svg.push_str(FOOTER);
        svg
    }

    /// Write the rendered document, followed by a newline, to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SvgError> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        writeln!(file, "{}", self.render())?;
        log::debug!("saved SVG to {}", path.display());
        Ok(())
    }

    /// Append the current style to `attrs` when requested and non-empty
    fn styled(&self, mut attrs: Attrs, styled: bool) -> Attrs {
        if styled {
            let style = self.style.serialize();
            if !style.is_empty() {
                attrs.set("style", style);
            }
        }
        attrs
    }

    pub fn rect(&self, attrs: Attrs, styled: bool) -> String {
        tag("rect", &self.styled(attrs, styled))
    }

    pub fn circle(&self, attrs: Attrs, styled: bool) -> String {
        tag("circle", &self.styled(attrs, styled))
    }

    pub fn ellipse(&self, attrs: Attrs, styled: bool) -> String {
        tag("ellipse", &self.styled(attrs, styled))
    }

    pub fn line(
        &self,
        x1: impl fmt::Display,
        y1: impl fmt::Display,
        x2: impl fmt::Display,
        y2: impl fmt::Display,
        attrs: Attrs,
        styled: bool,
    ) -> String {
        let mut all = Attrs::new()
            .with("x1", x1)
            .with("y1", y1)
            .with("x2", x2)
            .with("y2", y2);
        all.extend(attrs);
        tag("line", &self.styled(all, styled))
    }

    /// `<polyline points="x1,y1 x2,y2 ...">`
    pub fn polyline<X, Y>(&self, points: &[(X, Y)], attrs: Attrs, styled: bool) -> String
    where
        X: fmt::Display,
        Y: fmt::Display,
    {
        let points = points
            .iter()
            .map(|(x, y)| format!("{},{}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        let mut all = Attrs::new().with("points", points);
        all.extend(attrs);
        tag("polyline", &self.styled(all, styled))
    }

    /// `<path d="...">` with each step written as given
    pub fn path<S: fmt::Display>(&self, steps: &[S], attrs: Attrs, styled: bool) -> String {
        let d = steps
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let mut all = Attrs::new().with("d", d);
        all.extend(attrs);
        tag("path", &self.styled(all, styled))
    }

    /// `<image>`, turning an `xlink_href` entry into `xlink:href`
    pub fn image(&self, mut attrs: Attrs) -> String {
        if let Some(href) = attrs.remove("xlink_href") {
            attrs.set_opt("xlink:href", href);
        }
        tag("image", &attrs)
    }

    pub fn stop(&self, attrs: Attrs) -> String {
        tag("stop", &attrs)
    }

    pub fn linear_gradient(&self, id: &str, stops: &[String], attrs: Attrs) -> String {
        container("linearGradient", &with_id(id, attrs), stops)
    }

    /// `<radialGradient>` with percentage parameters; no extra attributes
    pub fn radial_gradient(&self, id: &str, stops: &[String], params: &RadialGradient) -> String {
        format!(
            "<radialGradient id=\"{}\" cx=\"{}%\" cy=\"{}%\" fx=\"{}%\" fy=\"{}%\" fr=\"{}%\" r=\"{}%\" spreadMethod=\"{}\">\n{}\n</radialGradient>\n",
            id,
            params.cx,
            params.cy,
            params.fx,
            params.fy,
            params.fr,
            params.r,
            params.spread_method,
            stops.join("\n")
        )
    }

    pub fn pattern(&self, id: &str, children: &[String], attrs: Attrs) -> String {
        container("pattern", &with_id(id, attrs), children)
    }

    pub fn symbol(&self, id: &str, children: &[String], attrs: Attrs) -> String {
        container("symbol", &with_id(id, attrs), children)
    }

    pub fn defs(&self, children: &[String], attrs: Attrs) -> String {
        container("defs", &attrs, children)
    }

    /// Group element
    pub fn g(&self, children: &[String], attrs: Attrs) -> String {
        container("g", &attrs, children)
    }

    /// `<text>` wrapping `content`, which may itself be markup
    pub fn text(&self, content: &str, attrs: Attrs) -> String {
        if content.is_empty() {
            return tag("text", &attrs);
        }
        container("text", &attrs, &[content.to_string()])
    }

    /// Same output as [`text`](Self::text); no `<tspan>` tag is emitted
    pub fn tspan(&self, content: &str, attrs: Attrs) -> String {
        self.text(content, attrs)
    }
}

fn with_id(id: &str, attrs: Attrs) -> Attrs {
    let mut all = Attrs::new().with("id", id);
    all.extend(attrs);
    all
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProperty;

    fn square() -> Attrs {
        Attrs::new()
            .with("x", 0)
            .with("y", 0)
            .with("width", 10)
            .with("height", 10)
    }

    #[test]
    fn test_rect_without_style() {
        let mut doc = SvgDocument::new(100, 100);
        doc.style_mut().set(StyleProperty::Fill, "red").unwrap();
        assert_eq!(
            doc.rect(square(), false),
            r#"<rect x="0" y="0" width="10" height="10" />"#
        );
    }

    #[test]
    fn test_rect_with_style() {
        let mut doc = SvgDocument::new(100, 100);
        doc.style_mut().set(StyleProperty::Fill, "red").unwrap();
        assert_eq!(
            doc.rect(square(), true),
            r#"<rect x="0" y="0" width="10" height="10" style="fill:red" />"#
        );
    }

    #[test]
    fn test_empty_style_is_not_rendered() {
        let doc = SvgDocument::new(100, 100);
        assert_eq!(
            doc.circle(Attrs::new().with("cx", 5).with("cy", 5).with("r", 2), true),
            r#"<circle cx="5" cy="5" r="2" />"#
        );
    }

    #[test]
    fn test_style_attr_replaced_in_place() {
        let mut doc = SvgDocument::new(100, 100);
        doc.style_mut().set(StyleProperty::Stroke, "blue").unwrap();
        let attrs = Attrs::new().with("style", "fill:green").with("rx", 4);
        assert_eq!(
            doc.ellipse(attrs, true),
            r#"<ellipse style="stroke:blue" rx="4" />"#
        );
    }

    #[test]
    fn test_line_coordinates_come_first() {
        let doc = SvgDocument::new(10, 10);
        let line = doc.line(0, 1, 2, 3, Attrs::new().with("stroke_width", 2), false);
        assert_eq!(line, r#"<line x1="0" y1="1" x2="2" y2="3" stroke-width="2" />"#);
    }

    #[test]
    fn test_polyline_points() {
        let doc = SvgDocument::new(10, 10);
        let poly = doc.polyline(&[(0, 0), (10, 5), (20, 0)], Attrs::new(), false);
        assert_eq!(poly, r#"<polyline points="0,0 10,5 20,0" />"#);
    }

    #[test]
    fn test_path_steps() {
        let mut doc = SvgDocument::new(10, 10);
        doc.style_mut().set(StyleProperty::Fill, "none").unwrap();
        let path = doc.path(&["M 0 0", "L 10 10", "Z"], Attrs::new().with("id", "p"), true);
        assert_eq!(path, r#"<path d="M 0 0 L 10 10 Z" id="p" style="fill:none" />"#);
    }

    #[test]
    fn test_image_renames_href() {
        let doc = SvgDocument::new(10, 10);
        let image = doc.image(
            Attrs::new()
                .with("xlink_href", "foo.png")
                .with("width", 4),
        );
        assert_eq!(image, r#"<image width="4" xlink:href="foo.png" />"#);
    }

    #[test]
    fn test_image_without_href() {
        let doc = SvgDocument::new(10, 10);
        assert_eq!(doc.image(Attrs::new().with("x", 1)), r#"<image x="1" />"#);
    }

    #[test]
    fn test_stop_ignores_style() {
        let mut doc = SvgDocument::new(10, 10);
        doc.style_mut().set(StyleProperty::Fill, "red").unwrap();
        let stop = doc.stop(Attrs::new().with("offset", "0%").with("stop_color", "#fff"));
        assert_eq!(stop, r##"<stop offset="0%" stop-color="#fff" />"##);
    }

    #[test]
    fn test_linear_gradient_container() {
        let doc = SvgDocument::new(10, 10);
        let stops = vec![
            doc.stop(Attrs::new().with("offset", "0")),
            doc.stop(Attrs::new().with("offset", "1")),
        ];
        let grad = doc.linear_gradient("fade", &stops, Attrs::new().with("x2", "1"));
        assert_eq!(
            grad,
            "<linearGradient id=\"fade\" x2=\"1\">\n<stop offset=\"0\" />\n<stop offset=\"1\" />\n</linearGradient>\n"
        );
    }

    #[test]
    fn test_radial_gradient_defaults() {
        let doc = SvgDocument::new(10, 10);
        let stops = vec![doc.stop(Attrs::new().with("offset", "0"))];
        let grad = doc.radial_gradient("glow", &stops, &RadialGradient::default());
        assert_eq!(
            grad,
            "<radialGradient id=\"glow\" cx=\"50%\" cy=\"50%\" fx=\"50%\" fy=\"50%\" fr=\"0%\" r=\"50%\" spreadMethod=\"pad\">\n<stop offset=\"0\" />\n</radialGradient>\n"
        );
    }

    #[test]
    fn test_radial_gradient_params() {
        let doc = SvgDocument::new(10, 10);
        let params = RadialGradient::new()
            .with_center(25.0, 75.0)
            .with_radius(40.5)
            .with_spread_method("reflect");
        let grad = doc.radial_gradient("g", &[], &params);
        assert!(grad.starts_with(
            r#"<radialGradient id="g" cx="25%" cy="75%" fx="50%" fy="50%" fr="0%" r="40.5%" spreadMethod="reflect">"#
        ));
    }

    #[test]
    fn test_empty_container_is_self_closing() {
        let doc = SvgDocument::new(10, 10);
        assert_eq!(doc.g(&[], Attrs::new().with("id", "empty")), r#"<g id="empty" />"#);
        assert_eq!(doc.defs(&[], Attrs::new()), "<defs />");
    }

    #[test]
    fn test_symbol_and_pattern_put_id_first() {
        let doc = SvgDocument::new(10, 10);
        let child = vec![doc.rect(Attrs::new().with("width", 1), false)];
        let symbol = doc.symbol("s", &child, Attrs::new().with("viewBox", "0 0 1 1"));
        assert!(symbol.starts_with(r#"<symbol id="s" viewBox="0 0 1 1">"#));
        let pattern = doc.pattern("p", &child, Attrs::new().with("width", 2));
        assert!(pattern.starts_with(r#"<pattern id="p" width="2">"#));
        assert!(pattern.ends_with("</pattern>\n"));
    }

    #[test]
    fn test_text_and_tspan_match() {
        let doc = SvgDocument::new(10, 10);
        let attrs = Attrs::new().with("x", 1).with("y", 2);
        let text = doc.text("hello", attrs.clone());
        assert_eq!(text, "<text x=\"1\" y=\"2\">\nhello\n</text>\n");
        assert_eq!(doc.tspan("hello", attrs), text);
    }

    #[test]
    fn test_header_inline() {
        let doc = SvgDocument::new(200, 100);
        assert_eq!(
            doc.render(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"\n     xmlns:xlink=\"http://www.w3.org/1999/xlink\"\n     width=\"200\" height=\"100\"\n     viewPort=\"0 0 1000 1000\">\n\n</svg>"
        );
    }

    #[test]
    fn test_header_standalone() {
        let doc = SvgDocument::new(1, 1).with_inline(false);
        let svg = doc.render();
        assert!(svg.starts_with("<?xml version=\"1.0\"?>\n<!DOCTYPE svg PUBLIC"));
        assert!(svg.contains("svg11.dtd\">\n\n<svg xmlns"));
    }

    #[test]
    fn test_viewport_not_rendered() {
        let doc = SvgDocument::new(1, 1).with_viewport((0.0, 0.0, 10.0, 20.0));
        assert_eq!(doc.viewport(), (0.0, 0.0, 10.0, 20.0));
        assert!(doc.render().contains(r#"viewPort="0 0 1000 1000""#));
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut doc = SvgDocument::new(10, 10);
        doc.add("<a />");
        doc.add("<b />");
        let first = doc.render();
        assert_eq!(doc.render(), first);
        assert_eq!(doc.to_string(), first);
        assert_eq!(doc.drawing().len(), 2);
        assert!(first.ends_with("\n    <a />\n    <b />\n</svg>"));
    }
}
