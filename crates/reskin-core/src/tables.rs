//! Tag classification tables.
//!
//! Matching is exact and case-sensitive, so `Circle` is a component while
//! `circle` is an SVG primitive. The two tables share no entries; tags that
//! exist in both languages (`a`, `script`, `style`, `title`) are listed as
//! HTML only.

/// Standard HTML element names.
pub static HTML_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt", "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "ins", "kbd",
    "label", "legend", "li", "link", "main", "map", "mark", "math", "menu", "meta", "meter",
    "nav", "noscript", "object", "ol", "optgroup", "option", "output", "p", "picture", "pre",
    "progress", "q", "rp", "rt", "ruby", "s", "samp", "script", "search", "section", "select",
    "slot", "small", "source", "span", "strong", "style", "sub", "summary", "sup", "table",
    "tbody", "td", "template", "textarea", "tfoot", "th", "thead", "time", "title", "tr",
    "track", "u", "ul", "var", "video", "wbr",
];

/// SVG element names, in their canonical spelling.
pub static SVG_TAGS: &[&str] = &[
    "animate", "animateMotion", "animateTransform", "circle", "clipPath", "defs", "desc",
    "ellipse", "feBlend", "feColorMatrix", "feComponentTransfer", "feComposite",
    "feConvolveMatrix", "feDiffuseLighting", "feDisplacementMap", "feDistantLight",
    "feDropShadow", "feFlood", "feFuncA", "feFuncB", "feFuncG", "feFuncR", "feGaussianBlur",
    "feImage", "feMerge", "feMergeNode", "feMorphology", "feOffset", "fePointLight",
    "feSpecularLighting", "feSpotLight", "feTile", "feTurbulence", "filter", "foreignObject", "g",
    "image", "line", "linearGradient", "marker", "mask", "metadata", "mpath", "path", "pattern",
    "polygon", "polyline", "radialGradient", "rect", "set", "stop", "svg", "switch", "symbol",
    "text", "textPath", "tspan", "use", "view",
];

/// What kind of element a JSX tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagClass {
    Html,
    Svg,
    /// A user component, or any tag in neither table
    Custom,
}

impl TagClass {
    /// Native elements are the ones the browser knows about.
    pub fn is_native(self) -> bool {
        !matches!(self, Self::Custom)
    }
}

/// Classify a JSX tag name.
pub fn classify(tag: &str) -> TagClass {
    if HTML_TAGS.contains(&tag) {
        TagClass::Html
    } else if SVG_TAGS.contains(&tag) {
        TagClass::Svg
    } else {
        TagClass::Custom
    }
}
