//! Element names by vocabulary, lowercase.

/// [HTML5 § 4 The elements of HTML](https://www.w3.org/TR/html5/semantics.html)
///
/// Everything outside the
/// [obsolete features](https://www.w3.org/TR/html5/obsolete.html) section.
pub const HTML_ELEMENTS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
    "colgroup", "command", "content", "data", "datalist", "dd", "del", "details", "dfn",
    "dialog", "div", "dl", "dt", "element", "em", "embed", "fieldset", "figcaption", "figure",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hr", "html", "i",
    "iframe", "image", "img", "input", "ins", "kbd", "keygen", "label", "legend", "li", "link",
    "main", "map", "mark", "menu", "menuitem", "meta", "meter", "nav", "noscript", "object",
    "ol", "optgroup", "option", "output", "p", "param", "picture", "pre", "progress", "q",
    "rp", "rt", "rtc", "ruby", "s", "samp", "script", "section", "select", "shadow", "small",
    "source", "span", "strong", "style", "sub", "summary", "sup", "table", "tbody", "td",
    "template", "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul",
    "var", "video", "wbr",
];

/// [SVG 1.1 Appendix A Element Index](https://www.w3.org/TR/SVG11/eltindex.html)
pub const SVG_ELEMENTS: &[&str] = &[
    "a", "altglyph", "altglyphdef", "altglyphitem", "animate", "animatecolor",
    "animatemotion", "animatetransform", "circle", "clippath", "color-profile", "cursor",
    "defs", "desc", "ellipse", "feblend", "fecolormatrix", "fecomponenttransfer",
    "fecomposite", "feconvolvematrix", "fediffuselighting", "fedisplacementmap",
    "fedistantlight", "feflood", "fefunca", "fefuncb", "fefuncg", "fefuncr", "fegaussianblur",
    "feimage", "femerge", "femergenode", "femorphology", "feoffset", "fepointlight",
    "fespecularlighting", "fespotlight", "fetile", "feturbulence", "filter", "font",
    "font-face", "font-face-format", "font-face-name", "font-face-src", "font-face-uri",
    "foreignobject", "g", "glyph", "glyphref", "hkern", "image", "line", "lineargradient",
    "marker", "mask", "metadata", "missing-glyph", "mpath", "path", "pattern", "polygon",
    "polyline", "radialgradient", "rect", "script", "set", "stop", "style", "svg", "switch",
    "symbol", "text", "textpath", "title", "tref", "tspan", "use", "view", "vkern",
];

/// [MathML 3 Appendix I Index of elements](https://www.w3.org/TR/MathML3/appendixi.html)
pub const MATHML_ELEMENTS: &[&str] = &[
    "annotation", "annotation-xml", "maction", "math", "menclose", "merror", "mfenced",
    "mfrac", "mglyph", "mi", "mlabeledtr", "mmultiscripts", "mn", "mo", "mover", "mpadded",
    "mphantom", "mroot", "mrow", "ms", "mspace", "msqrt", "mstyle", "msub", "msubsup", "msup",
    "mtable", "mtd", "mtext", "mtr", "munder", "munderover", "semantics",
];
