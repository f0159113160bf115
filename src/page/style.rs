//! Page stylesheet and layout modes

/// Page layout width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Content spans the full window width
    Wide,
    /// Content is kept in a narrow centred column
    Centered,
}

impl Layout {
    /// Parse a layout name from the manifest
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "wide" => Some(Layout::Wide),
            "centered" | "centred" => Some(Layout::Centered),
            _ => None,
        }
    }

    /// CSS class applied to the main container
    pub fn css_class(&self) -> &'static str {
        match self {
            Layout::Wide => "layout-wide",
            Layout::Centered => "layout-centered",
        }
    }
}

/// Stylesheet embedded in every generated page
pub const STYLESHEET: &str = r#"
body {
    background-color: #f8f9fb;
    color: #222;
    font-family: 'Poppins', sans-serif;
    margin: 0;
}
header {
    display: none;
}
main.layout-wide {
    padding: 2rem 4rem;
}
main.layout-centered {
    max-width: 46rem;
    margin: 0 auto;
    padding: 2rem 1rem;
}
h1, h2, h3, h4 {
    font-weight: 600;
}
.centered {
    text-align: center;
}
a {
    color: #FF5B6A !important;
    text-decoration: none;
    font-weight: 500;
}
a:hover {
    text-decoration: underline;
}
img {
    border-radius: 10px;
    box-shadow: 0 2px 10px rgba(0,0,0,0.05);
    margin-top: 0.8rem;
    margin-bottom: 1.2rem;
    max-width: 100%;
}
.columns {
    display: flex;
    gap: 1.5rem;
}
.column {
    flex: 1 1 0;
    min-width: 0;
}
figcaption, .caption {
    color: #888;
    font-size: 0.85rem;
    text-align: center;
}
.notice {
    background-color: #fff8e1;
    border-left: 4px solid #f0ad4e;
    padding: 0.75rem 1rem;
    margin: 0.5rem 0;
}
"#;
