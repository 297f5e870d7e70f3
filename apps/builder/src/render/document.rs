use crate::theme::Theme;

/// Wraps preview markup in a standalone HTML5 document.
///
/// Used for the on-disk preview file and as the rasterizer input. Styling is
/// out of scope; the theme is only exposed as `data-theme` on `<body>`.
pub fn render_document(body: &str, theme: Theme) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>Resume Preview</title>\n</head>\n<body data-theme=\"{}\">\n\
<div id=\"resume-preview\">\n{}</div>\n</body>\n</html>\n",
        theme.as_str(),
        body
    )
}
