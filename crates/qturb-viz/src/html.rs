//! Standalone HTML and JSON output.

use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::error::VizResult;
use crate::figure::Figure;

// Page template, embedded at compile time
const FIGURE_HTML: &str = include_str!("../static/figure.html");

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the figure as a self-contained HTML page.
///
/// The page loads plotly.js from its CDN, draws the initial data and then
/// registers the animation frames.
pub fn to_html(figure: &Figure) -> VizResult<String> {
    // `</` would end the script element early.
    let json = figure.to_json()?.replace("</", "<\\/");
    Ok(FIGURE_HTML
        .replace("{{TITLE}}", &escape_html(&figure.layout.title.text))
        .replace("{{FIGURE_JSON}}", &json))
}

/// Write the figure as an HTML page.
#[instrument(skip(figure), fields(path = %path.as_ref().display()))]
pub fn write_html(figure: &Figure, path: impl AsRef<Path>) -> VizResult<()> {
    let html = to_html(figure)?;
    fs::write(path.as_ref(), html)?;
    info!("Wrote figure with {} frames", figure.frames.len());
    Ok(())
}

/// Write the raw figure JSON.
#[instrument(skip(figure), fields(path = %path.as_ref().display()))]
pub fn write_json(figure: &Figure, path: impl AsRef<Path>) -> VizResult<()> {
    fs::write(path.as_ref(), figure.to_json_pretty()?)?;
    info!("Wrote figure JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Axis, Layout, Scene, Title};

    fn empty_figure(title: &str) -> Figure {
        Figure {
            data: vec![],
            layout: Layout {
                title: Title::new(title),
                scene: Scene {
                    xaxis: Axis::titled("X Axis"),
                    yaxis: Axis::titled("Y Axis"),
                    zaxis: Axis::titled("Z Axis"),
                },
                updatemenus: vec![],
                sliders: vec![],
            },
            frames: vec![],
        }
    }

    #[test]
    fn test_template_placeholders_filled() {
        let html = to_html(&empty_figure("Turbulence")).unwrap();
        assert!(!html.contains("{{"));
        assert!(html.contains("<title>Turbulence</title>"));
        assert!(html.contains("Plotly.addFrames"));
        assert!(html.contains(r#""frames":[]"#));
    }

    #[test]
    fn test_script_close_is_escaped() {
        let html = to_html(&empty_figure("a </script> b")).unwrap();
        assert!(html.contains("a &lt;/script&gt; b"));
        assert!(html.contains(r"a <\/script> b"));
        assert_eq!(html.matches("</script>").count(), 3);
    }
}
