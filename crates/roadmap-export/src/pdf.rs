//! PDF rendering with the built-in Helvetica faces.

use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::info;

use crate::error::ExportError;
use crate::layout::{TextStyle, layout_paragraphs, paginate};
use crate::styles::DocumentStyles;

/// File name used when no export path is configured.
pub const DEFAULT_FILENAME: &str = "roadmap.pdf";

const DOCUMENT_TITLE: &str = "Learning Roadmap";
const LAYER_NAME: &str = "Layer 1";

fn mm(value: f32) -> Mm {
    Mm(value.into())
}

/// Render raw roadmap text to PDF bytes.
///
/// Each non-blank line becomes a wrapped paragraph; lines starting with
/// `Day` are set in bold. Characters outside Latin-1 are dropped.
pub fn render_pdf(raw: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let paragraphs = layout_paragraphs(raw, styles);
    let pages = paginate(&paragraphs, styles);

    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        mm(styles.page_width_mm),
        mm(styles.page_height_mm),
        LAYER_NAME,
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(
                mm(styles.page_width_mm),
                mm(styles.page_height_mm),
                LAYER_NAME,
            )
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            let font = match line.style {
                TextStyle::Regular => &regular,
                TextStyle::Bold => &bold,
            };
            layer.use_text(
                line.text.as_str(),
                styles.font_size_pt.into(),
                mm(line.x_mm),
                mm(line.baseline_mm),
                font,
            );
        }
    }

    let bytes = doc.save_to_bytes()?;
    info!(
        paragraphs = paragraphs.len(),
        pages = pages.len(),
        bytes = bytes.len(),
        "rendered roadmap PDF"
    );
    Ok(bytes)
}

/// Render raw roadmap text and write it to `path`, replacing any existing
/// file. Returns the bytes written.
pub fn export_pdf(
    raw: &str,
    path: &Path,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let bytes = render_pdf(raw, styles)?;
    std::fs::write(path, &bytes).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "roadmap PDF saved");
    Ok(bytes)
}
