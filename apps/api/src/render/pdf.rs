//! Fixed-layout PDF backend.
//!
//! A4 portrait, millimetre coordinates, top margin at 20mm. The vertical
//! cursor runs down the page; any placed sub-line past 280mm triggers a page
//! break first, so wrapped paragraphs may straddle pages.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use crate::errors::AppError;
use crate::render::classify::{ClassifiedLine, LineClass};
use crate::render::metrics::{get_metrics, FontFamily, FontMetricTable};
use crate::templates::TemplateStyle;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 20.0;
const TOP_MARGIN_MM: f32 = 20.0;
const MAX_TEXT_WIDTH_MM: f32 = 170.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const PAGE_BREAK_AT_MM: f32 = 280.0;

const PT_TO_MM: f32 = 0.352_778;

fn builtin_fonts(family: FontFamily) -> (BuiltinFont, BuiltinFont) {
    match family {
        FontFamily::Helvetica => (BuiltinFont::Helvetica, BuiltinFont::HelveticaBold),
        FontFamily::TimesRoman => (BuiltinFont::TimesRoman, BuiltinFont::TimesBold),
    }
}

struct PdfCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    /// Distance from the top of the page, in mm.
    y: f32,
}

impl PdfCursor<'_> {
    /// Starts a new page when the cursor has run past the printable height.
    fn break_page_if_needed(&mut self) {
        if self.y > PAGE_BREAK_AT_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_MARGIN_MM;
        }
    }

    fn baseline(&self) -> Mm {
        Mm(PAGE_HEIGHT_MM - self.y)
    }

    fn text(&self, s: &str, size_pt: f32, x_mm: f32, font: &IndirectFontRef) {
        self.layer.use_text(s, size_pt, Mm(x_mm), self.baseline(), font);
    }

    fn rule(&self, x1_mm: f32, x2_mm: f32, y_offset_mm: f32, thickness: f32) {
        let y = Mm(PAGE_HEIGHT_MM - (self.y + y_offset_mm));
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1_mm), y), false),
                (Point::new(Mm(x2_mm), y), false),
            ],
            is_closed: false,
        });
    }
}

fn text_width_mm(metrics: &FontMetricTable, s: &str, size_pt: f32) -> f32 {
    f32::from(metrics.measure_pt(s, size_pt as f32)) * PT_TO_MM
}

fn wrap_to_mm(metrics: &FontMetricTable, s: &str, size_pt: f32, max_mm: f32) -> Vec<String> {
    metrics.wrap_line(s, size_pt as f32, (max_mm / PT_TO_MM) as f32)
}

/// Serializes classified lines into PDF bytes.
pub fn render_pdf(lines: &[ClassifiedLine], style: &TemplateStyle) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) = PdfDocument::new(
        "Resume",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let (regular_builtin, bold_builtin) = builtin_fonts(style.font);
    let regular = doc
        .add_builtin_font(regular_builtin)
        .map_err(|e| AppError::Render(e.to_string()))?;
    let bold = doc
        .add_builtin_font(bold_builtin)
        .map_err(|e| AppError::Render(e.to_string()))?;

    let metrics = get_metrics(style.font);
    let (ar, ag, ab) = style.accent_rgb;
    let accent = Color::Rgb(Rgb::new(f32::from(ar), f32::from(ag), f32::from(ab), None));
    let black = Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None));

    let mut cursor = PdfCursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: TOP_MARGIN_MM,
    };

    for line in lines {
        cursor.break_page_if_needed();

        match line.class {
            LineClass::Blank => {
                cursor.y += LINE_HEIGHT_MM / 2.0;
            }
            LineClass::Name => {
                cursor.layer.set_fill_color(accent.clone());
                let width = text_width_mm(metrics, &line.text, 20.0);
                let x = (PAGE_WIDTH_MM - width) / 2.0;
                cursor.text(&line.text, 20.0, x, &bold);
                cursor.y += LINE_HEIGHT_MM + 2.0;
            }
            LineClass::Contact => {
                cursor.layer.set_fill_color(black.clone());
                let width = text_width_mm(metrics, &line.text, 9.0);
                let x = (PAGE_WIDTH_MM - width) / 2.0;
                cursor.text(&line.text, 9.0, x, &regular);
                cursor.layer.set_outline_color(accent.clone());
                cursor.rule(LEFT_MARGIN_MM, PAGE_WIDTH_MM - LEFT_MARGIN_MM, 3.0, 0.5);
                cursor.y += LINE_HEIGHT_MM + 5.0;
            }
            LineClass::SectionHeader => {
                cursor.y += 2.0;
                cursor.break_page_if_needed();
                cursor.layer.set_fill_color(accent.clone());
                cursor.text(&line.text, 12.0, LEFT_MARGIN_MM, &bold);
                let width = text_width_mm(metrics, &line.text, 12.0);
                cursor.layer.set_outline_color(accent.clone());
                cursor.rule(LEFT_MARGIN_MM, LEFT_MARGIN_MM + width, 1.0, 0.3);
                cursor.y += LINE_HEIGHT_MM + 2.0;
            }
            LineClass::Subheader => {
                cursor.layer.set_fill_color(black.clone());
                for sub in wrap_to_mm(metrics, &line.text, 10.0, MAX_TEXT_WIDTH_MM) {
                    cursor.break_page_if_needed();
                    cursor.text(&sub, 10.0, LEFT_MARGIN_MM, &bold);
                    cursor.y += LINE_HEIGHT_MM;
                }
            }
            LineClass::Bullet => {
                cursor.layer.set_fill_color(black.clone());
                let bullet_text = format!("• {}", line.text);
                for sub in wrap_to_mm(metrics, &bullet_text, 10.0, MAX_TEXT_WIDTH_MM - 5.0) {
                    cursor.break_page_if_needed();
                    cursor.text(&sub, 10.0, LEFT_MARGIN_MM + 2.0, &regular);
                    cursor.y += LINE_HEIGHT_MM;
                }
            }
            LineClass::Body => {
                cursor.layer.set_fill_color(black.clone());
                for sub in wrap_to_mm(metrics, &line.text, 10.0, MAX_TEXT_WIDTH_MM) {
                    cursor.break_page_if_needed();
                    cursor.text(&sub, 10.0, LEFT_MARGIN_MM, &regular);
                    cursor.y += LINE_HEIGHT_MM;
                }
            }
        }
    }

    doc.save_to_bytes().map_err(|e| AppError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::classify::classify_document;
    use crate::templates::{default_template, get_template_by_id};

    fn classified(content: &str) -> Vec<ClassifiedLine> {
        classify_document(content, true)
    }

    const SAMPLE: &str = "JANE DOE\njane@doe.dev | +1 555 0100\n\nEXPERIENCE\nSenior Engineer | Acme | 2020-Present\n• Shipped a search service\nPlain body line";

    #[test]
    fn test_render_pdf_smoke() {
        let bytes = render_pdf(&classified(SAMPLE), &default_template().style).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_pdf_times_template() {
        let style = &get_template_by_id("template_2").unwrap().style;
        let bytes = render_pdf(&classified(SAMPLE), style).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_pdf_empty_document() {
        let bytes = render_pdf(&[], &default_template().style).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_pdf_long_document_paginates() {
        // ~120 body lines at 6mm per line needs at least 3 pages; the multi-
        // page path must not error.
        let mut content = String::from("JANE DOE\na | b\n");
        for i in 0..120 {
            content.push_str(&format!("Accomplishment line number {i} with several words\n"));
        }
        let bytes = render_pdf(&classified(&content), &default_template().style).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
