//! Reflowable DOCX backend.
//!
//! Builds a minimal WordprocessingML package by hand: three zip entries
//! ([Content_Types].xml, _rels/.rels, word/document.xml). Each classified
//! line becomes one paragraph whose run properties mirror the PDF backend's
//! styling, so the two formats disagree only in pagination, never in
//! classification.

use std::io::{Cursor, Write};

use zip::{write::SimpleFileOptions, ZipWriter};

use crate::errors::AppError;
use crate::render::classify::{ClassifiedLine, LineClass};
use crate::render::metrics::FontFamily;
use crate::templates::TemplateStyle;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

/// Escapes the five XML-reserved characters.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn font_name(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Helvetica => "Calibri",
        FontFamily::TimesRoman => "Times New Roman",
    }
}

fn accent_hex(rgb: (f32, f32, f32)) -> String {
    let (r, g, b) = rgb;
    format!(
        "{:02X}{:02X}{:02X}",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8
    )
}

/// One paragraph of WordprocessingML for a classified line.
///
/// Sizes are half-points (`w:sz`), spacing in twentieths of a point, indents
/// in twips.
fn paragraph_xml(line: &ClassifiedLine, font: &str, accent: &str) -> String {
    let text = xml_escape(&line.text);
    match line.class {
        LineClass::Blank => "<w:p/>".to_string(),
        LineClass::Name => format!(
            "<w:p><w:pPr><w:jc w:val=\"center\"/><w:spacing w:after=\"120\"/></w:pPr>\
             <w:r><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/><w:b/><w:sz w:val=\"36\"/><w:color w:val=\"{accent}\"/></w:rPr>\
             <w:t xml:space=\"preserve\">{text}</w:t></w:r></w:p>"
        ),
        LineClass::Contact => format!(
            "<w:p><w:pPr><w:jc w:val=\"center\"/><w:spacing w:after=\"240\"/>\
             <w:pBdr><w:bottom w:val=\"single\" w:sz=\"6\" w:space=\"1\" w:color=\"{accent}\"/></w:pBdr></w:pPr>\
             <w:r><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/><w:sz w:val=\"20\"/></w:rPr>\
             <w:t xml:space=\"preserve\">{text}</w:t></w:r></w:p>"
        ),
        LineClass::SectionHeader => format!(
            "<w:p><w:pPr><w:spacing w:before=\"240\" w:after=\"120\"/>\
             <w:pBdr><w:bottom w:val=\"single\" w:sz=\"3\" w:space=\"1\" w:color=\"{accent}\"/></w:pBdr></w:pPr>\
             <w:r><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/><w:b/><w:sz w:val=\"26\"/><w:color w:val=\"{accent}\"/></w:rPr>\
             <w:t xml:space=\"preserve\">{text}</w:t></w:r></w:p>"
        ),
        LineClass::Subheader => format!(
            "<w:p><w:pPr><w:spacing w:before=\"120\" w:after=\"60\"/></w:pPr>\
             <w:r><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/><w:b/><w:sz w:val=\"22\"/></w:rPr>\
             <w:t xml:space=\"preserve\">{text}</w:t></w:r></w:p>"
        ),
        LineClass::Bullet => format!(
            "<w:p><w:pPr><w:spacing w:before=\"60\" w:after=\"60\"/><w:ind w:left=\"360\"/></w:pPr>\
             <w:r><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/><w:sz w:val=\"22\"/></w:rPr>\
             <w:t xml:space=\"preserve\">• {text}</w:t></w:r></w:p>"
        ),
        LineClass::Body => format!(
            "<w:p><w:pPr><w:spacing w:before=\"100\" w:after=\"100\"/></w:pPr>\
             <w:r><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/><w:sz w:val=\"22\"/></w:rPr>\
             <w:t xml:space=\"preserve\">{text}</w:t></w:r></w:p>"
        ),
    }
}

fn document_xml(lines: &[ClassifiedLine], style: &TemplateStyle) -> String {
    let font = font_name(style.font);
    let accent = accent_hex(style.accent_rgb);

    let mut body = String::new();
    for line in lines {
        body.push_str(&paragraph_xml(line, font, &accent));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}\
         <w:sectPr><w:pgSz w:w=\"11906\" w:h=\"16838\"/>\
         <w:pgMar w:top=\"720\" w:right=\"720\" w:bottom=\"720\" w:left=\"720\"/></w:sectPr>\
         </w:body></w:document>"
    )
}

/// Serializes classified lines into a DOCX package.
pub fn render_docx(lines: &[ClassifiedLine], style: &TemplateStyle) -> Result<Vec<u8>, AppError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    let write_entry = |zip: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, data: &str| {
        zip.start_file(name, options)
            .map_err(|e| AppError::Render(e.to_string()))?;
        zip.write_all(data.as_bytes())
            .map_err(|e| AppError::Render(e.to_string()))
    };

    write_entry(&mut zip, "[Content_Types].xml", CONTENT_TYPES_XML)?;
    write_entry(&mut zip, "_rels/.rels", RELS_XML)?;
    write_entry(&mut zip, "word/document.xml", &document_xml(lines, style))?;

    let cursor = zip.finish().map_err(|e| AppError::Render(e.to_string()))?;
    Ok(cursor.into_inner())
}
