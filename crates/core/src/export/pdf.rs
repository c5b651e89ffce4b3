//! PDF rendering backend for the favorites export.

use std::io::Cursor;

use printpdf::image_crate::codecs::jpeg::JpegDecoder;
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use tracing::debug;

use super::layout::{ExportLayout, RowSlot};
use super::ExportError;
use crate::favorites::FavoriteEntry;

const DPI: f32 = 300.0;
const MM_PER_INCH: f32 = 25.4;

/// Incremental PDF writer: one document, pages added as the layout
/// plan requires them.
pub struct PdfRenderer {
    doc: PdfDocumentReference,
    layers: Vec<PdfLayerReference>,
    layout: ExportLayout,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
}

impl PdfRenderer {
    pub fn new(layout: ExportLayout, title: &str) -> Result<Self, ExportError> {
        let (doc, page_idx, layer_idx) = PdfDocument::new(
            title,
            Mm(layout.page_width),
            Mm(layout.page_height),
            "content",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        let first_layer = doc.get_page(page_idx).get_layer(layer_idx);
        first_layer.use_text(
            title,
            18.0,
            Mm(layout.margin),
            Mm(layout.page_height - layout.margin - 6.0),
            &font_bold,
        );

        Ok(Self {
            doc,
            layers: vec![first_layer],
            layout,
            font,
            font_bold,
        })
    }

    fn layer_for(&mut self, page: usize) -> PdfLayerReference {
        while self.layers.len() <= page {
            let (page_idx, layer_idx) = self.doc.add_page(
                Mm(self.layout.page_width),
                Mm(self.layout.page_height),
                "content",
            );
            self.layers.push(self.doc.get_page(page_idx).get_layer(layer_idx));
        }
        self.layers[page].clone()
    }

    /// Draw one entry row at its planned slot. A decodable poster is
    /// scaled into the poster box; otherwise the row is text only.
    pub fn draw_row(
        &mut self,
        slot: &RowSlot,
        entry: &FavoriteEntry,
        poster_bytes: Option<&[u8]>,
    ) {
        let layout = self.layout.clone();
        let layer = self.layer_for(slot.page);

        // Layout cursors run top-down; PDF coordinates run bottom-up.
        let row_top = layout.page_height - slot.y;

        let mut text_x = layout.margin;
        if let Some(bytes) = poster_bytes {
            if let Some((image, width_px, height_px)) = decode_image(bytes) {
                let width_mm = width_px as f32 * MM_PER_INCH / DPI;
                let height_mm = height_px as f32 * MM_PER_INCH / DPI;
                let scale_x = layout.poster_width / width_mm;
                let scale_y = layout.poster_height / height_mm;
                image.add_to_layer(
                    layer.clone(),
                    ImageTransform {
                        translate_x: Some(Mm(layout.margin)),
                        translate_y: Some(Mm(row_top - layout.poster_height)),
                        scale_x: Some(scale_x),
                        scale_y: Some(scale_y),
                        ..Default::default()
                    },
                );
                text_x = layout.margin + layout.poster_width + 6.0;
            } else {
                debug!("Undecodable poster for entry {}, rendering text only", entry.id);
            }
        }

        layer.use_text(
            &entry.title,
            12.0,
            Mm(text_x),
            Mm(row_top - 6.0),
            &self.font_bold,
        );

        let rating = match entry.vote_average {
            Some(score) => format!("Rating: {:.1}", score),
            None => "Rating: n/a".to_string(),
        };
        layer.use_text(&rating, 10.0, Mm(text_x), Mm(row_top - 12.0), &self.font);
    }

    pub fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ExportError::Pdf(e.to_string()))
    }
}

/// Decode poster bytes, trying JPEG first, then PNG. Returns the image
/// with its pixel dimensions, or None if neither codec accepts it.
fn decode_image(bytes: &[u8]) -> Option<(Image, u32, u32)> {
    if let Ok(decoder) = JpegDecoder::new(Cursor::new(bytes)) {
        let (w, h) = printpdf::image_crate::ImageDecoder::dimensions(&decoder);
        if let Ok(image) = Image::try_from(decoder) {
            return Some((image, w, h));
        }
    }
    if let Ok(decoder) = PngDecoder::new(Cursor::new(bytes)) {
        let (w, h) = printpdf::image_crate::ImageDecoder::dimensions(&decoder);
        if let Ok(image) = Image::try_from(decoder) {
            return Some((image, w, h));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(id: i64, title: &str) -> FavoriteEntry {
        FavoriteEntry {
            id,
            tmdb_id: 1000 + id,
            title: title.to_string(),
            poster_path: None,
            vote_average: Some(7.5),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_text_only_rows() {
        let layout = ExportLayout::default();
        let slots = layout.plan(2);
        let mut renderer = PdfRenderer::new(layout, "My favorites").unwrap();

        renderer.draw_row(&slots[0], &entry(1, "First"), None);
        renderer.draw_row(&slots[1], &entry(2, "Second"), None);

        let bytes = renderer.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_garbage_poster_bytes_fall_back_to_text() {
        let layout = ExportLayout::default();
        let slots = layout.plan(1);
        let mut renderer = PdfRenderer::new(layout, "My favorites").unwrap();

        renderer.draw_row(&slots[0], &entry(1, "Broken"), Some(b"not an image"));

        let bytes = renderer.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_image(b"definitely not an image").is_none());
    }

    #[test]
    fn test_multi_page_render() {
        let layout = ExportLayout::default();
        let slots = layout.plan(20);
        assert!(slots.last().unwrap().page > 0);

        let mut renderer = PdfRenderer::new(layout, "My favorites").unwrap();
        for (i, slot) in slots.iter().enumerate() {
            renderer.draw_row(slot, &entry(i as i64 + 1, &format!("Movie {}", i + 1)), None);
        }

        let bytes = renderer.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
