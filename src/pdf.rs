use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::model::{LayoutConfig, Page};

const MM_TO_PT: f32 = 72.0 / 25.4;
const FONT_SIZE: f32 = 7.0;
/// Frame stroke width, 0.2 mm.
const FRAME_WIDTH_PT: f32 = 0.2 * MM_TO_PT;

/// Serialize placed pages as a PDF document.
///
/// Label text is set in Helvetica-Bold, one of the base-14 fonts, so there is
/// nothing to embed or subset. Layout coordinates are millimetres from the
/// top-left corner; PDF user space is points from the bottom-left, converted
/// here and nowhere else.
pub fn render(pages: &[Page], config: &LayoutConfig) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let font_id = alloc();
    let page_ids: Vec<Ref> = (0..pages.len()).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..pages.len()).map(|_| alloc()).collect();

    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (i, page) in pages.iter().enumerate() {
        let mut content = Content::new();
        content.set_line_width(FRAME_WIDTH_PT);

        for cell in &page.cells {
            if config.draw_border {
                // PDF rects anchor at their bottom-left corner.
                content.rect(
                    cell.x * MM_TO_PT,
                    (config.page_height - cell.y - cell.height) * MM_TO_PT,
                    cell.width * MM_TO_PT,
                    cell.height * MM_TO_PT,
                );
                content.stroke();
            }

            for line in &cell.lines {
                let bytes = to_winansi_bytes(&line.text);
                if bytes.is_empty() {
                    continue;
                }
                content
                    .begin_text()
                    .set_font(Name(b"F1"), FONT_SIZE)
                    .next_line(line.x * MM_TO_PT, (config.page_height - line.y) * MM_TO_PT)
                    .show(Str(&bytes))
                    .end_text();
            }
        }

        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);

    let media_box = Rect::new(
        0.0,
        0.0,
        config.page_width * MM_TO_PT,
        config.page_height * MM_TO_PT,
    );
    for i in 0..pages.len() {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(media_box)
            .parent(pages_id)
            .contents(content_ids[i]);
        page.resources().fonts().pair(Name(b"F1"), font_id);
    }

    pdf.finish()
}

/// Narrow text to WinAnsi bytes; characters outside the encoding are dropped.
fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(|c| match c as u32 {
            0x0000..=0x007F => Some(c as u8),
            0x00A0..=0x00FF => Some(c as u8), // Latin-1 supplement maps directly
            0x20AC => Some(0x80),
            0x201A => Some(0x82),
            0x0192 => Some(0x83),
            0x201E => Some(0x84),
            0x2026 => Some(0x85),
            0x2020 => Some(0x86),
            0x2021 => Some(0x87),
            0x02C6 => Some(0x88),
            0x2030 => Some(0x89),
            0x0160 => Some(0x8A),
            0x2039 => Some(0x8B),
            0x0152 => Some(0x8C),
            0x017D => Some(0x8E),
            0x2018 => Some(0x91),
            0x2019 => Some(0x92),
            0x201C => Some(0x93),
            0x201D => Some(0x94),
            0x2022 => Some(0x95), // bullet
            0x2013 => Some(0x96),
            0x2014 => Some(0x97),
            0x02DC => Some(0x98),
            0x2122 => Some(0x99),
            0x0161 => Some(0x9A),
            0x203A => Some(0x9B),
            0x0153 => Some(0x9C),
            0x017E => Some(0x9E),
            0x0178 => Some(0x9F),
            _ => None,
        })
        .collect()
}
