//! Minimal paginated PDF table engine.
//!
//! Landscape letter pages, a title band per page, zebra-striped rows, and an
//! optional trailing signature-image column.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A decoded signature ready for embedding.
struct SignatureImage {
    name: Vec<u8>,
    id: Ref,
    width: u32,
    height: u32,
}

/// One table row: text cells plus an optional signature image index.
pub struct PdfRow {
    pub cells: Vec<String>,
    pub signature: Option<usize>,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    images: Vec<SignatureImage>,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        // Helvetica with WinAnsi so the Spanish labels render
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // landscape letter
            page_w: 792.0,
            page_h: 612.0,
            margin: 40.0,
            row_h: 20.0,

            next_id,
            font_id,
            images: Vec::new(),

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a signature image from its data URL. Returns an index for
    /// `PdfRow::signature`, or `None` when the blob cannot be decoded (the
    /// row then renders a textual placeholder instead).
    pub fn add_signature(&mut self, data_url: &str) -> Option<usize> {
        let b64 = data_url.split_once("base64,").map(|(_, rest)| rest)?;
        let bytes = BASE64.decode(b64.trim()).ok()?;
        let img = image::load_from_memory(&bytes).ok()?;
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(rgb.as_raw()).ok()?;
        let compressed = enc.finish().ok()?;

        let id = self.fresh_ref();
        let idx = self.images.len();
        let name = format!("Im{idx}").into_bytes();

        let mut xobj = self.pdf.image_xobject(id, &compressed);
        xobj.filter(Filter::FlateDecode);
        xobj.width(width as i32);
        xobj.height(height as i32);
        xobj.color_space().device_rgb();
        xobj.bits_per_component(8);
        xobj.finish();

        self.images.push(SignatureImage {
            name,
            id,
            width,
            height,
        });
        Some(idx)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        resources.fonts().pair(Name(b"F1"), self.font_id);
        let mut xobjects = resources.x_objects();
        for img in &self.images {
            xobjects.pair(Name(&img.name), img.id);
        }
        xobjects.finish();
        resources.finish();
        page.finish();

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(&win_ansi(text)));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_signature_cell(&self, content: &mut Content, x: f32, y: f32, w: f32, idx: usize) {
        let img = &self.images[idx];

        // fit into the cell, keeping the aspect ratio
        let max_w = w - 8.0;
        let max_h = self.row_h - 4.0;
        let scale = (max_w / img.width as f32).min(max_h / img.height as f32);
        let draw_w = img.width as f32 * scale;
        let draw_h = img.height as f32 * scale;

        content.save_state();
        content.transform([draw_w, 0.0, 0.0, draw_h, x + 4.0, y + 2.0]);
        content.x_object(Name(&img.name));
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        x_start: f32,
        row: &PdfRow,
        font_size: f32,
    ) {
        let mut x = x_start;

        for (i, text) in row.cells.iter().enumerate() {
            let w = col_widths[i];
            let is_signature_col = i == row.cells.len() - 1 && row.signature.is_some();
            if is_signature_col {
                if let Some(idx) = row.signature {
                    self.draw_signature_cell(content, x, y, w, idx);
                }
            } else {
                self.draw_text(content, x + 4.0, y + 5.0, font_size, text);
            }
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    fn compute_col_widths(&self, headers: &[&str], rows: &[PdfRow]) -> Vec<f32> {
        // widths track visible characters, not UTF-8 bytes
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * 6.5)
            .collect();

        for row in rows {
            for (i, cell) in row.cells.iter().enumerate() {
                let w = (cell.chars().count() as f32 * 6.2).max(widths[i]);
                widths[i] = w;
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Página {page}");
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 25.0,
            self.font_size,
            &pg,
        );
    }

    fn draw_table_header(&self, content: &mut Content, y: f32, col_widths: &[f32], headers: &[&str]) {
        content.save_state();
        content.set_fill_rgb(0.85, 0.87, 0.90);
        content.rect(self.margin, y, col_widths.iter().sum(), self.row_h);
        content.fill_nonzero();
        content.restore_state();

        let header_row = PdfRow {
            cells: headers.iter().map(|s| s.to_string()).collect(),
            signature: None,
        };
        self.draw_row(
            content,
            y,
            col_widths,
            self.margin,
            &header_row,
            self.header_font_size,
        );
    }

    /// Multi-page table with title; pages after the first repeat the header.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[PdfRow]) {
        let col_widths = self.compute_col_widths(headers, rows);

        if rows.is_empty() {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, 1);
            let y = self.page_h - self.margin - 30.0;
            self.draw_table_header(&mut content, y, &col_widths, headers);
            self.finalize_page(content);
            return;
        }

        let mut remaining: &[PdfRow] = rows;
        let mut page_idx = 1;

        while !remaining.is_empty() {
            let page_title = if page_idx == 1 {
                title.to_string()
            } else {
                format!("{title} (continuación)")
            };

            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, &page_title, page_idx);

            let mut y = self.page_h - self.margin - 30.0;
            self.draw_table_header(&mut content, y, &col_widths, headers);
            y -= self.row_h;

            let mut consumed = 0;

            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }

                // zebra stripe
                if i % 2 == 0 {
                    content.save_state();
                    content.set_fill_rgb(0.96, 0.96, 0.96);
                    content.rect(self.margin, y, col_widths.iter().sum(), self.row_h);
                    content.fill_nonzero();
                    content.restore_state();
                }

                self.draw_row(&mut content, y, &col_widths, self.margin, row, self.font_size);

                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Best-effort WinAnsi (Latin-1) encoding; characters outside it become '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            if cp <= 0xFF { cp as u8 } else { b'?' }
        })
        .collect()
}
