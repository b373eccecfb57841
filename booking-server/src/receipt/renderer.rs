//! PDF receipt renderer

use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px,
};
use qrcode::{Color, QrCode};

use shared::Language;

use crate::db::models::Booking;

use super::{ReceiptError, ReceiptResult};

// A4 portrait
const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 20.0;

const TITLE_SIZE: f64 = 20.0;
const LABEL_SIZE: f64 = 11.0;
const ROW_STEP_MM: f64 = 9.0;

/// Pixels per QR module, plus a 4-module quiet zone on each side
const QR_SCALE: usize = 4;
const QR_QUIET: usize = 4;

/// Renders booking receipts as single-page PDFs
#[derive(Debug, Default)]
pub struct ReceiptRenderer;

impl ReceiptRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the receipt for a booking, in the booking's language
    pub fn render(&self, booking: &Booking) -> ReceiptResult<Vec<u8>> {
        let lang = booking.lang;
        let (doc, page, layer) = PdfDocument::new(
            format!("Booking {}", booking.reference),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "receipt",
        );

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReceiptError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReceiptError::Pdf(e.to_string()))?;

        let layer = doc.get_page(page).get_layer(layer);

        // Title
        layer.use_text(
            title(lang),
            TITLE_SIZE,
            Mm(MARGIN_MM),
            Mm(PAGE_HEIGHT_MM - 30.0),
            &bold,
        );

        // Detail table
        let mut y = PAGE_HEIGHT_MM - 50.0;
        for (label, value) in self.detail_rows(booking) {
            layer.use_text(label, LABEL_SIZE, Mm(MARGIN_MM), Mm(y), &bold);
            layer.use_text(value, LABEL_SIZE, Mm(MARGIN_MM + 55.0), Mm(y), &regular);
            y -= ROW_STEP_MM;
        }

        // QR code with the booking metadata
        let qr = qr_image(&qr_payload(booking))?;
        Image::from(qr).add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN_MM)),
                translate_y: Some(Mm(30.0)),
                dpi: Some(150.0),
                ..Default::default()
            },
        );

        // Footer with the reference, scannable by eye too
        layer.use_text(
            booking.reference.as_str(),
            LABEL_SIZE,
            Mm(MARGIN_MM),
            Mm(22.0),
            &regular,
        );

        doc.save_to_bytes()
            .map_err(|e| ReceiptError::Pdf(e.to_string()))
    }

    fn detail_rows(&self, booking: &Booking) -> Vec<(&'static str, String)> {
        let lang = booking.lang;
        vec![
            (label(lang, "reference"), booking.reference.clone()),
            (
                label(lang, "item"),
                booking.item_title.pick(lang).to_string(),
            ),
            (label(lang, "date"), booking.date.format("%d/%m/%Y").to_string()),
            (label(lang, "time"), booking.time_range.clone()),
            (
                label(lang, "participants"),
                booking.participants.to_string(),
            ),
            (label(lang, "name"), booking.customer_name.clone()),
            ("Email", booking.customer_email.clone()),
            (label(lang, "phone"), booking.customer_phone.clone()),
            (
                label(lang, "unit_price"),
                format!("€ {:.2}", booking.unit_price),
            ),
            (label(lang, "total"), format!("€ {:.2}", booking.total_price)),
        ]
    }
}

fn title(lang: Language) -> &'static str {
    match lang {
        Language::It => "Ricevuta di prenotazione",
        Language::En => "Booking receipt",
    }
}

fn label(lang: Language, key: &str) -> &'static str {
    match (lang, key) {
        (Language::It, "reference") => "Riferimento",
        (Language::En, "reference") => "Reference",
        (Language::It, "item") => "Esperienza",
        (Language::En, "item") => "Experience",
        (Language::It, "date") => "Data",
        (Language::En, "date") => "Date",
        (Language::It, "time") => "Orario",
        (Language::En, "time") => "Time",
        (Language::It, "participants") => "Partecipanti",
        (Language::En, "participants") => "Participants",
        (Language::It, "name") => "Nome",
        (Language::En, "name") => "Name",
        (Language::It, "phone") => "Telefono",
        (Language::En, "phone") => "Phone",
        (Language::It, "unit_price") => "Prezzo unitario",
        (Language::En, "unit_price") => "Unit price",
        (Language::It, "total") => "Totale",
        (Language::En, "total") => "Total",
        _ => "",
    }
}

/// Booking metadata encoded into the QR code
fn qr_payload(booking: &Booking) -> String {
    serde_json::json!({
        "reference": booking.reference,
        "item": booking.item.to_string(),
        "date": booking.date,
        "time_range": booking.time_range,
        "participants": booking.participants,
        "total": booking.total_price,
    })
    .to_string()
}

/// Encode `data` as a greyscale QR image object.
///
/// Built directly from the QR module matrix, so no raster-image crate is
/// involved; one byte per pixel, 0x00 dark / 0xFF light.
fn qr_image(data: &str) -> ReceiptResult<ImageXObject> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| ReceiptError::Qr(e.to_string()))?;
    let width = code.width();
    let colors = code.to_colors();

    let size = (width + 2 * QR_QUIET) * QR_SCALE;
    let mut pixels = vec![0xFFu8; size * size];

    for y in 0..width {
        for x in 0..width {
            if colors[y * width + x] == Color::Dark {
                for dy in 0..QR_SCALE {
                    let py = (QR_QUIET + y) * QR_SCALE + dy;
                    let row = py * size + (QR_QUIET + x) * QR_SCALE;
                    pixels[row..row + QR_SCALE].fill(0x00);
                }
            }
        }
    }

    Ok(ImageXObject {
        width: Px(size),
        height: Px(size),
        color_space: ColorSpace::Greyscale,
        bits_per_component: ColorBits::Bit8,
        interpolate: false,
        image_data: pixels,
        image_filter: None,
        clipping_bbox: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use shared::{BookableKind, LocalizedText, PaymentMethod, PaymentStatus};
    use surrealdb::RecordId;

    fn sample_booking(lang: Language) -> Booking {
        Booking {
            id: None,
            reference: "MF2K81QX-4H7ZT2".into(),
            item: RecordId::from_table_key("tour", "abc123"),
            kind: BookableKind::Tour,
            item_title: LocalizedText::new("Gole del Raganello", "Raganello Gorges"),
            customer_name: "Mario Rossi".into(),
            customer_email: "mario@example.com".into(),
            customer_phone: "+39 333 1234567".into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            time_range: "09:30 - 12:30".into(),
            participants: 2,
            unit_price: 35.0,
            total_price: 70.0,
            payment_method: PaymentMethod::OnSite,
            payment_status: PaymentStatus::Pending,
            lang,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn renders_a_pdf() {
        let bytes = ReceiptRenderer::new()
            .render(&sample_booking(Language::It))
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn renders_in_both_languages() {
        let it = ReceiptRenderer::new()
            .render(&sample_booking(Language::It))
            .unwrap();
        let en = ReceiptRenderer::new()
            .render(&sample_booking(Language::En))
            .unwrap();
        assert!(it.starts_with(b"%PDF"));
        assert!(en.starts_with(b"%PDF"));
    }

    #[test]
    fn qr_payload_carries_the_reference() {
        let payload = qr_payload(&sample_booking(Language::It));
        assert!(payload.contains("MF2K81QX-4H7ZT2"));
        assert!(payload.contains("tour:abc123"));
    }

    #[test]
    fn qr_image_has_square_pixel_buffer() {
        let img = qr_image("hello").unwrap();
        let Px(w) = img.width;
        let Px(h) = img.height;
        assert_eq!(w, h);
        assert_eq!(img.image_data.len(), w * h);
        // Both dark and light pixels present
        assert!(img.image_data.contains(&0x00));
        assert!(img.image_data.contains(&0xFF));
    }
}
