use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::modules::resume::application::domain::{PageGeometry, PlacedPage};
use crate::modules::resume::application::ports::outgoing::{DocumentWriter, DocumentWriterError};

const LAYER_NAME: &str = "Layer 1";

/// Writes placed pages with the built-in Helvetica pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintPdfWriter {
    geometry: PageGeometry,
}

impl PrintPdfWriter {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }
}

impl DocumentWriter for PrintPdfWriter {
    fn write(&self, pages: &[PlacedPage], title: &str) -> Result<Vec<u8>, DocumentWriterError> {
        let width = Mm(self.geometry.width_mm);
        let height = Mm(self.geometry.height_mm);

        let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DocumentWriterError::Font(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DocumentWriterError::Font(e.to_string()))?;

        for (index, page) in pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(width, height, LAYER_NAME)
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                for run in &line.runs {
                    let font: &IndirectFontRef = if run.bold { &bold } else { &regular };
                    layer.use_text(
                        run.text.as_str(),
                        line.size_pt,
                        Mm(run.x_mm),
                        Mm(line.y_mm),
                        font,
                    );
                }
            }
        }

        doc.save_to_bytes()
            .map_err(|e| DocumentWriterError::Serialization(e.to_string()))
    }
}
