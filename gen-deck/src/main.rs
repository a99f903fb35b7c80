//! gen-deck - Render the Solari Group pitch deck as a PDF

mod draw;
mod pages;
mod theme;

use anyhow::{Context, Result};
use clap::Parser;
use draw::{Canvas, Fonts, PAGE_H, PAGE_W};
use printpdf::{Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gen-deck")]
#[command(about = "Render the Solari Group pitch deck as a PDF", long_about = None)]
#[command(version)]
struct Args {
    /// Output PDF path
    #[arg(short, long, default_value = "pitch-deck.pdf")]
    output: PathBuf,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Solari Group - Pitch Deck 2026",
        Mm(PAGE_W as f32),
        Mm(PAGE_H as f32),
        "page-1",
    );
    let fonts = Fonts::load(&doc)?;

    // Fixed page order; each procedure draws onto its own fresh canvas
    let deck: &[fn(&Canvas)] = &[
        pages::cover,
        pages::about,
        pages::track_record,
        pages::platform,
        pages::ai_tools,
        pages::market,
        pages::technology,
        pages::next_steps,
    ];

    for (i, draw_page) in deck.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_W as f32), Mm(PAGE_H as f32), format!("page-{}", i + 1));
            doc.get_page(page).get_layer(layer)
        };
        draw_page(&Canvas::new(layer, fonts.clone()));
        if args.debug {
            eprintln!("Rendered page {}/{}", i + 1, deck.len());
        }
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| anyhow::anyhow!("Failed to write PDF: {e}"))?;

    let size = std::fs::metadata(&args.output)?.len();
    eprintln!(
        "Deck written: {} ({} pages, {:.0} KB)",
        args.output.display(),
        deck.len(),
        size as f64 / 1024.0
    );

    Ok(())
}
