//! Example: Laying out items built in code
//!
//! This example builds content items directly, without parsing JSON, lays
//! them out in pattern mode and prints the resulting rows.

use folio::{
    LayoutBuilder,
    config::{AppConfig, LayoutConfig, LayoutMode, StyleConfig},
    content::{ContentBlock, ContentItem, ImageBlock, TextBlock},
    geometry::Size,
};

fn photo(id: i64, width: f64, height: f64, rating: u8) -> ContentItem {
    ContentItem::new(
        id,
        ContentBlock::Image(
            ImageBlock::new()
                .with_image_size(Size::new(width, height))
                .with_rating(rating),
        ),
    )
    .with_order_index(id)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let items = vec![
        photo(1, 6000.0, 2000.0, 4),
        photo(2, 4000.0, 6000.0, 5),
        photo(3, 6000.0, 4000.0, 2),
        photo(4, 6000.0, 4000.0, 1),
        ContentItem::new(5, ContentBlock::Text(TextBlock::new())).with_order_index(5),
        photo(6, 6000.0, 4000.0, 4),
        photo(7, 4000.0, 6000.0, 2),
        photo(8, 6000.0, 4000.0, 3),
    ];

    let layout_config = LayoutConfig::default()
        .with_mode(LayoutMode::Pattern)
        .with_container_width(1000.0);
    let builder = LayoutBuilder::new(AppConfig::new(layout_config, StyleConfig::default()));

    let layout = builder.layout(&builder.prepare(items))?;

    for row in layout.rows() {
        let pattern = row.pattern().map_or("-", |pattern| pattern.name());
        println!("{pattern:<26} y={:>8.2} h={:>8.2}", row.y(), row.height());
        for placement in row.placements() {
            println!(
                "    {:<6} {:>3}  x={:>8.2} y={:>8.2} {:>8.2} x {:>8.2}",
                placement.kind().to_string(),
                placement.id().to_string(),
                placement.x(),
                placement.y(),
                placement.width(),
                placement.height(),
            );
        }
    }

    println!("\n{}", builder.render_json(&layout)?);
    Ok(())
}
