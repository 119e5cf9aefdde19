use crate::RenderOptions;
use hexrender::{
    HexagonalRenderer, Layer, RectF, Region, SvgPainter, Workspace,
};
use log::debug;

/// Selection fill is see-through so the tiles underneath stay visible
const SELECTION_OPACITY: f64 = 0.5;

/// Render a whole map as an SVG document: tile layers first, then the grid
/// on top of them, then the selection on top of everything
pub fn draw_scene(
    renderer: &HexagonalRenderer,
    workspace: &Workspace,
    layers: &[Layer],
    selection: &Region,
    options: &RenderOptions,
) -> String {
    let mut painter = SvgPainter::new(options.exposed);
    if let Some(template) = &options.tile_images {
        painter = painter.with_tile_images(template.as_str());
    }
    painter.comment(format!("\n{:#?}\n", renderer.config()));

    let cells = draw_layers(renderer, &mut painter, layers, options.exposed);
    debug!("Drew {} cells", cells);

    if options.show_grid {
        painter.comment("grid");
        renderer.draw_grid(
            &mut painter,
            options.exposed,
            workspace,
            options.grid_color,
        );
    }

    if !selection.is_empty() {
        painter.comment("selection");
        painter.set_fill_opacity(SELECTION_OPACITY);
        renderer.draw_tile_selection(
            &mut painter,
            selection,
            workspace,
            options.selection_color,
            options.exposed,
        );
    }

    painter.into_document().to_string()
}

/// Draw each layer under its own comment, so the output is easy to pick
/// apart by hand
fn draw_layers(
    renderer: &HexagonalRenderer,
    painter: &mut SvgPainter,
    layers: &[Layer],
    exposed: RectF,
) -> usize {
    let mut cells = 0;
    for layer in layers {
        painter.comment(format!("layer: {}", layer.name()));
        cells += renderer.draw_layer(painter, layer, exposed);
    }
    cells
}
