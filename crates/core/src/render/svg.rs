use crate::{
    geom::{Line as GridLine, Polygon as TilePolygon, RectF},
    render::{
        painter::{Painter, Pen, PenStyle, TileDraw},
        unit::Color3,
    },
};
use std::mem;
use svg::{
    node::{
        element::{Group, Image, Line, Polygon, Rectangle},
        Comment,
    },
    Document, Node,
};

/// Tiles without an image get a flat color from this palette, picked by id
const TILE_PALETTE: [Color3; 6] = [
    Color3::new_int(173, 201, 115),
    Color3::new_int(23, 122, 0),
    Color3::new_int(214, 204, 107),
    Color3::new_int(99, 122, 99),
    Color3::new_int(32, 166, 178),
    Color3::new_int(191, 191, 191),
];

/// A painter that builds an SVG document. Lines, polygons and tiles are
/// appended in the order they're painted, so later draw calls end up on top.
#[derive(Debug)]
pub struct SvgPainter {
    document: Document,
    pen: Pen,
    brush: Option<Color3>,
    fill_opacity: f64,
    /// Image path for tiles, with `{id}` replaced by the tile id. If not
    /// set, tiles are drawn as colored rectangles.
    tile_image_template: Option<String>,
}

impl SvgPainter {
    /// Create an empty document covering the given area
    pub fn new(view: RectF) -> Self {
        let document = Document::new()
            .set("viewBox", (view.x, view.y, view.width, view.height))
            .set("width", view.width)
            .set("height", view.height)
            .set("shape-rendering", "crispEdges");
        Self {
            document,
            pen: Pen::NONE,
            brush: None,
            fill_opacity: 1.0,
            tile_image_template: None,
        }
    }

    /// Draw tiles as images, loaded from the given path template. `{id}` in
    /// the template is replaced with the (unflipped) tile id.
    pub fn with_tile_images(self, template: impl Into<String>) -> Self {
        Self {
            tile_image_template: Some(template.into()),
            ..self
        }
    }

    /// Opacity applied to filled polygons from here on, e.g. to keep the
    /// tiles under a selection visible
    pub fn set_fill_opacity(&mut self, opacity: f64) {
        self.fill_opacity = opacity.clamp(0.0, 1.0);
    }

    /// Add a comment to the document. Handy for marking where each layer
    /// starts.
    pub fn comment(&mut self, text: impl Into<String>) {
        self.append(Comment::new(text.into()));
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    fn append(&mut self, node: impl Node) {
        let document = mem::replace(&mut self.document, Document::new());
        self.document = document.add(node);
    }

    /// Stroke attributes for the current pen
    fn stroke<T: Node>(&self, mut node: T) -> T {
        match self.pen.style {
            PenStyle::None => node.assign("stroke", "none"),
            PenStyle::Solid | PenStyle::Dashed => {
                node.assign("stroke", self.pen.color.to_html());
                node.assign("stroke-width", self.pen.width);
                if self.pen.style == PenStyle::Dashed {
                    node.assign("stroke-dasharray", "2 2");
                }
            }
        }
        node
    }
}

impl Painter for SvgPainter {
    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn set_brush(&mut self, brush: Option<Color3>) {
        self.brush = brush;
    }

    fn draw_lines(&mut self, lines: &[GridLine]) {
        if lines.is_empty() || self.pen.style == PenStyle::None {
            return;
        }

        let mut group = self.stroke(Group::new());
        for line in lines {
            group = group.add(
                Line::new()
                    .set("x1", line.p1.x)
                    .set("y1", line.p1.y)
                    .set("x2", line.p2.x)
                    .set("y2", line.p2.y),
            );
        }
        self.append(group);
    }

    fn draw_convex_polygon(&mut self, polygon: &TilePolygon) {
        let points: Vec<(f64, f64)> =
            polygon.points().iter().map(|p| (p.x, p.y)).collect();
        let mut node = Polygon::new().set("points", points);
        match self.brush {
            Some(color) => {
                node.assign("fill", color.to_html());
                if self.fill_opacity < 1.0 {
                    node.assign("fill-opacity", self.fill_opacity);
                }
            }
            None => node.assign("fill", "none"),
        }
        let node = self.stroke(node);
        self.append(node);
    }

    fn draw_tile(&mut self, tile: &TileDraw) {
        let target = tile.target;
        let transform = flip_transform(tile);

        match &self.tile_image_template {
            Some(template) => {
                let href = template.replace("{id}", &tile.tile.to_string());
                let mut node = Image::new()
                    .set("href", href)
                    .set("x", target.x)
                    .set("y", target.y)
                    .set("width", target.width)
                    .set("height", target.height);
                if let Some(transform) = transform {
                    node.assign("transform", transform);
                }
                self.append(node);
            }
            None => {
                let color =
                    TILE_PALETTE[tile.tile as usize % TILE_PALETTE.len()];
                self.append(
                    Rectangle::new()
                        .set("x", target.x)
                        .set("y", target.y)
                        .set("width", target.width)
                        .set("height", target.height)
                        .set("fill", color.to_html()),
                );
            }
        }
    }
}

/// Build an SVG transform that applies the tile's flip flags around the
/// center of its target rect. The anti-diagonal flip happens first, then
/// the horizontal and vertical ones.
fn flip_transform(tile: &TileDraw) -> Option<String> {
    if !(tile.flip_h || tile.flip_v || tile.flip_d) {
        return None;
    }

    // Columns of the 2x2 linear part
    let (mut a, mut b, mut c, mut d) = if tile.flip_d {
        (0.0, 1.0, 1.0, 0.0)
    } else {
        (1.0, 0.0, 0.0, 1.0)
    };
    if tile.flip_h {
        a = -a;
        c = -c;
    }
    if tile.flip_v {
        b = -b;
        d = -d;
    }

    // Translate so the center of the target stays put
    let cx = tile.target.x + tile.target.width / 2.0;
    let cy = tile.target.y + tile.target.height / 2.0;
    let e = cx - (a * cx + c * cy);
    let f = cy - (b * cx + d * cy);
    // Adding zero turns -0 into 0, which keeps the output readable
    let [a, b, c, d, e, f] = [a, b, c, d, e, f].map(|v| v + 0.0);
    Some(format!("matrix({} {} {} {} {} {})", a, b, c, d, e, f))
}
