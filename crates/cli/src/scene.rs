use anyhow::Context;
use hexrender::{
    GroupLayer, ImageLayer, Layer, MapConfig, ObjectGroup, Point, Rect,
    Region, Size, TileLayer, Workspace,
};
use serde::Deserialize;

/// Everything needed to render a map: its geometry, its layers, and an
/// optional tile selection. Loaded from a JSON or TOML file.
#[derive(Clone, Debug, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub map: MapConfig,
    /// Map size, in tiles
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub layers: Vec<LayerSpec>,
    /// Selected tiles, as a list of tile rects
    #[serde(default)]
    pub selection: Vec<Rect>,
}

/// One layer in a scene file, tagged by `type`
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerSpec {
    Tile(TileLayerSpec),
    Group(GroupLayerSpec),
    Object(ObjectGroup),
    Image(ImageLayer),
}

#[derive(Clone, Debug, Deserialize)]
pub struct TileLayerSpec {
    pub name: String,
    /// Layer offset within the map, in tiles
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    /// Defaults to the map width
    pub width: Option<i32>,
    /// Defaults to the map height
    pub height: Option<i32>,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Row-major global tile ids, flip flags included. 0 is an empty cell.
    pub data: Vec<u32>,
    /// Tiles whose image doesn't match the map tile size
    #[serde(default)]
    pub images: Vec<TileImage>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct TileImage {
    pub tile: u32,
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GroupLayerSpec {
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub layers: Vec<LayerSpec>,
}

fn default_true() -> bool {
    true
}

impl Scene {
    pub fn workspace(&self) -> Workspace {
        Workspace::new(
            self.width,
            self.height,
            self.map.tile_width,
            self.map.tile_height,
        )
    }

    pub fn selection(&self) -> Region {
        self.selection.iter().copied().collect()
    }

    /// Build the layer tree. Fails if any tile layer's data doesn't match its
    /// size.
    pub fn layers(&self) -> anyhow::Result<Vec<Layer>> {
        self.layers
            .iter()
            .map(|spec| self.build_layer(spec))
            .collect()
    }

    fn build_layer(&self, spec: &LayerSpec) -> anyhow::Result<Layer> {
        Ok(match spec {
            LayerSpec::Tile(spec) => {
                let tile_size =
                    Size::new(self.map.tile_width, self.map.tile_height);
                let mut layer = TileLayer::from_gids(
                    spec.name.as_str(),
                    spec.width.unwrap_or(self.width),
                    spec.height.unwrap_or(self.height),
                    tile_size,
                    &spec.data,
                )?
                .with_position(Point::new(spec.x, spec.y))
                .with_visible(spec.visible);
                for image in &spec.images {
                    layer.set_image_size(
                        image.tile,
                        Size::new(image.width, image.height),
                    );
                }
                Layer::Tile(layer)
            }
            LayerSpec::Group(spec) => {
                let layers = spec
                    .layers
                    .iter()
                    .map(|child| self.build_layer(child))
                    .collect::<anyhow::Result<_>>()
                    .with_context(|| {
                        format!("error in group '{}'", spec.name)
                    })?;
                Layer::Group(GroupLayer {
                    name: spec.name.clone(),
                    visible: spec.visible,
                    layers,
                })
            }
            LayerSpec::Object(group) => Layer::Object(group.clone()),
            LayerSpec::Image(layer) => Layer::Image(layer.clone()),
        })
    }
}
