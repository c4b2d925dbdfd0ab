//! Types for item lookup responses.

use serde::{Deserialize, Serialize};
use url::Url;

/// What an item lookup result refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Movie,
    TvShow,
    Actor,
}

impl ItemKind {
    /// Decode the single-character type marker used on the wire.
    pub fn from_marker(marker: &str) -> Option<ItemKind> {
        match marker {
            "m" => Some(ItemKind::Movie),
            "t" => Some(ItemKind::TvShow),
            "a" => Some(ItemKind::Actor),
            _ => None,
        }
    }
}

/// A movie, TV show or actor known to the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawItem")]
pub struct Item {
    pub kind: ItemKind,
    pub name: String,
    /// Site identifier (an IMDb id for movies and shows).
    pub id: String,
    /// Number of torrents linked to the item.
    pub count: i32,
    /// Poster image id, 0 when the item has no poster.
    pub image_id: i32,
    /// Release year.
    pub year: Option<i32>,
}

impl Item {
    /// Poster URLs for the item, if it has an image.
    pub fn poster(&self, base_url: &Url) -> Option<Poster> {
        if self.image_id <= 0 {
            return None;
        }
        Poster::new(base_url, self.image_id).ok()
    }
}

/// Wire shape of an item.
#[derive(Debug, Deserialize)]
struct RawItem {
    t: String,
    n: String,
    id: String,
    c: i32,
    #[serde(default)]
    i: i32,
    #[serde(default)]
    d: i32,
}

impl TryFrom<RawItem> for Item {
    type Error = String;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let kind = ItemKind::from_marker(&raw.t)
            .ok_or_else(|| format!("unknown item type {:?}", raw.t))?;

        Ok(Item {
            kind,
            name: raw.n,
            id: raw.id,
            count: raw.c,
            image_id: raw.i,
            year: (raw.d > 0).then_some(raw.d),
        })
    }
}

/// Poster image URLs in every size the site serves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Poster {
    pub blurry_cover: Url,
    pub large: Url,
    pub medium: Url,
    pub small: Url,
    pub tiny: Url,
}

impl Poster {
    /// Build the poster URLs for an image id. Sizes are selected by a fixed
    /// numeric suffix on the image name.
    pub fn new(base_url: &Url, image_id: i32) -> Result<Self, url::ParseError> {
        let image = |size: u8| base_url.join(&format!("img-{}-{}.jpg", image_id, size));

        Ok(Self {
            blurry_cover: image(10)?,
            large: image(0)?,
            medium: image(3)?,
            small: image(1)?,
            tiny: image(2)?,
        })
    }
}
