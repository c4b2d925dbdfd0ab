//! Category bit set for the `category:` clause.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of content categories, one bit per category.
///
/// The empty set means "any category" and produces no clause.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Categories(u32);

impl Categories {
    pub const ANY: Categories = Categories(0);
    pub const MOVIES: Categories = Categories(1 << 0);
    pub const TV: Categories = Categories(1 << 1);
    pub const MUSIC: Categories = Categories(1 << 2);
    pub const GAMES: Categories = Categories(1 << 3);
    pub const APPS: Categories = Categories(1 << 4);
    pub const BOOKS: Categories = Categories(1 << 5);
    pub const ANIME: Categories = Categories(1 << 6);
    pub const OTHER: Categories = Categories(1 << 7);

    /// Flag names in declared bit order. Rendering walks this table.
    const NAMES: [(Categories, &'static str); 8] = [
        (Categories::MOVIES, "Movies"),
        (Categories::TV, "TV"),
        (Categories::MUSIC, "Music"),
        (Categories::GAMES, "Games"),
        (Categories::APPS, "Apps"),
        (Categories::BOOKS, "Books"),
        (Categories::ANIME, "Anime"),
        (Categories::OTHER, "Other"),
    ];

    /// Wrap raw bits without checking them against the defined flags.
    pub const fn from_bits_retain(bits: u32) -> Self {
        Categories(bits)
    }

    /// Every defined flag.
    pub const fn all() -> Self {
        Categories((Categories::OTHER.0 << 1) - 1)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn is_any(self) -> bool {
        self.0 == 0
    }

    /// True when no bit outside the eight defined flags is set.
    pub fn is_valid(self) -> bool {
        self.0 < Categories::OTHER.0 << 1
    }

    pub fn contains(self, other: Categories) -> bool {
        self.0 & other.0 == other.0
    }

    /// Names of the set flags, in declared bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }

    /// Look up a single flag by its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Categories> {
        Self::NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(flag, _)| *flag)
    }
}

impl BitOr for Categories {
    type Output = Categories;

    fn bitor(self, rhs: Categories) -> Categories {
        Categories(self.0 | rhs.0)
    }
}

impl BitOrAssign for Categories {
    fn bitor_assign(&mut self, rhs: Categories) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        f.write_str(&names.join(","))
    }
}
