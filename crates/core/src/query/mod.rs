//! Query construction for the search endpoint.
//!
//! This module turns typed search filters into the site's query language
//! (e.g. `ubuntu -beta "desktop" >1GB after:2W category:Apps +lang:en`).

mod age;
mod builder;
mod categories;
pub mod identifiers;
mod language;
mod size;

pub use age::{Age, AgeDirection, TimeUnit};
pub use builder::SearchQuery;
pub use categories::Categories;
pub use language::{code_from_ordinal, ordinal_from_code, Language};
pub use size::{Size, SizeUnit};
