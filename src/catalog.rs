//! Movie catalog
//!
//! The fixed universe of IMDb identifiers that aggregate queries resolve.

/// Every title the aggregate queries know about, in catalog order.
pub const CATALOG: &[&str] = &[
    "tt1375666", "tt0110912", "tt0133093", "tt0361748", "tt0110413",
    "tt0103064", "tt0082971", "tt0095016", "tt1745960", "tt1877830",
    "tt2584384", "tt0109830", "tt0114709", "tt0088763", "tt0110357",
    "tt0120737", "tt0111161", "tt0118799", "tt0372784", "tt1517268",
    "tt0068646", "tt0120815", "tt1285016", "tt0454921", "tt2582802",
    "tt0268978", "tt0317248", "tt5052448", "tt7784604", "tt1457767",
    "tt1179904", "tt1396484", "tt6644200", "tt0070047", "tt1591095",
    "tt2267998", "tt0167404", "tt0816692", "tt1136608", "tt0499549",
    "tt2543164", "tt0470752", "tt1856101", "tt3659388", "tt11858890",
];

/// Returns the default catalog as owned identifiers.
pub fn default_catalog() -> Vec<String> {
    CATALOG.iter().map(|id| id.to_string()).collect()
}
