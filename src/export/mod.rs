//! Map-tool exports of the matched pairs.

pub mod describe;
pub mod kml;
pub mod table;

pub const MY_MAPS_HELP: &str = "\
To import to Google Maps:
1. Go to https://www.google.com/mymaps
2. Create a new map
3. Click 'Import' and select the CSV file
4. Choose 'Latitude' and 'Longitude' as position columns
5. Choose 'Name' as title column";
