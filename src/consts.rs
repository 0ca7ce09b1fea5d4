/// SpaceX v4 launches query endpoint
pub(crate) const DEFAULT_API_URL: &str = "https://api.spacexdata.com/v4/launches/query";

/// Fields requested from the API for each launch
pub(crate) const SELECT_FIELDS: [&str; 5] = ["name", "date_utc", "success", "details", "flight_number"];

/// Launches requested per fetch. The server may enforce a stricter cap;
/// whatever list comes back is taken as-is, with no further pagination.
pub(crate) const DEFAULT_LIMIT: u32 = 500;

/// Global request timeout in seconds
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default JSON export target, relative to the working directory
pub(crate) const JSON_EXPORT_PATH: &str = "spacex_launches.json";

/// Default CSV export target, relative to the working directory
pub(crate) const CSV_EXPORT_PATH: &str = "spacex_launches.csv";

/// Fallback mission name when the API omits one
pub(crate) const UNTITLED: &str = "Untitled";

/// Fallback marker when `date_utc` is absent or empty
pub(crate) const DATE_UNKNOWN: &str = "date unknown";

/// Console details are cut at this many characters, with a trailing "..."
pub(crate) const DISPLAY_DETAILS_LIMIT: usize = 100;

/// CSV details are cut at this many characters, with no marker
pub(crate) const CSV_DETAILS_LIMIT: usize = 200;

/// Width of the `=`/`-` separator lines in console output
pub(crate) const SEPARATOR_WIDTH: usize = 70;
