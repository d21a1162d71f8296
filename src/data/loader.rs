use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record};

/// Columns the source table must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Name", "Year", "Assigned Male", "Assigned Female", "Total"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("fetching {url}: server answered {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("opening {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is missing the '{0}' column")]
    MissingColumn(&'static str),
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Source location
// ---------------------------------------------------------------------------

/// Where the table lives: a remote static file or a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    Path(PathBuf),
}

/// `http://` and `https://` locations are URLs; anything else is a path.
impl From<&str> for DatasetSource {
    fn from(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DatasetSource::Url(location.to_string())
        } else {
            DatasetSource::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Url(url) => write!(f, "{url}"),
            DatasetSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the dataset once. Any failure is returned whole; there is no
/// partially loaded table and no retry.
pub fn load(source: &DatasetSource) -> Result<Dataset, LoadError> {
    match source {
        DatasetSource::Url(url) => load_url(url),
        DatasetSource::Path(path) => load_path(path),
    }
}

fn load_url(url: &str) -> Result<Dataset, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .build()
        .map_err(|source| LoadError::Http {
            url: url.to_string(),
            source,
        })?;
    fetch_csv(&client, url)
}

/// One GET of `url`; any non-2xx answer is an error.
fn fetch_csv(client: &reqwest::blocking::Client, url: &str) -> Result<Dataset, LoadError> {
    log::info!("Fetching dataset from {url}");
    let http_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().map_err(http_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }
    let body = response.bytes().map_err(http_err)?;
    from_reader(body.as_ref())
}

fn load_path(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(file)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse a CSV table with a header row. Extra columns are ignored.
pub fn from_reader<R: Read>(rdr: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let records = reader
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()?;

    let inconsistent = records.iter().filter(|r| !r.total_is_consistent()).count();
    if inconsistent > 0 {
        log::warn!(
            "{inconsistent} row(s) have a Total different from Assigned Male + Assigned Female; \
             showing the stored Total"
        );
    }

    Ok(Dataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;

    const SAMPLE: &str = "\
Name,Year,Assigned Male,Assigned Female,Total
Adam,2000,50,0,50
Adam,2001,60,0,60
Isla,2001,0,120,120
";

    #[test]
    fn parses_all_rows_in_order() {
        let ds = from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        let first = &ds.records()[0];
        assert_eq!(first.name, "Adam");
        assert_eq!(first.year, 2000);
        assert_eq!(first.assigned_male, 50);
        assert_eq!(first.assigned_female, 0);
        assert_eq!(first.total, 50);
        assert_eq!(ds.names().iter().collect::<Vec<_>>(), vec!["Adam", "Isla"]);
    }

    #[test]
    fn column_order_and_extra_columns_do_not_matter() {
        let csv = "\
Total,Name,Rank,Assigned Female,Year,Assigned Male
12,Morgan,7,9,2000,3
";
        let ds = from_reader(csv.as_bytes()).unwrap();
        let r = &ds.records()[0];
        assert_eq!((r.year, r.assigned_male, r.assigned_female, r.total), (2000, 3, 9, 12));
    }

    #[test]
    fn stored_total_is_kept_verbatim() {
        let csv = "\
Name,Year,Assigned Male,Assigned Female,Total
Alex,1999,5,5,42
";
        let ds = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.records()[0].total, 42);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "Name,Year,Assigned Male,Total\nAdam,2000,50,50\n";
        match from_reader(csv.as_bytes()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Assigned Female"),
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_row_fails_the_whole_load() {
        let csv = "\
Name,Year,Assigned Male,Assigned Female,Total
Adam,2000,50,0,50
Adam,two thousand,60,0,60
";
        let err = from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn negative_counts_are_rejected() {
        let csv = "\
Name,Year,Assigned Male,Assigned Female,Total
Adam,2000,-1,0,0
";
        assert!(from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn header_only_is_an_empty_dataset() {
        let csv = "Name,Year,Assigned Male,Assigned Female,Total\n";
        let ds = from_reader(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert!(ds.names().is_empty());
    }

    #[test]
    fn source_parsing_distinguishes_urls_from_paths() {
        let url = DatasetSource::from("https://example.org/names.csv");
        assert_eq!(url, DatasetSource::Url("https://example.org/names.csv".into()));

        let path = DatasetSource::from(" data/names.csv ");
        assert_eq!(path, DatasetSource::Path(PathBuf::from("data/names.csv")));
        assert_eq!(path.to_string(), "data/names.csv");
    }

    #[test]
    fn loads_from_a_local_path() {
        let path = std::env::temp_dir().join(format!("baby_names_{}.csv", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();

        let ds = load(&DatasetSource::Path(path.clone())).unwrap();
        assert_eq!(ds.len(), 3);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let path = std::env::temp_dir().join("baby_names_does_not_exist.csv");
        let err = load(&DatasetSource::Path(path)).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    // ---- HTTP source, served from a one-shot local listener ----

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        )
    }

    /// Answer a single request with `response`; returns the URL to fetch.
    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/Filtered%20Names%20Scotland.csv")
    }

    fn direct_client() -> reqwest::blocking::Client {
        reqwest::blocking::Client::builder().no_proxy().build().unwrap()
    }

    #[test]
    fn http_not_found_is_a_status_error() {
        let url = serve_once(http_response("404 Not Found", "missing"));
        match fetch_csv(&direct_client(), &url) {
            Err(LoadError::HttpStatus { status, url: failed }) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(failed, url);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn http_body_is_parsed_as_csv() {
        let url = serve_once(http_response("200 OK", SAMPLE));
        let ds = fetch_csv(&direct_client(), &url).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.names().iter().collect::<Vec<_>>(), vec!["Adam", "Isla"]);
    }

    #[test]
    fn http_malformed_body_fails_the_load() {
        let url = serve_once(http_response("200 OK", "Name,Year\nAdam,2000\n"));
        let err = fetch_csv(&direct_client(), &url).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Assigned Male")));
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch_csv(&direct_client(), &format!("http://{addr}/names.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Http { .. }));
    }
}
