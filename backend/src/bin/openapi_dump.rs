//! Print the OpenAPI document as JSON.

use std::io::{self, Write};

use hbnb::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> io::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(io::Error::other)?;
    writeln!(io::stdout().lock(), "{json}")
}
