#![deny(warnings)]
#![deny(rust_2018_idioms)]

use catalog_ui::{
    error::Error,
    settings::Settings,
    startup::{App, init_tracer},
};
use tracing::{Instrument, Level, event, span};

#[snafu::report]
#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = Settings::new()?;

    init_tracer(settings.log_level);

    let app = App::build(&settings)?;

    event!(Level::INFO, "starting species catalog...");

    app.run()
        .instrument(span!(Level::TRACE, "species_catalog"))
        .await
}
