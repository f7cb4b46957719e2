//! Command-line front end for the marketplace browser.
//!
//! Renders one route (`/` or `/product/{id}`) as text or JSON. The catalog
//! comes from `--catalog`, `MARKETPLACE_CATALOG`, or the bundled data, in
//! that order; a catalog that fails validation aborts before anything renders.

use anyhow::{Context, Result, anyhow, bail};
use marketplace::{CatalogSource, Marketplace, Page, Route, init_tracing};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse(env::args_os().skip(1))?;
    let source = CatalogSource::resolve(cli.catalog.clone());
    let app = Marketplace::new(source.load()?);

    let route = Route::parse(&cli.route)
        .ok_or_else(|| anyhow!("no route matches '{}'", cli.route))?;
    let page = match (&route, cli.slide) {
        (Route::Home, Some(slide)) => {
            let mut home = app.home()?;
            if let Some(cursor) = home
                .carousel_mut()
                .and_then(|section| section.cursor_mut())
            {
                cursor.go_to(slide);
            }
            Page::Home(home.view())
        }
        (Route::Product(_), Some(_)) => bail!("--slide only applies to the home page"),
        (_, None) => app.render(&route)?,
    };
    debug!(route = %route, json = cli.json, "page ready");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", page.to_text());
    }
    Ok(())
}

#[derive(Debug)]
struct Cli {
    catalog: Option<PathBuf>,
    slide: Option<usize>,
    json: bool,
    route: String,
}

impl Cli {
    fn parse(args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut catalog = None;
        let mut slide = None;
        let mut json = false;
        let mut route = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg
                .into_string()
                .map_err(|_| anyhow!("Invalid UTF-8 in argument"))?;
            match arg.as_str() {
                "--catalog" | "-c" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("Missing path for --catalog"))?;
                    catalog = Some(PathBuf::from(value));
                }
                "--slide" | "-s" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("Missing number for --slide"))?;
                    let value = value
                        .to_str()
                        .ok_or_else(|| anyhow!("Invalid UTF-8 in --slide"))?;
                    // Slides are numbered from 1 on the command line.
                    let number: usize = value
                        .parse()
                        .with_context(|| format!("--slide expects a number, got '{value}'"))?;
                    if number == 0 {
                        bail!("--slide counts from 1");
                    }
                    slide = Some(number - 1);
                }
                "--json" => json = true,
                "--help" | "-h" => usage(0),
                other if other.starts_with('-') => {
                    eprintln!("Unknown option: {other}");
                    usage(1);
                }
                other => {
                    if route.replace(other.to_string()).is_some() {
                        bail!("Only one route may be given");
                    }
                }
            }
        }

        Ok(Self {
            catalog,
            slide,
            json,
            route: route.unwrap_or_else(|| "/".to_string()),
        })
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: marketplace [--catalog PATH] [--slide N] [--json] [ROUTE]\n\nRoutes:\n  /                 Home page: recommended carousel, popular and marketing grids.\n  /product/ID       Product detail, or a not-found page.\n\nOptions:\n  --catalog, -c     Catalog JSON file (default: $MARKETPLACE_CATALOG, then bundled data).\n  --slide, -s       Carousel slide to show on the home page, counting from 1.\n  --json            Print the page model as JSON instead of text.\n\nLogging is controlled by MARKETPLACE_LOG (e.g. MARKETPLACE_LOG=debug)."
    );
    std::process::exit(code);
}
